use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LabelIcon {
    pub small: String,
    pub medium: String,
}

/// Player or clan label chosen in game.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub id: u64,
    pub name: String,
    #[serde(rename = "iconUrls")]
    pub icon: LabelIcon,
}
