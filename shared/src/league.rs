use serde::Deserialize;

use crate::constants::UNRANKED_LEAGUE_ID;

/// Icon set served for leagues, the medium size is missing for some of them.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LeagueIcon {
    pub tiny: String,
    pub small: String,
    pub medium: Option<String>,
}

/// Trophy league a player or clan member currently sits in.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: u64,
    pub name: String,
    #[serde(rename = "iconUrls")]
    pub icon: LeagueIcon,
}

impl League {
    pub fn is_unranked(&self) -> bool {
        self.id == UNRANKED_LEAGUE_ID
    }
}
