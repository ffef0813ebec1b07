use serde::Deserialize;

use crate::unit::Village;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub name: String,
    pub stars: u8,
    pub value: u64,
    pub target: u64,
    pub info: String,
    pub completion_info: Option<String>,
    pub village: Village,
}

impl Achievement {
    pub fn is_completed(&self) -> bool {
        self.stars == 3
    }
}
