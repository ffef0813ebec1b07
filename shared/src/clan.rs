use std::sync::Arc;

use serde::Deserialize;

use crate::{
    errors::CocApiResponse,
    label::Label,
    league::League,
    player::{Player, Role},
    traits::api::ClanApi,
};

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub small: String,
    pub medium: String,
    pub large: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: u32,
    pub name: String,
    pub is_country: bool,
    pub country_code: Option<String>,
}

/// Entry of a clan roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClanMember {
    pub tag: String,
    pub name: String,
    pub role: Role,
    pub exp_level: u32,
    pub league: League,
    pub trophies: u32,
    pub versus_trophies: Option<u32>,
    pub clan_rank: u32,
    pub previous_clan_rank: u32,
    pub donations: u32,
    pub received: u32,
}

#[derive(Clone, Debug)]
pub struct Clan {
    pub tag: String,
    pub name: String,
    /// Join policy (`open`, `inviteOnly`, `closed`).
    pub kind: String,
    pub description: Option<String>,
    pub location: Option<Location>,
    pub badge: Badge,
    pub level: u32,
    pub points: u32,
    pub versus_points: Option<u32>,
    pub required_trophies: u32,
    pub war_frequency: Option<String>,
    pub war_win_streak: u32,
    pub war_wins: u32,
    pub war_ties: Option<u32>,
    pub war_losses: Option<u32>,
    pub is_war_log_public: bool,
    pub member_count: u32,
    pub labels: Vec<Label>,
    pub members: Vec<ClanMember>,
    pub client: Arc<dyn ClanApi>,
}

impl Clan {
    /// Fetch the full player profile of every member.
    ///
    /// One outcome per member, in roster order.
    pub async fn fetch_members(&self) -> CocApiResponse<Vec<CocApiResponse<Player>>> {
        self.client.detailed_clan_members(&self.tag, None).await
    }

    pub fn member(&self, tag: &str) -> Option<&ClanMember> {
        self.members.iter().find(|m| m.tag == tag)
    }
}
