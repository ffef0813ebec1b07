use std::{
    fmt::{self, Display},
    sync::Arc,
};

use serde::Deserialize;

use crate::{
    achievement::Achievement,
    clan::{Badge, Clan},
    constants::{is_hero_pet, is_siege_machine},
    errors::CocApiResponse,
    label::Label,
    league::League,
    traits::api::ClanApi,
    unit::{Hero, Spell, Troop},
};

/// Rank of a member inside its clan.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    NotMember,
    Member,
    /// Sent as `admin` by the API.
    #[serde(alias = "admin")]
    Elder,
    CoLeader,
    Leader,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::NotMember => "notMember",
            Role::Member => "member",
            Role::Elder => "elder",
            Role::CoLeader => "coLeader",
            Role::Leader => "leader",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LegendSeason {
    pub id: Option<String>,
    pub rank: Option<u32>,
    pub trophies: u32,
}

/// Seasonal records of a player who reached the legend league at least once.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LegendStatistics {
    pub legend_trophies: u32,
    pub current_season: Option<LegendSeason>,
    pub previous_season: Option<LegendSeason>,
    pub best_season: Option<LegendSeason>,
    pub previous_versus_season: Option<LegendSeason>,
    pub best_versus_season: Option<LegendSeason>,
}

/// Summary of the clan a player is in, as embedded in the player payload.
#[derive(Clone, Debug)]
pub struct PlayerClan {
    pub tag: String,
    pub name: String,
    pub level: u32,
    pub badge: Badge,
    pub client: Arc<dyn ClanApi>,
}

impl PlayerClan {
    /// Fetch the full clan this summary points to.
    pub async fn fetch(&self) -> CocApiResponse<Clan> {
        self.client.get_clan(&self.tag).await
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub tag: String,
    pub name: String,
    pub town_hall_level: u8,
    pub town_hall_weapon_level: Option<u8>,
    pub exp_level: u32,
    pub trophies: u32,
    pub best_trophies: u32,
    pub war_stars: u32,
    pub attack_wins: u32,
    pub defense_wins: u32,
    pub builder_hall_level: Option<u8>,
    pub versus_trophies: Option<u32>,
    pub best_versus_trophies: Option<u32>,
    pub versus_battle_wins: Option<u32>,
    pub donations: u32,
    pub received: u32,
    /// `None` when the player is not in a clan.
    pub role: Option<Role>,
    /// `None` when the player is not in a clan.
    pub war_opted_in: Option<bool>,
    pub clan: Option<PlayerClan>,
    pub league: League,
    /// `None` if the player never reached the legend league.
    pub legend_statistics: Option<LegendStatistics>,
    pub achievements: Vec<Achievement>,
    pub labels: Vec<Label>,
    pub troops: Vec<Troop>,
    pub spells: Vec<Spell>,
    pub heroes: Vec<Hero>,
    pub client: Arc<dyn ClanApi>,
}

impl Player {
    /// Fetch the full clan of the player, `None` if clanless.
    pub async fn fetch_clan(&self) -> CocApiResponse<Option<Clan>> {
        match &self.clan {
            Some(clan) => self.client.get_clan(&clan.tag).await.map(Some),
            None => Ok(None),
        }
    }

    pub fn home_troops(&self) -> impl Iterator<Item = &Troop> {
        self.troops.iter().filter(|t| t.is_home_base())
    }

    pub fn builder_troops(&self) -> impl Iterator<Item = &Troop> {
        self.troops.iter().filter(|t| t.is_builder_base())
    }

    pub fn super_troops(&self) -> impl Iterator<Item = &Troop> {
        self.troops.iter().filter(|t| t.is_super_troop)
    }

    /// Super troops currently boosted.
    pub fn active_super_troops(&self) -> impl Iterator<Item = &Troop> {
        self.super_troops().filter(|t| t.is_active)
    }

    pub fn hero_pets(&self) -> impl Iterator<Item = &Troop> {
        self.troops
            .iter()
            .filter(|t| t.is_home_base() && is_hero_pet(&t.name))
    }

    pub fn siege_machines(&self) -> impl Iterator<Item = &Troop> {
        self.troops
            .iter()
            .filter(|t| t.is_home_base() && is_siege_machine(&t.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_role_reads_as_elder() {
        let roles: Vec<Role> =
            serde_json::from_str(r#"["member", "admin", "elder", "coLeader", "leader"]"#).unwrap();

        assert_eq!(
            roles,
            vec![Role::Member, Role::Elder, Role::Elder, Role::CoLeader, Role::Leader]
        );
    }

    #[test]
    fn role_display_uses_api_names_and_padding() {
        assert_eq!(Role::CoLeader.to_string(), "coLeader");
        assert_eq!(format!("{:<7}|", Role::Elder), "elder  |");
    }
}
