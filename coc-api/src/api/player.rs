use std::sync::Arc;

use async_trait::async_trait;
use clashtrack_shared::{
    Achievement, Badge, CocApiResponse, Label, League, LegendStatistics, Player, PlayerClan, Role,
    Unit, Village,
    constants::{UNRANKED_LEAGUE, is_super_troop},
    traits::api::{ClanApi, PlayerApi},
};
use serde::Deserialize;
use serde_json::Value;

use super::{client::Client, tag::parse_tag};

#[async_trait]
impl PlayerApi for Client {
    async fn player(&self, player_tag: &str) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] player {}", player_tag);

        self.get(&format!("players/{}", parse_tag(player_tag)), &())
            .await
    }

    async fn get_player(&self, player_tag: &str) -> CocApiResponse<Player> {
        tracing::trace!("[COC::CLIENT] get_player {}", player_tag);

        let dto: PlayerDto = self
            .fetch(&format!("players/{}", parse_tag(player_tag)), &())
            .await?;
        Ok(dto.into_player(Arc::new(self.clone())))
    }
}

/// Representation of the player data response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
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
    pub donations_received: u32,
    pub role: Option<Role>,
    pub war_preference: Option<String>,
    pub clan: Option<PlayerClanDto>,
    pub league: Option<League>,
    pub legend_statistics: Option<LegendStatistics>,
    pub achievements: Vec<Achievement>,
    pub labels: Vec<Label>,
    pub troops: Vec<UnitDto>,
    pub spells: Vec<UnitDto>,
    pub heroes: Vec<UnitDto>,
}

impl PlayerDto {
    pub fn into_player(self, client: Arc<dyn ClanApi>) -> Player {
        Player {
            tag: self.tag,
            name: self.name,
            town_hall_level: self.town_hall_level,
            town_hall_weapon_level: self.town_hall_weapon_level,
            exp_level: self.exp_level,
            trophies: self.trophies,
            best_trophies: self.best_trophies,
            war_stars: self.war_stars,
            attack_wins: self.attack_wins,
            defense_wins: self.defense_wins,
            builder_hall_level: self.builder_hall_level,
            versus_trophies: self.versus_trophies,
            best_versus_trophies: self.best_versus_trophies,
            versus_battle_wins: self.versus_battle_wins,
            donations: self.donations,
            received: self.donations_received,
            role: self.role,
            war_opted_in: self.war_preference.map(|pref| pref == "in"),
            clan: self.clan.map(|clan| clan.into_player_clan(client.clone())),
            league: self.league.unwrap_or_else(|| UNRANKED_LEAGUE.clone()),
            legend_statistics: self.legend_statistics,
            achievements: self.achievements,
            labels: self.labels,
            troops: self.troops.into_iter().map(Unit::from).collect(),
            spells: self.spells.into_iter().map(Unit::from).collect(),
            heroes: self.heroes.into_iter().map(Unit::from).collect(),
            client,
        }
    }
}

/// Representation of the clan summary embedded in a player.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerClanDto {
    pub tag: String,
    pub name: String,
    pub clan_level: u32,
    pub badge_urls: Badge,
}

impl PlayerClanDto {
    pub fn into_player_clan(self, client: Arc<dyn ClanApi>) -> PlayerClan {
        PlayerClan {
            tag: self.tag,
            name: self.name,
            level: self.clan_level,
            badge: self.badge_urls,
            client,
        }
    }
}

/// Representation of a troop, spell or hero entry.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UnitDto {
    pub name: String,
    pub level: u8,
    pub max_level: u8,
    pub village: Village,
    pub super_troop_is_active: Option<bool>,
}

impl From<UnitDto> for Unit {
    fn from(value: UnitDto) -> Self {
        Self {
            is_super_troop: is_super_troop(&value.name),
            is_active: value.super_troop_is_active.unwrap_or(false),
            name: value.name,
            level: value.level,
            max_level: value.max_level,
            village: value.village,
        }
    }
}
