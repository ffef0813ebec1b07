use std::sync::Arc;

use async_trait::async_trait;
use clashtrack_shared::{
    Badge, Clan, ClanMember, ClanSearchOptions, CocApiResponse, FilterOptions, Label, League,
    Location, Player, Role,
    constants::UNRANKED_LEAGUE,
    traits::api::{ClanApi, PlayerApi},
};
use futures::future::join_all;
use serde::Deserialize;
use serde_json::Value;

use super::{client::Client, tag::parse_tag};

#[async_trait]
impl ClanApi for Client {
    async fn clans(&self, options: ClanSearchOptions) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] clans {:?}", options);

        self.get("clans", &options).await
    }

    async fn clan(&self, clan_tag: &str) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] clan {}", clan_tag);

        self.get(&format!("clans/{}", parse_tag(clan_tag)), &()).await
    }

    async fn get_clan(&self, clan_tag: &str) -> CocApiResponse<Clan> {
        tracing::trace!("[COC::CLIENT] get_clan {}", clan_tag);

        let dto: ClanDto = self
            .fetch(&format!("clans/{}", parse_tag(clan_tag)), &())
            .await?;
        Ok(dto.into_clan(Arc::new(self.clone())))
    }

    async fn clan_members(
        &self,
        clan_tag: &str,
        filters: Option<FilterOptions>,
    ) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] clan_members {}", clan_tag);

        self.get(&format!("clans/{}/members", parse_tag(clan_tag)), &filters)
            .await
    }

    async fn detailed_clan_members(
        &self,
        clan_tag: &str,
        filters: Option<FilterOptions>,
    ) -> CocApiResponse<Vec<CocApiResponse<Player>>> {
        tracing::trace!("[COC::CLIENT] detailed_clan_members {}", clan_tag);

        let roster: RosterDto = self
            .fetch(&format!("clans/{}/members", parse_tag(clan_tag)), &filters)
            .await?;
        tracing::debug!(
            "[COC::CLIENT] fetching {} members of {}",
            roster.items.len(),
            clan_tag
        );

        Ok(join_all(roster.items.iter().map(|member| self.get_player(&member.tag))).await)
    }

    async fn current_clan_war(&self, clan_tag: &str) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] current_clan_war {}", clan_tag);

        self.get(&format!("clans/{}/currentwar", parse_tag(clan_tag)), &())
            .await
    }

    async fn clan_war_log(
        &self,
        clan_tag: &str,
        filters: Option<FilterOptions>,
    ) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] clan_war_log {}", clan_tag);

        self.get(&format!("clans/{}/warlog", parse_tag(clan_tag)), &filters)
            .await
    }

    async fn clan_war_league(&self, clan_tag: &str) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] clan_war_league {}", clan_tag);

        self.get(
            &format!("clans/{}/currentwar/leaguegroup", parse_tag(clan_tag)),
            &(),
        )
        .await
    }

    async fn clan_war_league_war(&self, war_tag: &str) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] clan_war_league_war {}", war_tag);

        self.get(&format!("clanwarleagues/wars/{}", parse_tag(war_tag)), &())
            .await
    }
}

/// Members list response, only the tags are needed to fetch each player.
#[derive(Deserialize, Debug)]
struct RosterDto {
    items: Vec<RosterEntryDto>,
}

#[derive(Deserialize, Debug)]
struct RosterEntryDto {
    tag: String,
}

/// Representation of the clan data response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ClanDto {
    pub tag: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: Option<String>,
    pub location: Option<Location>,
    pub badge_urls: Badge,
    pub clan_level: u32,
    pub clan_points: u32,
    pub clan_versus_points: Option<u32>,
    pub required_trophies: u32,
    pub war_frequency: Option<String>,
    pub war_win_streak: u32,
    pub war_wins: u32,
    pub war_ties: Option<u32>,
    pub war_losses: Option<u32>,
    pub is_war_log_public: bool,
    pub members: u32,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub member_list: Vec<ClanMemberDto>,
}

impl ClanDto {
    pub fn into_clan(self, client: Arc<dyn ClanApi>) -> Clan {
        Clan {
            tag: self.tag,
            name: self.name,
            kind: self.kind,
            description: self.description,
            location: self.location,
            badge: self.badge_urls,
            level: self.clan_level,
            points: self.clan_points,
            versus_points: self.clan_versus_points,
            required_trophies: self.required_trophies,
            war_frequency: self.war_frequency,
            war_win_streak: self.war_win_streak,
            war_wins: self.war_wins,
            war_ties: self.war_ties,
            war_losses: self.war_losses,
            is_war_log_public: self.is_war_log_public,
            member_count: self.members,
            labels: self.labels,
            members: self.member_list.into_iter().map(ClanMember::from).collect(),
            client,
        }
    }
}

/// Representation of a clan roster entry.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ClanMemberDto {
    pub tag: String,
    pub name: String,
    pub role: Role,
    pub exp_level: u32,
    pub league: Option<League>,
    pub trophies: u32,
    pub versus_trophies: Option<u32>,
    pub clan_rank: u32,
    pub previous_clan_rank: u32,
    pub donations: u32,
    pub donations_received: u32,
}

impl From<ClanMemberDto> for ClanMember {
    fn from(value: ClanMemberDto) -> Self {
        Self {
            tag: value.tag,
            name: value.name,
            role: value.role,
            exp_level: value.exp_level,
            league: value.league.unwrap_or_else(|| UNRANKED_LEAGUE.clone()),
            trophies: value.trophies,
            versus_trophies: value.versus_trophies,
            clan_rank: value.clan_rank,
            previous_clan_rank: value.previous_clan_rank,
            donations: value.donations,
            received: value.donations_received,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::client::ClientOptions;

    #[test]
    fn clan_payload_maps_roster_and_defaults() {
        let raw = json!({
            "tag": "#2PP",
            "name": "The Clan",
            "type": "inviteOnly",
            "badgeUrls": { "small": "s", "medium": "m", "large": "l" },
            "clanLevel": 20,
            "clanPoints": 41000,
            "requiredTrophies": 2400,
            "warWinStreak": 3,
            "warWins": 510,
            "isWarLogPublic": true,
            "members": 2,
            "memberList": [
                {
                    "tag": "#8QU8J9LP", "name": "Chief", "role": "leader", "expLevel": 211,
                    "league": { "id": 29000022, "name": "Legend League",
                                "iconUrls": { "tiny": "t", "small": "s" } },
                    "trophies": 5300, "clanRank": 1, "previousClanRank": 1,
                    "donations": 10, "donationsReceived": 4
                },
                {
                    "tag": "#Q2V", "name": "Newbie", "role": "admin", "expLevel": 12,
                    "trophies": 300, "clanRank": 2, "previousClanRank": 2,
                    "donations": 0, "donationsReceived": 30
                }
            ]
        });

        let dto: ClanDto = serde_json::from_value(raw).unwrap();
        let clan = dto.into_clan(Arc::new(Client::new(ClientOptions::new("token"))));

        assert_eq!(clan.kind, "inviteOnly");
        assert_eq!(clan.member_count, 2);
        assert!(clan.labels.is_empty());
        assert!(clan.location.is_none());
        assert_eq!(clan.war_losses, None);

        let newbie = clan.member("#Q2V").expect("member should be listed");
        assert_eq!(newbie.role, Role::Elder);
        assert!(newbie.league.is_unranked());
        assert_eq!(newbie.received, 30);
        assert_eq!(clan.members[0].league.icon.medium, None);
    }
}
