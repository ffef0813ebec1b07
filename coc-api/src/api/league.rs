use async_trait::async_trait;
use clashtrack_shared::{CocApiResponse, FilterOptions, traits::api::LeagueApi};
use serde_json::Value;

use super::client::Client;

#[async_trait]
impl LeagueApi for Client {
    async fn leagues(&self, filters: Option<FilterOptions>) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] leagues");

        self.get("leagues", &filters).await
    }

    async fn league(&self, league_id: u64) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] league {}", league_id);

        self.get(&format!("leagues/{}", league_id), &()).await
    }

    async fn league_seasons(
        &self,
        league_id: u64,
        filters: Option<FilterOptions>,
    ) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] league_seasons {}", league_id);

        self.get(&format!("leagues/{}/seasons", league_id), &filters)
            .await
    }

    async fn league_ranking(
        &self,
        league_id: u64,
        season_id: &str,
        filters: Option<FilterOptions>,
    ) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] league_ranking {} {}", league_id, season_id);

        self.get(
            &format!("leagues/{}/seasons/{}", league_id, season_id),
            &filters,
        )
        .await
    }

    async fn war_leagues(&self, filters: Option<FilterOptions>) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] war_leagues");

        self.get("warleagues", &filters).await
    }

    async fn war_league(
        &self,
        league_id: u64,
        filters: Option<FilterOptions>,
    ) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] war_league {}", league_id);

        self.get(&format!("warleagues/{}", league_id), &filters)
            .await
    }
}
