use async_trait::async_trait;
use clashtrack_shared::{CocApiResponse, FilterOptions, traits::api::LocationApi};
use serde_json::Value;

use super::client::Client;

#[async_trait]
impl LocationApi for Client {
    async fn locations(&self, filters: Option<FilterOptions>) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] locations");

        self.get("locations", &filters).await
    }

    async fn location(
        &self,
        location_id: u32,
        filters: Option<FilterOptions>,
    ) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] location {}", location_id);

        self.get(&format!("locations/{}", location_id), &filters)
            .await
    }

    async fn clan_ranks(
        &self,
        location_id: u32,
        filters: Option<FilterOptions>,
    ) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] clan_ranks in {}", location_id);

        self.get(&format!("locations/{}/rankings/clans", location_id), &filters)
            .await
    }

    async fn player_ranks(
        &self,
        location_id: u32,
        filters: Option<FilterOptions>,
    ) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] player_ranks in {}", location_id);

        self.get(&format!("locations/{}/rankings/players", location_id), &filters)
            .await
    }

    async fn versus_clan_ranks(
        &self,
        location_id: u32,
        filters: Option<FilterOptions>,
    ) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] versus_clan_ranks in {}", location_id);

        self.get(
            &format!("locations/{}/rankings/clans-versus", location_id),
            &filters,
        )
        .await
    }

    async fn versus_player_ranks(
        &self,
        location_id: u32,
        filters: Option<FilterOptions>,
    ) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] versus_player_ranks in {}", location_id);

        self.get(
            &format!("locations/{}/rankings/players-versus", location_id),
            &filters,
        )
        .await
    }
}
