use async_trait::async_trait;
use clashtrack_shared::{CocApiResponse, FilterOptions, traits::api::LabelApi};
use serde_json::Value;

use super::client::Client;

#[async_trait]
impl LabelApi for Client {
    async fn player_labels(&self, filters: Option<FilterOptions>) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] player_labels");

        self.get("labels/players", &filters).await
    }

    async fn clan_labels(&self, filters: Option<FilterOptions>) -> CocApiResponse<Value> {
        tracing::trace!("[COC::CLIENT] clan_labels");

        self.get("labels/clans", &filters).await
    }
}
