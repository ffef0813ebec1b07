pub mod api {
    use std::fmt::Debug;

    use async_trait::async_trait;
    use bytes::Bytes;
    use serde_json::Value;

    use crate::{
        clan::Clan,
        errors::CocApiResponse,
        options::{ClanSearchOptions, FilterOptions},
        player::Player,
    };

    /// Trait implemented by structures capable of performing raw HTTP requests to the Clash of Clans API.
    #[async_trait]
    pub trait ApiRequest: Send + Sync + Debug {
        /// GET an absolute URL and return the body of a successful response.
        async fn request(&self, url: String) -> CocApiResponse<Bytes>;
    }

    #[async_trait]
    pub trait PlayerApi: ApiRequest {
        async fn player(&self, player_tag: &str) -> CocApiResponse<Value>;

        async fn get_player(&self, player_tag: &str) -> CocApiResponse<Player>;
    }

    #[async_trait]
    pub trait ClanApi: ApiRequest {
        async fn clans(&self, options: ClanSearchOptions) -> CocApiResponse<Value>;

        async fn clan(&self, clan_tag: &str) -> CocApiResponse<Value>;

        async fn get_clan(&self, clan_tag: &str) -> CocApiResponse<Clan>;

        async fn clan_members(
            &self,
            clan_tag: &str,
            filters: Option<FilterOptions>,
        ) -> CocApiResponse<Value>;

        /// Fetch the roster then every member's profile concurrently.
        ///
        /// A failing member only fails its own entry.
        async fn detailed_clan_members(
            &self,
            clan_tag: &str,
            filters: Option<FilterOptions>,
        ) -> CocApiResponse<Vec<CocApiResponse<Player>>>;

        async fn current_clan_war(&self, clan_tag: &str) -> CocApiResponse<Value>;

        async fn clan_war_log(
            &self,
            clan_tag: &str,
            filters: Option<FilterOptions>,
        ) -> CocApiResponse<Value>;

        async fn clan_war_league(&self, clan_tag: &str) -> CocApiResponse<Value>;

        async fn clan_war_league_war(&self, war_tag: &str) -> CocApiResponse<Value>;
    }

    #[async_trait]
    pub trait LabelApi: ApiRequest {
        async fn player_labels(&self, filters: Option<FilterOptions>) -> CocApiResponse<Value>;

        async fn clan_labels(&self, filters: Option<FilterOptions>) -> CocApiResponse<Value>;
    }

    #[async_trait]
    pub trait LocationApi: ApiRequest {
        async fn locations(&self, filters: Option<FilterOptions>) -> CocApiResponse<Value>;

        async fn location(
            &self,
            location_id: u32,
            filters: Option<FilterOptions>,
        ) -> CocApiResponse<Value>;

        async fn clan_ranks(
            &self,
            location_id: u32,
            filters: Option<FilterOptions>,
        ) -> CocApiResponse<Value>;

        async fn player_ranks(
            &self,
            location_id: u32,
            filters: Option<FilterOptions>,
        ) -> CocApiResponse<Value>;

        async fn versus_clan_ranks(
            &self,
            location_id: u32,
            filters: Option<FilterOptions>,
        ) -> CocApiResponse<Value>;

        async fn versus_player_ranks(
            &self,
            location_id: u32,
            filters: Option<FilterOptions>,
        ) -> CocApiResponse<Value>;
    }

    #[async_trait]
    pub trait LeagueApi: ApiRequest {
        async fn leagues(&self, filters: Option<FilterOptions>) -> CocApiResponse<Value>;

        async fn league(&self, league_id: u64) -> CocApiResponse<Value>;

        async fn league_seasons(
            &self,
            league_id: u64,
            filters: Option<FilterOptions>,
        ) -> CocApiResponse<Value>;

        async fn league_ranking(
            &self,
            league_id: u64,
            season_id: &str,
            filters: Option<FilterOptions>,
        ) -> CocApiResponse<Value>;

        async fn war_leagues(&self, filters: Option<FilterOptions>) -> CocApiResponse<Value>;

        async fn war_league(
            &self,
            league_id: u64,
            filters: Option<FilterOptions>,
        ) -> CocApiResponse<Value>;
    }

    /// Every endpoint family the client exposes.
    pub trait CocApiFull: PlayerApi + ClanApi + LabelApi + LocationApi + LeagueApi {}
}
