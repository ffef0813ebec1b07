use std::env;

use clashtrack_coc_api::Client;
use clashtrack_shared::{
    FilterOptions,
    traits::api::{ClanApi, LocationApi, PlayerApi},
};
use dotenv::dotenv;

fn client() -> Client {
    dotenv().ok();
    let token = env::var("COC_API_TOKEN").expect("COC_API_TOKEN not set");
    Client::with_token(token)
}

#[tokio::test]
#[ignore = "API token required"]
async fn get_player_returns_expected_player() {
    let api = client();

    let player = api.get_player("#9YQJGUUQ").await.unwrap();

    assert_eq!(player.tag, "#9YQJGUUQ");
    assert!(player.town_hall_level > 0);
}

#[tokio::test]
#[ignore = "API token required"]
async fn get_clan_and_detailed_members_work() {
    let api = client();

    let clan = api.get_clan("#2PP").await.unwrap();
    assert_eq!(clan.tag, "#2PP");

    let members = clan.fetch_members().await.unwrap();
    assert!(members.iter().any(|m| m.is_ok()));
}

#[tokio::test]
#[ignore = "API token required"]
async fn locations_respect_limit() {
    let api = client();

    let locations = api
        .locations(Some(FilterOptions::with_limit(2)))
        .await
        .unwrap();

    assert_eq!(locations["items"].as_array().map(Vec::len), Some(2));
}
