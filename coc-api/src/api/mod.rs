mod clan;
mod label;
mod league;
mod location;
mod player;

pub mod client;
pub mod metrics;
pub mod tag;
pub mod types {
    pub use super::clan::{ClanDto, ClanMemberDto};
    pub use super::player::{PlayerClanDto, PlayerDto, UnitDto};
}

pub use client::{Client, ClientOptions};

use clashtrack_shared::traits::api::CocApiFull;

impl CocApiFull for Client {}
