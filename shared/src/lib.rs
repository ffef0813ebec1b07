//! Domain model and client capability traits shared by Clashtrack components.

pub mod achievement;
pub mod clan;
pub mod constants;
pub mod errors;
pub mod label;
pub mod league;
pub mod options;
pub mod player;
pub mod season;
pub mod traits;
pub mod unit;

pub use achievement::Achievement;
pub use clan::{Badge, Clan, ClanMember, Location};
pub use errors::{CocApiError, CocApiResponse};
pub use label::Label;
pub use league::League;
pub use options::{ClanSearchOptions, FilterOptions, QueryParams};
pub use player::{LegendSeason, LegendStatistics, Player, PlayerClan, Role};
pub use season::SeasonInfo;
pub use unit::{Hero, Spell, Troop, Unit, Village};
