//! Static lookup tables for names the API does not flag by itself.

use std::sync::LazyLock;

use crate::league::{League, LeagueIcon};

pub const UNRANKED_LEAGUE_ID: u64 = 29000000;

/// Used in place of a missing league, so a player always has one.
pub static UNRANKED_LEAGUE: LazyLock<League> = LazyLock::new(|| League {
    id: UNRANKED_LEAGUE_ID,
    name: "Unranked".to_string(),
    icon: LeagueIcon {
        tiny: "https://api-assets.clashofclans.com/leagues/36/e--YMyIexEQQhE4imLoJcwhYn6Uy8KqlgyY3_kFV6t4.png"
            .to_string(),
        small: "https://api-assets.clashofclans.com/leagues/72/e--YMyIexEQQhE4imLoJcwhYn6Uy8KqlgyY3_kFV6t4.png"
            .to_string(),
        medium: None,
    },
});

pub const HERO_PETS: &[&str] = &[
    "L.A.S.S.I",
    "Electro Owl",
    "Mighty Yak",
    "Unicorn",
    "Frosty",
    "Diggy",
    "Poison Lizard",
    "Phoenix",
    "Spirit Fox",
    "Angry Jelly",
    "Sneezy",
];

pub const SIEGE_MACHINES: &[&str] = &[
    "Wall Wrecker",
    "Battle Blimp",
    "Stone Slammer",
    "Siege Barracks",
    "Log Launcher",
    "Flame Flinger",
    "Battle Drill",
    "Troop Launcher",
];

pub const SUPER_TROOPS: &[&str] = &[
    "Super Barbarian",
    "Super Archer",
    "Super Giant",
    "Sneaky Goblin",
    "Super Wall Breaker",
    "Rocket Balloon",
    "Super Wizard",
    "Super Dragon",
    "Inferno Dragon",
    "Super Minion",
    "Super Valkyrie",
    "Super Witch",
    "Ice Hound",
    "Super Bowler",
    "Super Miner",
    "Super Hog Rider",
];

pub fn is_super_troop(name: &str) -> bool {
    SUPER_TROOPS.contains(&name)
}

pub fn is_hero_pet(name: &str) -> bool {
    HERO_PETS.contains(&name)
}

pub fn is_siege_machine(name: &str) -> bool {
    SIEGE_MACHINES.contains(&name)
}
