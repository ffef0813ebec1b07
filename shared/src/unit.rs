use serde::Deserialize;

/// Village a unit or achievement belongs to.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Village {
    Home,
    BuilderBase,
    ClanCapital,
}

/// A troop, spell or hero of a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub name: String,
    pub level: u8,
    pub max_level: u8,
    pub village: Village,
    /// Whether the unit is one of the boosted super troops.
    pub is_super_troop: bool,
    /// Whether a super troop is currently boosted. Always false for other units.
    pub is_active: bool,
}

pub type Troop = Unit;
pub type Spell = Unit;
pub type Hero = Unit;

impl Unit {
    pub fn is_max(&self) -> bool {
        self.level == self.max_level
    }

    pub fn is_home_base(&self) -> bool {
        self.village == Village::Home
    }

    pub fn is_builder_base(&self) -> bool {
        self.village == Village::BuilderBase
    }
}
