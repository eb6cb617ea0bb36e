use enum_iterator::IntoEnumIterator;
use serde::{Deserialize, Serialize};

/// The six base stats every creature carries
#[derive(
    Copy,
    Clone,
    Debug,
    Deserialize,
    Eq,
    Hash,
    IntoEnumIterator,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

pub const STAT_COUNT: usize = Stat::VARIANT_COUNT;

impl Stat {
    /// Identifier used by the catalog
    pub fn api_name(&self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::SpecialAttack => "special-attack",
            Self::SpecialDefense => "special-defense",
            Self::Speed => "speed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::SpecialAttack => "Sp. Atk",
            Self::SpecialDefense => "Sp. Def",
            Self::Speed => "Speed",
        }
    }

    pub fn from_api_name(name: &str) -> Option<Self> {
        Self::all().find(|s| s.api_name() == name)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::into_enum_iter()
    }
}

/// Base stat values, indexed by [Stat].  Stats the catalog did not report
/// stay at 0.
#[derive(Copy, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct BaseStats([u32; STAT_COUNT]);

impl BaseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all six stats
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, u32)> + '_ {
        Stat::all().map(move |s| (s, self[s]))
    }
}

impl std::ops::Index<Stat> for BaseStats {
    type Output = u32;
    fn index(&self, index: Stat) -> &Self::Output {
        &self.0[index as usize]
    }
}

impl std::ops::IndexMut<Stat> for BaseStats {
    fn index_mut(&mut self, index: Stat) -> &mut Self::Output {
        &mut self.0[index as usize]
    }
}

impl FromIterator<(Stat, u32)> for BaseStats {
    fn from_iter<I: IntoIterator<Item = (Stat, u32)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (s, v) in iter {
            out[s] = v;
        }
        out
    }
}
