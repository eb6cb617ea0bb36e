//! Team analyzer: build a team of up to six creatures from a remote catalog,
//! then report team stats, type weaknesses and resistances, and how the team
//! stacks up against a random opponent.

pub mod analysis;
pub mod builder;
pub mod catalog;
pub mod category;
pub mod chart;
pub mod compare;
pub mod config;
pub mod creature;
pub mod defense;
pub mod display;
pub mod error;
pub mod params;
pub mod rng;
pub mod stats;
pub mod summary;
pub mod team;

pub use analysis::TypeAnalysis;
pub use catalog::{Catalog, HttpCatalog};
pub use category::Category;
pub use compare::{Comparison, Winner};
pub use config::Config;
pub use creature::Creature;
pub use defense::Defenses;
pub use error::{Error, Result};
pub use stats::{BaseStats, Stat};
pub use summary::{summarize, SummaryLine};
pub use team::{Team, TeamStats};
