#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;

use team_analyzer::{
    catalog::{normalize_name, Catalog},
    BaseStats, Category, Creature, Error, Result, Stat,
};

/// In-memory catalog, keyed by lowercase name, in insertion order for
/// listings
pub struct MemoryCatalog {
    entries: Vec<Creature>,
    pub offline: bool,
    pub lookups: RefCell<Vec<String>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self {
            entries: vec![],
            offline: false,
            lookups: RefCell::new(vec![]),
        }
    }

    pub fn with(mut self, creature: Creature) -> Self {
        self.entries.push(creature);
        self
    }

    /// A small catalog of real-world-shaped entries
    pub fn starter() -> Self {
        Self::new()
            .with(creature("Bulbasaur", 1, &[Category::Grass, Category::Poison], [45, 49, 49, 65, 65, 45]))
            .with(creature("Charmander", 4, &[Category::Fire], [39, 52, 43, 60, 50, 65]))
            .with(creature("Squirtle", 7, &[Category::Water], [44, 48, 65, 50, 64, 43]))
            .with(creature("Pikachu", 25, &[Category::Electric], [35, 55, 40, 50, 50, 90]))
            .with(creature("Gengar", 94, &[Category::Ghost, Category::Poison], [60, 65, 60, 130, 75, 110]))
            .with(creature("Gyarados", 130, &[Category::Water, Category::Flying], [95, 125, 79, 60, 100, 81]))
            .with(creature("Snorlax", 143, &[Category::Normal], [160, 110, 65, 65, 110, 30]))
    }
}

impl Catalog for MemoryCatalog {
    fn fetch(&self, name: &str) -> Result<Creature> {
        let key = normalize_name(name);
        self.lookups.borrow_mut().push(key.clone());
        if self.offline {
            return Err(Error::Transport("connection refused".into()));
        }
        self.entries
            .iter()
            .find(|c| c.name().to_lowercase() == key)
            .cloned()
            .ok_or_else(|| Error::NotFound(name.trim().to_owned()))
    }

    fn list(&self, offset: usize, limit: usize) -> Result<Vec<String>> {
        if self.offline {
            return Err(Error::Transport("connection refused".into()));
        }
        Ok(self
            .entries
            .iter()
            .skip(offset)
            .take(limit)
            .map(|c| c.name().to_lowercase())
            .collect())
    }

    fn size(&self) -> usize {
        self.entries.len()
    }
}

pub fn creature(name: &str, id: u32, categories: &[Category], stats: [u32; 6]) -> Creature {
    let base: BaseStats = Stat::all().zip(stats).collect();
    Creature::new(name, id, categories.to_vec(), base).unwrap()
}

pub fn tallies(map: &BTreeMap<Category, usize>) -> Vec<(Category, usize)> {
    map.iter().map(|(c, n)| (*c, *n)).collect()
}
