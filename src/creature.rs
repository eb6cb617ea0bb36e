use crate::{
    category::Category,
    defense::Defenses,
    error::{Error, Result},
    stats::BaseStats,
};
use serde::{Deserialize, Serialize};

/// A [Creature] is a single catalog entry, parsed and ready to join a team
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Creature {
    name: String,
    id: u32,
    categories: Vec<Category>,
    stats: BaseStats,
    abilities: Vec<String>,
    sprite: Option<String>,
}

impl Creature {
    /// Builds a creature, checking that it has one or two distinct categories
    pub fn new(
        name: &str,
        id: u32,
        categories: Vec<Category>,
        stats: BaseStats,
    ) -> Result<Self> {
        if categories.is_empty() || categories.len() > 2 {
            return Err(Error::BadRecord(
                name.to_owned(),
                format!("expected 1 or 2 categories, got {}", categories.len()),
            ));
        }
        if categories.len() == 2 && categories[0] == categories[1] {
            return Err(Error::BadRecord(
                name.to_owned(),
                format!("category {} is listed twice", categories[0]),
            ));
        }
        Ok(Self {
            name: name.to_owned(),
            id,
            categories,
            stats,
            abilities: vec![],
            sprite: None,
        })
    }

    pub fn with_abilities(mut self, abilities: Vec<String>) -> Self {
        self.abilities = abilities;
        self
    }

    pub fn with_sprite(mut self, sprite: Option<String>) -> Self {
        self.sprite = sprite;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn stats(&self) -> &BaseStats {
        &self.stats
    }

    pub fn abilities(&self) -> &[String] {
        &self.abilities
    }

    pub fn sprite(&self) -> Option<&str> {
        self.sprite.as_deref()
    }

    /// Damage multipliers this creature takes from each attacking category
    pub fn defenses(&self) -> Defenses {
        Defenses::new(&self.categories)
    }

    /// Categories joined for display, e.g. `Grass / Poison`
    pub fn categories_label(&self) -> String {
        self.categories
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}
