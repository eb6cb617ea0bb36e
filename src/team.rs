use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    creature::Creature,
    error::{Error, Result},
    params::TEAM_SIZE,
    stats::{Stat, STAT_COUNT},
};

/// Up to six creatures, in the order they were added
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Team(Vec<Creature>);

impl Team {
    pub fn new() -> Self {
        Team(Vec::with_capacity(TEAM_SIZE))
    }

    /// Adds a creature to the back of the team, failing if it is full
    pub fn push(&mut self, creature: Creature) -> Result<()> {
        if self.is_full() {
            return Err(Error::TeamFull(TEAM_SIZE));
        }
        debug!("Adding {} at slot {}", creature.name(), self.0.len());
        self.0.push(creature);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= TEAM_SIZE
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Creature> {
        self.0.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|c| c.name()).collect()
    }

    /// Computes per-stat totals and averages across the whole team
    pub fn stats(&self) -> TeamStats {
        let mut totals = [0; STAT_COUNT];
        for c in &self.0 {
            for (s, v) in c.stats().iter() {
                totals[s as usize] += v;
            }
        }
        let count = self.0.len();
        let mut averages = [0.0; STAT_COUNT];
        if count > 0 {
            for (avg, total) in averages.iter_mut().zip(totals.iter()) {
                *avg = round1(*total as f64 / count as f64);
            }
        }
        TeamStats {
            totals,
            averages,
            bst: totals.iter().sum(),
        }
    }
}

impl std::ops::Index<usize> for Team {
    type Output = Creature;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Team {
    type Item = &'a Creature;
    type IntoIter = std::slice::Iter<'a, Creature>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Team-wide stat aggregates
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TeamStats {
    totals: [u32; STAT_COUNT],
    averages: [f64; STAT_COUNT],
    bst: u32,
}

impl TeamStats {
    pub fn total(&self, s: Stat) -> u32 {
        self.totals[s as usize]
    }

    /// Average value of a stat, rounded to one decimal; 0 for an empty team
    pub fn average(&self, s: Stat) -> f64 {
        self.averages[s as usize]
    }

    /// Base stat total: the sum of every stat of every member
    pub fn bst(&self) -> u32 {
        self.bst
    }
}

/// Rounds to one decimal place
pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
