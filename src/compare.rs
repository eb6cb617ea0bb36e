use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    stats::Stat,
    team::{round1, Team},
};

#[derive(Copy, Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Winner {
    Player,
    Opponent,
    Tied,
}

/// One row of the comparison: both teams' averages for a single stat
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StatComparison {
    pub stat: Stat,
    pub player: f64,
    pub opponent: f64,
    /// `player - opponent`, rounded to one decimal
    pub diff: f64,
    pub winner: Winner,
}

/// Side-by-side stat comparison of the player's team against an opponent
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    /// One row per [Stat], in declaration order
    pub stats: Vec<StatComparison>,
    pub player_bst: u32,
    pub opponent_bst: u32,
}

impl Comparison {
    pub fn new(player: &Team, opponent: &Team) -> Self {
        let p = player.stats();
        let o = opponent.stats();
        let stats = Stat::all()
            .map(|stat| {
                let diff = round1(p.average(stat) - o.average(stat));
                let winner = if diff > 0.0 {
                    Winner::Player
                } else if diff < 0.0 {
                    Winner::Opponent
                } else {
                    Winner::Tied
                };
                StatComparison {
                    stat,
                    player: p.average(stat),
                    opponent: o.average(stat),
                    diff,
                    winner,
                }
            })
            .collect();
        debug!("BST {} vs {}", p.bst(), o.bst());
        Self {
            stats,
            player_bst: p.bst(),
            opponent_bst: o.bst(),
        }
    }

    /// The team with the strictly higher BST wins; an even BST goes to the
    /// opponent
    pub fn overall_winner(&self) -> Winner {
        if self.player_bst > self.opponent_bst {
            Winner::Player
        } else {
            Winner::Opponent
        }
    }
}
