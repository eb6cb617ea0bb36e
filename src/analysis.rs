use std::collections::BTreeMap;

use log::trace;

use crate::{
    category::{Category, CATEGORY_COUNT},
    team::Team,
};

/// How many team members are weak to, resist, or are immune to each
/// attacking category.  Categories nobody reacts to are left out.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TypeAnalysis {
    pub weaknesses: BTreeMap<Category, usize>,
    pub resistances: BTreeMap<Category, usize>,
    pub immunities: BTreeMap<Category, usize>,
}

impl TypeAnalysis {
    /// Tallies the defensive profile of every member of the team
    pub fn new(team: &Team) -> Self {
        let mut weak = [0; CATEGORY_COUNT];
        let mut resist = [0; CATEGORY_COUNT];
        let mut immune = [0; CATEGORY_COUNT];

        for c in team {
            for (attacking, m) in c.defenses().iter() {
                let i = attacking.index();
                if m > 1.0 {
                    weak[i] += 1;
                } else if m == 0.0 {
                    immune[i] += 1;
                } else if m < 1.0 {
                    resist[i] += 1;
                }
            }
            trace!("Tallied {} ({})", c.name(), c.categories_label());
        }

        Self {
            weaknesses: nonzero(&weak),
            resistances: nonzero(&resist),
            immunities: nonzero(&immune),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.weaknesses.is_empty()
            && self.resistances.is_empty()
            && self.immunities.is_empty()
    }
}

/// Drops categories with a zero tally
fn nonzero(counts: &[usize; CATEGORY_COUNT]) -> BTreeMap<Category, usize> {
    Category::all()
        .map(|c| (c, counts[c.index()]))
        .filter(|(_, n)| *n > 0)
        .collect()
}
