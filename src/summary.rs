//! Plain-language summary of a team's type analysis.
//!
//! Tallies are grouped into tiers (major weaknesses, minor weaknesses,
//! strong resistances, immunities).  Each non-empty tier becomes one line,
//! with its categories sorted by descending count; ties keep canonical
//! category order.

use std::collections::BTreeMap;

use crate::{
    analysis::TypeAnalysis,
    category::Category,
    params::{MAJOR_WEAKNESS, STRONG_RESISTANCE},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SummaryLine {
    /// Categories at least [MAJOR_WEAKNESS] members are weak to
    MajorWeaknesses(Vec<(Category, usize)>),
    /// Categories fewer than [MAJOR_WEAKNESS] members are weak to
    MinorWeaknesses(Vec<Category>),
    /// Categories at least [STRONG_RESISTANCE] members resist
    StrongResistances(Vec<(Category, usize)>),
    Immunities(Vec<(Category, usize)>),
    /// Emitted alone when no other tier has anything to report
    Balanced,
}

impl SummaryLine {
    /// Renders the line, with counts shown out of `team_size`
    pub fn text(&self, team_size: usize) -> String {
        let counted = |entries: &[(Category, usize)]| {
            entries
                .iter()
                .map(|(c, n)| format!("{} ({}/{})", c, n, team_size))
                .collect::<Vec<_>>()
                .join(", ")
        };
        match self {
            Self::MajorWeaknesses(e) => format!("⚠  Major weaknesses: {}", counted(e)),
            Self::MinorWeaknesses(cs) => format!(
                "   Minor weaknesses: {}",
                cs.iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Self::StrongResistances(e) => {
                format!("✓  Strong resistances: {}", counted(e))
            }
            Self::Immunities(e) => format!("🛡  Immunities: {}", counted(e)),
            Self::Balanced => {
                "Balanced type coverage, no major gaps detected.".to_owned()
            }
        }
    }
}

/// Keeps the entries of `tally` whose count satisfies `keep`, sorted by
/// descending count
fn tier<F: Fn(usize) -> bool>(
    tally: &BTreeMap<Category, usize>,
    keep: F,
) -> Vec<(Category, usize)> {
    let mut out: Vec<(Category, usize)> = tally
        .iter()
        .map(|(c, n)| (*c, *n))
        .filter(|(_, n)| *n > 0 && keep(*n))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Converts an analysis into summary lines.  Returns exactly
/// `[SummaryLine::Balanced]` when no tier qualifies.
pub fn summarize(analysis: &TypeAnalysis) -> Vec<SummaryLine> {
    let mut lines = vec![];

    let major = tier(&analysis.weaknesses, |n| n >= MAJOR_WEAKNESS);
    if !major.is_empty() {
        lines.push(SummaryLine::MajorWeaknesses(major));
    }

    let minor = tier(&analysis.weaknesses, |n| n < MAJOR_WEAKNESS);
    if !minor.is_empty() {
        lines.push(SummaryLine::MinorWeaknesses(
            minor.into_iter().map(|(c, _)| c).collect(),
        ));
    }

    let resists = tier(&analysis.resistances, |n| n >= STRONG_RESISTANCE);
    if !resists.is_empty() {
        lines.push(SummaryLine::StrongResistances(resists));
    }

    let immune = tier(&analysis.immunities, |_| true);
    if !immune.is_empty() {
        lines.push(SummaryLine::Immunities(immune));
    }

    if lines.is_empty() {
        lines.push(SummaryLine::Balanced);
    }
    lines
}

/// Renders every summary line for a team of `team_size` members
pub fn summary_text(analysis: &TypeAnalysis, team_size: usize) -> Vec<String> {
    summarize(analysis)
        .iter()
        .map(|line| line.text(team_size))
        .collect()
}
