//! Terminal rendering.  Every panel is a small wrapper implementing
//! [std::fmt::Display], so callers can print it or format it into a string.

use std::fmt::{Display, Formatter, Result};

use crossterm::style::{Color, Stylize};

use crate::{
    compare::{Comparison, Winner},
    creature::Creature,
    params::{BAR_WIDTH, STAT_MAX},
    stats::Stat,
    summary::SummaryLine,
    team::TeamStats,
};

fn stat_color(value: f64) -> Color {
    if value >= 100.0 {
        Color::Green
    } else if value >= 60.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Number of filled cells for a stat value, out of [BAR_WIDTH]
pub fn bar_fill(value: f64) -> usize {
    let fill = (value / STAT_MAX as f64 * BAR_WIDTH as f64) as usize;
    fill.min(BAR_WIDTH)
}

/// A colored bar with a label, e.g. `HP       ████░░░░  45`
struct StatBar {
    stat: Stat,
    value: f64,
    precise: bool,
}

impl Display for StatBar {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let fill = bar_fill(self.value);
        let label = format!("{:<8}", self.stat.label());
        let value = if self.precise {
            format!("{:>5.1}", self.value)
        } else {
            format!("{:>3}", self.value as u32)
        };
        write!(
            f,
            "  {} {}{} {}",
            label.dim(),
            "█".repeat(fill).with(stat_color(self.value)),
            "░".repeat(BAR_WIDTH - fill).dim(),
            value.white()
        )
    }
}

pub struct Header<'a>(pub &'a str);

impl Display for Header<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let rule = "═".repeat(50);
        writeln!(f)?;
        writeln!(f, "{}", rule.as_str().cyan().bold())?;
        writeln!(f, "{}", format!("  {}", self.0).cyan().bold())?;
        write!(f, "{}", rule.cyan().bold())
    }
}

pub struct Section<'a>(pub &'a str);

impl Display for Section<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let pad = 45usize.saturating_sub(self.0.chars().count());
        writeln!(f)?;
        write!(
            f,
            "{}",
            format!("── {} {}", self.0, "─".repeat(pad)).yellow().bold()
        )
    }
}

/// A single creature's card: name, categories, abilities and stat bars
pub struct Card<'a>(pub &'a Creature);

impl Display for Card<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let c = self.0;
        let abilities = c
            .abilities()
            .iter()
            .map(|a| title_case(a))
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(f)?;
        writeln!(
            f,
            "  {}  {}",
            c.name().white().bold(),
            format!("#{}", c.id()).dim()
        )?;
        writeln!(f, "  Type:    {}", c.categories_label().cyan())?;
        writeln!(f, "  Ability: {}", abilities.dim())?;
        write!(f, "  {}", "─".repeat(35).dim())?;
        for (stat, value) in c.stats().iter() {
            writeln!(f)?;
            write!(
                f,
                "{}",
                StatBar {
                    stat,
                    value: value as f64,
                    precise: false,
                }
            )?;
        }
        Ok(())
    }
}

/// Team-wide average stats, followed by the team BST
pub struct StatsPanel<'a>(pub &'a TeamStats);

impl Display for StatsPanel<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        writeln!(f, "{}", Section("TEAM AVERAGE STATS"))?;
        for stat in Stat::all() {
            writeln!(
                f,
                "{}",
                StatBar {
                    stat,
                    value: self.0.average(stat),
                    precise: true,
                }
            )?;
        }
        writeln!(f)?;
        write!(
            f,
            "  {} {}",
            "Total BST:".bold(),
            self.0.bst().to_string().white()
        )
    }
}

pub struct TypePanel<'a> {
    pub lines: &'a [SummaryLine],
    pub team_size: usize,
}

impl Display for TypePanel<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", Section("TYPE ANALYSIS"))?;
        for line in self.lines {
            writeln!(f)?;
            write!(f, "  {}", line.text(self.team_size))?;
        }
        Ok(())
    }
}

pub struct ComparisonPanel<'a> {
    pub comparison: &'a Comparison,
    pub player_names: &'a [&'a str],
    pub opponent_names: &'a [&'a str],
}

impl Display for ComparisonPanel<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        writeln!(f, "{}", Section("BATTLE COMPARISON"))?;
        writeln!(f, "  {}  vs  {}", "YOUR TEAM".blue(), "OPPONENT".red())?;
        writeln!(f, "  {}", self.player_names.join(", ").dim())?;
        writeln!(f, "  {}", format!("vs {}", self.opponent_names.join(", ")).dim())?;
        writeln!(f)?;

        for row in &self.comparison.stats {
            let label = format!("{:<8}", row.stat.label());
            let player = format!("{:>5.1}", row.player);
            let opponent = format!("{:>5.1}", row.opponent);
            let (player, arrow, opponent) = match row.winner {
                Winner::Player => (player.green(), "◄".green(), opponent.dim()),
                Winner::Opponent => (player.dim(), "►".red(), opponent.red()),
                Winner::Tied => (player.dim(), "=".white(), opponent.dim()),
            };
            writeln!(f, "  {}  You: {}  {}  Opp: {}", label, player, arrow, opponent)?;
        }
        writeln!(f)?;

        let c = self.comparison;
        match c.overall_winner() {
            Winner::Player => write!(
                f,
                "  {}",
                format!(
                    "✓ Your team wins on total BST! ({} vs {})",
                    c.player_bst, c.opponent_bst
                )
                .green()
                .bold()
            ),
            _ => write!(
                f,
                "  {}",
                format!(
                    "✗ Opponent wins on total BST ({} vs {})",
                    c.opponent_bst, c.player_bst
                )
                .red()
                .bold()
            ),
        }
    }
}

/// `solar-power` becomes `Solar Power`
fn title_case(s: &str) -> String {
    s.split(|c| c == '-' || c == ' ')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
