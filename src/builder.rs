use std::io::{BufRead, Write};

use crossterm::style::Stylize;
use log::{info, warn};

use crate::{
    catalog::{random_names, Catalog},
    error::Result,
    params::TEAM_SIZE,
    rng::RangeRng,
    team::Team,
};

/// Fetches `name` and adds it to the team, reporting the outcome to `out`.
/// Lookup failures are reported and the entry is skipped; only I/O errors
/// on `out` are returned.
pub fn add_by_name<C: Catalog + ?Sized, W: Write>(
    catalog: &C,
    team: &mut Team,
    name: &str,
    out: &mut W,
) -> Result<bool> {
    match catalog.fetch(name).and_then(|c| {
        let label = c.categories_label();
        let name = c.name().to_owned();
        team.push(c).map(|_| (name, label))
    }) {
        Ok((name, label)) => {
            writeln!(out, "  ✓ Added {} [{}]", name.bold(), label)?;
            Ok(true)
        }
        Err(e) => {
            warn!("Skipping '{}': {}", name.trim(), e);
            writeln!(out, "  ✗ {}", e)?;
            Ok(false)
        }
    }
}

/// Prompts for up to [TEAM_SIZE] names on `input`.  An empty line finishes
/// the team once it has at least one member; end of input always finishes.
pub fn build_team<C: Catalog + ?Sized, R: BufRead, W: Write>(
    catalog: &C,
    label: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Team> {
    let mut team = Team::new();
    writeln!(
        out,
        "\n  {}",
        format!(
            "Enter up to {} creature names (press Enter with no input to stop)",
            TEAM_SIZE
        )
        .dim()
    )?;

    while !team.is_full() {
        write!(out, "  {} creature {}/{}: ", label, team.len() + 1, TEAM_SIZE)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let name = line.trim();
        if name.is_empty() {
            if team.is_empty() {
                writeln!(out, "  Please enter at least one creature!")?;
                continue;
            }
            break;
        }

        writeln!(out, "  Fetching {}...", name)?;
        add_by_name(catalog, &mut team, name, out)?;
    }
    info!("Built team of {}", team.len());
    Ok(team)
}

/// Builds a team from a list of names, e.g. given on the command line.
/// Names past the sixth are ignored.
pub fn team_from_names<C: Catalog + ?Sized, S: AsRef<str>, W: Write>(
    catalog: &C,
    names: &[S],
    out: &mut W,
) -> Result<Team> {
    let mut team = Team::new();
    for name in names {
        if team.is_full() {
            warn!("Team is full, ignoring '{}'", name.as_ref());
            continue;
        }
        add_by_name(catalog, &mut team, name.as_ref(), out)?;
    }
    Ok(team)
}

/// Builds an opposing team from random catalog entries.  Names are not
/// checked against the player's team, so duplicates are possible.
pub fn random_team<C: Catalog + ?Sized, R: RangeRng, W: Write>(
    catalog: &C,
    rng: &mut R,
    out: &mut W,
) -> Result<Team> {
    writeln!(out, "\n  {}", "Generating random opponent team...".dim())?;
    let mut team = Team::new();
    for name in random_names(catalog, TEAM_SIZE, rng) {
        match catalog.fetch(&name) {
            Ok(c) => {
                writeln!(out, "  ✓ {}", c.name())?;
                team.push(c)?;
            }
            Err(e) => warn!("Skipping random pick '{}': {}", name, e),
        }
    }
    Ok(team)
}
