use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use crossterm::style::Stylize;
use log::{info, LevelFilter};

use team_analyzer::{
    builder::{build_team, random_team, team_from_names},
    display::{Card, ComparisonPanel, Header, Section, StatsPanel, TypePanel},
    rng::seeded,
    summarize, Comparison, Config, Error, HttpCatalog, Result, Team, TypeAnalysis,
};

#[derive(Parser, Debug)]
#[command(version, about = "Build a creature team and analyze its type coverage")]
struct Args {
    /// Creature names; prompts interactively when none are given
    names: Vec<String>,

    /// Compare against a random opponent without asking
    #[arg(long, conflicts_with = "no_opponent")]
    opponent: bool,

    /// Skip the random opponent without asking
    #[arg(long)]
    no_opponent: bool,

    /// Seed for the random opponent, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a RON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn print_team(team: &Team, out: &mut impl Write) -> Result<()> {
    for c in team {
        writeln!(out, "{}", Card(c))?;
    }
    Ok(())
}

/// Asks a yes/no question; anything but `y` is a no
fn ask(question: &str, input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
    write!(out, "\n  {} ", question.yellow())?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

fn run(args: Args) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let catalog = HttpCatalog::new(&config)?;
    info!("Using catalog at {}", config.base_url);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", Header("CREATURE TEAM BUILDER & BATTLE ANALYZER"))?;
    writeln!(out, "\n  {}", format!("Catalog: {}", config.base_url).dim())?;

    writeln!(out, "{}", Section("BUILD YOUR TEAM"))?;
    let team = if args.names.is_empty() {
        build_team(&catalog, "Your", &mut input, &mut out)?
    } else {
        team_from_names(&catalog, &args.names, &mut out)?
    };
    if team.is_empty() {
        return Err(Error::EmptyTeam);
    }

    writeln!(out, "{}", Section("YOUR TEAM"))?;
    print_team(&team, &mut out)?;

    writeln!(out, "{}", StatsPanel(&team.stats()))?;

    let lines = summarize(&TypeAnalysis::new(&team));
    writeln!(
        out,
        "{}",
        TypePanel {
            lines: &lines,
            team_size: team.len(),
        }
    )?;

    let battle = if args.opponent {
        true
    } else if args.no_opponent {
        false
    } else {
        ask(
            "Want to battle a random opponent team? (y/n)",
            &mut input,
            &mut out,
        )?
    };

    if battle {
        writeln!(out, "{}", Section("OPPONENT'S RANDOM TEAM"))?;
        let mut rng = seeded(args.seed);
        let opponent = random_team(&catalog, &mut rng, &mut out)?;
        if !opponent.is_empty() {
            print_team(&opponent, &mut out)?;
            let comparison = Comparison::new(&team, &opponent);
            writeln!(
                out,
                "{}",
                ComparisonPanel {
                    comparison: &comparison,
                    player_names: &team.names(),
                    opponent_names: &opponent.names(),
                }
            )?;
        }
    }

    writeln!(
        out,
        "\n{}\n",
        "  Thanks for using the team analyzer!".cyan().bold()
    )?;
    Ok(())
}

fn main() {
    use env_logger::Builder;

    let args = Args::parse();

    let mut log = Builder::new();
    log.filter_level(match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });
    log.parse_env("RUST_LOG");
    log.init();

    match run(args) {
        Ok(()) => (),
        Err(Error::EmptyTeam) => println!("No creatures entered. Exiting."),
        Err(e) => eprintln!("{}", e),
    }
}
