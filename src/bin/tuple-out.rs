//! Tuple Out at the terminal.
//!
//! Players come from `--player` flags, or are prompted for when none are
//! given. Every turn asks the current player whether to reroll; the game
//! ends with a score chart and a summary table.

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use tuple_out::console::{self, ConsoleDecider};
use tuple_out::core::{GameConfig, GameRng, GameState, DEFAULT_TARGET_SCORE};
use tuple_out::report::{render_chart, render_table, score_series, summarize};

/// Rows in the end-of-game chart.
const CHART_HEIGHT: usize = 12;

#[derive(Parser, Debug)]
#[command(name = "tuple-out", version, about = "Roll three dice, dodge the Tuple Out, race to the target score")]
struct Args {
    /// Player name, in turn order; repeat for each player
    #[arg(short, long = "player", value_name = "NAME")]
    players: Vec<String>,

    /// Score needed to win
    #[arg(short, long, default_value_t = DEFAULT_TARGET_SCORE)]
    target: u32,

    /// Dice seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Stop rerolling after this many rerolls in one turn
    #[arg(long, value_name = "N")]
    max_rerolls: Option<u32>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Skip the score chart
    #[arg(long)]
    no_chart: bool,

    /// Skip the summary table
    #[arg(long)]
    no_summary: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("initializing logger")?;

    println!("Welcome to Tuple Out Dice Game!");
    let players = match args.players.is_empty() {
        true => console::prompt_players().context("reading players")?,
        false => args.players,
    };

    let mut config = GameConfig::new(players).with_target_score(args.target);
    if let Some(max) = args.max_rerolls {
        config = config.with_max_rerolls(max);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut state = GameState::new(&config).context("invalid game setup")?;
    let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    log::info!("dice seed {}", rng.seed());

    console::announce_game(&state);
    let mut decider = ConsoleDecider;
    while !state.is_over() {
        console::announce_turn(&state);
        if let Some(report) = state.play_turn(&mut rng, &mut decider) {
            console::report_turn(&state, &report);
        }
    }

    if !args.no_chart {
        let series = score_series(state.history(), state.roster());
        print!("\n{}", render_chart(&series, CHART_HEIGHT));
    }
    if !args.no_summary {
        println!("\nGame Summary Statistics:");
        print!("{}", render_table(&summarize(state.history(), state.roster())));
    }
    Ok(())
}
