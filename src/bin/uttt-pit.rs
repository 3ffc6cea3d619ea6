use std::io;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use uttt_zero::arena::Arena;
use uttt_zero::core::GameRng;
use uttt_zero::games::ultimate::render;
use uttt_zero::games::UltimateTicTacToe;
use uttt_zero::mcts::MCTSConfig;
use uttt_zero::nn::UniformPolicyZeroValue;
use uttt_zero::players::{Agent, HumanPlayer, MctsPlayer, RandomPlayer};
use uttt_zero::rules::Game;

#[derive(Parser)]
#[command(
    name = "uttt-pit",
    version,
    about = "Pit two Ultimate Tic-Tac-Toe agents against each other"
)]
struct Cli {
    /// Agent for the first seat
    #[arg(long, value_enum, default_value_t = AgentKind::Mcts)]
    one: AgentKind,

    /// Agent for the second seat
    #[arg(long, value_enum, default_value_t = AgentKind::Random)]
    two: AgentKind,

    /// Number of games (split evenly between first movers)
    #[arg(long, short = 'g', default_value_t = 2)]
    games: usize,

    /// Sub-board size
    #[arg(long, short = 'n', default_value_t = 3)]
    size: usize,

    /// MCTS simulations per move
    #[arg(long, default_value_t = 25)]
    simulations: u32,

    /// PUCT exploration constant
    #[arg(long, default_value_t = 1.0)]
    cpuct: f64,

    /// Seed for random agents
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print every board
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AgentKind {
    Random,
    Human,
    Mcts,
}

fn build_agent(kind: AgentKind, game: UltimateTicTacToe, cli: &Cli, rng: GameRng) -> Box<dyn Agent> {
    match kind {
        AgentKind::Random => Box::new(RandomPlayer::from_rng(game, rng)),
        AgentKind::Human => Box::new(HumanPlayer::new(game, io::stdin().lock(), io::stdout())),
        AgentKind::Mcts => Box::new(MctsPlayer::new(
            game,
            UniformPolicyZeroValue::new(game.action_size()),
            MCTSConfig::default()
                .with_simulations(cli.simulations)
                .with_cpuct(cli.cpuct),
        )),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if cli.size < 2 {
        bail!("sub-board size must be at least 2, got {}", cli.size);
    }
    if cli.games < 2 {
        bail!("need at least 2 games so each agent moves first once");
    }

    let game = UltimateTicTacToe::new(cli.size);
    let mut rng = GameRng::new(cli.seed);
    let one = build_agent(cli.one, game, &cli, rng.fork());
    let two = build_agent(cli.two, game, &cli, rng.fork());
    let verbose = cli.verbose || cli.one == AgentKind::Human || cli.two == AgentKind::Human;

    let mut arena = Arena::new(game, one, two).with_display(render);
    let record = arena.play_games(cli.games, verbose)?;

    println!(
        "{:?} vs {:?} over {} games: one won {}, two won {}, draws {}",
        cli.one,
        cli.two,
        record.total(),
        record.one_won,
        record.two_won,
        record.draws
    );
    Ok(())
}
