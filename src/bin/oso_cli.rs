//! OSO terminal player
//!
//! Plays a game on the terminal: human against computer, human against human,
//! or computer against itself with `--self-play`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use oso::config::{AppConfig, DEFAULT_CONFIG_FILE};
use oso::{AIEngine, GameEngine, Move, Opponent, Player, Symbol};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OpponentArg {
    Human,
    Computer,
}

impl From<OpponentArg> for Opponent {
    fn from(arg: OpponentArg) -> Self {
        match arg {
            OpponentArg::Human => Opponent::Human,
            OpponentArg::Computer => Opponent::Computer,
        }
    }
}

/// Play OSO in the terminal.
#[derive(Parser)]
#[command(name = "oso_cli", about = "Play OSO in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override the board size
    #[arg(long)]
    size: Option<usize>,

    /// Override the opponent
    #[arg(long, value_enum)]
    opponent: Option<OpponentArg>,

    /// Override which player (1 or 2) the computer plays
    #[arg(long)]
    computer_player: Option<u8>,

    /// Let the computer play both sides
    #[arg(long)]
    self_play: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    if let Some(size) = cli.size {
        config.game.board_size = size;
    }
    if let Some(opponent) = cli.opponent {
        config.game.opponent = opponent.into();
    }
    if let Some(player) = cli.computer_player {
        config.game.computer_player = player;
    }
    config.validate()?;

    let mut game = GameEngine::try_new(config.game.board_size)?;
    let computer = config.game.computer();
    let is_computer = |player: Player| {
        cli.self_play || (config.game.opponent == Opponent::Computer && player == computer)
    };
    let engines = [
        AIEngine::new(&game, Player::One),
        AIEngine::new(&game, Player::Two),
    ];

    info!(
        "Starting {}x{} game (opponent: {:?}, self-play: {})",
        config.game.board_size, config.game.board_size, config.game.opponent, cli.self_play
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.is_full() {
        print_status(&game);
        let player = game.current_player();

        let mv = if is_computer(player) {
            let engine = &engines[usize::from(player.number() - 1)];
            match engine.best_move(&game) {
                Some(mv) => {
                    println!("{} plays {}", player, mv);
                    mv
                }
                None => break,
            }
        } else {
            print!("{} - enter 'row col O|S': ", player);
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                println!();
                return Ok(());
            };
            match parse_move(&line?) {
                Ok(mv) => mv,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            }
        };

        game.select_symbol(mv.symbol);
        let placement = game.place(mv.row, mv.col);
        if !placement.accepted {
            println!("Invalid move: ({}, {}) is occupied or off the board", mv.row, mv.col);
        } else if placement.points > 0 {
            println!("{} scored {} - move again", player, placement.points);
        }
    }

    print_status(&game);
    println!("{}", game.winner());
    Ok(())
}

fn print_status(game: &GameEngine) {
    println!();
    print!("{}", game.board());
    println!(
        "Points: {} - {}",
        game.score_of(Player::One),
        game.score_of(Player::Two)
    );
}

/// Parse `row col symbol`, e.g. `1 2 O`
fn parse_move(line: &str) -> Result<Move> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [row, col, symbol] = parts.as_slice() else {
        bail!("expected 'row col O|S', got '{}'", line.trim());
    };

    let row: usize = row.parse().with_context(|| format!("bad row '{row}'"))?;
    let col: usize = col.parse().with_context(|| format!("bad column '{col}'"))?;

    let mut chars = symbol.chars();
    let symbol = match (chars.next().and_then(Symbol::from_char), chars.next()) {
        (Some(symbol), None) => symbol,
        _ => bail!("symbol must be O or S, got '{symbol}'"),
    };

    Ok(Move::new(row, col, symbol))
}
