use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use connect_four::config::{AppConfig, LogConfig, ModeSetting};
use connect_four::console::Console;
use connect_four::controller::{GameController, GameMode};
use connect_four::game::Player;
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// 1 = one player against the computer, 2 = two players
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    mode: Option<u8>,

    /// Side the computer plays: X or O
    #[arg(long, value_parser = parse_player)]
    ai_player: Option<Player>,

    /// Seed for the computer's random moves
    #[arg(long)]
    seed: Option<u64>,

    /// Use the full-screen terminal UI instead of the line prompt
    #[arg(long)]
    tui: bool,

    /// Override the log filter (e.g. "debug"); takes precedence over RUST_LOG
    #[arg(long)]
    log_level: Option<String>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn parse_player(s: &str) -> Result<Player, String> {
    match s {
        "X" | "x" => Ok(Player::X),
        "O" | "o" => Ok(Player::O),
        other => Err(format!("'{other}' is not a player (expected X or O)")),
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(player) = cli.ai_player {
        config.game.ai_player = player;
    }
    if let Some(seed) = cli.seed {
        config.game.seed = Some(seed);
    }
    let explicit_level = cli.log_level.is_some();
    if let Some(level) = cli.log_level {
        config.log.level = level;
        config.validate().context("validating --log-level")?;
    }

    if !cli.tui {
        init_logging(&config.log, explicit_level)?;
    }

    let ai_player = config.game.ai_player;
    let preset = match (cli.mode, config.game.mode) {
        (Some(choice), _) => GameMode::from_choice(choice, ai_player),
        (None, Some(ModeSetting::VersusAi)) => Some(GameMode::VersusAi { ai_player }),
        (None, Some(ModeSetting::TwoPlayer)) => Some(GameMode::TwoPlayer),
        (None, None) => None,
    };

    if cli.tui {
        let mode = preset.unwrap_or(GameMode::VersusAi { ai_player });
        run_tui(new_controller(mode, config.game.seed))?;
        return Ok(());
    }

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let mode = match preset {
        Some(mode) => mode,
        None => match console.prompt_mode()? {
            Some(choice) => match GameMode::from_choice(choice, ai_player) {
                Some(mode) => mode,
                None => bail!("unexpected mode choice {choice}"),
            },
            None => return Ok(()),
        },
    };

    tracing::info!(mode = mode.label(), "starting session");
    let mut controller = new_controller(mode, config.game.seed);
    console.run(&mut controller).context("running console session")?;
    Ok(())
}

fn new_controller(mode: GameMode, seed: Option<u64>) -> GameController {
    match seed {
        Some(seed) => GameController::with_seed(mode, seed),
        None => GameController::new(mode),
    }
}

/// Log events go to stderr so the board on stdout stays readable.
fn init_logging(log: &LogConfig, explicit_level: bool) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log
        .env_filter(rust_log.as_deref(), explicit_level)
        .context("building log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn run_tui(controller: GameController) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(controller);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
