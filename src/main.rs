//! healthbar - draggable terminal healthbar
//!
//! Runs a host screen with a mouse-driven healthbar and a light/dark switch,
//! or a console bar fed from stdin.

mod config;
mod console;
mod core;
mod frontend;
mod theme;
mod widgets;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use frontend::Frontend;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "healthbar")]
#[command(about = "Draggable terminal healthbar", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.healthbar)
    /// Can also be set via HEALTHBAR_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Initial theme (overrides ui.theme from config)
    #[arg(short, long, value_enum)]
    theme: Option<ThemeArg>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl ThemeArg {
    fn name(self) -> &'static str {
        match self {
            ThemeArg::Dark => "dark",
            ThemeArg::Light => "light",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a console bar and set its value from numbers typed on stdin
    Console {
        /// Number of segments (overrides console.length)
        #[arg(long)]
        length: Option<u16>,

        /// Redraw interval in milliseconds (overrides console.interval_ms)
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Initial value (default: full)
        #[arg(long)]
        start_at: Option<f64>,
    },
    /// Validate configuration
    ValidateConfig {
        /// Config file to validate
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging to file (use RUST_LOG env var to control level, e.g. RUST_LOG=debug)
    // TUI apps can't log to stdout, so we write to a file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("healthbar.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    let cli = Cli::parse();

    // Set custom data directory if specified (via CLI or environment variable)
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var(config::DIR_ENV_VAR, data_dir);
        tracing::info!("Using custom data directory: {:?}", data_dir);
    } else if let Ok(env_dir) = std::env::var(config::DIR_ENV_VAR) {
        tracing::info!("Using data directory from {}: {}", config::DIR_ENV_VAR, env_dir);
    }

    if let Some(Commands::ValidateConfig { file }) = &cli.command {
        let path = match file.as_ref().or(cli.config.as_ref()) {
            Some(path) => path.clone(),
            None => config::Config::config_path()?,
        };
        let ok = validate_config_file(&path)?;
        if !ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    let mut config = if let Some(config_path) = &cli.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load()?
    };

    if let Some(theme) = cli.theme {
        config.ui.theme = theme.name().to_string();
    }

    match cli.command {
        Some(Commands::Console {
            length,
            interval_ms,
            start_at,
        }) => {
            if let Some(length) = length {
                config.console.length = length;
            }
            if let Some(interval_ms) = interval_ms {
                config.console.interval_ms = interval_ms;
            }
            run_console(config, start_at)
        }
        Some(Commands::ValidateConfig { .. }) => Ok(()),
        None => run_tui(config),
    }
}

/// Print validation results for a config file. Returns false on errors.
fn validate_config_file(path: &std::path::Path) -> Result<bool> {
    println!("Validating config file: {:?}", path);

    let contents =
        std::fs::read_to_string(path).context(format!("Failed to read config file: {:?}", path))?;
    let config = match config::Config::from_toml(&contents) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✗ Failed to parse config: {:#}", e);
            return Ok(false);
        }
    };
    println!("✓ Config parsed successfully");

    let validation = config::validator::validate_config(&config);
    let errors = validation.errors();
    let warnings = validation.warnings();
    for issue in &errors {
        eprintln!("✗ Error: {}", issue.message());
    }
    for issue in &warnings {
        println!("⚠ Warning: {}", issue.message());
    }

    if validation.issues.is_empty() {
        println!("✓ Config is valid with no issues");
    } else {
        if !errors.is_empty() {
            eprintln!("\n✗ Found {} error(s)", errors.len());
        }
        if !warnings.is_empty() {
            println!("⚠ Found {} warning(s)", warnings.len());
        }
    }

    Ok(validation.is_valid())
}

/// Run the TUI host screen
fn run_tui(config: config::Config) -> Result<()> {
    use crate::core::AppCore;
    use frontend::{FrontendEvent, TuiFrontend};

    let poll_timeout = Duration::from_millis(config.ui.poll_timeout_ms.max(1));
    let mut frontend = TuiFrontend::new(poll_timeout)?;

    let (width, height) = frontend.size();
    let mut app_core = AppCore::new(config, width, height);
    tracing::info!(
        "Started {}x{} with {} theme",
        width,
        height,
        app_core.toggle.theme_name()
    );

    // Main event loop
    while app_core.running {
        if app_core.needs_render {
            frontend.render(&app_core)?;
            app_core.needs_render = false;
        }

        for event in frontend.poll_events()? {
            match event {
                FrontendEvent::Key { code, modifiers } => app_core.handle_key(code, modifiers),
                FrontendEvent::Mouse { kind, x, y } => app_core.handle_mouse(kind, x, y),
                FrontendEvent::Resize { width, height } => app_core.resize(width, height),
            }
        }
    }

    frontend.cleanup()?;
    Ok(())
}

/// Run the console bar until an empty line or EOF on stdin
fn run_console(config: config::Config, start_at: Option<f64>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async_run_console(config, start_at))
}

async fn async_run_console(config: config::Config, start_at: Option<f64>) -> Result<()> {
    use crossterm::{
        cursor, execute,
        terminal::{Clear, ClearType},
    };
    use tokio::io::{AsyncBufReadExt, BufReader};
    use tokio::sync::watch;

    let model = console::BarModel::from_config(&config.console, start_at)?;
    let bar = console::ConsoleBar::new(&config.console.glyphs);
    let (value_tx, value_rx) = watch::channel(model.value());

    // Bar occupies rows 0-2, input goes below it
    let input_row = 4;
    let mut stdout = std::io::stdout();
    execute!(stdout, Clear(ClearType::All), cursor::MoveTo(0, input_row))?;

    let mut draw_loop = console::DrawLoop::new(Duration::from_millis(config.console.interval_ms.max(1)));
    draw_loop.start(bar, model, value_rx, std::io::stdout());
    tracing::info!("Console bar started");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        match line.parse::<f64>() {
            Ok(value) => {
                tracing::debug!("Console value {}", value);
                // The loop may have died on a write error; stop() reports it
                if value_tx.send(value).is_err() {
                    break;
                }
            }
            Err(e) => tracing::warn!("Ignoring console input '{}': {}", line, e),
        }

        execute!(
            stdout,
            cursor::MoveTo(0, input_row),
            Clear(ClearType::FromCursorDown)
        )?;
    }

    println!("stopping...");
    draw_loop.stop().await
}
