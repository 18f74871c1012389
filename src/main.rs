use clap::{Parser, Subcommand};
use rangepick::commands;
use rangepick::config;
use rangepick::selection::DateRange;
use rangepick::tui;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "rangepick")]
#[command(about = "Scrollable date range picker", long_about = "Scrollable date range picker\n\nIf no command is specified, the program starts the interactive picker and prints the selected range on exit.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Initial range start in YYYY-MM-DD format
    #[arg(short, long)]
    start: Option<String>,

    /// Initial range end in YYYY-MM-DD format
    #[arg(short, long)]
    end: Option<String>,

    /// Date to treat as today in YYYY-MM-DD format (defaults to the local date)
    #[arg(short, long)]
    today: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one month grid with the range marked
    Calendar {
        /// Month in YYYY-MM format (defaults to the month of --start, or today)
        #[arg(short, long)]
        month: Option<String>,

        /// Range start in YYYY-MM-DD format
        #[arg(short, long)]
        start: Option<String>,

        /// Range end in YYYY-MM-DD format
        #[arg(short, long)]
        end: Option<String>,

        /// Date to treat as today in YYYY-MM-DD format
        #[arg(short, long)]
        today: Option<String>,
    },
    /// List the months the picker can show
    Months {
        /// Date to treat as today in YYYY-MM-DD format
        #[arg(short, long)]
        today: Option<String>,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("tick_rate_ms: {}", cfg.tick_rate_ms);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!("endpoint_fg: {:?}", cfg.display.endpoint_fg);
    println!("endpoint_bg: {:?}", cfg.display.endpoint_bg);
    println!("range_fg: {:?}", cfg.display.range_fg);
    println!("range_bg: {:?}", cfg.display.range_bg);
    println!("today_fg: {:?}", cfg.display.today_fg);
    println!("accent_fg: {:?}", cfg.display.accent_fg);
    println!("muted_fg: {:?}", cfg.display.muted_fg);
    println!();
    println!("[scroll]");
    println!("throttle_ms: {}", cfg.scroll.throttle_ms);
    println!("settle_ms: {}", cfg.scroll.settle_ms);
    println!("wheel_lines: {}", cfg.scroll.wheel_lines);
    println!("jump_duration_ms: {}", cfg.scroll.jump_duration_ms);
    println!("snap: {}", cfg.scroll.snap);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Run the interactive picker and return the final range
async fn run_tui_mode(
    config: config::Config,
    start: Option<&str>,
    end: Option<&str>,
    today: Option<&str>,
) -> anyhow::Result<DateRange> {
    let today = commands::resolve_today(today)?;
    let initial_range = commands::parse_range(start, end)?;

    let listener = |range: &DateRange| {
        tracing::info!("Range changed: {}", range);
    };

    Ok(tui::run(config, today, initial_range, Box::new(listener)).await?)
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(command: Commands, config: &config::Config) -> anyhow::Result<()> {
    match command {
        Commands::Config => {
            handle_config_command();
            Ok(())
        }
        Commands::Calendar {
            month,
            start,
            end,
            today,
        } => commands::calendar::run(
            month.as_deref(),
            start.as_deref(),
            end.as_deref(),
            today.as_deref(),
            &config.display,
        ),
        Commands::Months { today } => commands::months::run(today.as_deref(), &config.display),
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let Some(command) = cli.command else {
        let result = run_tui_mode(
            config,
            cli.start.as_deref(),
            cli.end.as_deref(),
            cli.today.as_deref(),
        )
        .await;
        match result {
            Ok(range) => println!("{}", range),
            Err(e) => {
                eprintln!("Error running picker: {:#}", e);
                tracing::error!("Picker failed: {:#}", e);
                std::process::exit(1);
            }
        }
        return;
    };

    if let Err(e) = execute_command(command, &config) {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
