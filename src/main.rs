use clap::{Args, Parser, Subcommand};
use colored::*;
use core::error::Error;
use std::path::{Path, PathBuf};

use inkmd_lib::config as inkmd_config;
use inkmd_lib::exit_codes::exit;

use inkmd_config::{ConfigSource, LoadedConfig};

mod file_processor;

/// Default file written by `inkmd init`
const DEFAULT_CONFIG_FILE: &str = "inkmd.toml";

#[derive(Parser)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Control colored output: auto, always, never
    #[arg(long, global = true, default_value = "auto", value_parser = ["auto", "always", "never"], help = "Control colored output: auto, always, never")]
    color: String,

    /// Path to configuration file
    #[arg(long, global = true, help = "Path to configuration file")]
    config: Option<String>,

    /// Ignore all configuration files and use built-in defaults
    #[arg(
        long,
        global = true,
        help = "Ignore all configuration files and use built-in defaults"
    )]
    no_config: bool,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Markdown files to render ("-" or none reads stdin)
    #[arg(value_name = "FILES")]
    inputs: Vec<String>,

    /// Level a single `#` heading is styled as (clamped to 1-6); overrides the config file
    #[arg(long, allow_negative_numbers = true)]
    base_level: Option<i64>,

    /// Write HTML to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render Markdown to an HTML fragment
    Render(RenderArgs),
    /// Initialize a new configuration file
    Init {
        /// Overwrite an existing inkmd.toml
        #[arg(long)]
        force: bool,
    },
    /// Show the effective configuration as TOML
    Config,
    /// Print the JSON schema of the configuration file
    Schema,
    /// Show version information
    Version,
}

/// Utility function to load configuration with standard CLI error handling.
fn load_config_with_cli_error_handling(config_path: Option<&str>, isolated: bool) -> LoadedConfig {
    if let Some(path) = config_path
        && !Path::new(path).exists()
    {
        eprintln!("{}: Configuration file not found: {}", "Config error".red().bold(), path);
        exit::tool_error();
    }

    match LoadedConfig::load_with_discovery(config_path, None, isolated) {
        Ok(loaded) => {
            match &loaded.source {
                ConfigSource::Default => log::debug!("Using default configuration"),
                ConfigSource::ProjectConfig(path) | ConfigSource::Explicit(path) => {
                    log::debug!("Using configuration from {}", path.display())
                }
            }
            loaded
        }
        Err(e) => {
            eprintln!("{}: {}", "Config error".red().bold(), e);
            exit::tool_error();
        }
    }
}

fn run_render(args: &RenderArgs, config_path: Option<&str>, isolated: bool) {
    let loaded = load_config_with_cli_error_handling(config_path, isolated);
    let mut options = loaded.config.render_options();
    if let Some(level) = args.base_level {
        options = options.with_base_level(level);
    }

    let html = match file_processor::render_inputs(&args.inputs, options) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    };

    if let Err(e) = file_processor::write_output(&html, args.output.as_deref()) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        exit::tool_error();
    }
}

fn handle_init_command(force: bool) {
    let path = Path::new(DEFAULT_CONFIG_FILE);
    match inkmd_config::create_default_config(path, force) {
        Ok(()) => println!("Created default configuration file: {DEFAULT_CONFIG_FILE}"),
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}

fn handle_config_command(config_path: Option<&str>, isolated: bool) {
    let loaded = load_config_with_cli_error_handling(config_path, isolated);
    let source = match &loaded.source {
        ConfigSource::Default => "built-in defaults".to_string(),
        ConfigSource::ProjectConfig(path) | ConfigSource::Explicit(path) => path.display().to_string(),
    };

    match loaded.config.to_toml_string() {
        Ok(toml) => {
            println!("# Source: {source}");
            println!("{toml}");
        }
        Err(e) => {
            eprintln!("{}: Failed to serialize config: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}

fn handle_schema_command() {
    let schema_json = serde_json::to_string_pretty(&inkmd_config::json_schema()).unwrap_or_else(|e| {
        eprintln!("{}: Failed to serialize schema: {}", "Error".red().bold(), e);
        exit::tool_error();
    });
    println!("{schema_json}");
}

fn main() -> Result<(), Box<dyn Error>> {
    // Reset SIGPIPE to default behavior on Unix so piping to `head` etc. works correctly.
    #[cfg(unix)]
    {
        // SAFETY: restoring the default SIGPIPE disposition before any output is written.
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    let cli = Cli::parse();

    // --verbose wins; otherwise RUST_LOG replaces the warn default
    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    // Set color override globally based on --color flag
    match cli.color.as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::unset_override(),
    }

    let config_path = cli.config.as_deref();
    let isolated = cli.no_config;

    let result = std::panic::catch_unwind(|| match &cli.command {
        Commands::Render(args) => run_render(args, config_path, isolated),
        Commands::Init { force } => handle_init_command(*force),
        Commands::Config => handle_config_command(config_path, isolated),
        Commands::Schema => handle_schema_command(),
        Commands::Version => println!("inkmd {}", env!("CARGO_PKG_VERSION")),
    });

    if let Err(e) = result {
        eprintln!("[inkmd panic handler] Uncaught panic: {e:?}");
        exit::tool_error();
    } else {
        Ok(())
    }
}
