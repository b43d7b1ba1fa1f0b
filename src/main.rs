//! colorsvc - demonstration HTTP endpoint that answers with a color.
//!
//! Provides both human-friendly and agent-friendly (robot mode) interfaces.
#![forbid(unsafe_code)]

use std::io;

use axum::http::StatusCode;
use clap::Parser;
use console::style;
use serde::Serialize;
use tracing::debug;

use colorsvc::cli::{self, Cli, Commands};
use colorsvc::color::{self, Palette, RandomColor};
use colorsvc::config::ServiceConfig;
use colorsvc::error::{ColorError, Result};
use colorsvc::logging::init_logging;
use colorsvc::output::effective_status;
use colorsvc::server;

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> &'static str {
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    }

    pub fn git_dirty() -> &'static str {
        option_env!("VERGEN_GIT_DIRTY").unwrap_or("false")
    }

    pub fn build_timestamp() -> &'static str {
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
    }

    pub fn rustc_semver() -> &'static str {
        option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown")
    }

    pub fn target() -> &'static str {
        option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown")
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    init_logging(cli.robot, cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        output_error(&cli, &e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        None => print_quick_start(cli),
        Some(Commands::Serve(args)) => cmd_serve(cli, args),
        Some(Commands::Pick(args)) => cmd_pick(cli, args),
        Some(Commands::Palette) => cmd_palette(cli),
        Some(Commands::Config) => cmd_config(cli),
        Some(Commands::Version) => cmd_version(cli),
        Some(Commands::Completions(args)) => cmd_completions(cli, args),
    }
}

fn load_config(cli: &Cli) -> Result<ServiceConfig> {
    let config = ServiceConfig::load(cli.config.as_deref())?;
    debug!(?config, "Effective configuration");
    Ok(config)
}

// === Quick Start ===

#[derive(Serialize)]
struct RobotQuickStart {
    tool: &'static str,
    version: &'static str,
    description: &'static str,
    commands: RobotCommands,
    environment: RobotEnvironment,
    output_modes: OutputModes,
}

#[derive(Serialize)]
struct RobotCommands {
    serve: &'static str,
    pick: &'static str,
    palette: &'static str,
    config: &'static str,
}

#[derive(Serialize)]
struct RobotEnvironment {
    color: &'static str,
    config: &'static str,
    log: &'static str,
}

#[derive(Serialize)]
struct OutputModes {
    human: &'static str,
    robot: &'static str,
    compact: &'static str,
}

fn print_quick_start(cli: &Cli) -> Result<()> {
    if cli.use_json() {
        let help = RobotQuickStart {
            tool: "colorsvc",
            version: build_info::VERSION,
            description: "HTTP endpoint answering with a JSON color; \"blue\" answers 500",
            commands: RobotCommands {
                serve: "colorsvc serve --port 8080",
                pick: "colorsvc pick --params '[{\"color\":\"red\",\"delayLength\":0}]'",
                palette: "colorsvc palette --robot",
                config: "colorsvc config --robot",
            },
            environment: RobotEnvironment {
                color: "COLOR=<name> forces every response to <name>",
                config: "COLORSVC_CONFIG=<path> loads a TOML config file",
                log: "RUST_LOG=colorsvc=debug",
            },
            output_modes: OutputModes {
                human: "--format=text (default)",
                robot: "--robot or --format=json",
                compact: "--format=json-compact",
            },
        };
        return output_json(cli, &help);
    }

    println!(
        "{} {} - color endpoint\n",
        style("colorsvc").bold().cyan(),
        build_info::VERSION
    );
    println!("{}", style("QUICK START").bold().underlined());
    println!();
    println!("  {}  Start the endpoint", style("colorsvc serve").green());
    println!("  {}  Resolve one color", style("colorsvc pick").green());
    println!("  {}  List colors", style("colorsvc palette").green());
    println!("  {}  Effective config", style("colorsvc config").green());
    println!();
    println!("{}", style("ENVIRONMENT").bold().underlined());
    println!();
    println!("  {}  Force a color", style("COLOR=red").cyan());
    println!("  {}  Config file", style("COLORSVC_CONFIG=colorsvc.toml").cyan());
    println!();
    println!("Run {} for full help", style("colorsvc --help").yellow());
    Ok(())
}

// === Commands ===

fn cmd_serve(cli: &Cli, args: &cli::ServeArgs) -> Result<()> {
    let mut config = load_config(cli)?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(bind) = &args.bind {
        config.bind.clone_from(bind);
    }

    if !cli.quiet && !cli.use_json() {
        eprintln!(
            "Serving colors on {} (Ctrl+C to stop)",
            style(format!("http://{}/color", config.addr())).cyan()
        );
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(config))
}

#[derive(Serialize)]
struct PickOutput {
    color: String,
    origin: color::ColorOrigin,
    status: u16,
    body: String,
}

fn cmd_pick(cli: &Cli, args: &cli::PickArgs) -> Result<()> {
    let config = load_config(cli)?;
    let params = server::decode_parameters(args.params.as_deref().unwrap_or("").as_bytes())?;
    let source = RandomColor::new(config.palette.clone());
    let resolved = color::resolve(config.color_override(), &params, &source);
    let status = effective_status(&resolved.color, StatusCode::OK);
    let body = serde_json::Value::from(resolved.color.as_str()).to_string();

    if cli.use_json() {
        return output_json(
            cli,
            &PickOutput {
                color: resolved.color,
                origin: resolved.origin,
                status: status.as_u16(),
                body,
            },
        );
    }

    if status.is_success() {
        println!("{body}");
    } else {
        println!("{body} {}", style(format!("({status})")).red());
    }
    if !cli.quiet {
        eprintln!("{} {}", style("from").dim(), resolved.origin);
    }
    Ok(())
}

fn cmd_palette(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let palette: &Palette = &config.palette;

    if cli.use_json() {
        return output_json(cli, palette);
    }

    if palette.is_empty() {
        println!("Palette is empty; random picks fall back to {}", color::FALLBACK_COLOR);
    }
    for name in palette.iter() {
        println!("{name}");
    }
    Ok(())
}

fn cmd_config(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    if cli.use_json() {
        return output_json(cli, &config);
    }

    let text = toml::to_string_pretty(&config)
        .map_err(|e| ColorError::Other(format!("Failed to render config: {e}")))?;
    print!("{text}");
    Ok(())
}

fn cmd_version(cli: &Cli) -> Result<()> {
    if cli.use_json() {
        return output_json(
            cli,
            &serde_json::json!({
                "version": build_info::VERSION,
                "git_sha": build_info::git_sha(),
                "git_dirty": build_info::git_dirty() == "true",
                "build_timestamp": build_info::build_timestamp(),
                "rustc_version": build_info::rustc_semver(),
                "target": build_info::target(),
            }),
        );
    }

    println!("colorsvc {}", build_info::VERSION);
    println!(
        "git: {}{}",
        build_info::git_sha(),
        if build_info::git_dirty() == "true" {
            " (dirty)"
        } else {
            ""
        }
    );
    println!("built: {}", build_info::build_timestamp());
    println!("rustc: {}", build_info::rustc_semver());
    println!("target: {}", build_info::target());
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_completions(_cli: &Cli, args: &cli::CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    clap_complete::generate(args.shell, &mut Cli::command(), "colorsvc", &mut io::stdout());
    Ok(())
}

// === Output ===

fn output_json<T: Serialize>(cli: &Cli, data: &T) -> Result<()> {
    let json = if cli.use_compact_json() {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    }
    .map_err(|e| ColorError::Other(format!("Failed to serialize output: {e}")))?;
    println!("{json}");
    Ok(())
}

fn output_error(cli: &Cli, error: &ColorError) {
    if cli.use_json() {
        let json = serde_json::json!({
            "error": true,
            "message": error.to_string(),
            "suggestion": error.suggestion(),
            "recoverable": error.is_user_recoverable(),
        });
        eprintln!("{json:#}");
    } else {
        eprintln!("{}: {}", style("Error").red().bold(), error);
        if let Some(suggestion) = error.suggestion() {
            eprintln!("{}: {}", style("Hint").yellow(), suggestion);
        }
    }
}
