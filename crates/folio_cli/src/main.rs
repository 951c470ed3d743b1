//! `folio` command-line tool.
//!
//! # Responsibility
//! - Validate a site's data files with the page's own parsers.
//! - Replay carousel navigation offline for quick layout checks.
//! - Keep `ping`/`version` probes for core linkage sanity checks.

mod check;
mod simulate;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{CarouselId, SiteConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "folio", version, about = "Portfolio site data tools")]
struct Cli {
    /// Log level for file logging (trace|debug|info|warn|error).
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files; logging is off without it.
    #[arg(long, global = true)]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate data files under a site root.
    Check {
        /// Site root containing the `data/` directory.
        root: PathBuf,
        /// Optional site config JSON (same shape as the inline page config).
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Replay carousel steps such as `+1,+1,-1,reset`.
    Simulate {
        root: PathBuf,
        #[arg(long, default_value = "projects")]
        carousel: String,
        #[arg(long)]
        steps: String,
        /// Card width in CSS pixels, excluding the gap.
        #[arg(long, default_value_t = 300.0)]
        item_width: f64,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print core linkage probes.
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            log::error!("event=cli module=cli status=error error={err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or(folio_core::default_log_level());
        folio_core::init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    match cli.command {
        Command::Check { root, config } => {
            let config = load_config(config.as_deref())?;
            let report = check::check_site(&root, &config);
            for resource in &report.resources {
                match &resource.outcome {
                    Ok(count) => println!(
                        "ok    {:<10} {} record(s)  {}",
                        resource.resource.as_str(),
                        count,
                        resource.path.display()
                    ),
                    Err(message) => {
                        println!("error {:<10} {message}", resource.resource.as_str())
                    }
                }
            }
            for (carousel, count, max) in &report.carousels {
                println!(
                    "carousel {} items={count} max_offset={max}",
                    carousel.dom_id()
                );
            }
            for id in &report.duplicate_ids {
                println!("warning duplicate item id `{id}` (later record wins)");
            }
            Ok(if report.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Simulate {
            root,
            carousel,
            steps,
            item_width,
            config,
        } => {
            let Some(carousel) = CarouselId::parse(&carousel) else {
                bail!("unknown carousel `{carousel}`; expected projects|blogs");
            };
            if !item_width.is_finite() || item_width < 0.0 {
                bail!("--item-width must be finite and >= 0");
            }
            let config = load_config(config.as_deref())?;
            let steps = simulate::parse_steps(&steps).map_err(anyhow::Error::msg)?;
            let results = check::load_from_dir(&root, &config);
            for err in results.errors() {
                eprintln!("warning {err}");
            }
            for view in simulate::run(config, results, carousel, &steps, item_width) {
                println!(
                    "offset={} max={} transform={} prev_disabled={} next_disabled={}",
                    view.offset,
                    view.max_offset,
                    view.transform,
                    view.buttons.prev_disabled,
                    view.buttons.next_disabled
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Version => {
            // Why: keep a tiny probe to validate core crate wiring without a browser.
            println!("folio_core ping={}", folio_core::ping());
            println!("folio_core version={}", folio_core::core_version());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    let Some(path) = path else {
        return Ok(SiteConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config `{}`", path.display()))?;
    SiteConfig::from_json_str(&raw).with_context(|| format!("invalid config `{}`", path.display()))
}
