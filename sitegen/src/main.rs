//! # landing-sitegen
//!
//! Renders the landing pages to static HTML.
//!
//! ## Usage
//!
//! ```bash
//! # Every site into ./dist
//! landing-sitegen build
//!
//! # One site, pinned year, custom output
//! landing-sitegen build --site propertypro --year 2025 --out public
//!
//! # Inspect
//! landing-sitegen list
//! landing-sitegen content dietitianlab --pretty
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use landing_pages::Site;
use landing_sitegen::{
    BuildPlan, DEFAULT_OUT_DIR, SitegenConfig, build_sites, current_year, dedup_sites, site_json,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "landing-sitegen")]
#[command(about = "Render the PropertyPro and DietitianLab landing pages to static HTML")]
#[command(version)]
struct Cli {
    /// Config file (default: ./landing.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        long,
        global = true,
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render sites to <out>/<site>/index.html
    Build {
        /// Site to build (repeatable; default: configured sites, else all)
        #[arg(long = "site", value_name = "SITE")]
        sites: Vec<Site>,

        /// Output directory
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Year shown in the footer copyright
        #[arg(long)]
        year: Option<i32>,
    },

    /// List the available sites
    List,

    /// Print a site's literal content as JSON
    Content {
        /// Site to dump
        site: Site,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn load_config(cli: &Cli) -> Result<SitegenConfig> {
    match &cli.config {
        Some(path) => SitegenConfig::load_from_path(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("resolving working directory")?;
            SitegenConfig::load(&cwd).context("loading landing.toml")
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Logs go to stderr; stdout carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    match &cli.command {
        Command::Build { sites, out, year } => {
            let config = load_config(&cli)?;
            let sites = if sites.is_empty() {
                config.resolve_sites().context("resolving configured sites")?
            } else {
                dedup_sites(sites.clone())
            };
            let plan = BuildPlan {
                out_dir: out
                    .clone()
                    .or(config.out_dir)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)),
                sites,
                year: year.or(config.copyright_year).unwrap_or_else(current_year),
            };

            let pages = build_sites(&plan).context("building sites")?;
            for page in &pages {
                println!("{}\t{}\t{} bytes", page.site, page.path.display(), page.bytes);
            }
            info!("wrote {} page(s)", pages.len());
        }
        Command::List => {
            for site in Site::ALL {
                println!("{}\t{}\t{}", site.slug(), site.content().brand, site.route());
            }
        }
        Command::Content { site, pretty } => {
            let json = site_json(*site, *pretty).with_context(|| format!("serializing {site}"))?;
            println!("{json}");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[landing-sitegen] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
