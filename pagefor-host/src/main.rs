//! `pagefor`: inspect archive-page routing for a site described in TOML.
//!
//! Usage:
//!   pagefor --site site.toml rules
//!   pagefor --site site.toml resolve about/team/page/2
//!   pagefor --site site.toml menu --archive project
//!   pagefor --site site.toml types

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pagefor_host::{HostConfig, SiteFixture};
use pagefor_types::ViewContext;
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "pagefor")]
#[command(about = "Inspect archive-page routing for a site")]
struct Args {
    /// Site description (content types, pages, assignments, menu)
    #[arg(short, long, default_value = "site.toml")]
    site: PathBuf,

    /// Host config file
    #[arg(short, long, default_value = "pagefor.toml")]
    config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the rewrite table in match order
    Rules,
    /// Resolve a request path against the rewrite table
    Resolve { path: String },
    /// Print the menu classified for a view
    Menu {
        /// Archive of this content type
        #[arg(long, conflicts_with = "singular")]
        archive: Option<String>,
        /// Single item of this content type
        #[arg(long)]
        singular: Option<String>,
        /// Parent of the viewed item, for nested items
        #[arg(long, requires = "singular")]
        parent: Option<u64>,
    },
    /// List assignable content types and their pages
    Types,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let config = HostConfig::load_from(&args.config);
    let site = SiteFixture::load(&args.site)
        .with_context(|| format!("Failed to load site {:?}", args.site))?;
    let menu = site.menu.clone();
    let host = site
        .into_host(config)
        .context("Failed to register content types")?;
    host.flush_rewrite_rules_if_dirty();

    match args.command {
        Command::Rules => {
            for rule in host.rewrite_table().rules() {
                println!("{rule}");
            }
        }
        Command::Resolve { path } => match host.rewrite_table().resolve(&path) {
            Some(route) => println!("{} (via {})", route.query, route.pattern),
            None => println!("no archive-page rule matches {path:?}"),
        },
        Command::Menu {
            archive,
            singular,
            parent,
        } => {
            let view = match (archive, singular) {
                (Some(ct), _) => ViewContext::archive(ct),
                (None, Some(ct)) => match parent {
                    Some(parent) => ViewContext::singular_child(ct, 0, parent),
                    None => ViewContext::singular(ct, 0),
                },
                (None, None) => ViewContext::Other,
            };
            let mut menu = menu;
            let changed = host.render_menu(&mut menu, &view);
            info!(changed, "Menu classified");
            for entry in &menu {
                let indent = "  ".repeat(entry.depth as usize);
                println!("{indent}{} [{}]", entry.id, entry.classes.to_attribute());
            }
        }
        Command::Types => {
            for (ct, page) in host.settings_rows() {
                let page = page.map_or_else(|| "-".to_string(), |p| p.to_string());
                let effective = host.content_type(&ct.name).unwrap_or(ct);
                let archive = effective.archive_slug().unwrap_or("-");
                println!(
                    "{:<20} {:<24} {:<8} {archive}",
                    effective.name,
                    effective.display_label(),
                    page
                );
            }
        }
    }

    Ok(())
}
