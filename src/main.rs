//! alch-scanner: find profitable OSRS high-alchemy flips.
//!
//! Pulls item metadata from osrsbox-db and live Grand Exchange quotes from
//! the OSRS Wiki, derives net profit per item (yield minus buy price minus
//! the nature rune), and prints a filtered, sorted table.

mod app;
mod domain;
mod infra;
mod ui;

use std::collections::BTreeSet;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tokio::time::sleep;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::app::Scanner;
use crate::domain::{Category, FilterCriteria, MembershipFilter};
use crate::infra::{MetadataClient, PriceClient};

/// OSRS high-alchemy profit scanner.
#[derive(Parser)]
#[command(name = "alch-scanner", about = "Find profitable OSRS high-alchemy flips")]
struct Cli {
    /// Case-insensitive substring match on item names.
    #[arg(long)]
    search: Option<String>,

    /// Restrict results by membership requirement.
    #[arg(long, value_enum, default_value_t = MembershipArg::All)]
    membership: MembershipArg,

    /// Minimum net profit in GP. Negative values show losing flips too.
    #[arg(long, default_value_t = 500, allow_hyphen_values = true)]
    min_profit: i64,

    /// Only show these categories (repeatable). Omit for all categories.
    /// Accepts display names ("Ores & Bars") or kebab-case ("ores-and-bars").
    #[arg(long = "category", value_parser = parse_category)]
    categories: Vec<Category>,

    /// Show at most this many rows.
    #[arg(long)]
    limit: Option<usize>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Re-scan every N seconds instead of exiting after one pass.
    #[arg(long, value_name = "SECONDS")]
    watch: Option<u64>,

    /// Override the item metadata URL.
    #[arg(long, value_name = "URL")]
    metadata_url: Option<String>,

    /// Override the price API URL.
    #[arg(long, value_name = "URL")]
    prices_url: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum MembershipArg {
    All,
    F2p,
    P2p,
}

impl From<MembershipArg> for MembershipFilter {
    fn from(value: MembershipArg) -> Self {
        match value {
            MembershipArg::All => MembershipFilter::All,
            MembershipArg::F2p => MembershipFilter::F2pOnly,
            MembershipArg::P2p => MembershipFilter::P2pOnly,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn parse_category(raw: &str) -> Result<Category, String> {
    let needle = raw.trim().to_lowercase();
    Category::ALL
        .into_iter()
        .find(|category| {
            let name = category.as_str().to_lowercase();
            name == needle || name.replace(" & ", "-and-").replace(' ', "-") == needle
        })
        .ok_or_else(|| format!("unknown category: {raw}"))
}

impl Cli {
    fn criteria(&self) -> FilterCriteria {
        // No --category flags means no category filter, i.e. the full set.
        // An empty set is reserved for "nothing selected", which the CLI
        // cannot express.
        let categories: BTreeSet<Category> = if self.categories.is_empty() {
            Category::ALL.into_iter().collect()
        } else {
            self.categories.iter().copied().collect()
        };

        FilterCriteria {
            search: self.search.clone(),
            membership: self.membership.into(),
            min_profit: self.min_profit,
            categories,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("alch_scanner=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let criteria = cli.criteria();

    let metadata = match &cli.metadata_url {
        Some(url) => MetadataClient::with_url(url),
        None => MetadataClient::new(),
    }
    .context("building metadata client")?;
    let prices = match &cli.prices_url {
        Some(url) => PriceClient::with_url(url),
        None => PriceClient::new(),
    }
    .context("building price client")?;
    let scanner = Scanner::new(metadata, prices);

    loop {
        match scanner.scan(&criteria).await {
            Ok(mut report) => {
                if let Some(limit) = cli.limit {
                    report.rows.truncate(limit);
                }
                match cli.format {
                    Format::Table => print!("{}", ui::table::render(&report)),
                    Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                }
            }
            Err(err) => {
                // A failed fetch aborts this pass with no partial output.
                error!(%err, "scan failed");
                match cli.watch {
                    Some(_) => eprintln!("scan failed: {err}"),
                    None => return Err(err).context("scan failed"),
                }
            }
        }

        match cli.watch {
            Some(secs) => sleep(Duration::from_secs(secs)).await,
            None => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_display_and_kebab_category_names() {
        assert_eq!(parse_category("Ores & Bars"), Ok(Category::OresAndBars));
        assert_eq!(parse_category("ores-and-bars"), Ok(Category::OresAndBars));
        assert_eq!(parse_category("weapons"), Ok(Category::Weapons));
        assert_eq!(parse_category("other"), Ok(Category::Other));
        assert!(parse_category("nonsense").is_err());
    }

    #[test]
    fn omitted_categories_mean_full_set() {
        let cli = Cli::parse_from(["alch-scanner"]);
        let criteria = cli.criteria();
        assert_eq!(criteria.categories.len(), Category::ALL.len());
        assert_eq!(criteria.min_profit, 500);
    }

    #[test]
    fn explicit_categories_narrow_the_set() {
        let cli = Cli::parse_from(["alch-scanner", "--category", "runes", "--category", "logs"]);
        let criteria = cli.criteria();
        assert_eq!(
            criteria.categories,
            [Category::Runes, Category::Logs].into_iter().collect()
        );
    }
}
