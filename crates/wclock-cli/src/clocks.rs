//! # Clocks Subcommand
//!
//! Renders the world-clock listing as a fixed-width table. Filtering,
//! sorting, and paging reuse the catalog's query engine, so the table shows
//! exactly what the API would return for the same parameters.

use clap::Args;

use wclock_catalog::{world_clock_page, ClockPage, ListParams, ZoneDirectory};
use wclock_core::TzdbOffsets;

/// Arguments for the `clocks` subcommand.
#[derive(Args, Debug, Default)]
pub struct ClocksArgs {
    /// Substring search over country, city, and zone name.
    #[arg(long)]
    pub query: Option<String>,

    /// Exact country match.
    #[arg(long)]
    pub country: Option<String>,

    /// Sort key: country | city | time24 | offset.
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction: asc | desc.
    #[arg(long)]
    pub dir: Option<String>,

    /// Maximum rows to print (1..=500).
    #[arg(long)]
    pub limit: Option<i64>,
}

impl ClocksArgs {
    fn into_list_params(self) -> ListParams {
        ListParams {
            q: self.query,
            country: self.country,
            tz: None,
            active_only: false,
            limit: self.limit,
            offset: None,
            sort: self.sort,
            dir: self.dir,
        }
    }
}

/// Run `clocks`: print the table for the embedded directory.
pub fn run(args: ClocksArgs) -> anyhow::Result<()> {
    let directory = ZoneDirectory::builtin()?;
    let source = TzdbOffsets::new();
    let page = world_clock_page(&source, &directory, &args.into_list_params(), chrono::Utc::now());
    print!("{}", render_table(&page));
    Ok(())
}

fn render_table(page: &ClockPage) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<22} {:<16} {:<26} {:<10} {:<10} {}\n",
        "COUNTRY", "CITY", "ZONE", "TIME", "OFFSET", "DST"
    ));
    for row in &page.clocks {
        out.push_str(&format!(
            "{:<22} {:<16} {:<26} {:<10} {:<10} {}\n",
            row.country,
            row.city.as_deref().unwrap_or("-"),
            row.time_zone.as_str(),
            row.time24,
            row.offset,
            if row.is_dst { "yes" } else { "no" },
        ));
    }
    out.push_str(&format!(
        "{} of {} zones (sorted by {:?} {:?})\n",
        page.count, page.total, page.sort, page.dir
    ));
    out
}
