//! # Transition Subcommands
//!
//! `next`, `prev`, and `has-dst`: single-zone queries against the embedded
//! IANA database. Transitions print as the same JSON shape the API serves.

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Args;

use wclock_core::{find_transition, has_transition_near, SearchDirection, TzdbOffsets, ZoneId};

/// Arguments for the `next` and `prev` subcommands.
#[derive(Args, Debug)]
pub struct TransitionArgs {
    /// IANA zone to search, e.g. America/New_York.
    pub zone: String,

    /// Reference instant, RFC 3339 (default: now).
    #[arg(long)]
    pub at: Option<String>,
}

/// Arguments for the `has-dst` subcommand.
#[derive(Args, Debug)]
pub struct HasDstArgs {
    /// IANA zone to test.
    pub zone: String,

    /// Reference instant, RFC 3339 (default: now).
    #[arg(long)]
    pub at: Option<String>,
}

fn parse_reference(raw: Option<&str>) -> anyhow::Result<DateTime<Utc>> {
    match raw {
        Some(s) => {
            let parsed = DateTime::parse_from_rfc3339(s)
                .with_context(|| format!("invalid RFC 3339 instant: {s}"))?;
            Ok(parsed.with_timezone(&Utc))
        }
        None => Ok(Utc::now()),
    }
}

fn validated_zone(name: &str) -> anyhow::Result<ZoneId> {
    ZoneId::new(name).context("zone must be a known IANA identifier")
}

/// Run `next` or `prev`: print the located transition as JSON, or a note
/// when the horizon holds none.
pub fn run(args: &TransitionArgs, direction: SearchDirection) -> anyhow::Result<()> {
    let zone = validated_zone(&args.zone)?;
    let reference = parse_reference(args.at.as_deref())?;
    let source = TzdbOffsets::new();

    match find_transition(&source, &zone, reference, direction) {
        Some(transition) => {
            println!("{}", serde_json::to_string_pretty(&transition)?);
        }
        None => {
            println!("no transition within 450 days of {reference} for {zone}");
        }
    }
    Ok(())
}

/// Run `has-dst`: report whether the zone has a transition near the
/// reference. The caller turns `false` into a nonzero exit status.
pub fn run_has_dst(args: &HasDstArgs) -> anyhow::Result<bool> {
    let zone = validated_zone(&args.zone)?;
    let reference = parse_reference(args.at.as_deref())?;
    let source = TzdbOffsets::new();

    let observes = has_transition_near(&source, &zone, reference);
    println!(
        "{} {} DST near {}",
        zone,
        if observes { "observes" } else { "does not observe" },
        reference
    );
    Ok(observes)
}
