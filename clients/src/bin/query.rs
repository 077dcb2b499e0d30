//! `wot-query`: runs a constraint query over Thing Descriptions.
//!
//! Every `--thing` file holds one or more Thing Descriptions, either compact
//! against the TD 1.0 context or already in expanded JSON-LD form. No context
//! is fetched over the network. The constraint file holds a `ThingConstraint` in its JSON
//! form (`type`, `property`, `action`, `dataProperty`, ...); without one the
//! empty constraint is used and everything matches.
//!
//! **Usage:**
//! ```
//! wot-query --thing <FILE>... [--constraint <FILE>] [--select things|properties|actions]
//!           [--prefix <PREFIX=IRI>]... [--compact]
//! ```
//!
//! Prints the matches as a pretty JSON array on stdout.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context as _, Result};
use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env, Target};
use log::info;
use serde_json::Value;
use wot_affordances::{processing, Context, JsonLdExpander, ThingConstraint, ThingDescriptionSet};

/// What the query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Select {
    /// Whole Thing Descriptions.
    Things,
    /// Property affordances.
    Properties,
    /// Action affordances.
    Actions,
}

/// Query WoT Thing Descriptions by semantic constraints.
#[derive(Parser)]
#[command(
    name = "wot-query",
    about = "Find things, properties and actions matching a constraint"
)]
struct Args {
    /// Thing Description file, compact or expanded; may be repeated.
    #[arg(long = "thing", required = true)]
    things: Vec<PathBuf>,

    /// JSON constraint file (default: the empty constraint).
    #[arg(long)]
    constraint: Option<PathBuf>,

    /// Kind of entity to return.
    #[arg(long, value_enum, default_value_t = Select::Properties)]
    select: Select,

    /// Additional compaction prefix as PREFIX=IRI; may be repeated.
    #[arg(long = "prefix", value_parser = parse_prefix)]
    prefixes: Vec<(String, String)>,

    /// Compact the results instead of printing expanded JSON-LD.
    #[arg(long)]
    compact: bool,
}

fn parse_prefix(raw: &str) -> Result<(String, String)> {
    let (prefix, iri) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected PREFIX=IRI, got '{raw}'"))?;
    Ok((prefix.trim().to_owned(), iri.trim().to_owned()))
}

fn load_set(paths: &[PathBuf]) -> Result<ThingDescriptionSet> {
    let expander = JsonLdExpander::new();
    let mut set = ThingDescriptionSet::new();
    for path in paths {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let document: Value = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing {}", path.display()))?;
        let things = processing::things_from_expanded(&document, &expander)
            .with_context(|| format!("decoding {}", path.display()))?;
        info!("loaded {} things from {}", things.len(), path.display());
        set.extend(things);
    }
    Ok(set)
}

fn load_constraint(path: Option<&Path>) -> Result<ThingConstraint> {
    let Some(path) = path else {
        return Ok(ThingConstraint::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing constraint {}", path.display()))
}

fn build_context(prefixes: &[(String, String)]) -> Result<Context> {
    prefixes.iter().try_fold(Context::default(), |ctx, (prefix, iri)| {
        ctx.with_prefix(prefix, iri)
            .with_context(|| format!("registering prefix '{prefix}'"))
    })
}

fn render<T: serde::Serialize>(items: &[&T], context: Option<&Context>) -> Result<Value> {
    let rendered = items
        .iter()
        .map(|item| match context {
            Some(ctx) => processing::compact(*item, ctx).map_err(anyhow::Error::from),
            None => serde_json::to_value(item).map_err(anyhow::Error::from),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Value::Array(rendered))
}

fn run_query(
    set: &ThingDescriptionSet,
    constraint: &ThingConstraint,
    select: Select,
    context: Option<&Context>,
) -> Result<Value> {
    match select {
        Select::Things => render(&set.things(constraint), context),
        Select::Properties => render(&set.property_affordances(constraint), context),
        Select::Actions => render(&set.action_affordances(constraint), context),
    }
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .init();

    let args = Args::parse();

    let set = load_set(&args.things)?;
    let constraint = load_constraint(args.constraint.as_deref())?;
    let context = if args.compact {
        Some(build_context(&args.prefixes)?)
    } else {
        None
    };

    let output = run_query(&set, &constraint, args.select, context.as_ref())?;
    info!(
        "{} matches among {} things",
        output.as_array().map_or(0, Vec::len),
        set.len()
    );

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
