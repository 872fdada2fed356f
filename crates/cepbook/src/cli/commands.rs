//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `handle_*()`: Per-command handlers that call the API and print its results
//! - Rendering lives in `render.rs`, argument definitions in `setup.rs`

use super::render::{
    print_messages, render_address_list, render_full_addresses, render_greeting,
};
use super::setup::{Cli, Commands};
use super::styles;
use anyhow::Context;
use cepbookapp::init::{initialize, CepBookContext};
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.data_dir.clone());
    tracing::debug!(data_dir = %ctx.data_dir.display(), "context ready");
    if let Some(warning) = &ctx.api.load_report().warning {
        eprintln!("{}", styles::warning().apply_to(warning));
    }

    match cli.command {
        Some(Commands::List { query, json }) => handle_list(&ctx, query, json),
        Some(Commands::Add { cep }) => handle_add(&mut ctx, &cep),
        Some(Commands::View { indexes }) => handle_view(&ctx, &indexes),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, &indexes),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        None => handle_list(&ctx, None, false),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "cepbookapp=debug,cepbook=debug,warn"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_list(ctx: &CepBookContext, query: Option<String>, json: bool) -> anyhow::Result<()> {
    let result = ctx.api.list(query.as_deref().unwrap_or(""))?;

    if json {
        let output = serde_json::to_string_pretty(&result.listed_addresses)
            .context("failed to encode addresses as JSON")?;
        println!("{}", output);
        return Ok(());
    }

    print!("{}", render_greeting(&ctx.session.greeting()));
    print!("{}", render_address_list(&result.listed_addresses));
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut CepBookContext, cep: &str) -> anyhow::Result<()> {
    let resolver = ctx.resolver();
    let result = ctx.api.add_address(&resolver, cep)?;
    print_messages(&result.messages);
    print!("{}", render_full_addresses(&result.affected_addresses));
    Ok(())
}

fn handle_view(ctx: &CepBookContext, indexes: &[String]) -> anyhow::Result<()> {
    let result = ctx.api.view(indexes)?;
    print!("{}", render_full_addresses(&result.listed_addresses));
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut CepBookContext, indexes: &[String]) -> anyhow::Result<()> {
    let result = ctx.api.delete(indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut CepBookContext, yes: bool) -> anyhow::Result<()> {
    if !yes {
        let count = ctx.api.clear_preview();
        if count == 0 {
            println!("Nothing to clear.");
        } else {
            println!(
                "This would delete {} address(es). Run `cepbook clear --yes` to confirm.",
                count
            );
        }
        return Ok(());
    }

    let result = ctx.api.clear()?;
    print_messages(&result.messages);
    Ok(())
}
