use clap::Parser;
use directories::ProjectDirs;
use principia::api::{ConfigAction, PrincipiaApi};
use principia::error::Result;
use principia::store::stub::StubStore;
use std::path::PathBuf;

mod args;
mod print;

use args::{Cli, Commands};
use print::{print_config, print_journal_views, print_messages, print_passes, print_passes_json};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PrincipiaApi<StubStore>,
    verbose: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Filter { color, size, json }) => {
            handle_filter(&ctx, color.as_deref(), size.as_deref(), json)
        }
        Some(Commands::Journal {
            entries,
            remove,
            destination,
            overwrite,
        }) => handle_journal(&mut ctx, entries, remove, destination, overwrite),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => {
            handle_filter(&ctx, None, None, false)?;
            handle_journal(&mut ctx, Vec::new(), Vec::new(), None, false)
        }
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let api = PrincipiaApi::new(StubStore::new(), resolve_config_dir(cli))?;
    Ok(AppContext {
        api,
        verbose: cli.verbose,
    })
}

fn resolve_config_dir(cli: &Cli) -> Option<PathBuf> {
    if let Some(dir) = &cli.config_dir {
        return Some(dir.clone());
    }
    if let Some(home) = std::env::var_os("PRINCIPIA_HOME") {
        return Some(PathBuf::from(home));
    }
    ProjectDirs::from("com", "principia", "principia").map(|dirs| dirs.config_dir().to_path_buf())
}

fn handle_filter(
    ctx: &AppContext,
    color: Option<&str>,
    size: Option<&str>,
    json: bool,
) -> Result<()> {
    let result = ctx.api.filter_products(color, size)?;
    if json {
        print_passes_json(&result.filter_passes)?;
    } else {
        print_passes(&result.filter_passes, ctx.api.separator());
    }
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_journal(
    ctx: &mut AppContext,
    entries: Vec<String>,
    remove: Vec<i64>,
    destination: Option<String>,
    overwrite: bool,
) -> Result<()> {
    let result = ctx.api.journal(entries, remove, destination, overwrite)?;
    print_journal_views(&result.journal_views);
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = action == ConfigAction::ShowAll;

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    // The requested value is the output here, so never hide it.
    print_messages(&result.messages, true);
    Ok(())
}
