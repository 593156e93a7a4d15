//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_tracing()`: stderr logging, `warn` unless `-v` or `RUST_LOG`
//! - `handle_*()`: Per-command handlers that call the API and print the result

use super::render::{print_json, print_messages, print_result, print_section_header};
use super::setup::{Cli, Commands, CompletionShell, OutputMode, ResolveArgs, SortArg};
use super::shell;
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use serde::Serialize;
use shelfapp::commands::search::SearchInput;
use shelfapp::init::{initialize, ShelfContext};
use shelfapp::model::{FAVORITES, READING_LIST};
use shelfapp::state::Section;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Completions don't need a data directory.
    if let Some(Commands::Completions { shell }) = &cli.command {
        handle_completions(*shell);
        return Ok(());
    }

    let mut ctx = initialize(cli.data.clone()).context("could not initialize shelf")?;
    let output = cli.output;
    let runtime = tokio::runtime::Runtime::new().context("could not start async runtime")?;

    match cli.command {
        Some(Commands::Search {
            text,
            category,
            sort,
        }) => runtime.block_on(handle_search(&mut ctx, text, category, sort, output)),
        Some(Commands::List { collection }) => handle_list(&mut ctx, &collection, output),
        Some(Commands::Toggle {
            collection,
            id,
            resolve,
        }) => runtime.block_on(handle_toggle(&mut ctx, &collection, &id, resolve, output)),
        Some(Commands::Fav { id, resolve }) => {
            runtime.block_on(handle_toggle(&mut ctx, FAVORITES, &id, resolve, output))
        }
        Some(Commands::Read { id, resolve }) => {
            runtime.block_on(handle_toggle(&mut ctx, READING_LIST, &id, resolve, output))
        }
        Some(Commands::Theme { toggle }) => handle_theme(&mut ctx, toggle, output),
        Some(Commands::Collections) => handle_collections(&ctx, output),
        Some(Commands::Completions { .. }) => Ok(()),
        Some(Commands::Shell) | None => runtime.block_on(shell::run(&mut ctx, output)),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("shelf=debug,shelfapp=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // A subscriber may already be set when running under a test harness.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

async fn handle_search(
    ctx: &mut ShelfContext,
    text: Vec<String>,
    category: Option<String>,
    sort: SortArg,
    output: OutputMode,
) -> Result<()> {
    ctx.api.sort(sort.into());
    let input = SearchInput::new(text.join(" ")).with_category(category);
    let result = ctx.api.search(&ctx.source, &input).await;

    if output == OutputMode::Text && !result.cards.is_empty() {
        print_section_header(&Section::Results, ctx.api.theme());
    }
    print_result(&result, output, ctx.api.theme());
    Ok(())
}

fn handle_list(ctx: &mut ShelfContext, collection: &str, output: OutputMode) -> Result<()> {
    let result = ctx.api.list_collection(collection)?;
    if output == OutputMode::Text {
        if let Some(section) = ctx
            .api
            .collection_names()
            .into_iter()
            .find(|name| name.as_str() == collection)
            .map(Section::Collection)
        {
            print_section_header(&section, ctx.api.theme());
        }
    }
    print_result(&result, output, ctx.api.theme());
    Ok(())
}

async fn handle_toggle(
    ctx: &mut ShelfContext,
    collection: &str,
    id: &str,
    resolve: ResolveArgs,
    output: OutputMode,
) -> Result<()> {
    if resolve.wants_search() {
        let input =
            SearchInput::new(resolve.query.unwrap_or_default()).with_category(resolve.category);
        let searched = ctx.api.search(&ctx.source, &input).await;
        // Only failures matter here; the cards are not what was asked for.
        if output == OutputMode::Text {
            print_messages(&searched.messages);
        }
    }

    let result = ctx.api.toggle(collection, id)?;
    print_result(&result, output, ctx.api.theme());
    Ok(())
}

fn handle_theme(ctx: &mut ShelfContext, toggle: bool, output: OutputMode) -> Result<()> {
    let result = if toggle {
        ctx.api.toggle_theme()
    } else {
        ctx.api.show_theme()
    };
    print_result(&result, output, ctx.api.theme());
    Ok(())
}

#[derive(Serialize)]
struct CollectionSummary {
    name: String,
    display_name: String,
    count: usize,
}

fn handle_collections(ctx: &ShelfContext, output: OutputMode) -> Result<()> {
    let summaries: Vec<CollectionSummary> = ctx
        .api
        .state()
        .collections()
        .iter()
        .map(|c| CollectionSummary {
            name: c.name().to_string(),
            display_name: c.name().display_name(),
            count: c.len(),
        })
        .collect();

    match output {
        OutputMode::Json => print_json(&summaries),
        OutputMode::Text => {
            for summary in &summaries {
                println!(
                    "{:<16} {:>4}  {}",
                    summary.name, summary.count, summary.display_name
                );
            }
        }
    }
    Ok(())
}

fn handle_completions(shell: CompletionShell) {
    let generator = match shell {
        CompletionShell::Bash => clap_complete::Shell::Bash,
        CompletionShell::Zsh => clap_complete::Shell::Zsh,
    };
    clap_complete::generate(
        generator,
        &mut Cli::command(),
        "shelf",
        &mut std::io::stdout(),
    );
}
