//! # Interactive Shell
//!
//! One task owns the API and reacts to three event sources:
//!
//! - **stdin lines**: parsed into [`ShellCommand`]s and run against the API
//! - **search completions**: searches run as spawned tasks and send their
//!   outcome back tagged with the ticket they were issued; the API drops
//!   outcomes whose ticket has been superseded
//! - **connectivity changes**: an offline/online banner
//!
//! Only this loop mutates state, so results and collections never change
//! underneath a command.

use super::render::{print_messages, print_result, print_section_header};
use super::setup::OutputMode;
use anyhow::Result;
use colored::Colorize;
use shelfapp::api::ShelfApi;
use shelfapp::commands::search::{self, SearchInput, SearchTrigger};
use shelfapp::commands::sort::SortOrder;
use shelfapp::commands::CmdResult;
use shelfapp::init::ShelfContext;
use shelfapp::model::{FAVORITES, READING_LIST};
use shelfapp::search::{BookSource, GoogleBooksClient, SearchOutcome};
use shelfapp::state::{SearchTicket, Section};
use shelfapp::store::fs::FileStore;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

const HELP: &str = "\
Commands:
  search <text>         search the catalog (blank text uses the default query)
  category <name>       filter by subject; `category` alone clears it
  sort <order>          relevance, title or author
  fav <id>              toggle favorites
  read <id>             toggle reading list
  toggle <list> <id>    toggle any collection
  1 / 2 / 3             show results / first / second collection
  t                     switch light/dark theme
  ?                     this help
  q                     quit";

type Completion = (SearchTicket, SearchOutcome);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ShellCommand {
    Search(String),
    Category(Option<String>),
    Sort(SortOrder),
    Toggle { collection: String, id: String },
    Section(usize),
    Theme,
    Help,
    Quit,
    Empty,
}

pub(super) fn parse_line(line: &str) -> std::result::Result<ShellCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let needs_id = |what: &str| format!("usage: {} <id>", what);
    match word {
        "" => Ok(ShellCommand::Empty),
        "q" | "quit" | "exit" => Ok(ShellCommand::Quit),
        "?" | "h" | "help" => Ok(ShellCommand::Help),
        "t" | "theme" => Ok(ShellCommand::Theme),
        "s" | "search" => Ok(ShellCommand::Search(rest.to_string())),
        "c" | "category" => Ok(ShellCommand::Category(
            (!rest.is_empty()).then(|| rest.to_string()),
        )),
        "sort" => rest
            .parse::<SortOrder>()
            .map(ShellCommand::Sort)
            .map_err(|e| e.to_string()),
        "f" | "fav" if !rest.is_empty() => Ok(ShellCommand::Toggle {
            collection: FAVORITES.to_string(),
            id: rest.to_string(),
        }),
        "r" | "read" if !rest.is_empty() => Ok(ShellCommand::Toggle {
            collection: READING_LIST.to_string(),
            id: rest.to_string(),
        }),
        "f" | "fav" => Err(needs_id("fav")),
        "r" | "read" => Err(needs_id("read")),
        "toggle" => match rest.split_once(char::is_whitespace) {
            Some((collection, id)) if !id.trim().is_empty() => Ok(ShellCommand::Toggle {
                collection: collection.to_string(),
                id: id.trim().to_string(),
            }),
            _ => Err("usage: toggle <collection> <id>".to_string()),
        },
        number if number.chars().all(|c| c.is_ascii_digit()) => number
            .parse::<usize>()
            .ok()
            .filter(|n| *n >= 1)
            .map(ShellCommand::Section)
            .ok_or_else(|| format!("no section {}", number)),
        // Bare text searches.
        _ => Ok(ShellCommand::Search(line.to_string())),
    }
}

/// Section for a 1-based number: 1 is the results, then collections in order.
fn section_for(api: &ShelfApi<FileStore>, number: usize) -> Option<Section> {
    if number == 1 {
        return Some(Section::Results);
    }
    api.collection_names()
        .into_iter()
        .nth(number - 2)
        .map(Section::Collection)
}

/// JSON output stays a stream of documents, so there is no prompt.
fn prompt(output: OutputMode) {
    if output == OutputMode::Json {
        return;
    }
    print!("{} ", ">".bold());
    let _ = std::io::stdout().flush();
}

fn launch(
    api: &mut ShelfApi<FileStore>,
    source: &GoogleBooksClient,
    input: &SearchInput,
    tx: &mpsc::UnboundedSender<Completion>,
    output: OutputMode,
) {
    let Some(pending) = api.begin_search(input) else {
        print_messages(&[search::too_short_message(api.settings())]);
        return;
    };
    if output == OutputMode::Text {
        println!("{}", format!("Searching for \"{}\"...", pending.request.query).dimmed());
    }
    debug!(ticket = pending.ticket.value(), "spawning search");

    let source = source.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = source.search(&pending.request).await;
        // The receiver only goes away when the shell exits.
        let _ = tx.send((pending.ticket, outcome));
    });
}

fn show(api: &ShelfApi<FileStore>, result: &CmdResult, output: OutputMode) {
    if output == OutputMode::Text && !result.cards.is_empty() {
        print_section_header(api.state().section(), api.theme());
    }
    print_result(result, output, api.theme());
}

/// The visible section, if `result` changed it.
fn redraw_target<'a>(visible: &'a Section, result: &CmdResult) -> Option<&'a Section> {
    result.needs_refresh(visible).then_some(visible)
}

fn refresh(api: &ShelfApi<FileStore>, result: &CmdResult, output: OutputMode) {
    let Some(section) = redraw_target(api.state().section(), result) else {
        return;
    };
    match api.list(section) {
        Ok(view) => show(api, &view, output),
        Err(e) => eprintln!("Error: {}", e),
    }
}

pub async fn run(ctx: &mut ShelfContext, output: OutputMode) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();
    let mut online = ctx.connectivity.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input = SearchInput::new("");

    if output == OutputMode::Text {
        println!("{}", "shelf: type ? for help".dimmed());
    }
    if ctx.config.search_on_start {
        launch(&mut ctx.api, &ctx.source, &input, &tx, output);
    } else {
        let view = ctx.api.list(&Section::Results)?;
        show(&ctx.api, &view, output);
    }

    loop {
        prompt(output);
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let command = match parse_line(&line) {
                    Ok(command) => command,
                    Err(usage) => {
                        println!("{}", usage.yellow());
                        continue;
                    }
                };
                match command {
                    ShellCommand::Quit => break,
                    ShellCommand::Empty => {}
                    ShellCommand::Help => println!("{}", HELP),
                    ShellCommand::Search(text) => {
                        input.text = text;
                        launch(&mut ctx.api, &ctx.source, &input, &tx, output);
                    }
                    ShellCommand::Category(category) => {
                        input.category = category;
                        let changed = input.clone().triggered_by(SearchTrigger::CategoryChange);
                        launch(&mut ctx.api, &ctx.source, &changed, &tx, output);
                    }
                    ShellCommand::Sort(order) => {
                        let result = ctx.api.sort(order);
                        if ctx.api.state().section() == &Section::Results {
                            show(&ctx.api, &result, output);
                        }
                    }
                    ShellCommand::Toggle { collection, id } => {
                        match ctx.api.toggle(&collection, &id) {
                            Ok(result) => {
                                print_messages(&result.messages);
                                refresh(&ctx.api, &result, output);
                            }
                            Err(e) => println!("{}", e.to_string().red()),
                        }
                    }
                    ShellCommand::Section(number) => match section_for(&ctx.api, number) {
                        Some(section) => match ctx.api.switch_section(section) {
                            Ok(view) => show(&ctx.api, &view, output),
                            Err(e) => println!("{}", e.to_string().red()),
                        },
                        None => println!("{}", format!("no section {}", number).yellow()),
                    },
                    ShellCommand::Theme => {
                        let result = ctx.api.toggle_theme();
                        print_messages(&result.messages);
                    }
                }
            }
            Some((ticket, outcome)) = rx.recv() => {
                let Some(result) = ctx.api.finish_search(ticket, outcome) else {
                    continue;
                };
                println!();
                if ctx.api.state().section() == &Section::Results {
                    show(&ctx.api, &result, output);
                } else {
                    print_messages(&result.messages);
                    if !result.cards.is_empty() {
                        println!("{}", format!("{} results ready, press 1 to view", result.cards.len()).dimmed());
                    }
                }
            }
            Ok(()) = online.changed() => {
                let is_online = *online.borrow_and_update();
                println!();
                if is_online {
                    println!("{}", "Back online.".green());
                } else {
                    println!("{}", "You are offline. Please check your internet connection.".yellow());
                }
            }
        }
    }

    Ok(())
}
