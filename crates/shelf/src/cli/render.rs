use super::setup::OutputMode;
use colored::{Color, ColoredString, Colorize};
use serde::Serialize;
use shelfapp::commands::{CmdMessage, CmdResult, MessageLevel};
use shelfapp::model::Theme;
use shelfapp::state::Section;
use shelfapp::view::{BookCard, PrimaryLink};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const INDENT: &str = "    ";
const ACTIVE_MARKER: &str = "●";
const INACTIVE_MARKER: &str = "○";

fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::Blue,
        Theme::Dark => Color::BrightCyan,
    }
}

fn paint(text: &str, theme: Theme) -> ColoredString {
    text.color(accent(theme))
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn section_title(section: &Section) -> String {
    match section {
        Section::Results => "Search results".to_string(),
        Section::Collection(name) => {
            let label = name.display_name();
            let mut chars = label.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => label,
            }
        }
    }
}

pub(super) fn print_section_header(section: &Section, theme: Theme) {
    let title = section_title(section);
    println!();
    println!("{}", paint(&title, theme).bold());
    println!("{}", "─".repeat(title.width()).dimmed());
}

pub(super) fn badge_line(card: &BookCard) -> String {
    card.badges
        .iter()
        .map(|badge| {
            let marker = if badge.active {
                ACTIVE_MARKER
            } else {
                INACTIVE_MARKER
            };
            format!("{} {}", marker, badge.collection.display_name())
        })
        .collect::<Vec<_>>()
        .join("   ")
}

pub(super) fn link_line(card: &BookCard) -> String {
    let mut parts = Vec::new();
    match card.primary.url() {
        Some(url) => parts.push(format!("{}: {}", card.primary.label(), url)),
        None => parts.push(card.primary.label().to_string()),
    }
    if let Some(reader) = &card.web_reader_link {
        parts.push(format!("Read online: {}", reader));
    }
    parts.join("  ")
}

pub(super) fn print_cards(cards: &[BookCard], theme: Theme) {
    for (i, card) in cards.iter().enumerate() {
        let index = format!("{:>2}. ", i + 1);
        let available = LINE_WIDTH.saturating_sub(index.width());

        println!(
            "{}{}",
            paint(&index, theme),
            truncate_to_width(&card.title, available).bold()
        );
        println!("{}{}", INDENT, truncate_to_width(&card.byline, available).italic());
        println!(
            "{}{}",
            INDENT,
            truncate_to_width(&card.excerpt, available).dimmed()
        );
        if !card.categories.is_empty() {
            println!("{}{}", INDENT, card.categories.join(", ").dimmed());
        }
        let links = link_line(card);
        match card.primary {
            PrimaryLink::Unavailable => println!("{}{}", INDENT, links.dimmed()),
            _ => println!("{}{}", INDENT, links),
        }
        println!(
            "{}{}  {}",
            INDENT,
            badge_line(card),
            format!("[{}]", card.id).dimmed()
        );
        println!();
    }
}

/// Print a command result: cards then messages, or the whole result as JSON.
pub(super) fn print_result(result: &CmdResult, mode: OutputMode, theme: Theme) {
    match mode {
        OutputMode::Json => print_json(result),
        OutputMode::Text => {
            print_cards(&result.cards, theme);
            print_messages(&result.messages);
        }
    }
}

pub(super) fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: could not serialize output: {}", e),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
