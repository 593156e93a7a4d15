//! # View Models
//!
//! Pure mapping from a [`BookRecord`] plus its membership flags to a
//! [`BookCard`]. Clients (the CLI, or anything else) draw cards; they never
//! look at collections themselves, so every view of a book shows the same
//! badges for the same state.

use crate::commands::membership::flags;
use crate::model::{BookRecord, CollectionName};
use crate::state::{AppState, Section};
use serde::Serialize;

/// Characters of description shown on a card.
pub const EXCERPT_CHARS: usize = 150;

/// The main action a card offers for reading the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "lowercase")]
pub enum PrimaryLink {
    Download(String),
    Preview(String),
    Unavailable,
}

impl PrimaryLink {
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryLink::Download(_) => "Download PDF",
            PrimaryLink::Preview(_) => "Preview",
            PrimaryLink::Unavailable => "No PDF Available",
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            PrimaryLink::Download(url) | PrimaryLink::Preview(url) => Some(url),
            PrimaryLink::Unavailable => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub collection: CollectionName,
    pub active: bool,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookCard {
    pub id: String,
    pub title: String,
    pub byline: String,
    pub excerpt: String,
    pub image_url: Option<String>,
    pub primary: PrimaryLink,
    pub web_reader_link: Option<String>,
    pub categories: Vec<String>,
    pub badges: Vec<Badge>,
    /// Set when the card is drawn inside a collection panel.
    pub remove_from: Option<CollectionName>,
}

impl BookCard {
    pub fn badge(&self, collection: &CollectionName) -> Option<&Badge> {
        self.badges.iter().find(|b| &b.collection == collection)
    }
}

pub fn badge_label(collection: &CollectionName, active: bool) -> String {
    if active {
        format!("Remove from {}", collection.display_name())
    } else {
        format!("Add to {}", collection.display_name())
    }
}

pub fn render_card(
    book: &BookRecord,
    membership: &[(CollectionName, bool)],
    context: &Section,
) -> BookCard {
    let primary = match (&book.download_url, &book.preview_link) {
        (Some(url), _) => PrimaryLink::Download(url.clone()),
        (None, Some(url)) => PrimaryLink::Preview(url.clone()),
        (None, None) => PrimaryLink::Unavailable,
    };

    let badges = membership
        .iter()
        .map(|(name, active)| Badge {
            collection: name.clone(),
            active: *active,
            label: badge_label(name, *active),
        })
        .collect();

    let remove_from = match context {
        Section::Collection(name) => Some(name.clone()),
        Section::Results => None,
    };

    BookCard {
        id: book.id.clone(),
        title: book.title.clone(),
        byline: format!("by {}", book.authors.join(", ")),
        excerpt: excerpt(&book.description),
        image_url: book.image_url.clone(),
        primary,
        web_reader_link: book.web_reader_link.clone(),
        categories: book.categories.iter().cloned().collect(),
        badges,
        remove_from,
    }
}

/// Cards for `books`, with badges computed from the current state.
pub fn render_cards<'a, I>(books: I, state: &AppState, context: &Section) -> Vec<BookCard>
where
    I: IntoIterator<Item = &'a BookRecord>,
{
    books
        .into_iter()
        .map(|book| render_card(book, &flags(state, &book.id), context))
        .collect()
}

fn excerpt(description: &str) -> String {
    let head: String = description.chars().take(EXCERPT_CHARS).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PLACEHOLDER_AUTHOR;

    fn flags_for(fav: bool, list: bool) -> Vec<(CollectionName, bool)> {
        vec![
            (CollectionName::favorites(), fav),
            (CollectionName::reading_list(), list),
        ]
    }

    #[test]
    fn download_link_wins_over_preview() {
        let mut book = BookRecord::new("a");
        book.download_url = Some("d".into());
        book.preview_link = Some("p".into());
        let card = render_card(&book, &[], &Section::Results);
        assert_eq!(card.primary, PrimaryLink::Download("d".into()));
    }

    #[test]
    fn preview_used_without_download() {
        let mut book = BookRecord::new("a");
        book.preview_link = Some("p".into());
        let card = render_card(&book, &[], &Section::Results);
        assert_eq!(card.primary.label(), "Preview");
        assert_eq!(card.primary.url(), Some("p"));
    }

    #[test]
    fn no_links_means_unavailable() {
        let card = render_card(&BookRecord::new("a"), &[], &Section::Results);
        assert_eq!(card.primary, PrimaryLink::Unavailable);
        assert_eq!(card.primary.label(), "No PDF Available");
    }

    #[test]
    fn badges_follow_membership_flags() {
        let card = render_card(&BookRecord::new("a"), &flags_for(true, false), &Section::Results);
        let fav = card.badge(&CollectionName::favorites()).unwrap();
        let list = card.badge(&CollectionName::reading_list()).unwrap();
        assert!(fav.active);
        assert_eq!(fav.label, "Remove from favorites");
        assert!(!list.active);
        assert_eq!(list.label, "Add to reading list");
    }

    #[test]
    fn byline_joins_authors() {
        let book = BookRecord::new("a").with_authors(["Ann", "Bob"]);
        let card = render_card(&book, &[], &Section::Results);
        assert_eq!(card.byline, "by Ann, Bob");

        let card = render_card(&BookRecord::new("b"), &[], &Section::Results);
        assert_eq!(card.byline, format!("by {}", PLACEHOLDER_AUTHOR));
    }

    #[test]
    fn excerpt_truncates_on_characters() {
        let mut book = BookRecord::new("a");
        book.description = "é".repeat(200);
        let card = render_card(&book, &[], &Section::Results);
        assert_eq!(card.excerpt.chars().count(), EXCERPT_CHARS + 3);
        assert!(card.excerpt.ends_with("..."));
    }

    #[test]
    fn collection_context_offers_removal() {
        let panel = Section::Collection(CollectionName::favorites());
        let card = render_card(&BookRecord::new("a"), &flags_for(true, false), &panel);
        assert_eq!(card.remove_from, Some(CollectionName::favorites()));

        let card = render_card(&BookRecord::new("a"), &flags_for(true, false), &Section::Results);
        assert!(card.remove_from.is_none());
    }
}
