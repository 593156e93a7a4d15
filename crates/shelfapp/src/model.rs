use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

pub const PLACEHOLDER_TITLE: &str = "No Title";
pub const PLACEHOLDER_AUTHOR: &str = "Unknown Author";
pub const PLACEHOLDER_DESCRIPTION: &str = "No description available.";

pub const FAVORITES: &str = "favorites";
pub const READING_LIST: &str = "readingList";

/// One searchable book, as shown everywhere in the app.
///
/// Records are never edited after creation: toggling moves clones in and out
/// of collections. The serialized form uses camelCase keys so stored lists
/// stay readable by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub id: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_authors")]
    pub authors: Vec<String>,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub web_reader_link: Option<String>,
    #[serde(default)]
    pub preview_link: Option<String>,
    #[serde(default)]
    pub categories: BTreeSet<String>,
}

fn default_title() -> String {
    PLACEHOLDER_TITLE.to_string()
}

fn default_authors() -> Vec<String> {
    vec![PLACEHOLDER_AUTHOR.to_string()]
}

fn default_description() -> String {
    PLACEHOLDER_DESCRIPTION.to_string()
}

impl BookRecord {
    /// A record with only an id; every other field takes its placeholder.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: default_title(),
            authors: default_authors(),
            description: default_description(),
            image_url: None,
            download_url: None,
            web_reader_link: None,
            preview_link: None,
            categories: BTreeSet::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_authors<I, A>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        let authors: Vec<String> = authors.into_iter().map(Into::into).collect();
        self.authors = if authors.is_empty() {
            default_authors()
        } else {
            authors
        };
        self
    }

    /// First listed author; authors are never empty.
    pub fn first_author(&self) -> &str {
        self.authors
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_AUTHOR)
    }
}

/// Name of a persisted collection. Doubles as its storage key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionName(String);

impl CollectionName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if is_valid_key(&name) {
            Ok(Self(name))
        } else {
            Err(ShelfError::InvalidKey(name))
        }
    }

    pub fn favorites() -> Self {
        Self(FAVORITES.to_string())
    }

    pub fn reading_list() -> Self {
        Self(READING_LIST.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human label: `readingList` becomes "reading list".
    pub fn display_name(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + 4);
        for c in self.0.chars() {
            if c == '_' || c == '-' {
                out.push(' ');
            } else if c.is_ascii_uppercase() {
                if !out.is_empty() && !out.ends_with(' ') {
                    out.push(' ');
                }
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CollectionName {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for CollectionName {
    type Error = ShelfError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CollectionName> for String {
    fn from(name: CollectionName) -> Self {
        name.0
    }
}

/// Storage keys are used as file names, so they stay plain.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ShelfError::Api(format!("Unknown theme: {}", other))),
        }
    }
}
