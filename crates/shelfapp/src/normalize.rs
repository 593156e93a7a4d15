//! Raw search item → [`BookRecord`].
//!
//! Items come straight from the volumes endpoint and any part of them may be
//! missing or have an unexpected shape. Lookups go through JSON pointers so a
//! bad field only loses that field; the rest of the record still comes
//! through, and absent fields take the placeholders from [`crate::model`].

use crate::model::{BookRecord, PLACEHOLDER_AUTHOR, PLACEHOLDER_DESCRIPTION, PLACEHOLDER_TITLE};
use serde_json::Value;
use std::collections::BTreeSet;

pub fn normalize(item: &Value) -> BookRecord {
    let authors = string_list(item.pointer("/volumeInfo/authors"));
    let authors = if authors.is_empty() {
        vec![PLACEHOLDER_AUTHOR.to_string()]
    } else {
        authors
    };

    BookRecord {
        id: text(item.pointer("/id")).unwrap_or_default(),
        title: text(item.pointer("/volumeInfo/title"))
            .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string()),
        authors,
        description: text(item.pointer("/volumeInfo/description"))
            .unwrap_or_else(|| PLACEHOLDER_DESCRIPTION.to_string()),
        image_url: text(item.pointer("/volumeInfo/imageLinks/thumbnail")),
        download_url: text(item.pointer("/accessInfo/pdf/downloadLink")),
        web_reader_link: text(item.pointer("/accessInfo/webReaderLink")),
        preview_link: text(item.pointer("/volumeInfo/previewLink")),
        categories: string_list(item.pointer("/volumeInfo/categories"))
            .into_iter()
            .collect::<BTreeSet<_>>(),
    }
}

/// Non-empty string value, or `None`.
fn text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(|v| text(Some(v))).collect())
        .unwrap_or_default()
}
