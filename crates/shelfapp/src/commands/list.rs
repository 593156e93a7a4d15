use super::sort::sorted;
use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::state::{AppState, Section};
use crate::view::render_cards;

/// Cards for the results view, in the selected sort order.
pub fn results(state: &AppState) -> CmdResult {
    let books = sorted(state.results(), state.sort_order());
    let mut result = CmdResult::default().with_cards(render_cards(&books, state, &Section::Results));
    if books.is_empty() {
        result.add_message(CmdMessage::info("No books to display."));
    }
    result
}

/// Cards for any section.
pub fn run(state: &AppState, section: &Section) -> Result<CmdResult> {
    let name = match section {
        Section::Results => return Ok(results(state)),
        Section::Collection(name) => name,
    };

    let collection = state.collection(name)?;
    let mut result =
        CmdResult::default().with_cards(render_cards(collection.books(), state, section));
    if collection.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Your {} is empty.",
            name.display_name()
        )));
    }
    Ok(result)
}
