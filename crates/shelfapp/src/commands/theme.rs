use super::{CmdMessage, CmdResult};
use crate::state::AppState;
use crate::store::CollectionStore;
use tracing::warn;

/// Flip between light and dark and persist the choice.
pub fn toggle<S: CollectionStore>(store: &mut S, state: &mut AppState) -> CmdResult {
    let theme = state.theme().toggled();
    state.set_theme(theme);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Theme set to {}", theme)));
    if let Err(e) = store.save_theme(theme) {
        warn!(error = %e, "could not persist theme");
        result.add_message(CmdMessage::warning(format!(
            "Could not save theme: {}",
            e
        )));
    }
    result
}

pub fn show(state: &AppState) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(state.theme().to_string()));
    result
}
