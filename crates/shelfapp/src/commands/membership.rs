use crate::error::Result;
use crate::model::CollectionName;
use crate::state::AppState;

/// Whether `id` is in the named collection. Linear scan; collections stay small.
pub fn is_member(state: &AppState, collection: &CollectionName, id: &str) -> Result<bool> {
    Ok(state.collection(collection)?.contains(id))
}

/// Membership of `id` in every configured collection, in configured order.
pub fn flags(state: &AppState, id: &str) -> Vec<(CollectionName, bool)> {
    state
        .collections()
        .iter()
        .map(|c| (c.name().clone(), c.contains(id)))
        .collect()
}

/// Collections currently holding `id`.
pub fn memberships(state: &AppState, id: &str) -> Vec<CollectionName> {
    flags(state, id)
        .into_iter()
        .filter_map(|(name, member)| member.then_some(name))
        .collect()
}
