use marquee_model::ContentId;

/// Per-user preference persistence keyed by content id.
///
/// Every operation is synchronous and durable once it returns. Implementations
/// must never fail outward: when the backing storage is unavailable they log
/// and answer with the safe default (empty list, `false`).
pub trait PreferencesStore {
    /// Ids on "my list", oldest first.
    fn my_list(&self) -> Vec<ContentId>;

    /// Returns `true` when the id was newly added.
    fn add_to_list(&mut self, id: ContentId) -> bool;

    /// Returns `true` when the id was present and removed.
    fn remove_from_list(&mut self, id: ContentId) -> bool;

    fn is_in_list(&self, id: ContentId) -> bool {
        self.my_list().contains(&id)
    }

    /// Flip the like flag; returns the new state.
    fn toggle_like(&mut self, id: ContentId) -> bool;

    fn is_liked(&self, id: ContentId) -> bool;

    fn remove_like(&mut self, id: ContentId);

    /// Flip the dislike flag; returns the new state.
    fn toggle_dislike(&mut self, id: ContentId) -> bool;

    fn is_disliked(&self, id: ContentId) -> bool;

    fn remove_dislike(&mut self, id: ContentId);
}
