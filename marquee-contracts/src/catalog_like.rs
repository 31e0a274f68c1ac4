use marquee_model::{CategoryKey, Content, ContentId};

/// Read-only access to the externally supplied content catalog.
pub trait CatalogSource {
    /// Category keys in presentation order.
    fn category_keys(&self) -> Vec<&CategoryKey>;

    /// Ordered entries of one category, if the catalog has it.
    fn items(&self, key: &CategoryKey) -> Option<&[Content]>;

    /// First entry with `id` across all categories, in category order.
    fn find_by_id(&self, id: ContentId) -> Option<&Content> {
        self.category_keys()
            .into_iter()
            .filter_map(|key| self.items(key))
            .flat_map(|items| items.iter())
            .find(|item| item.id == id)
    }

    /// Every entry of every category, in category order. Entries listed in
    /// several categories appear once per listing.
    fn all_items(&self) -> Vec<&Content> {
        self.category_keys()
            .into_iter()
            .filter_map(|key| self.items(key))
            .flat_map(|items| items.iter())
            .collect()
    }
}
