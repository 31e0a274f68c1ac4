use marquee_model::Content;

/// The popup that shows one entry in full.
pub trait DetailPanel {
    fn open(&mut self, item: &Content);

    fn close(&mut self);

    fn is_open(&self) -> bool;
}
