use text_size::{TextRange, TextSize};

/// A value that covers a range of the source text.
pub trait Locatable {
    fn range(&self) -> TextRange;

    fn start(&self) -> TextSize {
        self.range().start()
    }
}

impl Locatable for TextRange {
    fn range(&self) -> TextRange {
        *self
    }
}
