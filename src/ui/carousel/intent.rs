use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselIntent {
    /// Advance to the following artwork, wrapping to the first after the
    /// last.
    Next,
    /// Step back to the preceding artwork, wrapping to the last from the
    /// first.
    Previous,
}

impl Intent for CarouselIntent {}
