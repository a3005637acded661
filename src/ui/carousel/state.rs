use crate::ui::mvi::UiState;

/// Position on the gallery ring.
///
/// `current` always lies in `[0, count)` once `count > 0`; the reducer is
/// the only writer and preserves that bound through every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselState {
    pub current: usize,
    pub count: usize,
}

impl UiState for CarouselState {}

impl CarouselState {
    /// Fresh state pointing at the first artwork.
    pub fn new(count: usize) -> Self {
        Self { current: 0, count }
    }
}
