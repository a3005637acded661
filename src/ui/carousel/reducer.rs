//! Reducer for carousel navigation.

use crate::ui::mvi::Reducer;

use super::intent::CarouselIntent;
use super::state::CarouselState;

/// Pure wrap-around navigation over the gallery ring.
///
/// `Next` uses modulo arithmetic, `Previous` an explicit zero check; both
/// keep the index inside `[0, count)` for every reachable state.
pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if state.count == 0 {
            // Nothing to select; an empty gallery never constructs, but
            // the reducer stays total regardless.
            return state;
        }

        let current = match intent {
            CarouselIntent::Next => (state.current + 1) % state.count,
            CarouselIntent::Previous => {
                if state.current == 0 {
                    state.count - 1
                } else {
                    state.current - 1
                }
            }
        };

        CarouselState { current, ..state }
    }
}
