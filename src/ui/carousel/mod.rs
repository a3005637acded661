//! The carousel feature: a single selection cycling over the gallery.

mod intent;
mod reducer;
mod state;

pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use state::CarouselState;
