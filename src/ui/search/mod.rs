//! Search screen: recent questions on entry, title search on demand.

mod holder;
mod intent;
mod reducer;
mod state;

pub use holder::SearchHolder;
pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::SearchState;
