//! Question detail screen: one question plus its answers.

mod holder;
mod intent;
mod reducer;
mod state;

pub use holder::DetailHolder;
pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::{DetailState, LoadSlot};
