//! Unidirectional state flow shared by the search and detail screens.
//!
//! A holder turns user actions and request progress into intents and
//! dispatches them into its [`Store`]. The store runs the screen's
//! [`Reducer`] and publishes the new state over a `watch` channel; the
//! render loop reads snapshots.
//!
//! ```text
//! holder ──intent──→ Store ──reduce──→ state ──snapshot──→ render
//!   ↑                                                        │
//!   └──────────────────────── key press ─────────────────────┘
//! ```

mod reducer;
mod store;

pub use reducer::{Intent, Reducer, UiState};
pub use store::{RequestId, RequestSequence, Store};
