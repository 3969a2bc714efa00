//! Session selector and per-session state

mod selector;
mod state;

pub use selector::{ExhaustionPolicy, ServedIds, select_next, shuffle_question};
pub use state::SessionState;
