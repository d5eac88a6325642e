//! Chat/session state
//!
//! A record with independently-evolving fields, mutated only through
//! [`reduce`] - never by the view layer directly.

mod actions;
mod reducer;
mod state;

pub use actions::ChatAction;
pub use reducer::reduce;
pub use state::ChatState;
