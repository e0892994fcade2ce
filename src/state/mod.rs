//! Application state module

mod app_state;
mod forms;
mod reveal_state;

pub use app_state::*;
pub use forms::*;
