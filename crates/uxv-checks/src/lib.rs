//! Accessibility smoke checks for the workspace UI
//!
//! Two independent routines, each run in its own browser session:
//!
//! - [`ActivityBarCheck`]: Dashboard button plus sidebar collapse/expand toggle
//! - [`SpotlightCheck`]: Search button opens the Spotlight dialog, a query
//!   renders a listbox of options and the first option is selected
//!
//! [`run_check`] wraps either one in the navigate / verify / screenshot
//! sequence with a single failure path and guaranteed cleanup.

pub mod activity_bar;
pub mod check;
pub mod runner;
pub mod spotlight;

#[cfg(test)]
mod fake;

pub use activity_bar::ActivityBarCheck;
pub use check::{Check, CheckContext, CheckKind};
pub use runner::{launch_and_run, run_check};
pub use spotlight::SpotlightCheck;
