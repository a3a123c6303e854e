//! sim_cli - Menu parsing and loot reports for the `loot-sim` binary

pub mod menu;
pub mod report;

pub use menu::{InputError, Menu, MenuChoice};
pub use report::{render_session, Labels};
