//! Terminal User Interface module
//!
//! The interactive review screen built on ratatui: a navigable list of
//! uncleared transactions where the selected one can be marked cleared.

pub mod app;
pub mod event;
pub mod handler;
pub mod keybindings;
pub mod layout;
pub mod navigation;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::{App, Command, ViewState};
pub use navigation::{NavEvent, NavigationState};
pub use terminal::run_tui;
