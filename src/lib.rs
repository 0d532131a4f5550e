pub mod actions;
pub mod cli;
pub mod commands;
pub mod game;
pub mod identity;
pub mod model;
pub mod session;
pub mod storage;
pub mod ui;

pub use cli::{Cli, Commands};
pub use session::{Route, Session};
pub use ui::{ConsoleUi, ShellApp, SilentUi, Ui};
