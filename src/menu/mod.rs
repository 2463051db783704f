//! Interactive menu
//!
//! A finite-state driver over [`Screen`]s. The codec and history store are
//! called as plain functions; the menu owns all prompting and navigation.

mod driver;
mod screen;

use std::io;

use anyhow::Result;
pub use driver::MenuDriver;
pub use screen::Screen;

use crate::history::HistoryStore;

/// Run the menu on stdin/stdout
pub fn run_menu(history: Option<HistoryStore>) -> Result<()> {
    let stdin = io::stdin();
    let mut driver = MenuDriver::new(stdin.lock(), io::stdout(), history);
    driver.run()
}
