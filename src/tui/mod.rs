// Full-screen history browser
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
mod timestamps;

use anyhow::Result;
pub use app::App;

use crate::history::HistoryStore;
use terminal::TerminalGuard;

/// Run the interactive history browser over `store`
pub fn run_browser(store: HistoryStore) -> Result<()> {
    // Load before touching the terminal so storage errors print normally
    let mut app = App::with_store(store)?;

    let mut guard = TerminalGuard::enter()?;
    let res = app.run(guard.terminal_mut());
    guard.restore()?;

    res
}
