/// Screens of the interactive menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    NumberConverter,
    TextToBase,
    BaseToText,
    HistoryView,
    HistorySearch,
    HistoryClear,
    Exit,
}

impl Screen {
    /// Entries shown on the main screen, in display order
    pub const MAIN_ENTRIES: &'static [(&'static str, Screen)] = &[
        ("1", Screen::NumberConverter),
        ("2", Screen::TextToBase),
        ("3", Screen::BaseToText),
        ("4", Screen::HistoryView),
        ("5", Screen::HistorySearch),
        ("6", Screen::HistoryClear),
        ("0", Screen::Exit),
    ];

    /// Map a main-menu selection to the screen it opens
    pub fn from_selection(selection: &str) -> Option<Screen> {
        let selection = selection.trim();
        if selection.eq_ignore_ascii_case("q") {
            return Some(Screen::Exit);
        }
        Self::MAIN_ENTRIES.iter().find(|(key, _)| *key == selection).map(|(_, screen)| *screen)
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Main => "Main menu",
            Screen::NumberConverter => "Convert a number between bases",
            Screen::TextToBase => "Convert text to a base",
            Screen::BaseToText => "Convert base groups to text",
            Screen::HistoryView => "View history",
            Screen::HistorySearch => "Search history",
            Screen::HistoryClear => "Clear history",
            Screen::Exit => "Exit",
        }
    }

    /// Screens that need the history store
    pub fn needs_history(self) -> bool {
        matches!(self, Screen::HistoryView | Screen::HistorySearch | Screen::HistoryClear)
    }
}
