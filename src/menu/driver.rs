use std::io::{BufRead, Write};

use anyhow::Result;
use log::{debug, warn};

use super::screen::Screen;
use crate::codec::{self, Base};
use crate::history::{HistoryError, HistoryStore};
use crate::models::{ConversionKind, NewRecord};
use crate::utils::single_line;

/// Line-oriented menu driven by an explicit screen state.
///
/// Each [`step`](MenuDriver::step) renders the current screen, reads at most
/// one line and moves to the next screen. Invalid input keeps the current
/// screen, a blank line goes back to the main menu and end of input exits.
pub struct MenuDriver<R, W> {
    input: R,
    output: W,
    screen: Screen,
    history: Option<HistoryStore>,
}

impl<R: BufRead, W: Write> MenuDriver<R, W> {
    pub fn new(input: R, output: W, history: Option<HistoryStore>) -> Self {
        Self { input, output, screen: Screen::Main, history }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn history_enabled(&self) -> bool {
        self.history.is_some()
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        if let Some(store) = &self.history
            && let Err(e) = store.load()
        {
            self.disable_history(&e)?;
        }

        while self.screen != Screen::Exit {
            self.step()?;
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Render the current screen and process one line of input
    pub fn step(&mut self) -> Result<()> {
        debug!("Menu screen: {:?}", self.screen);
        match self.screen {
            Screen::Main => self.main_screen(),
            Screen::NumberConverter => self.number_screen(),
            Screen::TextToBase => self.text_to_base_screen(),
            Screen::BaseToText => self.base_to_text_screen(),
            Screen::HistoryView => self.history_view_screen(),
            Screen::HistorySearch => self.history_search_screen(),
            Screen::HistoryClear => self.history_clear_screen(),
            Screen::Exit => Ok(()),
        }
    }

    fn main_screen(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Base Converter ===")?;
        for (key, screen) in Screen::MAIN_ENTRIES {
            writeln!(self.output, "  {}) {}", key, screen.title())?;
        }

        let Some(line) = self.prompt("Select an option: ")? else {
            return Ok(());
        };

        match Screen::from_selection(&line) {
            Some(screen) if screen.needs_history() && self.history.is_none() => {
                writeln!(self.output, "History is not available in this session")?;
            }
            Some(screen) => self.screen = screen,
            None => writeln!(self.output, "Unknown option '{}'", line.trim())?,
        }
        Ok(())
    }

    fn number_screen(&mut self) -> Result<()> {
        let Some(line) =
            self.prompt_or_back("Enter <digits> <from base> <to base> (blank to go back): ")?
        else {
            return Ok(());
        };

        let parts: Vec<&str> = line.split_whitespace().collect();
        let [digits, from, to] = parts.as_slice() else {
            writeln!(self.output, "Error: expected three values, e.g. 'FF 16 2'")?;
            return Ok(());
        };

        let bases = from.parse::<Base>().and_then(|f| to.parse::<Base>().map(|t| (f, t)));
        let (from, to) = match bases {
            Ok(bases) => bases,
            Err(e) => return self.report(e),
        };

        match codec::convert(digits, from.radix(), to.radix()) {
            Ok(output) => {
                writeln!(self.output, "{} (base {}) = {} (base {})", digits, from, output, to)?;
                let kind = ConversionKind::Number { from, to };
                self.record(NewRecord::new(*digits, output, kind))
            }
            Err(e) => self.report(e),
        }
    }

    fn text_to_base_screen(&mut self) -> Result<()> {
        let Some(line) = self.prompt_or_back("Enter <base> <text> (blank to go back): ")? else {
            return Ok(());
        };

        let Some((base, text)) = line.trim_start().split_once(' ') else {
            writeln!(self.output, "Error: expected a base followed by text, e.g. '2 Hello'")?;
            return Ok(());
        };

        let base = match base.parse::<Base>() {
            Ok(base) => base,
            Err(e) => return self.report(e),
        };

        match codec::text_to_base_groups(text, base.radix()) {
            Ok(groups) => {
                let output = codec::join_groups(&groups);
                writeln!(self.output, "{}", output)?;
                self.record(NewRecord::new(text, output, ConversionKind::TextToBase { base }))
            }
            Err(e) => self.report(e),
        }
    }

    fn base_to_text_screen(&mut self) -> Result<()> {
        let Some(line) =
            self.prompt_or_back("Enter <base> <groups...> (blank to go back): ")?
        else {
            return Ok(());
        };

        let mut parts = codec::split_groups(&line).into_iter();
        let Some(base) = parts.next() else {
            return Ok(());
        };
        let base = match base.parse::<Base>() {
            Ok(base) => base,
            Err(e) => return self.report(e),
        };

        let groups: Vec<&str> = parts.collect();
        if groups.is_empty() {
            writeln!(self.output, "Error: no groups to decode")?;
            return Ok(());
        }

        // Bad groups are skipped and reported, the rest still decode
        let mut text = String::new();
        let mut skipped = 0;
        for (group, result) in groups.iter().zip(codec::decode_groups(&groups, base.radix())) {
            match result {
                Ok(ch) => text.push(ch),
                Err(e) => {
                    skipped += 1;
                    writeln!(self.output, "Skipped group '{}': {}", group, e)?;
                }
            }
        }

        if skipped == groups.len() {
            writeln!(self.output, "Error: no group could be decoded")?;
            return Ok(());
        }

        writeln!(self.output, "{}", single_line(&text))?;
        let input = codec::join_groups(&groups);
        self.record(NewRecord::new(input, text, ConversionKind::BaseToText { base }))
    }

    fn history_view_screen(&mut self) -> Result<()> {
        self.screen = Screen::Main;
        let Some(store) = &self.history else {
            return Ok(());
        };

        match store.load() {
            Ok(log) if log.is_empty() => writeln!(self.output, "No history yet")?,
            Ok(log) => {
                for (idx, record) in log.iter().enumerate() {
                    writeln!(self.output, "{:>4}. {}", idx + 1, single_line(&record.to_string()))?;
                }
            }
            Err(e) => self.disable_history(&e)?,
        }
        Ok(())
    }

    fn history_search_screen(&mut self) -> Result<()> {
        let Some(query) = self.prompt_or_back("Search conversion type (blank to go back): ")?
        else {
            return Ok(());
        };
        self.screen = Screen::Main;

        let Some(store) = &self.history else {
            return Ok(());
        };

        match store.search(query.trim()) {
            Ok(matches) if matches.is_empty() => {
                writeln!(self.output, "No records match '{}'", query.trim())?
            }
            Ok(matches) => {
                writeln!(self.output, "{} matching record(s):", matches.len())?;
                for record in &matches {
                    writeln!(self.output, "  {}", single_line(&record.to_string()))?;
                }
            }
            Err(e) => self.disable_history(&e)?,
        }
        Ok(())
    }

    fn history_clear_screen(&mut self) -> Result<()> {
        let Some(answer) = self.prompt("Clear all history? [y/N]: ")? else {
            return Ok(());
        };
        self.screen = Screen::Main;

        if !matches!(answer.trim(), "y" | "Y" | "yes" | "YES") {
            writeln!(self.output, "History kept")?;
            return Ok(());
        }

        let Some(store) = &self.history else {
            return Ok(());
        };
        match store.clear() {
            Ok(()) => writeln!(self.output, "History cleared")?,
            Err(e) => self.disable_history(&e)?,
        }
        Ok(())
    }

    /// Write a prompt and read one line; end of input moves to `Exit`
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.screen = Screen::Exit;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Like [`prompt`](Self::prompt), but a blank line returns to the main menu
    fn prompt_or_back(&mut self, text: &str) -> Result<Option<String>> {
        match self.prompt(text)? {
            Some(line) if line.trim().is_empty() => {
                self.screen = Screen::Main;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    fn report(&mut self, err: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "Error: {}", err)?;
        Ok(())
    }

    fn record(&mut self, new: NewRecord) -> Result<()> {
        let Some(store) = &self.history else {
            return Ok(());
        };
        if let Err(e) = store.append(new) {
            self.disable_history(&e)?;
        }
        Ok(())
    }

    fn disable_history(&mut self, err: &HistoryError) -> Result<()> {
        warn!("History unavailable, continuing without it: {}", err);
        writeln!(self.output, "Warning: {} (history disabled for this session)", err)?;
        self.history = None;
        Ok(())
    }
}
