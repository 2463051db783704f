use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use super::timestamps::format_timestamp;
use crate::models::ConversionRecord;
use crate::utils::{single_line, strip_ansi_codes};

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const ERROR: Color = Color::Rgb(239, 68, 68);
const BAR: Color = Color::Rgb(24, 24, 27);

/// Everything the status bar and search box need besides the records
pub struct RenderState<'a> {
    pub search_query: &'a str,
    pub total_count: usize,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(
    frame: &mut Frame,
    records: &[&ConversionRecord],
    selected_idx: usize,
    state: &RenderState,
) {
    let layout = AppLayout::new(frame.area());

    render_search_box(frame, layout.search_area, state.search_query);
    render_results_list(frame, layout.results_area, records, selected_idx);
    render_preview(frame, layout.preview_area, records.get(selected_idx).copied());
    render_status_bar(frame, layout.status_area, records.len(), selected_idx, state);
}

fn render_search_box(frame: &mut Frame, area: Rect, query: &str) {
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled("type contains: ", Style::default().fg(MUTED)),
        Span::raw(query.to_string()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Search "),
    );

    frame.render_widget(paragraph, area);
}

fn render_results_list(
    frame: &mut Frame,
    area: Rect,
    records: &[&ConversionRecord],
    selected_idx: usize,
) {
    let items: Vec<ListItem> = records
        .iter()
        .map(|record| {
            let input: String = single_line(&record.input).chars().take(30).collect();
            let kind = single_line(&record.kind);
            let content = format!("{} | {} | {}", format_timestamp(&record.date), kind, input);
            ListItem::new(content).style(Style::default().fg(MUTED))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" History "),
        )
        .highlight_style(Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD));

    // ListState keeps the selection scrolled into view
    let mut list_state = ListState::default();
    if !records.is_empty() {
        list_state.select(Some(selected_idx));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_preview(frame: &mut Frame, area: Rect, record: Option<&ConversionRecord>) {
    let content = if let Some(record) = record {
        let label = |name: &'static str| Span::styled(name, Style::default().fg(MUTED));

        let mut lines = vec![
            Line::from(vec![
                label("Date: "),
                Span::raw(record.date.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
            ]),
            Line::from(vec![label("Type: "), Span::raw(single_line(&record.kind))]),
            Line::from(""),
            Line::from(label("Input:")),
        ];
        lines.extend(strip_ansi_codes(&record.input).lines().map(|l| Line::from(l.to_string())));
        lines.push(Line::from(""));
        lines.push(Line::from(label("Output:")));
        lines.extend(strip_ansi_codes(&record.output).lines().map(|l| Line::from(l.to_string())));

        Text::from(lines)
    } else {
        Text::from("No record selected")
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Preview "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    match_count: usize,
    selected_idx: usize,
    state: &RenderState,
) {
    let (status_text, style) = if let Some(message) = state.status_message {
        let fg = match message.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => ERROR,
        };
        (format!(" {} ", message.text), Style::default().fg(fg).bg(BAR))
    } else if match_count == 0 {
        let text = if state.total_count == 0 {
            " History is empty | Ctrl+C: quit "
        } else {
            " No matching records | Esc: clear | Ctrl+C: quit "
        };
        (text.to_string(), Style::default().fg(BRIGHT).bg(BAR))
    } else {
        let mut parts = vec![];

        if match_count < state.total_count {
            parts.push(format!("{}/{} records", match_count, state.total_count));
        } else {
            parts.push(format!("{} records", state.total_count));
        }
        parts.push(format!("record {}/{}", selected_idx + 1, match_count));

        if !state.search_query.is_empty() {
            parts.push("Esc: clear".to_string());
        }
        parts.push("Ctrl+Y: copy output".to_string());
        parts.push("Ctrl+R: reload".to_string());
        parts.push("Ctrl+C: quit".to_string());

        (format!(" {} ", parts.join(" | ")), Style::default().fg(BRIGHT).bg(BAR))
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use chrono::{TimeZone, Utc};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::models::NewRecord;

    fn create_test_record(input: &str, kind: &str) -> ConversionRecord {
        ConversionRecord::at(
            NewRecord::new(input, "out", kind),
            Utc.timestamp_opt(1234567890, 0).unwrap(),
        )
    }

    fn state(query: &str, total: usize) -> RenderState<'_> {
        RenderState { search_query: query, total_count: total, status_message: None }
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_ui_with_records() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let records = [
            create_test_record("10", "Base 10 to Base 2"),
            create_test_record("Hi", "String to Base 16"),
        ];
        let refs: Vec<&ConversionRecord> = records.iter().collect();

        terminal.draw(|f| render_ui(f, &refs, 0, &state("", 2))).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Base 10 to Base 2"));
        assert!(text.contains("String to Base 16"));
        assert!(text.contains("2 records"));
    }

    #[test]
    fn test_render_ui_empty_history() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| render_ui(f, &[], 0, &state("", 0))).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("History is empty"));
        assert!(text.contains("No record selected"));
    }

    #[test]
    fn test_render_ui_no_matches() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| render_ui(f, &[], 0, &state("zzz", 3))).unwrap();

        assert!(buffer_text(&terminal).contains("No matching records"));
    }

    #[test]
    fn test_render_preview_strips_escape_codes() {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let record = create_test_record("\x1b[31mred\x1b[0m", "String to Base 2");

        terminal
            .draw(|f| {
                let area = f.area();
                render_preview(f, area, Some(&record));
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("red"));
        assert!(!text.contains("[31m"));
    }

    #[test]
    fn test_render_results_list_strips_escape_codes_from_type() {
        let mut terminal = Terminal::new(TestBackend::new(80, 6)).unwrap();
        let record = create_test_record("Hi", "\x1b[31mString to Base 16\x1b[0m");

        terminal
            .draw(|f| {
                let area = f.area();
                render_results_list(f, area, &[&record], 0);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("String to Base 16"));
        assert!(!text.contains("[31m"));
    }

    #[test]
    fn test_render_status_bar_filtered_counts() {
        let mut terminal = Terminal::new(TestBackend::new(120, 1)).unwrap();

        terminal
            .draw(|f| {
                let area = f.area();
                render_status_bar(f, area, 2, 1, &state("base", 5));
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("2/5 records"));
        assert!(text.contains("record 2/2"));
    }

    #[test]
    fn test_render_status_bar_message() {
        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        let message = StatusMessage {
            text: "Copied to clipboard".to_string(),
            message_type: MessageType::Success,
            expires_at: Instant::now(),
        };
        let state =
            RenderState { search_query: "", total_count: 1, status_message: Some(&message) };

        terminal
            .draw(|f| {
                let area = f.area();
                render_status_bar(f, area, 1, 0, &state);
            })
            .unwrap();

        assert!(buffer_text(&terminal).contains("Copied to clipboard"));
    }

    #[test]
    fn test_render_results_list_selection_past_viewport() {
        let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
        let records: Vec<ConversionRecord> =
            (0..20).map(|i| create_test_record(&i.to_string(), "Base 10 to Base 2")).collect();
        let refs: Vec<&ConversionRecord> = records.iter().collect();

        terminal
            .draw(|f| {
                let area = f.area();
                render_results_list(f, area, &refs, 19);
            })
            .unwrap();
    }
}
