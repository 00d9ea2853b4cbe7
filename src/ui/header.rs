use crate::ui::theme::{CLASY_BLUE, CLASY_CYAN, MUTED, TEXT, TRACK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const WORDMARK: &str = "Clasy";

/// Logo watermark and slide counter.
pub struct Header {
    current: usize,
    total: usize,
}

impl Header {
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.current + 1, self.total)
    }

    pub fn widget(&self, width: u16) -> Paragraph<'static> {
        let logo = format!("  ◆ {WORDMARK}");
        let counter = format!("{}  ", self.counter_text());
        let current = format!("{}", self.current + 1);
        let rest = format!(" / {}  ", self.total);
        let padding = (width as usize)
            .saturating_sub(logo.chars().count())
            .saturating_sub(counter.chars().count());

        let line = Line::from(vec![
            Span::styled("  ◆ ", Style::default().fg(CLASY_BLUE)),
            Span::styled(
                WORDMARK,
                Style::default().fg(CLASY_CYAN).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(padding)),
            Span::styled(current, Style::default().fg(TEXT).add_modifier(Modifier::BOLD)),
            Span::styled(rest, Style::default().fg(MUTED)),
        ]);
        Paragraph::new(line)
    }
}

/// Thin bar across the top, filled to the deck progress.
pub struct ProgressBar {
    fraction: f64,
}

impl ProgressBar {
    pub fn new(fraction: f64) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
        }
    }

    pub fn filled_width(&self, width: u16) -> u16 {
        (f64::from(width) * self.fraction).round() as u16
    }

    pub fn widget(&self, width: u16) -> Paragraph<'static> {
        let filled = self.filled_width(width);
        let line = Line::from(vec![
            Span::styled("━".repeat(filled as usize), Style::default().fg(CLASY_CYAN)),
            Span::styled(
                "─".repeat(width.saturating_sub(filled) as usize),
                Style::default().fg(TRACK),
            ),
        ]);
        Paragraph::new(line)
    }
}
