use crate::ui::layout::DeckLayout;
use crate::ui::theme::{CLASY_CYAN, INACTIVE_DOT, MUTED};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::Frame;

pub const KEY_HINT: &str = "← → navegar";

/// Dot navigator plus the keyboard hint.
pub struct Footer {
    current: usize,
}

impl Footer {
    pub fn new(current: usize) -> Self {
        Self { current }
    }

    pub fn dot_symbol(&self, index: usize) -> (&'static str, Style) {
        if index == self.current {
            ("━━━", Style::default().fg(CLASY_CYAN))
        } else {
            (" • ", Style::default().fg(INACTIVE_DOT))
        }
    }

    pub fn render(&self, frame: &mut Frame<'_>, layout: &DeckLayout) {
        for (index, rect) in layout.dots.iter().enumerate() {
            if rect.width == 0 || rect.height == 0 {
                continue;
            }
            let (symbol, style) = self.dot_symbol(index);
            frame.render_widget(Span::styled(symbol, style), *rect);
        }

        let footer = layout.footer;
        let hint_width = KEY_HINT.chars().count() as u16 + 2;
        let dots_end = layout
            .dots
            .last()
            .map(|dot| dot.x + dot.width)
            .unwrap_or(footer.x);
        let hint_x = (footer.x + footer.width).saturating_sub(hint_width);
        if footer.height > 0 && hint_x > dots_end + 1 {
            let area = Rect {
                x: hint_x,
                y: footer.y,
                width: hint_width,
                height: 1,
            };
            let style = Style::default().fg(MUTED).add_modifier(Modifier::DIM);
            frame.render_widget(Span::styled(KEY_HINT, style), area);
        }
    }
}
