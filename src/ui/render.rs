use crate::slides::SlideContent;
use crate::ui::app::App;
use crate::ui::deck::SlideVisual;
use crate::ui::footer::Footer;
use crate::ui::header::{Header, ProgressBar};
use crate::ui::layout::{centered_rect_by_size, DeckLayout};
use crate::ui::slide_view::SlideView;
use crate::ui::theme::{CARD_BORDER, CLASY_CYAN, DISABLED};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Clear, Widget};
use ratatui::Frame;
use tokio::time::Instant;

/// Columns an exiting slide drifts by the end of its animation.
const EXIT_SHIFT_COLS: f32 = 8.0;

pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let deck = app.deck();
    let layout = DeckLayout::compute(frame.area(), deck.slide_count());

    frame.render_widget(
        ProgressBar::new(deck.progress_fraction()).widget(layout.progress.width),
        layout.progress,
    );
    frame.render_widget(
        Header::new(deck.current_index(), deck.slide_count()).widget(layout.top_bar.width),
        layout.top_bar,
    );
    frame.render_widget(Clear, layout.body);
    draw_stage(frame, app, layout.stage, now);
    draw_arrow(frame, layout.previous_arrow, "‹", deck.can_go_previous());
    draw_arrow(frame, layout.next_arrow, "›", deck.can_go_next());
    Footer::new(deck.current_index()).render(frame, &layout);
}

fn draw_stage(frame: &mut Frame<'_>, app: &App, stage: Rect, now: Instant) {
    if stage.is_empty() {
        return;
    }
    let deck = app.deck();
    for index in 0..deck.slide_count() {
        let visual = deck.visual(index);
        if visual == SlideVisual::Hidden {
            continue;
        }
        let Some(content) = app.registry().render(index) else {
            continue;
        };
        if visual.is_exiting() {
            let progress = deck.transition_progress(now).unwrap_or(1.0);
            if progress < 1.0 {
                draw_exiting(
                    frame.buffer_mut(),
                    &content,
                    stage,
                    visual.offset_direction(),
                    progress,
                );
            }
        } else {
            frame.render_widget(SlideView::new(&content), stage);
        }
    }
}

/// Draw a slide off-screen, then copy it onto the stage shifted toward its
/// exit side and dimmed.
fn draw_exiting(buf: &mut Buffer, content: &SlideContent, stage: Rect, direction: i8, progress: f32) {
    let mut scratch = Buffer::empty(Rect::new(0, 0, stage.width, stage.height));
    SlideView::new(content).render(scratch.area, &mut scratch);
    let shift = (f32::from(direction) * EXIT_SHIFT_COLS * progress).round() as i32;
    blit_dimmed(&scratch, buf, stage, shift);
}

/// Copy `src` onto `stage` moved `shift` columns sideways. A wide glyph is
/// copied only when all of its columns land inside the stage, and the
/// columns it covers are blanked.
fn blit_dimmed(src: &Buffer, dst: &mut Buffer, stage: Rect, shift: i32) {
    let dim = Style::default().add_modifier(Modifier::DIM);
    let left = i32::from(stage.x);
    let right = i32::from(stage.right());
    for y in 0..stage.height.min(src.area.height) {
        let row = stage.y + y;
        let mut x = 0;
        while x < stage.width.min(src.area.width) {
            let Some(cell) = src.cell((x, y)) else {
                break;
            };
            let width = (Span::raw(cell.symbol()).width() as u16).max(1);
            let target_x = left + i32::from(x) + shift;
            x = x.saturating_add(width);
            if target_x < left || target_x + i32::from(width) > right {
                continue;
            }
            let Ok(target_x) = u16::try_from(target_x) else {
                continue;
            };
            if let Some(out) = dst.cell_mut((target_x, row)) {
                *out = cell.clone();
                out.set_style(dim);
            }
            for covered in 1..width {
                if let Some(out) = dst.cell_mut((target_x + covered, row)) {
                    out.reset();
                }
            }
        }
    }
}

fn draw_arrow(frame: &mut Frame<'_>, area: Rect, symbol: &'static str, enabled: bool) {
    if area.is_empty() {
        return;
    }
    let (border_color, fg) = if enabled {
        (CARD_BORDER, CLASY_CYAN)
    } else {
        (DISABLED, DISABLED)
    };
    let border_block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    let glyph = centered_rect_by_size(border_block.inner(area), 1, 1);
    frame.render_widget(border_block, area);
    frame.render_widget(Span::styled(symbol, Style::default().fg(fg)), glyph);
}
