use ratatui::layout::{Position, Rect};

/// Columns reserved on each side of the stage for the arrow buttons.
pub const ARROW_GUTTER: u16 = 5;
pub const ARROW_WIDTH: u16 = 3;
pub const ARROW_HEIGHT: u16 = 3;
pub const DOT_WIDTH: u16 = 3;
pub const DOT_GAP: u16 = 1;

/// Clickable controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Dot(usize),
    PreviousArrow,
    NextArrow,
}

/// Screen regions of the deck for one terminal size. Shared by the
/// renderer and mouse hit testing so both agree on where controls are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckLayout {
    /// Top row: progress bar.
    pub progress: Rect,
    /// Logo watermark on the left, slide counter on the right.
    pub top_bar: Rect,
    /// Everything between the top bar and the footer.
    pub body: Rect,
    /// Slide content area, inside the arrow gutters.
    pub stage: Rect,
    pub previous_arrow: Rect,
    pub next_arrow: Rect,
    /// Dot navigator and keyboard hint.
    pub footer: Rect,
    pub dots: Vec<Rect>,
}

impl DeckLayout {
    pub fn compute(area: Rect, slide_count: usize) -> Self {
        let progress = Rect {
            height: area.height.min(1),
            ..area
        };
        let top_bar = Rect {
            y: area.y + progress.height,
            height: area.height.saturating_sub(progress.height).min(1),
            ..area
        };
        let header_height = progress.height + top_bar.height;
        let footer_height = area.height.saturating_sub(header_height).min(1);
        let footer = Rect {
            y: area.y + area.height.saturating_sub(footer_height),
            height: footer_height,
            ..area
        };
        let body = Rect {
            y: area.y + header_height,
            height: area.height.saturating_sub(header_height + footer_height),
            ..area
        };

        let gutter = if body.width > ARROW_GUTTER * 4 { ARROW_GUTTER } else { 0 };
        let stage = Rect {
            x: body.x + gutter,
            width: body.width.saturating_sub(gutter * 2),
            ..body
        };

        let arrow_y = body.y + body.height.saturating_sub(ARROW_HEIGHT) / 2;
        let arrow = |x: u16| {
            Rect {
                x,
                y: arrow_y,
                width: ARROW_WIDTH.min(gutter),
                height: ARROW_HEIGHT.min(body.height),
            }
        };
        let previous_arrow = arrow(body.x + 1);
        let next_arrow = arrow((body.x + body.width).saturating_sub(ARROW_WIDTH + 1));

        let dots = dot_rects(footer, slide_count);

        Self {
            progress,
            top_bar,
            body,
            stage,
            previous_arrow,
            next_arrow,
            footer,
            dots,
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        if let Some(index) = self.dots.iter().position(|dot| dot.contains(position)) {
            return Some(HitTarget::Dot(index));
        }
        if self.previous_arrow.contains(position) {
            return Some(HitTarget::PreviousArrow);
        }
        if self.next_arrow.contains(position) {
            return Some(HitTarget::NextArrow);
        }
        None
    }
}

fn dot_rects(footer: Rect, count: usize) -> Vec<Rect> {
    let count = count as u16;
    let total = (count * (DOT_WIDTH + DOT_GAP)).saturating_sub(DOT_GAP);
    let start = footer.x + footer.width.saturating_sub(total) / 2;
    (0..count)
        .map(|i| {
            Rect {
                x: start + i * (DOT_WIDTH + DOT_GAP),
                y: footer.y,
                width: DOT_WIDTH,
                height: footer.height,
            }
            .intersection(footer)
        })
        .collect()
}

/// `width` x `height` rectangle centred in `area`, clamped to it.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> DeckLayout {
        DeckLayout::compute(Rect::new(0, 0, 80, 24), 10)
    }

    #[test]
    fn regions_stack_vertically() {
        let layout = layout();
        assert_eq!(layout.progress, Rect::new(0, 0, 80, 1));
        assert_eq!(layout.top_bar, Rect::new(0, 1, 80, 1));
        assert_eq!(layout.body, Rect::new(0, 2, 80, 21));
        assert_eq!(layout.footer, Rect::new(0, 23, 80, 1));
        assert_eq!(layout.stage, Rect::new(5, 2, 70, 21));
    }

    #[test]
    fn dots_are_centred_in_footer() {
        let layout = layout();
        assert_eq!(layout.dots.len(), 10);
        // 10 dots * 4 - 1 gap = 39 columns, centred in 80.
        assert_eq!(layout.dots[0], Rect::new(20, 23, 3, 1));
        assert_eq!(layout.dots[9], Rect::new(56, 23, 3, 1));
    }

    #[test]
    fn hit_resolves_controls() {
        let layout = layout();
        assert_eq!(layout.hit(21, 23), Some(HitTarget::Dot(0)));
        assert_eq!(layout.hit(58, 23), Some(HitTarget::Dot(9)));
        assert_eq!(layout.hit(23, 23), None);
        let prev = layout.previous_arrow;
        assert_eq!(layout.hit(prev.x, prev.y + 1), Some(HitTarget::PreviousArrow));
        let next = layout.next_arrow;
        assert_eq!(layout.hit(next.x + 2, next.y), Some(HitTarget::NextArrow));
        assert_eq!(layout.hit(40, 10), None);
    }

    #[test]
    fn tiny_area_does_not_underflow() {
        let layout = DeckLayout::compute(Rect::new(0, 0, 4, 1), 10);
        assert_eq!(layout.body.height, 0);
        assert_eq!(layout.stage.width, 4);
        assert_eq!(layout.hit(0, 0), None);
    }

    #[test]
    fn centered_rect_by_size_clamps() {
        let area = Rect::new(10, 10, 20, 10);
        assert_eq!(centered_rect_by_size(area, 10, 4), Rect::new(15, 13, 10, 4));
        assert_eq!(centered_rect_by_size(area, 40, 40), area);
    }
}
