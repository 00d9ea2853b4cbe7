use crate::config::Config;
use crate::slides::SlideRegistry;
use crate::ui::deck::DeckController;
use crate::ui::input::NavRequest;
use crate::ui::layout::{DeckLayout, HitTarget};
use crate::ui::swipe::SwipeTracker;
use ratatui::layout::Rect;
use std::time::Duration;
use tokio::time::Instant;

/// Everything the deck screen needs between frames.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    registry: SlideRegistry,
    deck: DeckController,
    swipe: SwipeTracker,
    /// Cell under the left button when it went down.
    pressed: Option<(u16, u16)>,
    cell_width_px: f32,
    space_advances: bool,
    frame_interval: Duration,
}

impl App {
    pub fn new(registry: SlideRegistry, config: &Config) -> Self {
        let deck = DeckController::new(registry.len(), config.deck.timing());
        Self {
            should_quit: false,
            size: None,
            registry,
            deck,
            swipe: SwipeTracker::new(config.input.swipe_threshold_px),
            pressed: None,
            cell_width_px: config.input.cell_width_px,
            space_advances: config.input.space_advances,
            frame_interval: config.deck.frame_interval(),
        }
    }

    pub fn deck(&self) -> &DeckController {
        &self.deck
    }

    pub fn registry(&self) -> &SlideRegistry {
        &self.registry
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn space_advances(&self) -> bool {
        self.space_advances
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Layout for the last known terminal size.
    pub fn layout(&self) -> Option<DeckLayout> {
        let (width, height) = self.size?;
        Some(DeckLayout::compute(
            Rect::new(0, 0, width, height),
            self.deck.slide_count(),
        ))
    }

    /// Forward a request to the controller. Returns whether a transition began.
    pub fn navigate(&mut self, request: NavRequest) -> bool {
        match request {
            NavRequest::Next => self.deck.next(),
            NavRequest::Previous => self.deck.previous(),
            NavRequest::GoTo(index) => match isize::try_from(index) {
                Ok(index) => self.deck.go_to(index),
                Err(_) => false,
            },
        }
    }

    /// Left button down at a cell.
    pub fn press(&mut self, column: u16, row: u16) {
        self.pressed = Some((column, row));
        self.swipe.begin(self.column_to_px(column));
    }

    /// Left button up at a cell: a swipe if it travelled far enough, otherwise
    /// a click when it lands on the control it started on.
    pub fn release(&mut self, column: u16, row: u16) {
        let pressed = self.pressed.take();
        if let Some(request) = self.swipe.end(self.column_to_px(column)) {
            tracing::debug!(?request, "swipe");
            self.navigate(request);
            return;
        }
        let Some(layout) = self.layout() else {
            return;
        };
        let started_on = pressed.and_then(|(col, row)| layout.hit(col, row));
        if let Some(target) = layout.hit(column, row).filter(|t| started_on == Some(*t)) {
            self.click(target);
        }
    }

    fn click(&mut self, target: HitTarget) {
        match target {
            HitTarget::Dot(index) => {
                self.navigate(NavRequest::GoTo(index));
            }
            HitTarget::PreviousArrow if self.deck.can_go_previous() => {
                self.navigate(NavRequest::Previous);
            }
            HitTarget::NextArrow if self.deck.can_go_next() => {
                self.navigate(NavRequest::Next);
            }
            HitTarget::PreviousArrow | HitTarget::NextArrow => {}
        }
    }

    /// Commit a transition whose window has elapsed. Returns whether it did.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        self.deck.poll_commit(now)
    }

    /// When the runtime must wake even without input: the next animation
    /// frame, capped at the commit deadline.
    pub fn next_wake(&self, now: Instant) -> Option<Instant> {
        let deadline = self.deck.commit_deadline()?;
        Some(deadline.min(now + self.frame_interval))
    }

    pub fn dispose(&mut self) {
        self.swipe.reset();
        self.pressed = None;
        self.deck.dispose();
    }

    fn column_to_px(&self, column: u16) -> f32 {
        f32::from(column) * self.cell_width_px
    }
}
