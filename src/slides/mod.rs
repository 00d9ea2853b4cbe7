//! Slide registry.
//!
//! An ordered, fixed list of content builders. The deck controller only
//! needs [`SlideRegistry::len`]; the renderer asks for slide `i` by
//! position.

mod content;
mod model;

pub use model::{Block, Card, Column, MarketTier, Member, Segment, SlideContent, Stat, Step};

/// Builds the content of one slide. Must be pure.
pub type SlideFn = fn() -> SlideContent;

#[derive(Debug, Clone, Copy)]
pub struct SlideEntry {
    pub title: &'static str,
    pub build: SlideFn,
}

impl SlideEntry {
    pub const fn new(title: &'static str, build: SlideFn) -> Self {
        Self { title, build }
    }
}

#[derive(Debug, Clone)]
pub struct SlideRegistry {
    entries: Vec<SlideEntry>,
}

impl SlideRegistry {
    /// `None` for an empty list; a deck needs at least one slide.
    pub fn new(entries: Vec<SlideEntry>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self { entries })
    }

    /// The Clasy investor deck.
    pub fn clasy() -> Self {
        Self {
            entries: vec![
                SlideEntry::new("Portada", content::cover),
                SlideEntry::new("El Problema", content::problem),
                SlideEntry::new("La Solución", content::solution),
                SlideEntry::new("El Producto", content::product),
                SlideEntry::new("Tamaño de Mercado", content::market),
                SlideEntry::new("Go-To-Market y Tracción", content::go_to_market),
                SlideEntry::new("Modelo de Negocios", content::business_model),
                SlideEntry::new("Ventaja Competitiva", content::competitive_advantage),
                SlideEntry::new("Equipo", content::team),
                SlideEntry::new("Próximos Pasos", content::next_steps),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for the `len` convention.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn title(&self, index: usize) -> Option<&'static str> {
        self.entries.get(index).map(|entry| entry.title)
    }

    pub fn render(&self, index: usize) -> Option<SlideContent> {
        self.entries.get(index).map(|entry| (entry.build)())
    }

    pub fn titles(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.title)
    }
}
