//! Presentational building blocks of a slide.

/// Piece of inline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Plain(&'static str),
    /// Gradient-highlighted words in headings.
    Accent(&'static str),
    /// Bold lead-in inside body copy.
    Strong(&'static str),
}

impl Segment {
    pub fn text(self) -> &'static str {
        match self {
            Self::Plain(text) | Self::Accent(text) | Self::Strong(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: Vec<Segment>,
}

/// Wider column with a tag row underneath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub body: Vec<Segment>,
    pub badges: Vec<&'static str>,
    pub footnote: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// TAM / SAM / SOM ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketTier {
    pub label: &'static str,
    pub figure: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    pub initial: char,
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Rounded pill above the cover or below the closing slide.
    Pill(&'static str),
    /// Oversized brand name on the cover.
    Wordmark(&'static str),
    Tagline(&'static str),
    /// Small uppercase section label.
    Label(&'static str),
    Heading(Vec<Segment>),
    Divider,
    Cards(Vec<Card>),
    Columns(Vec<Column>),
    Stats(Vec<Stat>),
    /// Icon + title tiles without body copy.
    Features(Vec<(&'static str, &'static str)>),
    Highlight(Vec<Segment>),
    Market(Vec<MarketTier>),
    Team(Vec<Member>),
    Steps(Vec<Step>),
}

/// Rendered content of one slide.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlideContent {
    pub blocks: Vec<Block>,
}

impl SlideContent {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Plain text of the first heading, or the wordmark on a cover.
    pub fn headline(&self) -> Option<String> {
        self.blocks.iter().find_map(|block| match block {
            Block::Heading(segments) => {
                Some(segments.iter().map(|s| s.text()).collect::<String>())
            }
            Block::Wordmark(text) => Some((*text).to_string()),
            _ => None,
        })
    }
}
