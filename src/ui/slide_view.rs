//! Draws a [`SlideContent`] into a rectangle.
//!
//! Every block is lowered to either wrapped text or a grid of bordered
//! tiles. Wrapping is done here rather than by `Paragraph` so the measured
//! height always matches what gets drawn, which is what vertical centring
//! relies on.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block as TileBlock, BorderType, Padding, Paragraph, Widget};

use crate::slides::{self, Block, Segment, SlideContent};
use crate::ui::theme::{
    BODY_TEXT, CARD_BORDER, CLASY_BLUE, CLASY_CYAN, LIGHT_BLUE, MUTED, TEXT,
};

const MAX_CONTENT_WIDTH: u16 = 110;
const TEXT_WIDTH: u16 = 72;
const TILE_GAP: u16 = 1;
/// Border plus one column of padding on each side.
const TILE_CHROME: u16 = 4;

type Run = Vec<Span<'static>>;

struct Tile {
    parts: Vec<Run>,
    alignment: Alignment,
    border: Color,
}

enum Piece {
    Text {
        parts: Vec<Run>,
        alignment: Alignment,
        max_width: u16,
    },
    Tiles {
        tiles: Vec<Tile>,
        min_width: u16,
        max_width: u16,
    },
}

struct Placed {
    piece: Piece,
    height: u16,
    gap_after: u16,
}

pub struct SlideView<'a> {
    content: &'a SlideContent,
}

impl<'a> SlideView<'a> {
    pub fn new(content: &'a SlideContent) -> Self {
        Self { content }
    }

    /// Rows needed to draw the whole slide at `width`.
    pub fn height(&self, width: u16) -> u16 {
        total_height(&self.place(content_width(width)))
    }

    fn place(&self, width: u16) -> Vec<Placed> {
        self.content
            .blocks
            .iter()
            .map(|block| {
                let piece = lower(block);
                let height = piece_height(&piece, width);
                let gap_after = if matches!(block, Block::Label(_)) { 0 } else { 1 };
                Placed {
                    piece,
                    height,
                    gap_after,
                }
            })
            .collect()
    }
}

impl Widget for SlideView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = content_width(area.width);
        let column = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        };
        let placed = self.place(width);
        let total = total_height(&placed);
        let bottom = area.y + area.height;
        let mut y = area.y + area.height.saturating_sub(total) / 2;

        for item in placed {
            if y >= bottom {
                break;
            }
            let rect = Rect {
                y,
                height: item.height.min(bottom - y),
                ..column
            };
            render_piece(&item.piece, rect, buf);
            y = y.saturating_add(item.height + item.gap_after);
        }
    }
}

fn content_width(width: u16) -> u16 {
    width.min(MAX_CONTENT_WIDTH)
}

fn total_height(placed: &[Placed]) -> u16 {
    let sum: u16 = placed.iter().map(|p| p.height + p.gap_after).sum();
    sum.saturating_sub(placed.last().map_or(0, |p| p.gap_after))
}

fn body_style() -> Style {
    Style::default().fg(BODY_TEXT)
}

fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn run(segments: &[Segment], base: Style) -> Run {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => Span::styled(*text, base),
            Segment::Accent(text) => Span::styled(*text, bold(CLASY_CYAN)),
            Segment::Strong(text) => Span::styled(*text, bold(TEXT)),
        })
        .collect()
}

fn tile(parts: Vec<Run>, alignment: Alignment, border: Color) -> Tile {
    Tile {
        parts,
        alignment,
        border,
    }
}

fn lower(block: &Block) -> Piece {
    match block {
        Block::Pill(text) => Piece::Tiles {
            max_width: Span::raw(*text).width() as u16 + TILE_CHROME,
            min_width: 1,
            tiles: vec![tile(
                vec![vec![Span::styled(*text, Style::default().fg(CLASY_CYAN))]],
                Alignment::Center,
                CLASY_BLUE,
            )],
        },
        Block::Wordmark(text) => {
            let spaced = text
                .to_uppercase()
                .chars()
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ");
            Piece::Text {
                parts: vec![vec![Span::styled(spaced, bold(CLASY_CYAN))]],
                alignment: Alignment::Center,
                max_width: TEXT_WIDTH,
            }
        }
        Block::Tagline(text) => Piece::Text {
            parts: vec![vec![Span::styled(*text, muted_style())]],
            alignment: Alignment::Center,
            max_width: 64,
        },
        Block::Label(text) => Piece::Text {
            parts: vec![vec![Span::styled(text.to_uppercase(), bold(CLASY_CYAN))]],
            alignment: Alignment::Center,
            max_width: TEXT_WIDTH,
        },
        Block::Heading(segments) => Piece::Text {
            parts: vec![run(segments, bold(TEXT))],
            alignment: Alignment::Center,
            max_width: TEXT_WIDTH,
        },
        Block::Divider => Piece::Text {
            parts: vec![vec![
                Span::styled("━━━", Style::default().fg(CLASY_BLUE)),
                Span::styled("━━━", Style::default().fg(CLASY_CYAN)),
            ]],
            alignment: Alignment::Center,
            max_width: TEXT_WIDTH,
        },
        Block::Cards(cards) => Piece::Tiles {
            tiles: cards
                .iter()
                .map(|card| {
                    tile(
                        vec![
                            vec![
                                Span::raw(card.icon),
                                Span::raw(" "),
                                Span::styled(card.title, bold(TEXT)),
                            ],
                            run(&card.body, muted_style()),
                        ],
                        Alignment::Left,
                        CARD_BORDER,
                    )
                })
                .collect(),
            min_width: 24,
            max_width: MAX_CONTENT_WIDTH,
        },
        Block::Columns(columns) => Piece::Tiles {
            tiles: columns.iter().map(column_tile).collect(),
            min_width: 32,
            max_width: MAX_CONTENT_WIDTH,
        },
        Block::Stats(stats) => Piece::Tiles {
            tiles: stats
                .iter()
                .map(|stat| {
                    tile(
                        vec![
                            vec![Span::styled(stat.value, bold(CLASY_CYAN))],
                            vec![Span::styled(stat.label, muted_style())],
                        ],
                        Alignment::Center,
                        CARD_BORDER,
                    )
                })
                .collect(),
            min_width: 16,
            max_width: 90,
        },
        Block::Features(features) => Piece::Tiles {
            tiles: features
                .iter()
                .map(|(icon, title)| {
                    tile(
                        vec![vec![
                            Span::raw(*icon),
                            Span::raw(" "),
                            Span::styled(*title, bold(CLASY_CYAN)),
                        ]],
                        Alignment::Center,
                        CARD_BORDER,
                    )
                })
                .collect(),
            min_width: 20,
            max_width: MAX_CONTENT_WIDTH,
        },
        Block::Highlight(segments) => Piece::Tiles {
            tiles: vec![tile(
                vec![run(segments, body_style())],
                Alignment::Left,
                CLASY_BLUE,
            )],
            min_width: 1,
            max_width: 84,
        },
        Block::Market(tiers) => Piece::Text {
            parts: tiers.iter().enumerate().map(|(i, tier)| market_run(i, tier)).collect(),
            alignment: Alignment::Left,
            max_width: 84,
        },
        Block::Team(members) => Piece::Tiles {
            tiles: members
                .iter()
                .map(|member| {
                    tile(
                        vec![
                            vec![Span::styled(format!("( {} )", member.initial), bold(CLASY_BLUE))],
                            vec![Span::styled(member.name, bold(TEXT))],
                            vec![Span::styled(member.role, Style::default().fg(CLASY_CYAN))],
                            vec![Span::styled(member.bio, muted_style())],
                        ],
                        Alignment::Center,
                        CARD_BORDER,
                    )
                })
                .collect(),
            min_width: 24,
            max_width: MAX_CONTENT_WIDTH,
        },
        Block::Steps(steps) => Piece::Tiles {
            tiles: steps
                .iter()
                .map(|step| {
                    tile(
                        vec![
                            vec![
                                Span::styled(format!("{}  ", step.number), bold(CLASY_CYAN)),
                                Span::styled(step.title, bold(TEXT)),
                            ],
                            vec![Span::styled(step.text, muted_style())],
                        ],
                        Alignment::Left,
                        CARD_BORDER,
                    )
                })
                .collect(),
            min_width: 90,
            max_width: 90,
        },
    }
}

fn column_tile(column: &slides::Column) -> Tile {
    let mut parts = vec![
        vec![Span::styled(column.title, bold(TEXT))],
        run(&column.body, body_style()),
    ];
    if !column.badges.is_empty() {
        let mut badges = Vec::new();
        for badge in &column.badges {
            badges.push(Span::styled(format!("[{badge}]"), Style::default().fg(CLASY_CYAN)));
            badges.push(Span::raw(" "));
        }
        badges.pop();
        parts.push(badges);
    }
    if let Some(footnote) = column.footnote {
        parts.push(vec![Span::styled(footnote, bold(LIGHT_BLUE))]);
    }
    tile(parts, Alignment::Left, CARD_BORDER)
}

fn market_run(index: usize, tier: &slides::MarketTier) -> Run {
    let dot = [CLASY_BLUE, CLASY_CYAN, TEXT][index % 3];
    vec![
        Span::styled("● ", Style::default().fg(dot)),
        Span::styled(tier.label, bold(TEXT)),
        Span::styled(format!(" ({}) ", tier.figure), Style::default().fg(CLASY_CYAN)),
        Span::styled("— ", muted_style()),
        Span::styled(tier.text, body_style()),
    ]
}

/// Greedy word wrap across styled spans. Words longer than `width` get a
/// line of their own and are clipped when drawn.
pub fn wrap(spans: &[Span<'_>], width: u16) -> Vec<Line<'static>> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut line: Run = Vec::new();
    let mut used = 0usize;

    for word in split_words(spans) {
        let word_width: usize = word.iter().map(Span::width).sum();
        if used > 0 && used + 1 + word_width > width {
            lines.push(Line::from(std::mem::take(&mut line)));
            used = 0;
        }
        if used > 0 {
            line.push(Span::raw(" "));
            used += 1;
        }
        used += word_width;
        line.extend(word);
    }
    if !line.is_empty() {
        lines.push(Line::from(line));
    }
    lines
}

fn split_words(spans: &[Span<'_>]) -> Vec<Run> {
    let mut words = Vec::new();
    let mut word: Run = Vec::new();
    for span in spans {
        let mut piece = String::new();
        for ch in span.content.chars() {
            if ch.is_whitespace() {
                if !piece.is_empty() {
                    word.push(Span::styled(std::mem::take(&mut piece), span.style));
                }
                if !word.is_empty() {
                    words.push(std::mem::take(&mut word));
                }
            } else {
                piece.push(ch);
            }
        }
        if !piece.is_empty() {
            word.push(Span::styled(piece, span.style));
        }
    }
    if !word.is_empty() {
        words.push(word);
    }
    words
}

fn wrap_parts(parts: &[Run], width: u16) -> Vec<Line<'static>> {
    parts.iter().flat_map(|part| wrap(part, width)).collect()
}

struct Grid {
    columns: u16,
    column_width: u16,
    x_offset: u16,
}

fn grid(count: usize, width: u16, min_width: u16, max_width: u16) -> Grid {
    let width = width.min(max_width).max(1);
    let count = count.max(1) as u16;
    let fit = ((width + TILE_GAP) / (min_width.min(width) + TILE_GAP)).max(1);
    let columns = fit.min(count);
    let column_width = (width - TILE_GAP * (columns - 1)) / columns;
    Grid {
        columns,
        column_width,
        x_offset: 0,
    }
}

impl Grid {
    fn centered_in(mut self, width: u16) -> Self {
        let used = self.columns * self.column_width + TILE_GAP * (self.columns - 1);
        self.x_offset = width.saturating_sub(used) / 2;
        self
    }

    fn tile_lines(&self, tile: &Tile) -> Vec<Line<'static>> {
        wrap_parts(&tile.parts, self.column_width.saturating_sub(TILE_CHROME))
    }

    fn row_heights(&self, tiles: &[Tile]) -> Vec<u16> {
        tiles
            .chunks(self.columns as usize)
            .map(|row| {
                row.iter()
                    .map(|tile| self.tile_lines(tile).len() as u16 + 2)
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn piece_height(piece: &Piece, width: u16) -> u16 {
    match piece {
        Piece::Text { parts, max_width, .. } => wrap_parts(parts, width.min(*max_width)).len() as u16,
        Piece::Tiles {
            tiles,
            min_width,
            max_width,
        } => grid(tiles.len(), width, *min_width, *max_width)
            .row_heights(tiles)
            .iter()
            .sum(),
    }
}

fn render_piece(piece: &Piece, area: Rect, buf: &mut Buffer) {
    match piece {
        Piece::Text {
            parts,
            alignment,
            max_width,
        } => {
            let width = area.width.min(*max_width);
            let rect = Rect {
                x: area.x + (area.width - width) / 2,
                width,
                ..area
            };
            Paragraph::new(wrap_parts(parts, width))
                .alignment(*alignment)
                .render(rect, buf);
        }
        Piece::Tiles {
            tiles,
            min_width,
            max_width,
        } => {
            let grid = grid(tiles.len(), area.width, *min_width, *max_width).centered_in(area.width);
            let heights = grid.row_heights(tiles);
            let bottom = area.y + area.height;
            let mut y = area.y;
            for (row, height) in tiles.chunks(grid.columns as usize).zip(heights) {
                if y >= bottom {
                    break;
                }
                let row_height = height.min(bottom - y);
                for (i, tile) in row.iter().enumerate() {
                    let x = area.x
                        + grid.x_offset
                        + i as u16 * (grid.column_width + TILE_GAP);
                    let rect = Rect {
                        x,
                        y,
                        width: grid.column_width,
                        height: row_height,
                    }
                    .intersection(area);
                    render_tile(&grid, tile, rect, buf);
                }
                y = y.saturating_add(height);
            }
        }
    }
}

fn render_tile(grid: &Grid, tile: &Tile, area: Rect, buf: &mut Buffer) {
    let border = TileBlock::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(tile.border))
        .padding(Padding::horizontal(1));
    Paragraph::new(grid.tile_lines(tile))
        .alignment(tile.alignment)
        .block(border)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::SlideRegistry;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        let lines = wrap(&[Span::raw("uno dos tres cuatro")], 8);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["uno dos", "tres", "cuatro"]);
    }

    #[test]
    fn wrap_keeps_adjacent_segments_in_one_word() {
        let spans = [Span::raw("Por qué "), Span::raw("Clasy"), Span::raw(", hoy")];
        let lines = wrap(&spans, 40);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "Por qué Clasy, hoy");
    }

    #[test]
    fn overlong_word_gets_own_line() {
        let lines = wrap(&[Span::raw("a supercalifragilistic b")], 5);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn grid_falls_back_to_fewer_columns() {
        assert_eq!(grid(4, 110, 24, 110).columns, 4);
        assert_eq!(grid(4, 60, 24, 110).columns, 2);
        assert_eq!(grid(4, 20, 24, 110).columns, 1);
    }

    #[test]
    fn every_slide_fits_a_large_terminal() {
        let registry = SlideRegistry::clasy();
        for index in 0..registry.len() {
            let content = registry.render(index).unwrap();
            let height = SlideView::new(&content).height(150);
            assert!(height > 0 && height < 60, "slide {index} is {height} rows tall");
        }
    }

    #[test]
    fn renders_heading_into_buffer() {
        let content = SlideRegistry::clasy().render(7).unwrap();
        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);
        SlideView::new(&content).render(area, &mut buf);

        let text: String = (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Por qué Clasy gana"));
        assert!(text.contains("VENTAJA COMPETITIVA"));
    }
}
