use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Rgb, Scene, ShapeKind, TextItem};
use crate::metrics::GameMetrics;

/// Characters per grid unit; terminal cells are about twice as tall as wide
const CELL_WIDTH: usize = 2;

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Character grid a [`Scene`] is rasterized onto, one grid unit per cell
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<(char, Style)>,
}

impl Canvas {
    /// Rasterize a scene. One extra row and column is kept because the
    /// snake's head can sit exactly on the far edge.
    pub fn paint(scene: &Scene) -> Self {
        let unit = scene.unit_size.max(1);
        let columns = (scene.width / unit + 1).max(1) as usize;
        let rows = (scene.height / unit + 1).max(1) as usize;

        let mut canvas = Self {
            width: columns * CELL_WIDTH,
            height: rows,
            cells: vec![(' ', Style::default().bg(color(scene.background))); columns * CELL_WIDTH * rows],
        };

        for shape in &scene.shapes {
            let style = Style::default().fg(color(shape.color));
            match shape.kind {
                ShapeKind::Rect => {
                    canvas.fill(shape.x, shape.y, shape.width, shape.height, unit, ['█', '█'], style)
                }
                ShapeKind::Oval => canvas.fill(
                    shape.x,
                    shape.y,
                    shape.width,
                    shape.height,
                    unit,
                    ['(', ')'],
                    style.add_modifier(Modifier::BOLD),
                ),
                ShapeKind::Line => canvas.trace(shape.x, shape.y, shape.width, shape.height, unit, style),
            }
        }

        for text in &scene.texts {
            canvas.write(text, unit);
        }

        canvas
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Character at a terminal column/row
    pub fn symbol(&self, column: usize, row: usize) -> Option<char> {
        self.index(column, row).map(|i| self.cells[i].0)
    }

    fn index(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.width && row < self.height).then(|| row * self.width + column)
    }

    fn set_unit(&mut self, ux: i32, uy: i32, glyph: [char; CELL_WIDTH], style: Style) {
        if ux < 0 || uy < 0 {
            return;
        }
        for (offset, ch) in glyph.into_iter().enumerate() {
            if let Some(i) = self.index(ux as usize * CELL_WIDTH + offset, uy as usize) {
                self.cells[i] = (ch, self.cells[i].1.patch(style));
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn fill(&mut self, x: i32, y: i32, w: i32, h: i32, unit: i32, glyph: [char; CELL_WIDTH], style: Style) {
        let (ux0, uy0) = (x.div_euclid(unit), y.div_euclid(unit));
        let (ux1, uy1) = ((x + w.max(1) - 1).div_euclid(unit), (y + h.max(1) - 1).div_euclid(unit));
        for uy in uy0..=uy1 {
            for ux in ux0..=ux1 {
                self.set_unit(ux, uy, glyph, style);
            }
        }
    }

    /// Grid lines run along cell edges; mark every cell they touch with a dot
    fn trace(&mut self, x: i32, y: i32, w: i32, h: i32, unit: i32, style: Style) {
        let (ux0, uy0) = (x.div_euclid(unit), y.div_euclid(unit));
        let (ux1, uy1) = ((x + w).div_euclid(unit), (y + h).div_euclid(unit));
        for uy in uy0.min(uy1)..=uy0.max(uy1) {
            for ux in ux0.min(ux1)..=ux0.max(ux1) {
                self.set_unit(ux, uy, ['·', ' '], style);
            }
        }
    }

    fn write(&mut self, text: &TextItem, unit: i32) {
        let row = (text.y / unit).clamp(0, self.height as i32 - 1) as usize;
        let chars: Vec<char> = text.content.chars().collect();
        let start = self.width.saturating_sub(chars.len()) / 2;

        let mut style = Style::default().fg(color(text.color));
        if text.style.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if text.style.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }

        for (offset, ch) in chars.into_iter().enumerate() {
            if let Some(i) = self.index(start + offset, row) {
                self.cells[i] = (ch, self.cells[i].1.patch(style));
            }
        }
    }

    /// Convert to styled lines, merging runs of equal style
    pub fn lines(&self) -> Vec<Line<'static>> {
        self.cells
            .chunks(self.width)
            .map(|row| {
                let mut spans: Vec<Span<'static>> = Vec::new();
                let mut run = String::new();
                let mut run_style = row[0].1;
                for &(ch, style) in row {
                    if style != run_style && !run.is_empty() {
                        spans.push(Span::styled(std::mem::take(&mut run), run_style));
                    }
                    run_style = style;
                    run.push(ch);
                }
                spans.push(Span::styled(run, run_style));
                Line::from(spans)
            })
            .collect()
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, scene: &Scene, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Play area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(metrics);
        frame.render_widget(stats, chunks[0]);

        let canvas = Canvas::paint(scene);
        let board = centered(chunks[1], canvas.width() as u16 + 2, canvas.height() as u16 + 2);
        frame.render_widget(self.render_board(&canvas), board);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_board(&self, canvas: &Canvas) -> Paragraph<'static> {
        Paragraph::new(canvas.lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Tick: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{} ms", metrics.tick_interval.as_millis()),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" to start | "),
            Span::styled("M", Style::default().fg(Color::Cyan)),
            Span::raw(" grid | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width` x `height` rect centered in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
