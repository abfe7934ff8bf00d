//! Drawable description of one frame
//!
//! The engine describes what to draw in play-area pixels; painting it onto a
//! real surface is left to the host (see [`crate::render`]).

use rand::Rng;

/// A 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const MAGENTA: Rgb = Rgb(255, 0, 255);
    pub const DARK_GRAY: Rgb = Rgb(64, 64, 64);

    /// A random color with each channel in `0..255`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Rgb(rng.gen_range(0..255), rng.gen_range(0..255), rng.gen_range(0..255))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Filled rectangle covering `width` x `height` from the origin
    Rect,
    /// Filled ellipse inscribed in the bounding box
    Oval,
    /// Line from the origin to `(x + width, y + height)`
    Line,
}

/// A colored shape in play-area pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: Rgb,
}

impl Shape {
    pub fn rect(x: i32, y: i32, size: i32, color: Rgb) -> Self {
        Self {
            kind: ShapeKind::Rect,
            x,
            y,
            width: size,
            height: size,
            color,
        }
    }

    pub fn oval(x: i32, y: i32, size: i32, color: Rgb) -> Self {
        Self {
            kind: ShapeKind::Oval,
            x,
            y,
            width: size,
            height: size,
            color,
        }
    }

    pub fn line(from: (i32, i32), to: (i32, i32), color: Rgb) -> Self {
        Self {
            kind: ShapeKind::Line,
            x: from.0,
            y: from.1,
            width: to.0 - from.0,
            height: to.1 - from.1,
            color,
        }
    }
}

/// Font style hint for a text item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    /// Point size; also the baseline offset of top-anchored text
    pub size: u16,
    pub bold: bool,
    pub italic: bool,
}

/// A line of text centered horizontally on the play area, with its
/// baseline at `y` pixels from the top
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextItem {
    pub content: String,
    pub y: i32,
    pub color: Rgb,
    pub style: TextStyle,
}

impl TextItem {
    pub fn centered(content: impl Into<String>, y: i32, color: Rgb, style: TextStyle) -> Self {
        Self {
            content: content.into(),
            y,
            color,
            style,
        }
    }
}

/// Everything needed to paint one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub unit_size: i32,
    pub background: Rgb,
    pub shapes: Vec<Shape>,
    pub texts: Vec<TextItem>,
}

impl Scene {
    pub fn new(width: i32, height: i32, unit_size: i32) -> Self {
        Self {
            width,
            height,
            unit_size,
            background: Rgb::BLACK,
            shapes: Vec::new(),
            texts: Vec::new(),
        }
    }
}

/// Snake coloring for a score tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Fixed { head: Rgb, body: Rgb },
    /// Body segments get an independent random color every frame
    Rainbow { head: Rgb },
}

impl Palette {
    /// Palette for the given score: tiers change every 10 apples, up to 30
    pub fn for_score(score: u32) -> Self {
        match score {
            0..=9 => Palette::Fixed {
                head: Rgb::GREEN,
                body: Rgb(45, 180, 0),
            },
            10..=19 => Palette::Fixed {
                head: Rgb::YELLOW,
                body: Rgb(220, 180, 0),
            },
            20..=29 => Palette::Fixed {
                head: Rgb(0, 180, 255),
                body: Rgb(0, 180, 180),
            },
            _ => Palette::Rainbow { head: Rgb::MAGENTA },
        }
    }

    /// Color for the segment at `index` (0 is the head)
    pub fn segment_color<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> Rgb {
        match (*self, index) {
            (Palette::Fixed { head, .. }, 0) | (Palette::Rainbow { head }, 0) => head,
            (Palette::Fixed { body, .. }, _) => body,
            (Palette::Rainbow { .. }, _) => Rgb::random(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_tiers() {
        let mut rng = rand::thread_rng();

        assert_eq!(Palette::for_score(0).segment_color(0, &mut rng), Rgb::GREEN);
        assert_eq!(Palette::for_score(9).segment_color(3, &mut rng), Rgb(45, 180, 0));
        assert_eq!(Palette::for_score(10).segment_color(0, &mut rng), Rgb::YELLOW);
        assert_eq!(Palette::for_score(19).segment_color(1, &mut rng), Rgb(220, 180, 0));
        assert_eq!(Palette::for_score(20).segment_color(0, &mut rng), Rgb(0, 180, 255));
        assert_eq!(Palette::for_score(29).segment_color(5, &mut rng), Rgb(0, 180, 180));
        assert_eq!(Palette::for_score(30).segment_color(0, &mut rng), Rgb::MAGENTA);
        assert_eq!(Palette::for_score(30), Palette::Rainbow { head: Rgb::MAGENTA });
    }

    #[test]
    fn test_line_shape_extent() {
        let line = Shape::line((25, 0), (25, 600), Rgb::DARK_GRAY);
        assert_eq!(line.kind, ShapeKind::Line);
        assert_eq!((line.x, line.y, line.width, line.height), (25, 0, 0, 600));
    }
}
