/// Pixel canvas for terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wire3d_core::{DrawList, Segment, Vertex2};

/// Glyph whose top half takes the foreground and bottom half the background
const UPPER_HALF_BLOCK: char = '\u{2580}';

type Rgb = wire3d_core::Color;

/// RGB framebuffer presented two pixels per character cell
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
    background: Rgb,
}

impl Canvas {
    /// `width` and `height` are in pixels; `height` is rounded up to even.
    pub fn new(width: usize, height: usize) -> Self {
        let height = height + height % 2;
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); width * height],
            background: Rgb::default(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Match a new pixel size, reallocating only when it changed
    pub fn resize(&mut self, width: usize, height: usize) {
        let height = height + height % 2;
        if width != self.width || height != self.height {
            *self = Self::new(width, height);
        }
    }

    pub fn clear(&mut self) {
        let background = self.background;
        self.pixels.iter_mut().for_each(|p| *p = background);
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Set a pixel; coordinates outside the canvas are ignored
    pub fn plot(&mut self, x: i64, y: i64, color: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            let idx = y as usize * self.width + x as usize;
            self.pixels[idx] = color;
        }
    }

    /// Draw a line between two points using Bresenham's algorithm.
    ///
    /// Endpoints far outside the canvas are first clipped to a square a few
    /// canvas-sizes wide so the walk stays short.
    pub fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb) {
        let limit = (self.width.max(self.height) as f64 + 1.0) * 4.0;
        let clipped = clip_to_square(
            [f64::from(x0), f64::from(y0)],
            [f64::from(x1), f64::from(y1)],
            limit,
        );
        let Some(([x0, y0], [x1, y1])) = clipped else {
            return;
        };

        let (mut x0, mut y0, x1, y1) = (
            x0.floor() as i64,
            y0.floor() as i64,
            x1.floor() as i64,
            y1.floor() as i64,
        );
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy; // error value e_xy

        loop {
            self.plot(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    pub fn draw_point(&mut self, point: &Vertex2) {
        let p = point.position;
        if p.x.is_finite() && p.y.is_finite() {
            self.plot(p.x.floor() as i64, p.y.floor() as i64, point.color);
        }
    }

    pub fn draw_segment(&mut self, segment: &Segment) {
        self.draw_line(
            segment.from.x,
            segment.from.y,
            segment.to.x,
            segment.to.y,
            segment.color,
        );
    }

    /// Rasterize a draw list: points first, then segments, in list order
    pub fn render(&mut self, list: &DrawList) {
        for point in &list.points {
            self.draw_point(point);
        }
        for segment in &list.segments {
            self.draw_segment(segment);
        }
    }

    /// Write the canvas to the terminal starting at the top-left cell
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in 0..self.height / 2 {
            writer.queue(cursor::MoveTo(0, row as u16))?;
            for x in 0..self.width {
                let top = self.pixels[(row * 2) * self.width + x];
                let bottom = self.pixels[(row * 2 + 1) * self.width + x];
                writer.queue(SetForegroundColor(to_terminal(top)))?;
                writer.queue(SetBackgroundColor(to_terminal(bottom)))?;
                writer.queue(Print(UPPER_HALF_BLOCK))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

type Point = [f64; 2];

/// Clip a segment to the square `[-limit, limit]` (Liang-Barsky).
///
/// Returns `None` when the segment misses the square or has a non-finite
/// coordinate. Endpoints already inside are returned unchanged.
fn clip_to_square(from: Point, to: Point, limit: f64) -> Option<(Point, Point)> {
    if !from.iter().chain(to.iter()).all(|c| c.is_finite()) {
        return None;
    }
    let (dx, dy) = (to[0] - from[0], to[1] - from[1]);
    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    for (p, q) in [
        (-dx, from[0] + limit),
        (dx, limit - from[0]),
        (-dy, from[1] + limit),
        (dy, limit - from[1]),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else if p < 0.0 {
            t0 = t0.max(q / p);
        } else {
            t1 = t1.min(q / p);
        }
    }
    if t0 > t1 {
        return None;
    }

    let at = |t: f64| {
        [
            (from[0] + t * dx).clamp(-limit, limit),
            (from[1] + t * dy).clamp(-limit, limit),
        ]
    };
    let start = if t0 == 0.0 { from } else { at(t0) };
    let end = if t1 == 1.0 { to } else { at(t1) };
    Some((start, end))
}

fn to_terminal(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
