//! Screen-space geometry and color types

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point in screen space (y grows downwards)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// An axis-aligned rectangle in global screen coordinates.
///
/// `left`/`top` are inclusive, `right`/`bottom` exclusive, matching the way
/// surfaces report their pixel area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle anchored at the origin, e.g. the full area of a surface
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Square of half-extent `radius` centered on `(x, y)`
    pub fn around(x: f32, y: f32, radius: f32) -> Self {
        Self::new(x - radius, y - radius, x + radius, y + radius)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }
}

/// RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const GOLD_DARK: Self = Self::new(184.0 / 255.0, 134.0 / 255.0, 11.0 / 255.0, 1.0);
    pub const GOLD_MED: Self = Self::new(218.0 / 255.0, 165.0 / 255.0, 32.0 / 255.0, 1.0);
    pub const GOLD: Self = Self::new(1.0, 215.0 / 255.0, 0.0, 1.0);
    pub const GOLD_LIGHT: Self = Self::new(1.0, 232.0 / 255.0, 124.0 / 255.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse `#RRGGBB` or `RRGGBB`
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_hex)
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The four gold tones used by the stock confetti palettes
    pub fn gold_palette() -> Vec<Color> {
        vec![Self::GOLD_DARK, Self::GOLD_MED, Self::GOLD, Self::GOLD_LIGHT]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_operations() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(a + b, Point::new(5.0, 8.0));
        assert_eq!(b - a, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_rect_dimensions_and_contains() {
        let r = Rect::around(50.0, 50.0, 10.0);
        assert_eq!(r, Rect::new(40.0, 40.0, 60.0, 60.0));
        assert_eq!(r.width(), 20.0);
        assert!(r.contains(Point::new(40.0, 59.0)));
        assert!(!r.contains(Point::new(60.0, 50.0)));
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex(0xFF8844);
        assert!((c.r - 1.0).abs() < 0.01);
        assert!((c.g - 0.533).abs() < 0.01);
        assert!((c.b - 0.267).abs() < 0.01);
    }

    #[test]
    fn test_color_parse_hex() {
        assert_eq!(Color::parse_hex("#FFD700"), Some(Color::GOLD));
        assert_eq!(Color::parse_hex("ffd700"), Some(Color::GOLD));
        assert!(Color::parse_hex("#FFF").is_none());
        assert!(Color::parse_hex("zzzzzz").is_none());
    }
}
