// Screen-space geometry and color primitives

/// Axis-aligned rectangle in integer screen pixels (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size standing on `(x, feet_y)`.
    ///
    /// Float coordinates truncate toward zero, matching a plain `as` cast.
    pub fn from_feet(x: f32, feet_y: f32, w: i32, h: i32) -> Self {
        Self::new(x as i32, (feet_y as i32).saturating_sub(h), w, h)
    }

    /// X coordinate one past the right edge
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Y coordinate one past the bottom edge
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Normalized `[r, g, b, a]` for vertex colors
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Linear-ish conversion for a wgpu clear color
    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b, a] = self.to_f32_array();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}
