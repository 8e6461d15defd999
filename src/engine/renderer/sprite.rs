// Draw command recording and quad geometry

use super::Vertex;
use crate::core::{Color, Rect};
use crate::engine::assets::TextureHandle;
use glam::{Vec2, Vec4};

/// Horizontal mirroring applied when drawing a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flip {
    #[default]
    None,
    Horizontal,
}

impl Flip {
    pub fn horizontal_if(mirrored: bool) -> Self {
        if mirrored {
            Self::Horizontal
        } else {
            Self::None
        }
    }
}

/// Surface the game draws onto
pub trait Canvas {
    /// Fill a rectangle with a solid color
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stretch a texture over a rectangle
    fn draw_texture(&mut self, texture: TextureHandle, rect: Rect, flip: Flip);
}

/// A single recorded draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Fill { rect: Rect, color: Color },
    Texture {
        texture: TextureHandle,
        rect: Rect,
        flip: Flip,
    },
}

impl DrawCommand {
    /// Four corners (top-left, top-right, bottom-right, bottom-left)
    pub fn vertices(&self) -> [Vertex; 4] {
        match *self {
            DrawCommand::Fill { rect, color } => {
                quad(rect, Vec4::from_array(color.to_f32_array()), Flip::None)
            }
            DrawCommand::Texture { rect, flip, .. } => quad(rect, Vec4::ONE, flip),
        }
    }
}

fn quad(rect: Rect, color: Vec4, flip: Flip) -> [Vertex; 4] {
    let left = rect.x as f32;
    let top = rect.y as f32;
    let right = rect.right() as f32;
    let bottom = rect.bottom() as f32;

    let (u_left, u_right) = match flip {
        Flip::None => (0.0, 1.0),
        Flip::Horizontal => (1.0, 0.0),
    };

    [
        Vertex::new(Vec2::new(left, top), Vec2::new(u_left, 0.0), color),
        Vertex::new(Vec2::new(right, top), Vec2::new(u_right, 0.0), color),
        Vertex::new(Vec2::new(right, bottom), Vec2::new(u_right, 1.0), color),
        Vertex::new(Vec2::new(left, bottom), Vec2::new(u_left, 1.0), color),
    ]
}

/// Indices for the two triangles of one quad
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Indices per recorded command
pub const INDICES_PER_QUAD: u32 = QUAD_INDICES.len() as u32;

/// Ordered list of draws for one frame
#[derive(Debug, Clone)]
pub struct SpriteBatch {
    clear_color: Color,
    commands: Vec<DrawCommand>,
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self {
            clear_color: Color::rgb(0, 0, 0),
            commands: Vec::new(),
        }
    }

    /// Start a frame: drop previous draws and set the background color
    pub fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.commands.clear();
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Vertex and index data for every command, one quad each, in draw order
    pub fn build_geometry(&self) -> (Vec<Vertex>, Vec<u32>) {
        let mut vertices = Vec::with_capacity(self.commands.len() * 4);
        let mut indices = Vec::with_capacity(self.commands.len() * QUAD_INDICES.len());

        for command in &self.commands {
            let base = vertices.len() as u32;
            vertices.extend_from_slice(&command.vertices());
            indices.extend(QUAD_INDICES.iter().map(|i| base + i));
        }

        (vertices, indices)
    }
}

impl Default for SpriteBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for SpriteBatch {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if !rect.is_empty() {
            self.commands.push(DrawCommand::Fill { rect, color });
        }
    }

    fn draw_texture(&mut self, texture: TextureHandle, rect: Rect, flip: Flip) {
        if !rect.is_empty() {
            self.commands.push(DrawCommand::Texture {
                texture,
                rect,
                flip,
            });
        }
    }
}
