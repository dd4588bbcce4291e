//! Scene Composer
//!
//! All render inputs in one place - framebuffer dimensions, the tile map,
//! the player position, and the palette - plus the top-down render pass
//! that turns them into pixels.
//!
//! Scenes serialize to JSON so a layout can be edited without recompiling.

use crate::color::PackedColor;
use crate::framebuffer::Framebuffer;
use crate::map::TileMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Side length of the player marker square, in pixels (not tiles)
pub const PLAYER_MARKER_SIZE: u32 = 5;

/// A renderable scene: dimensions, level layout, player, palette
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub map: TileMap,
    /// Player position in map units (tile coordinates, fractional)
    pub player_x: f32,
    pub player_y: f32,
    pub tile_color: PackedColor,
    pub player_color: PackedColor,
}

impl Scene {
    /// Render the scene into a fresh framebuffer: gradient background,
    /// then tile blocks, then the player marker on top.
    pub fn render(&self) -> Framebuffer {
        let mut buffer = Framebuffer::new(self.width, self.height, PackedColor::rgb(255, 255, 255));
        self.draw_background(&mut buffer);
        self.draw_tiles(&mut buffer);
        self.draw_player(&mut buffer);
        buffer
    }

    /// Red-green gradient: red ramps down the rows, green across the columns
    fn draw_background(&self, buffer: &mut Framebuffer) {
        let w = buffer.width();
        let h = buffer.height();
        for j in 0..h {
            for i in 0..w {
                let r = (255.0 * j as f32 / h as f32) as u8;
                let g = (255.0 * i as f32 / w as f32) as u8;
                buffer.set(i, j, PackedColor::rgb(r, g, 0));
            }
        }
    }

    /// One solid block per occupied map cell, scaled from map coordinates
    /// to pixel coordinates. Integer division leaves any remainder pixels
    /// at the right/bottom edge showing the background.
    fn draw_tiles(&self, buffer: &mut Framebuffer) {
        let tile_w = buffer.width() / self.map.width();
        let tile_h = buffer.height() / self.map.height();
        for j in 0..self.map.height() {
            for i in 0..self.map.width() {
                if !self.map.is_occupied(i, j) {
                    continue; // empty cell, background shows through
                }
                buffer.fill_rect(i * tile_w, j * tile_h, tile_w, tile_h, self.tile_color);
            }
        }
    }

    /// Fixed-size marker square. Drawn last so it always overlays tiles.
    /// Player coordinates are in map units, so scaling by tile size gives
    /// the pixel origin.
    fn draw_player(&self, buffer: &mut Framebuffer) {
        let tile_w = buffer.width() / self.map.width();
        let tile_h = buffer.height() / self.map.height();
        let px = (self.player_x * tile_w as f32) as u32;
        let py = (self.player_y * tile_h as f32) as u32;
        buffer.fill_rect(
            px,
            py,
            PLAYER_MARKER_SIZE,
            PLAYER_MARKER_SIZE,
            self.player_color,
        );
    }

    /// Save scene to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Load scene from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }
}

impl Default for Scene {
    /// The built-in level: a 512x512 render of a 16x16 walled map
    fn default() -> Self {
        let rows = [
            "0000222222220000",
            "1              0",
            "1      11111   0",
            "1     0        0",
            "0     0  1110000",
            "0     3        0",
            "0   10000      0",
            "0   0   11100  0",
            "0   0   0      0",
            "0   1  00000   0",
            "0       1      0",
            "2       1      0",
            "0       0      0",
            "0 0000000      0",
            "0              0",
            "0002222222220000",
        ];
        Self {
            width: 512,
            height: 512,
            map: TileMap::from_rows(&rows).expect("built-in map is well-formed"),
            player_x: 3.456,
            player_y: 2.345,
            tile_color: PackedColor::rgb(0, 255, 255),
            player_color: PackedColor::rgb(255, 255, 255),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE: PackedColor = PackedColor::rgb(0, 255, 255);
    const MARKER: PackedColor = PackedColor::rgb(255, 255, 255);

    fn scene(width: u32, height: u32, rows: &[&str]) -> Scene {
        Scene {
            width,
            height,
            map: TileMap::from_rows(rows).unwrap(),
            player_x: 0.0,
            player_y: 0.0,
            tile_color: TILE,
            player_color: MARKER,
        }
    }

    #[test]
    fn test_background_gradient_corners() {
        let s = scene(4, 4, &["    ", "    ", "    ", "    "]);
        let mut fb = Framebuffer::new(4, 4, PackedColor::rgb(255, 255, 255));
        s.draw_background(&mut fb);
        assert_eq!(fb.get(0, 0), PackedColor::rgb(0, 0, 0));
        assert_eq!(fb.get(3, 3), PackedColor::rgb(191, 191, 0));
        // Row 3, column 0: red only
        assert_eq!(fb.get(0, 3), PackedColor::rgb(191, 0, 0));
    }

    #[test]
    fn test_map_cells_become_tile_blocks() {
        let s = scene(8, 8, &["X ", " X"]);
        let mut fb = Framebuffer::new(8, 8, PackedColor::rgb(40, 40, 40));
        s.draw_tiles(&mut fb);

        // Occupied quadrants are solid tile color
        for y in 0..4u32 {
            for x in 0..4u32 {
                assert_eq!(fb.get(x, y), TILE, "tile pixel ({}, {})", x, y);
                assert_eq!(fb.get(x + 4, y + 4), TILE);
            }
        }
        // Empty quadrants keep whatever was there before
        for y in 0..4u32 {
            for x in 0..4u32 {
                assert_eq!(fb.get(x + 4, y), PackedColor::rgb(40, 40, 40));
                assert_eq!(fb.get(x, y + 4), PackedColor::rgb(40, 40, 40));
            }
        }
    }

    #[test]
    fn test_player_marker_overlays_tiles() {
        let mut s = scene(16, 16, &["X ", " X"]);
        s.player_x = 0.5; // pixel (4, 4), well inside the occupied tile
        s.player_y = 0.5;
        let fb = s.render();
        for y in 4..4 + PLAYER_MARKER_SIZE {
            for x in 4..4 + PLAYER_MARKER_SIZE {
                assert_eq!(fb.get(x, y), MARKER);
            }
        }
        // Surrounding tile pixels untouched
        assert_eq!(fb.get(3, 3), TILE);
    }

    #[test]
    fn test_render_is_deterministic() {
        let s = Scene::default();
        assert_eq!(s.render().pixels(), s.render().pixels());
    }

    #[test]
    fn test_scene_json_round_trip() {
        let s = Scene::default();
        let json = serde_json::to_string(&s).unwrap();
        let back: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(back.width, s.width);
        assert_eq!(back.tile_color, s.tile_color);
        assert_eq!(back.render().pixels(), s.render().pixels());
    }
}
