//! Tile Map
//!
//! Fixed-size character grid describing a 2-D level layout. A space means
//! "empty, draw nothing"; any other character marks an occupied tile.
//! Which character it is does not affect the fill color yet - occupied
//! cells all render the same.

use serde::{Deserialize, Serialize};

/// A `width x height` grid of cells, stored row-major as one flat string
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TileMap {
    cells: Vec<char>,
    width: u32,
    height: u32,
}

impl TileMap {
    /// Build a map from row strings. Every row must be the same length and
    /// at least one row must be present; ragged input is rejected rather
    /// than padded, so the cell count always equals `width * height`.
    pub fn from_rows(rows: &[impl AsRef<str>]) -> Result<Self, String> {
        let height = rows.len() as u32;
        if height == 0 {
            return Err("tile map must have at least one row".to_string());
        }
        let width = rows[0].as_ref().chars().count() as u32;
        if width == 0 {
            return Err("tile map rows must not be empty".to_string());
        }

        let mut cells = Vec::with_capacity((width * height) as usize);
        for (j, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count() as u32;
            if len != width {
                return Err(format!(
                    "tile map row {} has {} cells, expected {}",
                    j, len, width
                ));
            }
            cells.extend(row.chars());
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The character at cell (i, j). Panics if the cell is out of range.
    #[inline]
    pub fn cell(&self, i: u32, j: u32) -> char {
        assert!(
            i < self.width && j < self.height,
            "cell ({}, {}) out of bounds for {}x{} tile map",
            i,
            j,
            self.width,
            self.height
        );
        self.cells[(i + j * self.width) as usize]
    }

    /// True if cell (i, j) holds a tile (anything but a space)
    #[inline]
    pub fn is_occupied(&self, i: u32, j: u32) -> bool {
        self.cell(i, j) != ' '
    }
}

impl TryFrom<Vec<String>> for TileMap {
    type Error = String;

    fn try_from(rows: Vec<String>) -> Result<Self, String> {
        Self::from_rows(&rows)
    }
}

impl From<TileMap> for Vec<String> {
    fn from(map: TileMap) -> Self {
        map.cells
            .chunks(map.width as usize)
            .map(|row| row.iter().collect())
            .collect()
    }
}
