//! Level module - the static tile grid
//!
//! The level is a fixed-size grid of [`Tile`]s stored in a flat row-major
//! vector. Coordinates: (x, y) where x is the column (left to right) and y the
//! row (top to bottom). The grid never changes size after construction; the
//! only runtime mutation is a question block turning into a used block.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::types::{Tile, TILE_SIZE};

/// Grid cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub x: usize,
    pub y: usize,
}

impl TileCoord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Cells overlapped by a tile-sized box (at most 2x2)
pub type TileHits = ArrayVec<TileCoord, 4>;

/// Errors raised while building a level
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level has no rows")]
    NoRows,
    #[error("level has no columns")]
    NoColumns,
    #[error("level row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile code {code} at column {x}, row {y}")]
    UnknownTile { code: u8, x: usize, y: usize },
}

/// The level grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    width: usize,
    height: usize,
    /// Flat array of tiles, row-major order (y * width + x)
    tiles: Vec<Tile>,
}

impl Level {
    /// Create an empty level of the given size
    pub fn new(width: usize, height: usize) -> Result<Self, LevelError> {
        if height == 0 {
            return Err(LevelError::NoRows);
        }
        if width == 0 {
            return Err(LevelError::NoColumns);
        }
        Ok(Self {
            width,
            height,
            tiles: vec![Tile::Empty; width * height],
        })
    }

    /// Build a level from rows of tile codes
    ///
    /// Fails on an empty grid, rows of unequal length, or codes outside 0..=5.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_platformer_core::{Level, LevelError};
    /// use tui_platformer_core::types::Tile;
    ///
    /// let level = Level::from_rows(&[[0u8, 0, 3], [1, 1, 1]]).unwrap();
    /// assert_eq!(level.get(2, 0), Some(Tile::QuestionBlock));
    ///
    /// let err = Level::from_rows(&[vec![0u8, 1], vec![1]]).unwrap_err();
    /// assert_eq!(err, LevelError::Ragged { row: 1, expected: 2, found: 1 });
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, LevelError> {
        let first = rows.first().ok_or(LevelError::NoRows)?;
        let width = first.as_ref().len();
        let mut level = Self::new(width, rows.len())?;

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(LevelError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &code) in row.iter().enumerate() {
                let tile = Tile::from_code(code).ok_or(LevelError::UnknownTile { code, x, y })?;
                level.tiles[y * width + x] = tile;
            }
        }

        Ok(level)
    }

    #[inline(always)]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Width in tiles
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in tiles
    pub fn height(&self) -> usize {
        self.height
    }

    /// Width in pixels
    pub fn pixel_width(&self) -> f32 {
        self.width as f32 * TILE_SIZE
    }

    /// Height in pixels
    pub fn pixel_height(&self) -> f32 {
        self.height as f32 * TILE_SIZE
    }

    /// Get the tile at (x, y); None if out of bounds
    pub fn get(&self, x: i64, y: i64) -> Option<Tile> {
        self.index(x, y).map(|i| self.tiles[i])
    }

    /// Set the tile at (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i64, y: i64, tile: Tile) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Fill columns `xs` of row `y` with `tile`
    pub fn fill_row(&mut self, y: usize, xs: std::ops::Range<usize>, tile: Tile) {
        for x in xs {
            self.set(x as i64, y as i64, tile);
        }
    }

    /// Check if position is inside the grid and solid
    pub fn is_solid(&self, x: i64, y: i64) -> bool {
        self.get(x, y).is_some_and(|t| t.is_solid())
    }

    /// Turn a question block into a used block.
    ///
    /// Returns true only on the transition; bumping a used block again is a
    /// no-op.
    pub fn activate_block(&mut self, coord: TileCoord) -> bool {
        match self.index(coord.x as i64, coord.y as i64) {
            Some(i) if self.tiles[i] == Tile::QuestionBlock => {
                self.tiles[i] = Tile::UsedBlock;
                true
            }
            _ => false,
        }
    }

    /// Cells overlapped by a tile-sized box with its top-left corner at (x, y).
    ///
    /// The min edge is floored and the max edge is `ceil(edge) - 1`, so a box
    /// lying exactly on a tile boundary touches one column/row, not two. Cells
    /// outside the grid are dropped; a box fully outside yields nothing.
    pub fn overlapping_tiles(&self, x: f32, y: f32) -> TileHits {
        let mut hits = TileHits::new();

        let (min_x, max_x) = span(x);
        let (min_y, max_y) = span(y);

        let min_x = min_x.max(0);
        let min_y = min_y.max(0);
        let max_x = max_x.min(self.width as i64 - 1);
        let max_y = max_y.min(self.height as i64 - 1);

        for ty in min_y..=max_y {
            for tx in min_x..=max_x {
                let _ = hits.try_push(TileCoord::new(tx as usize, ty as usize));
            }
        }
        hits
    }

    /// Like [`Level::overlapping_tiles`], keeping only solid cells
    pub fn solid_overlaps(&self, x: f32, y: f32) -> TileHits {
        let mut hits = self.overlapping_tiles(x, y);
        hits.retain(|c| self.is_solid(c.x as i64, c.y as i64));
        hits
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width)
    }

    /// Number of tiles of the given kind
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }
}

/// First and last tile index covered by `[pos, pos + TILE_SIZE)` on one axis
#[inline(always)]
fn span(pos: f32) -> (i64, i64) {
    let min = (pos / TILE_SIZE).floor() as i64;
    let max = ((pos + TILE_SIZE) / TILE_SIZE).ceil() as i64 - 1;
    (min, max)
}
