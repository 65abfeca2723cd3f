//! A minimal in-memory walkability map.
//!
//! [`WalkGrid`] is a width × height bitmap of blocked tiles. It exists for
//! tests, demos, and simple callers; real games plug their own map in
//! through [`WorldGrid`].

use std::fmt;

use tilenav_core::Position;

use crate::error::GridParseError;
use crate::path::Path;
use crate::traits::WorldGrid;

/// A rectangular map of open and blocked tiles, indexed from (0, 0).
///
/// Positions map to tiles by rounding ([`Position::tile`]). Anything outside
/// the rectangle is not walkable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkGrid {
    width: usize,
    height: usize,
    blocked: Vec<bool>,
}

impl WalkGrid {
    /// Create a grid with every tile open.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            blocked: vec![false; width * height],
        }
    }

    /// Parse a grid from text: `#` is blocked, `.` or space is open.
    ///
    /// Leading and trailing whitespace on each line is ignored, as are blank
    /// lines, so indented literals work.
    pub fn from_ascii(text: &str) -> Result<Self, GridParseError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(GridParseError::Empty);
        };
        let width = first.chars().count();
        let mut grid = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridParseError::Ragged {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                match glyph {
                    '#' => grid.blocked[y * width + x] = true,
                    '.' | ' ' => {}
                    _ => return Err(GridParseError::UnknownGlyph { glyph, row: y, col: x }),
                }
            }
        }
        Ok(grid)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat index of the tile containing `p`, or `None` if outside the grid.
    fn index(&self, p: Position) -> Option<usize> {
        let t = p.tile();
        let x = t.cell_x().ok()?;
        let y = t.cell_y().ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Whether `p` lies on the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.index(p).is_some()
    }

    /// Mark the tile containing `p`. Does nothing outside the grid.
    pub fn set_blocked(&mut self, p: Position, blocked: bool) {
        if let Some(i) = self.index(p) {
            self.blocked[i] = blocked;
        }
    }

    /// Whether the tile containing `p` is a wall. Outside tiles are not
    /// walls; they are simply not walkable.
    pub fn is_blocked(&self, p: Position) -> bool {
        self.index(p).is_some_and(|i| self.blocked[i])
    }

    /// Render the grid as text with `path` drawn over it: `S` and `G` for
    /// the endpoints, `*` for the rest.
    pub fn render_with(&self, path: &Path) -> String {
        let mut glyphs: Vec<char> = self
            .blocked
            .iter()
            .map(|&b| if b { '#' } else { '.' })
            .collect();
        for p in path {
            if let Some(i) = self.index(*p) {
                glyphs[i] = '*';
            }
        }
        if let Some(i) = path.first().and_then(|p| self.index(*p)) {
            glyphs[i] = 'S';
        }
        if path.len() > 1 {
            if let Some(i) = path.last().and_then(|p| self.index(*p)) {
                glyphs[i] = 'G';
            }
        }
        let mut out = String::with_capacity(glyphs.len() + self.height);
        for row in glyphs.chunks(self.width.max(1)) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

impl WorldGrid for WalkGrid {
    #[inline]
    fn is_walkable(&self, p: Position) -> bool {
        self.index(p).is_some_and(|i| !self.blocked[i])
    }
}

impl fmt::Display for WalkGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&Path::new()))
    }
}
