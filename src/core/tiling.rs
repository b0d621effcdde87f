use crate::util::coord::Coordinate;
use geo::Intersects;
use geo_types::{Point, Rect, coord};

/// A uniform square grid over an axis-aligned geographic extent.
///
/// Tiles are `tile_size` degrees on a side and numbered row-major from the
/// southwest corner: `index = row * n_cols + col`. Boundary rule: the lower
/// and left edges of a tile are inclusive, the upper and right edges are
/// exclusive, so a point exactly on a shared grid line belongs to the tile
/// whose origin it is.
#[derive(Debug, Clone, PartialEq)]
pub struct Tiling {
    bounds: Rect<f64>,
    tile_size: f64,
    n_rows: i32,
    n_cols: i32,
    n_subdivisions: u16,
}

impl Tiling {
    /// Creates a grid anchored at an explicit southwest corner with explicit
    /// column and row counts.
    pub fn new<C: Coordinate>(
        origin: &C,
        tile_size: f64,
        n_cols: i32,
        n_rows: i32,
        n_subdivisions: u16,
    ) -> Self {
        let bounds = Rect::new(
            coord! { x: origin.x(), y: origin.y() },
            coord! {
                x: origin.x() + f64::from(n_cols) * tile_size,
                y: origin.y() + f64::from(n_rows) * tile_size,
            },
        );
        Self {
            bounds,
            tile_size,
            n_rows,
            n_cols,
            n_subdivisions,
        }
    }

    /// Creates a grid covering `bounds`, with column and row counts derived
    /// from the tile size.
    pub fn from_bounds(bounds: Rect<f64>, tile_size: f64, n_subdivisions: u16) -> Self {
        let n_cols = (bounds.width() / tile_size).round() as i32;
        let n_rows = (bounds.height() / tile_size).round() as i32;
        Self {
            bounds,
            tile_size,
            n_rows,
            n_cols,
            n_subdivisions,
        }
    }

    /// The extent covered by the grid.
    pub fn bounds(&self) -> Rect<f64> {
        self.bounds
    }

    /// Tile edge length in degrees.
    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    pub fn n_rows(&self) -> i32 {
        self.n_rows
    }

    pub fn n_cols(&self) -> i32 {
        self.n_cols
    }

    /// Total number of tiles in the grid.
    pub fn tile_count(&self) -> i32 {
        self.n_rows * self.n_cols
    }

    /// Spatial bins per axis inside each tile.
    pub fn n_subdivisions(&self) -> u16 {
        self.n_subdivisions
    }

    /// Edge length in degrees of one sub-tile bin.
    pub fn subdivision_size(&self) -> f64 {
        self.tile_size / f64::from(self.n_subdivisions)
    }

    pub fn row_of(&self, index: i32) -> i32 {
        index / self.n_cols
    }

    pub fn col_of(&self, index: i32) -> i32 {
        index % self.n_cols
    }

    pub fn index_of_row_col(&self, row: i32, col: i32) -> i32 {
        row * self.n_cols + col
    }

    /// Returns the index of the tile containing the point, or `None` when the
    /// point lies outside the covered extent.
    pub fn tile_index_of<C: Coordinate>(&self, point: &C) -> Option<i32> {
        let x = point.x();
        let y = point.y();
        if x < self.bounds.min().x
            || y < self.bounds.min().y
            || x >= self.bounds.max().x
            || y >= self.bounds.max().y
        {
            return None;
        }

        // roundoff just below the upper extent can land one cell past the end
        let col = (((x - self.bounds.min().x) / self.tile_size) as i32).min(self.n_cols - 1);
        let row = (((y - self.bounds.min().y) / self.tile_size) as i32).min(self.n_rows - 1);
        Some(self.index_of_row_col(row, col))
    }

    /// Returns the southwest corner of the tile, or `None` for an index
    /// outside the grid.
    pub fn origin_of(&self, index: i32) -> Option<Point<f64>> {
        if index < 0 || index >= self.tile_count() {
            return None;
        }
        let row = self.row_of(index);
        let col = self.col_of(index);
        Some(Point::new(
            self.bounds.min().x + f64::from(col) * self.tile_size,
            self.bounds.min().y + f64::from(row) * self.tile_size,
        ))
    }

    /// Returns the rectangle of the tile, or `None` for an index outside the
    /// grid.
    pub fn bounds_of(&self, index: i32) -> Option<Rect<f64>> {
        let origin = self.origin_of(index)?;
        Some(Rect::new(
            coord! { x: origin.x(), y: origin.y() },
            coord! { x: origin.x() + self.tile_size, y: origin.y() + self.tile_size },
        ))
    }

    /// Returns the indices of every tile whose rectangle intersects `rect`,
    /// in row-major order. Touching at an edge counts as intersecting; the
    /// query rectangle is clamped to the covered extent.
    pub fn tile_list(&self, rect: &Rect<f64>) -> Vec<i32> {
        if !rect.intersects(&self.bounds) {
            return Vec::new();
        }

        let min_x = rect.min().x.max(self.bounds.min().x);
        let min_y = rect.min().y.max(self.bounds.min().y);
        let max_x = rect.max().x.min(self.bounds.max().x);
        let max_y = rect.max().y.min(self.bounds.max().y);

        let min_col = (((min_x - self.bounds.min().x) / self.tile_size) as i32).min(self.n_cols - 1);
        let max_col = (((max_x - self.bounds.min().x) / self.tile_size) as i32).min(self.n_cols - 1);
        let min_row = (((min_y - self.bounds.min().y) / self.tile_size) as i32).min(self.n_rows - 1);
        let max_row = (((max_y - self.bounds.min().y) / self.tile_size) as i32).min(self.n_rows - 1);

        let mut tiles =
            Vec::with_capacity(((max_row - min_row + 1) * (max_col - min_col + 1)) as usize);
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                tiles.push(self.index_of_row_col(row, col));
            }
        }
        tiles
    }
}
