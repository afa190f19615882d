use std::fmt::{self, Display, Write as _};

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::{MapError, MapResult};
use crate::vector::Vector2;

/// A fixed-size 2D array over a flat row-major buffer.
///
/// Cell `(x, y)` lives at index `y * width + x`. The dimensions are set at
/// construction and never change.
///
/// In the save file a grid encodes as `{"Array": "v0 v1 ... vn"}`: every
/// cell's `Display` form in row-major order, separated by single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Default + Clone> Grid<T> {
    /// Create a grid with every cell set to `T::default()`.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, T::default())
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }
}

impl<T> Grid<T> {
    /// Wrap an existing row-major buffer.
    ///
    /// Fails if the buffer does not hold exactly `width * height` cells.
    pub fn from_vec(width: usize, height: usize, cells: Vec<T>) -> MapResult<Self> {
        if cells.len() != width * height {
            return Err(MapError::OutOfRange {
                x: width as i64,
                y: height as i64,
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Read the cell at `(x, y)`.
    pub fn get(&self, x: i64, y: i64) -> MapResult<&T> {
        let index = self.index(x, y)?;
        Ok(&self.cells[index])
    }

    /// Read the cell at a plane position.
    pub fn get_at(&self, at: Vector2) -> MapResult<&T> {
        self.get(at.x, at.y)
    }

    /// Overwrite the cell at `(x, y)`.
    pub fn set(&mut self, x: i64, y: i64, value: T) -> MapResult<()> {
        let index = self.index(x, y)?;
        self.cells[index] = value;
        Ok(())
    }

    /// Iterate over `(x, y, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (i % width, i / width, v))
    }

    fn index(&self, x: i64, y: i64) -> MapResult<usize> {
        let out_of_range = || MapError::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        };
        let col = usize::try_from(x).map_err(|_| out_of_range())?;
        let row = usize::try_from(y).map_err(|_| out_of_range())?;
        if col >= self.width || row >= self.height {
            return Err(out_of_range());
        }
        Ok(row * self.width + col)
    }
}

impl<T: Display> Grid<T> {
    /// The space-separated row-major text stored under the `Array` key.
    pub fn encode_cells(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2);
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{cell}");
        }
        out
    }
}

impl<T: Display> Serialize for Grid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Grid", 1)?;
        state.serialize_field("Array", &self.encode_cells())?;
        state.end()
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (x, y, cell) in self.iter() {
            if x == 0 && y > 0 {
                writeln!(f)?;
            } else if x > 0 {
                write!(f, " ")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn decode_cells(json: &str) -> Vec<i64> {
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        let text = value["Array"].as_str().unwrap();
        text.split(' ').map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn new_grid_is_default_filled() {
        let grid: Grid<i64> = Grid::new(3, 2);
        assert_eq!(grid.len(), 6);
        assert!(grid.cells().iter().all(|&v| v == 0));
    }

    #[test]
    fn set_then_get() {
        let mut grid: Grid<i64> = Grid::new(4, 3);
        grid.set(3, 2, 7).unwrap();
        assert_eq!(*grid.get(3, 2).unwrap(), 7);
        assert_eq!(grid.cells()[2 * 4 + 3], 7);
    }

    #[test]
    fn out_of_range_is_an_error() {
        let mut grid: Grid<i64> = Grid::new(4, 3);
        assert!(matches!(grid.get(4, 0), Err(MapError::OutOfRange { .. })));
        assert!(matches!(grid.get(0, 3), Err(MapError::OutOfRange { .. })));
        assert!(matches!(grid.get(-1, 0), Err(MapError::OutOfRange { .. })));
        assert!(matches!(grid.set(0, -1, 1), Err(MapError::OutOfRange { .. })));
    }

    #[test]
    fn x_overflow_does_not_wrap_into_next_row() {
        let grid: Grid<i64> = Grid::new(4, 3);
        assert!(grid.get(5, 0).is_err());
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(Grid::from_vec(2, 2, vec![1, 2, 3]).is_err());
        let grid = Grid::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(*grid.get(1, 1).unwrap(), 4);
    }

    #[test]
    fn encodes_row_major_without_trailing_space() {
        let grid = Grid::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"{"Array":"1 2 3 4 5 6"}"#);
    }

    #[test]
    fn single_cell_encoding() {
        let grid = Grid::from_vec(1, 1, vec![16]).unwrap();
        assert_eq!(serde_json::to_string(&grid).unwrap(), r#"{"Array":"16"}"#);
    }

    #[test]
    fn iter_yields_row_major_coordinates() {
        let grid = Grid::from_vec(2, 2, vec!['a', 'b', 'c', 'd']).unwrap();
        let coords: Vec<_> = grid.iter().map(|(x, y, c)| (x, y, *c)).collect();
        assert_eq!(
            coords,
            vec![(0, 0, 'a'), (1, 0, 'b'), (0, 1, 'c'), (1, 1, 'd')]
        );
    }

    #[test]
    fn display_breaks_rows() {
        let grid = Grid::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(grid.to_string(), "1 2\n3 4");
    }

    proptest! {
        #[test]
        fn encoding_round_trips(
            (width, height, cells) in (1usize..12, 1usize..12).prop_flat_map(|(w, h)| {
                (Just(w), Just(h), proptest::collection::vec(0i64..=16, w * h))
            })
        ) {
            let grid = Grid::from_vec(width, height, cells.clone()).unwrap();
            let json = serde_json::to_string(&grid).unwrap();
            prop_assert_eq!(decode_cells(&json), cells);
        }
    }
}
