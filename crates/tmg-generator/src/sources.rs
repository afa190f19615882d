//! Water source placement along the map border.
//!
//! Each edge is walked from its start looking for a run ("streak") of
//! equal-height cells low enough to hold a river bed. The first run of at
//! least [`MIN_STREAK`] cells on an edge becomes that edge's source. The
//! first two edges that produce a source are combined; the rest are never
//! scanned.

use std::fmt;

use tmg_core::{Grid, MapError, MapResult, Vector2, Vector3};
use tracing::debug;

use crate::config::MapOptions;
use crate::start::BASE_LAYER;

/// Highest elevation a river bed may sit at.
pub const MAX_ELEVATION: i64 = BASE_LAYER - 1;
/// Shortest run of equal cells that counts as a river bed.
pub const MIN_STREAK: usize = 5;

/// One side of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Row `0`, left to right.
    Top,
    /// Row `height - 1`, left to right.
    Bottom,
    /// Column `0`, top to bottom.
    Left,
    /// Column `width - 1`, top to bottom.
    Right,
}

impl Edge {
    /// Scan order.
    pub const ALL: [Edge; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Number of cells along this edge.
    pub fn len(self, options: &MapOptions) -> usize {
        match self {
            Self::Top | Self::Bottom => options.width,
            Self::Left | Self::Right => options.height,
        }
    }

    /// The `i`-th cell of this edge.
    pub fn cell(self, options: &MapOptions, i: usize) -> Vector2 {
        let i = i as i64;
        let last_col = options.width as i64 - 1;
        let last_row = options.height as i64 - 1;
        match self {
            Self::Top => Vector2::new(i, 0),
            Self::Bottom => Vector2::new(i, last_row),
            Self::Left => Vector2::new(0, i),
            Self::Right => Vector2::new(last_col, i),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Find the first qualifying streak along `edge`, if any.
///
/// Returns the streak's cells in scan order, all at the streak's elevation.
pub fn find_edge_source(
    options: &MapOptions,
    topology: &Grid<i64>,
    edge: Edge,
) -> MapResult<Option<Vec<Vector3>>> {
    let river_bed = |end: usize, streak: usize, elevation: i64| -> Vec<Vector3> {
        (end - streak..end)
            .map(|i| Vector3::at_layer(edge.cell(options, i), elevation))
            .collect()
    };

    let len = edge.len(options);
    let mut last_elevation = -1;
    let mut streak = 0;

    for i in 0..len {
        let elevation = *topology.get_at(edge.cell(options, i))?;
        if elevation <= MAX_ELEVATION && elevation == last_elevation {
            streak += 1;
        } else {
            if streak >= MIN_STREAK {
                return Ok(Some(river_bed(i, streak, last_elevation)));
            }
            streak = 1;
        }
        last_elevation = elevation;
    }

    // A streak running up to the final cell.
    if streak >= MIN_STREAK {
        return Ok(Some(river_bed(len, streak, last_elevation)));
    }

    Ok(None)
}

/// Locate water sources on the map border.
///
/// Edges are scanned top, bottom, left, right. The first edge with a source
/// seeds the result and the next one is appended to it, at which point the
/// scan stops. Fails with [`MapError::SourceNotFound`] if no edge qualifies.
pub fn find_sources(options: &MapOptions, topology: &Grid<i64>) -> MapResult<Vec<Vector3>> {
    let mut so_far: Option<Vec<Vector3>> = None;

    for edge in Edge::ALL {
        let Some(sources) = find_edge_source(options, topology, edge)? else {
            debug!(%edge, "no river bed on edge");
            continue;
        };
        debug!(%edge, cells = sources.len(), elevation = sources[0].z, "river bed found");

        if let Some(found) = so_far.as_mut() {
            found.extend(sources);
            break;
        }
        so_far = Some(sources);
    }

    so_far.ok_or(MapError::SourceNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A single-row map, so top and bottom are the same cells.
    fn row(cells: &[i64]) -> (MapOptions, Grid<i64>) {
        let opts = MapOptions::new(cells.len(), 1, 0);
        (opts, Grid::from_vec(cells.len(), 1, cells.to_vec()).unwrap())
    }

    /// A single-column map, so left and right are the same cells.
    fn column(cells: &[i64]) -> (MapOptions, Grid<i64>) {
        let opts = MapOptions::new(1, cells.len(), 0);
        (opts, Grid::from_vec(1, cells.len(), cells.to_vec()).unwrap())
    }

    #[test]
    fn edge_cells_follow_scan_direction() {
        let opts = MapOptions::new(5, 3, 0);
        assert_eq!(Edge::Top.cell(&opts, 2), Vector2::new(2, 0));
        assert_eq!(Edge::Bottom.cell(&opts, 2), Vector2::new(2, 2));
        assert_eq!(Edge::Left.cell(&opts, 1), Vector2::new(0, 1));
        assert_eq!(Edge::Right.cell(&opts, 1), Vector2::new(4, 1));
        assert_eq!(Edge::Top.len(&opts), 5);
        assert_eq!(Edge::Right.len(&opts), 3);
    }

    #[test]
    fn leading_streak_detected() {
        let (opts, grid) = row(&[2, 2, 2, 2, 2, 5, 5, 5]);
        let found = find_edge_source(&opts, &grid, Edge::Top).unwrap().unwrap();
        let expected: Vec<_> = (0..5).map(|x| Vector3::new(x, 0, 2)).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn leading_streak_detected_on_column() {
        let (opts, grid) = column(&[2, 2, 2, 2, 2, 5, 5, 5]);
        let found = find_edge_source(&opts, &grid, Edge::Left).unwrap().unwrap();
        let expected: Vec<_> = (0..5).map(|y| Vector3::new(0, y, 2)).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn streak_of_four_is_too_short() {
        let (opts, grid) = row(&[2, 2, 2, 2, 5, 5, 5, 5, 5]);
        assert_eq!(find_edge_source(&opts, &grid, Edge::Top).unwrap(), None);
    }

    #[test]
    fn streak_at_end_of_edge_detected() {
        let (opts, grid) = row(&[9, 7, 1, 1, 1, 1, 1, 1]);
        let found = find_edge_source(&opts, &grid, Edge::Top).unwrap().unwrap();
        let expected: Vec<_> = (2..8).map(|x| Vector3::new(x, 0, 1)).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn whole_edge_streak_detected() {
        let (opts, grid) = row(&[3; 6]);
        let found = find_edge_source(&opts, &grid, Edge::Top).unwrap().unwrap();
        assert_eq!(found.len(), 6);
        assert!(found.iter().all(|v| v.z == 3));
    }

    #[test]
    fn first_streak_wins_over_longer_one() {
        let (opts, grid) = row(&[2, 2, 2, 2, 2, 9, 1, 1, 1, 1, 1, 1, 1, 1]);
        let found = find_edge_source(&opts, &grid, Edge::Top).unwrap().unwrap();
        assert_eq!(found.len(), 5);
        assert_eq!(found[0], Vector3::new(0, 0, 2));
    }

    #[test]
    fn plateau_above_ceiling_ignored() {
        let (opts, grid) = row(&[4, 4, 4, 4, 4, 4, 4]);
        assert_eq!(find_edge_source(&opts, &grid, Edge::Top).unwrap(), None);
    }

    #[test]
    fn change_of_level_breaks_streak() {
        let (opts, grid) = row(&[1, 1, 1, 2, 2, 2, 1, 1]);
        assert_eq!(find_edge_source(&opts, &grid, Edge::Top).unwrap(), None);
    }

    #[test]
    fn no_low_border_fails() {
        let grid: Grid<i64> = Grid::filled(8, 8, 5);
        let opts = MapOptions::new(8, 8, 0);
        assert!(matches!(find_sources(&opts, &grid), Err(MapError::SourceNotFound)));
    }

    #[test]
    fn only_first_two_edges_combined() {
        let grid: Grid<i64> = Grid::filled(8, 8, 1);
        let opts = MapOptions::new(8, 8, 0);
        let found = find_sources(&opts, &grid).unwrap();
        assert_eq!(found.len(), 16);
        assert!(found[..8].iter().all(|v| v.y() == 0));
        assert!(found[8..].iter().all(|v| v.y() == 7));
    }

    #[test]
    fn single_successful_edge_returned_alone() {
        let mut grid: Grid<i64> = Grid::filled(8, 8, 10);
        for y in 1..7 {
            grid.set(0, y, 2).unwrap();
        }
        let opts = MapOptions::new(8, 8, 0);
        let found = find_sources(&opts, &grid).unwrap();
        let expected: Vec<_> = (1..7).map(|y| Vector3::new(0, y, 2)).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn later_edges_fill_in_when_earlier_ones_fail() {
        let mut grid: Grid<i64> = Grid::filled(8, 8, 10);
        for y in 0..5 {
            grid.set(0, y, 1).unwrap();
        }
        for y in 2..8 {
            grid.set(7, y, 2).unwrap();
        }
        let opts = MapOptions::new(8, 8, 0);
        let found = find_sources(&opts, &grid).unwrap();

        let mut expected: Vec<_> = (0..5).map(|y| Vector3::new(0, y, 1)).collect();
        expected.extend((2..8).map(|y| Vector3::new(7, y, 2)));
        assert_eq!(found, expected);
    }

    #[test]
    fn single_row_map_counts_top_and_bottom() {
        let (opts, grid) = row(&[2, 2, 2, 2, 2, 5, 5]);
        let found = find_sources(&opts, &grid).unwrap();
        assert_eq!(found.len(), 10);
        assert_eq!(found[..5], found[5..]);
    }
}
