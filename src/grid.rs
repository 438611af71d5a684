//! A rectangular grid of cells read from a character map. This is the
//! [`Graph`] used by the command line tool and the tests.
//!
//! Map characters:
//!
//! | Char | Meaning |
//! |---|---|
//! | `.` | walkable cell |
//! | `#` | blocked cell |
//! | `S` | start cell (walkable) |
//! | `T` | target cell (walkable) |

use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Connectivity {
    /// Cardinal moves only.
    Four,
    /// Cardinal and diagonal moves.
    #[default]
    Eight,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DistanceMetric {
    Manhattan,
    Chebyshev,
    Euclidean,
    /// Square-grid metric weighting cardinal steps 10 and diagonal steps 14.
    #[default]
    Octile,
}

impl DistanceMetric {
    pub fn distance(&self, a: Cell, b: Cell) -> f64 {
        let dx = a.x.abs_diff(b.x);
        let dy = a.y.abs_diff(b.y);
        match self {
            DistanceMetric::Manhattan => (dx + dy) as f64,
            DistanceMetric::Chebyshev => dx.max(dy) as f64,
            DistanceMetric::Euclidean => ((dx * dx + dy * dy) as f64).sqrt(),
            DistanceMetric::Octile => {
                let (lo, hi) = (dx.min(dy), dx.max(dy));
                (14 * lo + 10 * (hi - lo)) as f64
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("the map has no cells")]
    Empty,
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown map character {ch:?} at row {row}, column {column}")]
    UnknownCharacter { ch: char, row: usize, column: usize },
    #[error("the map contains more than one {marker:?} marker")]
    DuplicateMarker { marker: char },
}

// N, E, S, W, then NE, SE, SW, NW.
const CARDINAL: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
const DIAGONAL: [(isize, isize); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

#[derive(Debug, Clone)]
pub struct GridMap {
    width: usize,
    height: usize,
    walkable: Vec<bool>,
    start: Option<Cell>,
    target: Option<Cell>,
    connectivity: Connectivity,
    metric: DistanceMetric,
}

impl GridMap {
    /// An all-walkable grid.
    pub fn open(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            walkable: vec![true; width * height],
            start: None,
            target: None,
            connectivity: Connectivity::default(),
            metric: DistanceMetric::default(),
        }
    }

    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell marked `S`, if any.
    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    /// The cell marked `T`, if any.
    pub fn target(&self) -> Option<Cell> {
        self.target
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    pub fn set_walkable(&mut self, cell: Cell, walkable: bool) {
        if let Some(i) = self.index(cell) {
            self.walkable[i] = walkable;
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.x < self.width && cell.y < self.height {
            Some(cell.y * self.width + cell.x)
        } else {
            None
        }
    }

    fn offset(&self, cell: Cell, (dx, dy): (isize, isize)) -> Option<Cell> {
        let x = cell.x.checked_add_signed(dx)?;
        let y = cell.y.checked_add_signed(dy)?;
        let next = Cell::new(x, y);
        self.index(next).map(|_| next)
    }

    /// Render the map with `path` cells drawn as `*`. Start and target keep
    /// their markers.
    pub fn render_path(&self, path: &[Cell]) -> String {
        let on_path: HashSet<Cell> = path.iter().copied().collect();
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = Cell::new(x, y);
                let ch = if Some(cell) == self.start {
                    'S'
                } else if Some(cell) == self.target {
                    'T'
                } else if on_path.contains(&cell) {
                    '*'
                } else if self.is_walkable(cell) {
                    '.'
                } else {
                    '#'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl FromStr for GridMap {
    type Err = MapError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut map = GridMap::open(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(MapError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = Cell::new(x, y);
                match ch {
                    '.' => {}
                    '#' => map.set_walkable(cell, false),
                    'S' => {
                        if map.start.replace(cell).is_some() {
                            return Err(MapError::DuplicateMarker { marker: 'S' });
                        }
                    }
                    'T' => {
                        if map.target.replace(cell).is_some() {
                            return Err(MapError::DuplicateMarker { marker: 'T' });
                        }
                    }
                    _ => {
                        return Err(MapError::UnknownCharacter {
                            ch,
                            row: y,
                            column: x,
                        })
                    }
                }
            }
        }
        Ok(map)
    }
}

impl Graph for GridMap {
    type Node = Cell;

    fn contains(&self, node: Cell) -> bool {
        self.index(node).is_some()
    }

    fn is_walkable(&self, node: Cell) -> bool {
        self.index(node).map_or(false, |i| self.walkable[i])
    }

    fn neighbours(&self, node: Cell, buf: &mut Vec<Cell>) {
        buf.extend(CARDINAL.iter().filter_map(|&d| self.offset(node, d)));
        if self.connectivity == Connectivity::Eight {
            buf.extend(DIAGONAL.iter().filter_map(|&d| self.offset(node, d)));
        }
    }

    fn distance(&self, from: Cell, to: Cell) -> f64 {
        self.metric.distance(from, to)
    }

    fn node_count(&self) -> usize {
        self.width * self.height
    }
}
