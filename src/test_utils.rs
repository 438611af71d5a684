use crate::graph::Graph;
use crate::grid::{Cell, GridMap};
use std::collections::{HashMap, HashSet};

pub const CENTRE_BLOCKED_MAP: &str = "
S..
.#.
..T
";

pub const FIVE_BY_FIVE_MAP: &str = "
S....
.##..
...#.
.#...
...#T
";

pub const WALL_MAP: &str = "
S.#..
..#..
..#.T
.....
";

pub const ENCLOSED_MAP: &str = "
S......
...###.
...#T#.
...###.
";

/// Relax every edge until nothing changes, counting each hop with `cost`.
fn bellman_ford(
    map: &GridMap,
    start: Cell,
    mut cost: impl FnMut(Cell, Cell) -> f64,
) -> HashMap<Cell, f64> {
    let mut dist = HashMap::from([(start, 0.)]);
    let mut buf = vec![];
    for _ in 0..map.node_count() {
        let mut changed = false;
        for from in map.cells() {
            let Some(&base) = dist.get(&from) else {
                continue;
            };
            buf.clear();
            map.neighbours(from, &mut buf);
            for &to in buf.iter().filter(|&&to| map.is_walkable(to)) {
                let candidate = base + cost(from, to);
                if dist.get(&to).map_or(true, |&known| candidate < known) {
                    dist.insert(to, candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

/// True shortest-path cost by exhaustive relaxation.
pub fn shortest_cost(map: &GridMap, start: Cell, target: Cell) -> Option<f64> {
    bellman_ford(map, start, |from, to| map.distance(from, to))
        .get(&target)
        .copied()
}

/// Minimum number of edges between `start` and `target`.
pub fn fewest_edges(map: &GridMap, start: Cell, target: Cell) -> Option<usize> {
    bellman_ford(map, start, |_, _| 1.)
        .get(&target)
        .map(|&edges| edges as usize)
}

/// Check that a target-first path is a connected walk from `start` to
/// `target` over walkable cells with no repeated cell.
pub fn assert_valid_path(map: &GridMap, start: Cell, target: Cell, path: &[Cell]) {
    if start == target {
        assert!(path.is_empty());
        return;
    }
    assert_eq!(path.first(), Some(&target));
    let mut walk = path.to_vec();
    walk.push(start);
    let mut buf = vec![];
    for pair in walk.windows(2) {
        buf.clear();
        map.neighbours(pair[0], &mut buf);
        assert!(buf.contains(&pair[1]), "{} and {} are not adjacent", pair[0], pair[1]);
        buf.clear();
        map.neighbours(pair[1], &mut buf);
        assert!(buf.contains(&pair[0]), "{} and {} are not adjacent", pair[1], pair[0]);
    }
    assert!(path.iter().all(|&cell| map.is_walkable(cell)));
    let unique: HashSet<_> = walk.iter().collect();
    assert_eq!(unique.len(), walk.len(), "path repeats a cell");
}
