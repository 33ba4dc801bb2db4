use log::debug;
use rand::Rng;

use crate::disjoint_set::DisjointSet;
use crate::grid::{Direction, Grid};

/// Carve a perfect maze into `grid` with randomized Kruskal's algorithm.
///
/// Instead of shuffling an explicit edge list, this rejection-samples a
/// `(cell, direction)` slot until it lands on a wall nobody has settled yet.
/// A wall whose endpoints sit in different union-find components is knocked
/// down; one that would close a cycle is rejected and never drawn again.
/// Generation is done once `n*n - 1` walls are down, the edge count of a
/// spanning tree over the cells.
pub fn on<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let cells = grid.cell_count();
    let mut sets = DisjointSet::new(cells);
    let mut remaining = cells - 1;

    while remaining > 0 {
        let (cell, dir) = loop {
            let cell = rng.gen_range(0..cells);
            let dir = Direction::ALL[rng.gen_range(0..4)];
            if !grid.edge(cell, dir).settled() {
                break (cell, dir);
            }
        };

        let other = grid.neighbor(cell, dir);
        let u = sets.find(cell);
        let v = sets.find(other);
        if u != v {
            sets.union(u, v);
            remaining -= 1;
            grid.remove_wall(cell, dir);
            debug!("removed wall between {cell} and {other}, {remaining} left");
        } else {
            // Already connected, the wall stays up for good.
            grid.reject_edge(cell, dir);
        }
    }
}
