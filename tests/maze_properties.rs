use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;

use mazegen::gen::kruskal;
use mazegen::{Direction, Grid};

fn generated(n: usize, seed: u64) -> Grid {
    let mut grid = Grid::new(n).unwrap();
    kruskal::on(&mut grid, &mut StdRng::seed_from_u64(seed));
    grid
}

/// Interior walls that are down, counting each shared wall once.
fn removed_walls(grid: &Grid) -> usize {
    let n = grid.size();
    let mut count = 0;
    for cell in 0..grid.cell_count() {
        if cell % n < n - 1 && grid.edge(cell, Direction::Right).removed() {
            count += 1;
        }
        if cell / n < n - 1 && grid.edge(cell, Direction::Down).removed() {
            count += 1;
        }
    }
    count
}

/// Directions from `cell` that lead to a real neighboring cell.
fn interior_directions(n: usize, cell: usize) -> Vec<Direction> {
    let (row, col) = (cell / n, cell % n);
    let mut dirs = Vec::with_capacity(4);
    if col < n - 1 {
        dirs.push(Direction::Right);
    }
    if row < n - 1 {
        dirs.push(Direction::Down);
    }
    if col > 0 {
        dirs.push(Direction::Left);
    }
    if row > 0 {
        dirs.push(Direction::Up);
    }
    dirs
}

#[test]
fn passages_form_a_spanning_tree() {
    for (n, seed) in [(1, 1), (2, 2), (3, 3), (5, 4), (8, 5), (13, 6)] {
        let grid = generated(n, seed);
        assert_eq!(removed_walls(&grid), n * n - 1, "size {n}");

        // BFS over passages must reach every cell exactly once; reaching an
        // already-visited cell through a second route would mean a cycle.
        let mut visited = vec![false; n * n];
        let mut queue = VecDeque::from([(0usize, usize::MAX)]);
        visited[0] = true;
        let mut reached = 1;
        while let Some((cell, from)) = queue.pop_front() {
            for dir in interior_directions(n, cell) {
                if !grid.edge(cell, dir).removed() {
                    continue;
                }
                let next = grid.neighbor(cell, dir);
                if next == from {
                    continue;
                }
                assert!(!visited[next], "cycle through cell {next} in size {n}");
                visited[next] = true;
                reached += 1;
                queue.push_back((next, cell));
            }
        }
        assert_eq!(reached, n * n, "disconnected maze of size {n}");
    }
}

#[test]
fn both_endpoints_agree_on_every_wall() {
    let grid = generated(7, 99);
    let n = grid.size();
    for cell in 0..grid.cell_count() {
        for dir in interior_directions(n, cell) {
            let mirror = grid.edge(grid.neighbor(cell, dir), dir.opposite());
            assert_eq!(grid.edge(cell, dir), mirror);
        }
    }
}

#[test]
fn boundary_walls_are_never_removed() {
    let grid = generated(5, 11);
    let n = grid.size();
    for cell in 0..grid.cell_count() {
        let (row, col) = (cell / n, cell % n);
        if row == 0 {
            assert!(!grid.edge(cell, Direction::Up).removed());
        }
        if row == n - 1 {
            assert!(!grid.edge(cell, Direction::Down).removed());
        }
        if col == 0 {
            assert!(!grid.edge(cell, Direction::Left).removed());
        }
        if col == n - 1 {
            assert!(!grid.edge(cell, Direction::Right).removed());
        }
    }
}

#[test]
fn single_cell_maze_renders_start_and_end() {
    let grid = generated(1, 0);
    assert_eq!(grid.to_string(), "    -----\nStart    End\n    -----\n");
}
