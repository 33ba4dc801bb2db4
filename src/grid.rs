use std::fmt::{Display, Formatter};

use crate::MazeError;

/// Index of a wall record in [`Grid::edges`]. Id 0 is the shared boundary
/// sentinel that every outward-facing slot points at.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
struct EdgeId(usize);

const BOUNDARY: EdgeId = EdgeId(0);

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Direction {
    Right = 0,
    Down = 1,
    Left = 2,
    Up = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// The same wall seen from the cell on the other side.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }
}

/// One wall between two adjacent cells.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct Edge {
    removed: bool,
    rejected: bool,
}

impl Edge {
    /// The wall has been knocked down, making a passage.
    pub fn removed(&self) -> bool {
        self.removed
    }

    /// The wall was considered and must stay up (its endpoints were already
    /// connected).
    pub fn rejected(&self) -> bool {
        self.rejected
    }

    /// Settled edges are out of the generator's draw pool for good.
    pub fn settled(&self) -> bool {
        self.removed || self.rejected
    }
}

/// An N x N grid of cells and the walls between them.
///
/// Cells are indexed row-major: cell `(row, col)` is `row * size + col`.
/// Each interior wall is one record in `edges`, shared by the two cells it
/// separates, so a change made through one side is seen from the other.
pub struct Grid {
    size: usize,
    edges: Vec<Edge>,
    /// Four edge slots per cell, indexed by `Direction as usize`.
    slots: Vec<[EdgeId; 4]>,
}

impl Grid {
    pub fn new(size: usize) -> Result<Grid, MazeError> {
        if size == 0 {
            return Err(MazeError::InvalidSize(size));
        }

        let cells = size * size;
        let mut edges = Vec::with_capacity(2 * size * (size - 1) + 1);
        // The boundary sentinel is never a passage and never eligible.
        edges.push(Edge {
            removed: false,
            rejected: true,
        });

        let mut slots = vec![[BOUNDARY; 4]; cells];
        for i in 0..size {
            for j in 0..size {
                let p = i * size + j;
                if j < size - 1 {
                    edges.push(Edge::default());
                    slots[p][Direction::Right as usize] = EdgeId(edges.len() - 1);
                }
                if i < size - 1 {
                    edges.push(Edge::default());
                    slots[p][Direction::Down as usize] = EdgeId(edges.len() - 1);
                }
                // The wall to the left is the previous cell's right wall,
                // the wall above is the cell-above's bottom wall.
                if j > 0 {
                    slots[p][Direction::Left as usize] = slots[p - 1][Direction::Right as usize];
                }
                if i > 0 {
                    slots[p][Direction::Up as usize] = slots[p - size][Direction::Down as usize];
                }
            }
        }

        Ok(Grid { size, edges, slots })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    pub fn edge(&self, cell: usize, dir: Direction) -> Edge {
        self.edges[self.slots[cell][dir as usize].0]
    }

    /// Index of the cell on the other side of the wall at `(cell, dir)`.
    /// Only meaningful when that slot holds an interior wall.
    pub fn neighbor(&self, cell: usize, dir: Direction) -> usize {
        match dir {
            Direction::Right => cell + 1,
            Direction::Left => cell - 1,
            Direction::Up => cell - self.size,
            Direction::Down => cell + self.size,
        }
    }

    /// Knock down the wall at `(cell, dir)`, visible from both endpoints.
    pub fn remove_wall(&mut self, cell: usize, dir: Direction) {
        let id = self.slots[cell][dir as usize];
        debug_assert_ne!(id, BOUNDARY);
        self.edges[id.0].removed = true;
    }

    /// Rule the wall at `(cell, dir)` out of future consideration.
    pub fn reject_edge(&mut self, cell: usize, dir: Direction) {
        let id = self.slots[cell][dir as usize];
        debug_assert_ne!(id, BOUNDARY);
        self.edges[id.0].rejected = true;
    }
}

impl Display for Grid {
    /// Renders the walls still standing. Before generation every interior
    /// wall is up; after, the removed edges form the maze passages. The
    /// entrance replaces the left border of the first row and the exit
    /// replaces the last cell's right wall.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.size {
            f.write_str("    -")?;
            for j in 0..self.size {
                let p = i * self.size + j;
                if !self.edge(p, Direction::Up).removed() {
                    f.write_str("----")?;
                } else if j == self.size - 1 {
                    // Keep the corner so the right border stays closed.
                    f.write_str("   -")?;
                } else {
                    f.write_str("    ")?;
                }
            }
            f.write_str("\n")?;

            if i == 0 {
                f.write_str("Start")?;
            } else {
                f.write_str("    |")?;
            }
            for j in 0..self.size {
                let p = i * self.size + j;
                if i == self.size - 1 && j == self.size - 1 {
                    f.write_str("    End")?;
                } else if !self.edge(p, Direction::Right).removed() {
                    f.write_str("   |")?;
                } else {
                    f.write_str("    ")?;
                }
            }
            f.write_str("\n")?;
        }

        f.write_str("    -")?;
        for _ in 0..self.size {
            f.write_str("----")?;
        }
        f.write_str("\n")
    }
}
