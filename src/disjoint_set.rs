use std::mem;

/// Union-find over a fixed range of indices, with path compression and
/// union by height.
pub struct DisjointSet {
    /// `-1` marks a root, anything else is the index of the parent.
    parent: Vec<i32>,
    /// Height estimate per tree, only meaningful while the index is a root.
    height: Vec<u32>,
}

impl DisjointSet {
    /// Every element starts out as the root of its own singleton component.
    pub fn new(len: usize) -> DisjointSet {
        DisjointSet {
            parent: vec![-1; len],
            height: vec![0; len],
        }
    }

    /// Root of the component containing `i`. Every node walked on the way
    /// is re-pointed directly at the root, so repeated lookups stay cheap.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] >= 0 {
            root = self.parent[root] as usize;
        }

        let mut cur = i;
        while cur != root {
            cur = mem::replace(&mut self.parent[cur], root as i32) as usize;
        }
        root
    }

    /// Merge the components rooted at `i` and `j`. Callers must pass two
    /// distinct roots, as returned by [`find`](Self::find).
    pub fn union(&mut self, i: usize, j: usize) {
        debug_assert_ne!(i, j);
        debug_assert!(self.parent[i] < 0 && self.parent[j] < 0);

        if self.height[i] < self.height[j] {
            self.parent[i] = j as i32;
        } else if self.height[i] > self.height[j] {
            self.parent[j] = i as i32;
        } else {
            self.height[i] += 1;
            self.parent[j] = i as i32;
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
