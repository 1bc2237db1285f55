//! Graph-based bucket fill
//!
//! The bucket tool builds a throwaway adjacency graph over the grid, runs a
//! breadth-first search from the clicked cell across same-valued neighbors,
//! and hands the resulting cell set back for application. The graph is an
//! arena: one node per cell in a flat vector, neighbor links stored as
//! indices.

use std::collections::VecDeque;
use tilebrush_core::TileMap;

/// Outcome of one fill invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillResult {
    /// How many cells the fill wrote to
    pub applied_cells: usize,
}

#[derive(Debug)]
struct FillNode {
    col: u32,
    row: u32,
    value: i32,
    /// Left, right, up, down; `None` past the grid edge
    neighbors: [Option<usize>; 4],
    visited: bool,
}

/// Throwaway adjacency graph over the full grid, rebuilt for every fill.
///
/// The graph spans the whole map rather than the visible window: the
/// source editor's fill bounds always covered the full grid, and a fill
/// that stops at the screen edge would surprise the user.
#[derive(Debug)]
pub struct FillGraph {
    nodes: Vec<FillNode>,
    num_cols: u32,
    num_rows: u32,
}

impl FillGraph {
    /// Build one node per cell with 4-directional in-bounds links.
    /// No diagonals, no wraparound at the edges.
    pub fn build(map: &TileMap) -> Self {
        let num_cols = map.num_cols();
        let num_rows = map.num_rows();
        let tiles = map.tiles();

        let mut nodes = Vec::with_capacity(tiles.len());
        for row in 0..num_rows {
            for col in 0..num_cols {
                let index = (row * num_cols + col) as usize;

                let mut neighbors = [None; 4];
                if col > 0 {
                    neighbors[0] = Some(index - 1);
                }
                if col + 1 < num_cols {
                    neighbors[1] = Some(index + 1);
                }
                if row > 0 {
                    neighbors[2] = Some(index - num_cols as usize);
                }
                if row + 1 < num_rows {
                    neighbors[3] = Some(index + num_cols as usize);
                }

                nodes.push(FillNode {
                    col,
                    row,
                    value: tiles[index].value(),
                    neighbors,
                    visited: false,
                });
            }
        }

        Self {
            nodes,
            num_cols,
            num_rows,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Arena index of the node at a coordinate; `None` outside the grid.
    /// A stale seed (e.g. a click raced against a scroll) lands here and
    /// silently does nothing downstream.
    pub fn find_node(&self, col: u32, row: u32) -> Option<usize> {
        if col >= self.num_cols || row >= self.num_rows {
            return None;
        }
        Some((row * self.num_cols + col) as usize)
    }

    /// Breadth-first search from the seed across cells sharing the seed's
    /// current value. Returns the connected cells in visitation order.
    ///
    /// Neighbors are marked visited before their value is tested, match or
    /// not, so no cell is ever examined twice - a mismatched neighbor is
    /// never reconsidered from another direction. That bounds the whole
    /// traversal to one pass over the region.
    pub fn flood(&mut self, seed_col: u32, seed_row: u32) -> Vec<(u32, u32)> {
        let mut fill_set = Vec::new();

        let Some(seed) = self.find_node(seed_col, seed_row) else {
            return fill_set;
        };
        let target_value = self.nodes[seed].value;

        self.nodes[seed].visited = true;
        let mut queue = VecDeque::new();
        queue.push_back(seed);

        while let Some(index) = queue.pop_front() {
            fill_set.push((self.nodes[index].col, self.nodes[index].row));

            let neighbors = self.nodes[index].neighbors;
            for neighbor in neighbors.into_iter().flatten() {
                if !self.nodes[neighbor].visited {
                    self.nodes[neighbor].visited = true;
                    if self.nodes[neighbor].value == target_value {
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        fill_set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 5x5 zeros with a plus of 3s centered at (2,2)
    fn plus_map() -> TileMap {
        let mut map = TileMap::new(0, 0, 5, 5, 16);
        for &(col, row) in &[(2, 1), (1, 2), (2, 2), (3, 2), (2, 3)] {
            map.set_value(col, row, 3);
        }
        map
    }

    #[test]
    fn test_graph_links_are_in_bounds() {
        let map = TileMap::new(0, 0, 3, 2, 16);
        let graph = FillGraph::build(&map);
        assert_eq!(graph.len(), 6);

        // Corner node has exactly two links
        let corner = graph.find_node(0, 0).unwrap();
        let links = graph.nodes[corner]
            .neighbors
            .iter()
            .filter(|n| n.is_some())
            .count();
        assert_eq!(links, 2);

        // Middle of the top row has three
        let edge = graph.find_node(1, 0).unwrap();
        let links = graph.nodes[edge]
            .neighbors
            .iter()
            .filter(|n| n.is_some())
            .count();
        assert_eq!(links, 3);
    }

    #[test]
    fn test_flood_connected_component_only() {
        let map = plus_map();
        let mut graph = FillGraph::build(&map);
        let fill_set = graph.flood(2, 2);

        assert_eq!(fill_set.len(), 5);
        for &(col, row) in &fill_set {
            assert_eq!(map.value(col, row), Some(3));
        }
    }

    #[test]
    fn test_flood_starts_from_seed_in_bfs_order() {
        let mut map = TileMap::new(0, 0, 4, 1, 16);
        for col in 0..4 {
            map.set_value(col, 0, 7);
        }

        let mut graph = FillGraph::build(&map);
        let fill_set = graph.flood(1, 0);

        // Seed first, then neighbors in ring order
        assert_eq!(fill_set[0], (1, 0));
        assert_eq!(fill_set.len(), 4);
        assert!(fill_set.contains(&(0, 0)) && fill_set.contains(&(3, 0)));
    }

    #[test]
    fn test_flood_seed_outside_grid_is_empty() {
        let map = plus_map();
        let mut graph = FillGraph::build(&map);
        assert!(graph.flood(5, 2).is_empty());
        assert!(graph.flood(2, 9).is_empty());
    }

    #[test]
    fn test_flood_does_not_cross_values() {
        // Two regions of 0 separated by a column of 1s
        let mut map = TileMap::new(0, 0, 5, 3, 16);
        for row in 0..3 {
            map.set_value(2, row, 1);
        }

        let mut graph = FillGraph::build(&map);
        let fill_set = graph.flood(0, 0);

        assert_eq!(fill_set.len(), 6);
        assert!(fill_set.iter().all(|&(col, _)| col < 2));
    }
}
