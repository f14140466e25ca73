//! Ring-connectivity bookkeeping for polygon validation.

use std::collections::{HashMap, HashSet};

/// A bipartite graph over ring indices and ring-touch points.
///
/// Every single-point contact between two rings adds one vertex for the
/// point (shared across pairs touching at the same position) and one
/// edge from it to each ring. A cycle in this graph means the touch
/// points pinch the polygon's interior into more than one connected
/// piece; an acyclic graph leaves it connected.
///
/// Cycle detection is union-find over small integer ids, so adversarial
/// inputs cannot overflow a recursion stack.
#[derive(Debug)]
pub(crate) struct ConnectivityGraph {
    parent: Vec<usize>,
    points: HashMap<(u64, u64), usize>,
    edges: HashSet<(usize, usize)>,
    cyclic: bool,
}

fn position_key(p: (f64, f64)) -> (u64, u64) {
    // Collapse -0.0 onto 0.0 so equal positions share one vertex.
    let norm = |v: f64| if v == 0.0 { 0.0 } else { v };
    (norm(p.0).to_bits(), norm(p.1).to_bits())
}

impl ConnectivityGraph {
    /// A graph with one vertex per ring and no touch points yet.
    pub(crate) fn new(num_rings: usize) -> Self {
        Self {
            parent: (0..num_rings).collect(),
            points: HashMap::new(),
            edges: HashSet::new(),
            cyclic: false,
        }
    }

    /// Records that rings `a` and `b` touch at `point`.
    pub(crate) fn add_touch(&mut self, a: usize, b: usize, point: (f64, f64)) {
        let vertex = self.point_vertex(point);
        for ring in [a, b] {
            if self.edges.insert((ring, vertex)) {
                self.link(ring, vertex);
            }
        }
    }

    /// True iff any recorded edge closed a cycle.
    pub(crate) fn has_cycle(&self) -> bool {
        self.cyclic
    }

    fn point_vertex(&mut self, point: (f64, f64)) -> usize {
        let next = self.parent.len();
        match self.points.entry(position_key(point)) {
            std::collections::hash_map::Entry::Occupied(entry) => *entry.get(),
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(next);
                self.parent.push(next);
                next
            }
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn link(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            self.cyclic = true;
        } else {
            self.parent[ra] = rb;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn chain_of_touches_is_acyclic() {
        let mut graph = ConnectivityGraph::new(3);
        graph.add_touch(0, 1, (1.0, 0.0));
        graph.add_touch(1, 2, (2.0, 0.0));
        assert!(!graph.has_cycle());
    }

    #[test]
    fn closing_the_chain_is_a_cycle() {
        let mut graph = ConnectivityGraph::new(3);
        graph.add_touch(0, 1, (1.0, 0.0));
        graph.add_touch(1, 2, (2.0, 0.0));
        graph.add_touch(2, 0, (3.0, 0.0));
        assert!(graph.has_cycle());
    }

    #[test]
    fn three_rings_at_one_point_stay_acyclic() {
        // All pairs meet at the same position: the shared vertex makes a
        // star, not a cycle.
        let mut graph = ConnectivityGraph::new(3);
        graph.add_touch(0, 1, (1.0, 1.0));
        graph.add_touch(0, 2, (1.0, 1.0));
        graph.add_touch(1, 2, (1.0, 1.0));
        assert!(!graph.has_cycle());
    }

    #[test]
    fn two_rings_touching_twice_is_a_cycle() {
        let mut graph = ConnectivityGraph::new(2);
        graph.add_touch(0, 1, (0.0, 0.0));
        graph.add_touch(0, 1, (5.0, 0.0));
        assert!(graph.has_cycle());
    }

    #[test]
    fn negative_zero_shares_the_vertex_of_zero() {
        let mut graph = ConnectivityGraph::new(2);
        graph.add_touch(0, 1, (0.0, 0.0));
        graph.add_touch(0, 1, (-0.0, 0.0));
        assert!(!graph.has_cycle());
    }
}
