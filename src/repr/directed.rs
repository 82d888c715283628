/*!
# Directed Graph Representations

- [`DirectedGraph`] stores **only outgoing neighborhoods**; incoming edges are derived by
  scanning all vertices (costly).
- [`DirectedGraphIn`] stores **both outgoing and incoming neighborhoods**, enabling cheap
  `in_edges`, which the bidirectional search benefits from.
*/

use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// A directed graph storing only **outgoing neighborhoods**.
#[derive(Clone, Debug)]
pub struct DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    out_nbs: Vec<OutNbs>,
    num_edges: NumEdges,
}

/// A directed graph storing **both outgoing and incoming neighborhoods**.
#[derive(Clone, Debug)]
pub struct DirectedGraphIn<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    out_nbs: Vec<OutNbs>,
    in_nbs: Vec<InNbs>,
    num_edges: NumEdges,
}

/// Directed graph using adjacency arrays (`Vec<Node>`).
pub type AdjArray = DirectedGraph<ArrNeighborhood>;

/// Directed graph using adjacency arrays for both outgoing and incoming neighborhoods.
pub type AdjArrayIn = DirectedGraphIn<ArrNeighborhood, ArrNeighborhood>;

/// Directed graph using sparse adjacency arrays (`SmallVec<[Node; N]>`).
pub type SparseAdjArray = DirectedGraph<SparseNeighborhood>;

/// Directed graph using a bit matrix; `in_edges` scans one matrix column.
pub type AdjMatrix = DirectedGraph<BitNeighborhood>;

impl_common_graph_ops!(DirectedGraph<out_nbs : OutNbs> => out_nbs);
impl_common_graph_ops!(DirectedGraphIn<out_nbs : OutNbs, in_nbs: InNbs> => out_nbs);

impl<OutNbs: Neighborhood> DirectedGraph<OutNbs> {
    /// Returns *true* if the edge (u,v) exists in the graph
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.out_nbs
            .get(u as usize)
            .is_some_and(|nbs| nbs.has_neighbor(v))
    }
}

impl<OutNbs: Neighborhood, InNbs: Neighborhood> DirectedGraphIn<OutNbs, InNbs> {
    /// Returns *true* if the edge (u,v) exists in the graph
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.out_nbs
            .get(u as usize)
            .is_some_and(|nbs| nbs.has_neighbor(v))
    }
}

impl<OutNbs> BidirectionalGraph for DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    fn in_edges(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        // Should be avoided as this is very costly
        (0..self.number_of_nodes())
            .filter(move |&v| self.has_edge(v, u))
            .map(move |v| Edge(v, u))
    }
}

impl<OutNbs, InNbs> BidirectionalGraph for DirectedGraphIn<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn in_edges(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.in_nbs
            .get(u as usize)
            .into_iter()
            .flat_map(|nbs| nbs.neighbors())
            .map(move |v| Edge(v, u))
    }

    fn in_degree(&self, u: Node) -> usize {
        self.in_nbs
            .get(u as usize)
            .map_or(0, |nbs| nbs.num_of_neighbors() as usize)
    }
}

impl<OutNbs> GraphEdgeEditing for DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        if self.has_edge(u, v) {
            false
        } else {
            self.out_nbs[u as usize].add_neighbor(v);
            self.num_edges += 1;
            true
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.out_nbs[u as usize].try_remove_neighbor(v) {
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

impl<OutNbs, InNbs> GraphEdgeEditing for DirectedGraphIn<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.has_edge(u, v) {
            false
        } else {
            self.out_nbs[u as usize].add_neighbor(v);
            self.in_nbs[v as usize].add_neighbor(u);
            self.num_edges += 1;
            true
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.out_nbs[u as usize].try_remove_neighbor(v) {
            let removed = self.in_nbs[v as usize].try_remove_neighbor(u);
            debug_assert!(removed);
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_adj_array,
    AdjArray,
    (
        GraphNew,
        IncidenceGraph,
        BidirectionalGraph,
        PropertyGraph,
        GraphEdgeEditing
    )
);

test_graph_ops!(
    test_adj_array_in,
    AdjArrayIn,
    (
        GraphNew,
        IncidenceGraph,
        BidirectionalGraph,
        PropertyGraph,
        GraphEdgeEditing
    )
);

test_graph_ops!(
    test_sparse_adj_array,
    SparseAdjArray,
    (
        GraphNew,
        IncidenceGraph,
        BidirectionalGraph,
        PropertyGraph,
        GraphEdgeEditing
    )
);

test_graph_ops!(
    test_adj_matrix,
    AdjMatrix,
    (
        GraphNew,
        IncidenceGraph,
        BidirectionalGraph,
        PropertyGraph,
        GraphEdgeEditing
    )
);
