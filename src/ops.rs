/*!
# Graph Capabilities

Algorithms in this crate never name a concrete graph type. Instead they state the smallest
set of capabilities they need as trait bounds:

- [`GraphBase`] declares the vertex and edge descriptor types,
- [`VertexListGraph`] enumerates all vertices,
- [`IncidenceGraph`] enumerates outgoing edges and resolves edge endpoints,
- [`BidirectionalGraph`] additionally enumerates incoming edges,
- [`PropertyGraph`] hands out fresh per-run property maps.

Endpoint lookups return `Option`: a computed or filtered graph may hand out an edge whose
endpoint "does not currently exist". Algorithms skip such edges instead of failing.

The editing traits ([`GraphNew`], [`GraphEdgeEditing`], [`GraphFromScratch`]) are only
implemented by the owned representations in [`repr`](crate::repr).
*/

use std::{fmt::Debug, hash::Hash};

use crate::{
    property::{Property, PropertyMap},
    *,
};

/// Declares the descriptor types of a graph.
///
/// Descriptors are opaque handles: equal iff they denote the same element.
pub trait GraphBase {
    type Vertex: Copy + Eq + Hash + Debug;
    type Edge: Copy + Eq + Hash + Debug;
}

/// Graphs that can enumerate all of their vertices
pub trait VertexListGraph: GraphBase {
    /// Returns an iterator over V
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> usize;

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_vertices() == 0
    }
}

/// Graphs that can enumerate the outgoing edges of a vertex
pub trait IncidenceGraph: GraphBase {
    /// Returns *true* if `u` is currently a vertex of the graph.
    /// Searches started at any other descriptor reach nothing.
    fn contains_vertex(&self, u: Self::Vertex) -> bool;

    /// Returns an iterator over all edges leaving `u` (none if `u` is not a vertex)
    fn out_edges(&self, u: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_;

    /// Returns the vertex `e` leaves, or `None` if it currently does not exist
    fn source(&self, e: Self::Edge) -> Option<Self::Vertex>;

    /// Returns the vertex `e` enters, or `None` if it currently does not exist
    fn destination(&self, e: Self::Edge) -> Option<Self::Vertex>;

    /// Returns both endpoints if both lookups succeed
    fn endpoints(&self, e: Self::Edge) -> Option<(Self::Vertex, Self::Vertex)> {
        Some((self.source(e)?, self.destination(e)?))
    }

    /// Returns the number of edges leaving `u`
    fn out_degree(&self, u: Self::Vertex) -> usize {
        self.out_edges(u).count()
    }
}

/// Graphs that can additionally enumerate the incoming edges of a vertex
pub trait BidirectionalGraph: IncidenceGraph {
    /// Returns an iterator over all edges entering `u`
    fn in_edges(&self, u: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_;

    /// Returns the number of edges entering `u`
    fn in_degree(&self, u: Self::Vertex) -> usize {
        self.in_edges(u).count()
    }
}

/// Graphs that produce per-run property maps for their descriptors.
///
/// The graph picks the storage (dense vector, hash map, ...); every call returns an
/// independent map in which every key initially reads as the supplied default.
pub trait PropertyGraph: GraphBase {
    type VertexMap<T: Clone>: PropertyMap<Self::Vertex, T>;
    type EdgeMap<T: Clone>: PropertyMap<Self::Edge, T>;

    /// Returns a fresh vertex map in which every vertex reads as `default`
    fn vertex_map<T: Clone>(&self, default: T) -> Self::VertexMap<T>;

    /// Returns a fresh edge map in which every edge reads as `default`
    fn edge_map<T: Clone>(&self, default: T) -> Self::EdgeMap<T>;

    /// Returns a fresh vertex map for the property `P`
    fn vertex_property<P: Property>(&self) -> Self::VertexMap<P::Value> {
        self.vertex_map(P::default_value())
    }

    /// Returns a fresh edge map for the property `P`
    fn edge_property<P: Property>(&self) -> Self::EdgeMap<P::Value> {
        self.edge_map(P::default_value())
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge *(u,v)* to the graph.
    /// ** Panics if `u >= n || v >= n` or the edge was already present **
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(self.try_add_edge(u, v), "edge ({u},{v}) already present");
    }

    /// Adds the edge `(u, v)` to the graph.
    /// Returns *true* exactly if the edge was not present previously.
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }

    /// Removes the directed edge *(u,v)* from the graph.
    /// ** Panics if the edge is not present or u, v >= n **
    fn remove_edge(&mut self, u: Node, v: Node) {
        assert!(self.try_remove_edge(u, v), "edge ({u},{v}) not present");
    }

    /// Removes the directed edge *(u,v)* from the graph.
    /// If the edge was removed, returns *true* and *false* otherwise.
    /// ** Panics if u, v >= n **
    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool;
}

/// Creating a graph from scratch from a number of nodes and a set of edges
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and a collection of edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}
