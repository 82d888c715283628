/*!
# Graph Representations

Owned directed graphs over the vertices `0..n` plus borrowed graph views.

A representation is [`DirectedGraph`] (out-neighborhoods only) or [`DirectedGraphIn`]
(out- and in-neighborhoods) parameterized by a [`Neighborhood`] storage:

- [`AdjArray`] / [`AdjArrayIn`] store neighbors in vectors,
- [`SparseAdjArray`] stores neighbors inline in small vectors,
- [`AdjMatrix`] stores one bit row per vertex.

All of them hand out [`DenseMap`](crate::property::DenseMap) vertex maps and
[`HashPropertyMap`](crate::property::HashPropertyMap) edge maps.

The [`views`] submodule provides graphs computed on top of another graph.
*/

use crate::{ops::*, *};

mod directed;
mod neighborhood;
pub mod views;

pub use directed::*;
pub use neighborhood::*;

/// Storage of the neighbors of a single vertex
pub trait Neighborhood: Clone {
    /// Creates an empty neighborhood in a graph with `n` nodes
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Adds a neighbor without checking whether it exists already
    fn add_neighbor(&mut self, u: Node);

    /// Tries to remove a neighbor from the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_remove_neighbor(&mut self, u: Node) -> bool;
}

pub(crate) mod macros {
    /// Implements the capability and property traits shared by all owned representations
    macro_rules! impl_common_graph_ops {
        ($struct:ident<$first_field:ident : $first_generic:ident $(, $field:ident : $generic:ident)*> => $nbs:ident) => {
            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> GraphBase for $struct<$first_generic, $($generic),*> {
                type Vertex = Node;
                type Edge = Edge;
            }

            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> VertexListGraph for $struct<$first_generic, $($generic),*> {
                fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
                    0..self.number_of_nodes()
                }

                fn number_of_vertices(&self) -> usize {
                    self.$nbs.len()
                }
            }

            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> GraphEdgeOrder for $struct<$first_generic, $($generic),*> {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> IncidenceGraph for $struct<$first_generic, $($generic),*> {
                fn contains_vertex(&self, u: Node) -> bool {
                    u < self.number_of_nodes()
                }

                fn out_edges(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
                    self.$nbs
                        .get(u as usize)
                        .into_iter()
                        .flat_map(|nbs| nbs.neighbors())
                        .map(move |v| Edge(u, v))
                }

                fn source(&self, e: Edge) -> Option<Node> {
                    self.contains_edge(e).then_some(e.0)
                }

                fn destination(&self, e: Edge) -> Option<Node> {
                    self.contains_edge(e).then_some(e.1)
                }

                fn out_degree(&self, u: Node) -> usize {
                    self.$nbs
                        .get(u as usize)
                        .map_or(0, |nbs| nbs.num_of_neighbors() as usize)
                }
            }

            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> PropertyGraph for $struct<$first_generic, $($generic),*> {
                type VertexMap<T: Clone> = crate::property::DenseMap<T>;
                type EdgeMap<T: Clone> = crate::property::HashPropertyMap<Edge, T>;

                fn vertex_map<T: Clone>(&self, default: T) -> Self::VertexMap<T> {
                    crate::property::DenseMap::new(self.$nbs.len(), default)
                }

                fn edge_map<T: Clone>(&self, default: T) -> Self::EdgeMap<T> {
                    crate::property::HashPropertyMap::new(default)
                }
            }

            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> GraphNew for $struct<$first_generic, $($generic),*> {
                fn new(n: NumNodes) -> Self {
                    Self {
                        num_edges: 0,
                        $first_field: vec![$first_generic::new(n); n as usize],
                        $(
                            $field: vec![$generic::new(n); n as usize],
                        )*
                    }
                }
            }

            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> $struct<$first_generic, $($generic),*> {
                /// Returns the number of nodes as `NumNodes`
                pub fn number_of_nodes(&self) -> NumNodes {
                    self.$nbs.len() as NumNodes
                }

                /// Returns *true* if `e` is an edge of the graph
                fn contains_edge(&self, e: Edge) -> bool {
                    e.1 < self.number_of_nodes()
                        && self
                            .$nbs
                            .get(e.0 as usize)
                            .is_some_and(|nbs| nbs.has_neighbor(e.1))
                }
            }
        };
    }

    pub(super) use impl_common_graph_ops;
}
