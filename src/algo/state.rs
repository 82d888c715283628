use fxhash::FxHashMap;

use crate::{
    cost::{Cost, Weight},
    ops::*,
    path::{reconstruct, Path, PathError},
    property::{Distance, PredecessorEdge, PropertyMap},
    result::SingleSourceShortestPaths,
};

/// Tentative distances and predecessor edges of one single-source run.
///
/// Besides the two property maps, the state remembers every vertex that ever received a
/// finite distance, so that snapshots do not require enumerating the whole graph.
pub(crate) struct SearchState<G: PropertyGraph, W: Clone> {
    source: G::Vertex,
    distances: G::VertexMap<Cost<W>>,
    predecessors: G::VertexMap<Option<G::Edge>>,
    reached: Vec<G::Vertex>,
}

impl<G, W> SearchState<G, W>
where
    G: IncidenceGraph + PropertyGraph,
    W: Weight,
{
    /// Starts at `source`; if `source` is not a vertex of `graph`, nothing is reached
    pub fn new(graph: &G, source: G::Vertex) -> Self {
        let mut distances = graph.vertex_property::<Distance<W>>();
        let mut reached = Vec::new();
        if graph.contains_vertex(source) {
            distances.set(source, Cost::zero());
            reached.push(source);
        }
        Self {
            source,
            distances,
            predecessors: graph.vertex_property::<PredecessorEdge<G::Edge>>(),
            reached,
        }
    }

    #[inline]
    pub fn distance(&self, v: G::Vertex) -> Cost<W> {
        *self.distances.get(v)
    }

    #[inline]
    pub fn predecessor_edge(&self, v: G::Vertex) -> Option<G::Edge> {
        *self.predecessors.get(v)
    }

    /// Returns the number of vertices with a finite distance
    pub fn number_of_reached(&self) -> usize {
        self.reached.len()
    }

    /// Lowers the distance of `v` to `candidate` via `e` if this is a strict improvement
    #[inline]
    pub fn relax(&mut self, e: G::Edge, v: G::Vertex, candidate: Cost<W>) -> bool {
        let current = self.distance(v);
        if candidate < current {
            if current.is_infinite() {
                self.reached.push(v);
            }
            self.distances.set(v, candidate);
            self.predecessors.set(v, Some(e));
            true
        } else {
            false
        }
    }

    /// Returns the reached vertex of smallest distance satisfying `condition`.
    /// Ties are broken by the order in which vertices were reached.
    pub fn cheapest_reached(&self, mut condition: impl FnMut(G::Vertex) -> bool) -> Option<G::Vertex> {
        let mut best: Option<(G::Vertex, Cost<W>)> = None;
        for &v in &self.reached {
            if !condition(v) {
                continue;
            }
            let d = self.distance(v);
            if best.map_or(true, |(_, b)| d < b) {
                best = Some((v, d));
            }
        }
        best.map(|(v, _)| v)
    }

    /// Rebuilds the path to `destination` from the predecessor edges
    pub fn path_to(
        &self,
        graph: &G,
        destination: G::Vertex,
    ) -> Result<Path<G::Vertex, G::Edge, W>, PathError> {
        reconstruct(
            self.source,
            destination,
            self.distance(destination),
            false,
            self.reached.len(),
            |v| {
                let e = self.predecessor_edge(v)?;
                Some((e, graph.source(e)?))
            },
        )
    }

    /// Freezes the state into an immutable result
    pub fn into_result(
        self,
        graph: &G,
        has_negative_cycle: bool,
    ) -> SingleSourceShortestPaths<G::Vertex, G::Edge, W> {
        let mut distances =
            FxHashMap::with_capacity_and_hasher(self.reached.len(), Default::default());
        let mut predecessors =
            FxHashMap::with_capacity_and_hasher(self.reached.len(), Default::default());

        for &v in &self.reached {
            if let Cost::Finite(d) = self.distance(v) {
                distances.insert(v, d);
            }
            if let Some(e) = self.predecessor_edge(v) {
                if let Some(u) = graph.source(e) {
                    predecessors.insert(v, (e, u));
                }
            }
        }

        SingleSourceShortestPaths::new(self.source, distances, predecessors, has_negative_cycle)
    }
}
