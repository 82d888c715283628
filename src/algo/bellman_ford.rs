/*!
# Bellman-Ford

Single-source shortest paths for arbitrary (also negative) weights. The algorithm sweeps
all edges leaving reached vertices up to `n - 1` times and stops as soon as a sweep
changes nothing. If all `n - 1` sweeps changed something, one more verification sweep
decides whether a negative cycle is reachable from the source.

```
use wgraphs::{prelude::*, algo::*};

let g = AdjArray::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
let weight = |e: Edge| match (e.0, e.1) {
    (0, 1) => 4,
    (1, 2) => -3,
    _ => 2,
};

let sssp = BellmanFord::new(&g, weight).run(0);
assert!(!sssp.has_negative_cycle());
assert_eq!(sssp.distance(2), Cost::Finite(1));
```
*/

use super::*;

/// Bellman-Ford search with negative-cycle detection
pub struct BellmanFord<'a, G, W, F, Vis = ()> {
    graph: &'a G,
    weight: F,
    visitor: Vis,
    _weight: PhantomData<fn() -> W>,
}

impl<'a, G, W, F> BellmanFord<'a, G, W, F>
where
    G: VertexListGraph + IncidenceGraph + PropertyGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
{
    pub fn new(graph: &'a G, weight: F) -> Self {
        Self {
            graph,
            weight,
            visitor: (),
            _weight: PhantomData,
        }
    }
}

impl<'a, G, W, F, Vis> BellmanFord<'a, G, W, F, Vis>
where
    G: VertexListGraph + IncidenceGraph + PropertyGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
    Vis: Visitor<G::Vertex, G::Edge>,
{
    pub fn with_visitor<V2>(self, visitor: V2) -> BellmanFord<'a, G, W, F, V2>
    where
        V2: Visitor<G::Vertex, G::Edge>,
    {
        BellmanFord {
            graph: self.graph,
            weight: self.weight,
            visitor,
            _weight: PhantomData,
        }
    }

    /// Computes distances from `source`.
    ///
    /// If a negative cycle is reachable, the result reports it and refuses to build paths.
    pub fn run(&mut self, source: G::Vertex) -> SingleSourceShortestPaths<G::Vertex, G::Edge, W> {
        let (state, has_negative_cycle) = self.search(source);
        state.into_result(self.graph, has_negative_cycle)
    }

    /// Computes a shortest path from `source` to `destination`.
    /// Returns `None` if `destination` is unreachable or a negative cycle is reachable.
    pub fn path(
        &mut self,
        source: G::Vertex,
        destination: G::Vertex,
    ) -> Option<Path<G::Vertex, G::Edge, W>> {
        self.path_until(source, |v| v == destination)
    }

    /// Computes a shortest path to a closest vertex satisfying `condition`.
    ///
    /// Bellman-Ford has no settling order, so all distances are computed first. Among
    /// equally close matches, the first one reached wins.
    pub fn path_until(
        &mut self,
        source: G::Vertex,
        condition: impl FnMut(G::Vertex) -> bool,
    ) -> Option<Path<G::Vertex, G::Edge, W>> {
        let (state, has_negative_cycle) = self.search(source);
        if has_negative_cycle {
            return None;
        }
        let target = state.cheapest_reached(condition)?;
        state.path_to(self.graph, target).ok()
    }

    /// Relaxes every edge leaving a reached vertex once; returns *true* if some distance changed
    fn sweep(&mut self, state: &mut SearchState<G, W>) -> bool {
        let graph = self.graph;
        let mut changed = false;
        for u in graph.vertices() {
            let d_u = state.distance(u);
            if d_u.is_infinite() {
                continue;
            }
            for e in graph.out_edges(u) {
                let Some(v) = graph.destination(e) else {
                    continue;
                };
                self.visitor.examine_edge(e);

                let undiscovered = state.distance(v).is_infinite();
                if state.relax(e, v, d_u + (self.weight)(e)) {
                    if undiscovered {
                        self.visitor.discover_vertex(v);
                    }
                    self.visitor.edge_relaxed(e);
                    changed = true;
                } else {
                    self.visitor.edge_not_relaxed(e);
                }
            }
        }
        changed
    }

    /// Returns an edge that can still be relaxed, i.e. witnesses a negative cycle
    fn find_violation(&mut self, state: &SearchState<G, W>) -> Option<G::Edge> {
        let graph = self.graph;
        for u in graph.vertices() {
            let d_u = state.distance(u);
            if d_u.is_infinite() {
                continue;
            }
            for e in graph.out_edges(u) {
                let Some(v) = graph.destination(e) else {
                    continue;
                };
                if d_u + (self.weight)(e) < state.distance(v) {
                    return Some(e);
                }
            }
        }
        None
    }

    #[tracing::instrument(level = "debug", skip_all, fields(source = ?source))]
    fn search(&mut self, source: G::Vertex) -> (SearchState<G, W>, bool) {
        let mut state = SearchState::new(self.graph, source);
        if !self.graph.contains_vertex(source) {
            debug!("source is not a vertex");
            return (state, false);
        }
        self.visitor.discover_vertex(source);

        let max_passes = self.graph.number_of_vertices().saturating_sub(1);
        let mut converged = false;
        for pass in 1..=max_passes {
            let changed = self.sweep(&mut state);
            self.visitor.sweep_finished(pass);
            if !changed {
                debug!(passes = pass, "converged");
                converged = true;
                break;
            }
        }

        if !converged {
            if let Some(e) = self.find_violation(&state) {
                warn!(edge = ?e, "negative cycle reachable from source");
                self.visitor.negative_cycle(e);
                return (state, true);
            }
        }

        (state, false)
    }
}
