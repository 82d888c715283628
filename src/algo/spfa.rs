/*!
# SPFA

The *Shortest Path Faster Algorithm* is Bellman-Ford driven by a FIFO work list: only
vertices whose distance just improved are scanned again. It accepts negative weights and
usually touches far fewer edges than full sweeps.

Without a negative cycle, no vertex enters the queue more than `n` times; a vertex
entering it once more proves a reachable negative cycle.
*/

use std::collections::VecDeque;

use super::*;

/// Queue-based Bellman-Ford
pub struct Spfa<'a, G, W, F, Vis = ()> {
    graph: &'a G,
    weight: F,
    visitor: Vis,
    _weight: PhantomData<fn() -> W>,
}

impl<'a, G, W, F> Spfa<'a, G, W, F>
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

impl<'a, G, W, F, Vis> Spfa<'a, G, W, F, Vis>
where
    G: VertexListGraph + IncidenceGraph + PropertyGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
    Vis: Visitor<G::Vertex, G::Edge>,
{
    pub fn with_visitor<V2>(self, visitor: V2) -> Spfa<'a, G, W, F, V2>
    where
        V2: Visitor<G::Vertex, G::Edge>,
    {
        Spfa {
            graph: self.graph,
            weight: self.weight,
            visitor,
            _weight: PhantomData,
        }
    }

    pub fn run(&mut self, source: G::Vertex) -> SingleSourceShortestPaths<G::Vertex, G::Edge, W> {
        let (state, has_negative_cycle) = self.search(source);
        state.into_result(self.graph, has_negative_cycle)
    }

    pub fn path(
        &mut self,
        source: G::Vertex,
        destination: G::Vertex,
    ) -> Option<Path<G::Vertex, G::Edge, W>> {
        self.path_until(source, |v| v == destination)
    }

    /// Same semantics as [`BellmanFord::path_until`]
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

    #[tracing::instrument(level = "debug", skip_all, fields(source = ?source))]
    fn search(&mut self, source: G::Vertex) -> (SearchState<G, W>, bool) {
        let graph = self.graph;
        let n = graph.number_of_vertices();

        let mut state = SearchState::new(graph, source);
        if !graph.contains_vertex(source) {
            debug!("source is not a vertex");
            return (state, false);
        }
        let mut in_queue = graph.vertex_map(false);
        let mut enqueued = graph.vertex_property::<EnqueueCount>();
        let mut queue = VecDeque::new();

        queue.push_back(source);
        in_queue.set(source, true);
        enqueued.set(source, 1);
        self.visitor.discover_vertex(source);

        let mut scans = 0usize;
        while let Some(u) = queue.pop_front() {
            in_queue.set(u, false);
            scans += 1;
            self.visitor.examine_vertex(u);

            let d_u = state.distance(u);
            for e in graph.out_edges(u) {
                let Some(v) = graph.destination(e) else {
                    continue;
                };
                self.visitor.examine_edge(e);

                let undiscovered = state.distance(v).is_infinite();
                if !state.relax(e, v, d_u + (self.weight)(e)) {
                    self.visitor.edge_not_relaxed(e);
                    continue;
                }
                if undiscovered {
                    self.visitor.discover_vertex(v);
                }
                self.visitor.edge_relaxed(e);

                if *in_queue.get(v) {
                    continue;
                }
                let count = enqueued.get_mut(v);
                *count += 1;
                if *count > n {
                    warn!(edge = ?e, "negative cycle reachable from source");
                    self.visitor.negative_cycle(e);
                    return (state, true);
                }
                queue.push_back(v);
                in_queue.set(v, true);
            }

            self.visitor.finish_vertex(u);
        }

        debug!(scans, "queue exhausted");
        (state, false)
    }
}
