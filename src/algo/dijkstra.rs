/*!
# Dijkstra

Single-source shortest paths for **non-negative** weights. The frontier is a
[`PriorityQueue`] without decrease-key: an improved vertex is enqueued again and stale
entries are discarded when dequeued (lazy deletion). A vertex is final once it leaves the
queue, which allows early termination in [`Dijkstra::path`] and [`Dijkstra::path_until`].

```
use wgraphs::{prelude::*, algo::*};

let g = AdjArray::from_edges(4, [(0, 1), (1, 2), (0, 2), (2, 3)]);
let weight = |e: Edge| if e == Edge(0, 2) { 5u32 } else { 1 };

let sssp = Dijkstra::new(&g, weight).run(0);
assert_eq!(sssp.distance(2), Cost::Finite(2));
assert_eq!(sssp.distance(3), Cost::Finite(3));
```
*/

use super::*;

/// Configurable Dijkstra search over any [`IncidenceGraph`] + [`PropertyGraph`].
///
/// # Type parameters
/// - `F`: edge weight function
/// - `Vis`: [`Visitor`] notified of search events (default: none)
/// - `Q`: frontier [`PriorityQueue`] (default: binary heap)
pub struct Dijkstra<'a, G, W, F, Vis = (), Q = DefaultQueue<<G as GraphBase>::Vertex, W>>
where
    G: IncidenceGraph + PropertyGraph,
{
    graph: &'a G,
    weight: F,
    visitor: Vis,
    _queue: PhantomData<fn() -> (Q, W)>,
}

impl<'a, G, W, F> Dijkstra<'a, G, W, F>
where
    G: IncidenceGraph + PropertyGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
{
    /// Configures a search on `graph` with edge weights `weight`
    pub fn new(graph: &'a G, weight: F) -> Self {
        Self {
            graph,
            weight,
            visitor: (),
            _queue: PhantomData,
        }
    }
}

impl<'a, G, W, F, Vis, Q> Dijkstra<'a, G, W, F, Vis, Q>
where
    G: IncidenceGraph + PropertyGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
    Vis: Visitor<G::Vertex, G::Edge>,
    Q: PriorityQueue<PriorityItem<G::Vertex, W>>,
{
    /// Replaces the visitor
    pub fn with_visitor<V2>(self, visitor: V2) -> Dijkstra<'a, G, W, F, V2, Q>
    where
        V2: Visitor<G::Vertex, G::Edge>,
    {
        Dijkstra {
            graph: self.graph,
            weight: self.weight,
            visitor,
            _queue: PhantomData,
        }
    }

    /// Replaces the frontier queue type
    pub fn with_queue<Q2>(self) -> Dijkstra<'a, G, W, F, Vis, Q2>
    where
        Q2: PriorityQueue<PriorityItem<G::Vertex, W>>,
    {
        Dijkstra {
            graph: self.graph,
            weight: self.weight,
            visitor: self.visitor,
            _queue: PhantomData,
        }
    }

    /// Returns the visitor, e.g. to inspect it after a run
    pub fn visitor(&self) -> &Vis {
        &self.visitor
    }

    /// Computes distances from `source` to every reachable vertex
    #[tracing::instrument(level = "debug", skip_all, fields(source = ?source))]
    pub fn run(&mut self, source: G::Vertex) -> SingleSourceShortestPaths<G::Vertex, G::Edge, W> {
        let (state, _) = self.search(source, |_| false);
        state.into_result(self.graph, false)
    }

    /// Computes a shortest path from `source` to `destination`, stopping as soon as
    /// `destination` is settled
    #[tracing::instrument(level = "debug", skip_all, fields(source = ?source, destination = ?destination))]
    pub fn path(
        &mut self,
        source: G::Vertex,
        destination: G::Vertex,
    ) -> Option<Path<G::Vertex, G::Edge, W>> {
        let (state, target) = self.search(source, |v| v == destination);
        state.path_to(self.graph, target?).ok()
    }

    /// Computes a shortest path from `source` to the first settled vertex satisfying
    /// `condition`, i.e. to a closest such vertex.
    ///
    /// The condition is evaluated at every settled vertex, so it may also act as a
    /// cancellation point (e.g. by checking a deadline).
    #[tracing::instrument(level = "debug", skip_all, fields(source = ?source))]
    pub fn path_until(
        &mut self,
        source: G::Vertex,
        condition: impl FnMut(G::Vertex) -> bool,
    ) -> Option<Path<G::Vertex, G::Edge, W>> {
        let (state, target) = self.search(source, condition);
        state.path_to(self.graph, target?).ok()
    }

    /// Settles vertices in order of distance until `stop` holds for a settled vertex or
    /// the frontier runs empty. Returns the state and the vertex that stopped the search.
    fn search(
        &mut self,
        source: G::Vertex,
        mut stop: impl FnMut(G::Vertex) -> bool,
    ) -> (SearchState<G, W>, Option<G::Vertex>) {
        let graph = self.graph;
        let mut state = SearchState::new(graph, source);
        if !graph.contains_vertex(source) {
            debug!("source is not a vertex");
            return (state, None);
        }
        let mut color = graph.vertex_property::<Color>();
        let mut queue = Q::default();
        let mut settled = 0usize;

        queue.enqueue(PriorityItem::new(source, Cost::zero()));
        self.visitor.discover_vertex(source);

        while let Some(PriorityItem { vertex: u, cost }) = queue.dequeue() {
            if *color.get(u) == VertexColor::Black || cost != state.distance(u) {
                continue;
            }
            color.set(u, VertexColor::Black);
            settled += 1;
            self.visitor.examine_vertex(u);

            if stop(u) {
                debug!(settled, "stopped early");
                return (state, Some(u));
            }

            for e in graph.out_edges(u) {
                let Some(v) = graph.destination(e) else {
                    continue;
                };
                self.visitor.examine_edge(e);

                let candidate = cost + (self.weight)(e);
                let undiscovered = state.distance(v).is_infinite();
                if state.relax(e, v, candidate) {
                    if undiscovered {
                        self.visitor.discover_vertex(v);
                    }
                    self.visitor.edge_relaxed(e);
                    queue.enqueue(PriorityItem::new(v, candidate));
                } else {
                    self.visitor.edge_not_relaxed(e);
                }
            }

            self.visitor.finish_vertex(u);
        }

        debug!(settled, reached = state.number_of_reached(), "frontier exhausted");
        (state, None)
    }
}
