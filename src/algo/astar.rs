/*!
# A*

Goal-directed variant of [`Dijkstra`](super::Dijkstra): a vertex `v` is prioritized by
`g(v) + h(v)`, where `g` is its tentative distance and `h` a caller-supplied estimate of
the remaining distance. With `h = 0` this is exactly Dijkstra.

If `h` never overestimates (is *admissible*), the first settled goal is optimal. A vertex
whose distance improves after it was expanded is expanded again, so admissible but
inconsistent heuristics are handled correctly.
*/

use super::*;

/// A* search towards one target or a set of targets
pub struct AStar<'a, G, W, F, H, Vis = (), Q = DefaultQueue<<G as GraphBase>::Vertex, W>>
where
    G: IncidenceGraph + PropertyGraph,
{
    graph: &'a G,
    weight: F,
    heuristic: H,
    visitor: Vis,
    _queue: PhantomData<fn() -> (Q, W)>,
}

impl<'a, G, W, F, H> AStar<'a, G, W, F, H>
where
    G: IncidenceGraph + PropertyGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
    H: FnMut(G::Vertex) -> W,
{
    pub fn new(graph: &'a G, weight: F, heuristic: H) -> Self {
        Self {
            graph,
            weight,
            heuristic,
            visitor: (),
            _queue: PhantomData,
        }
    }
}

impl<'a, G, W, F, H, Vis, Q> AStar<'a, G, W, F, H, Vis, Q>
where
    G: IncidenceGraph + PropertyGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
    H: FnMut(G::Vertex) -> W,
    Vis: Visitor<G::Vertex, G::Edge>,
    Q: PriorityQueue<PriorityItem<G::Vertex, W>>,
{
    pub fn with_visitor<V2>(self, visitor: V2) -> AStar<'a, G, W, F, H, V2, Q>
    where
        V2: Visitor<G::Vertex, G::Edge>,
    {
        AStar {
            graph: self.graph,
            weight: self.weight,
            heuristic: self.heuristic,
            visitor,
            _queue: PhantomData,
        }
    }

    /// Replaces the heuristic
    pub fn with_heuristic<H2>(self, heuristic: H2) -> AStar<'a, G, W, F, H2, Vis, Q>
    where
        H2: FnMut(G::Vertex) -> W,
    {
        AStar {
            graph: self.graph,
            weight: self.weight,
            heuristic,
            visitor: self.visitor,
            _queue: PhantomData,
        }
    }

    pub fn with_queue<Q2>(self) -> AStar<'a, G, W, F, H, Vis, Q2>
    where
        Q2: PriorityQueue<PriorityItem<G::Vertex, W>>,
    {
        AStar {
            graph: self.graph,
            weight: self.weight,
            heuristic: self.heuristic,
            visitor: self.visitor,
            _queue: PhantomData,
        }
    }

    /// Expands the whole reachable part of the graph.
    ///
    /// The distances are exact for any heuristic since every improvement is re-expanded.
    #[tracing::instrument(level = "debug", skip_all, fields(source = ?source))]
    pub fn run(&mut self, source: G::Vertex) -> SingleSourceShortestPaths<G::Vertex, G::Edge, W> {
        let (state, _) = self.search(source, |_| false);
        state.into_result(self.graph, false)
    }

    /// Computes a path from `source` to `destination`; optimal if the heuristic is admissible
    #[tracing::instrument(level = "debug", skip_all, fields(source = ?source, destination = ?destination))]
    pub fn path(
        &mut self,
        source: G::Vertex,
        destination: G::Vertex,
    ) -> Option<Path<G::Vertex, G::Edge, W>> {
        let (state, target) = self.search(source, |v| v == destination);
        state.path_to(self.graph, target?).ok()
    }

    /// Computes a path to the first expanded vertex satisfying `condition`
    #[tracing::instrument(level = "debug", skip_all, fields(source = ?source))]
    pub fn path_until(
        &mut self,
        source: G::Vertex,
        condition: impl FnMut(G::Vertex) -> bool,
    ) -> Option<Path<G::Vertex, G::Edge, W>> {
        let (state, target) = self.search(source, condition);
        state.path_to(self.graph, target?).ok()
    }

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
        let mut queue = Q::default();
        let mut expansions = 0usize;

        queue.enqueue(PriorityItem::new(source, Cost::zero() + (self.heuristic)(source)));
        self.visitor.discover_vertex(source);

        while let Some(PriorityItem { vertex: u, cost }) = queue.dequeue() {
            let g_u = state.distance(u);
            if cost != g_u + (self.heuristic)(u) {
                continue;
            }
            expansions += 1;
            self.visitor.examine_vertex(u);

            if stop(u) {
                debug!(expansions, "goal reached");
                return (state, Some(u));
            }

            for e in graph.out_edges(u) {
                let Some(v) = graph.destination(e) else {
                    continue;
                };
                self.visitor.examine_edge(e);

                let candidate = g_u + (self.weight)(e);
                let undiscovered = state.distance(v).is_infinite();
                if state.relax(e, v, candidate) {
                    if undiscovered {
                        self.visitor.discover_vertex(v);
                    }
                    self.visitor.edge_relaxed(e);
                    queue.enqueue(PriorityItem::new(v, candidate + (self.heuristic)(v)));
                } else {
                    self.visitor.edge_not_relaxed(e);
                }
            }

            self.visitor.finish_vertex(u);
        }

        debug!(expansions, "frontier exhausted");
        (state, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visitor::{Event, EventRecorder};

    /// `w x h` grid with unit edges to the right and downwards
    fn grid(w: Node, h: Node) -> AdjArray {
        let mut g = AdjArray::new(w * h);
        for y in 0..h {
            for x in 0..w {
                let u = y * w + x;
                if x + 1 < w {
                    g.add_edge(u, u + 1);
                }
                if y + 1 < h {
                    g.add_edge(u, u + w);
                }
            }
        }
        g
    }

    #[test]
    fn zero_heuristic_matches_dijkstra() {
        let g = grid(4, 4);
        let a = AStar::new(&g, |_| 1u32, |_| 0).run(0);
        let d = Dijkstra::new(&g, |_| 1u32).run(0);
        for v in g.vertices() {
            assert_eq!(a.distance(v), d.distance(v));
        }
    }

    #[test]
    fn manhattan_heuristic_expands_less() {
        let (w, h) = (6, 6);
        let g = grid(w, h);
        // top right corner
        let target = w - 1;
        let manhattan = |v: Node| (w - 1 - v % w) + v / w;

        let mut informed = EventRecorder::default();
        let p = AStar::new(&g, |_| 1u32, manhattan)
            .with_visitor(&mut informed)
            .path(0, target)
            .unwrap();
        assert_eq!(p.cost(), 5);
        assert_eq!(p.len(), 5);

        let mut blind = EventRecorder::default();
        let q = AStar::new(&g, |_| 1u32, |_| 0)
            .with_visitor(&mut blind)
            .path(0, target)
            .unwrap();
        assert_eq!(q.cost(), 5);

        let expanded = |r: &EventRecorder<Node, Edge>| {
            r.events()
                .iter()
                .filter(|e| matches!(e, Event::ExamineVertex(_)))
                .count()
        };
        assert!(expanded(&informed) < expanded(&blind));
    }

    #[test]
    fn inconsistent_heuristic_still_optimal() {
        // h(1) = 4 is admissible but violates h(1) <= w(1, 2) + h(2), so 2 is
        // expanded via 0 -> 2 first and again after 0 -> 1 -> 2 improves it
        let g = AdjArray::from_edges(4, [(0, 1), (1, 2), (0, 2), (2, 3)]);
        let w = |e: Edge| match (e.0, e.1) {
            (0, 2) | (2, 3) => 3u32,
            _ => 1,
        };
        let h = |v: Node| if v == 1 { 4u32 } else { 0 };

        let mut recorder = EventRecorder::default();
        let p = AStar::new(&g, w, h)
            .with_visitor(&mut recorder)
            .path(0, 3)
            .unwrap();
        assert_eq!(p.vertices(), &[0, 1, 2, 3]);
        assert_eq!(p.cost(), 5);

        let expansions_of_2 = recorder
            .events()
            .iter()
            .filter(|e| matches!(e, Event::ExamineVertex(2)))
            .count();
        assert_eq!(expansions_of_2, 2);
    }

    #[test]
    fn heuristic_can_be_swapped() {
        let g = grid(3, 3);
        let mut search = AStar::new(&g, |_| 2u32, |_| 0).with_heuristic(|v: Node| 2 * (2 - v % 3));
        assert_eq!(search.path(0, 2).unwrap().cost(), 4);
    }

    #[test]
    fn unreachable_target() {
        let g = AdjArray::from_edges(3, [(0, 1)]);
        assert!(AStar::new(&g, |_| 1u32, |_| 0).path(0, 2).is_none());
        assert!(AStar::new(&g, |_| 1u32, |_| 0).path(2, 2).unwrap().is_trivial());
    }
}
