/*!
# Bidirectional Dijkstra

Single-pair shortest paths for non-negative weights. One Dijkstra frontier grows forward from
the source, a second one grows backward from the destination over the [`Reversed`] graph.
Both frontiers alternate on one thread.

Whenever an edge connects the two searches, the cost of the combined path is compared
against the best meeting cost `mu` seen so far; the first meeting is not necessarily
optimal. The search stops once the smallest keys of both frontiers add up to at least `mu`
(no later meeting can be cheaper) or one frontier runs empty.
*/

use super::*;

/// One direction of the search
struct Frontier<G: PropertyGraph, W: Clone> {
    state: SearchState<G, W>,
    settled: G::VertexMap<bool>,
    queue: DefaultQueue<G::Vertex, W>,
}

impl<G, W> Frontier<G, W>
where
    G: IncidenceGraph + PropertyGraph,
    W: Weight,
{
    fn new(graph: &G, root: G::Vertex) -> Self {
        let mut queue = DefaultQueue::default();
        queue.enqueue(PriorityItem::new(root, Cost::zero()));
        Self {
            state: SearchState::new(graph, root),
            settled: graph.vertex_map(false),
            queue,
        }
    }

    /// Lower bound on the cost of every vertex not yet settled
    fn min_key(&self) -> Cost<W> {
        self.queue.peek().map_or(Cost::Infinite, |item| item.cost)
    }
}

/// Bidirectional Dijkstra between one source and one destination
pub struct BidirectionalDijkstra<'a, G, W, F, Vis = ()> {
    graph: &'a G,
    weight: F,
    visitor: Vis,
    _weight: PhantomData<fn() -> W>,
}

impl<'a, G, W, F> BidirectionalDijkstra<'a, G, W, F>
where
    G: BidirectionalGraph + PropertyGraph,
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

impl<'a, G, W, F, Vis> BidirectionalDijkstra<'a, G, W, F, Vis>
where
    G: BidirectionalGraph + PropertyGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
    Vis: Visitor<G::Vertex, G::Edge>,
{
    /// Replaces the visitor; it observes both frontiers
    pub fn with_visitor<V2>(self, visitor: V2) -> BidirectionalDijkstra<'a, G, W, F, V2>
    where
        V2: Visitor<G::Vertex, G::Edge>,
    {
        BidirectionalDijkstra {
            graph: self.graph,
            weight: self.weight,
            visitor,
            _weight: PhantomData,
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(source = ?source, destination = ?destination))]
    pub fn path(
        &mut self,
        source: G::Vertex,
        destination: G::Vertex,
    ) -> Option<Path<G::Vertex, G::Edge, W>> {
        let graph = self.graph;
        if !graph.contains_vertex(source) || !graph.contains_vertex(destination) {
            return None;
        }
        if source == destination {
            return Some(Path::trivial(source));
        }

        let reversed = Reversed::new(graph);
        let mut forward: Frontier<G, W> = Frontier::new(graph, source);
        let mut backward: Frontier<Reversed<'_, G>, W> = Frontier::new(&reversed, destination);
        self.visitor.discover_vertex(source);
        self.visitor.discover_vertex(destination);

        let mut mu = Cost::Infinite;
        let mut meeting = None;
        let mut forward_turn = true;
        let mut settled = 0usize;

        loop {
            if forward.queue.is_empty() || backward.queue.is_empty() {
                break;
            }
            if forward.min_key() + backward.min_key() >= mu {
                break;
            }

            let improved = if forward_turn {
                self.step(graph, &mut forward, &backward.state)
            } else {
                self.step(&reversed, &mut backward, &forward.state)
            };
            forward_turn = !forward_turn;

            if let Some((through, v)) = improved {
                settled += 1;
                if through < mu {
                    mu = through;
                    meeting = Some(v);
                }
            }
        }

        debug!(settled, meeting = ?meeting, "frontiers met");
        let meeting = meeting?;

        let head = forward.state.path_to(graph, meeting).ok()?;
        let tail = backward.state.path_to(&reversed, meeting).ok()?;
        let mut vertices = tail.vertices().to_vec();
        let mut edges = tail.edges().to_vec();
        vertices.reverse();
        edges.reverse();
        let tail = Path::from_parts(vertices, edges, tail.cost()).ok()?;

        head.concat(&tail).ok()
    }

    /// Settles the next vertex of `frontier` and returns the cheapest connection to the
    /// `other` search found while doing so (if any, together with its meeting vertex).
    fn step<H>(
        &mut self,
        graph: &H,
        frontier: &mut Frontier<H, W>,
        other: &SearchState<impl IncidenceGraph<Vertex = G::Vertex, Edge = G::Edge> + PropertyGraph, W>,
    ) -> Option<(Cost<W>, G::Vertex)>
    where
        H: IncidenceGraph<Vertex = G::Vertex, Edge = G::Edge> + PropertyGraph,
    {
        let u = loop {
            let PriorityItem { vertex, cost } = frontier.queue.dequeue()?;
            if !*frontier.settled.get(vertex) && cost == frontier.state.distance(vertex) {
                break vertex;
            }
        };
        frontier.settled.set(u, true);
        self.visitor.examine_vertex(u);

        let d_u = frontier.state.distance(u);
        let mut best = (d_u + other.distance(u), u);

        for e in graph.out_edges(u) {
            let Some(v) = graph.destination(e) else {
                continue;
            };
            self.visitor.examine_edge(e);

            let candidate = d_u + (self.weight)(e);
            let undiscovered = frontier.state.distance(v).is_infinite();
            if frontier.state.relax(e, v, candidate) {
                if undiscovered {
                    self.visitor.discover_vertex(v);
                }
                self.visitor.edge_relaxed(e);
                frontier.queue.enqueue(PriorityItem::new(v, candidate));
            } else {
                self.visitor.edge_not_relaxed(e);
            }

            let through = frontier.state.distance(v) + other.distance(v);
            if through < best.0 {
                best = (through, v);
            }
        }

        self.visitor.finish_vertex(u);
        Some(best)
    }
}
