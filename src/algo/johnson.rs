/*!
# Johnson

All-pairs shortest paths for sparse graphs with negative weights but no negative cycles.

1. Bellman-Ford from a [`VirtualSource`] root (zero-cost edges to every vertex) computes a
   potential `h(v)` per vertex.
2. Every edge is reweighted to `w(u, v) + h(u) - h(v) >= 0`.
3. Dijkstra runs from every vertex on the reweighted graph and the distances are shifted
   back by `h(t) - h(s)`.

A negative cycle anywhere in the graph aborts the computation in step 1.
*/

use super::*;

/// Sparse all-pairs shortest paths via reweighting
pub struct Johnson<'a, G, W, F, Vis = ()> {
    graph: &'a G,
    weight: F,
    visitor: Vis,
    _weight: PhantomData<fn() -> W>,
}

impl<'a, G, W, F> Johnson<'a, G, W, F>
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

impl<'a, G, W, F, Vis> Johnson<'a, G, W, F, Vis>
where
    G: VertexListGraph + IncidenceGraph + PropertyGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
    Vis: Visitor<G::Vertex, G::Edge>,
{
    pub fn with_visitor<V2>(self, visitor: V2) -> Johnson<'a, G, W, F, V2>
    where
        V2: Visitor<G::Vertex, G::Edge>,
    {
        Johnson {
            graph: self.graph,
            weight: self.weight,
            visitor,
            _weight: PhantomData,
        }
    }

    /// Computes potentials with Bellman-Ford; `None` if the graph has a negative cycle
    fn potentials(&mut self) -> Option<G::VertexMap<W>> {
        let graph = self.graph;
        let view = VirtualSource::new(graph);
        let weight = &mut self.weight;

        let root_tree = BellmanFord::new(&view, |e| match e {
            AugmentedEdge::Root(_) => W::zero(),
            AugmentedEdge::Edge(e) => weight(e),
        })
        .with_visitor(PotentialVisitor(&mut self.visitor))
        .run(Augmented::Root);

        if root_tree.has_negative_cycle() {
            return None;
        }

        let mut potentials = graph.vertex_map(W::zero());
        for v in graph.vertices() {
            if let Cost::Finite(h) = root_tree.distance(Augmented::Vertex(v)) {
                potentials.set(v, h);
            }
        }
        Some(potentials)
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self) -> AllPairsShortestPaths<G::Vertex, G::Edge, W> {
        let Some(h) = self.potentials() else {
            return AllPairsShortestPaths::aborted();
        };

        let graph = self.graph;
        let weight = &mut self.weight;
        let visitor = &mut self.visitor;

        let mut trees = FxHashMap::default();
        for s in graph.vertices() {
            let tree = Dijkstra::new(graph, |e| reweighted(graph, &h, e, weight(e)))
                .with_visitor(&mut *visitor)
                .run(s)
                .map_distances(|v, d| d + *h.get(v) - *h.get(s));
            trees.insert(s, tree);
        }

        debug!(sources = trees.len(), "all pairs computed");
        AllPairsShortestPaths::new(trees)
    }
}

#[cfg(feature = "parallel")]
impl<'a, G, W, F, Vis> Johnson<'a, G, W, F, Vis>
where
    G: VertexListGraph + IncidenceGraph + PropertyGraph + Sync,
    G::VertexMap<W>: Sync,
    G::Vertex: Send + Sync,
    G::Edge: Send,
    W: Weight + Send + Sync,
    F: Fn(G::Edge) -> W + Sync,
    Vis: Visitor<G::Vertex, G::Edge>,
{
    /// Like [`Johnson::run`], but runs the per-source Dijkstra searches on the rayon
    /// thread pool. The visitor only observes the potential computation.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run_parallel(&mut self) -> AllPairsShortestPaths<G::Vertex, G::Edge, W> {
        use rayon::prelude::*;

        let Some(h) = self.potentials() else {
            return AllPairsShortestPaths::aborted();
        };

        let graph = self.graph;
        let weight = &self.weight;
        let h = &h;

        let trees: FxHashMap<_, _> = graph
            .vertices()
            .collect_vec()
            .into_par_iter()
            .map(|s| {
                let tree = Dijkstra::new(graph, |e| reweighted(graph, h, e, weight(e)))
                    .run(s)
                    .map_distances(|v, d| d + *h.get(v) - *h.get(s));
                (s, tree)
            })
            .collect();

        debug!(sources = trees.len(), "all pairs computed in parallel");
        AllPairsShortestPaths::new(trees)
    }
}

/// `w + h(u) - h(v)` for the edge `e = (u, v)`
#[inline]
fn reweighted<G, W>(graph: &G, h: &G::VertexMap<W>, e: G::Edge, w: W) -> W
where
    G: IncidenceGraph + PropertyGraph,
    W: Weight,
{
    match graph.endpoints(e) {
        Some((u, v)) => w + *h.get(u) - *h.get(v),
        None => w,
    }
}

/// Forwards the events of the potential computation that concern the original graph
struct PotentialVisitor<'v, Vis>(&'v mut Vis);

impl<V, E, Vis> Visitor<Augmented<V>, AugmentedEdge<V, E>> for PotentialVisitor<'_, Vis>
where
    Vis: Visitor<V, E>,
{
    fn sweep_finished(&mut self, pass: usize) {
        self.0.sweep_finished(pass);
    }

    fn negative_cycle(&mut self, e: AugmentedEdge<V, E>) {
        if let AugmentedEdge::Edge(e) = e {
            self.0.negative_cycle(e);
        }
    }
}
