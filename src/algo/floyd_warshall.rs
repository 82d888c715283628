/*!
# Floyd-Warshall

All-pairs shortest paths by dynamic programming over the allowed intermediate vertices in
`O(n^3)` time and `O(n^2)` space. Negative weights are fine; a negative entry on the
diagonal proves a negative cycle, in which case the computation stops and the result only
reports the cycle.
*/

use super::*;

/// Dense all-pairs shortest paths
pub struct FloydWarshall<'a, G, W, F, Vis = ()> {
    graph: &'a G,
    weight: F,
    visitor: Vis,
    _weight: PhantomData<fn() -> W>,
}

impl<'a, G, W, F> FloydWarshall<'a, G, W, F>
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

impl<'a, G, W, F, Vis> FloydWarshall<'a, G, W, F, Vis>
where
    G: VertexListGraph + IncidenceGraph + PropertyGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
    Vis: Visitor<G::Vertex, G::Edge>,
{
    pub fn with_visitor<V2>(self, visitor: V2) -> FloydWarshall<'a, G, W, F, V2>
    where
        V2: Visitor<G::Vertex, G::Edge>,
    {
        FloydWarshall {
            graph: self.graph,
            weight: self.weight,
            visitor,
            _weight: PhantomData,
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self) -> AllPairsShortestPaths<G::Vertex, G::Edge, W> {
        let graph = self.graph;
        let vertices = graph.vertices().collect_vec();
        let n = vertices.len();

        let mut index = graph.vertex_map(0usize);
        for (i, &v) in vertices.iter().enumerate() {
            index.set(v, i);
        }

        // dist[i * n + j]; pred holds the last edge of the current i -> j path
        let mut dist = vec![Cost::<W>::Infinite; n * n];
        let mut pred: Vec<Option<G::Edge>> = vec![None; n * n];
        for i in 0..n {
            dist[i * n + i] = Cost::zero();
        }

        for (i, &u) in vertices.iter().enumerate() {
            for e in graph.out_edges(u) {
                let Some(v) = graph.destination(e) else {
                    continue;
                };
                self.visitor.examine_edge(e);
                let ij = i * n + *index.get(v);
                let w = Cost::Finite((self.weight)(e));
                if w < dist[ij] {
                    dist[ij] = w;
                    pred[ij] = Some(e);
                }
            }
        }

        if let Some(witness) = negative_diagonal(&dist, &pred, n) {
            return self.abort(witness);
        }

        for k in 0..n {
            for i in 0..n {
                let d_ik = dist[i * n + k];
                if d_ik.is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let candidate = d_ik + dist[k * n + j];
                    if candidate < dist[i * n + j] {
                        dist[i * n + j] = candidate;
                        pred[i * n + j] = pred[k * n + j];
                    }
                }
            }
            self.visitor.sweep_finished(k + 1);

            if let Some(witness) = negative_diagonal(&dist, &pred, n) {
                return self.abort(witness);
            }
        }

        let mut trees = FxHashMap::with_capacity_and_hasher(n, Default::default());
        for (i, &s) in vertices.iter().enumerate() {
            let mut distances = FxHashMap::default();
            let mut predecessors = FxHashMap::default();
            for (j, &v) in vertices.iter().enumerate() {
                if let Cost::Finite(d) = dist[i * n + j] {
                    distances.insert(v, d);
                }
                if let Some(e) = pred[i * n + j] {
                    if let Some(u) = graph.source(e) {
                        predecessors.insert(v, (e, u));
                    }
                }
            }
            trees.insert(
                s,
                SingleSourceShortestPaths::new(s, distances, predecessors, false),
            );
        }

        debug!(vertices = n, "all pairs computed");
        AllPairsShortestPaths::new(trees)
    }

    fn abort(&mut self, witness: Option<G::Edge>) -> AllPairsShortestPaths<G::Vertex, G::Edge, W> {
        warn!(edge = ?witness, "negative cycle detected");
        if let Some(e) = witness {
            self.visitor.negative_cycle(e);
        }
        AllPairsShortestPaths::aborted()
    }
}

/// Returns the recorded edge of the first negative diagonal entry, if there is one
fn negative_diagonal<W: Weight, E: Copy>(
    dist: &[Cost<W>],
    pred: &[Option<E>],
    n: usize,
) -> Option<Option<E>> {
    (0..n)
        .find(|&i| dist[i * n + i] < Cost::zero())
        .map(|i| pred[i * n + i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_example() {
        // 0 -> 1 (3), 0 -> 2 (8), 1 -> 2 (-2), 2 -> 0 (4)
        let g = AdjArray::from_edges(3, [(0, 1), (0, 2), (1, 2), (2, 0)]);
        let w = |e: Edge| match (e.0, e.1) {
            (0, 1) => 3,
            (0, 2) => 8,
            (1, 2) => -2,
            _ => 4,
        };

        let apsp = FloydWarshall::new(&g, w).run();
        assert!(!apsp.has_negative_cycle());
        assert_eq!(apsp.distance(0, 2), Cost::Finite(1));
        assert_eq!(apsp.distance(1, 0), Cost::Finite(2));
        assert_eq!(apsp.distance(2, 1), Cost::Finite(7));
        assert_eq!(apsp.distance(1, 1), Cost::Finite(0));
        assert_eq!(apsp.path(2, 1).unwrap().vertices(), &[2, 0, 1]);
        assert_eq!(apsp.path(1, 0).unwrap().edges(), &[Edge(1, 2), Edge(2, 0)]);
    }

    #[test]
    fn unreachable_pairs() {
        let g = AdjArray::from_edges(3, [(0, 1)]);
        let apsp = FloydWarshall::new(&g, |_| 1u32).run();
        assert_eq!(apsp.distance(1, 0), Cost::Infinite);
        assert!(apsp.path(2, 0).is_none());
        assert!(apsp.path(2, 2).unwrap().is_trivial());
    }

    #[test]
    fn detects_negative_cycle() {
        let g = AdjArray::from_edges(2, [(0, 1), (1, 0)]);
        let w = |e: Edge| if e == Edge(0, 1) { 1 } else { -10 };

        let mut cycle_edges = Vec::new();
        let apsp = FloydWarshall::new(&g, w)
            .with_visitor(crate::visitor::FnVisitor::new().on_negative_cycle(|e| cycle_edges.push(e)))
            .run();
        assert!(apsp.has_negative_cycle());
        assert!(apsp.path(0, 1).is_none());
        assert_eq!(cycle_edges.len(), 1);
    }

    #[test]
    fn negative_self_loop() {
        let g = AdjArray::from_edges(2, [(0, 0), (0, 1)]);
        let apsp = FloydWarshall::new(&g, |e: Edge| if e.is_loop() { -1 } else { 1 }).run();
        assert!(apsp.has_negative_cycle());
    }

    #[test]
    fn empty_graph() {
        let g = AdjArray::new(0);
        let apsp = FloydWarshall::new(&g, |_| 1u32).run();
        assert!(!apsp.has_negative_cycle());
        assert_eq!(apsp.sources().count(), 0);
    }
}
