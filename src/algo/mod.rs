/*!
# Shortest-Path Algorithms

Every algorithm is a configurable struct following the *Builder* pattern:

```ignore
Algorithm::new(&graph, weight)  // mandatory parameters
    .with_visitor(visitor)       // optional configuration
    .run(source)                 // or path(s, d), path_until(s, condition), ...
```

All of them only require the capability traits of [`crate::ops`] they actually use and
take the edge weights as a closure. The most common calls are also available directly on
every graph through the [`ShortestPaths`] extension trait:

```
use wgraphs::{prelude::*, algo::*};

let g = AdjArray::from_edges(4, [(0, 1), (1, 2), (0, 2), (2, 3)]);
let weight = |e: Edge| if e == Edge(0, 2) { 5i32 } else { 1 };

let sssp = g.shortest_paths_from(0, weight);
assert_eq!(sssp.distance(3), Cost::Finite(3));

let apsp = g.all_pairs_shortest_paths(weight);
assert_eq!(apsp.distance(1, 3), Cost::Finite(2));
assert_eq!(apsp.distance(3, 0), Cost::Infinite);
```
*/

mod all_shortest;
mod astar;
mod bellman_ford;
mod bidirectional;
mod dag;
mod dijkstra;
mod floyd_warshall;
mod johnson;
mod spfa;
mod state;
mod yen;

use std::marker::PhantomData;

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::{
    cost::*,
    path::*,
    prelude::*,
    property::*,
    queue::*,
    repr::views::*,
    result::*,
    visitor::Visitor,
};
use state::SearchState;

pub use all_shortest::*;
pub use astar::*;
pub use bellman_ford::*;
pub use bidirectional::*;
pub use dag::*;
pub use dijkstra::*;
pub use floyd_warshall::*;
pub use johnson::*;
pub use spfa::*;
pub use yen::*;

/// Selects the algorithm behind the single-source entry points of [`ShortestPaths`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SingleSourceAlgorithm {
    /// Non-negative weights only; stops early on path queries
    #[default]
    Dijkstra,
    /// Arbitrary weights with negative-cycle detection
    BellmanFord,
    /// Arbitrary weights with negative-cycle detection; queue-driven
    Spfa,
}

/// Selects the algorithm behind the all-pairs entry points of [`ShortestPaths`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AllPairsAlgorithm {
    /// Bellman-Ford potentials plus one Dijkstra per vertex; best for sparse graphs
    #[default]
    Johnson,
    /// Dense dynamic program in `O(n^3)`
    FloydWarshall,
}

/// Shortest-path queries as methods on every graph
pub trait ShortestPaths: IncidenceGraph + PropertyGraph + Sized {
    /// Computes a shortest path from `source` to `destination` with [`Dijkstra`].
    /// Weights must be non-negative.
    fn shortest_path<W, F>(
        &self,
        source: Self::Vertex,
        destination: Self::Vertex,
        weight: F,
    ) -> Option<Path<Self::Vertex, Self::Edge, W>>
    where
        W: Weight,
        F: FnMut(Self::Edge) -> W,
    {
        Dijkstra::new(self, weight).path(source, destination)
    }

    /// Computes a shortest path from `source` to `destination` with the given algorithm
    fn shortest_path_with<W, F, Vis>(
        &self,
        source: Self::Vertex,
        destination: Self::Vertex,
        weight: F,
        algorithm: SingleSourceAlgorithm,
        visitor: Vis,
    ) -> Option<Path<Self::Vertex, Self::Edge, W>>
    where
        Self: VertexListGraph,
        W: Weight,
        F: FnMut(Self::Edge) -> W,
        Vis: Visitor<Self::Vertex, Self::Edge>,
    {
        self.shortest_path_until_with(source, |v| v == destination, weight, algorithm, visitor)
    }

    /// Computes a shortest path from `source` to a closest vertex satisfying `condition`
    /// with [`Dijkstra`]. The condition doubles as a cancellation point.
    fn shortest_path_until<W, F, C>(
        &self,
        source: Self::Vertex,
        condition: C,
        weight: F,
    ) -> Option<Path<Self::Vertex, Self::Edge, W>>
    where
        W: Weight,
        F: FnMut(Self::Edge) -> W,
        C: FnMut(Self::Vertex) -> bool,
    {
        Dijkstra::new(self, weight).path_until(source, condition)
    }

    /// Computes a shortest path from `source` to a closest vertex satisfying `condition`
    /// with the given algorithm
    fn shortest_path_until_with<W, F, C, Vis>(
        &self,
        source: Self::Vertex,
        condition: C,
        weight: F,
        algorithm: SingleSourceAlgorithm,
        visitor: Vis,
    ) -> Option<Path<Self::Vertex, Self::Edge, W>>
    where
        Self: VertexListGraph,
        W: Weight,
        F: FnMut(Self::Edge) -> W,
        C: FnMut(Self::Vertex) -> bool,
        Vis: Visitor<Self::Vertex, Self::Edge>,
    {
        match algorithm {
            SingleSourceAlgorithm::Dijkstra => Dijkstra::new(self, weight)
                .with_visitor(visitor)
                .path_until(source, condition),
            SingleSourceAlgorithm::BellmanFord => BellmanFord::new(self, weight)
                .with_visitor(visitor)
                .path_until(source, condition),
            SingleSourceAlgorithm::Spfa => Spfa::new(self, weight)
                .with_visitor(visitor)
                .path_until(source, condition),
        }
    }

    /// Computes the shortest paths from `source` to every vertex with [`Dijkstra`]
    fn shortest_paths_from<W, F>(
        &self,
        source: Self::Vertex,
        weight: F,
    ) -> SingleSourceShortestPaths<Self::Vertex, Self::Edge, W>
    where
        W: Weight,
        F: FnMut(Self::Edge) -> W,
    {
        Dijkstra::new(self, weight).run(source)
    }

    /// Computes the shortest paths from `source` to every vertex with the given algorithm
    fn shortest_paths_from_with<W, F, Vis>(
        &self,
        source: Self::Vertex,
        weight: F,
        algorithm: SingleSourceAlgorithm,
        visitor: Vis,
    ) -> SingleSourceShortestPaths<Self::Vertex, Self::Edge, W>
    where
        Self: VertexListGraph,
        W: Weight,
        F: FnMut(Self::Edge) -> W,
        Vis: Visitor<Self::Vertex, Self::Edge>,
    {
        match algorithm {
            SingleSourceAlgorithm::Dijkstra => {
                Dijkstra::new(self, weight).with_visitor(visitor).run(source)
            }
            SingleSourceAlgorithm::BellmanFord => {
                BellmanFord::new(self, weight).with_visitor(visitor).run(source)
            }
            SingleSourceAlgorithm::Spfa => Spfa::new(self, weight).with_visitor(visitor).run(source),
        }
    }

    /// Computes shortest paths in a DAG; `None` if the graph has a cycle
    fn dag_shortest_paths_from<W, F>(
        &self,
        source: Self::Vertex,
        weight: F,
    ) -> Option<SingleSourceShortestPaths<Self::Vertex, Self::Edge, W>>
    where
        Self: VertexListGraph,
        W: Weight,
        F: FnMut(Self::Edge) -> W,
    {
        DagShortestPaths::new(self, weight).run(source)
    }

    /// Computes the shortest paths between all pairs of vertices with [`Johnson`]
    fn all_pairs_shortest_paths<W, F>(
        &self,
        weight: F,
    ) -> AllPairsShortestPaths<Self::Vertex, Self::Edge, W>
    where
        Self: VertexListGraph,
        W: Weight,
        F: FnMut(Self::Edge) -> W,
    {
        Johnson::new(self, weight).run()
    }

    /// Computes the shortest paths between all pairs of vertices with the given algorithm
    fn all_pairs_shortest_paths_with<W, F, Vis>(
        &self,
        weight: F,
        algorithm: AllPairsAlgorithm,
        visitor: Vis,
    ) -> AllPairsShortestPaths<Self::Vertex, Self::Edge, W>
    where
        Self: VertexListGraph,
        W: Weight,
        F: FnMut(Self::Edge) -> W,
        Vis: Visitor<Self::Vertex, Self::Edge>,
    {
        match algorithm {
            AllPairsAlgorithm::Johnson => Johnson::new(self, weight).with_visitor(visitor).run(),
            AllPairsAlgorithm::FloydWarshall => {
                FloydWarshall::new(self, weight).with_visitor(visitor).run()
            }
        }
    }

    /// Returns up to `k` loopless paths from `source` to `destination` in order of cost
    /// ([`Yen`])
    fn k_shortest_paths<W, F>(
        &self,
        source: Self::Vertex,
        destination: Self::Vertex,
        k: usize,
        weight: F,
    ) -> Vec<Path<Self::Vertex, Self::Edge, W>>
    where
        W: Weight,
        F: FnMut(Self::Edge) -> W,
    {
        Yen::new(self, weight).run(source, destination, k)
    }

    fn k_shortest_paths_with<W, F, Vis>(
        &self,
        source: Self::Vertex,
        destination: Self::Vertex,
        k: usize,
        weight: F,
        visitor: Vis,
    ) -> Vec<Path<Self::Vertex, Self::Edge, W>>
    where
        W: Weight,
        F: FnMut(Self::Edge) -> W,
        Vis: Visitor<Self::Vertex, Self::Edge>,
    {
        Yen::new(self, weight)
            .with_visitor(visitor)
            .run(source, destination, k)
    }

    /// Returns every minimum-cost path from `source` to `destination`
    /// ([`AllShortestPaths`])
    fn all_shortest_paths<W, F>(
        &self,
        source: Self::Vertex,
        destination: Self::Vertex,
        weight: F,
    ) -> Vec<Path<Self::Vertex, Self::Edge, W>>
    where
        W: Weight,
        F: FnMut(Self::Edge) -> W,
    {
        AllShortestPaths::new(self, weight).run(source, destination)
    }

    fn all_shortest_paths_with<W, F, Vis>(
        &self,
        source: Self::Vertex,
        destination: Self::Vertex,
        weight: F,
        visitor: Vis,
    ) -> Vec<Path<Self::Vertex, Self::Edge, W>>
    where
        W: Weight,
        F: FnMut(Self::Edge) -> W,
        Vis: Visitor<Self::Vertex, Self::Edge>,
    {
        AllShortestPaths::new(self, weight)
            .with_visitor(visitor)
            .run(source, destination)
    }

    /// Computes a shortest path guided by an admissible `heuristic` ([`AStar`])
    fn shortest_path_astar<W, F, H>(
        &self,
        source: Self::Vertex,
        destination: Self::Vertex,
        weight: F,
        heuristic: H,
    ) -> Option<Path<Self::Vertex, Self::Edge, W>>
    where
        W: Weight,
        F: FnMut(Self::Edge) -> W,
        H: FnMut(Self::Vertex) -> W,
    {
        AStar::new(self, weight, heuristic).path(source, destination)
    }

    /// Computes a shortest path searching from both ends ([`BidirectionalDijkstra`])
    fn shortest_path_bidirectional<W, F>(
        &self,
        source: Self::Vertex,
        destination: Self::Vertex,
        weight: F,
    ) -> Option<Path<Self::Vertex, Self::Edge, W>>
    where
        Self: BidirectionalGraph,
        W: Weight,
        F: FnMut(Self::Edge) -> W,
    {
        BidirectionalDijkstra::new(self, weight).path(source, destination)
    }
}

impl<G> ShortestPaths for G where G: IncidenceGraph + PropertyGraph {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{testing::*, visitor::*};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    const A: Node = 0;
    const B: Node = 1;
    const C: Node = 2;
    const D: Node = 3;

    #[test]
    fn scenario_dijkstra_detour() {
        // A -> B (1), B -> C (2), A -> C (5)
        let g = AdjArray::from_edges(3, [(A, B), (B, C), (A, C)]);
        let w = |e: Edge| match (e.0, e.1) {
            (A, B) => 1,
            (B, C) => 2,
            _ => 5,
        };

        let p = g.shortest_path(A, C, w).unwrap();
        assert_eq!(p.vertices(), &[A, B, C]);
        assert_eq!(p.edges(), &[Edge(A, B), Edge(B, C)]);
        assert_eq!(p.cost(), 3);
    }

    #[test]
    fn scenario_dijkstra_diamond() {
        let g = AdjArray::from_edges(4, [(A, B), (A, C), (B, C), (B, D), (C, D)]);
        let w = |e: Edge| match (e.0, e.1) {
            (A, B) => 1,
            (A, C) => 4,
            (B, C) => 2,
            (B, D) => 6,
            _ => 3,
        };

        let p = g.shortest_path(A, D, w).unwrap();
        assert_eq!(p.vertices(), &[A, B, C, D]);
        assert_eq!(p.cost(), 6);
    }

    #[test]
    fn scenario_bellman_ford_detour() {
        let g = AdjArray::from_edges(3, [(A, B), (A, C), (C, B)]);
        let w = |e: Edge| if e == Edge(A, B) { 4 } else { 1 };

        let sssp = g.shortest_paths_from_with(A, w, SingleSourceAlgorithm::BellmanFord, ());
        assert_eq!(sssp.distance(B), Cost::Finite(2));
        assert_eq!(sssp.path_to(B).unwrap().vertices(), &[A, C, B]);
    }

    #[test]
    fn scenario_negative_cycle() {
        let g = AdjArray::from_edges(2, [(A, B), (B, A)]);
        let w = |e: Edge| if e == Edge(A, B) { 1 } else { -10 };

        for algorithm in [SingleSourceAlgorithm::BellmanFord, SingleSourceAlgorithm::Spfa] {
            let sssp = g.shortest_paths_from_with(A, w, algorithm, ());
            assert!(sssp.has_negative_cycle(), "{algorithm:?}");
            assert!(sssp.path_to(B).is_none());
        }
        for algorithm in [AllPairsAlgorithm::Johnson, AllPairsAlgorithm::FloydWarshall] {
            let apsp = g.all_pairs_shortest_paths_with(w, algorithm, ());
            assert!(apsp.has_negative_cycle(), "{algorithm:?}");
        }
    }

    #[test]
    fn scenario_yen_diamond() {
        let g = AdjArray::from_edges(4, [(A, B), (B, D), (A, C), (C, D)]);
        let paths = g.k_shortest_paths(A, D, 2, |_| 1u32);
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].cost(), paths[1].cost());
        assert_ne!(paths[0].vertices(), paths[1].vertices());
    }

    #[test]
    fn scenario_all_shortest() {
        let g = AdjArray::from_edges(4, [(A, B), (B, D), (A, C), (C, D)]);
        let w = |e: Edge| if e.0 == A { 1 } else { 2 };
        let paths = g.all_shortest_paths(A, D, w);
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.cost() == 3));
        assert_eq!(paths.iter().map(|p| p.edges().to_vec()).unique().count(), 2);
    }

    #[test]
    fn empty_graph() {
        let g = AdjArrayIn::new(0);
        let w = |_| 1u32;

        for (s, t) in [(0, 0), (0, 1)] {
            assert!(g.shortest_path(s, t, w).is_none());
            assert!(g.shortest_path_until(s, |_| true, w).is_none());
            assert!(g.shortest_path_astar(s, t, w, |_| 0).is_none());
            assert!(g.shortest_path_bidirectional(s, t, w).is_none());
            assert!(g.k_shortest_paths(s, t, 2, w).is_empty());
            assert!(g.all_shortest_paths(s, t, w).is_empty());
            for algorithm in [
                SingleSourceAlgorithm::Dijkstra,
                SingleSourceAlgorithm::BellmanFord,
                SingleSourceAlgorithm::Spfa,
            ] {
                assert!(g.shortest_path_with(s, t, w, algorithm, ()).is_none());
                let sssp = g.shortest_paths_from_with(s, w, algorithm, ());
                assert_eq!(sssp.number_of_reachable(), 0, "{algorithm:?}");
                assert_eq!(sssp.distance(s), Cost::Infinite);
                assert!(!sssp.has_negative_cycle());
            }
        }

        let sssp = g.shortest_paths_from(0, w);
        assert_eq!(sssp.number_of_reachable(), 0);
        assert!(sssp.path_to(0).is_none());

        let dag = g.dag_shortest_paths_from(0, w).unwrap();
        assert_eq!(dag.number_of_reachable(), 0);

        for algorithm in [AllPairsAlgorithm::Johnson, AllPairsAlgorithm::FloydWarshall] {
            let apsp = g.all_pairs_shortest_paths_with(w, algorithm, ());
            assert_eq!(apsp.sources().count(), 0);
            assert!(!apsp.has_negative_cycle());
            assert_eq!(apsp.distance(0, 0), Cost::Infinite);
        }
    }

    #[test]
    fn foreign_vertices_reach_nothing() {
        let g = AdjArrayIn::from_edges(3, [(0, 1), (1, 2)]);
        let w = |_| 1u32;
        let mut recorder = EventRecorder::<Node, Edge>::default();

        let sssp = g.shortest_paths_from_with(7, w, SingleSourceAlgorithm::Dijkstra, &mut recorder);
        assert_eq!(sssp.number_of_reachable(), 0);
        assert!(recorder.events().is_empty());

        assert!(g.shortest_path(7, 7, w).is_none());
        assert!(g.shortest_path(0, 7, w).is_none());
        assert!(g.shortest_path_bidirectional(0, 7, w).is_none());
        assert!(g.shortest_path_bidirectional(7, 7, w).is_none());
        assert!(g.all_shortest_paths(7, 7, w).is_empty());
        assert!(g.all_shortest_paths(0, 7, w).is_empty());
        assert!(g.k_shortest_paths(7, 2, 3, w).is_empty());
        for algorithm in [SingleSourceAlgorithm::BellmanFord, SingleSourceAlgorithm::Spfa] {
            assert_eq!(
                g.shortest_paths_from_with(7, w, algorithm, ()).number_of_reachable(),
                0
            );
        }
        assert_eq!(g.dag_shortest_paths_from(7, w).unwrap().number_of_reachable(), 0);

        assert_eq!(g.shortest_path(0, 2, w).unwrap().cost(), 2);
    }

    #[test]
    fn source_equals_destination() {
        let g = AdjArrayIn::from_edges(2, [(0, 1), (1, 0)]);
        let w = |_| 3u32;
        assert!(g.shortest_path(1, 1, w).unwrap().is_trivial());
        assert!(g.shortest_path_bidirectional(1, 1, w).unwrap().is_trivial());
        assert!(g.shortest_path_astar(1, 1, w, |_| 0).unwrap().is_trivial());
        assert!(g.k_shortest_paths(1, 1, 3, w).is_empty());
        assert_eq!(g.all_shortest_paths(1, 1, w).len(), 1);
        for algorithm in [
            SingleSourceAlgorithm::Dijkstra,
            SingleSourceAlgorithm::BellmanFord,
            SingleSourceAlgorithm::Spfa,
        ] {
            let p = g.shortest_path_with(1, 1, w, algorithm, ()).unwrap();
            assert_eq!(p.cost(), 0);
        }
    }

    #[test]
    fn disconnected_destination() {
        let g = AdjArrayIn::from_edges(4, [(0, 1), (2, 3)]);
        let w = |_| 1i32;
        assert!(g.shortest_path(0, 3, w).is_none());
        assert!(g.shortest_path_bidirectional(0, 3, w).is_none());
        assert!(g.shortest_path_astar(0, 3, w, |_| 0).is_none());
        assert!(g.k_shortest_paths(0, 3, 2, w).is_empty());
        assert!(g.all_shortest_paths(0, 3, w).is_empty());
        assert_eq!(g.shortest_paths_from(0, w).distance(3), Cost::Infinite);
        assert_eq!(g.all_pairs_shortest_paths(w).distance(0, 3), Cost::Infinite);
        assert!(g.dag_shortest_paths_from(0, w).unwrap().path_to(3).is_none());
    }

    #[test]
    fn negative_self_loop() {
        let g = AdjArray::from_edges(2, [(0, 1), (1, 1)]);
        let w = |e: Edge| if e.is_loop() { -1 } else { 2 };
        for algorithm in [SingleSourceAlgorithm::BellmanFord, SingleSourceAlgorithm::Spfa] {
            assert!(g.shortest_paths_from_with(0, w, algorithm, ()).has_negative_cycle());
        }
        assert!(g.all_pairs_shortest_paths(w).has_negative_cycle());
        assert!(g.dag_shortest_paths_from(0, w).is_none());
    }

    #[test]
    fn until_with_deadline_condition() {
        let g = AdjArray::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);
        let mut budget = 3;
        // cancels after three settled vertices
        let p = g.shortest_path_until(
            0,
            |v| {
                budget -= 1;
                v == 4 || budget == 0
            },
            |_| 1u32,
        );
        assert_eq!(p.unwrap().destination(), 2);
    }

    #[test]
    fn visitor_sees_every_relaxation() {
        let g = AdjArray::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
        let mut recorder = EventRecorder::<Node, Edge>::default();
        let mut relaxed = 0;
        let visitor = Chain(
            &mut recorder,
            FnVisitor::<Node, Edge>::new().on_edge_relaxed(|_| relaxed += 1),
        );
        let sssp = g.shortest_paths_from_with(0, |_| 1u32, SingleSourceAlgorithm::Dijkstra, visitor);

        assert_eq!(sssp.distance(2), Cost::Finite(1));
        assert_eq!(relaxed, 2);
        assert_eq!(
            recorder
                .events()
                .iter()
                .filter(|e| matches!(e, Event::EdgeRelaxed(_)))
                .count(),
            2
        );
    }

    /// Distances of every algorithm on `graph` from every source
    fn check_agreement(graph: &AdjArrayIn, weights: &FxHashMap<Edge, u32>) {
        let w = |e: Edge| weights[&e];
        let johnson = graph.all_pairs_shortest_paths(w);
        let floyd = graph.all_pairs_shortest_paths_with(w, AllPairsAlgorithm::FloydWarshall, ());

        for s in graph.vertices() {
            let dijkstra = graph.shortest_paths_from(s, w);
            let bellman_ford =
                graph.shortest_paths_from_with(s, w, SingleSourceAlgorithm::BellmanFord, ());
            let spfa = graph.shortest_paths_from_with(s, w, SingleSourceAlgorithm::Spfa, ());

            for t in graph.vertices() {
                let expected = dijkstra.distance(t);
                assert_eq!(bellman_ford.distance(t), expected);
                assert_eq!(spfa.distance(t), expected);
                assert_eq!(johnson.distance(s, t), expected);
                assert_eq!(floyd.distance(s, t), expected);

                let astar = graph.shortest_path_astar(s, t, w, |_| 0);
                let bidirectional = graph.shortest_path_bidirectional(s, t, w);
                assert_eq!(astar.map(|p| p.cost()), expected.finite());
                assert_eq!(bidirectional.as_ref().map(|p| p.cost()), expected.finite());

                if let Some(p) = dijkstra.path_to(t) {
                    let sum: u32 = p.edges().iter().map(|&e| w(e)).sum();
                    assert_eq!(Cost::Finite(sum), expected);
                    assert_eq!(Path::from_edges(graph, s, p.edges().to_vec(), w), Ok(p));
                }
                if let Some(p) = bidirectional {
                    let sum: u32 = p.edges().iter().map(|&e| w(e)).sum();
                    assert_eq!(sum, p.cost());
                }
            }
        }
    }

    #[test]
    fn random_graphs_agree() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        for n in [1, 2, 5, 10, 20] {
            for _ in 0..5 {
                let (graph, weights) =
                    random_weighted_graph::<AdjArrayIn, _, u32>(&mut rng, n, 3 * n, 0, 10);
                check_agreement(&graph, &weights);
            }
        }
    }

    #[test]
    fn repeated_queries_are_idempotent() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        let (graph, weights) = random_weighted_graph::<AdjArray, _, u32>(&mut rng, 30, 90, 1, 20);
        let w = |e: Edge| weights[&e];

        let first = graph.all_pairs_shortest_paths(w);
        let second = graph.all_pairs_shortest_paths(w);
        for s in graph.vertices() {
            for t in graph.vertices() {
                assert_eq!(first.distance(s, t), second.distance(s, t));
                assert_eq!(first.path(s, t), second.path(s, t));
            }
        }
    }

    fn weighted_graph() -> impl Strategy<Value = (AdjArrayIn, FxHashMap<Edge, u32>)> {
        (1u32..12).prop_flat_map(|n| {
            prop::collection::vec((0..n, 0..n, 0u32..25), 0..(4 * n as usize)).prop_map(
                move |triples| {
                    let mut weights = FxHashMap::default();
                    for (u, v, w) in triples {
                        weights.entry(Edge(u, v)).or_insert(w);
                    }
                    let graph = AdjArrayIn::from_edges(n, weights.keys().copied());
                    (graph, weights)
                },
            )
        })
    }

    proptest! {
        #[test]
        fn algorithms_agree((graph, weights) in weighted_graph()) {
            check_agreement(&graph, &weights);
        }

        #[test]
        fn yen_costs_are_sorted((graph, weights) in weighted_graph(), k in 1usize..6) {
            let w = |e: Edge| weights[&e];
            let t = graph.number_of_vertices() as Node - 1;
            let paths = graph.k_shortest_paths(0, t, k, w);

            prop_assert!(paths.len() <= k);
            for pair in paths.windows(2) {
                prop_assert!(pair[0].cost() <= pair[1].cost());
            }
            for p in &paths {
                prop_assert!(p.is_loopless());
            }
            if t != 0 {
                prop_assert_eq!(
                    paths.first().map(|p| p.cost()),
                    graph.shortest_paths_from(0, w).distance(t).finite()
                );
            }
        }

        #[test]
        fn all_shortest_paths_share_the_optimum((graph, weights) in weighted_graph()) {
            let w = |e: Edge| weights[&e];
            let t = graph.number_of_vertices() as Node - 1;
            let expected = graph.shortest_paths_from(0, w).distance(t);
            let paths = graph.all_shortest_paths(0, t, w);

            prop_assert_eq!(paths.is_empty(), expected.is_infinite());
            for p in &paths {
                prop_assert_eq!(Cost::Finite(p.cost()), expected);
                let sum: u32 = p.edges().iter().map(|&e| w(e)).sum();
                prop_assert_eq!(sum, p.cost());
            }
            prop_assert_eq!(paths.iter().map(|p| p.edges().to_vec()).unique().count(), paths.len());
        }
    }
}
