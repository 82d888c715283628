/*!
Shared test helpers: random instances with fixed seeds and a macro checking every
representation against the capability traits it implements.
*/

#[cfg(test)]
pub(crate) use helpers::*;

#[cfg(test)]
mod helpers {
    use fxhash::FxHashMap;
    use itertools::Itertools;
    use rand::{distr::uniform::SampleUniform, Rng};

    use crate::{ops::*, *};

    /// Creates a sorted list of at most `m_ub` distinct random edges for nodes `0..n`
    pub(crate) fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
        let mut edges = (0..m_ub)
            .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
            .collect_vec();
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    /// Assigns every edge a weight drawn uniformly from `lb..ub`
    pub(crate) fn random_weights<R, W>(rng: &mut R, edges: &[Edge], lb: W, ub: W) -> FxHashMap<Edge, W>
    where
        R: Rng,
        W: SampleUniform + PartialOrd + Copy,
    {
        edges
            .iter()
            .map(|&e| (e, rng.random_range(lb..ub)))
            .collect()
    }

    /// A random graph of type `G` together with its edge weights
    pub(crate) fn random_weighted_graph<G, R, W>(
        rng: &mut R,
        n: NumNodes,
        m_ub: NumEdges,
        lb: W,
        ub: W,
    ) -> (G, FxHashMap<Edge, W>)
    where
        G: GraphFromScratch,
        R: Rng,
        W: SampleUniform + PartialOrd + Copy,
    {
        let edges = random_edges(rng, n, m_ub);
        let weights = random_weights(rng, &edges, lb, ub);
        (G::from_edges(n, edges), weights)
    }
}

/// Every owned representation should pass these for each capability it implements
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{cost::Cost, ops::*, property::*, repr::*, testing::*, *};
            use fxhash::FxHashSet;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_vertices(), n as usize);
                assert_eq!(graph.is_empty(), n == 0);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert!(!graph.contains_vertex(n));
                assert_eq!(graph.out_edges(n).count(), 0);
                assert_eq!(graph.out_degree(n), 0);
            }
        }
    };
    ($graph:ident: IncidenceGraph) => {
        #[test]
        fn incidence_graph() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    let edges = random_edges(rng, n, m_ub as NumEdges);
                    let graph = <$graph>::from_edges(n, edges.iter());

                    assert_eq!(graph.number_of_edges() as usize, edges.len());

                    let out_edges = graph
                        .vertices()
                        .flat_map(|u| graph.out_edges(u).sorted())
                        .collect_vec();
                    assert_eq!(out_edges, edges);

                    for u in 0..n {
                        let expected = edges.iter().filter(|e| e.0 == u).count();
                        assert_eq!(graph.out_degree(u), expected);
                    }

                    for &e in &edges {
                        assert_eq!(graph.source(e), Some(e.0));
                        assert_eq!(graph.destination(e), Some(e.1));
                        assert_eq!(graph.endpoints(e), Some((e.0, e.1)));
                    }
                    assert_eq!(graph.source(Edge(n, 0)), None);
                    assert_eq!(graph.destination(Edge(0, n)), None);

                    // in range, but not an edge
                    let present: FxHashSet<Edge> = edges.iter().copied().collect();
                    for (u, v) in (0..n).cartesian_product(0..n) {
                        if !present.contains(&Edge(u, v)) {
                            assert_eq!(graph.source(Edge(u, v)), None);
                            assert_eq!(graph.destination(Edge(u, v)), None);
                            assert_eq!(graph.endpoints(Edge(u, v)), None);
                        }
                    }
                    assert!((0..n).all(|u| graph.contains_vertex(u)));
                    assert!(!graph.contains_vertex(n));
                }
            }
        }
    };
    ($graph:ident: BidirectionalGraph) => {
        #[test]
        fn bidirectional_graph() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5] {
                    let edges = random_edges(rng, n, m_ub as NumEdges);
                    let graph = <$graph>::from_edges(n, edges.iter());

                    for u in 0..n {
                        let expected = edges.iter().copied().filter(|e| e.1 == u).collect_vec();
                        assert_eq!(graph.in_edges(u).sorted().collect_vec(), expected);
                        assert_eq!(graph.in_degree(u), expected.len());
                    }
                    assert_eq!(graph.in_edges(n).count(), 0);
                    assert_eq!(graph.in_degree(n), 0);
                }
            }
        }
    };
    ($graph:ident: PropertyGraph) => {
        #[test]
        fn property_graph() {
            let graph = <$graph>::from_edges(4, [(0, 1), (1, 2), (2, 3)]);

            let mut dist = graph.vertex_property::<Distance<u32>>();
            let fresh = graph.vertex_property::<Distance<u32>>();
            for u in graph.vertices() {
                assert_eq!(*dist.get(u), Cost::Infinite);
            }
            dist.set(2u32, Cost::Finite(7));
            assert_eq!(*dist.get(2u32), Cost::Finite(7));
            assert_eq!(*fresh.get(2u32), Cost::Infinite);

            let mut hidden = graph.edge_property::<Hidden>();
            assert!(!*hidden.get(Edge(1, 2)));
            *hidden.get_mut(Edge(1, 2)) = true;
            assert!(*hidden.get(Edge(1, 2)));
            assert!(!*hidden.get(Edge(2, 3)));

            let counts = graph.vertex_map(5usize);
            assert_eq!(*counts.get(3u32), 5);
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    let mut graph = <$graph>::new(n);
                    let mut present = FxHashSet::default();

                    for _ in 0..m_ub {
                        let (u, v) = (rng.random_range(0..n), rng.random_range(0..n));
                        assert_eq!(graph.try_add_edge(u, v), present.insert(Edge(u, v)));
                        assert_eq!(graph.number_of_edges() as usize, present.len());
                    }

                    for _ in 0..m_ub {
                        let (u, v) = (rng.random_range(0..n), rng.random_range(0..n));
                        assert_eq!(graph.try_remove_edge(u, v), present.remove(&Edge(u, v)));
                        assert_eq!(graph.number_of_edges() as usize, present.len());
                    }

                    for e in present.drain() {
                        graph.remove_edge(e.0, e.1);
                    }
                    assert!(graph.is_singleton_graph());
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
