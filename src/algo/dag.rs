/*!
# Shortest Paths in DAGs

On a directed acyclic graph, relaxing the outgoing edges of every vertex in topological
order yields exact distances for arbitrary weights in `O(n + m)`.

The search refuses to run (returns `None`) if the graph contains a cycle anywhere, even if
the cycle is not reachable from the source.
*/

use super::*;

/// Returns all vertices in a topological order or `None` if the graph contains a cycle.
///
/// Edges whose endpoint lookup fails are ignored.
///
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let dag = AdjArray::from_edges(3, [(2, 0), (0, 1)]);
/// assert_eq!(topological_order(&dag), Some(vec![2, 0, 1]));
///
/// let cyclic = AdjArray::from_edges(2, [(0, 1), (1, 0)]);
/// assert_eq!(topological_order(&cyclic), None);
/// ```
pub fn topological_order<G>(graph: &G) -> Option<Vec<G::Vertex>>
where
    G: VertexListGraph + IncidenceGraph + PropertyGraph,
{
    let mut in_degrees = graph.vertex_map(0usize);
    for u in graph.vertices() {
        for e in graph.out_edges(u) {
            if let Some(v) = graph.destination(e) {
                *in_degrees.get_mut(v) += 1;
            }
        }
    }

    let mut stack = graph
        .vertices()
        .filter(|&u| *in_degrees.get(u) == 0)
        .collect_vec();
    // pop in ascending order for sources
    stack.reverse();

    let mut order = Vec::with_capacity(graph.number_of_vertices());
    while let Some(u) = stack.pop() {
        order.push(u);
        for e in graph.out_edges(u) {
            let Some(v) = graph.destination(e) else {
                continue;
            };
            let deg = in_degrees.get_mut(v);
            *deg -= 1;
            if *deg == 0 {
                stack.push(v);
            }
        }
    }

    (order.len() == graph.number_of_vertices()).then_some(order)
}

/// Single-source shortest paths in topological order
pub struct DagShortestPaths<'a, G, W, F, Vis = ()> {
    graph: &'a G,
    weight: F,
    visitor: Vis,
    _weight: PhantomData<fn() -> W>,
}

impl<'a, G, W, F> DagShortestPaths<'a, G, W, F>
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

impl<'a, G, W, F, Vis> DagShortestPaths<'a, G, W, F, Vis>
where
    G: VertexListGraph + IncidenceGraph + PropertyGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
    Vis: Visitor<G::Vertex, G::Edge>,
{
    pub fn with_visitor<V2>(self, visitor: V2) -> DagShortestPaths<'a, G, W, F, V2>
    where
        V2: Visitor<G::Vertex, G::Edge>,
    {
        DagShortestPaths {
            graph: self.graph,
            weight: self.weight,
            visitor,
            _weight: PhantomData,
        }
    }

    /// Computes distances from `source`; `None` if the graph is not acyclic
    pub fn run(
        &mut self,
        source: G::Vertex,
    ) -> Option<SingleSourceShortestPaths<G::Vertex, G::Edge, W>> {
        let state = self.search(source)?;
        Some(state.into_result(self.graph, false))
    }

    pub fn path(
        &mut self,
        source: G::Vertex,
        destination: G::Vertex,
    ) -> Option<Path<G::Vertex, G::Edge, W>> {
        self.path_until(source, |v| v == destination)
    }

    /// Computes a shortest path to a closest vertex satisfying `condition`
    pub fn path_until(
        &mut self,
        source: G::Vertex,
        condition: impl FnMut(G::Vertex) -> bool,
    ) -> Option<Path<G::Vertex, G::Edge, W>> {
        let state = self.search(source)?;
        let target = state.cheapest_reached(condition)?;
        state.path_to(self.graph, target).ok()
    }

    #[tracing::instrument(level = "debug", skip_all, fields(source = ?source))]
    fn search(&mut self, source: G::Vertex) -> Option<SearchState<G, W>> {
        let graph = self.graph;
        let Some(order) = topological_order(graph) else {
            debug!("graph contains a cycle");
            return None;
        };

        let mut state = SearchState::new(graph, source);
        if !graph.contains_vertex(source) {
            debug!("source is not a vertex");
            return Some(state);
        }
        self.visitor.discover_vertex(source);

        for u in order {
            let d_u = state.distance(u);
            if d_u.is_infinite() {
                continue;
            }
            self.visitor.examine_vertex(u);
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
                } else {
                    self.visitor.edge_not_relaxed(e);
                }
            }
            self.visitor.finish_vertex(u);
        }

        Some(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topological_order_respects_edges() {
        let g = AdjArray::from_edges(6, [(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)]);
        let order = topological_order(&g).unwrap();
        assert_eq!(order.len(), 6);

        let position = |v: Node| order.iter().position(|&u| u == v).unwrap();
        for u in g.vertices() {
            for e in g.out_edges(u) {
                assert!(position(e.0) < position(e.1));
            }
        }
    }

    #[test]
    fn negative_weights_on_dag() {
        // 0 -> 1 (3), 0 -> 2 (1), 2 -> 1 (-5), 1 -> 3 (2)
        let g = AdjArray::from_edges(4, [(0, 1), (0, 2), (2, 1), (1, 3)]);
        let w = |e: Edge| match (e.0, e.1) {
            (0, 1) => 3,
            (0, 2) => 1,
            (2, 1) => -5,
            _ => 2,
        };

        let sssp = DagShortestPaths::new(&g, w).run(0).unwrap();
        assert_eq!(sssp.distance(1), Cost::Finite(-4));
        assert_eq!(sssp.distance(3), Cost::Finite(-2));
        assert_eq!(
            DagShortestPaths::new(&g, w).path(0, 3).unwrap().vertices(),
            &[0, 2, 1, 3]
        );
        assert_eq!(sssp.distance(0), Cost::Finite(0));
    }

    #[test]
    fn refuses_cycles() {
        // the cycle 2 <-> 3 is not reachable from 0 but still refused
        let g = AdjArray::from_edges(4, [(0, 1), (2, 3), (3, 2)]);
        assert!(DagShortestPaths::new(&g, |_| 1i32).run(0).is_none());
        assert!(DagShortestPaths::new(&g, |_| 1i32).path(0, 1).is_none());
    }

    #[test]
    fn vertices_before_source_stay_unreached() {
        let g = AdjArray::from_edges(3, [(0, 1), (1, 2)]);
        let sssp = DagShortestPaths::new(&g, |_| 1i32).run(1).unwrap();
        assert_eq!(sssp.distance(0), Cost::Infinite);
        assert_eq!(sssp.distance(2), Cost::Finite(1));
    }
}
