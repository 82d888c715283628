/*!
# All Shortest Paths

Enumerates every minimum-cost path between two vertices. A Dijkstra run records, per vertex,
*all* incoming edges that realize its distance (a tying relaxation appends instead of being
discarded). Once every vertex up to the destination's distance is settled, the recorded
predecessor sets are backtracked depth-first from the destination.

With zero-weight cycles, only loopless paths are reported.
*/

use super::*;

/// Backtracking enumeration of co-optimal paths
pub struct AllShortestPaths<'a, G, W, F, Vis = ()> {
    graph: &'a G,
    weight: F,
    visitor: Vis,
    max_paths: usize,
    _weight: PhantomData<fn() -> W>,
}

impl<'a, G, W, F> AllShortestPaths<'a, G, W, F>
where
    G: IncidenceGraph + PropertyGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
{
    pub fn new(graph: &'a G, weight: F) -> Self {
        Self {
            graph,
            weight,
            visitor: (),
            max_paths: usize::MAX,
            _weight: PhantomData,
        }
    }
}

impl<'a, G, W, F, Vis> AllShortestPaths<'a, G, W, F, Vis>
where
    G: IncidenceGraph + PropertyGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
    Vis: Visitor<G::Vertex, G::Edge>,
{
    pub fn with_visitor<V2>(self, visitor: V2) -> AllShortestPaths<'a, G, W, F, V2>
    where
        V2: Visitor<G::Vertex, G::Edge>,
    {
        AllShortestPaths {
            graph: self.graph,
            weight: self.weight,
            visitor,
            max_paths: self.max_paths,
            _weight: PhantomData,
        }
    }

    /// Stops the enumeration after `n` paths (default: unlimited)
    pub fn max_paths(mut self, n: usize) -> Self {
        self.set_max_paths(n);
        self
    }

    pub fn set_max_paths(&mut self, n: usize) {
        self.max_paths = n;
    }

    /// Returns all minimum-cost paths from `source` to `destination`, each exactly once
    #[tracing::instrument(level = "debug", skip_all, fields(source = ?source, destination = ?destination))]
    pub fn run(
        &mut self,
        source: G::Vertex,
        destination: G::Vertex,
    ) -> Vec<Path<G::Vertex, G::Edge, W>> {
        let graph = self.graph;
        if self.max_paths == 0
            || !graph.contains_vertex(source)
            || !graph.contains_vertex(destination)
        {
            return Vec::new();
        }
        if source == destination {
            return vec![Path::trivial(source)];
        }

        let Some((distances, predecessors)) = self.search(source, destination) else {
            return Vec::new();
        };
        let paths = self.backtrack(source, destination, &distances, &predecessors);
        debug!(paths = paths.len(), "enumeration finished");
        paths
    }

    /// Dijkstra keeping every co-optimal incoming edge.
    /// Returns `None` if `destination` is unreachable.
    #[allow(clippy::type_complexity)]
    fn search(
        &mut self,
        source: G::Vertex,
        destination: G::Vertex,
    ) -> Option<(G::VertexMap<Cost<W>>, G::VertexMap<SmallVec<[G::Edge; 2]>>)> {
        let graph = self.graph;
        let mut distances = graph.vertex_property::<Distance<W>>();
        let mut predecessors = graph.vertex_property::<Predecessors<G::Edge>>();
        let mut color = graph.vertex_property::<Color>();
        let mut queue = DefaultQueue::default();

        distances.set(source, Cost::zero());
        queue.enqueue(PriorityItem::new(source, Cost::zero()));
        self.visitor.discover_vertex(source);

        while let Some(PriorityItem { vertex: u, cost }) = queue.dequeue() {
            if *color.get(u) == VertexColor::Black || cost != *distances.get(u) {
                continue;
            }
            // vertices beyond the destination cannot lie on an optimal path to it
            if cost > *distances.get(destination) {
                break;
            }
            color.set(u, VertexColor::Black);
            self.visitor.examine_vertex(u);

            for e in graph.out_edges(u) {
                let Some(v) = graph.destination(e) else {
                    continue;
                };
                self.visitor.examine_edge(e);

                let candidate = cost + (self.weight)(e);
                let current = *distances.get(v);
                if candidate < current {
                    if current.is_infinite() {
                        self.visitor.discover_vertex(v);
                    }
                    distances.set(v, candidate);
                    let preds = predecessors.get_mut(v);
                    preds.clear();
                    preds.push(e);
                    self.visitor.edge_relaxed(e);
                    queue.enqueue(PriorityItem::new(v, candidate));
                } else if candidate == current {
                    predecessors.get_mut(v).push(e);
                    self.visitor.edge_tied(e);
                } else {
                    self.visitor.edge_not_relaxed(e);
                }
            }

            self.visitor.finish_vertex(u);
        }

        if distances.get(destination).is_infinite() {
            return None;
        }
        Some((distances, predecessors))
    }

    /// Depth-first enumeration of the predecessor sets from `destination` back to `source`
    fn backtrack(
        &mut self,
        source: G::Vertex,
        destination: G::Vertex,
        distances: &G::VertexMap<Cost<W>>,
        predecessors: &G::VertexMap<SmallVec<[G::Edge; 2]>>,
    ) -> Vec<Path<G::Vertex, G::Edge, W>> {
        let graph = self.graph;
        let Cost::Finite(total) = *distances.get(destination) else {
            return Vec::new();
        };

        let mut paths = Vec::new();
        // (vertex, index of the next predecessor edge to try)
        let mut stack = vec![(destination, 0usize)];
        let mut edges: Vec<G::Edge> = Vec::new();
        let mut on_path = FxHashSet::default();
        on_path.insert(destination);

        while let Some((v, next)) = stack.last_mut() {
            let v = *v;
            if v == source {
                let mut vertices = stack.iter().map(|&(u, _)| u).collect_vec();
                vertices.reverse();
                let mut forward = edges.clone();
                forward.reverse();
                if let Ok(p) = Path::from_parts(vertices, forward, total) {
                    paths.push(p);
                    if paths.len() >= self.max_paths {
                        break;
                    }
                }
                stack.pop();
                on_path.remove(&v);
                edges.pop();
                continue;
            }

            let preds = predecessors.get(v);
            let Some(&e) = preds.get(*next) else {
                stack.pop();
                on_path.remove(&v);
                edges.pop();
                continue;
            };
            *next += 1;

            let Some(u) = graph.source(e) else {
                continue;
            };
            if on_path.insert(u) {
                edges.push(e);
                stack.push((u, 0));
            }
        }

        paths
    }
}
