/*!
# Yen's k Shortest Loopless Paths

Starting from a shortest path, every further path deviates from an already accepted one at
some *spur* vertex. For each prefix (the *root*) of the last accepted path, the spur path is
recomputed with Dijkstra on a [`Filtered`] view in which

- the root's vertices (except the spur vertex itself) are hidden, so the result stays
  loopless, and
- every edge leaving the spur vertex that continues an accepted path sharing the root is
  hidden, so no accepted path is produced again.

Root and spur path form a candidate; each round the cheapest candidate is accepted.

```
use wgraphs::{prelude::*, algo::*};

// two routes 0 -> 1 -> 3 and 0 -> 2 -> 3 of equal cost
let g = AdjArray::from_edges(4, [(0, 1), (1, 3), (0, 2), (2, 3)]);
let paths = Yen::new(&g, |_| 1u32).run(0, 3, 5);

assert_eq!(paths.len(), 2);
assert!(paths.iter().all(|p| p.cost() == 2));
```
*/

use std::cmp::Ordering;

use super::*;

/// Enumerates up to `k` loopless paths in order of non-decreasing cost
pub struct Yen<'a, G, W, F, Vis = ()> {
    graph: &'a G,
    weight: F,
    visitor: Vis,
    _weight: PhantomData<fn() -> W>,
}

impl<'a, G, W, F> Yen<'a, G, W, F>
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
            _weight: PhantomData,
        }
    }
}

impl<'a, G, W, F, Vis> Yen<'a, G, W, F, Vis>
where
    G: IncidenceGraph + PropertyGraph,
    W: Weight,
    F: FnMut(G::Edge) -> W,
    Vis: Visitor<G::Vertex, G::Edge>,
{
    /// Replaces the visitor; it observes every inner Dijkstra run
    pub fn with_visitor<V2>(self, visitor: V2) -> Yen<'a, G, W, F, V2>
    where
        V2: Visitor<G::Vertex, G::Edge>,
    {
        Yen {
            graph: self.graph,
            weight: self.weight,
            visitor,
            _weight: PhantomData,
        }
    }

    /// Returns up to `k` distinct loopless paths from `source` to `destination`, cheapest
    /// first. Ties are broken in favor of fewer edges.
    ///
    /// `k == 0` and `source == destination` yield no paths.
    #[tracing::instrument(level = "debug", skip_all, fields(source = ?source, destination = ?destination, k))]
    pub fn run(
        &mut self,
        source: G::Vertex,
        destination: G::Vertex,
        k: usize,
    ) -> Vec<Path<G::Vertex, G::Edge, W>> {
        if k == 0 || source == destination {
            return Vec::new();
        }

        let graph = self.graph;
        let Some(first) = Dijkstra::new(graph, &mut self.weight)
            .with_visitor(&mut self.visitor)
            .path(source, destination)
        else {
            return Vec::new();
        };

        let mut seen: FxHashSet<Vec<G::Edge>> = FxHashSet::default();
        seen.insert(first.edges().to_vec());
        let mut accepted = vec![first];
        let mut candidates: Vec<Path<G::Vertex, G::Edge, W>> = Vec::new();

        while accepted.len() < k {
            let last = &accepted[accepted.len() - 1];

            for i in 0..last.len() {
                let spur = last.vertices()[i];
                let root = last.prefix(i, &mut self.weight);

                let mut view = Filtered::new(graph)
                    .with_vertices_hidden(root.vertices()[..i].iter().copied());
                for p in &accepted {
                    if p.len() > i && p.vertices()[..=i] == *root.vertices() {
                        view.hide_edge(p.edges()[i]);
                    }
                }

                let Some(spur_path) = Dijkstra::new(&view, &mut self.weight)
                    .with_visitor(&mut self.visitor)
                    .path(spur, destination)
                else {
                    continue;
                };
                let Ok(candidate) = root.concat(&spur_path) else {
                    continue;
                };

                if seen.insert(candidate.edges().to_vec()) {
                    trace!(spur = ?spur, cost = ?candidate.cost(), "new candidate");
                    candidates.push(candidate);
                }
            }

            let Some(best) = candidates.iter().position_min_by(|a, b| {
                a.cost()
                    .partial_cmp(&b.cost())
                    .unwrap_or(Ordering::Equal)
                    .then(a.len().cmp(&b.len()))
            }) else {
                break;
            };
            accepted.push(candidates.swap_remove(best));
        }

        debug!(found = accepted.len(), pending = candidates.len(), "enumeration finished");
        accepted
    }
}
