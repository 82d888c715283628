/*!
# Result Structures

Every run ends in an immutable snapshot that owns its data and no longer borrows the
graph:

- [`SingleSourceShortestPaths`] holds the distances and predecessor edges from one source,
- [`AllPairsShortestPaths`] holds one single-source tree per source vertex.

Both answer distance queries with a [`Cost`] (unreached vertices read `Infinite`) and
rebuild paths on demand. If a negative cycle was detected, distances are undefined and
path reconstruction refuses.
*/

use std::{fmt::Debug, hash::Hash};

use fxhash::FxHashMap;

use crate::{
    cost::{Cost, Weight},
    path::{reconstruct, Path, PathError},
};

/// Shortest-path tree rooted at one source
#[derive(Debug, Clone)]
pub struct SingleSourceShortestPaths<V, E, W> {
    source: V,
    distances: FxHashMap<V, W>,
    predecessors: FxHashMap<V, (E, V)>,
    has_negative_cycle: bool,
}

impl<V, E, W> SingleSourceShortestPaths<V, E, W>
where
    V: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Debug,
    W: Weight,
{
    pub(crate) fn new(
        source: V,
        distances: FxHashMap<V, W>,
        predecessors: FxHashMap<V, (E, V)>,
        has_negative_cycle: bool,
    ) -> Self {
        Self {
            source,
            distances,
            predecessors,
            has_negative_cycle,
        }
    }

    /// Returns the source of all paths
    pub fn source(&self) -> V {
        self.source
    }

    /// Returns the distance to `v`, `Infinite` if `v` was not reached
    pub fn distance(&self, v: V) -> Cost<W> {
        self.distances.get(&v).copied().into()
    }

    /// Returns the edge through which `v` was reached last
    pub fn predecessor_edge(&self, v: V) -> Option<E> {
        self.predecessors.get(&v).map(|&(e, _)| e)
    }

    /// Returns the vertex from which `v` was reached last
    pub fn predecessor(&self, v: V) -> Option<V> {
        self.predecessors.get(&v).map(|&(_, u)| u)
    }

    /// Returns *true* if `v` received a finite distance
    pub fn is_reachable(&self, v: V) -> bool {
        self.distances.contains_key(&v)
    }

    /// Returns all vertices with a finite distance (in arbitrary order)
    pub fn reachable(&self) -> impl Iterator<Item = (V, W)> + '_ {
        self.distances.iter().map(|(&v, &w)| (v, w))
    }

    /// Returns the number of reached vertices, including the source
    pub fn number_of_reachable(&self) -> usize {
        self.distances.len()
    }

    /// Returns *true* if a negative cycle reachable from the source was detected
    pub fn has_negative_cycle(&self) -> bool {
        self.has_negative_cycle
    }

    /// Rebuilds the path from the source to `destination`
    pub fn try_path_to(&self, destination: V) -> Result<Path<V, E, W>, PathError> {
        reconstruct(
            self.source,
            destination,
            self.distance(destination),
            self.has_negative_cycle,
            self.distances.len(),
            |v| self.predecessors.get(&v).copied(),
        )
    }

    /// Rebuilds the path from the source to `destination` if there is one
    pub fn path_to(&self, destination: V) -> Option<Path<V, E, W>> {
        self.try_path_to(destination).ok()
    }

    /// Applies `f(v, w)` to every distance, keeping the tree unchanged
    pub(crate) fn map_distances(mut self, mut f: impl FnMut(V, W) -> W) -> Self {
        for (&v, w) in self.distances.iter_mut() {
            *w = f(v, *w);
        }
        self
    }
}

/// One shortest-path tree per source vertex
#[derive(Debug, Clone)]
pub struct AllPairsShortestPaths<V, E, W> {
    trees: FxHashMap<V, SingleSourceShortestPaths<V, E, W>>,
    has_negative_cycle: bool,
}

impl<V, E, W> AllPairsShortestPaths<V, E, W>
where
    V: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Debug,
    W: Weight,
{
    pub(crate) fn new(trees: FxHashMap<V, SingleSourceShortestPaths<V, E, W>>) -> Self {
        Self {
            trees,
            has_negative_cycle: false,
        }
    }

    /// Result of a computation aborted by a negative cycle
    pub(crate) fn aborted() -> Self {
        Self {
            trees: FxHashMap::default(),
            has_negative_cycle: true,
        }
    }

    /// Returns *true* if the graph contains a negative cycle; no distances are available then
    pub fn has_negative_cycle(&self) -> bool {
        self.has_negative_cycle
    }

    /// Returns the distance from `source` to `destination`
    pub fn distance(&self, source: V, destination: V) -> Cost<W> {
        self.trees
            .get(&source)
            .map_or(Cost::Infinite, |t| t.distance(destination))
    }

    /// Returns the single-source tree of `source`
    pub fn from(&self, source: V) -> Option<&SingleSourceShortestPaths<V, E, W>> {
        self.trees.get(&source)
    }

    /// Returns all sources with a computed tree (in arbitrary order)
    pub fn sources(&self) -> impl Iterator<Item = V> + '_ {
        self.trees.keys().copied()
    }

    /// Rebuilds the path from `source` to `destination`
    pub fn try_path(&self, source: V, destination: V) -> Result<Path<V, E, W>, PathError> {
        if self.has_negative_cycle {
            return Err(PathError::NegativeCycle);
        }
        self.trees
            .get(&source)
            .ok_or(PathError::Unreachable)?
            .try_path_to(destination)
    }

    /// Rebuilds the path from `source` to `destination` if there is one
    pub fn path(&self, source: V, destination: V) -> Option<Path<V, E, W>> {
        self.try_path(source, destination).ok()
    }
}
