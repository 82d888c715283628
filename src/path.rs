/*!
# Paths

A [`Path`] is an ordered, non-empty vertex sequence together with the edges connecting
consecutive vertices and its total cost. A trivial path consists of a single vertex, no
edges and zero cost.

Paths are produced by the algorithms' result structures through predecessor walks and
can be validated against a graph with [`Path::from_edges`].
*/

use std::fmt::Debug;

use thiserror::Error;

use crate::{cost::Cost, cost::Weight, ops::IncidenceGraph};

/// Reasons why no path can be produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("destination is not reachable from the source")]
    Unreachable,
    #[error("a negative cycle is reachable from the source; distances are undefined")]
    NegativeCycle,
    #[error("the predecessor chain does not lead back to the source")]
    Disconnected,
    #[error("a path with {vertices} vertices cannot have {edges} edges")]
    Malformed { vertices: usize, edges: usize },
    #[error("edge {index} does not continue the path")]
    NotContiguous { index: usize },
}

/// A walk through a graph with its total cost
#[derive(Debug, Clone, PartialEq)]
pub struct Path<V, E, W> {
    vertices: Vec<V>,
    edges: Vec<E>,
    cost: W,
}

impl<V, E, W> Path<V, E, W>
where
    V: Copy + Eq + Debug,
    E: Copy + Eq + Debug,
    W: Weight,
{
    /// The path consisting of `v` only
    pub fn trivial(v: V) -> Self {
        Self {
            vertices: vec![v],
            edges: Vec::new(),
            cost: W::zero(),
        }
    }

    /// Assembles a path from its parts after checking the length invariant
    pub fn from_parts(vertices: Vec<V>, edges: Vec<E>, cost: W) -> Result<Self, PathError> {
        if vertices.is_empty() || edges.len() + 1 != vertices.len() {
            return Err(PathError::Malformed {
                vertices: vertices.len(),
                edges: edges.len(),
            });
        }
        Ok(Self {
            vertices,
            edges,
            cost,
        })
    }

    /// Builds the path starting at `source` and following `edges` in `graph`.
    ///
    /// Fails if an edge does not leave the current vertex or an endpoint lookup fails.
    ///
    /// ```
    /// use wgraphs::{prelude::*, path::*};
    ///
    /// let g = AdjArray::from_edges(3, [(0, 1), (1, 2)]);
    /// let p = Path::from_edges(&g, 0, vec![Edge(0, 1), Edge(1, 2)], |_| 2u32).unwrap();
    /// assert_eq!(p.vertices(), &[0, 1, 2]);
    /// assert_eq!(p.cost(), 4);
    ///
    /// assert_eq!(
    ///     Path::from_edges(&g, 0, vec![Edge(1, 2)], |_| 2u32),
    ///     Err(PathError::NotContiguous { index: 0 })
    /// );
    /// ```
    pub fn from_edges<G, F>(
        graph: &G,
        source: V,
        edges: Vec<E>,
        mut weight: F,
    ) -> Result<Self, PathError>
    where
        G: IncidenceGraph<Vertex = V, Edge = E>,
        F: FnMut(E) -> W,
    {
        let mut vertices = Vec::with_capacity(edges.len() + 1);
        vertices.push(source);
        let mut cost = W::zero();
        for (index, &e) in edges.iter().enumerate() {
            match graph.endpoints(e) {
                Some((u, v)) if Some(&u) == vertices.last() => {
                    vertices.push(v);
                    cost = cost + weight(e);
                }
                _ => return Err(PathError::NotContiguous { index }),
            }
        }
        Ok(Self {
            vertices,
            edges,
            cost,
        })
    }

    /// Returns the first vertex
    pub fn source(&self) -> V {
        self.vertices[0]
    }

    /// Returns the last vertex
    pub fn destination(&self) -> V {
        self.vertices[self.vertices.len() - 1]
    }

    /// Returns the number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns *true* if the path has no edges
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    pub fn cost(&self) -> W {
        self.cost
    }

    /// Returns *true* if `v` lies on the path
    pub fn contains(&self, v: V) -> bool {
        self.vertices.contains(&v)
    }

    /// Returns the first `num_edges` edges as a path, recomputing its cost with `weight`.
    /// ** Panics if `num_edges > self.len()` **
    pub fn prefix(&self, num_edges: usize, weight: impl FnMut(E) -> W) -> Self {
        let edges = self.edges[..num_edges].to_vec();
        let cost = edges
            .iter()
            .copied()
            .map(weight)
            .fold(W::zero(), |acc, w| acc + w);
        Self {
            vertices: self.vertices[..=num_edges].to_vec(),
            edges,
            cost,
        }
    }

    /// Appends `other`, which must start where `self` ends
    pub fn concat(mut self, other: &Self) -> Result<Self, PathError> {
        if other.source() != self.destination() {
            return Err(PathError::NotContiguous {
                index: self.edges.len(),
            });
        }
        self.vertices.extend_from_slice(&other.vertices[1..]);
        self.edges.extend_from_slice(&other.edges);
        self.cost = self.cost + other.cost;
        Ok(self)
    }

    /// Returns *true* if no vertex occurs twice
    pub fn is_loopless(&self) -> bool
    where
        V: std::hash::Hash,
    {
        let mut seen = fxhash::FxHashSet::default();
        self.vertices.iter().all(|v| seen.insert(*v))
    }
}

/// Walks predecessor links from `destination` back to `source`.
///
/// `predecessor(v)` returns the edge into `v` together with its source. The walk is cut
/// off after `max_steps` edges so that inconsistent predecessor data cannot loop forever.
pub(crate) fn reconstruct<V, E, W>(
    source: V,
    destination: V,
    distance: Cost<W>,
    has_negative_cycle: bool,
    max_steps: usize,
    mut predecessor: impl FnMut(V) -> Option<(E, V)>,
) -> Result<Path<V, E, W>, PathError>
where
    V: Copy + Eq + Debug,
    E: Copy + Eq + Debug,
    W: Weight,
{
    if has_negative_cycle {
        return Err(PathError::NegativeCycle);
    }
    let cost = distance.finite().ok_or(PathError::Unreachable)?;

    let mut vertices = vec![destination];
    let mut edges = Vec::new();
    let mut current = destination;
    while current != source {
        if edges.len() >= max_steps {
            return Err(PathError::Disconnected);
        }
        let (e, u) = predecessor(current).ok_or(PathError::Disconnected)?;
        edges.push(e);
        vertices.push(u);
        current = u;
    }

    vertices.reverse();
    edges.reverse();
    Ok(Path {
        vertices,
        edges,
        cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn trivial_path() {
        let p: Path<u32, Edge, i32> = Path::trivial(5);
        assert_eq!(p.source(), 5);
        assert_eq!(p.destination(), 5);
        assert!(p.is_trivial());
        assert_eq!(p.len(), 0);
        assert_eq!(p.cost(), 0);
    }

    #[test]
    fn from_parts_checks_lengths() {
        let ok = Path::from_parts(vec![0u32, 1], vec![Edge(0, 1)], 3i32);
        assert!(ok.is_ok());
        assert_eq!(
            Path::<u32, Edge, i32>::from_parts(vec![], vec![], 0),
            Err(PathError::Malformed {
                vertices: 0,
                edges: 0
            })
        );
        assert_eq!(
            Path::from_parts(vec![0u32], vec![Edge(0, 1)], 1i32),
            Err(PathError::Malformed {
                vertices: 1,
                edges: 1
            })
        );
    }

    #[test]
    fn prefix_and_concat() {
        let g = AdjArray::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        let w = |e: Edge| (e.0 + 1) as i32;
        let p = Path::from_edges(&g, 0, vec![Edge(0, 1), Edge(1, 2), Edge(2, 3)], w).unwrap();
        assert_eq!(p.cost(), 6);

        let head = p.prefix(1, w);
        assert_eq!(head.vertices(), &[0, 1]);
        assert_eq!(head.cost(), 1);

        let tail = Path::from_edges(&g, 1, vec![Edge(1, 2), Edge(2, 3)], w).unwrap();
        let joined = head.clone().concat(&tail).unwrap();
        assert_eq!(joined, p);

        assert!(tail.concat(&head).is_err());
        assert!(p.is_loopless());
        assert!(p.contains(2));
        assert!(!p.contains(7));
    }

    #[test]
    fn from_edges_rejects_missing_edges() {
        let g = AdjArray::from_edges(3, [(0, 1), (1, 2)]);
        let w = |_| 1u32;

        assert_eq!(
            Path::from_edges(&g, 0, vec![Edge(0, 2)], w),
            Err(PathError::NotContiguous { index: 0 })
        );
        assert_eq!(
            Path::from_edges(&g, 0, vec![Edge(0, 1), Edge(1, 0)], w),
            Err(PathError::NotContiguous { index: 1 })
        );
        assert_eq!(
            Path::from_edges(&g, 0, vec![Edge(0, 1), Edge(1, 2)], w).map(|p| p.cost()),
            Ok(2)
        );
    }

    #[test]
    fn reconstruct_reports_reasons() {
        let pred = |v: u32| (v > 0 && v < 3).then(|| (Edge(v - 1, v), v - 1));

        let p = reconstruct(0, 2, Cost::Finite(2), false, 10, pred).unwrap();
        assert_eq!(p.vertices(), &[0, 1, 2]);
        assert_eq!(p.edges(), &[Edge(0, 1), Edge(1, 2)]);

        assert_eq!(
            reconstruct(0, 2, Cost::<i32>::Infinite, false, 10, pred),
            Err(PathError::Unreachable)
        );
        assert_eq!(
            reconstruct(0, 2, Cost::Finite(2), true, 10, pred),
            Err(PathError::NegativeCycle)
        );
        assert_eq!(
            reconstruct(0, 5, Cost::Finite(2), false, 10, pred),
            Err(PathError::Disconnected)
        );

        // a predecessor cycle 1 <-> 2 that never reaches 0
        let cyclic = |v: u32| Some((Edge(3 - v, v), 3 - v));
        assert_eq!(
            reconstruct(0, 1, Cost::Finite(1), false, 4, cyclic),
            Err(PathError::Disconnected)
        );
    }
}
