/*!
# Graph Views

Graphs computed on top of a borrowed graph. None of them copies the underlying storage.

- [`Reversed`] swaps the direction of every edge,
- [`Filtered`] hides vertices and edges; edges into hidden vertices fail their endpoint
  lookup and are thereby skipped by every algorithm,
- [`VirtualSource`] adds one root vertex with an edge to every vertex of the graph.
*/

use crate::{
    ops::*,
    property::{HashPropertyMap, Hidden, PropertyMap},
    utils::DoubleIter,
};

/// A graph with all edges reversed.
///
/// Edge descriptors are shared with the underlying graph: `e` leaves
/// `graph.destination(e)` in the view.
#[derive(Debug)]
pub struct Reversed<'a, G> {
    graph: &'a G,
}

impl<'a, G> Reversed<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }
}

impl<G: GraphBase> GraphBase for Reversed<'_, G> {
    type Vertex = G::Vertex;
    type Edge = G::Edge;
}

impl<G: VertexListGraph> VertexListGraph for Reversed<'_, G> {
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_ {
        self.graph.vertices()
    }

    fn number_of_vertices(&self) -> usize {
        self.graph.number_of_vertices()
    }
}

impl<G: BidirectionalGraph> IncidenceGraph for Reversed<'_, G> {
    fn contains_vertex(&self, u: Self::Vertex) -> bool {
        self.graph.contains_vertex(u)
    }

    fn out_edges(&self, u: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_ {
        self.graph.in_edges(u)
    }

    fn source(&self, e: Self::Edge) -> Option<Self::Vertex> {
        self.graph.destination(e)
    }

    fn destination(&self, e: Self::Edge) -> Option<Self::Vertex> {
        self.graph.source(e)
    }

    fn out_degree(&self, u: Self::Vertex) -> usize {
        self.graph.in_degree(u)
    }
}

impl<G: BidirectionalGraph> BidirectionalGraph for Reversed<'_, G> {
    fn in_edges(&self, u: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_ {
        self.graph.out_edges(u)
    }

    fn in_degree(&self, u: Self::Vertex) -> usize {
        self.graph.out_degree(u)
    }
}

impl<G: PropertyGraph> PropertyGraph for Reversed<'_, G> {
    type VertexMap<T: Clone> = G::VertexMap<T>;
    type EdgeMap<T: Clone> = G::EdgeMap<T>;

    fn vertex_map<T: Clone>(&self, default: T) -> Self::VertexMap<T> {
        self.graph.vertex_map(default)
    }

    fn edge_map<T: Clone>(&self, default: T) -> Self::EdgeMap<T> {
        self.graph.edge_map(default)
    }
}

/// A graph with some vertices and edges hidden.
///
/// Hidden vertices have no outgoing edges and every endpoint lookup touching a hidden
/// vertex or a hidden edge fails.
pub struct Filtered<'a, G: PropertyGraph> {
    graph: &'a G,
    hidden_vertices: G::VertexMap<bool>,
    hidden_edges: G::EdgeMap<bool>,
}

impl<'a, G: PropertyGraph> Filtered<'a, G> {
    /// Creates a view that initially hides nothing
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            hidden_vertices: graph.vertex_property::<Hidden>(),
            hidden_edges: graph.edge_property::<Hidden>(),
        }
    }

    /// Hides `v` and thereby all edges incident to it
    pub fn hide_vertex(&mut self, v: G::Vertex) {
        self.hidden_vertices.set(v, true);
    }

    /// Hides the edge `e`
    pub fn hide_edge(&mut self, e: G::Edge) {
        self.hidden_edges.set(e, true);
    }

    /// Builder-variant of [`Filtered::hide_vertex`]
    pub fn with_vertices_hidden(mut self, vs: impl IntoIterator<Item = G::Vertex>) -> Self {
        for v in vs {
            self.hide_vertex(v);
        }
        self
    }

    /// Builder-variant of [`Filtered::hide_edge`]
    pub fn with_edges_hidden(mut self, es: impl IntoIterator<Item = G::Edge>) -> Self {
        for e in es {
            self.hide_edge(e);
        }
        self
    }

    /// Returns *true* if `v` is hidden
    pub fn is_vertex_hidden(&self, v: G::Vertex) -> bool {
        *self.hidden_vertices.get(v)
    }

    /// Returns *true* if `e` itself is hidden (regardless of its endpoints)
    pub fn is_edge_hidden(&self, e: G::Edge) -> bool {
        *self.hidden_edges.get(e)
    }
}

impl<G: PropertyGraph> GraphBase for Filtered<'_, G> {
    type Vertex = G::Vertex;
    type Edge = G::Edge;
}

impl<G: PropertyGraph + VertexListGraph> VertexListGraph for Filtered<'_, G> {
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_ {
        self.graph.vertices().filter(move |&v| !self.is_vertex_hidden(v))
    }

    fn number_of_vertices(&self) -> usize {
        self.vertices().count()
    }
}

impl<G: PropertyGraph + IncidenceGraph> IncidenceGraph for Filtered<'_, G> {
    fn contains_vertex(&self, u: Self::Vertex) -> bool {
        self.graph.contains_vertex(u) && !self.is_vertex_hidden(u)
    }

    fn out_edges(&self, u: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_ {
        if self.is_vertex_hidden(u) {
            DoubleIter::IterA(std::iter::empty())
        } else {
            DoubleIter::IterB(
                self.graph
                    .out_edges(u)
                    .filter(move |&e| !self.is_edge_hidden(e)),
            )
        }
    }

    fn source(&self, e: Self::Edge) -> Option<Self::Vertex> {
        if self.is_edge_hidden(e) {
            return None;
        }
        self.graph
            .source(e)
            .filter(move |&v| !self.is_vertex_hidden(v))
    }

    fn destination(&self, e: Self::Edge) -> Option<Self::Vertex> {
        if self.is_edge_hidden(e) {
            return None;
        }
        self.graph
            .destination(e)
            .filter(move |&v| !self.is_vertex_hidden(v))
    }
}

impl<G: PropertyGraph + BidirectionalGraph> BidirectionalGraph for Filtered<'_, G> {
    fn in_edges(&self, u: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_ {
        if self.is_vertex_hidden(u) {
            DoubleIter::IterA(std::iter::empty())
        } else {
            DoubleIter::IterB(
                self.graph
                    .in_edges(u)
                    .filter(move |&e| !self.is_edge_hidden(e)),
            )
        }
    }
}

impl<G: PropertyGraph> PropertyGraph for Filtered<'_, G> {
    type VertexMap<T: Clone> = G::VertexMap<T>;
    type EdgeMap<T: Clone> = G::EdgeMap<T>;

    fn vertex_map<T: Clone>(&self, default: T) -> Self::VertexMap<T> {
        self.graph.vertex_map(default)
    }

    fn edge_map<T: Clone>(&self, default: T) -> Self::EdgeMap<T> {
        self.graph.edge_map(default)
    }
}

/// Vertex descriptor of a [`VirtualSource`] view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Augmented<V> {
    /// The added root
    Root,
    /// A vertex of the underlying graph
    Vertex(V),
}

/// Edge descriptor of a [`VirtualSource`] view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AugmentedEdge<V, E> {
    /// The added edge from the root to a vertex
    Root(V),
    /// An edge of the underlying graph
    Edge(E),
}

/// A graph with one additional root vertex and an edge from the root to every vertex.
///
/// ```
/// use wgraphs::{prelude::*, repr::views::*};
///
/// let g = AdjArray::from_edges(2, [(0, 1)]);
/// let view = VirtualSource::new(&g);
///
/// assert_eq!(view.number_of_vertices(), 3);
/// assert_eq!(view.out_degree(Augmented::Root), 2);
/// assert_eq!(
///     view.destination(AugmentedEdge::Root(1)),
///     Some(Augmented::Vertex(1))
/// );
/// ```
#[derive(Debug)]
pub struct VirtualSource<'a, G> {
    graph: &'a G,
}

impl<'a, G> VirtualSource<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }
}

impl<G: GraphBase> GraphBase for VirtualSource<'_, G> {
    type Vertex = Augmented<G::Vertex>;
    type Edge = AugmentedEdge<G::Vertex, G::Edge>;
}

impl<G: VertexListGraph> VertexListGraph for VirtualSource<'_, G> {
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_ {
        std::iter::once(Augmented::Root).chain(self.graph.vertices().map(Augmented::Vertex))
    }

    fn number_of_vertices(&self) -> usize {
        self.graph.number_of_vertices() + 1
    }
}

impl<G: VertexListGraph + IncidenceGraph> IncidenceGraph for VirtualSource<'_, G> {
    fn contains_vertex(&self, u: Self::Vertex) -> bool {
        match u {
            Augmented::Root => true,
            Augmented::Vertex(v) => self.graph.contains_vertex(v),
        }
    }

    fn out_edges(&self, u: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_ {
        match u {
            Augmented::Root => DoubleIter::IterA(self.graph.vertices().map(AugmentedEdge::Root)),
            Augmented::Vertex(v) => DoubleIter::IterB(self.graph.out_edges(v).map(AugmentedEdge::Edge)),
        }
    }

    fn source(&self, e: Self::Edge) -> Option<Self::Vertex> {
        match e {
            AugmentedEdge::Root(_) => Some(Augmented::Root),
            AugmentedEdge::Edge(e) => self.graph.source(e).map(Augmented::Vertex),
        }
    }

    fn destination(&self, e: Self::Edge) -> Option<Self::Vertex> {
        match e {
            AugmentedEdge::Root(v) => self.graph.contains_vertex(v).then_some(Augmented::Vertex(v)),
            AugmentedEdge::Edge(e) => self.graph.destination(e).map(Augmented::Vertex),
        }
    }
}

impl<G: GraphBase> PropertyGraph for VirtualSource<'_, G> {
    type VertexMap<T: Clone> = HashPropertyMap<Self::Vertex, T>;
    type EdgeMap<T: Clone> = HashPropertyMap<Self::Edge, T>;

    fn vertex_map<T: Clone>(&self, default: T) -> Self::VertexMap<T> {
        HashPropertyMap::new(default)
    }

    fn edge_map<T: Clone>(&self, default: T) -> Self::EdgeMap<T> {
        HashPropertyMap::new(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{repr::*, Edge};
    use itertools::Itertools;

    #[test]
    fn reversed_swaps_incidence() {
        let g = AdjArrayIn::from_edges(3, [(0, 1), (0, 2), (1, 2)]);
        let r = Reversed::new(&g);

        assert_eq!(r.out_edges(2).sorted().collect_vec(), vec![Edge(0, 2), Edge(1, 2)]);
        assert_eq!(r.in_edges(0).sorted().collect_vec(), vec![Edge(0, 1), Edge(0, 2)]);
        assert_eq!(r.source(Edge(0, 2)), Some(2));
        assert_eq!(r.destination(Edge(0, 2)), Some(0));
        assert_eq!(r.out_degree(0), 0);
        assert_eq!(r.number_of_vertices(), 3);
        assert!(r.contains_vertex(2));
        assert!(!r.contains_vertex(3));
        assert_eq!(r.out_edges(3).count(), 0);
    }

    #[test]
    fn filtered_hides_vertices_and_edges() {
        let g = AdjArray::from_edges(4, [(0, 1), (1, 2), (0, 3), (3, 2)]);
        let f = Filtered::new(&g)
            .with_vertices_hidden([1])
            .with_edges_hidden([Edge(3, 2)]);

        // edge into a hidden vertex is enumerated but its lookup fails
        assert_eq!(f.out_edges(0).sorted().collect_vec(), vec![Edge(0, 1), Edge(0, 3)]);
        assert_eq!(f.destination(Edge(0, 1)), None);
        assert_eq!(f.destination(Edge(0, 3)), Some(3));

        assert_eq!(f.out_edges(1).count(), 0);
        assert_eq!(f.out_edges(3).count(), 0);
        assert_eq!(f.source(Edge(3, 2)), None);

        assert_eq!(f.vertices().collect_vec(), vec![0, 2, 3]);
        assert!(f.is_vertex_hidden(1));
        assert!(!f.is_edge_hidden(Edge(0, 3)));
        assert!(f.contains_vertex(0));
        assert!(!f.contains_vertex(1));
        assert!(!f.contains_vertex(4));
    }

    #[test]
    fn virtual_source_adds_root() {
        let g = AdjArray::from_edges(3, [(0, 1), (1, 2)]);
        let v = VirtualSource::new(&g);

        assert_eq!(v.vertices().count(), 4);
        assert_eq!(
            v.out_edges(Augmented::Root).collect_vec(),
            vec![AugmentedEdge::Root(0), AugmentedEdge::Root(1), AugmentedEdge::Root(2)]
        );
        assert_eq!(
            v.out_edges(Augmented::Vertex(1)).collect_vec(),
            vec![AugmentedEdge::Edge(Edge(1, 2))]
        );
        assert_eq!(v.source(AugmentedEdge::Edge(Edge(0, 1))), Some(Augmented::Vertex(0)));
        assert_eq!(v.source(AugmentedEdge::Root(2)), Some(Augmented::Root));
        assert_eq!(v.destination(AugmentedEdge::Root(3)), None);
        assert!(v.contains_vertex(Augmented::Root));
        assert!(!v.contains_vertex(Augmented::Vertex(3)));

        let mut dist = v.vertex_map(0i32);
        dist.set(Augmented::Root, 4);
        assert_eq!(*dist.get(Augmented::Root), 4);
        assert_eq!(*dist.get(Augmented::Vertex(0)), 0);
    }
}
