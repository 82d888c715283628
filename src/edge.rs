use std::fmt::{Debug, Display};

use crate::Node;

/// An edge of a built-in representation is defined by its two endpoints.
/// The edge is directed: it leaves `.0` and enters `.1`.
///
/// Since the built-in representations do not store parallel edges, the endpoints identify
/// the edge uniquely and `Edge` serves as edge descriptor.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns the node the edge leaves
    pub fn tail(&self) -> Node {
        self.0
    }

    /// Returns the node the edge enters
    pub fn head(&self) -> Node {
        self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<(&Node, &Node)> for Edge {
    fn from(value: (&Node, &Node)) -> Self {
        Edge(*value.0, *value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_and_reverse() {
        let e = Edge(3, 7);
        assert_eq!(e.tail(), 3);
        assert_eq!(e.head(), 7);
        assert_eq!(e.reverse(), Edge(7, 3));
        assert!(!e.is_loop());
        assert!(Edge(2, 2).is_loop());
        assert_eq!(format!("{e:?}"), "(3,7)");
        assert_eq!(Edge::from((1, 2)), Edge(1, 2));
    }
}
