/*!
# Node Representation

The built-in representations in [`repr`](crate::repr) number their vertices `0..n` and use
`Node = u32` as vertex descriptor. Algorithms never rely on this: they only see the
descriptor types declared through [`GraphBase`](crate::ops::GraphBase).
*/

/// Nodes of the built-in representations can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a built-in graph
pub type NumNodes = Node;
