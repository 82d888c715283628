/*!
`wgraphs` is a library of **w**eighted shortest-path algorithms over abstract directed graphs.

Algorithms are written against a small set of capability traits (see [`ops`]) instead of a
concrete graph type, so the same Dijkstra runs on an adjacency array, a bit matrix, a
filtered view of either or a graph that is computed on the fly.

# Concepts

- **Descriptors**: a graph declares opaque `Vertex` and `Edge` handles. The built-in
  representations use `u32` nodes in `0..n` and `Edge(u, v)`.
- **Weights** are never stored on edges. Every algorithm takes a closure `FnMut(Edge) -> W`,
  where `W` is any numeric [`Weight`](cost::Weight) type.
- **Costs** are [`Cost<W>`](cost::Cost): either `Finite(w)` or `Infinite` for unreachable.
- **Property maps** hold per-run state and are created by the graph itself
  ([`property`]).
- **Visitors** observe a run through event hooks ([`visitor`]).
- **Results** are immutable snapshots that rebuild [`Path`](path::Path)s on demand ([`result`]).

# Algorithms

| Problem | Algorithm |
|---|---|
| single source, non-negative weights | [`Dijkstra`](algo::Dijkstra), [`AStar`](algo::AStar) |
| single source, arbitrary weights | [`BellmanFord`](algo::BellmanFord), [`Spfa`](algo::Spfa), [`DagShortestPaths`](algo::DagShortestPaths) |
| all pairs | [`FloydWarshall`](algo::FloydWarshall), [`Johnson`](algo::Johnson) |
| single pair | [`BidirectionalDijkstra`](algo::BidirectionalDijkstra) |
| k shortest loopless paths | [`Yen`](algo::Yen) |
| all co-optimal paths | [`AllShortestPaths`](algo::AllShortestPaths) |

All algorithms are configurable structs following the *Builder* pattern. The common
entry points are also available as methods on every graph through
[`ShortestPaths`](algo::ShortestPaths).

# Usage

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices.

```
use wgraphs::{prelude::*, algo::*};

//   0 --1--> 1 --1--> 2
//    \______4_______/
let g = AdjArray::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
let weight = |e: Edge| if e == Edge(0, 2) { 4u32 } else { 1 };

let path = g.shortest_path(0, 2, weight).unwrap();
assert_eq!(path.vertices(), &[0, 1, 2]);
assert_eq!(path.cost(), 2);
```
*/

pub mod algo;
pub mod cost;
pub mod edge;
pub mod node;
pub mod ops;
pub mod path;
pub mod property;
pub mod queue;
pub mod repr;
pub mod result;
pub(crate) mod testing;
pub mod utils;
pub mod visitor;

pub use edge::*;
pub use node::*;

/// `wgraphs::prelude` includes definitions for nodes and edges, all graph capability traits,
/// costs and paths as well as all implemented representations.
pub mod prelude {
    pub use super::{
        cost::{Cost, Weight},
        edge::*,
        node::*,
        ops::*,
        path::Path,
        property::PropertyMap,
        repr::*,
    };
}
