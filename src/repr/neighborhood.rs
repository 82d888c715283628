use std::{iter::Copied, slice::Iter};

use itertools::Itertools;
use smallvec::{Array, SmallVec};

use super::*;

/// Basic Neighborhood-Impl. using `Vec<Node>`
#[derive(Default, Clone, Debug)]
pub struct ArrNeighborhood(pub Vec<Node>);

impl Neighborhood for ArrNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        if let Some((pos, _)) = self.0.iter().find_position(|&&x| x == u) {
            self.0.swap_remove(pos);
            true
        } else {
            false
        }
    }
}

/// Like `ArrNeighborhood` but uses `SmallVec<[Node; N]>` instead.
/// Prefer this if the graph is known to be sparse.
#[derive(Default, Clone, Debug)]
pub struct SparseNeighborhood<const N: usize = 8>(pub SmallVec<[Node; N]>)
where
    [Node; N]: Array<Item = Node>;

impl<const N: usize> Neighborhood for SparseNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        if let Some((pos, _)) = self.0.iter().find_position(|&&x| x == u) {
            self.0.swap_remove(pos);
            true
        } else {
            false
        }
    }
}

/// A row of an adjacency matrix, one bit per node
#[derive(Default, Clone, Debug)]
pub struct BitNeighborhood {
    words: Vec<u64>,
    cardinality: NumNodes,
}

impl BitNeighborhood {
    #[inline]
    fn position(u: Node) -> (usize, u64) {
        ((u / 64) as usize, 1u64 << (u % 64))
    }
}

impl Neighborhood for BitNeighborhood {
    fn new(n: NumNodes) -> Self {
        Self {
            words: vec![0; n.div_ceil(64) as usize],
            cardinality: 0,
        }
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.cardinality
    }

    type NeighborhoodIter<'a>
        = BitIter<'a>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        BitIter {
            words: &self.words,
            index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    fn has_neighbor(&self, u: Node) -> bool {
        let (word, mask) = Self::position(u);
        self.words.get(word).is_some_and(|w| w & mask != 0)
    }

    fn add_neighbor(&mut self, u: Node) {
        let (word, mask) = Self::position(u);
        if self.words[word] & mask == 0 {
            self.words[word] |= mask;
            self.cardinality += 1;
        }
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        let (word, mask) = Self::position(u);
        let present = self.words[word] & mask != 0;
        if present {
            self.words[word] &= !mask;
            self.cardinality -= 1;
        }
        present
    }
}

/// Iterator over the set bits of a [`BitNeighborhood`] in increasing order
pub struct BitIter<'a> {
    words: &'a [u64],
    index: usize,
    current: u64,
}

impl Iterator for BitIter<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            self.index += 1;
            self.current = *self.words.get(self.index)?;
        }
        let bit = self.current.trailing_zeros();
        self.current &= self.current - 1;
        Some((self.index * 64) as Node + bit)
    }
}
