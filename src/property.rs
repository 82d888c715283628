/*!
# Property Maps

Algorithms keep their per-vertex and per-edge state (tentative distances, predecessor
edges, colors, ...) in property maps obtained from the graph through
[`PropertyGraph`](crate::ops::PropertyGraph). A map is created fresh for every run and
reads as its default for every key that was never written, so "never touched" is never
an error.

Two storages are provided:
- [`DenseMap`] is backed by a vector and indexed by integer descriptors,
- [`HashPropertyMap`] is backed by an `FxHashMap` and accepts any hashable descriptor.

Property tokens ([`Distance`], [`PredecessorEdge`], ...) bundle a value type with its
static default, so `graph.vertex_property::<Distance<W>>()` yields a map reading `Infinite`
everywhere.
*/

use std::{hash::Hash, marker::PhantomData};

use fxhash::FxHashMap;
use num::ToPrimitive;
use smallvec::SmallVec;

use crate::cost::Cost;

/// Per-run mapping from descriptors to values with a default for unset keys
pub trait PropertyMap<K, T> {
    /// Returns the value of `key`, or the default if it was never written
    fn get(&self, key: K) -> &T;

    /// Returns a mutable reference to the value of `key`, materializing the default if needed
    fn get_mut(&mut self, key: K) -> &mut T;

    /// Stores `value` for `key` and returns the previous value
    fn set(&mut self, key: K, value: T) -> T {
        std::mem::replace(self.get_mut(key), value)
    }
}

/// A map backed by a vector; keys are converted to indices via [`ToPrimitive`].
///
/// Reads beyond the allocated range return the default; writes grow the vector.
#[derive(Debug, Clone)]
pub struct DenseMap<T> {
    data: Vec<T>,
    default: T,
}

impl<T: Clone> DenseMap<T> {
    /// Creates a map with room for `n` keys, all reading as `default`
    pub fn new(n: usize, default: T) -> Self {
        Self {
            data: vec![default.clone(); n],
            default,
        }
    }

    /// Returns the number of allocated slots
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns *true* if no slot is allocated
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[inline]
fn index_of<K: ToPrimitive>(key: K) -> usize {
    // descriptors beyond usize cannot be allocated anyway
    key.to_usize().unwrap_or(usize::MAX)
}

impl<K, T> PropertyMap<K, T> for DenseMap<T>
where
    K: ToPrimitive + Copy,
    T: Clone,
{
    fn get(&self, key: K) -> &T {
        self.data.get(index_of(key)).unwrap_or(&self.default)
    }

    fn get_mut(&mut self, key: K) -> &mut T {
        let idx = index_of(key);
        if idx >= self.data.len() {
            self.data.resize(idx + 1, self.default.clone());
        }
        &mut self.data[idx]
    }
}

/// A map backed by an [`FxHashMap`]; only written keys occupy memory
#[derive(Debug, Clone)]
pub struct HashPropertyMap<K, T> {
    data: FxHashMap<K, T>,
    default: T,
}

impl<K, T> HashPropertyMap<K, T> {
    /// Creates an empty map in which every key reads as `default`
    pub fn new(default: T) -> Self {
        Self {
            data: FxHashMap::default(),
            default,
        }
    }

    /// Returns the number of written keys
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns *true* if no key was written
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<K, T> PropertyMap<K, T> for HashPropertyMap<K, T>
where
    K: Eq + Hash,
    T: Clone,
{
    fn get(&self, key: K) -> &T {
        self.data.get(&key).unwrap_or(&self.default)
    }

    fn get_mut(&mut self, key: K) -> &mut T {
        let default = &self.default;
        self.data.entry(key).or_insert_with(|| default.clone())
    }
}

/// A named per-run property with a static default
pub trait Property {
    type Value: Clone;

    /// The value every key reads as before it is written
    fn default_value() -> Self::Value;
}

macro_rules! property_token {
    ($(#[$doc:meta] $name:ident $(<$T:ident>)? : $value:ty = $default:expr;)*) => {
        $(
            #[$doc]
            pub struct $name $(<$T>)? $((PhantomData<fn() -> $T>))?;

            impl $(<$T: Clone>)? Property for $name $(<$T>)? {
                type Value = $value;

                fn default_value() -> Self::Value {
                    $default
                }
            }
        )*
    };
}

/// Progress of a vertex in a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexColor {
    /// Not yet discovered
    #[default]
    White,
    /// Discovered but not finished
    Gray,
    /// Finished
    Black,
}

property_token!(
    /// Tentative or final distance from the source
    Distance<W>: Cost<W> = Cost::Infinite;
    /// The edge through which a vertex was last improved
    PredecessorEdge<E>: Option<E> = None;
    /// All co-optimal incoming edges of a vertex
    Predecessors<E>: SmallVec<[E; 2]> = SmallVec::new();
    /// Search progress of a vertex
    Color: VertexColor = VertexColor::White;
    /// Number of times a vertex entered a queue
    EnqueueCount: usize = 0;
    /// Whether a vertex or edge is hidden from a filtered view
    Hidden: bool = false;
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_map_defaults_and_growth() {
        let mut map = DenseMap::new(3, Cost::<u32>::Infinite);
        assert_eq!(*map.get(1u32), Cost::Infinite);
        assert_eq!(*map.get(10u32), Cost::Infinite);

        assert_eq!(map.set(1u32, Cost::Finite(4)), Cost::Infinite);
        assert_eq!(*map.get(1u32), Cost::Finite(4));

        *map.get_mut(7u32) = Cost::Finite(2);
        assert_eq!(map.len(), 8);
        assert_eq!(*map.get(7u32), Cost::Finite(2));
        assert_eq!(*map.get(6u32), Cost::Infinite);
    }

    #[test]
    fn hash_map_defaults() {
        let mut map = HashPropertyMap::new(false);
        assert!(!*map.get("a"));
        assert!(map.is_empty());

        map.set("a", true);
        assert!(*map.get("a"));
        assert!(!*map.get("b"));
        assert_eq!(map.len(), 1);

        // reading does not materialize keys
        let _ = map.get("c");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn maps_are_independent() {
        let mut a: DenseMap<usize> = DenseMap::new(2, EnqueueCount::default_value());
        let b: DenseMap<usize> = DenseMap::new(2, EnqueueCount::default_value());
        *a.get_mut(0u32) += 3;
        assert_eq!(*a.get(0u32), 3);
        assert_eq!(*b.get(0u32), 0);
    }

    #[test]
    fn token_defaults() {
        assert_eq!(Distance::<i64>::default_value(), Cost::Infinite);
        assert_eq!(PredecessorEdge::<u8>::default_value(), None);
        assert!(Predecessors::<u8>::default_value().is_empty());
        assert_eq!(Color::default_value(), VertexColor::White);
        assert!(!Hidden::default_value());
    }
}
