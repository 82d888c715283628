/*!
# Cost Algebra

Path costs are expressed as [`Cost<W>`]: either a finite accumulated [`Weight`] or
[`Cost::Infinite`] for "not reachable (yet)".

`Cost` forms a monoid under addition with `Cost::zero()` as neutral element and
`Cost::Infinite` as absorbing top element. Using an explicit top element avoids the
classical pitfall of encoding "unreachable" as `W::MAX` and overflowing on the first relaxation.

```
use wgraphs::cost::Cost;

let a: Cost<i32> = Cost::Finite(3);
assert_eq!(a + Cost::Finite(4), Cost::Finite(7));
assert_eq!(a + Cost::Infinite, Cost::Infinite);
assert!(Cost::Finite(i32::MAX) < Cost::Infinite);
```
*/

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::{Add, Sub},
};

use num::Zero;

/// Edge weights and accumulated distances.
///
/// Any copyable, (partially) ordered numeric type with a zero qualifies, which covers all
/// primitive integers and floats. The order must be total on all values that actually occur;
/// feeding `NaN` into an algorithm is a precondition violation and yields unspecified results.
pub trait Weight: Copy + PartialOrd + Debug + Zero + Add<Output = Self> + Sub<Output = Self> {}

impl<W> Weight for W where W: Copy + PartialOrd + Debug + Zero + Add<Output = Self> + Sub<Output = Self> {}

/// A possibly-unreachable distance.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cost<W> {
    /// Reachable at the given accumulated weight
    Finite(W),
    /// Unreachable; the unique maximum of the order
    Infinite,
}

impl<W> Default for Cost<W> {
    fn default() -> Self {
        Cost::Infinite
    }
}

impl<W: Weight> Cost<W> {
    /// The cost of the empty path
    pub fn zero() -> Self {
        Cost::Finite(W::zero())
    }

    /// Returns the smaller of both costs
    pub fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }
}

impl<W> Cost<W> {
    /// Returns *true* if the cost is finite
    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    /// Returns *true* if the cost is infinite
    pub fn is_infinite(&self) -> bool {
        matches!(self, Cost::Infinite)
    }

    /// Returns the finite weight, if any
    pub fn finite(self) -> Option<W> {
        match self {
            Cost::Finite(w) => Some(w),
            Cost::Infinite => None,
        }
    }

    /// Applies `f` to a finite weight; `Infinite` stays `Infinite`
    pub fn map<U, F: FnOnce(W) -> U>(self, f: F) -> Cost<U> {
        match self {
            Cost::Finite(w) => Cost::Finite(f(w)),
            Cost::Infinite => Cost::Infinite,
        }
    }
}

impl<W> From<W> for Cost<W> {
    fn from(value: W) -> Self {
        Cost::Finite(value)
    }
}

impl<W> From<Option<W>> for Cost<W> {
    fn from(value: Option<W>) -> Self {
        value.map_or(Cost::Infinite, Cost::Finite)
    }
}

impl<W: PartialOrd> PartialOrd for Cost<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Cost::Finite(a), Cost::Finite(b)) => a.partial_cmp(b),
            (Cost::Finite(_), Cost::Infinite) => Some(Ordering::Less),
            (Cost::Infinite, Cost::Finite(_)) => Some(Ordering::Greater),
            (Cost::Infinite, Cost::Infinite) => Some(Ordering::Equal),
        }
    }
}

impl<W: Ord> Ord for Cost<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Cost::Finite(a), Cost::Finite(b)) => a.cmp(b),
            (Cost::Finite(_), Cost::Infinite) => Ordering::Less,
            (Cost::Infinite, Cost::Finite(_)) => Ordering::Greater,
            (Cost::Infinite, Cost::Infinite) => Ordering::Equal,
        }
    }
}

impl<W: Add<Output = W>> Add for Cost<W> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Cost::Finite(a), Cost::Finite(b)) => Cost::Finite(a + b),
            _ => Cost::Infinite,
        }
    }
}

/// Extends a path cost by the weight of one more edge
impl<W: Add<Output = W>> Add<W> for Cost<W> {
    type Output = Self;

    fn add(self, rhs: W) -> Self::Output {
        self.map(|w| w + rhs)
    }
}

impl<W: Debug> Debug for Cost<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cost::Finite(w) => write!(f, "{w:?}"),
            Cost::Infinite => write!(f, "inf"),
        }
    }
}

impl<W: Display> Display for Cost<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cost::Finite(w) => write!(f, "{w}"),
            Cost::Infinite => write!(f, "inf"),
        }
    }
}
