/*!
# Utilities

Small helpers shared by the representations and views. You probably do not need to
interact with this module directly.
*/

pub mod multi_traits;

pub use multi_traits::DoubleIter;
