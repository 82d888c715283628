/*!
# Visitors

A [`Visitor`] observes an algorithm run through a fixed set of event hooks. Every hook
defaults to a no-op, so an implementation only overrides what it cares about and `()`
is the visitor that ignores everything (and is compiled away).

Visitors compose: `a.chain(b)` calls `a`'s hook and then `b`'s hook at every event.
Chaining is associative and `()` is its identity. Since `&mut V` is a visitor whenever
`V` is, callers can lend a visitor to a run and inspect it afterwards.

```
use wgraphs::{prelude::*, algo::*, visitor::*};

let g = AdjArray::from_edges(3, [(0, 1), (1, 2)]);
let mut recorder = EventRecorder::<Node, Edge>::default();
let mut relaxed = 0;

let visitor = (&mut recorder).chain(FnVisitor::new().on_edge_relaxed(|_| relaxed += 1));
let sssp = g.shortest_paths_from_with(0, |_| 1u32, SingleSourceAlgorithm::Dijkstra, visitor);

assert_eq!(sssp.distance(2), Cost::Finite(2));
assert_eq!(relaxed, 2);
assert!(recorder.events().contains(&Event::FinishVertex(2)));
```
*/

/// Event hooks fired by the search algorithms
#[allow(unused_variables)]
pub trait Visitor<V, E> {
    /// `v` received its first finite tentative cost
    fn discover_vertex(&mut self, v: V) {}

    /// `v` was taken from the frontier and is about to be expanded
    fn examine_vertex(&mut self, v: V) {}

    /// `e` is about to be considered for relaxation
    fn examine_edge(&mut self, e: E) {}

    /// Relaxing `e` strictly improved its destination
    fn edge_relaxed(&mut self, e: E) {}

    /// Relaxing `e` did not improve its destination
    fn edge_not_relaxed(&mut self, e: E) {}

    /// All outgoing edges of `v` were examined
    fn finish_vertex(&mut self, v: V) {}

    /// Relaxing `e` produced a cost equal to the current one (co-optimal predecessor)
    fn edge_tied(&mut self, e: E) {}

    /// A full edge sweep finished (`pass` counts from 1)
    fn sweep_finished(&mut self, pass: usize) {}

    /// `e` witnesses a negative cycle
    fn negative_cycle(&mut self, e: E) {}
}

impl<V, E> Visitor<V, E> for () {}

macro_rules! forward_hooks {
    ($($hook:ident($arg:ident: $T:ty)),*) => {
        $(
            #[inline]
            fn $hook(&mut self, $arg: $T) {
                (**self).$hook($arg)
            }
        )*
    };
}

impl<V, E, T: Visitor<V, E> + ?Sized> Visitor<V, E> for &mut T {
    forward_hooks!(
        discover_vertex(v: V),
        examine_vertex(v: V),
        examine_edge(e: E),
        edge_relaxed(e: E),
        edge_not_relaxed(e: E),
        finish_vertex(v: V),
        edge_tied(e: E),
        sweep_finished(pass: usize),
        negative_cycle(e: E)
    );
}

/// Calls the hooks of `.0` and then those of `.1`
#[derive(Debug, Clone, Default)]
pub struct Chain<A, B>(pub A, pub B);

macro_rules! chain_hooks {
    ($($hook:ident($arg:ident: $T:ty)),*) => {
        $(
            #[inline]
            fn $hook(&mut self, $arg: $T) {
                self.0.$hook($arg);
                self.1.$hook($arg);
            }
        )*
    };
}

impl<V: Copy, E: Copy, A: Visitor<V, E>, B: Visitor<V, E>> Visitor<V, E> for Chain<A, B> {
    chain_hooks!(
        discover_vertex(v: V),
        examine_vertex(v: V),
        examine_edge(e: E),
        edge_relaxed(e: E),
        edge_not_relaxed(e: E),
        finish_vertex(v: V),
        edge_tied(e: E),
        sweep_finished(pass: usize),
        negative_cycle(e: E)
    );
}

/// Provides `chain` on every type
pub trait VisitorExt: Sized {
    /// Returns a visitor calling `self` first and `other` second at every event
    fn chain<B>(self, other: B) -> Chain<Self, B> {
        Chain(self, other)
    }
}

impl<T> VisitorExt for T {}

type Hook<'a, T> = Option<Box<dyn FnMut(T) + 'a>>;

/// A visitor assembled from optional closures
pub struct FnVisitor<'a, V, E> {
    discover_vertex: Hook<'a, V>,
    examine_vertex: Hook<'a, V>,
    examine_edge: Hook<'a, E>,
    edge_relaxed: Hook<'a, E>,
    edge_not_relaxed: Hook<'a, E>,
    finish_vertex: Hook<'a, V>,
    edge_tied: Hook<'a, E>,
    sweep_finished: Hook<'a, usize>,
    negative_cycle: Hook<'a, E>,
}

impl<V, E> Default for FnVisitor<'_, V, E> {
    fn default() -> Self {
        Self {
            discover_vertex: None,
            examine_vertex: None,
            examine_edge: None,
            edge_relaxed: None,
            edge_not_relaxed: None,
            finish_vertex: None,
            edge_tied: None,
            sweep_finished: None,
            negative_cycle: None,
        }
    }
}

macro_rules! fn_visitor_setters {
    ($($setter:ident => $hook:ident: $T:ident),*) => {
        impl<'a, V, E> FnVisitor<'a, V, E> {
            $(
                #[doc = concat!("Installs the closure called on `", stringify!($hook), "`")]
                pub fn $setter(mut self, f: impl FnMut($T) + 'a) -> Self {
                    self.$hook = Some(Box::new(f));
                    self
                }
            )*
        }

        impl<V, E> Visitor<V, E> for FnVisitor<'_, V, E> {
            $(
                fn $hook(&mut self, arg: $T) {
                    if let Some(f) = self.$hook.as_mut() {
                        f(arg);
                    }
                }
            )*
        }
    };
}

fn_visitor_setters!(
    on_discover_vertex => discover_vertex: V,
    on_examine_vertex => examine_vertex: V,
    on_examine_edge => examine_edge: E,
    on_edge_relaxed => edge_relaxed: E,
    on_edge_not_relaxed => edge_not_relaxed: E,
    on_finish_vertex => finish_vertex: V,
    on_edge_tied => edge_tied: E,
    on_sweep_finished => sweep_finished: usize,
    on_negative_cycle => negative_cycle: E
);

impl<V, E> FnVisitor<'_, V, E> {
    /// Creates a visitor without any hooks installed
    pub fn new() -> Self {
        Self::default()
    }
}

/// A single recorded visitor event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event<V, E> {
    DiscoverVertex(V),
    ExamineVertex(V),
    ExamineEdge(E),
    EdgeRelaxed(E),
    EdgeNotRelaxed(E),
    FinishVertex(V),
    EdgeTied(E),
    SweepFinished(usize),
    NegativeCycle(E),
}

/// Records every event in the order it was fired
#[derive(Debug, Clone)]
pub struct EventRecorder<V, E> {
    events: Vec<Event<V, E>>,
}

impl<V, E> Default for EventRecorder<V, E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<V, E> EventRecorder<V, E> {
    /// Returns all events recorded so far
    pub fn events(&self) -> &[Event<V, E>] {
        &self.events
    }

    /// Consumes the recorder and returns its events
    pub fn into_events(self) -> Vec<Event<V, E>> {
        self.events
    }
}

impl<V, E> Visitor<V, E> for EventRecorder<V, E> {
    fn discover_vertex(&mut self, v: V) {
        self.events.push(Event::DiscoverVertex(v));
    }

    fn examine_vertex(&mut self, v: V) {
        self.events.push(Event::ExamineVertex(v));
    }

    fn examine_edge(&mut self, e: E) {
        self.events.push(Event::ExamineEdge(e));
    }

    fn edge_relaxed(&mut self, e: E) {
        self.events.push(Event::EdgeRelaxed(e));
    }

    fn edge_not_relaxed(&mut self, e: E) {
        self.events.push(Event::EdgeNotRelaxed(e));
    }

    fn finish_vertex(&mut self, v: V) {
        self.events.push(Event::FinishVertex(v));
    }

    fn edge_tied(&mut self, e: E) {
        self.events.push(Event::EdgeTied(e));
    }

    fn sweep_finished(&mut self, pass: usize) {
        self.events.push(Event::SweepFinished(pass));
    }

    fn negative_cycle(&mut self, e: E) {
        self.events.push(Event::NegativeCycle(e));
    }
}
