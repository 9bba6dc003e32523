//! Plan nodes.
//!
//! A plan is a tree that only exists one level at a time: a [`Chain`] is
//! turned into its children when the evaluator reaches it, never earlier.

use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

/// Result of expanding a chain against a snapshot.
pub type Expansion<'a, S, A, E> = Result<Vec<Node<'a, S, A, E>>, E>;

type ExpandFn<'a, S, A, E> = Box<dyn FnMut(&S) -> Expansion<'a, S, A, E> + Send + 'a>;

/// How often a chain is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repeat {
    /// Expand once; the chain is done when its children are.
    Once,

    /// Re-expand with a fresh snapshot each time the children are exhausted,
    /// until an expansion yields an empty sequence.
    UntilEmpty,
}

impl Repeat {
    /// Returns `true` if the chain re-expands after its children complete.
    #[inline]
    pub fn is_repeating(self) -> bool {
        matches!(self, Repeat::UntilEmpty)
    }
}

/// One unit of a plan.
///
/// Nodes are owned by the evaluator and discarded as soon as they have been
/// executed or expanded.
pub enum Node<'a, S, A, E> {
    /// A concrete step for the driver.
    Leaf(A),

    /// A bounded wait between polls of an external condition.
    Pause(Duration),

    /// A deferred function of the snapshot producing further nodes.
    Deferred(Chain<'a, S, A, E>),
}

impl<'a, S, A, E> Node<'a, S, A, E> {
    /// Returns the chain label for deferred nodes.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Node::Deferred(chain) => Some(chain.label()),
            Node::Leaf(_) | Node::Pause(_) => None,
        }
    }
}

impl<'a, S, A, E> From<Chain<'a, S, A, E>> for Node<'a, S, A, E> {
    fn from(chain: Chain<'a, S, A, E>) -> Self {
        Node::Deferred(chain)
    }
}

impl<S, A: fmt::Debug, E> fmt::Debug for Node<'_, S, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(action) => f.debug_tuple("Leaf").field(action).finish(),
            Node::Pause(duration) => f.debug_tuple("Pause").field(duration).finish(),
            Node::Deferred(chain) => f.debug_tuple("Deferred").field(chain).finish(),
        }
    }
}

/// A labelled, deferred expansion.
///
/// The expansion is `FnMut` so that a repeating chain can keep loop-local
/// state (counters, deadlines, previous observations) between passes.
///
/// Repeating chains are subject to the evaluator's pass limit unless marked
/// [`unbounded`](Chain::unbounded); such a chain must end on its own, through
/// a deadline or a counter it keeps.
pub struct Chain<'a, S, A, E> {
    label: &'static str,
    repeat: Repeat,
    bounded: bool,
    expand: ExpandFn<'a, S, A, E>,
}

impl<'a, S, A, E> Chain<'a, S, A, E> {
    /// Creates a chain expanded exactly once.
    pub fn once<F>(label: &'static str, expand: F) -> Self
    where
        F: FnMut(&S) -> Expansion<'a, S, A, E> + Send + 'a,
    {
        Self::new(label, Repeat::Once, expand)
    }

    /// Creates a chain re-expanded until it yields nothing.
    pub fn until_empty<F>(label: &'static str, expand: F) -> Self
    where
        F: FnMut(&S) -> Expansion<'a, S, A, E> + Send + 'a,
    {
        Self::new(label, Repeat::UntilEmpty, expand)
    }

    pub fn new<F>(label: &'static str, repeat: Repeat, expand: F) -> Self
    where
        F: FnMut(&S) -> Expansion<'a, S, A, E> + Send + 'a,
    {
        Self {
            label,
            repeat,
            bounded: true,
            expand: Box::new(expand),
        }
    }

    /// Exempts the chain from the evaluator's pass limit.
    pub fn unbounded(mut self) -> Self {
        self.bounded = false;
        self
    }

    /// Returns `true` if the evaluator's pass limit applies.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.bounded
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[inline]
    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    /// Expands the chain against `snapshot`.
    pub(crate) fn expand(&mut self, snapshot: &S) -> Result<VecDeque<Node<'a, S, A, E>>, E> {
        (self.expand)(snapshot).map(VecDeque::from)
    }
}

impl<S, A, E> fmt::Debug for Chain<'_, S, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("label", &self.label)
            .field("repeat", &self.repeat)
            .field("bounded", &self.bounded)
            .finish_non_exhaustive()
    }
}
