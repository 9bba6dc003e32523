//! Shorthands for building plans.
//!
//! Instead of writing `Node::Deferred(Chain::once("label", |s| ...))`, use
//! `once("label", |s| ...)`.

use std::time::Duration;

use crate::{Chain, Expansion, Node};

/// Creates a leaf node.
#[inline]
pub fn leaf<'a, S, A, E>(action: A) -> Node<'a, S, A, E> {
    Node::Leaf(action)
}

/// Creates a pause node.
#[inline]
pub fn pause<'a, S, A, E>(duration: Duration) -> Node<'a, S, A, E> {
    Node::Pause(duration)
}

/// Creates a deferred node expanded once.
#[inline]
pub fn once<'a, S, A, E, F>(label: &'static str, expand: F) -> Node<'a, S, A, E>
where
    F: FnMut(&S) -> Expansion<'a, S, A, E> + Send + 'a,
{
    Node::Deferred(Chain::once(label, expand))
}

/// Creates a deferred node re-expanded until it yields nothing.
#[inline]
pub fn until_empty<'a, S, A, E, F>(label: &'static str, expand: F) -> Node<'a, S, A, E>
where
    F: FnMut(&S) -> Expansion<'a, S, A, E> + Send + 'a,
{
    Node::Deferred(Chain::until_empty(label, expand))
}

/// Creates a repeating node exempt from the evaluator's pass limit.
///
/// For loops that end on their own: a deadline, an attack ceiling, a queue
/// that only shrinks.
#[inline]
pub fn until_empty_unbounded<'a, S, A, E, F>(label: &'static str, expand: F) -> Node<'a, S, A, E>
where
    F: FnMut(&S) -> Expansion<'a, S, A, E> + Send + 'a,
{
    Node::Deferred(Chain::until_empty(label, expand).unbounded())
}

/// Groups already-built nodes under a label.
///
/// The nodes are handed out on the first expansion; the label shows up in
/// the step path of any failure inside the group.
pub fn sequence<'a, S, A, E>(label: &'static str, nodes: Vec<Node<'a, S, A, E>>) -> Node<'a, S, A, E>
where
    S: 'a,
    A: Send + 'a,
    E: 'a,
{
    let mut nodes = Some(nodes);
    once(label, move |_| Ok(nodes.take().unwrap_or_default()))
}
