//! Lazy, state-reactive action chains.
//!
//! A chain is a deferred function from the current snapshot to an ordered
//! sequence of nodes. Nodes are either concrete actions handed to a
//! [`Driver`], bounded pauses, or further chains that are expanded only when
//! the evaluator reaches them, against a snapshot taken at that moment.
//!
//! - **No precomputed plans**: every expansion sees fresh state
//! - **Explicit work list**: evaluation walks a frame stack, never recursion
//!   into user closures, so order and termination stay auditable
//! - **Fixpoint repetition**: [`Repeat::UntilEmpty`] chains re-expand until an
//!   expansion yields nothing
//!
//! # Architecture
//!
//! - [`Driver`]: the external snapshot/executor pair
//! - [`Node`] and [`Chain`]: the tagged plan variants
//! - [`Evaluator`]: runs a root node to completion
//! - [`ChainError`]: failures annotated with the label path of the failing step

pub mod builder;
pub mod driver;
pub mod error;
pub mod evaluator;
pub mod node;

pub use driver::Driver;
pub use error::ChainError;
pub use evaluator::{ChainReport, Evaluator};
pub use node::{Chain, Expansion, Node, Repeat};
