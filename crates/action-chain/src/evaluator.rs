//! Work-list evaluation of action chains.
//!
//! The evaluator keeps an explicit stack of frames. Expanding a deferred node
//! pushes a frame holding the produced nodes; that frame is drained before its
//! parent continues, which is the same order as splicing the nodes in place.
//! A repeating frame is re-expanded with a fresh snapshot whenever it drains
//! and is popped only once an expansion comes back empty.

use std::collections::VecDeque;

use crate::{Chain, ChainError, Driver, Node};

/// Default number of passes a repeating chain may take before it is treated
/// as stuck.
pub const DEFAULT_PASS_LIMIT: usize = 1000;

/// Counters describing one evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChainReport {
    /// Leaves executed by the driver.
    pub actions: usize,
    /// Chain expansions performed (each one took a fresh snapshot).
    pub expansions: usize,
    /// Pauses slept.
    pub pauses: usize,
}

impl ChainReport {
    /// Returns `true` if nothing was executed.
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.actions == 0
    }
}

impl std::ops::AddAssign for ChainReport {
    fn add_assign(&mut self, other: Self) {
        self.actions += other.actions;
        self.expansions += other.expansions;
        self.pauses += other.pauses;
    }
}

/// Runs chains against a [`Driver`], strictly one step at a time.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    pass_limit: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            pass_limit: DEFAULT_PASS_LIMIT,
        }
    }
}

struct Frame<'a, S, A, E> {
    chain: Option<Chain<'a, S, A, E>>,
    pending: VecDeque<Node<'a, S, A, E>>,
    passes: usize,
}

impl<'a, S, A, E> Frame<'a, S, A, E> {
    fn root(node: Node<'a, S, A, E>) -> Self {
        Self {
            chain: None,
            pending: VecDeque::from([node]),
            passes: 0,
        }
    }

    fn label(&self) -> Option<&'static str> {
        self.chain.as_ref().map(Chain::label)
    }

    fn repeats(&self) -> bool {
        self.chain
            .as_ref()
            .is_some_and(|chain| chain.repeat().is_repeating())
    }

    fn bounded(&self) -> bool {
        self.chain.as_ref().is_some_and(Chain::is_bounded)
    }
}

fn label_path<S, A, E>(frames: &[Frame<'_, S, A, E>]) -> String {
    let labels: Vec<&str> = frames.iter().filter_map(Frame::label).collect();
    if labels.is_empty() {
        "root".to_owned()
    } else {
        labels.join("/")
    }
}

/// Pops the topmost frame if its latest expansion produced nothing.
fn pop_settled<S, A, E>(frames: &mut Vec<Frame<'_, S, A, E>>) {
    if let Some(top) = frames.last()
        && top.pending.is_empty()
    {
        if top.repeats() {
            tracing::debug!(
                chain = top.label().unwrap_or("root"),
                passes = top.passes,
                "chain settled"
            );
        }
        frames.pop();
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of passes for any single bounded repeating
    /// chain.
    pub fn with_pass_limit(mut self, pass_limit: usize) -> Self {
        self.pass_limit = pass_limit.max(1);
        self
    }

    pub fn pass_limit(&self) -> usize {
        self.pass_limit
    }

    /// Evaluates `root` until every node has been executed or expanded and
    /// every repeating chain has reached its fixpoint.
    ///
    /// # Errors
    ///
    /// - [`ChainError::Step`] when the driver rejects a leaf, a snapshot
    ///   cannot be taken, or an expansion returns an error. Nothing after the
    ///   failing step is evaluated.
    /// - [`ChainError::NoFixpoint`] when a bounded repeating chain exceeds
    ///   the pass limit.
    pub async fn run<'a, D, E>(
        &self,
        driver: &D,
        root: Node<'a, D::Snapshot, D::Action, E>,
    ) -> Result<ChainReport, ChainError<D::Action, E>>
    where
        D: Driver + ?Sized,
        E: From<D::Error> + Send,
    {
        let mut report = ChainReport::default();
        let mut frames = vec![Frame::root(root)];

        while let Some(top) = frames.last_mut() {
            match top.pending.pop_front() {
                Some(Node::Leaf(action)) => {
                    tracing::debug!(step = %label_path(&frames), ?action, "executing action");
                    if let Err(err) = driver.execute(&action).await {
                        let step = label_path(&frames);
                        tracing::warn!(%step, ?action, "action failed");
                        return Err(ChainError::Step {
                            step,
                            action: Some(action),
                            source: E::from(err),
                        });
                    }
                    report.actions += 1;
                }
                Some(Node::Pause(duration)) => {
                    tokio::time::sleep(duration).await;
                    report.pauses += 1;
                }
                Some(Node::Deferred(chain)) => {
                    frames.push(Frame {
                        chain: Some(chain),
                        pending: VecDeque::new(),
                        passes: 0,
                    });
                    self.expand_top(driver, &mut frames, &mut report).await?;
                    pop_settled(&mut frames);
                }
                None if top.repeats() => {
                    if top.bounded() && top.passes >= self.pass_limit {
                        let chain = top.label().unwrap_or("root");
                        let passes = top.passes;
                        tracing::warn!(chain, passes, "chain did not settle");
                        return Err(ChainError::NoFixpoint { chain, passes });
                    }
                    self.expand_top(driver, &mut frames, &mut report).await?;
                    pop_settled(&mut frames);
                }
                None => {
                    frames.pop();
                }
            }
        }

        Ok(report)
    }

    /// Expands the chain of the topmost frame against a fresh snapshot.
    async fn expand_top<'a, D, E>(
        &self,
        driver: &D,
        frames: &mut [Frame<'a, D::Snapshot, D::Action, E>],
        report: &mut ChainReport,
    ) -> Result<(), ChainError<D::Action, E>>
    where
        D: Driver + ?Sized,
        E: From<D::Error> + Send,
    {
        let snapshot = match driver.snapshot().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                return Err(ChainError::Step {
                    step: label_path(frames),
                    action: None,
                    source: E::from(err),
                });
            }
        };

        let Some(frame) = frames.last_mut() else {
            return Ok(());
        };
        let Some(chain) = frame.chain.as_mut() else {
            return Ok(());
        };
        let label = chain.label();

        match chain.expand(&snapshot) {
            Ok(nodes) => {
                tracing::debug!(chain = label, nodes = nodes.len(), "expanded chain");
                frame.pending = nodes;
                frame.passes += 1;
                report.expansions += 1;
                Ok(())
            }
            Err(source) => Err(ChainError::Step {
                step: label_path(frames),
                action: None,
                source,
            }),
        }
    }
}
