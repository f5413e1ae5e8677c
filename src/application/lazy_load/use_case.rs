//! Lazy-load use case

use tracing::{debug, info};

use crate::config::FetchConfig;
use crate::domain::ports::Fetcher;
use crate::domain::value_objects::{Level, NodeRef};
use crate::error::{TreeError, TreeResult, UnfoldRejection};
use crate::store::{Action, CommitOutcome, Store, UnfoldCompletion};

use super::result::UnfoldReport;

/// Unfolds branches of a store, fetching unknown children on the way
pub struct LazyLoader<F>
where
    F: Fetcher,
{
    fetcher: F,
    request: FetchConfig,
}

impl<F> LazyLoader<F>
where
    F: Fetcher,
{
    /// Create a loader that builds requests from `request`
    pub fn new(fetcher: F, request: FetchConfig) -> Self {
        Self { fetcher, request }
    }

    /// Toggle the branch at `level`, fetching its children when the store
    /// issues a ticket.
    ///
    /// A refused unfold is not an error here: the branch was toggled and the
    /// report carries the reason. Unknown levels and leaf targets still fail.
    pub fn unfold(&self, store: &mut Store, level: &Level) -> TreeResult<UnfoldReport> {
        let outcome = store.commit(Action::Unfold(NodeRef::Branch(level.clone())));

        let (fetched, rejected) = match outcome {
            Ok(CommitOutcome::Unfold(ticket)) => {
                let request = self.request.request_for(&ticket.path);
                debug!(path = %ticket.path, method = %request.method, "fetching children");

                let result = self.fetcher.fetch(&request);
                let completion = store.complete_unfold(&ticket, result)?;
                info!(path = %ticket.path, ?completion, "unfold completed");
                (Some(completion), None)
            }
            Ok(_) => (None, None),
            Err(TreeError::UnfoldRejected { reason, .. }) => {
                debug!(level = %level, %reason, "unfold without fetch");
                (None, Some(reason))
            }
            Err(err) => return Err(err),
        };

        report(store, level, fetched, rejected)
    }

    /// Unfold every level in order; later levels may point into children
    /// merged by earlier ones
    pub fn unfold_all<'a, I>(&self, store: &mut Store, levels: I) -> TreeResult<Vec<UnfoldReport>>
    where
        I: IntoIterator<Item = &'a Level>,
    {
        levels
            .into_iter()
            .map(|level| self.unfold(store, level))
            .collect()
    }
}

fn report(
    store: &Store,
    level: &Level,
    fetched: Option<UnfoldCompletion>,
    rejected: Option<UnfoldRejection>,
) -> TreeResult<UnfoldReport> {
    let branch = store
        .find_current_branch(level)
        .ok_or_else(|| TreeError::UnknownBranch {
            level: level.clone(),
        })?;
    Ok(UnfoldReport {
        level: level.clone(),
        path: branch.path().to_string(),
        open: branch.node.open,
        status: branch.node.status,
        fetched,
        rejected,
    })
}
