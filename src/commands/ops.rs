//! Running `--op` lists against a store

use anyhow::{Context, Result};

use treepick::application::LazyLoader;
use treepick::domain::ports::Fetcher;
use treepick::domain::value_objects::NodeRef;
use treepick::store::{Action, Store};

use super::context::CommandContext;
use super::output::{print_outcome, print_unfold};

/// Apply `ops` in order, stopping at the first failure. Branch unfolds go
/// through `loader` so unknown children are fetched on the spot.
pub fn run_ops<F: Fetcher>(
    ctx: &CommandContext,
    store: &mut Store,
    loader: &LazyLoader<F>,
    ops: &[Action],
) -> Result<()> {
    for (i, op) in ops.iter().enumerate() {
        let label = op.to_string();
        let context = || format!("operation {} ({label}) failed", i + 1);

        match op {
            Action::Unfold(NodeRef::Branch(level)) => {
                let report = loader.unfold(store, level).with_context(context)?;
                print_unfold(ctx, &label, &report)?;
            }
            _ => {
                let outcome = store.commit(op.clone()).with_context(context)?;
                print_outcome(ctx, &label, &outcome)?;
            }
        }
    }
    Ok(())
}
