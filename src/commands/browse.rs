//! Browse command handler

use std::path::Path;

use anyhow::{Context, Result};

use treepick::application::LazyLoader;
use treepick::domain::value_objects::Level;
use treepick::infrastructure::LocalDirFetcher;
use treepick::store::{Action, Store};

use super::context::CommandContext;
use super::ops::run_ops;
use super::output::{print_summary, print_tree, print_unfold};

pub fn cmd_browse(
    ctx: &CommandContext,
    dir: &Path,
    unfold: &[Level],
    ops: &[Action],
    hidden: bool,
) -> Result<()> {
    let fetcher = LocalDirFetcher::new(dir, &ctx.config.tree)
        .with_context(|| format!("cannot browse {}", dir.display()))?
        .with_hidden(hidden);
    let data = fetcher.root_data()?;
    let mut store = Store::new(&data, ctx.config.tree.clone());
    let loader = LazyLoader::new(fetcher, ctx.config.fetch.clone());

    for level in unfold {
        let report = loader.unfold(&mut store, level)?;
        if ctx.show_trees() || ctx.json {
            print_unfold(ctx, &format!("unfold:branch:{level}"), &report)?;
        }
    }
    run_ops(ctx, &mut store, &loader, ops)?;

    print_tree(ctx, &store, false)?;
    if !ops.is_empty() {
        print_summary(ctx, &store)?;
    }
    Ok(())
}
