//! Apply command handler

use std::path::Path;

use anyhow::Result;

use treepick::application::LazyLoader;
use treepick::infrastructure::ResponseMap;
use treepick::store::{Action, Store};

use super::context::{read_tree_input, CommandContext};
use super::ops::run_ops;
use super::output::{print_summary, print_tree};

pub fn cmd_apply(
    ctx: &CommandContext,
    input: &Path,
    ops: &[Action],
    responses: Option<&Path>,
    tree: bool,
) -> Result<()> {
    let data = read_tree_input(input)?;
    let mut store = Store::new(&data, ctx.config.tree.clone());

    // Without canned responses every lazy load comes back empty.
    let fetcher = match responses {
        Some(path) => ResponseMap::load(path)?,
        None => ResponseMap::default(),
    };
    let loader = LazyLoader::new(fetcher, ctx.config.fetch.clone());

    run_ops(ctx, &mut store, &loader, ops)?;

    if tree || ctx.show_trees() {
        print_tree(ctx, &store, false)?;
    }
    print_summary(ctx, &store)?;
    Ok(())
}
