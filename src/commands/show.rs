//! Show command handler

use std::path::Path;

use anyhow::Result;

use treepick::store::Store;

use super::context::{read_tree_input, CommandContext};
use super::output::print_tree;

pub fn cmd_show(ctx: &CommandContext, input: &Path, expand_all: bool, raw: bool) -> Result<()> {
    let data = read_tree_input(input)?;
    let store = Store::new(&data, ctx.config.tree.clone());

    if raw {
        let raw = store.raw();
        if ctx.json {
            println!("{}", serde_json::to_string(&raw)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&raw)?);
        }
        return Ok(());
    }

    print_tree(ctx, &store, expand_all)?;
    Ok(())
}
