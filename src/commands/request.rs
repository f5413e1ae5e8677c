//! Request command handler

use anyhow::Result;

use super::context::CommandContext;
use super::output::emit;

pub fn cmd_request(ctx: &CommandContext, path: &str) -> Result<()> {
    let request = ctx.config.fetch.request_for(path);

    if ctx.json {
        emit(&request)?;
        return Ok(());
    }

    match &request.url {
        Some(url) => println!("{} {url}", request.method),
        None => println!("{} (no url configured)", request.method),
    }
    for (label, map) in [
        ("params", &request.params),
        ("data", &request.data),
        ("headers", &request.headers),
    ] {
        for (key, value) in map {
            println!("  {label}.{key} = {value}");
        }
    }
    Ok(())
}
