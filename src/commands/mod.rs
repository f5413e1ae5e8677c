//! Command handlers

pub mod apply;
pub mod browse;
pub mod context;
mod ops;
mod output;
pub mod request;
pub mod show;

pub use apply::cmd_apply;
pub use browse::cmd_browse;
pub use context::CommandContext;
pub use request::cmd_request;
pub use show::cmd_show;
