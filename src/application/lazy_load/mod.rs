//! Lazy-load use case
//!
//! Ties an unfold commit to a synchronous `Fetcher`: the store issues a
//! ticket, the fetcher is asked for the branch's children, and the outcome is
//! handed back to the store.

mod result;
mod use_case;

pub use result::UnfoldReport;
pub use use_case::LazyLoader;
