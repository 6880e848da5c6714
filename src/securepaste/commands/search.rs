use crate::backend::{ApiRequest, Backend};
use crate::commands::CmdResult;
use crate::error::Result;

use super::helpers::require_non_blank;
use super::list::fetch_page;

/// Full-text search over public pastes. Matching happens server-side on
/// title and content.
pub fn run<B: Backend>(backend: &B, query: &str, page: u32, size: u32) -> Result<CmdResult> {
    require_non_blank("Search query", query)?;
    fetch_page(
        backend,
        ApiRequest::get(["search"]).with_query("q", query),
        page,
        size,
    )
}
