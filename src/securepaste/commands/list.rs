use crate::backend::{ApiRequest, Backend};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Page, Paste};

use super::helpers::{paged, require_non_blank, send_json};

/// Active public pastes, newest first.
pub fn public<B: Backend>(backend: &B, page: u32, size: u32) -> Result<CmdResult> {
    fetch_page(backend, ApiRequest::get(["public"]), page, size)
}

/// Public pastes created in the last 24 hours.
pub fn recent<B: Backend>(backend: &B, page: u32, size: u32) -> Result<CmdResult> {
    fetch_page(backend, ApiRequest::get(["recent"]), page, size)
}

/// Public pastes whose language matches, case-insensitively.
pub fn by_language<B: Backend>(
    backend: &B,
    language: &str,
    page: u32,
    size: u32,
) -> Result<CmdResult> {
    require_non_blank("Language", language)?;
    fetch_page(backend, ApiRequest::get(["language", language]), page, size)
}

pub(super) fn fetch_page<B: Backend>(
    backend: &B,
    request: ApiRequest,
    page: u32,
    size: u32,
) -> Result<CmdResult> {
    let request = paged(request, page, size);
    let listing: Page<Paste> = send_json(backend, &request)?;

    let mut result = CmdResult::default();
    if listing.is_empty() && page > 0 && listing.total_elements > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Page {} is past the end ({} pastes in total)",
            page, listing.total_elements
        )));
    }
    Ok(result.with_page(listing))
}
