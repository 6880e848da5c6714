use crate::backend::{ApiRequest, Backend, Method};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::{require_non_blank, send};

/// Deletes a paste. The response body is ignored; any 2xx counts as success.
pub fn run<B: Backend>(backend: &B, id: &str) -> Result<CmdResult> {
    require_non_blank("Paste id", id)?;
    send(backend, &ApiRequest::new(Method::Delete, [id]))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Paste deleted: {}", id)));
    Ok(result)
}
