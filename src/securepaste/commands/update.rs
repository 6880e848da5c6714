use crate::backend::{ApiRequest, Backend, Method};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Paste, PasteUpdate};

use super::helpers::{json_body, require_non_blank, send_json};

pub fn run<B: Backend>(backend: &B, id: &str, update: &PasteUpdate) -> Result<CmdResult> {
    require_non_blank("Paste id", id)?;
    update.validate()?;

    let request = ApiRequest::new(Method::Put, [id]).with_body(json_body(update)?);
    let paste: Paste = send_json(backend, &request)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Paste updated ({}): {}",
        paste.id, paste.title
    )));
    Ok(result.with_paste(paste))
}
