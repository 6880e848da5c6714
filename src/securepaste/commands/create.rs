use crate::backend::{ApiRequest, Backend, Method};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NewPaste, Paste};

use super::helpers::{json_body, send_json};

pub fn run<B: Backend>(backend: &B, new: NewPaste) -> Result<CmdResult> {
    new.validate()?;

    let request =
        ApiRequest::new(Method::Post, Vec::<String>::new()).with_body(json_body(&new)?);
    let paste: Paste = send_json(backend, &request)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Paste created ({}): {}",
        paste.id, paste.title
    )));
    Ok(result.with_paste(paste))
}
