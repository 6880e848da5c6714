use crate::backend::{ApiRequest, Backend};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Statistics;

use super::helpers::send_json;

pub fn run<B: Backend>(backend: &B) -> Result<CmdResult> {
    let stats: Statistics = send_json(backend, &ApiRequest::get(["stats"]))?;
    Ok(CmdResult::default().with_statistics(stats))
}
