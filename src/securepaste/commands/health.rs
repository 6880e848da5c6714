use crate::backend::{ApiRequest, Backend};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::HealthStatus;

use super::helpers::send_json;

/// Fetches the decoded health document. Errors propagate.
pub fn probe<B: Backend>(backend: &B) -> Result<CmdResult> {
    let health: HealthStatus = send_json(backend, &ApiRequest::get(["health"]))?;

    let mut result = CmdResult::default();
    let service = health.service.as_deref().unwrap_or("service");
    if health.is_up() {
        result.add_message(CmdMessage::success(format!("{} is {}", service, health.status)));
    } else {
        result.add_message(CmdMessage::warning(format!("{} is {}", service, health.status)));
    }
    Ok(result.with_health(health))
}

/// True only when the service answers with `status == "UP"`. Never fails:
/// transport, status and decoding problems all read as unhealthy.
pub fn check<B: Backend>(backend: &B) -> bool {
    match send_json::<_, HealthStatus>(backend, &ApiRequest::get(["health"])) {
        Ok(health) => health.is_up(),
        Err(e) => {
            log::debug!("health check against {} failed: {}", backend.describe(), e);
            false
        }
    }
}
