use crate::backend::{ApiRequest, Backend};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Paste;

use super::helpers::{require_non_blank, send_json};

/// Fetches a paste. The service counts every successful read as a view.
///
/// `password` is sent only when it is non-empty.
pub fn run<B: Backend>(backend: &B, id: &str, password: Option<&str>) -> Result<CmdResult> {
    require_non_blank("Paste id", id)?;

    let mut request = ApiRequest::get([id]);
    if let Some(password) = password.filter(|p| !p.is_empty()) {
        request = request.with_query("password", password);
    }
    let paste: Paste = send_json(backend, &request)?;

    Ok(CmdResult::default().with_paste(paste))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::memory::MemoryBackend;
    use crate::model::{NewPaste, PasteOptions};

    #[test]
    fn each_read_increments_view_count() {
        let backend = MemoryBackend::new();
        let created = backend.insert(NewPaste::new("T", "C", PasteOptions::new()));

        let first = run(&backend, &created.id, None).unwrap().into_paste().unwrap();
        let second = run(&backend, &created.id, None).unwrap().into_paste().unwrap();

        assert!(first.view_count > created.view_count);
        assert_eq!(second.view_count, first.view_count + 1);
        assert_eq!(first.content, "C");
    }

    #[test]
    fn protected_paste_needs_password() {
        let backend = MemoryBackend::new();
        let created = backend.insert(NewPaste::new(
            "Secret",
            "hidden",
            PasteOptions::new().password("secret123"),
        ));

        let denied = run(&backend, &created.id, None).unwrap_err();
        assert!(denied.is_access_denied());

        let wrong = run(&backend, &created.id, Some("guess")).unwrap_err();
        assert!(wrong.is_access_denied());

        let granted = run(&backend, &created.id, Some("secret123")).unwrap();
        assert_eq!(granted.paste().unwrap().content, "hidden");
    }

    #[test]
    fn empty_password_is_not_sent() {
        let backend = MemoryBackend::new();
        let created = backend.insert(NewPaste::new("T", "C", PasteOptions::new()));
        run(&backend, &created.id, Some("")).unwrap();

        let request = backend.requests().pop().unwrap();
        assert_eq!(request.query_value("password"), None);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let backend = MemoryBackend::new();
        let err = run(&backend, "does-not-exist", None).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.body().unwrap().contains("Paste not found"));
    }

    #[test]
    fn blank_id_is_rejected_locally() {
        let backend = MemoryBackend::new();
        assert!(run(&backend, " ", None).is_err());
        assert!(backend.requests().is_empty());
    }
}
