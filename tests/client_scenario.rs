use securepaste::api::PasteClient;
use securepaste::backend::memory::MemoryBackend;
use securepaste::config::ClientConfig;
use securepaste::error::ErrorKind;
use securepaste::model::{PasteOptions, PasteUpdate, Visibility};

#[test]
fn paste_lifecycle() {
    let backend = MemoryBackend::new();
    let client = PasteClient::new(&backend);
    assert!(client.health_check());

    let created = client
        .create_paste("T", "C", PasteOptions::new().visibility(Visibility::Public))
        .unwrap()
        .into_paste()
        .unwrap();
    assert_eq!(created.title, "T");
    assert_eq!(created.content, "C");
    assert_eq!(created.view_count, 0);

    let read = client.get_paste(&created.id, None).unwrap().into_paste().unwrap();
    assert_eq!(read.view_count, 1);

    let renamed = client
        .update_paste(&created.id, &PasteUpdate::new().title("T2"))
        .unwrap()
        .into_paste()
        .unwrap();
    assert_eq!(renamed.title, "T2");
    assert_eq!(renamed.content, "C");

    let public = client.list_public_pastes(0, Some(10)).unwrap().page.unwrap();
    assert_eq!(public.total_elements, 1);

    assert!(client.delete_paste(&created.id).is_ok());
    let gone = client.get_paste(&created.id, None).unwrap_err();
    assert_eq!(gone.kind(), ErrorKind::Http);
    assert!(gone.is_not_found());
}

#[test]
fn password_protected_paste() {
    let backend = MemoryBackend::new();
    let client = PasteClient::new(&backend);
    let secret = client
        .create_paste(
            "Secret Code",
            "const secret = 1;",
            PasteOptions::new()
                .visibility(Visibility::Unlisted)
                .password("secret123"),
        )
        .unwrap()
        .into_paste()
        .unwrap();

    assert!(client.get_paste(&secret.id, None).is_err());
    assert!(client.get_paste(&secret.id, Some("wrong")).is_err());
    let opened = client
        .get_paste(&secret.id, Some("secret123"))
        .unwrap()
        .into_paste()
        .unwrap();
    assert_eq!(opened.content, "const secret = 1;");

    // Unlisted pastes stay out of listings.
    let public = client.list_public_pastes(0, None).unwrap().page.unwrap();
    assert!(public.is_empty());
}

#[test]
fn expired_paste_cannot_be_read() {
    let backend = MemoryBackend::new();
    let client = PasteClient::new(&backend);
    let temp = client
        .create_paste("Temp", "soon gone", PasteOptions::new().expires_in(60))
        .unwrap()
        .into_paste()
        .unwrap();
    assert!(temp.expires_at.is_some());

    backend.advance_clock(chrono::Duration::minutes(61));
    assert!(client.get_paste(&temp.id, None).unwrap_err().is_not_found());
}

#[test]
fn http_client_health_check_never_fails() {
    let client = PasteClient::connect(&ClientConfig::with_base_url("http://127.0.0.1:9")).unwrap();
    assert!(!client.health_check());

    let err = client.get_statistics().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}
