use super::{ApiRequest, ApiResponse, Backend, Method};
use crate::model::{
    HealthStatus, LanguageCount, NewPaste, Page, Paste, PasteUpdate, Statistics, Visibility,
};
use chrono::{Duration, Local, NaiveDateTime, Timelike};
use serde::Serialize;
use serde_json::json;
use std::cell::RefCell;
use std::collections::HashMap;
use uuid::Uuid;

const DEFAULT_PAGE_SIZE: u32 = 20;
const POPULAR_LANGUAGE_LIMIT: usize = 10;
const RECENT_WINDOW_HOURS: i64 = 24;

/// In-process stand-in for the paste service, for testing and development.
/// Does NOT persist data.
///
/// Answers the same routes with the same status codes and JSON shapes as
/// the real service, so commands can be exercised end to end without a
/// network. Passwords are kept in clear text; hashing is the real
/// service's concern.
pub struct MemoryBackend {
    state: RefCell<ServiceState>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(ServiceState {
                pastes: Vec::new(),
                next_seq: 0,
                clock_offset: Duration::zero(),
                healthy: true,
                requests: Vec::new(),
            }),
        }
    }

    /// Stores a paste directly, skipping validation and the request log.
    pub fn insert(&self, new: NewPaste) -> Paste {
        self.state.borrow_mut().insert(new)
    }

    /// Makes `/health` report `DOWN` with a 503.
    pub fn set_healthy(&self, healthy: bool) {
        self.state.borrow_mut().healthy = healthy;
    }

    /// Moves the service clock forward, e.g. past a paste's expiry.
    pub fn advance_clock(&self, by: Duration) {
        let mut state = self.state.borrow_mut();
        state.clock_offset += by;
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    /// Number of pastes that have not been deleted.
    pub fn live_count(&self) -> usize {
        self.state
            .borrow()
            .pastes
            .iter()
            .filter(|p| !p.is_deleted)
            .count()
    }
}

impl Backend for MemoryBackend {
    fn execute(&self, request: &ApiRequest) -> crate::error::Result<ApiResponse> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request.clone());
        Ok(state.route(request))
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[derive(Debug, Clone)]
struct StoredPaste {
    seq: u64,
    paste: Paste,
    // Accepted on create but never echoed back by the service.
    #[allow(dead_code)]
    author_email: Option<String>,
    password: Option<String>,
    is_deleted: bool,
}

impl StoredPaste {
    fn is_expired(&self, now: NaiveDateTime) -> bool {
        matches!(self.paste.expires_at, Some(at) if at < now)
    }

    fn is_listable(&self, now: NaiveDateTime) -> bool {
        !self.is_deleted && !self.is_expired(now) && self.paste.visibility == Visibility::Public
    }
}

struct ServiceState {
    pastes: Vec<StoredPaste>,
    next_seq: u64,
    clock_offset: Duration,
    healthy: bool,
    requests: Vec<ApiRequest>,
}

impl ServiceState {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now) + self.clock_offset
    }

    fn route(&mut self, request: &ApiRequest) -> ApiResponse {
        let segments: Vec<&str> = request.segments.iter().map(String::as_str).collect();

        match (request.method, segments.as_slice()) {
            (Method::Post, []) => self.create(request),
            (Method::Get, ["health"]) => self.health(),
            (Method::Get, ["stats"]) => self.statistics(),
            (Method::Get, ["public"]) => self.list(request, |_| true),
            (Method::Get, ["recent"]) => {
                let since = self.now() - Duration::hours(RECENT_WINDOW_HOURS);
                self.list(request, |p| p.paste.created_at > since)
            }
            (Method::Get, ["search"]) => match request.query_value("q") {
                Some(term) => {
                    let term = term.to_lowercase();
                    self.list(request, |p| {
                        p.paste.title.to_lowercase().contains(&term)
                            || p.paste.content.to_lowercase().contains(&term)
                    })
                }
                None => bad_request("Required parameter 'q' is not present"),
            },
            (Method::Get, ["language", language]) => {
                let language = language.to_lowercase();
                self.list(request, |p| {
                    matches!(&p.paste.language, Some(l) if l.to_lowercase() == language)
                })
            }
            (Method::Get, [id]) => self.get(id, request.query_value("password")),
            (Method::Put, [id]) => self.update(id, request),
            (Method::Delete, [id]) => self.delete(id),
            _ => error_response(
                404,
                "Not Found",
                &format!("No handler for {} {}", request.method, request.path()),
            ),
        }
    }

    fn insert(&mut self, new: NewPaste) -> Paste {
        let now = self.now();
        let options = new.options;
        let password = options.password.filter(|p| !p.trim().is_empty());
        let expires_at = options
            .expiration_minutes
            .filter(|m| *m > 0)
            .map(|m| now + Duration::minutes(i64::from(m)));

        let paste = Paste {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            content: new.content,
            language: options.language,
            author_name: options.author_name,
            author_email: None,
            visibility: options.visibility.unwrap_or_default(),
            password_protected: password.is_some(),
            expires_at,
            created_at: now,
            updated_at: Some(now),
            view_count: 0,
        };

        self.next_seq += 1;
        self.pastes.push(StoredPaste {
            seq: self.next_seq,
            paste: paste.clone(),
            author_email: options.author_email,
            password,
            is_deleted: false,
        });
        paste
    }

    fn find_mut(
        &mut self,
        id: &str,
        reject_expired: bool,
    ) -> std::result::Result<&mut StoredPaste, ApiResponse> {
        let now = self.now();
        let stored = self
            .pastes
            .iter_mut()
            .find(|p| p.paste.id == id && !p.is_deleted)
            .ok_or_else(|| not_found(&format!("Paste not found: {}", id)))?;
        if reject_expired && stored.is_expired(now) {
            return Err(not_found("Paste has expired"));
        }
        Ok(stored)
    }

    fn create(&mut self, request: &ApiRequest) -> ApiResponse {
        let new: NewPaste = match parse_body(request) {
            Ok(new) => new,
            Err(response) => return response,
        };
        if let Err(e) = new.validate() {
            return validation_failed(&e.to_string());
        }
        let paste = self.insert(new);
        json_response(201, &paste)
    }

    fn get(&mut self, id: &str, password: Option<&str>) -> ApiResponse {
        let stored = match self.find_mut(id, true) {
            Ok(stored) => stored,
            Err(response) => return response,
        };

        if let Some(expected) = &stored.password {
            let granted = match password {
                Some(supplied) if !supplied.trim().is_empty() => supplied == expected,
                _ => false,
            };
            if !granted {
                return error_response(403, "Access Denied", "Invalid password");
            }
        }

        stored.paste.view_count += 1;
        json_response(200, &stored.paste)
    }

    fn update(&mut self, id: &str, request: &ApiRequest) -> ApiResponse {
        let update: PasteUpdate = match parse_body(request) {
            Ok(update) => update,
            Err(response) => return response,
        };
        if !update.is_empty() {
            if let Err(e) = update.validate() {
                return validation_failed(&e.to_string());
            }
        }

        let now = self.now();
        let stored = match self.find_mut(id, true) {
            Ok(stored) => stored,
            Err(response) => return response,
        };
        let paste = &mut stored.paste;
        if let Some(title) = update.title.filter(|t| !t.trim().is_empty()) {
            paste.title = title;
        }
        if let Some(content) = update.content.filter(|c| !c.trim().is_empty()) {
            paste.content = content;
        }
        if let Some(language) = update.language.filter(|l| !l.trim().is_empty()) {
            paste.language = Some(language);
        }
        if let Some(visibility) = update.visibility {
            paste.visibility = visibility;
        }
        paste.updated_at = Some(now);

        json_response(200, &*paste)
    }

    fn delete(&mut self, id: &str) -> ApiResponse {
        match self.find_mut(id, false) {
            Ok(stored) => {
                stored.is_deleted = true;
                ApiResponse::new(204, "")
            }
            Err(response) => response,
        }
    }

    fn list<F>(&self, request: &ApiRequest, filter: F) -> ApiResponse
    where
        F: Fn(&StoredPaste) -> bool,
    {
        let (page, size) = match page_params(request) {
            Ok(params) => params,
            Err(response) => return response,
        };
        let now = self.now();

        let mut matches: Vec<&StoredPaste> = self
            .pastes
            .iter()
            .filter(|p| p.is_listable(now) && filter(p))
            .collect();
        matches.sort_by(|a, b| {
            b.paste
                .created_at
                .cmp(&a.paste.created_at)
                .then(b.seq.cmp(&a.seq))
        });

        let total = matches.len();
        let total_pages = total.div_ceil(size as usize);
        let content: Vec<Paste> = matches
            .into_iter()
            .skip((page as usize).saturating_mul(size as usize))
            .take(size as usize)
            .map(|p| p.paste.clone())
            .collect();

        let body = Page {
            total_elements: total as u64,
            total_pages: total_pages as u32,
            number: page,
            size,
            number_of_elements: content.len() as u32,
            first: page == 0,
            last: (page as usize).saturating_add(1) >= total_pages,
            empty: content.is_empty(),
            content,
        };
        json_response(200, &body)
    }

    fn statistics(&self) -> ApiResponse {
        let live: Vec<&StoredPaste> = self.pastes.iter().filter(|p| !p.is_deleted).collect();

        let mut counts: HashMap<&str, u64> = HashMap::new();
        for stored in &live {
            if let Some(language) = stored.paste.language.as_deref() {
                if !language.is_empty() {
                    *counts.entry(language).or_default() += 1;
                }
            }
        }
        let mut popular: Vec<LanguageCount> = counts
            .into_iter()
            .map(|(language, count)| LanguageCount(language.to_string(), count))
            .collect();
        popular.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        popular.truncate(POPULAR_LANGUAGE_LIMIT);

        let stats = Statistics {
            total_pastes: live.len() as u64,
            public_pastes: live
                .iter()
                .filter(|p| p.paste.visibility == Visibility::Public)
                .count() as u64,
            total_views: live.iter().map(|p| p.paste.view_count).sum(),
            popular_languages: popular,
        };
        json_response(200, &stats)
    }

    fn health(&self) -> ApiResponse {
        let (status, label) = if self.healthy {
            (200, "UP")
        } else {
            (503, "DOWN")
        };
        json_response(
            status,
            &HealthStatus {
                status: label.to_string(),
                service: Some("SecurePaste".to_string()),
            },
        )
    }
}

fn parse_body<T: serde::de::DeserializeOwned>(
    request: &ApiRequest,
) -> std::result::Result<T, ApiResponse> {
    let body = request
        .body
        .clone()
        .ok_or_else(|| bad_request("Required request body is missing"))?;
    serde_json::from_value(body).map_err(|e| bad_request(&format!("Malformed JSON request: {}", e)))
}

fn page_params(request: &ApiRequest) -> std::result::Result<(u32, u32), ApiResponse> {
    let page = parse_param(request, "page", 0)?;
    let size = parse_param(request, "size", DEFAULT_PAGE_SIZE)?;
    if size == 0 {
        return Err(bad_request("Page size must not be less than one"));
    }
    Ok((page, size))
}

fn parse_param(
    request: &ApiRequest,
    key: &str,
    default: u32,
) -> std::result::Result<u32, ApiResponse> {
    match request.query_value(key) {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| bad_request(&format!("Invalid value for '{}': {}", key, raw))),
    }
}

fn json_response<T: Serialize>(status: u16, value: &T) -> ApiResponse {
    match serde_json::to_string(value) {
        Ok(body) => ApiResponse::new(status, body),
        Err(e) => error_response(500, "Internal Server Error", &e.to_string()),
    }
}

fn error_response(status: u16, error: &str, message: &str) -> ApiResponse {
    ApiResponse::new(status, json!({ "error": error, "message": message }).to_string())
}

fn not_found(message: &str) -> ApiResponse {
    error_response(404, "Not Found", message)
}

fn bad_request(message: &str) -> ApiResponse {
    error_response(400, "Bad Request", message)
}

fn validation_failed(message: &str) -> ApiResponse {
    ApiResponse::new(
        400,
        json!({ "error": "Validation Failed", "errors": [message] }).to_string(),
    )
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::api::PasteClient;
    use crate::model::PasteOptions;

    /// Seeds a [`MemoryBackend`] and hands out clients bound to it.
    pub struct ServiceFixture {
        pub backend: MemoryBackend,
    }

    impl Default for ServiceFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ServiceFixture {
        pub fn new() -> Self {
            Self {
                backend: MemoryBackend::new(),
            }
        }

        pub fn client(&self) -> PasteClient<&MemoryBackend> {
            PasteClient::new(&self.backend)
        }

        pub fn with_pastes(self, count: usize) -> Self {
            for i in 0..count {
                self.backend.insert(NewPaste::new(
                    format!("Test Paste {}", i + 1),
                    format!("Content for paste {}", i + 1),
                    PasteOptions::new().language("text"),
                ));
            }
            self
        }

        pub fn with_paste(self, title: &str, content: &str, options: PasteOptions) -> Self {
            self.backend.insert(NewPaste::new(title, content, options));
            self
        }

        pub fn with_language_paste(self, title: &str, language: &str) -> Self {
            self.with_paste(title, "Some content", PasteOptions::new().language(language))
        }

        pub fn with_deleted_paste(self, title: &str) -> Self {
            let paste = self
                .backend
                .insert(NewPaste::new(title, "Deleted content", PasteOptions::new()));
            if let Some(stored) = self
                .backend
                .state
                .borrow_mut()
                .pastes
                .iter_mut()
                .find(|p| p.paste.id == paste.id)
            {
                stored.is_deleted = true;
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::ServiceFixture;
    use super::*;
    use crate::model::PasteOptions;

    fn create(backend: &MemoryBackend, body: serde_json::Value) -> ApiResponse {
        backend
            .execute(&ApiRequest::new(Method::Post, Vec::<String>::new()).with_body(body))
            .unwrap()
    }

    fn decode<T: serde::de::DeserializeOwned>(response: &ApiResponse) -> T {
        serde_json::from_str(&response.body).unwrap()
    }

    #[test]
    fn create_returns_201_with_defaults() {
        let backend = MemoryBackend::new();
        let response = create(&backend, json!({"title": "T", "content": "C"}));
        assert_eq!(response.status, 201);

        let paste: Paste = decode(&response);
        assert_eq!(paste.title, "T");
        assert_eq!(paste.visibility, Visibility::Public);
        assert_eq!(paste.view_count, 0);
        assert!(!paste.password_protected);
    }

    #[test]
    fn create_rejects_missing_title() {
        let backend = MemoryBackend::new();
        let response = create(&backend, json!({"content": "C"}));
        assert_eq!(response.status, 400);
        assert_eq!(backend.live_count(), 0);
    }

    #[test]
    fn create_rejects_invalid_fields() {
        let backend = MemoryBackend::new();
        let response = create(&backend, json!({"title": "", "content": "C"}));
        assert_eq!(response.status, 400);
        let body: serde_json::Value = decode(&response);
        assert_eq!(body["error"], "Validation Failed");
    }

    #[test]
    fn get_increments_view_count() {
        let backend = MemoryBackend::new();
        let paste = backend.insert(NewPaste::new("T", "C", PasteOptions::new()));

        let first: Paste = decode(&backend.execute(&ApiRequest::get([&paste.id])).unwrap());
        let second: Paste = decode(&backend.execute(&ApiRequest::get([&paste.id])).unwrap());
        assert_eq!(first.view_count, 1);
        assert_eq!(second.view_count, 2);
    }

    #[test]
    fn password_is_enforced() {
        let backend = MemoryBackend::new();
        let paste = backend.insert(NewPaste::new(
            "Secret",
            "C",
            PasteOptions::new().password("hunter2"),
        ));
        assert!(paste.password_protected);

        let without = backend.execute(&ApiRequest::get([&paste.id])).unwrap();
        let wrong = backend
            .execute(&ApiRequest::get([&paste.id]).with_query("password", "nope"))
            .unwrap();
        let right = backend
            .execute(&ApiRequest::get([&paste.id]).with_query("password", "hunter2"))
            .unwrap();
        assert_eq!(without.status, 403);
        assert_eq!(wrong.status, 403);
        assert_eq!(right.status, 200);
    }

    #[test]
    fn blank_password_does_not_protect() {
        let backend = MemoryBackend::new();
        let paste = backend.insert(NewPaste::new("T", "C", PasteOptions::new().password("  ")));
        assert!(!paste.password_protected);
    }

    #[test]
    fn expired_pastes_are_gone() {
        let backend = MemoryBackend::new();
        let paste = backend.insert(NewPaste::new("T", "C", PasteOptions::new().expires_in(60)));
        assert!(paste.expires_at.is_some());

        backend.advance_clock(Duration::minutes(61));
        let response = backend.execute(&ApiRequest::get([&paste.id])).unwrap();
        assert_eq!(response.status, 404);
        assert!(response.body.contains("expired"));
    }

    #[test]
    fn delete_is_soft_and_hides_paste() {
        let backend = MemoryBackend::new();
        let paste = backend.insert(NewPaste::new("T", "C", PasteOptions::new()));

        let deleted = backend
            .execute(&ApiRequest::new(Method::Delete, [&paste.id]))
            .unwrap();
        assert_eq!(deleted.status, 204);
        assert!(deleted.body.is_empty());

        let again = backend
            .execute(&ApiRequest::new(Method::Delete, [&paste.id]))
            .unwrap();
        assert_eq!(again.status, 404);
        assert_eq!(backend.live_count(), 0);
    }

    #[test]
    fn update_ignores_blank_fields() {
        let backend = MemoryBackend::new();
        let paste = backend.insert(NewPaste::new("T", "C", PasteOptions::new()));

        let response = backend
            .execute(
                &ApiRequest::new(Method::Put, [&paste.id])
                    .with_body(json!({"title": "New", "content": "   "})),
            )
            .unwrap();
        let updated: Paste = decode(&response);
        assert_eq!(updated.title, "New");
        assert_eq!(updated.content, "C");
    }

    #[test]
    fn public_listing_excludes_unlisted_and_pages() {
        let fixture = ServiceFixture::new().with_pastes(5).with_paste(
            "Hidden",
            "C",
            PasteOptions::new().visibility(Visibility::Unlisted),
        );

        let response = fixture
            .backend
            .execute(
                &ApiRequest::get(["public"])
                    .with_query("page", 1)
                    .with_query("size", 2),
            )
            .unwrap();
        let page: Page<Paste> = decode(&response);
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.number, 1);
        assert_eq!(page.content.len(), 2);
        assert!(!page.first);
        assert!(!page.last);
        // Newest first: pastes 5,4 | 3,2 | 1
        assert_eq!(page.content[0].title, "Test Paste 3");
    }

    #[test]
    fn only_active_public_pastes_are_listable() {
        let backend = MemoryBackend::new();
        let public = backend.insert(NewPaste::new("P", "C", PasteOptions::new()));
        backend.insert(NewPaste::new(
            "U",
            "C",
            PasteOptions::new().visibility(Visibility::Unlisted),
        ));
        backend.insert(NewPaste::new(
            "X",
            "C",
            PasteOptions::new().visibility(Visibility::Private),
        ));
        backend.insert(NewPaste::new("E", "C", PasteOptions::new().expires_in(30)));

        let state = backend.state.borrow();
        let later = state.now() + Duration::minutes(31);
        let listable: Vec<&str> = state
            .pastes
            .iter()
            .filter(|p| p.is_listable(later))
            .map(|p| p.paste.id.as_str())
            .collect();
        assert_eq!(listable, vec![public.id.as_str()]);
    }

    #[test]
    fn search_and_language_skip_unlisted_and_private() {
        let fixture = ServiceFixture::new()
            .with_paste(
                "Rust public",
                "fn main() {}",
                PasteOptions::new().language("rust"),
            )
            .with_paste(
                "Rust unlisted",
                "fn main() {}",
                PasteOptions::new()
                    .language("rust")
                    .visibility(Visibility::Unlisted),
            )
            .with_paste(
                "Rust private",
                "fn main() {}",
                PasteOptions::new()
                    .language("rust")
                    .visibility(Visibility::Private),
            );

        let found: Page<Paste> = decode(
            &fixture
                .backend
                .execute(&ApiRequest::get(["search"]).with_query("q", "rust"))
                .unwrap(),
        );
        let by_language: Page<Paste> = decode(
            &fixture
                .backend
                .execute(&ApiRequest::get(["language", "rust"]))
                .unwrap(),
        );
        for page in [found, by_language] {
            assert_eq!(page.total_elements, 1);
            assert_eq!(page.content[0].title, "Rust public");
        }
    }

    #[test]
    fn expired_pastes_leave_every_listing() {
        let fixture = ServiceFixture::new()
            .with_paste(
                "Keeper",
                "lasting python",
                PasteOptions::new().language("python"),
            )
            .with_paste(
                "Fleeting",
                "short python",
                PasteOptions::new().language("python").expires_in(10),
            );

        let listings = || {
            [
                ApiRequest::get(["public"]),
                ApiRequest::get(["recent"]),
                ApiRequest::get(["search"]).with_query("q", "python"),
                ApiRequest::get(["language", "python"]),
            ]
        };
        for request in listings() {
            let page: Page<Paste> = decode(&fixture.backend.execute(&request).unwrap());
            assert_eq!(page.total_elements, 2, "{}", request.path());
        }

        fixture.backend.advance_clock(Duration::minutes(11));
        for request in listings() {
            let page: Page<Paste> = decode(&fixture.backend.execute(&request).unwrap());
            assert_eq!(page.total_elements, 1, "{}", request.path());
            assert_eq!(page.content[0].title, "Keeper");
        }
    }

    #[test]
    fn extreme_page_numbers_do_not_overflow() {
        let fixture = ServiceFixture::new().with_pastes(2);

        let response = fixture
            .backend
            .execute(&ApiRequest::get(["public"]).with_query("page", u32::MAX))
            .unwrap();
        assert_eq!(response.status, 200);
        let page: Page<Paste> = decode(&response);
        assert_eq!(page.number, u32::MAX);
        assert!(page.is_empty());
        assert!(page.last);

        let too_big = fixture
            .backend
            .execute(&ApiRequest::get(["public"]).with_query("page", u64::MAX))
            .unwrap();
        assert_eq!(too_big.status, 400);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let backend = MemoryBackend::new();
        let response = backend
            .execute(&ApiRequest::get(["public"]).with_query("size", 0))
            .unwrap();
        assert_eq!(response.status, 400);
    }

    #[test]
    fn search_matches_title_or_content_case_insensitively() {
        let fixture = ServiceFixture::new()
            .with_paste("Python tips", "x", PasteOptions::new())
            .with_paste("Other", "uses PYTHON", PasteOptions::new())
            .with_paste("Unrelated", "nothing", PasteOptions::new());

        let response = fixture
            .backend
            .execute(&ApiRequest::get(["search"]).with_query("q", "python"))
            .unwrap();
        let page: Page<Paste> = decode(&response);
        assert_eq!(page.total_elements, 2);
    }

    #[test]
    fn search_without_query_is_bad_request() {
        let backend = MemoryBackend::new();
        let response = backend.execute(&ApiRequest::get(["search"])).unwrap();
        assert_eq!(response.status, 400);
    }

    #[test]
    fn recent_excludes_old_pastes() {
        let fixture = ServiceFixture::new().with_pastes(1);
        fixture.backend.advance_clock(Duration::hours(25));
        fixture.backend.insert(NewPaste::new("Fresh", "C", PasteOptions::new()));

        let response = fixture
            .backend
            .execute(&ApiRequest::get(["recent"]))
            .unwrap();
        let page: Page<Paste> = decode(&response);
        assert_eq!(page.total_elements, 1);
        assert_eq!(page.content[0].title, "Fresh");
    }

    #[test]
    fn statistics_rank_languages() {
        let fixture = ServiceFixture::new()
            .with_language_paste("a", "rust")
            .with_language_paste("b", "python")
            .with_language_paste("c", "python")
            .with_deleted_paste("gone");

        let response = fixture.backend.execute(&ApiRequest::get(["stats"])).unwrap();
        let stats: Statistics = decode(&response);
        assert_eq!(stats.total_pastes, 3);
        assert_eq!(stats.public_pastes, 3);
        assert_eq!(
            stats.popular_languages,
            vec![
                LanguageCount("python".into(), 2),
                LanguageCount("rust".into(), 1)
            ]
        );
    }

    #[test]
    fn health_reflects_flag() {
        let backend = MemoryBackend::new();
        let up: HealthStatus = decode(&backend.execute(&ApiRequest::get(["health"])).unwrap());
        assert!(up.is_up());

        backend.set_healthy(false);
        let down = backend.execute(&ApiRequest::get(["health"])).unwrap();
        assert_eq!(down.status, 503);
    }

    #[test]
    fn unknown_routes_are_404() {
        let backend = MemoryBackend::new();
        let response = backend
            .execute(&ApiRequest::new(Method::Put, Vec::<String>::new()))
            .unwrap();
        assert_eq!(response.status, 404);
    }

    #[test]
    fn requests_are_recorded() {
        let backend = MemoryBackend::new();
        backend.execute(&ApiRequest::get(["health"])).unwrap();
        backend.execute(&ApiRequest::get(["stats"])).unwrap();
        let seen: Vec<String> = backend.requests().iter().map(|r| r.path()).collect();
        assert_eq!(seen, vec!["/api/pastes/health", "/api/pastes/stats"]);
    }
}
