mod common;

use common::client_for;
use common::mock_backend::{CapturedRequest, MockBackend, MockResponse};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shopdesk::ui::app::{App, InputMode, Tab};
use shopdesk::ui::categories::CategoryIntent;
use shopdesk::ui::events::AppEvent;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

const PRODUCTS: &str = r#"{"data": [
    {"ID": 1, "TENTS": "Gold ring", "MADM": 1, "GIANIEMYET": 100, "SLTK": 1},
    {"ID": 2, "TENTS": "Silver chain", "MADM": 2, "GIANIEMYET": 200, "SLTK": 0}
], "currentPage": 1, "totalPages": 3}"#;

const CATEGORIES: &str = r#"[{"ID": 1, "TENDM": "Rings"}, {"ID": 2, "TENDM": "Chains"}]"#;

const ORDERS: &str = r#"[{"ID_HOADON": 5, "NGAYLAPHD": "2024-01-01 10:00:00",
    "TRANGTHAI": 0, "TRIGIAHD": 100, "TIENPHAITRA": 90}]"#;

async fn started() -> (MockBackend, App, UnboundedReceiver<AppEvent>) {
    let backend = MockBackend::start().await;
    backend.route("/api/admin/trangsuc", MockResponse::json(PRODUCTS)).await;
    backend.route("/api/danhmucts", MockResponse::json(CATEGORIES)).await;
    backend.route("/api/customer/history", MockResponse::json(ORDERS)).await;
    backend
        .route("/api/danhmucts/create", MockResponse::json(r#"{"message": "Added"}"#))
        .await;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(Arc::new(client_for(&backend.base_url())), 2, tx);
    app.start();
    pump(&mut app, &mut rx, 3).await;
    (backend, app, rx)
}

/// Applies the next `count` backend outcomes.
async fn pump(app: &mut App, rx: &mut UnboundedReceiver<AppEvent>, count: usize) {
    for _ in 0..count {
        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("backend outcome should arrive")
            .expect("channel open");
        app.on_event(event);
    }
}

async fn last_products_request(backend: &MockBackend) -> CapturedRequest {
    backend
        .api_requests()
        .await
        .into_iter()
        .rev()
        .find(|r| r.path == "/api/admin/trangsuc")
        .expect("a product request was made")
}

fn press(app: &mut App, code: KeyCode) {
    app.on_event(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

#[tokio::test]
async fn start_loads_every_screen() {
    let (_backend, app, _rx) = started().await;

    assert_eq!(app.products().items().len(), 2);
    assert_eq!(app.products().total_pages(), 3);
    assert_eq!(app.categories().categories.len(), 2);
    assert_eq!(app.orders().orders.len(), 1);
    assert!(!app.is_busy());
}

#[tokio::test]
async fn category_filter_is_sent_to_backend() {
    let (backend, mut app, mut rx) = started().await;

    press(&mut app, KeyCode::Char('c'));
    pump(&mut app, &mut rx, 1).await;

    assert_eq!(app.category_filter_name(), Some("Rings"));
    let last = last_products_request(&backend).await;
    assert!(last.query_pairs().contains(&("category".to_string(), "1".to_string())));

    press(&mut app, KeyCode::Char('x'));
    pump(&mut app, &mut rx, 1).await;
    assert_eq!(app.category_filter_name(), None);
}

#[tokio::test]
async fn search_is_applied_on_enter() {
    let (backend, mut app, mut rx) = started().await;

    press(&mut app, KeyCode::Char('/'));
    for ch in "ring".chars() {
        press(&mut app, KeyCode::Char(ch));
    }
    assert!(matches!(app.mode(), InputMode::Editing { .. }));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode(), &InputMode::Normal);
    pump(&mut app, &mut rx, 1).await;

    let last = last_products_request(&backend).await;
    assert!(last.query_pairs().contains(&("search".to_string(), "ring".to_string())));
    assert_eq!(app.products().query.search, "ring");
}

#[tokio::test]
async fn creating_a_category_reloads_the_list() {
    let (backend, mut app, mut rx) = started().await;

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.tab(), Tab::Categories);
    press(&mut app, KeyCode::Char('n'));
    for ch in "Anklets".chars() {
        press(&mut app, KeyCode::Char(ch));
    }
    press(&mut app, KeyCode::Enter);
    assert!(app.categories().submitting);

    // Create outcome, then the reload it triggers.
    pump(&mut app, &mut rx, 2).await;

    assert_eq!(app.categories().success.as_deref(), Some("Added"));
    assert!(app.categories().new_name.is_empty());
    let category_loads = backend
        .api_requests()
        .await
        .iter()
        .filter(|r| r.path == "/api/danhmucts")
        .count();
    assert_eq!(category_loads, 2);
}

#[tokio::test]
async fn category_filter_follows_the_category_after_reload() {
    let (backend, mut app, mut rx) = started().await;

    press(&mut app, KeyCode::Char('c'));
    pump(&mut app, &mut rx, 1).await;
    assert_eq!(app.category_filter_name(), Some("Rings"));

    // The reload lists the new category ahead of the selected one.
    backend
        .route(
            "/api/danhmucts",
            MockResponse::json(
                r#"[{"ID": 0, "TENDM": "Anklets"}, {"ID": 1, "TENDM": "Rings"}, {"ID": 2, "TENDM": "Chains"}]"#,
            ),
        )
        .await;
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('n'));
    for ch in "Anklets".chars() {
        press(&mut app, KeyCode::Char(ch));
    }
    press(&mut app, KeyCode::Enter);
    pump(&mut app, &mut rx, 2).await;

    assert_eq!(app.categories().categories.len(), 3);
    assert_eq!(app.category_filter_name(), Some("Rings"));

    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('c'));
    pump(&mut app, &mut rx, 1).await;
    assert_eq!(app.category_filter_name(), Some("Chains"));
    let last = last_products_request(&backend).await;
    assert!(last.query_pairs().contains(&("category".to_string(), "2".to_string())));
}

#[tokio::test]
async fn reload_requested_during_a_load_runs_after_it() {
    let (backend, mut app, mut rx) = started().await;

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('r'));
    assert!(app.categories().loading);

    backend
        .route(
            "/api/danhmucts",
            MockResponse::json(
                r#"[{"ID": 1, "TENDM": "Rings"}, {"ID": 2, "TENDM": "Chains"}, {"ID": 3, "TENDM": "Anklets"}]"#,
            ),
        )
        .await;
    let created = CategoryIntent::CreateSucceeded(Some("Added".into()));
    app.on_event(AppEvent::Categories(created));

    // The refresh in flight, then the reload queued behind it.
    pump(&mut app, &mut rx, 2).await;

    assert!(!app.categories().loading);
    assert_eq!(app.categories().categories.len(), 3);
    let category_loads = backend
        .api_requests()
        .await
        .iter()
        .filter(|r| r.path == "/api/danhmucts")
        .count();
    assert_eq!(category_loads, 3);
}

#[tokio::test]
async fn blank_category_name_never_reaches_backend() {
    let (backend, mut app, _rx) = started().await;

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);

    assert!(!app.categories().submitting);
    assert_eq!(
        app.categories().error.as_deref(),
        Some("Category name must not be empty.")
    );
    assert!(backend
        .api_requests()
        .await
        .iter()
        .all(|r| r.path != "/api/danhmucts/create"));
}

#[tokio::test]
async fn out_of_range_page_jump_shows_error() {
    let (backend, mut app, _rx) = started().await;
    let before = backend.api_requests().await.len();

    press(&mut app, KeyCode::Char('g'));
    // Jump box starts with the current page.
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Char('7'));
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        app.products().error.as_deref(),
        Some("Please enter a valid page number.")
    );
    assert_eq!(backend.api_requests().await.len(), before);
}

#[tokio::test]
async fn q_quits() {
    let (_backend, mut app, _rx) = started().await;
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}
