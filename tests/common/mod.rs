//! Common test utilities and infrastructure
//!
//! This module provides shared functionality for integration tests including:
//! - A controller wired to mock terminal streams
//! - A wiremock server standing in for the search API
//! - Key event and payload builders

#![allow(dead_code)]

use cinesearch::cmd_args::CommandLineArgs;
use cinesearch::config::AppConfig;
use cinesearch::io::{MockEventStream, MockRenderStream};
use cinesearch::AppController;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub type TestController = AppController<MockEventStream, MockRenderStream>;

pub const SEARCH_PATH: &str = "/3/search/movie";
pub const TEST_TOKEN: &str = "integration-token";

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

pub fn config_for(server: &MockServer) -> AppConfig {
    AppConfig {
        api_url: format!("{}{}", server.uri(), SEARCH_PATH),
        token: TEST_TOKEN.to_string(),
        ..AppConfig::default()
    }
}

pub fn controller_for(server: &MockServer) -> TestController {
    controller_with_args(server, &["cinesearch"])
}

pub fn controller_with_args(server: &MockServer, args: &[&str]) -> TestController {
    AppController::with_io_streams(
        CommandLineArgs::parse_from(args),
        &config_for(server),
        MockEventStream::empty(),
        MockRenderStream::with_size((100, 30)),
    )
    .unwrap()
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(ch: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

/// Queue key events and process them
pub fn press(controller: &mut TestController, events: Vec<Event>) {
    for event in events {
        controller.event_stream_mut().push_event(event);
    }
    controller.step().unwrap();
}

/// Type `text` into the search bar and press Enter
pub fn submit(controller: &mut TestController, text: &str) {
    let mut events: Vec<Event> = text.chars().map(|ch| key(KeyCode::Char(ch))).collect();
    events.push(key(KeyCode::Enter));
    press(controller, events);
}

/// Wait for the next completed fetch to be applied and rendered
pub async fn settle(controller: &mut TestController) {
    let received = controller.wait_for_search(FETCH_TIMEOUT).await.unwrap();
    assert!(received, "no search response arrived within {FETCH_TIMEOUT:?}");
}

/// Force a full redraw and return the visible screen text
pub fn screen(controller: &mut TestController) -> String {
    press(controller, vec![Event::Resize(100, 30)]);
    controller.renderer().render_stream().visible_text()
}

pub fn movie_json(id: u64, title: &str, release_date: &str, vote_average: f64) -> Value {
    json!({
        "id": id,
        "title": title,
        "poster_path": format!("/poster{id}.jpg"),
        "backdrop_path": null,
        "overview": format!("{title} overview."),
        "release_date": release_date,
        "vote_average": vote_average,
    })
}

pub fn page_body(page: u32, total_pages: u32, total_results: u64, movies: Vec<Value>) -> Value {
    json!({
        "page": page,
        "results": movies,
        "total_pages": total_pages,
        "total_results": total_results,
    })
}

/// Serve `body` for (`query`, `page`)
pub async fn mount_page(server: &MockServer, query: &str, page: u32, body: Value) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("query", query))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Serve `body` for (`query`, `page`) after `delay`
pub async fn mount_delayed_page(
    server: &MockServer,
    query: &str,
    page: u32,
    body: Value,
    delay: Duration,
) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("query", query))
        .and(query_param("page", page.to_string()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(body)
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

/// Two Batman movies out of three pages
pub fn batman_page_one() -> Value {
    page_body(
        1,
        3,
        42,
        vec![
            movie_json(268, "Batman", "1989-06-21", 7.2),
            movie_json(272, "Batman Begins", "2005-06-10", 7.7),
        ],
    )
}
