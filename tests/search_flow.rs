//! Search submission scenarios driven through the controller

mod common;

use cinesearch::models::{DisplayState, QueryKey, ToastKind};
use cinesearch::view_models::{EMPTY_QUERY_MESSAGE, NO_RESULTS_MESSAGE};
use cinesearch::views::terminal_renderer::ERROR_VIEW_TEXT;
use cinesearch::Focus;
use common::*;
use crossterm::event::KeyCode;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn batman_search_should_render_cards_and_pagination() {
    let server = MockServer::start().await;
    mount_page(&server, "batman", 1, batman_page_one()).await;
    let mut controller = controller_for(&server);

    submit(&mut controller, "batman");
    assert_eq!(controller.view_model().display_state(), DisplayState::Loading);
    assert_eq!(controller.view_model().focus(), Focus::Grid);

    settle(&mut controller).await;

    let vm = controller.view_model();
    assert_eq!(vm.visible_card_count(), 2);
    assert!(!vm.results().is_fetching());
    assert!(vm.toasts().is_empty());
    match vm.display_state() {
        DisplayState::Results {
            response,
            placeholder,
        } => {
            assert!(!placeholder);
            assert_eq!(response.total_pages, 3);
            assert_eq!(response.results[1].title, "Batman Begins");
        }
        other => panic!("expected results, got {other:?}"),
    }

    let text = screen(&mut controller);
    assert!(text.contains("Batman Begins"));
    assert!(text.contains("1989 · ★ 7.2/10"));
    assert!(text.contains("←"));
    assert!(text.contains("Page 1/3"));
    assert!(text.contains("42 results"));
    assert!(!text.contains(ERROR_VIEW_TEXT));
}

#[tokio::test]
async fn request_should_carry_query_page_and_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("query", "the matrix"))
        .and(query_param("page", "1"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            1,
            1,
            1,
            vec![movie_json(603, "The Matrix", "1999-03-30", 8.2)],
        )))
        .expect(1)
        .mount(&server)
        .await;
    let mut controller = controller_for(&server);

    submit(&mut controller, "  the matrix  ");
    settle(&mut controller).await;

    assert_eq!(controller.view_model().search_state().query(), "the matrix");
    assert_eq!(controller.view_model().visible_card_count(), 1);
}

#[tokio::test]
async fn empty_results_should_toast_info_without_error_view() {
    let server = MockServer::start().await;
    mount_page(&server, "zzzzzqqqqq", 1, page_body(1, 0, 0, Vec::new())).await;
    let mut controller = controller_for(&server);

    submit(&mut controller, "zzzzzqqqqq");
    settle(&mut controller).await;

    let vm = controller.view_model();
    assert_eq!(vm.display_state(), DisplayState::Empty);
    assert_eq!(vm.visible_card_count(), 0);
    let toast = vm.toasts().latest().unwrap();
    assert_eq!(toast.kind, ToastKind::Info);
    assert_eq!(toast.message, NO_RESULTS_MESSAGE);

    let text = screen(&mut controller);
    assert!(text.contains(NO_RESULTS_MESSAGE));
    assert!(!text.contains(ERROR_VIEW_TEXT));
    assert!(!text.contains('←'));
}

#[tokio::test]
async fn blank_submission_should_not_hit_the_network() {
    let server = MockServer::start().await;
    let mut controller = controller_for(&server);

    submit(&mut controller, "   ");

    let vm = controller.view_model();
    assert_eq!(vm.display_state(), DisplayState::Neutral);
    assert_eq!(vm.search_service().in_flight_count(), 0);
    assert_eq!(vm.toasts().latest().unwrap().message, EMPTY_QUERY_MESSAGE);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn resubmitting_an_in_flight_query_should_not_duplicate_the_request() {
    let server = MockServer::start().await;
    mount_delayed_page(
        &server,
        "batman",
        1,
        batman_page_one(),
        Duration::from_millis(200),
    )
    .await;
    let mut controller = controller_for(&server);

    submit(&mut controller, "batman");
    // Back to the search bar and submit the same text again
    press(
        &mut controller,
        vec![key(KeyCode::Char('/')), key(KeyCode::Enter)],
    );
    assert_eq!(controller.view_model().search_service().in_flight_count(), 1);

    settle(&mut controller).await;

    assert_eq!(controller.view_model().visible_card_count(), 2);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn superseded_response_should_be_cached_but_not_shown() {
    let server = MockServer::start().await;
    mount_delayed_page(
        &server,
        "alien",
        1,
        page_body(
            1,
            1,
            1,
            vec![movie_json(348, "Alien", "1979-05-25", 8.1)],
        ),
        Duration::from_millis(300),
    )
    .await;
    mount_page(&server, "batman", 1, batman_page_one()).await;
    let mut controller = controller_for(&server);

    submit(&mut controller, "alien");
    press(
        &mut controller,
        vec![key(KeyCode::Char('/')), ctrl('u')],
    );
    submit(&mut controller, "batman");

    settle(&mut controller).await;
    settle(&mut controller).await;

    let vm = controller.view_model();
    assert_eq!(vm.search_state().query(), "batman");
    assert_eq!(vm.visible_card_count(), 2);
    assert_eq!(vm.movie_under_cursor().unwrap().title, "Batman");
    assert!(vm.toasts().is_empty());
    assert!(vm
        .search_service()
        .cache()
        .contains(&QueryKey::new("alien", 1)));
}

#[tokio::test]
async fn initial_query_argument_should_search_on_start() {
    let server = MockServer::start().await;
    mount_page(&server, "batman", 1, batman_page_one()).await;
    let mut controller = controller_with_args(&server, &["cinesearch", "--query", "batman"]);

    controller.step().unwrap();
    assert_eq!(controller.view_model().search_input(), "batman");
    settle(&mut controller).await;

    assert_eq!(controller.view_model().visible_card_count(), 2);
}
