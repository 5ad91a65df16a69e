//! Detail view scenarios: the item and seller fetches are joined by ticket.

mod common;

use common::*;
use mercado_busca::app::DetailStatus;
use mercado_busca::catalog::CatalogRequest;
use mercado_busca::ui::Body;
use mercado_busca::{Action, AppState, Event, Focus};
use serde_json::json;

/// A state with two results, returning the item and seller requests issued
/// for the selected one.
fn open_detail(state: &mut AppState) -> (CatalogRequest, CatalogRequest) {
    let (_, request) = only_fetch(&search(state, "notebook"));
    respond(
        state,
        &request,
        200,
        &search_body(vec![
            product("MLB1", "Notebook A", 3999.0, 10),
            product("MLB2", "Notebook B", 4999.0, 20),
        ]),
    );
    detail_requests(&send(state, &[Event::Submit]))
}

fn detail_requests(actions: &[Action]) -> (CatalogRequest, CatalogRequest) {
    match actions {
        [Action::Fetch { request: item, .. }, Action::Fetch { request: seller, .. }] => {
            (item.clone(), seller.clone())
        }
        other => panic!("expected item and seller fetches, got {other:?}"),
    }
}

#[test]
fn both_halves_open_the_detail_view() {
    let mut state = state();
    let (item, seller) = open_detail(&mut state);
    assert!(state.detail.is_loading());

    assert!(!respond(&mut state, &seller, 200, &seller_body(10)));
    assert!(state.detail.is_loading());

    assert!(respond(&mut state, &item, 200, &item_body("MLB1")));

    assert_eq!(state.focus, Focus::Detail);
    let vm = state.compute_viewmodel(40, 120);
    let Body::Detail(detail) = vm.body else {
        panic!("expected the detail view");
    };
    assert_eq!(detail.title, "Notebook Gamer");
    assert_eq!(detail.seller_nickname, "LOJA_OFICIAL");
    assert_eq!(detail.seller_reputation, "5_green");
    assert_eq!(detail.condition, "Novo");
    assert_eq!(detail.sold.as_deref(), Some("12 vendidos"));
    assert_eq!(detail.primary_image, "https://img.test/1.jpg");
}

#[test]
fn detail_fetches_target_the_selected_card() {
    let mut state = state();
    let (_, request) = only_fetch(&search(&mut state, "notebook"));
    respond(
        &mut state,
        &request,
        200,
        &search_body(vec![product("MLB1", "A", 1.0, 10), product("MLB2", "B", 2.0, 20)]),
    );

    let actions = send(&mut state, &[Event::KeyDown, Event::Submit]);

    let urls: Vec<&str> = actions
        .iter()
        .filter_map(|a| match a {
            Action::Fetch { url, .. } => Some(url.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(urls, ["https://api.test/items/MLB2", "https://api.test/users/20"]);
}

#[test]
fn a_failed_half_fails_the_whole_detail() {
    let mut state = state();
    let (item, seller) = open_detail(&mut state);

    assert!(respond(&mut state, &item, 404, &json!({ "error": "not_found" })));
    assert_eq!(state.detail, DetailStatus::Error);

    // the other half arriving later changes nothing
    assert!(!respond(&mut state, &seller, 200, &seller_body(10)));
    assert_eq!(state.detail, DetailStatus::Error);
    assert_eq!(state.focus, Focus::Results);

    let vm = state.compute_viewmodel(40, 120);
    assert!(vm.banners.iter().any(|b| b.message
        == "Falha ao carregar detalhes do produto. Por favor, tente novamente mais tarde."));

    send(&mut state, &[Event::Escape]);
    assert_eq!(state.detail, DetailStatus::Idle);
}

#[test]
fn responses_for_an_older_selection_are_ignored() {
    let mut state = state();
    let (old_item, old_seller) = open_detail(&mut state);

    let (new_item, new_seller) = detail_requests(&send(&mut state, &[Event::KeyDown, Event::Submit]));
    assert_ne!(old_item.ticket(), new_item.ticket());

    assert!(!respond(&mut state, &old_item, 200, &item_body("MLB1")));
    assert!(!respond(&mut state, &old_seller, 200, &seller_body(10)));
    assert!(state.detail.is_loading());

    respond(&mut state, &new_item, 200, &item_body("MLB2"));
    respond(&mut state, &new_seller, 200, &seller_body(20));

    match &state.detail {
        DetailStatus::Open { item, seller } => {
            assert_eq!(item.id, "MLB2");
            assert_eq!(seller.id, 20);
        }
        other => panic!("expected an open detail, got {other:?}"),
    }
}

#[test]
fn closing_discards_late_responses() {
    let mut state = state();
    let (item, seller) = open_detail(&mut state);
    respond(&mut state, &item, 200, &item_body("MLB1"));
    respond(&mut state, &seller, 200, &seller_body(10));
    assert_eq!(state.focus, Focus::Detail);

    send(&mut state, &[Event::Escape]);

    assert_eq!(state.detail, DetailStatus::Idle);
    assert_eq!(state.focus, Focus::Results);
    assert!(!respond(&mut state, &item, 200, &item_body("MLB1")));
}

#[test]
fn permalink_opens_in_the_browser() {
    let mut state = state();
    let (item, seller) = open_detail(&mut state);
    respond(&mut state, &item, 200, &item_body("MLB1"));
    respond(&mut state, &seller, 200, &seller_body(10));

    let actions = send(&mut state, &[Event::OpenPermalink]);

    assert_eq!(
        actions,
        vec![Action::OpenUrl {
            url: "https://produto.test/MLB1".to_string()
        }]
    );
}

#[test]
fn submit_without_results_fetches_nothing() {
    let mut state = state();
    assert!(send(&mut state, &[Event::Submit]).is_empty());
    assert_eq!(state.detail, DetailStatus::Idle);
}
