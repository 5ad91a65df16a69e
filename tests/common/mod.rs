#![allow(dead_code)]

use mercado_busca::catalog::{CatalogEndpoints, CatalogRequest};
use mercado_busca::ui::Theme;
use mercado_busca::{handle_event, Action, AppState, Event};
use serde_json::{json, Value};

pub const API: &str = "https://api.test";

pub fn state() -> AppState {
    AppState::new(Theme::default(), CatalogEndpoints::new(API, "MLB", None))
}

/// Feeds events in order and returns the actions of the last one.
pub fn send(state: &mut AppState, events: &[Event]) -> Vec<Action> {
    let mut last = vec![];
    for event in events {
        let (_, actions) = handle_event(state, event).expect("event handled");
        last = actions;
    }
    last
}

/// Opens the search box, types `term` and submits it.
pub fn search(state: &mut AppState, term: &str) -> Vec<Action> {
    let mut events = vec![Event::EditSearch];
    events.extend(term.chars().map(Event::Char));
    events.push(Event::Submit);
    send(state, &events)
}

pub fn respond(state: &mut AppState, request: &CatalogRequest, status: u16, body: &Value) -> bool {
    let event = Event::CatalogResponse {
        request: request.clone(),
        status,
        body: body.to_string().into_bytes(),
    };
    handle_event(state, &event).expect("response handled").0
}

/// The single fetch in `actions`, as `(url, request)`.
pub fn only_fetch(actions: &[Action]) -> (String, CatalogRequest) {
    match actions {
        [Action::Fetch { url, request }] => (url.clone(), request.clone()),
        other => panic!("expected one fetch, got {other:?}"),
    }
}

pub fn product(id: &str, title: &str, price: f64, seller: u64) -> Value {
    json!({
        "id": id,
        "title": title,
        "price": price,
        "currency_id": "BRL",
        "thumbnail": format!("http://img.test/{id}.jpg"),
        "shipping": { "free_shipping": true },
        "seller": { "id": seller }
    })
}

pub fn search_body(products: Vec<Value>) -> Value {
    json!({
        "results": products,
        "available_filters": [{
            "id": "BRAND",
            "name": "Marca",
            "values": [
                { "id": "9344", "name": "Apple", "results": 120 },
                { "id": "206", "name": "Samsung", "results": 80 }
            ]
        }],
        "filters": []
    })
}

pub fn item_body(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Notebook Gamer",
        "price": 4599.9,
        "currency_id": "BRL",
        "condition": "new",
        "sold_quantity": 12,
        "shipping": { "free_shipping": true },
        "pictures": [{ "secure_url": "https://img.test/1.jpg" }],
        "thumbnail": "http://img.test/thumb.jpg",
        "permalink": format!("https://produto.test/{id}"),
        "attributes": [{ "id": "BRAND", "name": "Marca", "value_name": "Acme" }]
    })
}

pub fn seller_body(id: u64) -> Value {
    json!({
        "id": id,
        "nickname": "LOJA_OFICIAL",
        "seller_reputation": { "level_id": "5_green" }
    })
}
