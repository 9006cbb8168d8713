//! Mock SWAPI shared by the integration tests.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use holonet_gateway::config::HolonetConfig;

pub fn luke() -> Value {
    json!({
        "name": "Luke Skywalker",
        "height": "172",
        "mass": "77",
        "birth_year": "19BBY",
        "films": [1, 2, 3]
    })
}

pub fn starships_page() -> Value {
    json!({
        "count": 36,
        "results": [
            { "name": "CR90 corvette", "model": "CR90 corvette", "manufacturer": "Corellian Engineering Corporation",
              "cost_in_credits": "3500000", "length": "150", "crew": "30-165", "passengers": "600",
              "max_atmosphering_speed": "950", "hyperdrive_rating": "2.0", "pilots": [] },
            { "name": "Star Destroyer", "cost_in_credits": "150000000", "pilots": [] },
            { "name": "Sentinel-class landing craft", "cost_in_credits": "240000", "pilots": [] },
            { "name": "Death Star", "cost_in_credits": "1000000000000", "pilots": [] }
        ]
    })
}

pub fn planets_page() -> Value {
    json!({
        "count": 60,
        "results": [
            { "name": "Tatooine", "population": "200000", "diameter": "10465", "climate": "arid", "films": [1] },
            { "name": "Coruscant", "population": "1000000000000", "diameter": "12240", "climate": "temperate", "films": [1, 2, 3, 4] },
            { "name": "Kamino", "population": "1000000000", "diameter": "19720", "climate": "temperate", "films": [1] },
            { "name": "Yavin IV", "population": "unknown", "diameter": "10200", "climate": "temperate", "films": [1] }
        ]
    })
}

pub fn films_page() -> Value {
    json!({
        "count": 3,
        "results": [
            { "title": "The Empire Strikes Back", "release_date": "1980-05-17", "director": "Irvin Kershner",
              "producer": "Gary Kurtz, Rick McCallum", "characters": [1, 2], "planets": [1, 2, 3] },
            { "title": "A New Hope", "release_date": "1977-05-25", "director": "George Lucas",
              "producer": "Gary Kurtz, Rick McCallum", "characters": [1, 2, 3], "planets": [1] },
            { "title": "Return of the Jedi", "release_date": "1983-05-25", "director": "Richard Marquand",
              "producer": "Howard G. Kazanjian", "characters": [1], "planets": [1, 2] }
        ]
    })
}

pub fn vehicle(id: u64) -> Value {
    json!({ "name": format!("Vehicle {id}"), "model": "Digger Crawler", "cost_in_credits": "unknown", "pilots": [] })
}

pub async fn mount_person(server: &MockServer, id: u64, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/people/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount every resource a run touches.
pub async fn mount_galaxy(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path_regex(r"^/api/people/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(luke()))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/starships/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(starships_page()))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/planets/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(planets_page()))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/films/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(films_page()))
        .mount(server)
        .await;
    for id in 1..=4 {
        Mock::given(method("GET"))
            .and(path(format!("/api/vehicles/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(vehicle(id)))
            .mount(server)
            .await;
    }
}

/// Defaults pointed at the mock server, debug off, short timeout.
pub fn config_for(server: &MockServer) -> HolonetConfig {
    let mut cfg = HolonetConfig::default();
    cfg.debug = false;
    cfg.upstream.base_url = format!("{}/api/", server.uri());
    cfg.upstream.timeout_ms = 1000;
    cfg
}
