//! Full orchestrator runs over HTTP against a mock SWAPI.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use wiremock::MockServer;

use holonet_core::error::ErrorKind;
use holonet_gateway::app_state::AppState;

fn state_for(server: &MockServer, debug: bool) -> AppState {
    let mut cfg = common::config_for(server);
    cfg.debug = debug;
    AppState::new(cfg).unwrap()
}

#[tokio::test]
async fn luke_is_rendered_and_his_bytes_are_counted() {
    let server = MockServer::start().await;
    // Only the character exists; the run stops at the starships step.
    common::mount_person(&server, 1, common::luke()).await;

    let state = state_for(&server, false);
    let report = state.orchestrator().run().await;

    assert!(report.output.starts_with(
        "Character: Luke Skywalker\nHeight: 172\nMass: 77\nBirthday: 19BBY\nAppears in 3 films\n"
    ));
    assert_eq!(report.error.as_ref().map(|e| e.kind()), Some(ErrorKind::HttpStatus));

    let expected_bytes = serde_json::to_string(&common::luke()).unwrap().len() as u64;
    let stats = state.stats();
    assert_eq!(stats.data_size, expected_bytes);
    assert_eq!(stats.api_calls, 1);
    assert_eq!(stats.cache_size, 1);
    assert_eq!(stats.errors, 2);
}

#[tokio::test]
async fn full_run_output() {
    let server = MockServer::start().await;
    common::mount_galaxy(&server).await;

    let state = state_for(&server, true);
    let report = state.orchestrator().run().await;
    assert!(report.is_ok(), "{:?}", report.error);

    let out = &report.output;
    assert!(out.contains("\nTotal Starships: 36\n"));
    assert!(out.contains("\nStarship 1:\nName: CR90 corvette\nModel: CR90 corvette\n"));
    assert!(out.contains("Cost: 3500000 credits\n"));
    assert!(out.contains("\nStarship 3:\nName: Sentinel-class landing craft\n"));
    assert!(!out.contains("Death Star"));

    assert!(out.contains(
        "\nLarge populated planets:\nCoruscant - Pop: 1000000000000\n   Diameter: 12240 - Climate: temperate\n   Appears in 4 films\n"
    ));
    assert!(!out.contains("Tatooine"));
    assert!(!out.contains("Kamino"));
    assert!(!out.contains("Yavin IV"));

    let a = out.find("1. A New Hope (1977-05-25)").unwrap();
    let b = out.find("2. The Empire Strikes Back (1980-05-17)").unwrap();
    let c = out.find("3. Return of the Jedi (1983-05-25)").unwrap();
    assert!(a < b && b < c);
    assert!(out.contains("   Director: George Lucas\n   Producer: Gary Kurtz, Rick McCallum\n   Characters: 3\n   Planets: 1\n"));

    assert!(out.contains("\nFeatured Vehicle:\nName: Vehicle 1\nModel: Digger Crawler\nCost: unknown\n"));
    assert!(out.contains("\nStats:\nAPI Calls: 1\nCache Size: 5\n"));
    assert_eq!(report.vehicle, Some(1));
}

#[tokio::test]
async fn five_runs_feature_vehicles_one_to_four() {
    let server = MockServer::start().await;
    common::mount_galaxy(&server).await;

    let state = state_for(&server, false);
    let mut featured = vec![];
    for _ in 0..5 {
        featured.push(state.orchestrator().run().await.vehicle);
    }
    assert_eq!(featured, vec![Some(1), Some(2), Some(3), Some(4), None]);

    let requested: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    for id in 1..=4 {
        assert_eq!(requested.iter().filter(|p| **p == format!("/api/vehicles/{id}")).count(), 1);
    }
    assert!(!requested.iter().any(|p| p == "/api/vehicles/5"));
    assert_eq!(requested.iter().filter(|p| p.starts_with("/api/films/")).count(), 1);

    let stats = state.stats();
    assert_eq!(stats.api_calls, 5);
    assert_eq!(stats.errors, 0);
    // people/1..=5, starships, planets, films, vehicles/1..=4
    assert_eq!(stats.cache_size, 12);
}
