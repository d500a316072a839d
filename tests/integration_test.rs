// Integration tests for citygrid
use actix_web::http::{header, StatusCode};
use actix_web::test as actix_test;
use actix_web::{web, App};
use citygrid::{CityGraph, CityGraphGenerator, GridCell, GridConfig, LandUse, NodeLinkDocument, RestApi};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};

/// Both graphs hold the same coordinates and the same adjacencies.
fn assert_same_topology(a: &CityGraph, b: &CityGraph) {
    assert_eq!(a.node_count(), b.node_count());
    assert_eq!(a.edge_count(), b.edge_count());
    for node in a.nodes() {
        assert!(b.node(&node.id).is_some(), "{} missing", node.id);
    }
    for edge in a.edges() {
        let (x, y) = edge.endpoints();
        assert!(b.contains_edge(&x, &y), "edge {x} - {y} missing");
    }
}

/// Every node sits on a distinct lattice cell and every edge joins neighbours.
fn assert_on_lattice(graph: &CityGraph) {
    let config = GridConfig::default();
    let cells: HashSet<GridCell> = graph
        .nodes()
        .map(|node| config.cell_of(&node.id).expect("node off the lattice"))
        .collect();
    assert_eq!(cells.len(), config.expected_nodes());

    for edge in graph.edges() {
        let (x, y) = edge.endpoints();
        let cx = config.cell_of(&x).unwrap();
        let cy = config.cell_of(&y).unwrap();
        assert!(cx.is_adjacent(&cy), "{x} and {y} are not neighbours");
    }
}

macro_rules! city_app {
    () => {
        actix_test::init_service(
            App::new()
                .wrap(RestApi::cors())
                .app_data(web::Data::new(CityGraphGenerator::default()))
                .configure(RestApi::configure),
        )
        .await
    };
}

#[test]
fn test_generated_graph_shape() {
    let graph = CityGraphGenerator::default().generate(&mut rand::rng());
    assert_eq!(graph.node_count(), 100);
    assert_eq!(graph.edge_count(), 180);

    let config = GridConfig::default();
    for i in 0..10 {
        for j in 0..10 {
            let expected = config.coordinate(GridCell::new(i, j));
            assert!(graph.node(&expected).is_some(), "missing cell ({i}, {j})");
        }
    }
    assert_on_lattice(&graph);
}

#[test]
fn test_land_uses_are_known_categories() {
    let mut rng = StdRng::seed_from_u64(99);
    let generator = CityGraphGenerator::default();
    let mut counts: HashMap<LandUse, usize> = HashMap::new();
    for _ in 0..20 {
        let graph = generator.generate(&mut rng);
        for node in graph.nodes() {
            assert!(LandUse::ALL.contains(&node.land_use));
            *counts.entry(node.land_use).or_default() += 1;
        }
    }
    // 2000 independent draws; every category shows up
    assert_eq!(counts.len(), 4);
}

#[test]
fn test_topology_is_stable_across_calls() {
    let generator = CityGraphGenerator::default();
    let a = generator.generate(&mut StdRng::seed_from_u64(1));
    let b = generator.generate(&mut StdRng::seed_from_u64(2));

    assert_same_topology(&a, &b);
    let uses_a: Vec<LandUse> = a.nodes().map(|n| n.land_use).collect();
    let uses_b: Vec<LandUse> = b.nodes().map(|n| n.land_use).collect();
    assert_ne!(uses_a, uses_b, "different seeds should zone the city differently");
}

#[test]
fn test_json_round_trip() {
    let graph = CityGraphGenerator::default().generate(&mut StdRng::seed_from_u64(5));
    let json = serde_json::to_string(&NodeLinkDocument::from(&graph)).unwrap();
    let parsed: NodeLinkDocument = serde_json::from_str(&json).unwrap();
    let rebuilt = parsed.into_graph().unwrap();

    assert_same_topology(&graph, &rebuilt);
    assert_on_lattice(&rebuilt);
    for node in graph.nodes() {
        assert_eq!(rebuilt.node(&node.id).map(|n| n.land_use), Some(node.land_use));
    }
}

#[actix_web::test]
async fn test_generate_city_endpoint() {
    let app = city_app!();

    let req = actix_test::TestRequest::get().uri("/generate_city").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["nodes"].as_array().unwrap().len(), 100);
    assert_eq!(body["links"].as_array().unwrap().len(), 180);
    assert_eq!(body["nodes"][0]["id"], serde_json::json!([37.7749, -122.4194]));
    assert_eq!(body["directed"], serde_json::json!(false));
    assert_eq!(body["multigraph"], serde_json::json!(false));

    let category = body["nodes"][0]["type"].as_str().unwrap();
    assert!(category.parse::<LandUse>().is_ok());

    let graph = serde_json::from_value::<NodeLinkDocument>(body)
        .unwrap()
        .into_graph()
        .unwrap();
    assert_on_lattice(&graph);
}

#[actix_web::test]
async fn test_consecutive_calls_share_topology() {
    let app = city_app!();

    let first: NodeLinkDocument = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/generate_city").to_request(),
    )
    .await;
    let second: NodeLinkDocument = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/generate_city").to_request(),
    )
    .await;

    let first = first.into_graph().unwrap();
    let second = second.into_graph().unwrap();
    assert_eq!(first.node_count(), 100);
    assert_eq!(first.edge_count(), 180);
    assert_same_topology(&first, &second);
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let app = city_app!();

    let req = actix_test::TestRequest::get().uri("/generate-city").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_wrong_method_is_not_allowed() {
    let app = city_app!();

    let req = actix_test::TestRequest::post().uri("/generate_city").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[actix_web::test]
async fn test_cross_origin_allowed() {
    let app = city_app!();

    let req = actix_test::TestRequest::get()
        .uri("/generate_city")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
