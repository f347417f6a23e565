//! HttpTripleSource tests against an in-process document server
//!
//! Author: hephaex@gmail.com

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use rooms_core::{RoomDirectory, RoomId, RoomsError, TripleSource};
use rooms_source::HttpTripleSource;
use std::sync::Arc;
use std::time::Duration;

const ROOM_DOC: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix oo: <http://purl.org/openorg/> .
@prefix foaf: <http://xmlns.com/foaf/0.1/> .
@prefix soton: <http://id.southampton.ac.uk/ns/> .

<http://id.southampton.ac.uk/room/32-3077>
    rdfs:label "Lecture Theatre A" ;
    oo:capacity "120" .

<https://data.southampton.ac.uk/images/32-3077.jpg> foaf:depiction <http://id.southampton.ac.uk/room/32-3077> .

<http://id.southampton.ac.uk/room-feature/whiteboard> a soton:RoomFeatureClass ; rdfs:label "Whiteboard" .
<http://id.southampton.ac.uk/room-feature/projector> a soton:RoomFeatureClass ; rdfs:label "Data Projector" .
"#;

async fn room_document(Path(file): Path<String>) -> impl IntoResponse {
    match file.as_str() {
        "32-3077.ttl" => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/turtle")],
            ROOM_DOC.to_string(),
        ),
        "broken.ttl" => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/turtle")],
            "<http://id.southampton.ac.uk/room/broken> oo:capacity".to_string(),
        ),
        "flaky.ttl" => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain")],
            "maintenance".to_string(),
        ),
        _ => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/plain")],
            "not found".to_string(),
        ),
    }
}

/// Serve fixtures on an ephemeral port, returning the document base URL
async fn spawn_document_server() -> String {
    let app = Router::new().route("/room/:file", get(room_document));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/room/")
}

fn http_source(base: &str) -> HttpTripleSource {
    HttpTripleSource::new(base, Duration::from_secs(5), "soton-rooms-test").unwrap()
}

#[tokio::test]
async fn test_fetch_room_document() {
    let base = spawn_document_server().await;
    let source = http_source(&base);

    let triples = source.fetch(&RoomId::new("32-3077")).await.unwrap();
    assert_eq!(triples.len(), 7);
}

#[tokio::test]
async fn test_lookup_over_http() {
    let base = spawn_document_server().await;
    let directory = RoomDirectory::new(
        Arc::new(http_source(&base)),
        "http://id.southampton.ac.uk/room/",
    );

    let report = directory.lookup(&RoomId::new("32-3077")).await.unwrap();
    assert_eq!(report.name.as_deref(), Some("Lecture Theatre A"));
    assert_eq!(report.capacity.as_deref(), Some("120"));
    assert_eq!(
        report.depiction.as_deref(),
        Some("https://data.southampton.ac.uk/images/32-3077.jpg")
    );
    // ordered by feature subject: .../projector before .../whiteboard
    assert_eq!(report.features, vec!["Data Projector", "Whiteboard"]);
}

#[tokio::test]
async fn test_missing_room_is_not_found() {
    let base = spawn_document_server().await;
    let source = http_source(&base);

    let err = source.fetch(&RoomId::new("99-9999")).await.unwrap_err();
    assert!(matches!(err, RoomsError::RoomNotFound(id) if id == "99-9999"));
}

#[tokio::test]
async fn test_server_error_is_fetch_error() {
    let base = spawn_document_server().await;
    let source = http_source(&base);

    let err = source.fetch(&RoomId::new("flaky")).await.unwrap_err();
    assert!(matches!(err, RoomsError::Fetch(msg) if msg.contains("503")));
}

#[tokio::test]
async fn test_malformed_document_is_decode_error() {
    let base = spawn_document_server().await;
    let source = http_source(&base);

    let err = source.fetch(&RoomId::new("broken")).await.unwrap_err();
    assert!(matches!(err, RoomsError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_fetch_error() {
    // bind then drop to get a port with nothing listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = http_source(&format!("http://{addr}/room/"));
    let err = source.fetch(&RoomId::new("32-3077")).await.unwrap_err();
    assert!(matches!(err, RoomsError::Fetch(_)));
}
