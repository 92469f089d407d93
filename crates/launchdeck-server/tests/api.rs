//! End-to-end tests for the HTTP surface
//!
//! Each test spins up the full router on an ephemeral port with a temp data
//! directory and drives it over real HTTP.

use launchdeck_core::{Config, Link, LinkStore};
use launchdeck_server::router;
use serde_json::json;
use tempfile::TempDir;

struct TestServer {
    base: String,
    store: LinkStore,
    temp: TempDir,
}

impl TestServer {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

async fn spawn_server() -> TestServer {
    let temp = TempDir::new().unwrap();
    let config = Config {
        data_dir: temp.path().to_path_buf(),
        index_file: temp.path().join("index.html"),
        ..Config::default()
    };

    let store = LinkStore::open(&config).unwrap();
    let app = router::build_router(&config, store.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base: format!("http://{addr}"),
        store,
        temp,
    }
}

fn sample_links() -> Vec<Link> {
    let mut docs = Link::new("1", "Docs", "https://docs.example.com");
    docs.emoji = Some("📚".to_string());
    docs.color = Some("#336699".to_string());
    let mail = Link::new("2", "Mail", "https://mail.example.com");
    vec![docs, mail]
}

#[tokio::test]
async fn test_fresh_store_returns_empty_array() {
    let server = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(server.url("/api/links")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/json"));

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!([]));

    // The backing file was seeded with an empty array
    let content = std::fs::read_to_string(server.store.path()).unwrap();
    assert_eq!(content, "[]");
}

#[tokio::test]
async fn test_post_echoes_and_roundtrips() {
    let server = spawn_server().await;
    let client = reqwest::Client::new();
    let links = sample_links();

    let resp = client
        .post(server.url("/api/links"))
        .json(&links)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let echoed: Vec<Link> = resp.json().await.unwrap();
    assert_eq!(echoed, links);

    let resp = client.get(server.url("/api/links")).send().await.unwrap();
    let loaded: Vec<Link> = resp.json().await.unwrap();
    assert_eq!(loaded, links);
}

#[tokio::test]
async fn test_unset_optional_fields_stay_omitted() {
    let server = spawn_server().await;
    let client = reqwest::Client::new();

    client
        .post(server.url("/api/links"))
        .json(&vec![Link::new("1", "Docs", "https://x")])
        .send()
        .await
        .unwrap();

    let body: serde_json::Value = client
        .get(server.url("/api/links"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!([{"id": "1", "name": "Docs", "url": "https://x"}]));
}

#[tokio::test]
async fn test_post_is_idempotent() {
    let server = spawn_server().await;
    let client = reqwest::Client::new();
    let links = sample_links();

    for _ in 0..2 {
        let resp = client
            .post(server.url("/api/links"))
            .json(&links)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }

    let loaded: Vec<Link> = client
        .get(server.url("/api/links"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(loaded, links);
}

#[tokio::test]
async fn test_post_replaces_not_merges() {
    let server = spawn_server().await;
    let client = reqwest::Client::new();

    client
        .post(server.url("/api/links"))
        .json(&sample_links())
        .send()
        .await
        .unwrap();

    let replacement = vec![Link::new("9", "Wiki", "https://wiki.example.com")];
    client
        .post(server.url("/api/links"))
        .json(&replacement)
        .send()
        .await
        .unwrap();

    let loaded: Vec<Link> = client
        .get(server.url("/api/links"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(loaded, replacement);

    // Emptying the collection works the same way
    client
        .post(server.url("/api/links"))
        .json(&Vec::<Link>::new())
        .send()
        .await
        .unwrap();
    let loaded: Vec<Link> = client
        .get(server.url("/api/links"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(loaded.is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_rejected_without_mutation() {
    let server = spawn_server().await;
    let client = reqwest::Client::new();
    let links = sample_links();

    client
        .post(server.url("/api/links"))
        .json(&links)
        .send()
        .await
        .unwrap();

    // Syntactically invalid JSON
    let resp = client
        .post(server.url("/api/links"))
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert!(!resp.text().await.unwrap().is_empty());

    // Well-formed JSON that is not an array of links
    let resp = client
        .post(server.url("/api/links"))
        .body(r#"{"id":"1","name":"x","url":"y"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Stored collection is untouched
    let loaded: Vec<Link> = client
        .get(server.url("/api/links"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(loaded, links);
}

#[tokio::test]
async fn test_other_methods_are_rejected() {
    let server = spawn_server().await;
    let client = reqwest::Client::new();
    let links = sample_links();

    client
        .post(server.url("/api/links"))
        .json(&links)
        .send()
        .await
        .unwrap();

    for method in [
        reqwest::Method::DELETE,
        reqwest::Method::PUT,
        reqwest::Method::PATCH,
    ] {
        let resp = client
            .request(method.clone(), server.url("/api/links"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 405, "{method} should be rejected");
        assert_eq!(resp.text().await.unwrap(), "Method not allowed");
    }

    // No mutation happened
    let loaded: Vec<Link> = client
        .get(server.url("/api/links"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(loaded, links);
}

#[tokio::test]
async fn test_non_api_paths_serve_entry_file() {
    let server = spawn_server().await;
    let client = reqwest::Client::new();

    let page = "<!doctype html><title>launchdeck</title>";
    std::fs::write(server.temp.path().join("index.html"), page).unwrap();

    // The front end handles its own navigation, so every non-API path gets
    // the same entry file
    for path in ["/", "/settings", "/deeply/nested/route"] {
        let resp = client.get(server.url(path)).send().await.unwrap();
        assert_eq!(resp.status(), 200, "{path} should serve the entry file");
        assert_eq!(resp.text().await.unwrap(), page);
    }
}

#[tokio::test]
async fn test_missing_entry_file_is_not_found() {
    let server = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(server.url("/")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_posts_leave_one_intact_collection() {
    let server = spawn_server().await;

    let mut handles = Vec::new();
    for i in 0..10 {
        let url = server.url("/api/links");
        handles.push(tokio::spawn(async move {
            let links = vec![Link::new(
                format!("{i}"),
                format!("Link {i}"),
                format!("https://example.com/{i}"),
            )];
            let resp = reqwest::Client::new()
                .post(&url)
                .json(&links)
                .send()
                .await
                .unwrap();
            assert_eq!(resp.status(), 200);
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // Whichever POST won, the stored document is one fully intact collection
    let loaded: Vec<Link> = reqwest::Client::new()
        .get(server.url("/api/links"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(
        loaded[0].url,
        format!("https://example.com/{}", loaded[0].id)
    );
}
