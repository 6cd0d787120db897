use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use serde_json::{json, Value};
use reqwest::StatusCode as HttpStatusCode;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // Fresh in-memory database per test
    let db = models::db::connect_memory().await?;
    let app: Router = server::startup::build_app(db, &configs::AuthConfig::default());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("reqwest client")
}

async fn create_grahaka(c: &reqwest::Client, app: &TestApp, email: &str) -> anyhow::Result<Value> {
    let res = c.post(format!("{}/grahaka/", app.base_url))
        .json(&json!({"email": email, "password": "S3curePass!"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(res.json::<Value>().await?)
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_create_then_duplicate_grahaka() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let body = create_grahaka(&c, &app, "a@x.com").await?;
    assert_eq!(body["id"], 1);
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["is_active"], true);
    assert_eq!(body["items"], json!([]));
    assert!(body.get("password_hashed").is_none());
    assert!(body.get("password").is_none());

    let res = c.post(format!("{}/grahaka/", app.base_url))
        .json(&json!({"email": "a@x.com", "password": "other-pass"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let err = res.json::<Value>().await?;
    assert_eq!(err["error"], "Conflict");

    let list = c.get(format!("{}/grahaka/", app.base_url)).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(list.len(), 1);
    Ok(())
}

#[tokio::test]
async fn e2e_invalid_email_is_unprocessable() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().post(format!("{}/grahaka/", app.base_url))
        .json(&json!({"email": "nope", "password": "S3curePass!"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn e2e_list_grahaka_pages() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    for i in 0..3 {
        create_grahaka(&c, &app, &format!("u{i}@x.com")).await?;
    }

    let first = c.get(format!("{}/grahaka/?skip=0&limit=2", app.base_url)).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(first.len(), 2);
    let rest = c.get(format!("{}/grahaka/?skip=2", app.base_url)).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(rest.len(), 1);
    assert!(first.iter().all(|f| f["id"] != rest[0]["id"]));

    let past_end = c.get(format!("{}/grahaka/?skip=10", app.base_url)).send().await?.json::<Vec<Value>>().await?;
    assert!(past_end.is_empty());

    let res = c.get(format!("{}/grahaka/?skip=-1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_list_grahaka_with_u64_max_bounds() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    create_grahaka(&c, &app, "a@x.com").await?;

    let res = c.get(format!("{}/grahaka/?limit={}", app.base_url, u64::MAX)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Vec<Value>>().await?.len(), 1);

    let res = c.get(format!("{}/grahaka/?skip={}&limit={}", app.base_url, u64::MAX, u64::MAX)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.json::<Vec<Value>>().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_get_grahaka_by_id() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let created = create_grahaka(&c, &app, "a@x.com").await?;

    let res = c.get(format!("{}/grahaka/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, created);

    let res = c.get(format!("{}/grahaka/41", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let err = res.json::<Value>().await?;
    assert!(err["detail"].as_str().unwrap_or_default().contains("41"));
    Ok(())
}

#[tokio::test]
async fn e2e_patra_for_two_grahaka() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let a = create_grahaka(&c, &app, "a@x.com").await?;
    let b = create_grahaka(&c, &app, "b@x.com").await?;

    let mut docs = Vec::new();
    for owner in [&a, &b] {
        let res = c.post(format!("{}/grahaka/{}/patra/", app.base_url, owner["id"]))
            .json(&json!({"image": "https://img.example.com/p.png", "tags": "id-proof"}))
            .send().await?;
        assert_eq!(res.status(), HttpStatusCode::OK);
        let doc = res.json::<Value>().await?;
        assert_eq!(doc["owner_id"], owner["id"]);
        assert_eq!(doc["document"], Value::Null);
        docs.push(doc);
    }

    let all = c.get(format!("{}/patra/", app.base_url)).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(all.len(), 2);
    for d in &docs {
        assert!(all.contains(d));
    }

    let one = c.get(format!("{}/patra/{}", app.base_url, docs[0]["id"])).send().await?.json::<Value>().await?;
    assert_eq!(one, docs[0]);

    // owner view embeds its documents
    let owner = c.get(format!("{}/grahaka/{}", app.base_url, a["id"])).send().await?.json::<Value>().await?;
    assert_eq!(owner["items"], json!([docs[0].clone()]));
    Ok(())
}

#[tokio::test]
async fn e2e_patra_for_missing_owner() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().post(format!("{}/grahaka/9/patra/", app.base_url))
        .json(&json!({"image": "https://img.example.com/p.png", "tags": "x"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_lists_routes() -> anyhow::Result<()> {
    let app = start_server().await?;
    let doc = client().get(format!("{}/api-docs/openapi.json", app.base_url)).send().await?.json::<Value>().await?;
    assert!(doc["paths"].get("/grahaka/").is_some());
    assert!(doc["paths"].get("/grahaka/{id}/patra/").is_some());
    assert!(doc["paths"].get("/patra/").is_some());
    Ok(())
}
