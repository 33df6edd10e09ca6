use std::net::SocketAddr;

use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::{routes, ServerState};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // 没有 DATABASE_URL 时跳过，本测试需要真实 Postgres
    if std::env::var("DATABASE_URL").is_err() {
        return Err(anyhow::anyhow!("missing DATABASE_URL"));
    }

    let db = models::db::connect().await?;
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("migrations notice: {}", e);
    }

    let state = ServerState::with_database(db, "test-secret");
    let app = routes::build_router(state, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn booking_lifecycle_against_postgres() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("skip e2e: {}", e);
            return Ok(());
        }
    };
    let client = reqwest::Client::new();
    let email = format!("user_{}@example.com", Uuid::new_v4());

    let res = client.get(format!("{}/", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.text().await?, "car doctor is running");

    let res = client
        .post(format!("{}/bookings", app.base_url))
        .json(&json!({"email": email, "status": "pending", "service": "Oil Change"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created: Value = res.json().await?;
    let id = created["insertedId"].as_str().unwrap_or_default().to_string();

    let token: Value = client
        .post(format!("{}/jwt", app.base_url))
        .json(&json!({"email": email}))
        .send()
        .await?
        .json()
        .await?;
    let bearer = format!("Bearer {}", token["token"].as_str().unwrap_or_default());

    let listed: Value = client
        .get(format!("{}/bookings", app.base_url))
        .query(&[("email", email.as_str())])
        .header("authorization", &bearer)
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["_id"], id.as_str());

    let updated: Value = client
        .patch(format!("{}/bookings/{}", app.base_url, id))
        .json(&json!({"status": "confirmed", "email": "someone@else.com"}))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(updated["matchedCount"], 1);
    assert_eq!(updated["modifiedCount"], 1);

    let listed: Value = client
        .get(format!("{}/bookings", app.base_url))
        .query(&[("email", email.as_str())])
        .header("authorization", &bearer)
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed[0]["status"], "confirmed");
    assert_eq!(listed[0]["email"], email.as_str());

    let deleted: Value = client
        .delete(format!("{}/bookings/{}", app.base_url, id))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(deleted["deletedCount"], 1);

    let deleted: Value = client
        .delete(format!("{}/bookings/{}", app.base_url, id))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(deleted["deletedCount"], 0);
    Ok(())
}

#[tokio::test]
async fn long_free_form_fields_are_stored() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("skip e2e: {}", e);
            return Ok(());
        }
    };
    let client = reqwest::Client::new();
    let email = format!("{}@example.com", "u".repeat(400));
    let status = "s".repeat(500);

    let res = client
        .post(format!("{}/bookings", app.base_url))
        .json(&json!({"email": email, "status": status}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created: Value = res.json().await?;
    let id = created["insertedId"].as_str().unwrap_or_default().to_string();

    let longer = "t".repeat(1000);
    let res = client
        .patch(format!("{}/bookings/{}", app.base_url, id))
        .json(&json!({"status": longer}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["modifiedCount"], 1);

    // 相同 status 再写一次：命中但未修改
    let updated: Value = client
        .patch(format!("{}/bookings/{}", app.base_url, id))
        .json(&json!({"status": longer}))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(updated["matchedCount"], 1);
    assert_eq!(updated["modifiedCount"], 0);

    let token: Value = client
        .post(format!("{}/jwt", app.base_url))
        .json(&json!({"email": email}))
        .send()
        .await?
        .json()
        .await?;
    let listed: Value = client
        .get(format!("{}/bookings", app.base_url))
        .query(&[("email", email.as_str())])
        .header("authorization", format!("Bearer {}", token["token"].as_str().unwrap_or_default()))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed[0]["status"], longer.as_str());
    assert_eq!(listed[0]["email"], email.as_str());

    client.delete(format!("{}/bookings/{}", app.base_url, id)).send().await?;
    Ok(())
}
