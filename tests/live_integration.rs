use relay_http::{promise, subscribe_with, Body, Producer, RelayClient, RetryPolicy};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct EchoedRequest {
    url: String,
    #[serde(default)]
    json: Option<serde_json::Value>,
}

fn load_live_base_url() -> Result<String, String> {
    let base = std::env::var("RELAY_LIVE_BASE_URL")
        .map_err(|_| "RELAY_LIVE_BASE_URL environment variable is required".to_owned())?;
    if base.trim().is_empty() {
        return Err("RELAY_LIVE_BASE_URL is set but empty".to_owned());
    }
    Ok(base.trim().trim_end_matches('/').to_owned())
}

#[tokio::test]
async fn live_verb_roundtrip_across_delivery_styles() {
    let base_url = match load_live_base_url() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("skipping live test: RELAY_LIVE_BASE_URL not set");
            return;
        }
    };
    let client = RelayClient::new(base_url);

    let payload = promise(client.get("/get")).await.expect("GET must succeed");
    let echoed: EchoedRequest = serde_json::from_value(payload).expect("GET payload must decode");
    assert!(echoed.url.ends_with("/get"));

    let mut body = Body::new();
    body.insert("prop1".to_owned(), "Valor prop1".to_owned());
    body.insert("prop2".to_owned(), "Valor prop2".to_owned());

    let mut delivered = None;
    let mut failure = None;
    subscribe_with(
        client.post("/post", body.clone()),
        |payload| delivered = Some(payload),
        |err| failure = Some(err),
    )
    .await;
    assert!(failure.is_none(), "POST failed: {failure:?}");
    let echoed: EchoedRequest = serde_json::from_value(delivered.expect("POST must deliver"))
        .expect("POST payload must decode");
    assert_eq!(
        echoed.json,
        Some(serde_json::json!({"prop1": "Valor prop1", "prop2": "Valor prop2"}))
    );

    client
        .put("/put", body)
        .activate()
        .await
        .expect("PUT must succeed");
    client
        .delete("/delete")
        .activate()
        .await
        .expect("DELETE must succeed");

    let payload = client
        .get("/get")
        .with_retry(RetryPolicy::new(1))
        .activate()
        .await
        .expect("retried GET must succeed");
    assert!(payload.is_object());
}
