use relay_http::{promise, subscribe, subscribe_with, Body, Producer, RelayClient, RetryPolicy};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_url =
        std::env::var("RELAY_BASE_URL").unwrap_or_else(|_| "http://httpbin.org".to_owned());
    let client = RelayClient::new(base_url);

    // Push subscription, success channel only.
    subscribe(client.get("/get"), |payload| println!("GET -> {payload}")).await;

    let mut body = Body::new();
    body.insert("prop1".to_owned(), "Valor prop1".to_owned());
    body.insert("prop2".to_owned(), "Valor prop2".to_owned());

    subscribe(client.post("/post", body.clone()), |payload| {
        println!("POST -> {payload}")
    })
    .await;
    subscribe(client.put("/put", body), |payload| {
        println!("PUT -> {payload}")
    })
    .await;
    subscribe(client.delete("/delete"), |payload| {
        println!("DELETE -> {payload}")
    })
    .await;

    // Promise-style resolution.
    match promise(client.get("/get")).await {
        Ok(payload) => println!("promised GET -> {payload}"),
        Err(err) => println!("promised GET failed -> {err}"),
    }

    // Dual-channel delivery with bounded retry.
    subscribe_with(
        client.get("/post").with_retry(RetryPolicy::new(3)),
        |payload| println!("retried GET -> {payload}"),
        |err| println!("retried GET failed -> {err}"),
    )
    .await;

    Ok(())
}
