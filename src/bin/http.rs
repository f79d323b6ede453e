#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::net::SocketAddr;

    use room_finder::{http_api, load_document_from_json};

    tracing_subscriber::fmt::init();

    let data_path = std::env::var("ROOM_FINDER_DATA")
        .unwrap_or_else(|_| "schedule_data.json".to_string());
    let addr: SocketAddr = std::env::var("ROOM_FINDER_HTTP_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;

    // The document is the one thing the service cannot run without.
    let document = load_document_from_json(&data_path)?;
    tracing::info!(
        rooms = document.room_list.len(),
        courses = document.courses.len(),
        "loaded schedule document from {data_path}"
    );

    println!("room-finder HTTP API listening on http://{addr}");
    http_api::serve(addr, document).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
