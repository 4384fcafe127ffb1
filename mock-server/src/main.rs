use tokio::net::TcpListener;

use mock_server::{app_with_db, seeded, Book, Db};

/// Optionally takes a JSON file of books as its only argument, json-server
/// style, and serves the collection from memory.
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt::init();

    let db = match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)?;
            let books: Vec<Book> = serde_json::from_str(&raw)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            tracing::info!(count = books.len(), "seeded store from {}", path);
            seeded(books)
        }
        None => Db::default(),
    };

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("book store listening on {}", addr);
    axum::serve(listener, app_with_db(db)).await
}
