//! In-memory stand-in for the book store behind `/books`.
//!
//! Mimics a json-server style collection: the client supplies record ids,
//! `POST` echoes the stored record, and listing returns id order (the
//! `BTreeMap` keeps that deterministic for tests).

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
}

pub type Db = Arc<RwLock<BTreeMap<u64, Book>>>;

/// Builds a store preloaded with `books`, keyed by id. Later entries win
/// when ids collide, same as inserting them one by one.
pub fn seeded(books: Vec<Book>) -> Db {
    let map: BTreeMap<u64, Book> = books.into_iter().map(|book| (book.id, book)).collect();
    Arc::new(RwLock::new(map))
}

pub fn app() -> Router {
    app_with_db(Db::default())
}

pub fn app_with_db(db: Db) -> Router {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/{id}", delete(delete_book))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_books(State(db): State<Db>) -> Json<Vec<Book>> {
    let books = db.read().await;
    Json(books.values().cloned().collect())
}

async fn create_book(
    State(db): State<Db>,
    Json(book): Json<Book>,
) -> Result<(StatusCode, Json<Book>), StatusCode> {
    let mut books = db.write().await;
    if books.contains_key(&book.id) {
        return Err(StatusCode::CONFLICT);
    }
    books.insert(book.id, book.clone());
    Ok((StatusCode::CREATED, Json(book)))
}

async fn delete_book(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut books = db.write().await;
    books
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
