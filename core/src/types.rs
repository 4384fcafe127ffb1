//! Domain DTOs for the book API.
//!
//! # Design
//! `Book` mirrors the server's schema but is defined independently; the
//! integration tests catch any drift between the two crates. Ids are plain
//! integers assigned on the client by [`next_book_id`], never by the server,
//! so there is no separate creation payload — the full record goes over the
//! wire.

use serde::{Deserialize, Serialize};

/// A single book record as it travels between client and server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
}

/// Pick the id for a record about to be created: one past the highest id
/// currently in the collection, or 1 for an empty collection.
///
/// Ids need not be contiguous — `{1, 3, 5}` yields 6. The caller reads the
/// collection immediately before calling this, and nothing stops another
/// client from claiming the same id before the create lands; see the submit
/// flow in `app` for where that window sits.
pub fn next_book_id(books: &[Book]) -> u64 {
    books.iter().map(|book| book.id).max().map_or(1, |max| max + 1)
}
