//! Front-end core for the book manager page.
//!
//! # Overview
//! Lists, adds, and removes book records against a REST-style `/books`
//! endpoint and renders the result into an in-memory page model. The crate
//! never touches the network itself (host-does-IO pattern): `BookClient`
//! builds `HttpRequest` values and parses `HttpResponse` values, and a
//! host-provided [`Transport`] executes the round-trips in between, so the
//! whole workflow is deterministic and testable without a server.
//!
//! # Design
//! - `BookApp` owns the injected client and transport plus the page; user
//!   events are explicit methods (`on_load`, `on_submit`, `on_remove`).
//! - Failures are logged and stop at the handler boundary; the page keeps
//!   its last-known-good render. No retries, no timeouts of our own.
//! - Ids are assigned client-side (`next_book_id`) from a fresh read of the
//!   collection, a read-modify-write window that concurrent writers can
//!   race; the window is called out where the read happens.
//! - Rendering builds structured nodes; text is escaped once, at HTML
//!   serialization, so record fields cannot inject markup.
//! - Everything is synchronous and single-threaded; renders run to
//!   completion, last render wins.

pub mod app;
pub mod client;
pub mod dom;
pub mod error;
pub mod http;
pub mod page;
pub mod render;
pub mod types;

pub use app::BookApp;
pub use client::BookClient;
pub use dom::{Element, Node};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use page::{AddBookForm, BookPage, TextInput};
pub use render::render_book_cards;
pub use types::{next_book_id, Book};
