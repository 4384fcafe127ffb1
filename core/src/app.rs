//! Event handlers wiring the client, transport, and page together.
//!
//! # Design
//! `BookApp` keeps the wiring explicit: the endpoint travels inside the
//! injected `BookClient`, the transport is injected beside it, and each
//! user event is an explicit handler method. Handlers return nothing — every failure is logged
//! through `tracing` and stops at the handler boundary, leaving the page in
//! its last-known-good state. The one deliberate exception: the form fields
//! clear after every submission attempt, successful or not.
//!
//! Everything here is synchronous and single-threaded. A handler runs to
//! completion before the host can deliver the next event, so renders never
//! interleave and the page is simply "last render wins."

use crate::client::BookClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::page::{AddBookForm, BookPage};
use crate::render::render_book_cards;
use crate::types::{next_book_id, Book};

/// The front-end: one instance per page, holding the injected client and
/// transport plus the page state the handlers mutate.
pub struct BookApp<T: Transport> {
    client: BookClient,
    transport: T,
    page: BookPage,
}

impl<T: Transport> BookApp<T> {
    pub fn new(client: BookClient, transport: T) -> Self {
        Self {
            client,
            transport,
            page: BookPage::new(),
        }
    }

    pub fn page(&self) -> &BookPage {
        &self.page
    }

    /// Mutable access to the form, for the host to type into.
    pub fn form_mut(&mut self) -> &mut AddBookForm {
        &mut self.page.form
    }

    /// Page-load event: fetch the collection and render it.
    pub fn on_load(&mut self) {
        self.display_books();
    }

    /// Form submission event. Reads the fields, assigns the next id from a
    /// fresh read of the collection, posts the record, and re-renders from
    /// the server on success.
    pub fn on_submit(&mut self) {
        match self.submit() {
            Ok(book) => {
                tracing::info!(id = book.id, "book added");
                self.display_books();
            }
            Err(error) => tracing::error!(error = %error, "failed to add book"),
        }
        // Fields clear no matter how the attempt went; there is no rollback.
        self.page.form.clear();
    }

    /// Removal event from a card's `Remove` control.
    pub fn on_remove(&mut self, id: u64) {
        let request = self.client.build_delete_book(id);
        let result = self
            .transport
            .execute(request)
            .and_then(|response| self.client.parse_delete_book(response));
        match result {
            Ok(()) => {
                tracing::info!(id, "book deleted");
                self.display_books();
            }
            Err(error) => tracing::error!(id, error = %error, "failed to delete book"),
        }
    }

    /// Fetch the collection and rebuild the card list. On failure the
    /// previous render stays on the page.
    fn display_books(&mut self) {
        match self.fetch_books() {
            Ok(books) => render_book_cards(&mut self.page.book_list, &books),
            Err(error) => tracing::error!(error = %error, "failed to fetch books"),
        }
    }

    fn fetch_books(&mut self) -> Result<Vec<Book>, ApiError> {
        let request = self.client.build_list_books();
        let response = self.transport.execute(request)?;
        self.client.parse_list_books(response)
    }

    fn submit(&mut self) -> Result<Book, ApiError> {
        let title = self.page.form.title.value().to_string();
        let author = self.page.form.author.value().to_string();
        // Re-read the collection to pick the id. Another client can claim
        // the same id between this read and the create below; uniqueness is
        // only as good as that window staying empty.
        let books = self.fetch_books()?;
        let book = Book {
            id: next_book_id(&books),
            title,
            author,
        };
        let request = self.client.build_create_book(&book)?;
        let response = self.transport.execute(request)?;
        self.client.parse_create_book(response)
    }
}
