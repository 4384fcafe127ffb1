//! Stateless HTTP request builder and response parser for the book API.
//!
//! # Design
//! `BookClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! A `Transport` executes the actual round-trip in between, keeping this
//! module deterministic and free of I/O dependencies.
//!
//! Success means any 2xx status: json-server style backends answer 200 or
//! 201 depending on the operation, so the shared status check accepts the
//! whole class rather than one exact code.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Book;

/// Synchronous, stateless client for the book API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The base URL is injected at construction — there
/// is deliberately no global endpoint constant anywhere in the crate.
#[derive(Debug, Clone)]
pub struct BookClient {
    base_url: String,
}

impl BookClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_books(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/books", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_book(&self, book: &Book) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(book).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/books", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_book(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/books/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_books(&self, response: HttpResponse) -> Result<Vec<Book>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    pub fn parse_create_book(&self, response: HttpResponse) -> Result<Book, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    pub fn parse_delete_book(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpStatusError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BookClient {
        BookClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_books_produces_correct_request() {
        let req = client().build_list_books();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/books");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_book_produces_correct_request() {
        let book = Book {
            id: 6,
            title: "The Dispossessed".to_string(),
            author: "Ursula K. Le Guin".to_string(),
        };
        let req = client().build_create_book(&book).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/books");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 6);
        assert_eq!(body["title"], "The Dispossessed");
        assert_eq!(body["author"], "Ursula K. Le Guin");
    }

    #[test]
    fn build_delete_book_produces_correct_request() {
        let req = client().build_delete_book(6);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/books/6");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_books_success() {
        let resp = response(200, r#"[{"id":1,"title":"Test","author":"Nobody"}]"#);
        let books = client().parse_list_books(resp).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 1);
        assert_eq!(books[0].title, "Test");
    }

    #[test]
    fn parse_list_books_preserves_order() {
        let resp = response(
            200,
            r#"[{"id":3,"title":"C","author":"c"},{"id":1,"title":"A","author":"a"}]"#,
        );
        let books = client().parse_list_books(resp).unwrap();
        let ids: Vec<u64> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn parse_list_books_bad_json() {
        let err = client().parse_list_books(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::ParseError(_)));
    }

    #[test]
    fn parse_list_books_object_instead_of_array() {
        let resp = response(200, r#"{"id":1,"title":"T","author":"A"}"#);
        let err = client().parse_list_books(resp).unwrap_err();
        assert!(matches!(err, ApiError::ParseError(_)));
    }

    #[test]
    fn parse_create_book_success() {
        let resp = response(201, r#"{"id":6,"title":"New","author":"Anon"}"#);
        let book = client().parse_create_book(resp).unwrap();
        assert_eq!(book.id, 6);
        assert_eq!(book.title, "New");
    }

    #[test]
    fn parse_create_book_accepts_plain_200() {
        // json-server replies 201; other stores answer 200. Both are success.
        let resp = response(200, r#"{"id":6,"title":"New","author":"Anon"}"#);
        assert!(client().parse_create_book(resp).is_ok());
    }

    #[test]
    fn parse_create_book_server_error() {
        let err = client().parse_create_book(response(500, "internal error")).unwrap_err();
        assert!(matches!(err, ApiError::HttpStatusError { status: 500, .. }));
    }

    #[test]
    fn parse_delete_book_success() {
        assert!(client().parse_delete_book(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_book_accepts_200_with_body() {
        assert!(client().parse_delete_book(response(200, "{}")).is_ok());
    }

    #[test]
    fn parse_delete_book_not_found() {
        let err = client().parse_delete_book(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = BookClient::new("http://localhost:3000/");
        let req = client.build_list_books();
        assert_eq!(req.path, "http://localhost:3000/books");
    }
}
