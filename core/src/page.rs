//! Typed model of the page surface the handlers touch.
//!
//! # Design
//! The interactive surface is plain struct fields, so access is checked at
//! compile time and the well-known ids (`book-list`, `add-book-form`,
//! `title`, `author`) travel as data on the serialized elements. The card
//! container is a real [`Element`] because the renderer rebuilds its
//! subtree wholesale; the form inputs only ever hold a string each, so they
//! are modeled directly and lowered to elements when the page is printed.

use crate::dom::Element;

/// A single-line text input identified by its DOM id.
#[derive(Debug, Clone)]
pub struct TextInput {
    pub id: String,
    pub value: String,
}

impl TextInput {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            value: String::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: &str) {
        self.value = value.to_string();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    fn to_element(&self) -> Element {
        Element::new("input")
            .attr("id", &self.id)
            .attr("type", "text")
            .attr("value", &self.value)
    }
}

/// The `#add-book-form` surface: two text inputs and a submit control.
#[derive(Debug, Clone)]
pub struct AddBookForm {
    pub title: TextInput,
    pub author: TextInput,
}

impl AddBookForm {
    pub fn new() -> Self {
        Self {
            title: TextInput::new("title"),
            author: TextInput::new("author"),
        }
    }

    /// Set both fields, as a user typing into the form would.
    pub fn fill(&mut self, title: &str, author: &str) {
        self.title.set(title);
        self.author.set(author);
    }

    /// Empty both fields. Runs after every submission attempt, successful
    /// or not.
    pub fn clear(&mut self) {
        self.title.clear();
        self.author.clear();
    }

    pub fn to_element(&self) -> Element {
        Element::new("form")
            .attr("id", "add-book-form")
            .child(self.title.to_element())
            .child(self.author.to_element())
            .child(
                Element::new("button")
                    .attr("type", "submit")
                    .attr("class", "btn btn-primary")
                    .text("Add Book"),
            )
    }
}

impl Default for AddBookForm {
    fn default() -> Self {
        Self::new()
    }
}

/// The whole page as the handlers see it: the add form plus the
/// `#book-list` container the renderer writes into.
#[derive(Debug, Clone)]
pub struct BookPage {
    pub form: AddBookForm,
    pub book_list: Element,
}

impl BookPage {
    pub fn new() -> Self {
        Self {
            form: AddBookForm::new(),
            book_list: Element::new("div").attr("id", "book-list").attr("class", "row"),
        }
    }

    /// Serialize the current page state, form first, list below.
    pub fn to_html(&self) -> String {
        format!("{}\n{}", self.form.to_element().to_html(), self.book_list.to_html())
    }
}

impl Default for BookPage {
    fn default() -> Self {
        Self::new()
    }
}
