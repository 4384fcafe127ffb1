//! Card rendering for the book list.
//!
//! # Design
//! One card per record, in the order the server returned them, built as
//! structured nodes. The container's previous children are dropped first,
//! a full O(n) rebuild on every render, with "last render wins" as the
//! only consistency rule. Cards carry Bootstrap class names for styling,
//! and each `Remove` control holds its record id in a `data-book-id`
//! attribute the host reads back when the control is activated.

use crate::dom::Element;
use crate::types::Book;

/// Replace `container`'s contents with one card per book.
pub fn render_book_cards(container: &mut Element, books: &[Book]) {
    container.clear_children();
    for book in books {
        container.append_child(book_card(book));
    }
}

fn book_card(book: &Book) -> Element {
    Element::new("div").attr("class", "col-md-4").child(
        Element::new("div").attr("class", "card mb-4").child(
            Element::new("div")
                .attr("class", "card-body")
                .child(Element::new("h5").attr("class", "card-title").text(&book.title))
                .child(Element::new("p").attr("class", "card-text").text(&book.author))
                .child(
                    Element::new("button")
                        .attr("class", "btn btn-danger")
                        .attr("data-book-id", &book.id.to_string())
                        .text("Remove"),
                ),
        ),
    )
}
