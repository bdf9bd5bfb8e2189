use application::transfer::BookDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;

use crate::controller::Exhaust;
use crate::response::Envelope;

#[derive(Debug, Serialize)]
pub struct CreatedBookResponse {
    #[serde(rename = "bookId")]
    book_id: String,
}

impl IntoResponse for CreatedBookResponse {
    fn into_response(self) -> Response {
        let body = Envelope::success(self).with_message("Buku berhasil ditambahkan");
        (StatusCode::CREATED, Json(body)).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    id: String,
    name: String,
    year: i32,
    author: String,
    summary: String,
    publisher: String,
    page_count: u32,
    read_page: u32,
    finished: bool,
    reading: bool,
    #[serde(with = "time::serde::rfc3339")]
    inserted_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            year: value.year,
            author: value.author,
            summary: value.summary,
            publisher: value.publisher,
            page_count: value.page_count,
            read_page: value.read_page,
            finished: value.finished,
            reading: value.reading,
            inserted_at: value.inserted_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
struct BookData {
    book: BookResponse,
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        let body = Envelope::success(BookData { book: self });
        (StatusCode::OK, Json(body)).into_response()
    }
}

/// Listing projection: only `id`, `name` and `publisher`.
#[derive(Debug, Serialize)]
pub struct BookSummaryResponse {
    id: String,
    name: String,
    publisher: String,
}

#[derive(Debug, Serialize)]
pub struct BooksResponse {
    books: Vec<BookSummaryResponse>,
}

impl IntoResponse for BooksResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(Envelope::success(self))).into_response()
    }
}

pub struct MessageResponse(&'static str);

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(Envelope::message(self.0))).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<String> for BookPresenter {
    type To = CreatedBookResponse;
    fn emit(&self, input: String) -> Self::To {
        CreatedBookResponse { book_id: input }
    }
}

impl Exhaust<Option<BookDto>> for BookPresenter {
    type To = Option<BookResponse>;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        input.map(BookResponse::from)
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = BooksResponse;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        let books = input
            .into_iter()
            .map(|book| BookSummaryResponse {
                id: book.id,
                name: book.name,
                publisher: book.publisher,
            })
            .collect::<Vec<_>>();
        BooksResponse { books }
    }
}

pub struct UpdatedBookPresenter;

impl Exhaust<()> for UpdatedBookPresenter {
    type To = MessageResponse;
    fn emit(&self, _: ()) -> Self::To {
        MessageResponse("Buku berhasil diperbarui")
    }
}

pub struct DeletedBookPresenter;

impl Exhaust<()> for DeletedBookPresenter {
    type To = MessageResponse;
    fn emit(&self, _: ()) -> Self::To {
        MessageResponse("Buku berhasil dihapus")
    }
}
