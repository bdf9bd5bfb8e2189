use error_stack::Report;
use time::OffsetDateTime;

use kernel::prelude::entity::{Book, BookContent, BookFilter, DestructBook};
use kernel::KernelError;

#[derive(Debug, Clone)]
pub struct BookDto {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            name,
            year,
            author,
            summary,
            publisher,
            page_count,
            read_page,
            finished,
            reading,
            inserted_at,
            updated_at,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            year: year.into(),
            author: author.into(),
            summary: summary.into(),
            publisher: publisher.into(),
            page_count: page_count.into(),
            read_page: read_page.into(),
            finished: finished.into(),
            reading: reading.into(),
            inserted_at: inserted_at.into(),
            updated_at: updated_at.into(),
        }
    }
}

/// Fields a client may write. `name` stays optional here so that its absence
/// is reported as a validation failure rather than a decoding one.
#[derive(Debug, Clone, Default)]
pub struct BookContentDto {
    pub name: Option<String>,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

impl TryFrom<BookContentDto> for BookContent {
    type Error = Report<KernelError>;
    fn try_from(value: BookContentDto) -> Result<Self, Self::Error> {
        BookContent::new(
            value.name,
            value.year,
            value.author,
            value.summary,
            value.publisher,
            value.page_count,
            value.read_page,
            value.reading,
        )
    }
}

pub struct GetBookDto {
    pub id: String,
}

#[derive(Debug, Default)]
pub struct GetAllBookDto {
    pub name: Option<String>,
    pub reading: Option<bool>,
    pub finished: Option<bool>,
}

impl From<GetAllBookDto> for BookFilter {
    fn from(value: GetAllBookDto) -> Self {
        BookFilter::new(value.name, value.reading, value.finished)
    }
}

pub struct UpdateBookDto {
    pub id: String,
    pub content: BookContentDto,
}

pub struct DeleteBookDto {
    pub id: String,
}
