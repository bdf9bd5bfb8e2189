use application::transfer::{
    BookContentDto, DeleteBookDto, GetAllBookDto, GetBookDto, UpdateBookDto,
};
use serde::Deserialize;

use crate::controller::Intake;

/// Body of both `POST /books` and `PUT /books/:id`. Omitted fields take their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookRequest {
    name: Option<String>,
    year: i32,
    author: String,
    summary: String,
    publisher: String,
    page_count: u32,
    read_page: u32,
    reading: bool,
}

impl From<BookRequest> for BookContentDto {
    fn from(value: BookRequest) -> Self {
        Self {
            name: value.name,
            year: value.year,
            author: value.author,
            summary: value.summary,
            publisher: value.publisher,
            page_count: value.page_count,
            read_page: value.read_page,
            reading: value.reading,
        }
    }
}

/// `reading` and `finished` hold `"1"` for true; any other value means false.
#[derive(Debug, Default)]
pub struct GetAllBookRequest {
    name: Option<String>,
    reading: Option<String>,
    finished: Option<String>,
}

impl GetAllBookRequest {
    /// Builds the filter set from raw query pairs. A repeated key keeps its first
    /// value and unknown keys are ignored, so no query string is ever refused.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        pairs
            .into_iter()
            .fold(Self::default(), |mut req, (key, value)| {
                let slot = match key.as_str() {
                    "name" => &mut req.name,
                    "reading" => &mut req.reading,
                    "finished" => &mut req.finished,
                    _ => return req,
                };
                slot.get_or_insert(value);
                req
            })
    }
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: String,
}

impl GetBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: String,
}

impl DeleteBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

pub struct BookTransformer;

impl Intake<BookRequest> for BookTransformer {
    type To = BookContentDto;
    fn emit(&self, input: BookRequest) -> Self::To {
        BookContentDto::from(input)
    }
}

impl Intake<(String, BookRequest)> for BookTransformer {
    type To = UpdateBookDto;
    fn emit(&self, input: (String, BookRequest)) -> Self::To {
        let (id, input) = input;
        UpdateBookDto {
            id,
            content: BookContentDto::from(input),
        }
    }
}

impl Intake<GetAllBookRequest> for BookTransformer {
    type To = GetAllBookDto;
    fn emit(&self, input: GetAllBookRequest) -> Self::To {
        let flag = |value: String| value == "1";
        GetAllBookDto {
            name: input.name,
            reading: input.reading.map(flag),
            finished: input.finished.map(flag),
        }
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}
