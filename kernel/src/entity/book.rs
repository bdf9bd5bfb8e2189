mod author;
mod content;
mod filter;
mod id;
mod name;
mod page;
mod publisher;
mod state;
mod summary;
mod year;

pub use self::{
    author::*, content::*, filter::*, id::*, name::*, page::*, publisher::*, state::*,
    summary::*, year::*,
};

use destructure::{Destructure, Mutation};
use time::OffsetDateTime;
use vodca::References;

use crate::entity::common::{InsertedAt, UpdatedAt};

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    name: BookName,
    year: BookYear,
    author: BookAuthor,
    summary: BookSummary,
    publisher: BookPublisher,
    page_count: PageCount,
    read_page: ReadPage,
    finished: IsFinished,
    reading: IsReading,
    inserted_at: InsertedAt<Book>,
    updated_at: UpdatedAt<Book>,
}

impl Book {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: BookId,
        name: BookName,
        year: BookYear,
        author: BookAuthor,
        summary: BookSummary,
        publisher: BookPublisher,
        page_count: PageCount,
        read_page: ReadPage,
        finished: IsFinished,
        reading: IsReading,
        inserted_at: InsertedAt<Book>,
        updated_at: UpdatedAt<Book>,
    ) -> Self {
        Self {
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
        }
    }

    /// Builds a new record stamped with `now` for both timestamps.
    pub fn create(id: BookId, content: BookContent, now: OffsetDateTime) -> Self {
        let DestructBookContent {
            name,
            year,
            author,
            summary,
            publisher,
            page_count,
            read_page,
            reading,
        } = content.into_destruct();
        let finished = IsFinished::from_progress(&page_count, &read_page);
        Self::new(
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
            InsertedAt::new(now),
            UpdatedAt::new(now),
        )
    }

    /// Replaces every client-writable field. `id` and `inserted_at` are kept,
    /// `finished` is recomputed and `updated_at` never goes before `inserted_at`.
    pub fn revise(&mut self, content: BookContent, now: OffsetDateTime) {
        let DestructBookContent {
            name,
            year,
            author,
            summary,
            publisher,
            page_count,
            read_page,
            reading,
        } = content.into_destruct();
        let finished = IsFinished::from_progress(&page_count, &read_page);
        let now = now.max(*self.inserted_at.as_ref());
        self.substitute(|book| {
            *book.name = name;
            *book.year = year;
            *book.author = author;
            *book.summary = summary;
            *book.publisher = publisher;
            *book.page_count = page_count;
            *book.read_page = read_page;
            *book.finished = finished;
            *book.reading = reading;
            *book.updated_at = UpdatedAt::new(now);
        });
    }
}

#[cfg(test)]
mod test {
    use time::{Duration, OffsetDateTime};

    use super::{Book, BookContent, BookFilter, BookId};

    fn content(name: &str, page_count: u32, read_page: u32, reading: bool) -> BookContent {
        BookContent::new(
            Some(name.to_string()),
            2010,
            "John Doe",
            "Lorem Ipsum",
            "Dicoding Indonesia",
            page_count,
            read_page,
            reading,
        )
        .unwrap()
    }

    #[test]
    fn create_derives_finished_and_timestamps() {
        let now = OffsetDateTime::now_utc();
        let done = Book::create(BookId::new("a"), content("Done", 100, 100, false), now);
        assert!(*done.finished().as_ref());
        assert_eq!(done.inserted_at().as_ref(), &now);
        assert_eq!(done.updated_at().as_ref(), &now);

        let halfway = Book::create(BookId::new("b"), content("Halfway", 100, 50, true), now);
        assert!(!*halfway.finished().as_ref());
    }

    #[test]
    fn revise_keeps_identity_and_insertion_time() {
        let inserted = OffsetDateTime::now_utc();
        let mut book = Book::create(BookId::new("a"), content("Before", 10, 1, true), inserted);

        let later = inserted + Duration::seconds(5);
        book.revise(content("After", 10, 10, false), later);

        assert_eq!(book.id(), &BookId::new("a"));
        assert_eq!(book.name().as_ref(), "After");
        assert!(*book.finished().as_ref());
        assert!(!*book.reading().as_ref());
        assert_eq!(book.inserted_at().as_ref(), &inserted);
        assert_eq!(book.updated_at().as_ref(), &later);
    }

    #[test]
    fn revise_never_moves_updated_at_before_inserted_at() {
        let inserted = OffsetDateTime::now_utc();
        let mut book = Book::create(BookId::new("a"), content("Book", 10, 1, true), inserted);
        book.revise(content("Book", 10, 2, true), inserted - Duration::hours(1));
        assert_eq!(book.updated_at().as_ref(), &inserted);
    }

    #[test]
    fn filter_combines_predicates() {
        let now = OffsetDateTime::now_utc();
        let book = Book::create(BookId::new("a"), content("Belajar Rust", 10, 3, true), now);

        assert!(BookFilter::default().matches(&book));
        assert!(BookFilter::new(Some("rust".into()), None, None).matches(&book));
        assert!(BookFilter::new(Some("BELAJAR".into()), Some(true), Some(false)).matches(&book));
        assert!(!BookFilter::new(Some("rust".into()), Some(false), None).matches(&book));
        assert!(!BookFilter::new(None, Some(true), Some(true)).matches(&book));
        assert!(!BookFilter::new(Some("python".into()), None, None).matches(&book));
        assert!(BookFilter::new(Some(String::new()), None, None).matches(&book));
    }
}
