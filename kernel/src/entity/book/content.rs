use destructure::Destructure;
use error_stack::Report;
use vodca::References;

use crate::entity::{
    BookAuthor, BookName, BookPublisher, BookSummary, BookYear, IsReading, PageCount, ReadPage,
};
use crate::KernelError;

/// Client-writable part of a [`Book`](crate::entity::Book).
/// Only constructible through [`BookContent::new`], so holding one means the
/// name is present and `readPage <= pageCount`.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct BookContent {
    name: BookName,
    year: BookYear,
    author: BookAuthor,
    summary: BookSummary,
    publisher: BookPublisher,
    page_count: PageCount,
    read_page: ReadPage,
    reading: IsReading,
}

impl BookContent {
    /// Checks run in order and the first failure wins: the name first, then page bounds.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Option<String>,
        year: i32,
        author: impl Into<String>,
        summary: impl Into<String>,
        publisher: impl Into<String>,
        page_count: u32,
        read_page: u32,
        reading: bool,
    ) -> error_stack::Result<Self, KernelError> {
        let name = match name {
            Some(name) if !name.is_empty() => BookName::new(name),
            _ => return Err(Report::new(KernelError::MissingName)),
        };
        let page_count = PageCount::new(page_count);
        let read_page = ReadPage::new(read_page);
        if read_page.exceeds(&page_count) {
            return Err(
                Report::new(KernelError::ReadPageExceedsPageCount).attach_printable(format!(
                    "readPage: {}, pageCount: {}",
                    read_page.as_ref(),
                    page_count.as_ref()
                )),
            );
        }
        Ok(Self {
            name,
            year: BookYear::new(year),
            author: BookAuthor::new(author),
            summary: BookSummary::new(summary),
            publisher: BookPublisher::new(publisher),
            page_count,
            read_page,
            reading: IsReading::new(reading),
        })
    }
}

#[cfg(test)]
mod test {
    use super::BookContent;
    use crate::KernelError;

    fn content(
        name: Option<&str>,
        page_count: u32,
        read_page: u32,
    ) -> Result<BookContent, KernelError> {
        BookContent::new(
            name.map(String::from),
            2021,
            "Dicoding Indonesia",
            "Lorem ipsum dolor sit amet",
            "Dicoding",
            page_count,
            read_page,
            false,
        )
        .map_err(|report| *report.current_context())
    }

    #[test]
    fn accepts_valid_content() {
        let content = content(Some("Dicoding"), 100, 25).unwrap();
        assert_eq!(content.name().as_ref(), "Dicoding");
        assert_eq!(*content.page_count().as_ref(), 100);
        assert_eq!(*content.read_page().as_ref(), 25);
    }

    #[test]
    fn rejects_missing_or_empty_name() {
        assert_eq!(content(None, 10, 1), Err(KernelError::MissingName));
        assert_eq!(content(Some(""), 10, 1), Err(KernelError::MissingName));
    }

    #[test]
    fn rejects_read_page_past_page_count() {
        assert_eq!(
            content(Some("X"), 50, 60),
            Err(KernelError::ReadPageExceedsPageCount)
        );
        assert!(content(Some("X"), 50, 50).is_ok());
    }

    #[test]
    fn name_check_runs_before_page_check() {
        assert_eq!(content(Some(""), 50, 60), Err(KernelError::MissingName));
    }
}
