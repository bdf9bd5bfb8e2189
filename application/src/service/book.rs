use error_stack::Report;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{Book, BookContent, BookFilter, BookId};
use kernel::KernelError;

use crate::transfer::{
    BookContentDto, BookDto, DeleteBookDto, GetAllBookDto, GetBookDto, UpdateBookDto,
};

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id).await?;

        Ok(book.map(BookDto::from))
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait GetAllBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_all_books(
        &self,
        dto: GetAllBookDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let filter = BookFilter::from(dto);
        let books = self.book_query().find_all(&mut connection, &filter).await?;

        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> GetAllBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn create_book(&self, dto: BookContentDto) -> error_stack::Result<String, KernelError> {
        let content = BookContent::try_from(dto)?;
        let mut connection = self.database_connection().transact().await?;

        let id = Uuid::new_v4().to_string();
        let book = Book::create(BookId::new(&id), content, OffsetDateTime::now_utc());
        self.book_modifier().create(&mut connection, &book).await?;
        connection.commit().await?;

        tracing::debug!("Created book {id}");
        Ok(id)
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier {}

#[async_trait::async_trait]
pub trait UpdateBookService:
    'static + Sync + Send + DependOnBookQuery + DependOnBookModifier
{
    /// The id is resolved before the payload is validated, so an unknown id
    /// reports [`KernelError::NotFound`] whatever the payload holds.
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let mut book = self
            .book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("id: {}", id.as_ref()))
            })?;

        let content = BookContent::try_from(dto.content)?;
        book.revise(content, OffsetDateTime::now_utc());
        self.book_modifier().update(&mut connection, &book).await?;
        connection.commit().await?;

        tracing::debug!("Updated book {}", id.as_ref());
        Ok(())
    }
}

impl<T> UpdateBookService for T where T: DependOnBookQuery + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait DeleteBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        self.book_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        tracing::debug!("Deleted book {}", id.as_ref());
        Ok(())
    }
}

impl<T> DeleteBookService for T where T: DependOnBookModifier {}
