use error_stack::Report;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookFilter, BookId};
use kernel::KernelError;

use crate::database::OnMemoryTransaction;

pub struct OnMemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery for OnMemoryBookRepository {
    type Transaction = OnMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut OnMemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con.store().find_by_id(id).cloned())
    }

    async fn find_all(
        &self,
        con: &mut OnMemoryTransaction,
        filter: &BookFilter,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let books = con
            .store()
            .iter()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect::<Vec<_>>();
        Ok(books)
    }
}

#[async_trait::async_trait]
impl BookModifier for OnMemoryBookRepository {
    type Transaction = OnMemoryTransaction;

    async fn create(
        &self,
        con: &mut OnMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        con.store_mut().insert(book.clone());
        tracing::debug!("Inserted book {}", book.id().as_ref());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut OnMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        let index = con
            .store()
            .index_of_id(book.id())
            .ok_or_else(|| not_found(book.id()))?;
        con.store_mut()
            .update_at(index, book.clone())
            .ok_or_else(|| not_found(book.id()))?;
        tracing::debug!("Updated book {} at {index}", book.id().as_ref());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut OnMemoryTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        let index = con
            .store()
            .index_of_id(book_id)
            .ok_or_else(|| not_found(book_id))?;
        con.store_mut()
            .remove_at(index)
            .ok_or_else(|| not_found(book_id))?;
        tracing::debug!("Removed book {} at {index}", book_id.as_ref());
        Ok(())
    }
}

fn not_found(id: &BookId) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("id: {}", id.as_ref()))
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{BookFilter, BookId};
    use kernel::KernelError;

    use crate::database::memory::test_book;
    use crate::database::{OnMemoryBookRepository, OnMemoryDatabase};

    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = OnMemoryDatabase::new();
        let mut con = db.transact().await?;
        let id = BookId::new("book-1");

        let book = test_book("book-1", "test");
        OnMemoryBookRepository.create(&mut con, &book).await?;

        let found = OnMemoryBookRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(book.clone()));

        let renamed = test_book("book-1", "test2");
        OnMemoryBookRepository.update(&mut con, &renamed).await?;

        let found = OnMemoryBookRepository
            .find_by_id(&mut con, &id)
            .await?
            .unwrap();
        assert_eq!(found.name(), renamed.name());
        assert_eq!(found.inserted_at(), book.inserted_at());

        OnMemoryBookRepository.delete(&mut con, &id).await?;
        let found = OnMemoryBookRepository.find_by_id(&mut con, &id).await?;
        assert!(found.is_none());

        con.commit().await?;
        Ok(())
    }

    #[tokio::test]
    async fn missing_id_is_not_found() -> error_stack::Result<(), KernelError> {
        let db = OnMemoryDatabase::new();
        let mut con = db.transact().await?;

        let update = OnMemoryBookRepository
            .update(&mut con, &test_book("ghost", "Ghost"))
            .await
            .unwrap_err();
        assert_eq!(update.current_context(), &KernelError::NotFound);

        let delete = OnMemoryBookRepository
            .delete(&mut con, &BookId::new("ghost"))
            .await
            .unwrap_err();
        assert_eq!(delete.current_context(), &KernelError::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn find_all_applies_filter() -> error_stack::Result<(), KernelError> {
        let db = OnMemoryDatabase::new();
        let mut con = db.transact().await?;
        OnMemoryBookRepository
            .create(&mut con, &test_book("a", "Belajar Rust"))
            .await?;
        OnMemoryBookRepository
            .create(&mut con, &test_book("b", "Belajar Go"))
            .await?;

        let all = OnMemoryBookRepository
            .find_all(&mut con, &BookFilter::default())
            .await?;
        assert_eq!(all.len(), 2);

        let rust = OnMemoryBookRepository
            .find_all(&mut con, &BookFilter::new(Some("RUST".into()), None, None))
            .await?;
        assert_eq!(rust.len(), 1);
        assert_eq!(rust[0].id(), &BookId::new("a"));
        Ok(())
    }
}
