use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::KernelError;

pub use self::{book::*, store::*};

mod book;
mod store;

/// Process-local book storage. Every clone shares the same store, and each
/// transaction holds its single lock until committed or dropped.
#[derive(Debug, Clone, Default)]
pub struct OnMemoryDatabase {
    store: Arc<Mutex<BookStore>>,
}

impl OnMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for OnMemoryDatabase {
    type Transaction = OnMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let guard = Arc::clone(&self.store).lock_owned().await;
        Ok(OnMemoryTransaction {
            guard,
            staged: None,
        })
    }
}

/// Writes go to a copy of the store made on first mutation and become
/// visible only on `commit`.
pub struct OnMemoryTransaction {
    guard: OwnedMutexGuard<BookStore>,
    staged: Option<BookStore>,
}

impl OnMemoryTransaction {
    pub(crate) fn store(&self) -> &BookStore {
        self.staged.as_ref().unwrap_or(&self.guard)
    }

    pub(crate) fn store_mut(&mut self) -> &mut BookStore {
        let guard = &self.guard;
        self.staged.get_or_insert_with(|| BookStore::clone(guard))
    }
}

#[async_trait::async_trait]
impl Transaction for OnMemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        let Self { mut guard, staged } = self;
        if let Some(staged) = staged {
            tracing::debug!("Committing {} book(s)", staged.len());
            *guard = staged;
        }
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        if self.staged.is_some() {
            tracing::debug!("Discarding staged changes");
        }
        Ok(())
    }
}


#[cfg(test)]
pub(crate) fn test_book(id: &str, name: &str) -> kernel::prelude::entity::Book {
    use kernel::prelude::entity::{Book, BookContent, BookId};

    let content = BookContent::new(
        Some(name.to_string()),
        2020,
        "Author",
        "Summary",
        "Publisher",
        100,
        10,
        true,
    )
    .expect("valid content");
    Book::create(BookId::new(id), content, time::OffsetDateTime::now_utc())
}
