use kernel::prelude::entity::{Book, BookId};

/// Insertion-ordered collection of books.
#[derive(Debug, Clone, Default)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    /// Appends without checking id uniqueness.
    pub fn insert(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn find_by_id(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id() == id)
    }

    pub fn index_of_id(&self, id: &BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id() == id)
    }

    /// Overwrites the record at `index` with `patch`, except for its id and insertion time.
    pub fn update_at(&mut self, index: usize, patch: Book) -> Option<&Book> {
        let current = self.books.get_mut(index)?;
        let id = current.id().clone();
        let inserted_at = current.inserted_at().clone();
        *current = patch.reconstruct(|book| {
            book.id = id;
            book.inserted_at = inserted_at;
        });
        Some(&*current)
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Book> {
        (index < self.books.len()).then(|| self.books.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::BookId;

    use crate::database::memory::test_book;
    use crate::database::BookStore;

    #[test]
    fn keeps_insertion_order() {
        let mut store = BookStore::default();
        store.insert(test_book("a", "First"));
        store.insert(test_book("b", "Second"));
        store.insert(test_book("c", "Third"));

        let names = store
            .iter()
            .map(|book| book.name().as_ref().as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["First", "Second", "Third"]);
        assert_eq!(store.index_of_id(&BookId::new("c")), Some(2));
        assert_eq!(store.index_of_id(&BookId::new("z")), None);
    }

    #[test]
    fn update_at_preserves_id_and_insertion_time() {
        let mut store = BookStore::default();
        let original = test_book("a", "Original");
        store.insert(original.clone());

        let patch = test_book("ignored", "Patched");
        let updated = store.update_at(0, patch.clone()).cloned().unwrap();

        assert_eq!(updated.id(), original.id());
        assert_eq!(updated.inserted_at(), original.inserted_at());
        assert_eq!(updated.name(), patch.name());
        assert_eq!(updated.updated_at(), patch.updated_at());
        assert_eq!(store.find_by_id(&BookId::new("a")), Some(&updated));
        assert!(store.update_at(1, patch).is_none());
    }

    #[test]
    fn remove_at_shifts_following_records() {
        let mut store = BookStore::default();
        store.insert(test_book("a", "First"));
        store.insert(test_book("b", "Second"));
        store.insert(test_book("c", "Third"));

        let removed = store.remove_at(1).unwrap();
        assert_eq!(removed.id(), &BookId::new("b"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.index_of_id(&BookId::new("c")), Some(1));
        assert!(store.find_by_id(&BookId::new("b")).is_none());
        assert!(store.remove_at(5).is_none());
    }
}
