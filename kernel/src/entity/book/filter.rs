use crate::entity::{Book, IsFinished, IsReading};

/// Optional predicates narrowing a listing. Present predicates are combined with AND.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct BookFilter {
    name: Option<String>,
    reading: Option<IsReading>,
    finished: Option<IsFinished>,
}

impl BookFilter {
    pub fn new(name: Option<String>, reading: Option<bool>, finished: Option<bool>) -> Self {
        Self {
            name: name
                .filter(|name| !name.is_empty())
                .map(|name| name.to_lowercase()),
            reading: reading.map(IsReading::new),
            finished: finished.map(IsFinished::new),
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        let name = self.name.as_ref().map_or(true, |needle| {
            book.name().as_ref().to_lowercase().contains(needle)
        });
        let reading = self
            .reading
            .as_ref()
            .map_or(true, |reading| book.reading() == reading);
        let finished = self
            .finished
            .as_ref()
            .map_or(true, |finished| book.finished() == finished);
        name && reading && finished
    }
}
