use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookSummary(String);

impl BookSummary {
    pub fn new(summary: impl Into<String>) -> Self {
        Self(summary.into())
    }
}
