use vodca::{AsRefln, Fromln};

use crate::entity::{PageCount, ReadPage};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct IsFinished(bool);

impl IsFinished {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }

    pub fn from_progress(page_count: &PageCount, read_page: &ReadPage) -> Self {
        Self(read_page.reaches(page_count))
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct IsReading(bool);

impl IsReading {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }
}
