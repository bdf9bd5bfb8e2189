use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Fromln, AsRefln)]
pub struct PageCount(u32);

impl PageCount {
    pub fn new(count: u32) -> Self {
        Self(count)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Fromln, AsRefln)]
pub struct ReadPage(u32);

impl ReadPage {
    pub fn new(page: u32) -> Self {
        Self(page)
    }

    pub fn exceeds(&self, count: &PageCount) -> bool {
        self.0 > *count.as_ref()
    }

    pub fn reaches(&self, count: &PageCount) -> bool {
        self.0 == *count.as_ref()
    }
}
