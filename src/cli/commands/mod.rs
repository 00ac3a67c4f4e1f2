pub mod admin;
pub mod auth;
pub mod booking;
pub mod person;
pub mod property;
pub mod service;

use crate::db::{DEFAULT_PAGE_SIZE, Page};

/// Common pagination parameters for all list commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number.
    pub page: i64,
    pub page_size: i64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Page::number(params.page, params.page_size)
    }
}
