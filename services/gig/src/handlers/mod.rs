pub mod game;
pub mod health;
pub mod saved;
pub mod tag;
pub mod user;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use gig_domain::game::GameOrdering;
use gig_domain::pagination::{Page, PageRequest};

use crate::error::GigServiceError;

/// Paginated list body. `next` / `previous` are offsets, `null` at either end.
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub count: u64,
    pub next: Option<u64>,
    pub previous: Option<u64>,
    pub results: Vec<T>,
}

impl<T> PageResponse<T> {
    pub fn from_page<U>(page: Page<U>, f: impl FnMut(U) -> T) -> Self {
        let next = page.next_offset();
        let previous = page.previous_offset();
        let page = page.map(f);
        Self {
            count: page.count,
            next,
            previous,
            results: page.items,
        }
    }
}

/// `ordering`, `limit` and `offset`, shared by every game listing.
#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
    pub ordering: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl ListParams {
    pub fn ordering(&self) -> GameOrdering {
        self.ordering
            .as_deref()
            .map(GameOrdering::parse)
            .unwrap_or_default()
    }

    pub fn page(&self) -> PageRequest {
        let default = PageRequest::default();
        PageRequest {
            limit: self.limit.unwrap_or(default.limit),
            offset: self.offset.unwrap_or(default.offset),
        }
    }
}

/// Parse a raw query string with `serde_qs`. An absent query yields `T::default()`.
pub(crate) fn parse_query<T: DeserializeOwned + Default>(
    raw_query: Option<&str>,
) -> Result<T, GigServiceError> {
    Ok(raw_query
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|e| GigServiceError::InvalidQuery(e.to_string()))?
        .unwrap_or_default())
}
