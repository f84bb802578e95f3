//! Pagination and sort direction types.

/// Generic sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sort {
    Desc,
    Asc,
}

/// Limit/offset pagination shared across all list endpoints.
///
/// - `limit`: 1–100, default 20
/// - `offset`: ≥ 0, default 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u64,
    pub offset: u64,
}

/// Largest offset the database driver accepts (offsets bind as `BIGINT`).
pub const MAX_OFFSET: u64 = i64::MAX as u64;

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}

impl PageRequest {
    /// Clamp `limit` to 1..=100 and `offset` to [`MAX_OFFSET`].
    ///
    /// Call after reading from query params to enforce bounds.
    pub fn clamped(self) -> Self {
        Self {
            limit: self.limit.clamp(1, 100),
            offset: self.offset.min(MAX_OFFSET),
        }
    }
}

/// One page of results together with the total row count.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub count: u64,
    pub items: Vec<T>,
    pub request: PageRequest,
}

impl<T> Page<T> {
    /// Offset of the following page, if any rows remain.
    pub fn next_offset(&self) -> Option<u64> {
        let next = self.request.offset.checked_add(self.request.limit)?;
        (next < self.count).then_some(next)
    }

    /// Offset of the preceding page, or `None` on the first page.
    pub fn previous_offset(&self) -> Option<u64> {
        (self.request.offset > 0).then(|| self.request.offset.saturating_sub(self.request.limit))
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            count: self.count,
            items: self.items.into_iter().map(f).collect(),
            request: self.request,
        }
    }
}
