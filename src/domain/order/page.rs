use serde::{Deserialize, Serialize};

// ============================================================================
// Pagination
// ============================================================================

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;

/// 0-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    #[allow(dead_code)]
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    /// Size clamped to 1..=MAX_PAGE_SIZE
    pub fn effective_size(&self) -> usize {
        self.size.clamp(1, MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.effective_size())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Cut one page out of the full list. A page past the end is empty.
    pub fn slice(mut all: Vec<T>, request: PageRequest) -> Self {
        let size = request.effective_size();
        let total_elements = all.len();
        let start = request.offset().min(total_elements);
        let end = start.saturating_add(size).min(total_elements);

        all.truncate(end);
        let content = all.split_off(start);

        Self {
            content,
            page: request.page,
            size,
            total_elements,
            total_pages: total_elements.div_ceil(size),
        }
    }
}
