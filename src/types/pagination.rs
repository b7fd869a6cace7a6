//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::errors::{AppError, AppResult};

/// Pagination request shape, shared by every paginate endpoint.
///
/// Page numbers are 1-based. The fields are signed so a negative value
/// survives deserialization and fails validation with the same error shape
/// as a zero, instead of dying in the JSON layer.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageFilter {
    #[serde(default = "default_page_number")]
    #[schema(example = 1, minimum = 1)]
    pub page_number: i64,
    #[serde(default = "default_page_size")]
    #[schema(example = 10, minimum = 1)]
    pub page_size: i64,
}

fn default_page_number() -> i64 {
    DEFAULT_PAGE_NUMBER
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl PageFilter {
    /// Reject non-positive paging parameters before any store access.
    pub fn validate(&self) -> AppResult<()> {
        if self.page_number <= 0 {
            return Err(AppError::bad_request(
                "pageNumber must be greater than zero.",
            ));
        }
        if self.page_size <= 0 {
            return Err(AppError::bad_request("pageSize must be greater than zero."));
        }
        Ok(())
    }

    /// Zero-based page index for the store paginator. Only meaningful after
    /// `validate` has passed.
    pub fn page_index(&self) -> u64 {
        (self.page_number - 1).max(0) as u64
    }

    /// Page size for the store paginator. Only meaningful after `validate`
    /// has passed.
    pub fn limit(&self) -> u64 {
        self.page_size.max(0) as u64
    }
}

impl Default for PageFilter {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus the total live-row count.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[aliases(
    AddressPage = PageResult<crate::dtos::AddressDto>,
    UserPage = PageResult<crate::dtos::UserDto>,
    ProductPage = PageResult<crate::dtos::ProductDto>,
    ProductCategoryPage = PageResult<crate::dtos::ProductCategoryDto>,
    OrderPage = PageResult<crate::dtos::OrderDto>
)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_number: i64,
    pub page_size: i64,
}

impl<T> PageResult<T> {
    /// Build a page from fetched items and the total count.
    pub fn new(items: Vec<T>, total_count: u64, filter: &PageFilter) -> Self {
        Self {
            items,
            total_count,
            page_number: filter.page_number,
            page_size: filter.page_size,
        }
    }
}
