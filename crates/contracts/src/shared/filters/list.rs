use serde::{Deserialize, Serialize};

use super::set::FilterSet;
use super::sort::SortSpec;
use super::value::TaggedId;

/// Body of `POST /api/<view>/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListRequest {
    pub filters: FilterSet,
    pub page: usize,
    pub page_size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T> ListResponse<T> {
    pub fn total_pages(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(page_size)
    }
}

/// Query string of the option endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionQuery {
    pub q: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionListResponse {
    pub items: Vec<TaggedId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let resp: ListResponse<u32> = ListResponse {
            items: vec![],
            total_count: 101,
        };
        assert_eq!(resp.total_pages(50), 3);
        assert_eq!(resp.total_pages(0), 0);
    }
}
