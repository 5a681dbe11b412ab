use contracts::projections::p101_yard_check::dto::YardCheckRowDto;
use contracts::shared::filters::{ListRequest, ListResponse};

use crate::shared::api::{post_json, with_retry, ApiError};
use crate::shared::api_utils::api_url;
use crate::shared::filter_state::ViewKind;

pub async fn fetch_yard_check(
    request: ListRequest,
    retries: u32,
) -> Result<ListResponse<YardCheckRowDto>, ApiError> {
    let url = api_url(&ViewKind::YardCheck.list_path());
    let (url, request) = (url.as_str(), &request);
    with_retry(retries, move || post_json(url, request, None)).await
}
