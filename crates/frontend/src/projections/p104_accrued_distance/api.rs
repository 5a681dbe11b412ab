use contracts::projections::p104_accrued_distance::dto::AccruedDistanceRowDto;
use contracts::shared::filters::{ListRequest, ListResponse};

use crate::shared::api::{post_json, with_retry, ApiError};
use crate::shared::api_utils::api_url;
use crate::shared::filter_state::ViewKind;

pub async fn fetch_accrued_distance(
    request: ListRequest,
    retries: u32,
) -> Result<ListResponse<AccruedDistanceRowDto>, ApiError> {
    let url = api_url(&ViewKind::AccruedDistance.list_path());
    let (url, request) = (url.as_str(), &request);
    with_retry(retries, move || post_json(url, request, None)).await
}
