use contracts::projections::p102_idle_assets::dto::IdleAssetRowDto;
use contracts::shared::filters::{ListRequest, ListResponse};

use crate::shared::api::{post_json, with_retry, ApiError};
use crate::shared::api_utils::api_url;
use crate::shared::filter_state::ViewKind;

pub async fn fetch_idle_assets(
    request: ListRequest,
    retries: u32,
) -> Result<ListResponse<IdleAssetRowDto>, ApiError> {
    let url = api_url(&ViewKind::IdleAssets.list_path());
    let (url, request) = (url.as_str(), &request);
    with_retry(retries, move || post_json(url, request, None)).await
}
