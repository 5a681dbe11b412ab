use contracts::projections::p103_moving_assets::dto::MovingAssetRowDto;
use contracts::shared::filters::{ListRequest, ListResponse};

use crate::shared::api::{post_json, with_retry, ApiError};
use crate::shared::api_utils::api_url;
use crate::shared::filter_state::ViewKind;

pub async fn fetch_moving_assets(
    request: ListRequest,
    retries: u32,
) -> Result<ListResponse<MovingAssetRowDto>, ApiError> {
    let url = api_url(&ViewKind::MovingAssets.list_path());
    let (url, request) = (url.as_str(), &request);
    with_retry(retries, move || post_json(url, request, None)).await
}
