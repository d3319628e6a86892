use axum::{
    extract::{Query, State},
    Extension, Json,
};
use plp_core::{apply_sort, Product};

use crate::middleware::RequestId;

use super::{map_catalog_error, ApiError, ApiResponse, AppState, ResponseMeta, SortQuery};

/// `GET /api/v1/products` — the same sorted sequence the page renders, as JSON.
pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SortQuery>,
) -> Result<Json<ApiResponse<Vec<Product>>>, ApiError> {
    let sort = query.option();
    let products = state
        .catalog
        .fetch_products()
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;

    let mut meta = ResponseMeta::new(req_id.0);
    meta.sort = Some(sort);

    Ok(Json(ApiResponse {
        data: apply_sort(&products, sort),
        meta,
    }))
}
