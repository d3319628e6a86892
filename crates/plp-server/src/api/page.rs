use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Extension,
};
use plp_core::apply_sort;

use crate::{middleware::RequestId, view};

use super::{log_catalog_error, AppState, SortQuery};

/// `GET /` — loads the catalog once and renders it in the selected order.
pub(super) async fn product_listing(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SortQuery>,
) -> Response {
    let sort = query.option();

    match state.catalog.fetch_products().await {
        Ok(products) => {
            let sorted = apply_sort(&products, sort);
            tracing::debug!(request_id = %req_id.0, %sort, count = sorted.len(), "rendering listing");
            Html(view::listing_page(&sorted, sort).into_string()).into_response()
        }
        Err(e) => {
            log_catalog_error(&req_id.0, &e);
            (
                StatusCode::BAD_GATEWAY,
                Html(view::error_page(e.kind()).into_string()),
            )
                .into_response()
        }
    }
}
