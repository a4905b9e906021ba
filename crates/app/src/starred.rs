use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use metrics::counter;
use serde::Deserialize;
use tracing::debug;

use starlist_core::projector::Projector;
use starlist_core::types::StarredRestaurantView;

use crate::problem::ProblemResponse;
use crate::router::AppState;

/// Routes for the starred-restaurants resource.
///
/// Registered at explicit `/starred` paths and merged into the app router,
/// so the collection route matches exactly the documented URI.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/starred", get(list_starred).post(create_starred))
        .route(
            "/starred/:id",
            get(get_starred).delete(delete_starred).put(update_comment),
        )
}

/// Body of `POST /starred/`. The `id` field names the catalog restaurant to
/// star, not a starred-entry id.
#[derive(Debug, Deserialize)]
struct CreateStarredRequest {
    id: String,
}

/// Body of `PUT /starred/:id`. A `null` comment clears the stored one.
#[derive(Debug, Deserialize)]
struct UpdateCommentRequest {
    #[serde(rename = "newComment")]
    new_comment: Option<String>,
}

async fn list_starred(State(state): State<AppState>) -> Json<Vec<StarredRestaurantView>> {
    let views = state
        .starred()
        .list()
        .iter()
        .map(|entry| {
            let restaurant = state.catalog().find(&entry.restaurant_id);
            Projector::starred_view(entry, restaurant.as_ref())
        })
        .collect();

    counter!("starred_api_requests_total", "op" => "list", "result" => "ok").increment(1);
    Json(views)
}

async fn get_starred(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StarredRestaurantView>, ProblemResponse> {
    let entry = state.starred().get(&id).map_err(|err| {
        counter!("starred_api_requests_total", "op" => "get", "result" => "not_found")
            .increment(1);
        ProblemResponse::not_found("starred_entry_not_found", err.to_string())
    })?;

    let restaurant = state.catalog().find(&entry.restaurant_id);

    counter!("starred_api_requests_total", "op" => "get", "result" => "ok").increment(1);
    Ok(Json(Projector::starred_view(&entry, restaurant.as_ref())))
}

async fn create_starred(
    State(state): State<AppState>,
    Json(request): Json<CreateStarredRequest>,
) -> Result<Json<StarredRestaurantView>, ProblemResponse> {
    let Some(restaurant) = state.catalog().find(&request.id) else {
        counter!("starred_api_requests_total", "op" => "create", "result" => "not_found")
            .increment(1);
        return Err(ProblemResponse::not_found(
            "restaurant_not_found",
            format!("no restaurant with id {} in the catalog", request.id),
        ));
    };

    let entry = state.starred().insert(&restaurant.id);
    debug!(entry_id = %entry.id, restaurant_id = %restaurant.id, "starred restaurant");

    counter!("starred_api_requests_total", "op" => "create", "result" => "ok").increment(1);
    // The name is resolved once here, at creation time.
    Ok(Json(Projector::starred_view(&entry, Some(&restaurant))))
}

async fn delete_starred(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ProblemResponse> {
    state.starred().remove(&id).map_err(|err| {
        counter!("starred_api_requests_total", "op" => "delete", "result" => "not_found")
            .increment(1);
        ProblemResponse::not_found("starred_entry_not_found", err.to_string())
    })?;

    debug!(entry_id = %id, "unstarred restaurant");
    counter!("starred_api_requests_total", "op" => "delete", "result" => "ok").increment(1);
    Ok(StatusCode::OK)
}

async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateCommentRequest>,
) -> Result<StatusCode, ProblemResponse> {
    state
        .starred()
        .set_comment(&id, request.new_comment)
        .map_err(|err| {
            counter!("starred_api_requests_total", "op" => "update_comment", "result" => "not_found")
                .increment(1);
            ProblemResponse::not_found("starred_entry_not_found", err.to_string())
        })?;

    counter!("starred_api_requests_total", "op" => "update_comment", "result" => "ok")
        .increment(1);
    Ok(StatusCode::OK)
}
