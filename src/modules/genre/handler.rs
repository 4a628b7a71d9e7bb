use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde_json::json;
use uuid::Uuid;

use super::dto::CreateGenreForm;
use super::service::{CreateOutcome, GenreService};
use crate::common::error::AppError;
use crate::state::AppState;

/// GET /genres
pub async fn genre_list(State(state): State<AppState>) -> Result<Response, AppError> {
    let genres = GenreService::list(state.store.as_ref()).await?;

    let context = json!({
        "title": "Genre List",
        "list_genres": genres
            .iter()
            .map(|g| json!({ "name": g.name, "url": g.url() }))
            .collect::<Vec<_>>(),
    });
    let page = state.renderer.render("genre_list", context)?;
    Ok(Html(page).into_response())
}

/// GET /genre/{id}
pub async fn genre_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    // A segment that does not parse as an id cannot name a genre.
    let id = Uuid::parse_str(&id).map_err(|_| AppError::not_found("Genre not found"))?;

    let (genre, books) = GenreService::detail(state.store.as_ref(), id).await?;

    let context = json!({
        "title": "Genre Detail",
        "genre": { "name": genre.name, "url": genre.url() },
        "genre_books": books
            .iter()
            .map(|b| json!({ "id": b.id, "title": b.title, "summary": b.summary }))
            .collect::<Vec<_>>(),
    });
    let page = state.renderer.render("genre_detail", context)?;
    Ok(Html(page).into_response())
}

/// GET /genre/create
pub async fn genre_create_get(State(state): State<AppState>) -> Result<Response, AppError> {
    let page = state
        .renderer
        .render("genre_form", json!({ "title": "Create Genre" }))?;
    Ok(Html(page).into_response())
}

/// POST /genre/create
pub async fn genre_create_post(
    State(state): State<AppState>,
    Form(form): Form<CreateGenreForm>,
) -> Result<Response, AppError> {
    match GenreService::create(state.store.as_ref(), &form.name).await? {
        CreateOutcome::Created(genre) | CreateOutcome::Existing(genre) => {
            Ok(Redirect::to(&genre.url()).into_response())
        }
        CreateOutcome::Rejected(rejection) => {
            let context = json!({
                "title": "Create Genre",
                "genre": { "name": rejection.candidate },
                "errors": rejection.errors,
            });
            let page = state.renderer.render("genre_form", context)?;
            Ok(Html(page).into_response())
        }
    }
}

/// GET /genre/{id}/delete
pub async fn genre_delete_get() -> &'static str {
    "NOT IMPLEMENTED: Genre delete GET"
}

/// POST /genre/{id}/delete
pub async fn genre_delete_post() -> &'static str {
    "NOT IMPLEMENTED: Genre delete POST"
}

/// GET /genre/{id}/update
pub async fn genre_update_get() -> &'static str {
    "NOT IMPLEMENTED: Genre update GET"
}

/// POST /genre/{id}/update
pub async fn genre_update_post() -> &'static str {
    "NOT IMPLEMENTED: Genre update POST"
}
