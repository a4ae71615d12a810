//! JSON API over the session's form: per-field reads/updates and submit.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::form::{Field, FieldValue, FormError};
use crate::services::form_actions;
use crate::services::session::{read_form, with_session};
use crate::state::AppState;
use crate::submission::{SnapshotRow, Table, snapshot, to_table};

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FieldBody {
    pub value: FieldValue,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub unchanged: bool,
    #[serde(flatten)]
    pub table: Table,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorBody>)>;

pub(crate) fn form_error_to_status(err: &FormError) -> StatusCode {
    if err.is_lookup() { StatusCode::NOT_FOUND } else { StatusCode::UNPROCESSABLE_ENTITY }
}

fn api_error(err: &FormError) -> (StatusCode, Json<ErrorBody>) {
    (form_error_to_status(err), Json(ErrorBody { code: err.error_code(), message: err.to_string() }))
}

/// `GET /api/form` — every record in catalog order.
pub async fn list_records(State(state): State<AppState>, jar: CookieJar) -> Response {
    let rows = read_form(&state, &jar, |form| snapshot(form).rows().to_vec()).await;
    Json::<Vec<SnapshotRow>>(rows).into_response()
}

/// `GET /api/form/:instrument/:field` — read one field.
pub async fn get_field(
    State(state): State<AppState>,
    jar: CookieJar,
    Path((instrument, field)): Path<(String, String)>,
) -> Response {
    let value = match Field::parse(&field) {
        Ok(field) => read_form(&state, &jar, |form| form.get(&instrument, field)).await,
        Err(e) => Err(e),
    };
    match value {
        Ok(value) => Json(FieldBody { value }).into_response(),
        Err(e) => api_error(&e).into_response(),
    }
}

/// `PUT /api/form/:instrument/:field` — validate and overwrite one field.
pub async fn set_field(
    State(state): State<AppState>,
    jar: CookieJar,
    Path((instrument, field)): Path<(String, String)>,
    Json(body): Json<FieldBody>,
) -> Response {
    let (jar, id, result): (_, _, ApiResult<FieldBody>) = with_session(&state, jar, |session| {
        let field = Field::parse(&field).map_err(|e| api_error(&e))?;
        session.form.set(&instrument, field, body.value).map_err(|e| api_error(&e))?;
        let value = session.form.get(&instrument, field).map_err(|e| api_error(&e))?;
        Ok(Json(FieldBody { value }))
    })
    .await;

    if let Err((status, Json(err))) = &result {
        tracing::warn!(session = %id, %instrument, %field, %status, error = %err.message, "field update rejected");
    }
    (jar, result).into_response()
}

/// `POST /api/submit` — snapshot the form and return the summary table.
pub async fn submit(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, _, outcome) = with_session(&state, jar, form_actions::submit).await;
    let response = SubmitResponse { unchanged: outcome.unchanged, table: to_table(&outcome.snapshot) };
    (jar, Json(response)).into_response()
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
