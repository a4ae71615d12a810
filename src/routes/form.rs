//! HTML form routes and the CSV download.

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::info;

use crate::render::{SubmissionView, render_page};
use crate::services::form_actions::{self, apply_form_submission};
use crate::services::session::{with_existing_session, with_session};
use crate::state::AppState;
use crate::submission::{CSV_FILE_NAME, CSV_MIME, to_csv, to_table};

/// `GET /` — render the form with the session's current values.
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, _, html) = with_session(&state, jar, |session| render_page(&session.form, None)).await;
    (jar, Html(html)).into_response()
}

/// `POST /submit` — apply every posted field, snapshot, and render the table.
pub async fn submit_form(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let (jar, id, (html, rejected, unchanged)) = with_session(&state, jar, |session| {
        let rejections = apply_form_submission(&mut session.form, &pairs);
        let outcome = form_actions::submit(session);
        let table = to_table(&outcome.snapshot);
        let view = SubmissionView { table: &table, rejections: &rejections, unchanged: outcome.unchanged };
        (render_page(&session.form, Some(&view)), rejections.len(), outcome.unchanged)
    })
    .await;

    info!(session = %id, fields = pairs.len(), rejected, unchanged, "form submitted");
    (jar, Html(html)).into_response()
}

/// `GET /audio_data.csv` — download the most recent submission. Visitors
/// without a session have nothing to download and do not get one.
pub async fn download_csv(State(state): State<AppState>, jar: CookieJar) -> Response {
    let csv = with_existing_session(&state, &jar, |session| session.last_submission.as_ref().map(to_csv))
        .await
        .flatten();

    let Some(csv) = csv else {
        return (StatusCode::NOT_FOUND, "nothing submitted yet").into_response();
    };

    (
        [
            (CONTENT_TYPE, CSV_MIME.to_owned()),
            (CONTENT_DISPOSITION, format!("attachment; filename=\"{CSV_FILE_NAME}\"")),
        ],
        csv,
    )
        .into_response()
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
