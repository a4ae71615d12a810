//! Server-rendered HTML for the single-page form.
//!
//! The page has one row per instrument with five inputs, one submit button,
//! and, after a submit, the summary table plus a CSV download link. Markup is
//! built from Leptos components and rendered to a string on the server; there
//! is no client bundle and no hydration.

use leptos::prelude::*;

use crate::catalog::{Instrument, MAX_BPM, MIN_BPM, MusicalKey, ProductionStatus};
use crate::form::{Field, FormState, TrackRecord};
use crate::services::form_actions::{FieldRejection, widget_name};
use crate::submission::{CSV_FILE_NAME, Table, TableRow};

pub const PAGE_TITLE: &str = "Audio Agenda";

/// Page-only column after the exported ones.
pub const NOTES_COLUMN: &str = "Notes";

/// What the page shows below the form after a submit.
#[derive(Debug, Clone)]
pub struct SubmissionView<'a> {
    pub table: &'a Table,
    pub rejections: &'a [FieldRejection],
    pub unchanged: bool,
}

#[must_use]
pub fn render_page(form: &FormState, submission: Option<&SubmissionView<'_>>) -> String {
    Owner::new().with(|| page(form, submission))
}

fn page(form: &FormState, submission: Option<&SubmissionView<'_>>) -> String {
    let rows = Instrument::ALL
        .into_iter()
        .map(|instrument| view! { <TrackRow instrument record={form.record(instrument).clone()}/> })
        .collect_view();
    let summary = submission.map(|submitted| {
        view! {
            <Summary
                table={submitted.table.clone()}
                rejections={submitted.rejections.to_vec()}
                unchanged={submitted.unchanged}
            />
        }
    });

    let document = view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <title>{PAGE_TITLE}</title>
                <style>{STYLE}</style>
            </head>
            <body>
                <h1>{PAGE_TITLE}</h1>
                <form method="post" action="/submit" id="status_form">
                    {rows}
                    <button type="submit">"Submit"</button>
                </form>
                {summary}
            </body>
        </html>
    };
    document.to_html()
}

/// One instrument's five inputs.
#[component]
fn TrackRow(instrument: Instrument, record: TrackRecord) -> impl IntoView {
    view! {
        <div class="row">
            <label>
                "BPM"
                <input
                    type="number"
                    name={widget_name(instrument, Field::Bpm)}
                    min={MIN_BPM.to_string()}
                    max={MAX_BPM.to_string()}
                    step="1"
                    value={record.bpm.to_string()}
                />
            </label>
            <OptionSelect
                label="Key"
                name={widget_name(instrument, Field::Key)}
                options={MusicalKey::ALL.map(MusicalKey::as_str).to_vec()}
                selected={record.key.as_str()}
            />
            <label>
                {instrument.as_str()}
                <input type="text" name={widget_name(instrument, Field::Notes)} value={record.notes}/>
            </label>
            <OptionSelect
                label="Production Status"
                name={widget_name(instrument, Field::Status)}
                options={ProductionStatus::ALL.map(ProductionStatus::as_str).to_vec()}
                selected={record.status.as_str()}
            />
            <label>
                "Gear Used"
                <input type="text" name={widget_name(instrument, Field::Gear)} value={record.gear}/>
            </label>
        </div>
    }
}

#[component]
fn OptionSelect(
    label: &'static str,
    name: String,
    options: Vec<&'static str>,
    selected: &'static str,
) -> impl IntoView {
    view! {
        <label>
            {label}
            <select name=name>
                {options
                    .into_iter()
                    .map(|option| view! { <option value=option selected={option == selected}>{option}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Rejections, the no-change notice, the summary table, and the download link.
#[component]
fn Summary(table: Table, rejections: Vec<FieldRejection>, unchanged: bool) -> impl IntoView {
    let rejections = (!rejections.is_empty()).then(|| {
        view! {
            <ul class="rejections">
                {rejections
                    .into_iter()
                    .map(|r| view! { <li><code>{r.widget}</code>{format!(": {}", r.message)}</li> })
                    .collect_view()}
            </ul>
        }
    });
    let notice = unchanged.then(|| view! { <p class="notice">"No changes since the last submission."</p> });
    let [bpm, key, instrument, status, gear] = table.header;

    view! {
        {rejections}
        {notice}
        <table>
            <thead>
                <tr>
                    <th></th>
                    <th>{bpm}</th>
                    <th>{key}</th>
                    <th>{instrument}</th>
                    <th>{status}</th>
                    <th>{gear}</th>
                    <th>{NOTES_COLUMN}</th>
                </tr>
            </thead>
            <tbody>{table.rows.into_iter().map(|row| view! { <SummaryRow row/> }).collect_view()}</tbody>
        </table>
        <a href={format!("/{CSV_FILE_NAME}")} download=CSV_FILE_NAME>"Download data as CSV"</a>
    }
}

#[component]
fn SummaryRow(row: TableRow) -> impl IntoView {
    let [bpm, key, instrument, status, gear] = row.cells;
    view! {
        <tr>
            <th>{row.label.as_str()}</th>
            <td>{bpm}</td>
            <td>{key}</td>
            <td>{instrument}</td>
            <td>{status}</td>
            <td>{gear}</td>
            <td class="notes">{row.notes}</td>
        </tr>
    }
}

const STYLE: &str = "body{font-family:sans-serif;margin:2rem}\
.row{display:grid;grid-template-columns:2fr 2fr 3fr 3fr 3fr;gap:.5rem;margin-bottom:.5rem}\
label{display:flex;flex-direction:column;font-size:.8rem}\
table{border-collapse:collapse;margin-top:1.5rem}\
th,td{border:1px solid #ccc;padding:.25rem .5rem;text-align:left}\
.notice{color:#555}.rejections{color:#a00}.notes{color:#555;font-style:italic}";

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
