//! Route handlers.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use pagetmpl_core::form::FieldKind;
use pagetmpl_core::source::{self, PageRef, TemplateSource};
use pagetmpl_core::submit::{self, SubmitOutcome};
use pagetmpl_core::template::{Value, Values};
use serde::Deserialize;
use serde_json::json;

use super::page::{self, FormView};
use super::AppState;

/// Prefix of form fields that carry placeholder values.
pub(super) const VAR_PREFIX: &str = "v:";

#[derive(Debug, Deserialize)]
pub struct ProxyParams {
    #[serde(rename = "projectName")]
    project_name: Option<String>,
    #[serde(rename = "pageTitle")]
    page_title: Option<String>,
}

/// `GET /api/scrapbox?projectName=..&pageTitle=..`
///
/// 200 with `{title, contents}`; 404 with an empty body on any failure.
pub async fn api_page_text(
    State(state): State<AppState>,
    Query(params): Query<ProxyParams>,
) -> Response {
    let (Some(project), Some(title)) = (params.project_name, params.page_title) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let page = PageRef::new(project, title);
    let pages = state.pages.clone();
    let fetched = tokio::task::spawn_blocking(move || source::fetch_page(pages.as_ref(), &page)).await;
    match fetched {
        Ok(Ok(text)) => Json(text).into_response(),
        Ok(Err(err)) => {
            tracing::warn!("page text fetch failed: {}", err);
            StatusCode::NOT_FOUND.into_response()
        }
        Err(err) => {
            tracing::error!("page text fetch task failed: {}", err);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IndexParams {
    template: Option<String>,
}

/// `GET /` and `GET /?template=<url>`
///
/// With a template URL that cannot be loaded, redirects to `/`.
pub async fn index(State(state): State<AppState>, Query(params): Query<IndexParams>) -> Response {
    let Some(url) = params.template else {
        return Html(page::render_form(&FormView::empty())).into_response();
    };

    let pages = state.pages.clone();
    let target = url.clone();
    let loaded =
        tokio::task::spawn_blocking(move || source::load_template(pages.as_ref(), &target)).await;
    let src = match loaded {
        Ok(Ok(src)) => src,
        Ok(Err(err)) => {
            tracing::warn!(%url, "template load failed: {}", err);
            return Redirect::temporary("/").into_response();
        }
        Err(err) => {
            tracing::error!("template load task failed: {}", err);
            return Redirect::temporary("/").into_response();
        }
    };

    let view = match submit::schema_for(&src, &state.boolean_prefix) {
        Ok(schema) => FormView::loaded(src, schema),
        Err(err) => FormView::broken(src, err.to_string()),
    };
    Html(page::render_form(&view)).into_response()
}

/// Fields posted by the form page.
#[derive(Debug, Default)]
pub(super) struct Submission {
    pub source: TemplateSource,
    pub raw_values: Vec<(String, String)>,
    pub confirmed: bool,
}

impl Submission {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut sub = Submission::default();
        for (key, value) in pairs {
            match key.as_str() {
                "template_url" => sub.source.url = value,
                "title" => sub.source.title = unix_newlines(value),
                "contents" => sub.source.contents = unix_newlines(value),
                "project_name" => sub.source.project_name = value,
                "confirmed" => sub.confirmed = value == "1" || value == "true",
                _ => {
                    if let Some(name) = key.strip_prefix(VAR_PREFIX) {
                        sub.raw_values.push((name.to_string(), value));
                    }
                }
            }
        }
        sub
    }

    /// Typed values: checkbox fields become flags, everything else text.
    /// Unchecked boxes are absent here and default to false when normalized.
    pub fn values(&self, boolean_prefix: &str) -> Values {
        self.raw_values
            .iter()
            .map(|(name, raw)| {
                let value = match FieldKind::classify(name, boolean_prefix) {
                    FieldKind::Toggle => Value::Flag(raw == "true" || raw == "on"),
                    FieldKind::Text => Value::Text(raw.clone()),
                };
                (name.clone(), value)
            })
            .collect()
    }
}

/// Browsers post form values with CRLF line breaks; page text uses LF.
fn unix_newlines(value: String) -> String {
    if value.contains('\r') {
        value.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        value
    }
}

/// `POST /create`
///
/// Asks for confirmation when text fields are empty, otherwise redirects to
/// the page-creation URL.
pub async fn create(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let sub = Submission::from_pairs(pairs);
    let mut values = sub.values(&state.boolean_prefix);

    let outcome = submit::submit(
        &sub.source,
        &mut values,
        &state.boolean_prefix,
        &state.remote_base_url,
        sub.confirmed,
    );
    match outcome {
        Ok(SubmitOutcome::Ready(rendered)) => {
            tracing::info!(url = %rendered.url, "redirecting to new page");
            Redirect::to(&rendered.url).into_response()
        }
        Ok(SubmitOutcome::NeedsConfirmation { empty_fields }) => {
            Html(page::render_confirm(&sub, &empty_fields)).into_response()
        }
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Html(page::render_error(&format!("Template error: {err}"))),
        )
            .into_response(),
    }
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
