//! Form submission: normalize values, require confirmation for empty text
//! fields, render title and body, and build the page-creation URL.

use serde::Serialize;

use crate::form::FormSchema;
use crate::source::TemplateSource;
use crate::template::{extract_variables, variables_in, Template, TemplateError, Values};
use crate::url_model;

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Some text fields are empty and the caller has not confirmed.
    NeedsConfirmation { empty_fields: Vec<String> },
    Ready(RenderedPage),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPage {
    pub title: String,
    pub body: String,
    pub url: String,
}

/// Prepares the schema and default values for a template source.
pub fn schema_for(source: &TemplateSource, boolean_prefix: &str) -> Result<FormSchema, TemplateError> {
    let names = extract_variables(&[source.title.as_str(), source.contents.as_str()])?;
    Ok(FormSchema::from_variables(&names, boolean_prefix))
}

/// Runs one submission.
///
/// `values` is normalized in place against the template's schema before the
/// empty-field check, so toggles never reach rendering as text.
pub fn submit(
    source: &TemplateSource,
    values: &mut Values,
    boolean_prefix: &str,
    remote_base_url: &str,
    confirmed: bool,
) -> Result<SubmitOutcome, TemplateError> {
    let title_tmpl = Template::parse(&source.title)?;
    let body_tmpl = Template::parse(&source.contents)?;

    let names = variables_in(&[&title_tmpl, &body_tmpl]);
    let schema = FormSchema::from_variables(&names, boolean_prefix);
    schema.normalize(values);

    let empty_fields = schema.empty_text_fields(values);
    if !empty_fields.is_empty() && !confirmed {
        tracing::debug!(?empty_fields, "submission needs confirmation");
        return Ok(SubmitOutcome::NeedsConfirmation { empty_fields });
    }

    let title = title_tmpl.render(values);
    let body = body_tmpl.render(values);
    let url = url_model::new_page_url(remote_base_url, &source.project_name, &title, &body);
    tracing::info!(project = %source.project_name, %title, "rendered page");

    Ok(SubmitOutcome::Ready(RenderedPage { title, body, url }))
}
