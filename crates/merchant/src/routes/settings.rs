//! Merchant settings routes.
//!
//! The form page loads a snapshot of the current settings into an editable
//! draft; saving replays the submitted fields through the draft's
//! transitions, so the email invariant is enforced before anything is sent
//! to the API.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use craigmont_core::Email;

use crate::error::Result;
use crate::filters;
use crate::settings_form::SettingsForm;
use crate::state::AppState;

// =============================================================================
// Templates
// =============================================================================

/// Settings page template.
#[derive(Template, WebTemplate)]
#[template(path = "settings/index.html")]
pub struct SettingsTemplate {
    pub current_path: &'static str,
    pub form: SettingsForm,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

// =============================================================================
// Query Parameters
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct SettingsQueryParams {
    pub success: Option<String>,
}

// =============================================================================
// Form Submission
// =============================================================================

/// Fields as the browser posts them; checkboxes are present only when
/// checked.
#[derive(Debug, Deserialize)]
pub struct SettingsFormSubmission {
    #[serde(default)]
    pub auto_publish: Option<String>,
    #[serde(default)]
    pub email_notifications: Option<String>,
    #[serde(default)]
    pub email: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Render the settings form from the current settings.
///
/// GET /settings
#[instrument(skip(state))]
pub async fn settings_page(
    State(state): State<AppState>,
    Query(params): Query<SettingsQueryParams>,
) -> Result<SettingsTemplate> {
    let snapshot = state.reviews().settings().await?;
    let form = SettingsForm::load(snapshot);

    // Map success codes to banner copy
    let success_message = params.success.map(|s| match s.as_str() {
        "saved" => "Your settings have been saved.".to_owned(),
        _ => s,
    });

    Ok(SettingsTemplate {
        current_path: "/settings",
        form,
        success_message,
        error_message: None,
    })
}

/// Validate and save the settings.
///
/// Replays the submitted fields through the form draft; if the draft ends
/// in an error state, the form re-renders with the inline message and no
/// mutation is sent. A non-empty email is additionally format-checked
/// before submitting.
///
/// POST /settings
#[instrument(skip(state))]
pub async fn update_settings(
    State(state): State<AppState>,
    axum::Form(submitted): axum::Form<SettingsFormSubmission>,
) -> Result<Response> {
    let snapshot = state.reviews().settings().await?;
    let mut form = SettingsForm::load(snapshot);

    form.set_auto_publish(submitted.auto_publish.is_some());
    form.set_email_notifications(submitted.email_notifications.is_some());
    form.set_email(submitted.email.trim());

    let Some(payload) = form.submit() else {
        // Invariant violation: re-render with the inline field error,
        // nothing goes over the network.
        return Ok(SettingsTemplate {
            current_path: "/settings",
            form,
            success_message: None,
            error_message: None,
        }
        .into_response());
    };

    if !payload.email.is_empty() && Email::parse(&payload.email).is_err() {
        return Ok(SettingsTemplate {
            current_path: "/settings",
            form,
            success_message: None,
            error_message: Some("Enter a valid email address.".to_owned()),
        }
        .into_response());
    }

    state.reviews().update_settings(payload).await?;

    Ok(Redirect::to("/settings?success=saved").into_response())
}
