//! Settings form draft state.
//!
//! The form loads a snapshot of the current settings once per session and
//! owns its edits from then on; external changes made while the form is open
//! are intentionally not reflected into in-progress edits - the last local
//! edit wins on submit. Field transitions maintain a single derived error
//! flag coupling the notification toggle to the email field, and submission
//! is suppressed while that flag is set.

use crate::api::types::NotificationSettings;

/// Inline error shown when notifications are enabled without an email.
pub const EMAIL_REQUIRED_MESSAGE: &str = "Enter an email to get review notifications.";

/// Editable draft of the merchant settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    auto_publish: bool,
    email_notifications: bool,
    email: String,
    email_error: Option<&'static str>,
}

impl SettingsForm {
    /// Load a snapshot of the current settings into an editable draft.
    ///
    /// The error flag starts clear regardless of the snapshot's contents;
    /// it is derived only from edits.
    #[must_use]
    pub fn load(snapshot: NotificationSettings) -> Self {
        Self {
            auto_publish: snapshot.auto_publish,
            email_notifications: snapshot.email_notifications,
            email: snapshot.email,
            email_error: None,
        }
    }

    /// Set the auto-publish toggle. No cross-field effect.
    pub const fn set_auto_publish(&mut self, value: bool) {
        self.auto_publish = value;
    }

    /// Set the notification toggle.
    ///
    /// Enabling notifications while the email is empty raises the email
    /// error; any other combination clears it.
    pub fn set_email_notifications(&mut self, value: bool) {
        self.email_notifications = value;
        self.derive_email_error();
    }

    /// Edit the email field.
    ///
    /// Clearing the email while notifications are enabled raises the email
    /// error; a non-empty value clears it.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.derive_email_error();
    }

    fn derive_email_error(&mut self) {
        self.email_error = if self.email_notifications && self.email.is_empty() {
            Some(EMAIL_REQUIRED_MESSAGE)
        } else {
            None
        };
    }

    #[must_use]
    pub const fn auto_publish(&self) -> bool {
        self.auto_publish
    }

    #[must_use]
    pub const fn email_notifications(&self) -> bool {
        self.email_notifications
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn email_error(&self) -> Option<&'static str> {
        self.email_error
    }

    /// Yield the values to send with the update mutation.
    ///
    /// Returns `None` while the email error is set; no request may be sent
    /// in that state. The error flag itself is never part of the payload.
    #[must_use]
    pub fn submit(&self) -> Option<NotificationSettings> {
        if self.email_error.is_some() {
            return None;
        }
        Some(NotificationSettings {
            auto_publish: self.auto_publish,
            email_notifications: self.email_notifications,
            email: self.email.clone(),
        })
    }
}
