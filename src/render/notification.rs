//! Generic dismissible error notification
//!
//! Used for failures that escape every local handler.

use html_escape::encode_text;
use std::fmt;

/// A floating error message with a dismiss action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub details: Option<String>,
}

impl Notification {
    pub fn error(message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            message: message.into(),
            details,
        }
    }

    /// Markup for the notification
    pub fn render(&self) -> String {
        let details = self
            .details
            .as_deref()
            .map(|d| format!("<br><small>{}</small>", encode_text(d)))
            .unwrap_or_default();

        format!(
            r#"<div class="notification error" role="alert"><div class="notification-content"><i class="fas fa-exclamation-circle"></i><span><strong>Error:</strong> {message}{details}</span><button class="notification-dismiss" data-action="dismiss">Dismiss</button></div></div>"#,
            message = encode_text(&self.message),
            details = details,
        )
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}
