//! Notification messages for operation feedback.

use std::fmt;

/// Wrapper type for displaying success and error notifications.
///
/// This provides consistent formatting for the short messages shown after an
/// action completes or fails, such as a downloaded plan or a failed request.
pub struct Notification {
    pub message: String,
    pub success: bool,
}

impl Notification {
    /// Create a new success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create a new error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}
