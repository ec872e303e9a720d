//! Alert system for displaying success and error messages to users.
//!
//! Alerts are the notification dialogs of the app: the server's message after a
//! change, validation errors, and the generic error shown whenever the ledger
//! API cannot be reached or answers with a failure.

use maud::{Markup, html};

use crate::{html::clear_element_script, page_update::ALERT_CONTAINER_ID};

/// An alert message, styled by whether it reports a success or an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    Success {
        message: String,
    },
    Error {
        message: String,
        details: String,
    },
    ErrorSimple {
        message: String,
    },
    /// An error with a list of reasons, one per line.
    ErrorList {
        message: String,
        errors: Vec<String>,
    },
}

impl Alert {
    /// The alert for any failure talking to the ledger API.
    pub fn something_went_wrong() -> Self {
        Alert::ErrorSimple {
            message: "Something went wrong".to_owned(),
        }
    }

    /// The alert for a form that failed validation.
    pub fn form_errors(errors: Vec<String>) -> Self {
        Alert::ErrorList {
            message: "Your form has errors".to_owned(),
            errors,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Alert::Error { .. } | Alert::ErrorSimple { .. } | Alert::ErrorList { .. }
        )
    }

    pub fn into_html(self) -> Markup {
        let class = if self.is_error() {
            "alert alert-error"
        } else {
            "alert alert-success"
        };
        let role = if self.is_error() { "alert" } else { "status" };

        let (message, details, errors) = match self {
            Alert::Error { message, details } => (message, Some(details), Vec::new()),
            Alert::Success { message } | Alert::ErrorSimple { message } => {
                (message, None, Vec::new())
            }
            Alert::ErrorList { message, errors } => (message, None, errors),
        };

        html! {
            div class=(class) role=(role)
            {
                div class="alert-body"
                {
                    p class="alert-message" { (message) }

                    @if let Some(details) = details {
                        p class="alert-details" { (details) }
                    }

                    @if !errors.is_empty() {
                        ul class="alert-errors"
                        {
                            @for error in &errors {
                                li { (error) }
                            }
                        }
                    }
                }

                button
                    type="button"
                    class="alert-dismiss"
                    aria-label="Dismiss"
                    onclick=(clear_element_script(ALERT_CONTAINER_ID))
                {
                    "Okay"
                }
            }
        }
    }
}
