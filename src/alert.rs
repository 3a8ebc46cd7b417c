//! Error messages that htmx swaps into the page's alert container.

use axum::response::{Html, IntoResponse, Response};
use maud::html;

/// A dismissible message shown to the user after a failed form submission.
///
/// Successful submissions redirect instead, so there is no success variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Error { message: String, details: String },
    ErrorSimple { message: String },
}

impl Alert {
    fn parts(&self) -> (&str, Option<&str>) {
        match self {
            Alert::Error { message, details } => (message, Some(details)),
            Alert::ErrorSimple { message } => (message, None),
        }
    }

    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Html<String> {
        let (message, details) = self.parts();

        let markup = html! {
            div
                class="p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 dark:bg-gray-800 dark:text-red-400"
                role="alert"
            {
                div class="flex items-start justify-between gap-4"
                {
                    div
                    {
                        p class="font-medium" { (message) }

                        @if let Some(details) = details.filter(|details| !details.is_empty()) {
                            p class="mt-1" { (details) }
                        }
                    }

                    button
                        type="button"
                        aria-label="Dismiss"
                        class="font-bold"
                        onclick="this.closest('[role]').remove()"
                    {
                        "×"
                    }
                }
            }
        };

        Html(markup.into_string())
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}
