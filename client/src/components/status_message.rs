//! Success/failure banner shown at the top of the CRUD dialogs.

#[cfg(test)]
#[path = "status_message_test.rs"]
mod status_message_test;

use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Success(String),
    Error(String),
}

impl Status {
    /// Server message on success, `failure` otherwise.
    pub fn from_result(result: Result<String, String>, failure: &str) -> Self {
        match result {
            Ok(message) => Self::Success(message),
            Err(_) => Self::Error(failure.to_owned()),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Renders nothing until a status is set; clicking the banner dismisses it.
#[component]
pub fn StatusMessage(status: RwSignal<Option<Status>>) -> impl IntoView {
    move || {
        status.get().map(|s| {
            let class = if s.is_error() { "status status--error" } else { "status status--success" };
            view! {
                <div class=class role="alert" on:click=move |_| status.set(None)>
                    {s.text().to_owned()}
                </div>
            }
        })
    }
}
