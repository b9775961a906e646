//! Contact form submission
//!
//! Serializes the form fields plus a submission timestamp and posts them once
//! to the form-processing endpoint. The transport is opaque: the only failure
//! the form can observe is a transport-level one (offline, blocked request).

use std::cell::Cell;
use std::future::Future;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use super::config::{ContactConfig, PayloadEncoding};
use super::error::SiteError;
use super::view::{PageView, ViewNode};

/// Field appended to every submission
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// ISO-8601 UTC timestamp with millisecond precision
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Field values of one submission, in form order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn from_fields(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.fields
            .push((TIMESTAMP_FIELD.to_string(), iso_timestamp(at)));
        self
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Last value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// JSON object of the fields; a repeated name keeps its last value
    pub fn to_json(&self) -> Result<String, SiteError> {
        let mut object = Map::new();
        for (key, value) in &self.fields {
            object.insert(key.clone(), Value::String(value.clone()));
        }
        Ok(serde_json::to_string(&Value::Object(object))?)
    }

    pub fn to_urlencoded(&self) -> String {
        self.fields
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn encode(&self, encoding: PayloadEncoding) -> Result<EncodedBody, SiteError> {
        let body = match encoding {
            PayloadEncoding::Json => self.to_json()?,
            PayloadEncoding::UrlEncoded => self.to_urlencoded(),
        };
        Ok(EncodedBody {
            content_type: encoding.content_type(),
            body,
        })
    }
}

/// Request body ready to send
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedBody {
    pub content_type: &'static str,
    pub body: String,
}

/// Outbound POST to the form endpoint.
///
/// Implementations must not inspect the response: `Ok` only means the
/// request left without a transport error.
pub trait Transport {
    fn send(
        &self,
        endpoint: &str,
        body: &EncodedBody,
    ) -> impl Future<Output = Result<(), SiteError>>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

/// Contact form controller
pub struct ContactForm<N: ViewNode, T: Transport> {
    form: N,
    submit_button: N,
    message: Option<N>,
    config: ContactConfig,
    transport: T,
    state: Cell<SubmitState>,
}

impl<N: ViewNode, T: Transport> ContactForm<N, T> {
    /// `Ok(None)` when the page has no contact form.
    ///
    /// A form without a submit button cannot be driven and is reported as
    /// an error.
    pub fn bind<V: PageView<Node = N>>(
        view: &V,
        config: &ContactConfig,
        transport: T,
    ) -> Result<Option<Self>, SiteError> {
        let Some(form) = view.by_id(config.form_id) else {
            return Ok(None);
        };
        let submit_button = form
            .find(config.submit_selector)
            .ok_or_else(|| SiteError::missing(config.submit_selector))?;

        Ok(Some(Self {
            form,
            submit_button,
            message: view.by_id(config.message_id),
            config: config.clone(),
            transport,
            state: Cell::new(SubmitState::Idle),
        }))
    }

    pub fn form(&self) -> &N {
        &self.form
    }

    pub fn state(&self) -> SubmitState {
        self.state.get()
    }

    /// Run one submission, returning `None` if one is already in flight
    pub async fn submit(&self, submitted_at: DateTime<Utc>) -> Option<SubmitOutcome> {
        if self.state.get() == SubmitState::Submitting {
            leptos::logging::warn!("Contact form already submitting, ignoring submit");
            return None;
        }
        self.state.set(SubmitState::Submitting);

        // Label as of this submit, restored afterwards
        let original_label = self.submit_button.text();
        self.submit_button.set_disabled(true);
        self.submit_button.set_text(self.config.sending_label);

        let payload = FormPayload::from_fields(self.form.form_fields()).with_timestamp(submitted_at);
        let result = match payload.encode(self.config.encoding) {
            Ok(body) => self.transport.send(&self.config.endpoint, &body).await,
            Err(err) => Err(err),
        };

        let outcome = match result {
            Ok(()) => {
                self.show_message(self.config.success_class, self.config.success_text);
                self.form.reset_form();
                SubmitOutcome::Sent
            }
            Err(err) => {
                leptos::logging::error!("Contact form submission failed: {}", err);
                self.show_message(self.config.failure_class, self.config.failure_text);
                SubmitOutcome::Failed
            }
        };

        self.submit_button.set_disabled(false);
        self.submit_button.set_text(&original_label);
        if let Some(message) = &self.message {
            message.scroll_into_view();
        }

        self.state.set(SubmitState::Idle);
        Some(outcome)
    }

    fn show_message(&self, class_name: &str, text: &str) {
        if let Some(message) = &self.message {
            message.set_class_name(class_name);
            message.set_text(text);
            message.set_visible(true);
        }
    }
}
