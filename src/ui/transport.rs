//! Opaque `fetch` transport for the contact form

use std::future::Future;

use gloo_net::http::Request;
use web_sys::RequestMode;

use crate::core::contact::{EncodedBody, Transport};
use crate::core::error::SiteError;

/// POSTs with `mode: "no-cors"`.
///
/// The response is opaque, so only network-level failures surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    fn send(
        &self,
        endpoint: &str,
        body: &EncodedBody,
    ) -> impl Future<Output = Result<(), SiteError>> {
        let request = Request::post(endpoint)
            .mode(RequestMode::NoCors)
            .header("Content-Type", body.content_type)
            .body(body.body.as_str());

        async move {
            let request = request.map_err(SiteError::transport)?;
            request.send().await.map_err(SiteError::transport)?;
            Ok(())
        }
    }
}
