//! HTTP serving.
//!
//! Requests are handled one at a time on the calling thread. [`handle`] holds
//! all routing so it can be exercised without opening a socket.

use std::time::Instant;

use tanager_config::TanagerConfig;
use tiny_http::{Header, Method, Response, Server};

use crate::error::WebError;
use crate::page::{render_navigation, render_page};
use crate::router::Endpoint;

const HTML: &str = "text/html; charset=utf-8";
const TEXT: &str = "text/plain; charset=utf-8";

/// Status, content type and body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpReply {
    fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: HTML,
            body,
        }
    }

    fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: TEXT,
            body: body.to_string(),
        }
    }
}

/// Route one request and build its reply.
#[must_use]
pub fn handle(config: &TanagerConfig, method: &Method, url: &str) -> HttpReply {
    if *method != Method::Get {
        return HttpReply::text(405, "Method Not Allowed");
    }

    let rendered = match Endpoint::from_url(url) {
        Endpoint::Favicon => return HttpReply::text(204, ""),
        Endpoint::Navigation { filter } => render_navigation(config, filter.as_deref()),
        Endpoint::Page { route, generation } => {
            tracing::debug!(?route, ?generation, "rendering page");
            render_page(config, &route, generation)
        }
    };

    match rendered {
        Ok(body) => HttpReply::html(body),
        Err(error) => {
            tracing::error!(%error, url, "failed to render response");
            HttpReply::text(500, "Internal Server Error")
        }
    }
}

/// Bind `config.server` and serve until the process is stopped.
///
/// # Errors
///
/// Returns `WebError::Bind` if the address cannot be bound.
pub fn serve(config: &TanagerConfig) -> Result<(), WebError> {
    let addr = config.server.bind_addr();
    let server = Server::http(&addr).map_err(|e| WebError::Bind {
        addr: addr.clone(),
        reason: e.to_string(),
    })?;

    tracing::info!(
        url = %format!("http://{addr}/"),
        root = %config.data.root.display(),
        debug = config.server.debug,
        "Tanager dashboard listening"
    );

    for request in server.incoming_requests() {
        let started = Instant::now();
        let reply = handle(config, request.method(), request.url());
        tracing::debug!(
            method = %request.method(),
            url = request.url(),
            status = reply.status,
            elapsed_ms = started.elapsed().as_millis(),
            "handled request"
        );

        let mut response = Response::from_string(reply.body).with_status_code(reply.status);
        if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes())
        {
            response = response.with_header(header);
        }
        if let Err(error) = request.respond(response) {
            tracing::warn!(%error, "failed to send response");
        }
    }
    Ok(())
}
