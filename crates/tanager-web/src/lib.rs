//! # tanager-web
//!
//! Browser-facing half of the dashboard.
//!
//! - [`nav`]: sidebar entries built from the project list
//! - [`router`]: URL path and query to page/endpoint
//! - [`slider`]: generation slider range and tick spacing
//! - [`page`]: HTML pages with inline SVG charts
//! - [`server`]: request handling and the `tiny_http` serve loop
//!
//! Each request re-reads the filesystem; the only shared value is the
//! immutable [`tanager_config::TanagerConfig`] passed into every handler.

pub mod error;
pub mod nav;
pub mod page;
pub mod router;
pub mod server;
pub mod slider;

pub use error::WebError;
pub use server::{HttpReply, handle, serve};
