//! # tanager-core
//!
//! Core types and error types for Tanager.
//!
//! This crate provides the foundational types shared across all Tanager crates:
//! - Entity structs for experiment outputs (projects, per-generation statistics,
//!   population fitness samples, navigation entries)
//! - Derived chart series (mean with upper/lower bounds, normal density curves)
//! - Cross-cutting error types

pub mod entities;
pub mod errors;

pub use errors::CoreError;
