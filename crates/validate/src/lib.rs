//! Attribute requirement evaluation for the reqattr library
//!
//! This crate provides [`require_attr`], the checker behind the whole
//! library, and the [`RequireAttr`] extension that makes it callable in
//! method position on any [`Attributes`](reqattr_api::Attributes) host.

mod require;

pub use require::{require_attr, RequireAttr};
