//! Core types and trait definitions for the docfold version store.
//!
//! This crate is free of HTTP and database dependencies. It defines the
//! document model, the [`store::VersionStore`] abstraction, and the
//! aggregation rule that collapses every stored version of a URL into one
//! [`document::AggregatedDocument`].

// Native `async fn` in traits; the trait spells out its `Send` bounds.
#![allow(async_fn_in_trait)]

pub mod aggregate;
pub mod document;
pub mod error;
pub mod processor;
pub mod store;

pub use error::{Error, Result};
pub use processor::Processor;
