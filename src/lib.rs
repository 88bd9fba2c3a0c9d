pub mod api;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod content;
pub mod data_models;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod format;
pub mod intent;
pub mod query_builder;
pub mod service;
pub mod text;
pub mod urls;

pub use error::{DocsError, ErrorKind};
pub use service::DocsService;
