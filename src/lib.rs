// ABOUTME: Public library API for stackmark Markdown publishing
// ABOUTME: Re-exports the converter, models, and publishing client modules

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod markdown;
pub mod model;
pub mod publish;
pub mod storage;

pub use error::{Error, Result};
pub use markdown::{convert, Conversion, Document, Frontmatter};
