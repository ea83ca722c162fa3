//! ytconv-upstream – talks to the conversion service.
//!
//! The service exposes four JSON-over-HTTPS endpoints. [`UpstreamClient`] is
//! the `reqwest` implementation of [`ConversionBackend`]; [`Converter`]
//! sequences the calls for one request:
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), ytconv_upstream::UpstreamError> {
//! use std::sync::Arc;
//! use ytconv_types::ConversionRequest;
//! use ytconv_upstream::{Converter, UpstreamClient, UpstreamConfig};
//!
//! let client = UpstreamClient::new(UpstreamConfig::default().set_token("1234"))?;
//! let converter = Converter::new(Arc::new(client));
//! let req = ConversionRequest::parse(Some("https://youtu.be/dQw4w9WgXcQ"), None, None)
//!     .expect("valid request");
//! let result = converter.convert(&req).await?;
//! println!("{}", result.download_url);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod wire;

pub use backend::ConversionBackend;
pub use client::UpstreamClient;
pub use config::UpstreamConfig;
pub use error::UpstreamError;
pub use pipeline::{ConversionResult, Converter};
