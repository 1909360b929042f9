//! Placeholder image retrieval for MockForge.
//!
//! Providers build image URLs; the downloader fetches them over HTTP
//! and writes the bytes to disk. The generation engine never calls
//! into this crate.

pub mod downloader;
pub mod error;
pub mod provider;
pub mod util;

pub use downloader::{DownloadResult, ImageDownloader};
pub use error::DownloadError;
pub use provider::{ImageProvider, LoremFlickr, Picsum, Unsplash, UrlList};
pub use util::{filename_from_url, format_size};
