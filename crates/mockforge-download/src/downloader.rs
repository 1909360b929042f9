use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info};

use crate::error::DownloadError;
use crate::provider::ImageProvider;
use crate::util::filename_from_url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One downloaded image.
#[derive(Debug, Clone)]
pub struct DownloadResult {
    pub url: String,
    pub path: PathBuf,
    pub bytes: u64,
}

/// HTTP image downloader over a shared client.
#[derive(Debug, Clone)]
pub struct ImageDownloader {
    client: reqwest::Client,
}

impl Default for ImageDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageDownloader {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client }
    }

    /// Fetch `count` images from the provider into `out_dir`.
    ///
    /// The provider cap is checked before any request is made. Each
    /// image is fetched, status-checked, and written before the next
    /// request starts.
    pub async fn download(
        &self,
        provider: &dyn ImageProvider,
        count: u32,
        out_dir: &Path,
    ) -> Result<Vec<DownloadResult>, DownloadError> {
        if let Some(max) = provider.max_count()
            && count > max
        {
            return Err(DownloadError::TooMany {
                requested: count,
                max,
            });
        }

        std::fs::create_dir_all(out_dir)?;

        let mut results = Vec::with_capacity(count as usize);
        for index in 0..count {
            let url = provider.image_url(index);
            let response = self.client.get(&url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(DownloadError::Status { url, status });
            }

            let bytes = response.bytes().await?;
            if bytes.is_empty() {
                return Err(DownloadError::EmptyBody(url));
            }

            let path = out_dir.join(target_filename(provider.name(), &url, index));
            std::fs::write(&path, &bytes)?;
            debug!(url = %url, path = %path.display(), bytes = bytes.len(), "image downloaded");

            results.push(DownloadResult {
                url,
                path,
                bytes: bytes.len() as u64,
            });
        }

        info!(
            provider = provider.name(),
            images = results.len(),
            "download completed"
        );
        Ok(results)
    }
}

/// Prefer the basename from the URL path; placeholder services without
/// a real filename fall back to an indexed name.
fn target_filename(provider: &str, url: &str, index: u32) -> String {
    match filename_from_url(url) {
        Some(name) => format!("{:03}_{name}", index + 1),
        None => format!("{provider}_{:03}.jpg", index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Picsum;

    #[tokio::test]
    async fn count_over_provider_cap_fails_before_any_request() {
        let downloader = ImageDownloader::new();
        let dir = tempfile::tempdir().expect("tempdir");
        let err = downloader
            .download(&Picsum::new(200, 200), 21, dir.path())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DownloadError::TooMany {
                requested: 21,
                max: 20
            }
        ));
    }

    #[test]
    fn filenames_fall_back_to_indexed_names() {
        assert_eq!(
            target_filename("picsum", "https://picsum.photos/640/480?random=1", 0),
            "picsum_001.jpg"
        );
        assert_eq!(
            target_filename("urls", "https://example.com/cat.jpg", 2),
            "003_cat.jpg"
        );
    }
}
