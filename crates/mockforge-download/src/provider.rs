use std::path::Path;

use crate::error::DownloadError;

/// An image source that can produce a distinct URL per image index.
pub trait ImageProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Hard cap on images per run, when the provider imposes one.
    fn max_count(&self) -> Option<u32> {
        None
    }

    fn image_url(&self, index: u32) -> String;
}

/// Picsum Photos. The service throttles aggressively, so runs are
/// capped at 20 images.
#[derive(Debug, Clone)]
pub struct Picsum {
    pub width: u32,
    pub height: u32,
}

impl Picsum {
    pub const MAX_COUNT: u32 = 20;

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl ImageProvider for Picsum {
    fn name(&self) -> &'static str {
        "picsum"
    }

    fn max_count(&self) -> Option<u32> {
        Some(Self::MAX_COUNT)
    }

    fn image_url(&self, index: u32) -> String {
        format!(
            "https://picsum.photos/{}/{}?random={}",
            self.width,
            self.height,
            index + 1
        )
    }
}

/// LoremFlickr, optionally scoped to a category keyword.
#[derive(Debug, Clone)]
pub struct LoremFlickr {
    pub width: u32,
    pub height: u32,
    pub category: Option<String>,
}

impl LoremFlickr {
    pub fn new(width: u32, height: u32, category: Option<String>) -> Self {
        Self {
            width,
            height,
            category,
        }
    }
}

impl ImageProvider for LoremFlickr {
    fn name(&self) -> &'static str {
        "loremflickr"
    }

    fn image_url(&self, index: u32) -> String {
        let mut url = format!("https://loremflickr.com/{}/{}", self.width, self.height);
        if let Some(category) = &self.category {
            url.push('/');
            url.push_str(category);
        }
        // `lock` pins the image per index so retries stay stable.
        format!("{url}?lock={}", index + 1)
    }
}

/// Unsplash source endpoint, optionally scoped to a search query.
#[derive(Debug, Clone)]
pub struct Unsplash {
    pub width: u32,
    pub height: u32,
    pub query: Option<String>,
}

impl Unsplash {
    pub fn new(width: u32, height: u32, query: Option<String>) -> Self {
        Self {
            width,
            height,
            query,
        }
    }
}

impl ImageProvider for Unsplash {
    fn name(&self) -> &'static str {
        "unsplash"
    }

    fn image_url(&self, index: u32) -> String {
        let mut url = format!(
            "https://source.unsplash.com/random/{}x{}?sig={}",
            self.width,
            self.height,
            index + 1
        );
        if let Some(query) = &self.query {
            url.push('&');
            url.push_str(query);
        }
        url
    }
}

/// Plain URL list read from a text file, one URL per line. Blank lines
/// and `#` comments are skipped.
#[derive(Debug, Clone)]
pub struct UrlList {
    urls: Vec<String>,
}

impl UrlList {
    pub fn new(urls: Vec<String>) -> Self {
        Self { urls }
    }

    pub fn from_file(path: &Path) -> Result<Self, DownloadError> {
        let text = std::fs::read_to_string(path)?;
        let urls = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Ok(Self::new(urls))
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl ImageProvider for UrlList {
    fn name(&self) -> &'static str {
        "urls"
    }

    fn max_count(&self) -> Option<u32> {
        Some(self.urls.len() as u32)
    }

    fn image_url(&self, index: u32) -> String {
        self.urls
            .get(index as usize)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn picsum_urls_vary_by_index() {
        let provider = Picsum::new(640, 480);
        assert_eq!(
            provider.image_url(0),
            "https://picsum.photos/640/480?random=1"
        );
        assert_ne!(provider.image_url(0), provider.image_url(1));
        assert_eq!(provider.max_count(), Some(20));
    }

    #[test]
    fn loremflickr_includes_category_segment() {
        let provider = LoremFlickr::new(320, 240, Some("kitten".to_string()));
        assert_eq!(
            provider.image_url(2),
            "https://loremflickr.com/320/240/kitten?lock=3"
        );

        let plain = LoremFlickr::new(320, 240, None);
        assert_eq!(plain.image_url(0), "https://loremflickr.com/320/240?lock=1");
    }

    #[test]
    fn unsplash_appends_query() {
        let provider = Unsplash::new(800, 600, Some("forest".to_string()));
        assert_eq!(
            provider.image_url(0),
            "https://source.unsplash.com/random/800x600?sig=1&forest"
        );
    }

    #[test]
    fn url_list_skips_blank_and_comment_lines() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "https://example.com/a.jpg").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "https://example.com/b.png").unwrap();

        let provider = UrlList::from_file(file.path()).expect("load");
        assert_eq!(provider.len(), 2);
        assert_eq!(provider.max_count(), Some(2));
        assert_eq!(provider.image_url(1), "https://example.com/b.png");
    }
}
