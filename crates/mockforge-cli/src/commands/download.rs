use std::path::PathBuf;

use clap::{Args, Subcommand};

use mockforge_download::{
    format_size, ImageDownloader, ImageProvider, LoremFlickr, Picsum, Unsplash, UrlList,
};

use crate::error::CliError;

#[derive(Subcommand, Debug)]
pub enum DownloadSource {
    /// Picsum Photos (capped at 20 images per run).
    Picsum {
        #[command(flatten)]
        common: CommonArgs,
        #[arg(long, default_value_t = 640)]
        width: u32,
        #[arg(long, default_value_t = 480)]
        height: u32,
    },
    /// LoremFlickr, optionally scoped to a category keyword.
    Loremflickr {
        #[command(flatten)]
        common: CommonArgs,
        #[arg(long, default_value_t = 640)]
        width: u32,
        #[arg(long, default_value_t = 480)]
        height: u32,
        #[arg(long)]
        category: Option<String>,
    },
    /// Unsplash source images, optionally scoped to a search query.
    Unsplash {
        #[command(flatten)]
        common: CommonArgs,
        #[arg(long, default_value_t = 800)]
        width: u32,
        #[arg(long, default_value_t = 600)]
        height: u32,
        #[arg(long)]
        query: Option<String>,
    },
    /// URLs listed in a text file, one per line.
    Urls {
        /// File with one image URL per line; `#` starts a comment.
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Number of images to download.
    #[arg(short = 'c', long, default_value_t = 10)]
    pub count: u32,

    /// Directory the images are written into.
    #[arg(short = 'o', long, default_value = "mocks", value_name = "DIR")]
    pub out: PathBuf,

    /// List the planned URLs without downloading anything.
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn run(source: DownloadSource) -> Result<(), CliError> {
    let (provider, common): (Box<dyn ImageProvider>, CommonArgs) = match source {
        DownloadSource::Picsum {
            common,
            width,
            height,
        } => (Box::new(Picsum::new(width, height)), common),
        DownloadSource::Loremflickr {
            common,
            width,
            height,
            category,
        } => (Box::new(LoremFlickr::new(width, height, category)), common),
        DownloadSource::Unsplash {
            common,
            width,
            height,
            query,
        } => (Box::new(Unsplash::new(width, height, query)), common),
        DownloadSource::Urls { file, common } => {
            let list = UrlList::from_file(&file)?;
            if list.is_empty() {
                return Err(CliError::InvalidArguments(format!(
                    "'{}' contains no URLs",
                    file.display()
                )));
            }
            (Box::new(list), common)
        }
    };

    if common.dry_run {
        println!(
            "DRY RUN: {} images from '{}' into {}, nothing downloaded",
            common.count,
            provider.name(),
            common.out.display()
        );
        for index in 0..common.count {
            println!("  {}", provider.image_url(index));
        }
        return Ok(());
    }

    let downloader = ImageDownloader::new();
    let results = downloader
        .download(provider.as_ref(), common.count, &common.out)
        .await?;

    let total: u64 = results.iter().map(|result| result.bytes).sum();
    println!(
        "Downloaded {} images from '{}' to {} ({})",
        results.len(),
        provider.name(),
        common.out.display(),
        format_size(total)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn common(out: PathBuf) -> CommonArgs {
        CommonArgs {
            count: 3,
            out,
            dry_run: true,
        }
    }

    #[tokio::test]
    async fn dry_run_lists_urls_without_touching_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("never-created");
        let source = DownloadSource::Picsum {
            common: common(out.clone()),
            width: 320,
            height: 240,
        };
        run(source).await.expect("dry run");
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn empty_url_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "# only a comment").unwrap();

        let source = DownloadSource::Urls {
            file: file.path().to_path_buf(),
            common: common(PathBuf::from("mocks")),
        };
        let err = run(source).await.unwrap_err();
        assert!(matches!(err, CliError::InvalidArguments(_)));
    }
}
