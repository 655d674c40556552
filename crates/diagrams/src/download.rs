//! Catalog downloads and the summary shared with the scraper.

use deck_core::{Fetch, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::CatalogEntry;
use crate::naming::infer_extension;

/// Where images are written by default.
pub const DEFAULT_IMAGE_DIR: &str = "images";

/// Outcome of a batch of downloads.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DownloadSummary {
    /// Files written, in download order.
    pub saved: Vec<PathBuf>,
    pub failed: usize,
}

impl DownloadSummary {
    pub fn succeeded(&self) -> usize {
        self.saved.len()
    }

    pub fn attempted(&self) -> usize {
        self.saved.len() + self.failed
    }

    pub fn merge(&mut self, other: DownloadSummary) {
        self.saved.extend(other.saved);
        self.failed += other.failed;
    }
}

/// Fetch `url` and write the body to `path`, overwriting any existing file.
pub(crate) fn save_to(fetcher: &impl Fetch, url: &str, path: &Path) -> Result<()> {
    let response = fetcher.get(url)?;
    fs::write(path, &response.body)?;
    Ok(())
}

/// Download every catalog entry into `out_dir`.
///
/// Failed entries are logged and counted; only failing to create `out_dir`
/// is an error.
pub fn download_catalog<F: Fetch>(
    fetcher: &F,
    entries: &[CatalogEntry],
    out_dir: &Path,
) -> Result<DownloadSummary> {
    fs::create_dir_all(out_dir)?;
    let mut summary = DownloadSummary::default();

    for entry in entries {
        let filename = if Path::new(entry.filename).extension().is_some() {
            entry.filename.to_string()
        } else {
            format!("{}{}", entry.filename, infer_extension("", entry.url))
        };
        let path = out_dir.join(&filename);

        match save_to(fetcher, entry.url, &path) {
            Ok(()) => {
                log::info!("Successfully downloaded: {filename}");
                summary.saved.push(path);
            }
            Err(e) => {
                log::error!("Error downloading {filename}: {e}");
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{Error, Fetched};

    /// Serves a fixed body, except for URLs containing "missing".
    struct FakeFetcher;

    impl Fetch for FakeFetcher {
        fn get(&self, url: &str) -> Result<Fetched> {
            if url.contains("missing") {
                return Err(Error::HttpStatus {
                    url: url.to_string(),
                    status: 404,
                });
            }
            Ok(Fetched {
                url: url.to_string(),
                status: 200,
                content_type: "image/png".into(),
                body: url.as_bytes().to_vec(),
            })
        }
    }

    #[test]
    fn test_download_catalog_skips_failures() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("images");
        let entries = [
            CatalogEntry {
                url: "https://x/one.png",
                filename: "one.png",
            },
            CatalogEntry {
                url: "https://x/missing.png",
                filename: "missing.png",
            },
            CatalogEntry {
                url: "https://x/three.svg",
                filename: "three",
            },
        ];

        let summary = download_catalog(&FakeFetcher, &entries, &out).unwrap();

        assert_eq!(summary.succeeded(), 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.attempted(), 3);
        assert_eq!(fs::read(out.join("one.png")).unwrap(), b"https://x/one.png");
        assert!(out.join("three.svg").exists());
        assert!(!out.join("missing.png").exists());
    }

    #[test]
    fn test_download_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("one.png"), b"old").unwrap();
        let entries = [CatalogEntry {
            url: "https://x/one.png",
            filename: "one.png",
        }];

        download_catalog(&FakeFetcher, &entries, dir.path()).unwrap();
        assert_eq!(fs::read(dir.path().join("one.png")).unwrap(), b"https://x/one.png");
    }

    #[test]
    fn test_summary_merge() {
        let mut a = DownloadSummary {
            saved: vec![PathBuf::from("a.png")],
            failed: 1,
        };
        a.merge(DownloadSummary {
            saved: vec![PathBuf::from("b.png")],
            failed: 2,
        });
        assert_eq!(a.succeeded(), 2);
        assert_eq!(a.failed, 3);
    }
}
