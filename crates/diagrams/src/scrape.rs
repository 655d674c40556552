//! Diagram scraping from documentation pages.

use deck_core::{Error, Fetch, Result};
use scraper::{Html, Selector};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::thread;
use std::time::Duration;
use url::Url;

use crate::download::DownloadSummary;
use crate::naming::{clean_filename, infer_extension, is_diagram_url};

static IMG_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img[src]").unwrap());

/// Scraper behaviour.
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// Pause after each successful image download.
    pub delay: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
        }
    }
}

/// Absolute URLs of every `<img src>` on a page, in document order.
pub fn extract_image_urls(html: &str, base: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&IMG_SELECTOR)
        .filter_map(|img| img.value().attr("src"))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .filter_map(|src| {
            if src.starts_with("http://") || src.starts_with("https://") {
                Some(src.to_string())
            } else {
                match base.join(src) {
                    Ok(joined) => Some(joined.to_string()),
                    Err(e) => {
                        log::debug!("Skipping image '{src}': {e}");
                        None
                    }
                }
            }
        })
        .collect()
}

/// Download one image as `<out_dir>/<stem><ext>`, the extension taken from
/// the response.
fn download_image(fetcher: &impl Fetch, url: &str, out_dir: &Path, stem: &str) -> Result<PathBuf> {
    let response = fetcher.get(url)?;
    let filename = format!("{stem}{}", infer_extension(&response.content_type, url));
    let path = out_dir.join(&filename);
    fs::write(&path, &response.body)?;
    log::info!("Downloaded: {filename}");
    Ok(path)
}

/// Download the diagram images of one page.
///
/// Images are named after the page, with `_<n>` appended from the second
/// saved image on. A failed image is logged and its name reused.
pub fn scrape_page<F: Fetch>(
    fetcher: &F,
    page_url: &str,
    out_dir: &Path,
    options: &ScrapeOptions,
) -> Result<DownloadSummary> {
    let base = Url::parse(page_url).map_err(|_| Error::InvalidUrl(page_url.to_string()))?;
    let page = fetcher.get(page_url)?;
    let page_name = clean_filename(page_url);

    let mut summary = DownloadSummary::default();
    for src in extract_image_urls(&page.text(), &base) {
        if !is_diagram_url(&src) {
            continue;
        }
        let stem = match summary.succeeded() {
            0 => page_name.clone(),
            n => format!("{page_name}_{n}"),
        };
        match download_image(fetcher, &src, out_dir, &stem) {
            Ok(path) => {
                summary.saved.push(path);
                if !options.delay.is_zero() {
                    thread::sleep(options.delay);
                }
            }
            Err(e) => {
                log::error!("Error downloading {src}: {e}");
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Scrape every page into `out_dir`. A page that cannot be fetched is
/// logged and skipped.
pub fn scrape_pages<F: Fetch>(
    fetcher: &F,
    pages: &[&str],
    out_dir: &Path,
    options: &ScrapeOptions,
) -> Result<DownloadSummary> {
    fs::create_dir_all(out_dir)?;
    let mut total = DownloadSummary::default();

    for url in pages {
        log::info!("Processing: {url}");
        match scrape_page(fetcher, url, out_dir, options) {
            Ok(summary) => {
                log::info!("Downloaded {} images from this page", summary.succeeded());
                total.merge(summary);
            }
            Err(e) => {
                log::error!("Error processing {url}: {e}");
                log::info!("Downloaded 0 images from this page");
            }
        }
    }

    log::info!("Total images downloaded: {}", total.succeeded());
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::Fetched;
    use std::collections::HashMap;

    struct Site(HashMap<&'static str, (&'static str, &'static str)>);

    impl Fetch for Site {
        fn get(&self, url: &str) -> Result<Fetched> {
            match self.0.get(url) {
                Some((content_type, body)) => Ok(Fetched {
                    url: url.to_string(),
                    status: 200,
                    content_type: content_type.to_string(),
                    body: body.as_bytes().to_vec(),
                }),
                None => Err(Error::HttpStatus {
                    url: url.to_string(),
                    status: 404,
                }),
            }
        }
    }

    const PAGE: &str = r#"<html><body>
        <img src="images/hub-spoke-architecture.png">
        <img src="/media/logo.png">
        <img src="">
        <img src="https://cdn.example.com/gone-diagram.png">
        <img src="https://cdn.example.com/flow-DIAGRAM.svg">
    </body></html>"#;

    fn site() -> Site {
        Site(HashMap::from([
            ("https://docs.example.com/guide/hybrid-networking/", ("text/html", PAGE)),
            (
                "https://docs.example.com/guide/hybrid-networking/images/hub-spoke-architecture.png",
                ("image/png", "png-bytes"),
            ),
            (
                "https://cdn.example.com/flow-DIAGRAM.svg",
                ("image/svg+xml", "<svg/>"),
            ),
        ]))
    }

    fn no_delay() -> ScrapeOptions {
        ScrapeOptions {
            delay: Duration::ZERO,
        }
    }

    #[test]
    fn test_extract_image_urls_resolves_relative() {
        let base = Url::parse("https://docs.example.com/guide/hybrid-networking/").unwrap();
        let urls = extract_image_urls(PAGE, &base);
        assert_eq!(
            urls,
            vec![
                "https://docs.example.com/guide/hybrid-networking/images/hub-spoke-architecture.png",
                "https://docs.example.com/media/logo.png",
                "https://cdn.example.com/gone-diagram.png",
                "https://cdn.example.com/flow-DIAGRAM.svg",
            ]
        );
    }

    #[test]
    fn test_scrape_page_names_and_skips() {
        let dir = tempfile::tempdir().unwrap();
        let summary = scrape_page(
            &site(),
            "https://docs.example.com/guide/hybrid-networking/",
            dir.path(),
            &no_delay(),
        )
        .unwrap();

        assert_eq!(summary.succeeded(), 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(
            fs::read(dir.path().join("hybrid_networking.png")).unwrap(),
            b"png-bytes"
        );
        assert!(dir.path().join("hybrid_networking_1.svg").exists());
    }

    #[test]
    fn test_scrape_pages_continues_after_bad_page() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("images");
        let pages = [
            "https://docs.example.com/missing/",
            "https://docs.example.com/guide/hybrid-networking/",
        ];
        let summary = scrape_pages(&site(), &pages, &out, &no_delay()).unwrap();
        assert_eq!(summary.succeeded(), 2);
        assert!(out.is_dir());
    }
}
