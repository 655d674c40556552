//! Azure architecture diagram fetchers.
//!
//! Two sources feed the `images/` directory: a fixed catalog of direct image
//! URLs ([`download_catalog`]) and a scraper that pulls diagram images out of
//! documentation pages ([`scrape_pages`]). Both log and skip failed items.

pub mod catalog;
pub mod download;
pub mod naming;
pub mod scrape;

pub use catalog::{CatalogEntry, ARCHITECTURE_IMAGES, SCRAPE_PAGES};
pub use download::{download_catalog, DownloadSummary, DEFAULT_IMAGE_DIR};
pub use naming::{clean_filename, infer_extension, is_diagram_url};
pub use scrape::{extract_image_urls, scrape_page, scrape_pages, ScrapeOptions};
