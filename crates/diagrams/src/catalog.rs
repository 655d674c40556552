//! Fixed diagram sources.

/// A direct image URL and the file name it is saved under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub url: &'static str,
    pub filename: &'static str,
}

const fn entry(url: &'static str, filename: &'static str) -> CatalogEntry {
    CatalogEntry { url, filename }
}

macro_rules! learn {
    ($path:literal) => {
        concat!("https://learn.microsoft.com/en-us/azure", $path)
    };
}

/// Key Azure architecture diagrams, fetched by URL.
pub const ARCHITECTURE_IMAGES: &[CatalogEntry] = &[
    // Core architectures
    entry(
        learn!("/architecture/guide/architecture-styles/images/microservices-logical.png"),
        "microservices-architecture.png",
    ),
    entry(
        learn!("/architecture/reference-architectures/containers/aks/images/aks-baseline-architecture.svg"),
        "aks-baseline-architecture.png",
    ),
    entry(
        learn!("/architecture/reference-architectures/hybrid-networking/images/hub-spoke.png"),
        "hub-spoke-architecture.png",
    ),
    entry(
        learn!("/architecture/reference-architectures/app-service-web-app/images/scalable-web-app.png"),
        "scalable-web-app-architecture.png",
    ),
    // Networking and connectivity
    entry(
        learn!("/virtual-network/media/service-endpoints-overview.png"),
        "service-endpoints.png",
    ),
    entry(
        learn!("/private-link/media/private-endpoint-basics.png"),
        "private-endpoint-basics.png",
    ),
    entry(
        learn!("/private-link/media/private-link-service-overview.png"),
        "private-link-service.png",
    ),
    entry(
        learn!("/dns/media/private-dns-portal.png"),
        "private-dns-portal.png",
    ),
    entry(
        learn!("/virtual-network/media/routing-overview.png"),
        "vnet-routing-overview.png",
    ),
    // DNS and hybrid networking
    entry(learn!("/dns/media/dns-overview.png"), "azure-dns-overview.png"),
    entry(
        learn!("/dns/media/private-resolver-overview.png"),
        "private-resolver-overview.png",
    ),
    entry(
        learn!("/dns/media/custom-domain-name.png"),
        "custom-domain-dns.png",
    ),
    // Identity and security
    entry(
        learn!("/active-directory/conditional-access/media/overview/conditional-access-overview.png"),
        "conditional-access-overview.png",
    ),
    entry(
        learn!("/active-directory/conditional-access/media/what-if-tool/what-if-tool.png"),
        "conditional-access-what-if.png",
    ),
    entry(
        learn!("/active-directory/conditional-access/media/location-condition.png"),
        "conditional-access-location.png",
    ),
    // Containers and DevSecOps
    entry(
        learn!("/architecture/reference-architectures/containers/aks/images/secure-baseline-architecture.svg"),
        "aks-secure-baseline.png",
    ),
    entry(
        learn!("/architecture/solution-ideas/media/devsecops-in-azure.png"),
        "aks-devsecops.png",
    ),
    entry(
        learn!("/container-registry/media/container-registry-service-tiers.png"),
        "acr-service-tiers.png",
    ),
];

/// Documentation pages scanned for diagram images.
pub const SCRAPE_PAGES: &[&str] = &[
    learn!("/architecture/guide/"),
    learn!("/architecture/guide/architecture-styles/"),
    learn!("/architecture/guide/technology-choices/"),
    learn!("/architecture/patterns/"),
    learn!("/architecture/framework/"),
    learn!("/architecture/reference-architectures/"),
    learn!("/architecture/example-scenario/"),
    learn!("/architecture/browse/"),
    learn!("/architecture/guide/security/security-start-here"),
    learn!("/architecture/framework/security/security-principles"),
    learn!("/architecture/framework/resiliency/backup-and-recovery"),
    learn!("/architecture/framework/scalability/performance-efficiency"),
    learn!("/architecture/guide/technology-choices/compute-decision-tree"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const LEARN: &str = "https://learn.microsoft.com/en-us/azure/";

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(ARCHITECTURE_IMAGES.len(), 18);
        assert_eq!(SCRAPE_PAGES.len(), 13);
    }

    #[test]
    fn test_catalog_entries_are_unique_learn_urls() {
        let names: HashSet<&str> = ARCHITECTURE_IMAGES.iter().map(|e| e.filename).collect();
        assert_eq!(names.len(), ARCHITECTURE_IMAGES.len());
        for e in ARCHITECTURE_IMAGES {
            assert!(e.url.starts_with(LEARN), "{}", e.url);
        }
        for page in SCRAPE_PAGES {
            assert!(page.starts_with(LEARN), "{page}");
        }
    }
}
