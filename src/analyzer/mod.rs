//! Page analyzers.
//!
//! Three independent functions, each producing one fragment of
//! [`AnalysisReport`](types::AnalysisReport):
//! - [`domain_info::resolve_domain_info`] - network identity of the target host
//! - [`subdomains::extract_subdomains`] - hostnames linked from the page
//! - [`assets::extract_external_resources`] - referenced asset URLs by category
//!
//! The extractors are pure functions over the fetched HTML; only the domain
//! info resolver performs I/O (DNS plus one geolocation lookup), and it never
//! fails -- unresolvable pieces degrade to `None`.

pub mod assets;
pub mod domain_info;
pub mod subdomains;
pub mod types;

pub use assets::extract_external_resources;
pub use domain_info::resolve_domain_info;
pub use subdomains::extract_subdomains;
pub use types::{AnalysisReport, AssetReport, DomainInfo};
