//! Service catalog endpoint resolution
//!
//! This library provides:
//! - Selection criteria (`EndpointOpts`) describing the endpoint a client wants
//! - The resolver that picks exactly one endpoint URL out of a `Catalog`
//! - The `EndpointLocator` trait used by client construction, with catalog-backed
//!   and static implementations

pub mod error;
pub mod locator;
pub mod opts;
pub mod resolver;

pub use catalog_api::{Availability, Catalog, Endpoint, Service};
pub use error::ResolveError;
pub use locator::{CatalogLocator, EndpointLocator, StaticLocator};
pub use opts::EndpointOpts;
pub use resolver::{matching_endpoints, resolve, select_endpoint};
