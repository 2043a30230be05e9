//! Service catalog model types
//!
//! This library defines the in-memory shape of a cloud provider's service catalog:
//! - Availability: which audience may reach an endpoint (admin, public, internal)
//! - Endpoint: a single reachable URL scoped to a region and an availability
//! - Service: a typed, named group of endpoints
//! - Catalog: the ordered list of services published at authentication time
//!
//! Catalog documents can be decoded from JSON or YAML, either as a bare array of
//! services or wrapped in a `catalog` key as identity services return it.

pub mod availability;
pub mod catalog;

pub use availability::{Availability, ParseAvailabilityError};
pub use catalog::{Catalog, CatalogDecodeError, Endpoint, Service};
