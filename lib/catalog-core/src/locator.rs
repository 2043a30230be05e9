//! Endpoint locators used by client construction

use crate::{resolve, EndpointOpts, ResolveError};
use catalog_api::{Availability, Catalog};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// EndpointLocator finds the URL of a single endpoint for a set of options.
///
/// It is set up once a provider session has a catalog and used to build the
/// individual service clients.
pub trait EndpointLocator: Send + Sync {
    fn locate(&self, opts: &EndpointOpts) -> Result<String, ResolveError>;
}

impl<F> EndpointLocator for F
where
    F: Fn(&EndpointOpts) -> Result<String, ResolveError> + Send + Sync,
{
    fn locate(&self, opts: &EndpointOpts) -> Result<String, ResolveError> {
        self(opts)
    }
}

/// Locator backed by a catalog snapshot
#[derive(Clone, Debug)]
pub struct CatalogLocator {
    catalog: Arc<Catalog>,
}

impl CatalogLocator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// The snapshot lookups run against
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}

impl From<Catalog> for CatalogLocator {
    fn from(catalog: Catalog) -> Self {
        Self::new(Arc::new(catalog))
    }
}

impl EndpointLocator for CatalogLocator {
    fn locate(&self, opts: &EndpointOpts) -> Result<String, ResolveError> {
        resolve(&self.catalog, opts)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct OverrideKey {
    service_type: String,
    name: String,
    region: String,
    availability: Availability,
}

impl From<&EndpointOpts> for OverrideKey {
    fn from(opts: &EndpointOpts) -> Self {
        Self {
            service_type: opts.service_type.clone(),
            name: opts.name.clone(),
            region: opts.region.clone(),
            availability: opts.effective_availability(),
        }
    }
}

/// Locator with fixed URLs, optionally falling back to another locator.
///
/// Overrides match on the exact options they were registered with, with an
/// unset availability treated as public. Without a fallback, a lookup that
/// hits no override fails with `EndpointNotFound` when some override exists
/// for the same service type (and name, when given), and with
/// `ServiceNotFound` otherwise.
#[derive(Clone, Default)]
pub struct StaticLocator {
    overrides: HashMap<OverrideKey, String>,
    fallback: Option<Arc<dyn EndpointLocator>>,
}

impl StaticLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fixed URL for `opts`
    pub fn with_override(mut self, opts: &EndpointOpts, url: impl Into<String>) -> Self {
        self.overrides.insert(OverrideKey::from(opts), url.into());
        self
    }

    /// Locator consulted when no override matches
    pub fn with_fallback(mut self, fallback: Arc<dyn EndpointLocator>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    fn has_service(&self, opts: &EndpointOpts) -> bool {
        self.overrides.keys().any(|key| {
            !opts.service_type.is_empty()
                && key.service_type == opts.service_type
                && (opts.name.is_empty() || key.name == opts.name)
        })
    }
}

impl std::fmt::Debug for StaticLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticLocator")
            .field("overrides", &self.overrides.len())
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl EndpointLocator for StaticLocator {
    fn locate(&self, opts: &EndpointOpts) -> Result<String, ResolveError> {
        if let Some(url) = self.overrides.get(&OverrideKey::from(opts)) {
            debug!("Using static endpoint for {:?}: {}", opts.service_type, url);
            return Ok(url.clone());
        }

        match &self.fallback {
            Some(fallback) => fallback.locate(opts),
            None if self.has_service(opts) => Err(ResolveError::EndpointNotFound),
            None => Err(ResolveError::ServiceNotFound),
        }
    }
}
