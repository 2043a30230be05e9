//! Endpoint resolution against a service catalog
//!
//! Resolution runs in two stages so that callers can tell the two misses apart:
//! services are filtered by type and name first (`ServiceNotFound` if none
//! survive), then the surviving services' endpoints are filtered by
//! availability and region (`EndpointNotFound` if none survive).
//!
//! When several endpoints survive, the first one in catalog order wins: service
//! order first, then endpoint order within the service. An empty region is not a
//! filter, so multi-region services need an explicit region to avoid picking an
//! endpoint from whichever region is listed first.

use crate::{EndpointOpts, ResolveError};
use catalog_api::{Catalog, Endpoint, Service};
use tracing::{debug, trace};

fn service_matches(service: &Service, opts: &EndpointOpts) -> bool {
    if opts.service_type.is_empty() || service.service_type != opts.service_type {
        return false;
    }
    opts.name.is_empty() || service.name == opts.name
}

fn region_matches(endpoint: &Endpoint, opts: &EndpointOpts) -> bool {
    opts.region.is_empty() || endpoint.region == opts.region
}

fn endpoint_miss_detail(opts: &EndpointOpts) -> String {
    let mut detail = format!(
        "Service {:?} has no {} endpoint",
        opts.service_type,
        opts.effective_availability()
    );
    if !opts.region.is_empty() {
        detail.push_str(&format!(" in region {:?}", opts.region));
    }
    detail
}

/// All endpoints admissible for `opts`, in catalog order
pub fn matching_endpoints<'a>(
    catalog: &'a Catalog,
    opts: &EndpointOpts,
) -> Result<Vec<&'a Endpoint>, ResolveError> {
    let services: Vec<&'a Service> = catalog
        .services()
        .iter()
        .filter(|s| service_matches(s, opts))
        .collect();

    if services.is_empty() {
        debug!(
            "No service of type {:?} (name {:?}) among {} catalog entries",
            opts.service_type,
            opts.name,
            catalog.len()
        );
        return Err(ResolveError::ServiceNotFound);
    }

    let availability = opts.effective_availability();
    let endpoints: Vec<&'a Endpoint> = services
        .into_iter()
        .flat_map(|s| s.endpoints_for(availability))
        .filter(|e| {
            let admissible = region_matches(e, opts);
            trace!("Candidate {} in {:?}: admissible={}", e.url, e.region, admissible);
            admissible
        })
        .collect();

    if endpoints.is_empty() {
        debug!("{}", endpoint_miss_detail(opts));
        return Err(ResolveError::EndpointNotFound);
    }

    Ok(endpoints)
}

/// Select the single endpoint for `opts`
pub fn select_endpoint<'a>(
    catalog: &'a Catalog,
    opts: &EndpointOpts,
) -> Result<&'a Endpoint, ResolveError> {
    let endpoints = matching_endpoints(catalog, opts)?;
    if endpoints.len() > 1 {
        debug!(
            "{} endpoints match {:?}, using first in catalog order: {}",
            endpoints.len(),
            opts.service_type,
            endpoints[0].url
        );
    }
    endpoints
        .first()
        .copied()
        .ok_or(ResolveError::EndpointNotFound)
}

/// Resolve `opts` to an endpoint URL
pub fn resolve(catalog: &Catalog, opts: &EndpointOpts) -> Result<String, ResolveError> {
    select_endpoint(catalog, opts).map(|e| e.url.clone())
}
