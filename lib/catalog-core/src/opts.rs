//! Selection criteria for endpoint lookups

use catalog_api::Availability;
use serde::{Deserialize, Serialize};

/// EndpointOpts describes the endpoint a client wants out of the catalog.
///
/// Empty `name` and `region` mean "not specified". `region` must be set for
/// services that span multiple regions, otherwise an endpoint from any region
/// may be returned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndpointOpts {
    /// Service type, e.g. "compute" or "object-store". Required.
    #[serde(rename = "type")]
    pub service_type: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub region: String,

    /// Unset resolves as public
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
}

impl EndpointOpts {
    pub fn new(service_type: impl Into<String>) -> Self {
        Self {
            service_type: service_type.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = Some(availability);
        self
    }

    /// The availability used for matching
    pub fn effective_availability(&self) -> Availability {
        self.availability.unwrap_or(Availability::Public)
    }
}
