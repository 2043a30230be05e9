//! Services, endpoints and the catalog that groups them

use crate::Availability;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// A single reachable URL for a service
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Provider-assigned endpoint ID, when the document carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Region the endpoint lives in; empty when the provider is single-region
    #[serde(default)]
    pub region: String,

    /// Audience the endpoint is published for
    #[serde(rename = "interface", alias = "availability")]
    pub availability: Availability,

    pub url: String,
}

impl Endpoint {
    pub fn new(region: impl Into<String>, availability: Availability, url: impl Into<String>) -> Self {
        Self {
            id: None,
            region: region.into(),
            availability,
            url: url.into(),
        }
    }
}

/// A catalog entry: one service type/name and the endpoints it exposes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Service category, e.g. "compute" or "object-store"
    #[serde(rename = "type")]
    pub service_type: String,

    /// Service name, e.g. "nova"; several services may share a type
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

impl Service {
    pub fn new(service_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            service_type: service_type.into(),
            name: name.into(),
            endpoints: Vec::new(),
        }
    }

    /// Append an endpoint
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    /// Endpoints published for the given availability, in catalog order
    pub fn endpoints_for(&self, availability: Availability) -> impl Iterator<Item = &Endpoint> {
        self.endpoints
            .iter()
            .filter(move |e| e.availability == availability)
    }
}

/// Errors raised while decoding a catalog document
#[derive(Error, Debug)]
pub enum CatalogDecodeError {
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Catalog is the ordered, read-only list of services published by a provider.
///
/// Service order is significant: when several endpoints satisfy a lookup, the
/// first one in catalog order wins.
///
/// Documents decode from either `{"catalog": [...]}` (other top-level keys are
/// ignored) or a bare `[...]`; serialization always writes the wrapped shape.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    services: Vec<Service>,
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut doc = serializer.serialize_struct("Catalog", 1)?;
        doc.serialize_field("catalog", &self.services)?;
        doc.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CatalogVisitor)
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = Catalog;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of services or a map with a `catalog` key")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Catalog, A::Error> {
        let mut services = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(service) = seq.next_element::<Service>()? {
            services.push(service);
        }
        Ok(Catalog::new(services))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Catalog, A::Error> {
        let mut services: Option<Vec<Service>> = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == "catalog" {
                if services.is_some() {
                    return Err(de::Error::duplicate_field("catalog"));
                }
                services = Some(map.next_value()?);
            } else {
                map.next_value::<de::IgnoredAny>()?;
            }
        }
        services
            .map(Catalog::new)
            .ok_or_else(|| de::Error::missing_field("catalog"))
    }
}

impl Catalog {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a service
    pub fn with_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    /// Decode a JSON catalog document
    pub fn from_json_str(s: &str) -> Result<Self, CatalogDecodeError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Decode a YAML catalog document
    pub fn from_yaml_str(s: &str) -> Result<Self, CatalogDecodeError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Distinct service types, in first-seen order
    pub fn service_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for service in &self.services {
            if !types.contains(&service.service_type.as_str()) {
                types.push(&service.service_type);
            }
        }
        types
    }
}
