//! Endpoint availability (interface) levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Availability describes which audience may reach a service endpoint
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// Only reachable by administrators
    Admin,
    /// Reachable by everyone
    #[default]
    Public,
    /// Only reachable from inside the provider's network
    Internal,
}

impl Availability {
    /// All variants, in declaration order
    pub const ALL: [Availability; 3] = [
        Availability::Admin,
        Availability::Public,
        Availability::Internal,
    ];

    /// The lowercase wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Admin => "admin",
            Availability::Public => "public",
            Availability::Internal => "internal",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid availability {0:?}: expected one of admin, public, internal")]
pub struct ParseAvailabilityError(pub String);

impl FromStr for Availability {
    type Err = ParseAvailabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Availability::Admin),
            "public" => Ok(Availability::Public),
            "internal" => Ok(Availability::Internal),
            other => Err(ParseAvailabilityError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!("admin".parse::<Availability>(), Ok(Availability::Admin));
        assert_eq!("public".parse::<Availability>(), Ok(Availability::Public));
        assert_eq!("internal".parse::<Availability>(), Ok(Availability::Internal));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "Public".parse::<Availability>().unwrap_err();
        assert_eq!(err, ParseAvailabilityError("Public".to_string()));
        assert!("".parse::<Availability>().is_err());
        assert!("private".parse::<Availability>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for availability in Availability::ALL {
            let text = availability.to_string();
            assert_eq!(text, availability.as_str());
            assert_eq!(text.parse::<Availability>(), Ok(availability));
        }
    }

    #[test]
    fn test_default_is_public() {
        assert_eq!(Availability::default(), Availability::Public);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Availability::Internal).unwrap();
        assert_eq!(json, "\"internal\"");

        let parsed: Availability = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(parsed, Availability::Admin);

        assert!(serde_json::from_str::<Availability>("\"ADMIN\"").is_err());
    }
}
