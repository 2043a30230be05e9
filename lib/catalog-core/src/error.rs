use thiserror::Error;

/// The two ways a catalog lookup can miss.
///
/// Both are permanent: the same options against the same catalog always fail
/// the same way.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveError {
    /// No service matches the requested type and name
    #[error("No suitable service could be found in the service catalog.")]
    ServiceNotFound,

    /// A service matched, but none of its endpoints match the region and availability
    #[error("No suitable endpoint could be found in the service catalog.")]
    EndpointNotFound,
}

impl ResolveError {
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Which client option the caller should look at
    pub fn hint(&self) -> &'static str {
        match self {
            ResolveError::ServiceNotFound => "check the service type and name",
            ResolveError::EndpointNotFound => "check the region and availability",
        }
    }
}
