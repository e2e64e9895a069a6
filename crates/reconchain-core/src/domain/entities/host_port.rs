use std::fmt;

use serde::{Deserialize, Serialize};

/// An open TCP port on a host, rendered as `address:port`.
///
/// Both halves are kept exactly as they appeared in the scanner output; no
/// address or port-range validation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostPort {
    pub address: String,
    pub port: String,
}

impl HostPort {
    pub fn new(address: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            port: port.into(),
        }
    }
}

impl fmt::Display for HostPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.address, self.port)
    }
}
