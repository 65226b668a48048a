//! Domain types for the generated compose descriptor.
//!
//! Field order in every struct is the order keys appear in the rendered
//! document. Optional attributes are omitted from the output when absent.
//!
//! `services` and `volumes` are [`IndexMap`]s: entries render in insertion
//! order, so `database-10` follows `database-9` rather than `database-1`.

use std::borrow::Borrow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Compose file format version written at the top of every descriptor.
pub const COMPOSE_VERSION: &str = "3";

/// Volume driver used for every database data volume.
pub const LOCAL_DRIVER: &str = "local";

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for a service entry in the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceName(pub String);

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ServiceName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ServiceName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl Borrow<str> for ServiceName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A strongly-typed name for a named volume.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VolumeName(pub String);

impl fmt::Display for VolumeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for VolumeName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VolumeName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<&ServiceName> for VolumeName {
    fn from(s: &ServiceName) -> Self {
        Self(s.0.clone())
    }
}

impl Borrow<str> for VolumeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Resource limits
// ---------------------------------------------------------------------------

/// CPU and memory ceiling. Both values are copied verbatim from user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLimits {
    pub cpus: String,
    pub memory: String,
}

impl ResourceLimits {
    pub fn new(cpus: impl Into<String>, memory: impl Into<String>) -> Self {
        Self { cpus: cpus.into(), memory: memory.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub limits: ResourceLimits,
}

/// `deploy:` block of a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deploy {
    pub resources: Resources,
}

impl From<ResourceLimits> for Deploy {
    fn from(limits: ResourceLimits) -> Self {
        Self { resources: Resources { limits } }
    }
}

// ---------------------------------------------------------------------------
// Services and volumes
// ---------------------------------------------------------------------------

/// A single service entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSpec {
    pub image: String,
    pub deploy: Deploy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// `KEY=VALUE` entries in declaration order.
    #[serde(default)]
    pub environment: Vec<String>,
    /// `host:container` port mappings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<String>,
    /// `volume-name:container-path` mounts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<ServiceName>,
}

impl ServiceSpec {
    /// A service with only an image and resource limits set.
    pub fn new(image: impl Into<String>, limits: ResourceLimits) -> Self {
        Self {
            image: image.into(),
            deploy: limits.into(),
            user: None,
            command: None,
            environment: Vec::new(),
            ports: Vec::new(),
            volumes: Vec::new(),
            depends_on: Vec::new(),
        }
    }
}

/// A named volume entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeSpec {
    pub driver: String,
}

impl VolumeSpec {
    pub fn local() -> Self {
        Self { driver: LOCAL_DRIVER.to_owned() }
    }
}

// ---------------------------------------------------------------------------
// Descriptor root
// ---------------------------------------------------------------------------

/// Root of a generated compose document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    pub version: String,
    #[serde(default)]
    pub services: IndexMap<ServiceName, ServiceSpec>,
    #[serde(default)]
    pub volumes: IndexMap<VolumeName, VolumeSpec>,
}

impl Default for Descriptor {
    fn default() -> Self {
        Self {
            version: COMPOSE_VERSION.to_owned(),
            services: IndexMap::new(),
            volumes: IndexMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
