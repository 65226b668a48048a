//! Cluster parameters.
//!
//! Resolution order, lowest to highest precedence:
//!
//! ```text
//! ClusterParams::default()   replicas=1, cpu="1", mem="1024M"
//!   <- parameter file        load_at(path), any subset of fields
//!   <- command-line flags    ParamOverrides::apply
//! ```
//!
//! Resource strings are opaque: they are never parsed, rounded or range-checked.
//! The only validated value is `replicas`, which must be at least 1.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ParamsError;

pub const DEFAULT_REPLICAS: u32 = 1;
pub const DEFAULT_CPU: &str = "1";
pub const DEFAULT_MEM: &str = "1024M";

/// Tunable inputs of the descriptor builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClusterParams {
    /// Number of database nodes, and also the number of compute workers.
    pub replicas: u32,
    pub database_cpu: String,
    pub database_mem: String,
    /// Applied to the coordinator and to every worker.
    pub worker_cpu: String,
    pub worker_mem: String,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            replicas: DEFAULT_REPLICAS,
            database_cpu: DEFAULT_CPU.to_owned(),
            database_mem: DEFAULT_MEM.to_owned(),
            worker_cpu: DEFAULT_CPU.to_owned(),
            worker_mem: DEFAULT_MEM.to_owned(),
        }
    }
}

impl ClusterParams {
    /// Load parameters from a YAML file. Fields missing from the file keep their defaults.
    ///
    /// Returns `ParamsError::NotFound` if absent,
    /// `ParamsError::Parse` (with path + line context) if malformed or if it names an unknown field.
    pub fn load_at(path: &Path) -> Result<Self, ParamsError> {
        if !path.exists() {
            return Err(ParamsError::NotFound { path: path.to_path_buf() });
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ParamsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        // An empty file is a valid "all defaults" parameter file.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&contents).map_err(|source| ParamsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject parameter sets that cannot describe a cluster.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.replicas == 0 {
            return Err(ParamsError::InvalidReplicas(self.replicas));
        }
        Ok(())
    }
}

/// Explicitly supplied values that take precedence over file and defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamOverrides {
    pub replicas: Option<u32>,
    pub database_cpu: Option<String>,
    pub database_mem: Option<String>,
    pub worker_cpu: Option<String>,
    pub worker_mem: Option<String>,
}

impl ParamOverrides {
    pub fn apply(self, mut params: ClusterParams) -> ClusterParams {
        if let Some(replicas) = self.replicas {
            params.replicas = replicas;
        }
        if let Some(cpu) = self.database_cpu {
            params.database_cpu = cpu;
        }
        if let Some(mem) = self.database_mem {
            params.database_mem = mem;
        }
        if let Some(cpu) = self.worker_cpu {
            params.worker_cpu = cpu;
        }
        if let Some(mem) = self.worker_mem {
            params.worker_mem = mem;
        }
        params
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
