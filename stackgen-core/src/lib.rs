//! stackgen core library — descriptor types, cluster parameters, errors.
//!
//! - [`types`] — name newtypes, service/volume specs and the [`Descriptor`] root
//! - [`params`] — [`ClusterParams`] defaults, validation and parameter-file loading
//! - [`error`] — [`ParamsError`]

pub mod error;
pub mod params;
pub mod types;

pub use error::ParamsError;
pub use params::ClusterParams;
pub use types::{
    Deploy, Descriptor, ResourceLimits, Resources, ServiceName, ServiceSpec, VolumeName,
    VolumeSpec, COMPOSE_VERSION, LOCAL_DRIVER,
};
