//! Descriptor builder.
//!
//! `build` is pure: the same [`ClusterParams`] always produce the same
//! [`Descriptor`], entries in the same order.
//!
//! # Insertion order
//!
//! ```text
//! coordinator
//! database-1, worker-1
//! database-2, worker-2
//! ...
//! ```
//!
//! Volumes follow the database nodes: `database-1`, `database-2`, ...

use stackgen_core::{
    ClusterParams, Descriptor, ResourceLimits, ServiceName, ServiceSpec, VolumeName, VolumeSpec,
};

use crate::topology::{self, SECURITY_DISABLED_ENV};

/// Build the full descriptor for `params`.
///
/// Callers are expected to have run [`ClusterParams::validate`]; with
/// `replicas == 0` the result holds only the coordinator and no volumes.
pub fn build(params: &ClusterParams) -> Descriptor {
    let worker_limits = ResourceLimits::new(&params.worker_cpu, &params.worker_mem);
    let database_limits = ResourceLimits::new(&params.database_cpu, &params.database_mem);

    let replicas = params.replicas as usize;
    let mut descriptor = Descriptor::default();
    descriptor.services.reserve(1 + 2 * replicas);
    descriptor.volumes.reserve(replicas);

    descriptor
        .services
        .insert(topology::coordinator_name(), coordinator(worker_limits.clone()));

    // Every node gets the complete list, so it must exist before the loop.
    let seeds = topology::seed_list(params.replicas);

    for index in 1..=params.replicas {
        let db_name = topology::database_name(index);
        let worker_name = topology::worker_name(index);
        let db = database_node(&db_name, &seeds, database_limits.clone());

        tracing::debug!(service = %db_name, "built database node");
        tracing::debug!(service = %worker_name, "built worker");

        descriptor
            .volumes
            .insert(VolumeName::from(&db_name), VolumeSpec::local());
        descriptor.services.insert(db_name, db);
        descriptor
            .services
            .insert(worker_name, worker(worker_limits.clone()));
    }

    descriptor
}

fn coordinator(limits: ResourceLimits) -> ServiceSpec {
    let mut spec = ServiceSpec::new(topology::COMPUTE_IMAGE, limits);
    spec.user = Some(topology::COMPUTE_USER.to_owned());
    spec.command = Some(topology::compute_command());
    spec.environment = std::iter::once("SPARK_MODE=master".to_owned())
        .chain(SECURITY_DISABLED_ENV.iter().map(|s| s.to_string()))
        .collect();
    spec.ports = topology::COORDINATOR_PORTS.iter().map(|s| s.to_string()).collect();
    spec
}

fn database_node(name: &ServiceName, seeds: &str, limits: ResourceLimits) -> ServiceSpec {
    let mut spec = ServiceSpec::new(topology::DATABASE_IMAGE, limits);
    spec.volumes = vec![format!("{name}:{}", topology::DATABASE_DATA_DIR)];
    spec.environment = vec![
        format!("CASSANDRA_SEEDS={seeds}"),
        format!("CASSANDRA_CLUSTER_NAME={}", topology::DATABASE_CLUSTER_NAME),
        "CASSANDRA_PASSWORD_SEEDER=yes".to_owned(),
        format!("CASSANDRA_PASSWORD={}", topology::DATABASE_DEFAULT_PASSWORD),
    ];
    spec
}

fn worker(limits: ResourceLimits) -> ServiceSpec {
    let mut environment = vec![
        "SPARK_MODE=worker".to_owned(),
        format!("SPARK_MASTER_URL={}", topology::coordinator_url()),
        format!("SPARK_WORKER_MEMORY={}", limits.memory),
        format!("SPARK_WORKER_CORES={}", limits.cpus),
    ];
    environment.extend(SECURITY_DISABLED_ENV.iter().map(|s| s.to_string()));

    let mut spec = ServiceSpec::new(topology::COMPUTE_IMAGE, limits);
    spec.user = Some(topology::COMPUTE_USER.to_owned());
    spec.command = Some(topology::compute_command());
    spec.environment = environment;
    spec.depends_on = vec![topology::coordinator_name()];
    spec
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
