//! Cluster topology — service naming and the fixed values baked into every descriptor.
//!
//! | Role        | Service name   | Image                              |
//! |-------------|----------------|------------------------------------|
//! | Coordinator | `coordinator`  | `docker.io/bitnami/spark:3`        |
//! | Database    | `database-<i>` | `docker.io/bitnami/cassandra:3.11` |
//! | Worker      | `worker-<i>`   | `docker.io/bitnami/spark:3`        |
//!
//! Replica indices are 1-based.

use stackgen_core::ServiceName;

pub const COORDINATOR_NAME: &str = "coordinator";
pub const DATABASE_PREFIX: &str = "database";
pub const WORKER_PREFIX: &str = "worker";

pub const DATABASE_IMAGE: &str = "docker.io/bitnami/cassandra:3.11";
pub const COMPUTE_IMAGE: &str = "docker.io/bitnami/spark:3";

/// Runtime user for the coordinator and workers; the startup command writes into `jars/`.
pub const COMPUTE_USER: &str = "root";

pub const COORDINATOR_PORTS: &[&str] = &["8080:8080"];
pub const COORDINATOR_RPC_PORT: u16 = 7077;

pub const DATABASE_DATA_DIR: &str = "/bitnami";
pub const DATABASE_CLUSTER_NAME: &str = "cassandra-cluster";
pub const DATABASE_DEFAULT_PASSWORD: &str = "cassandra";

const CONNECTOR_JAR: &str = "spark-cassandra-connector-assembly_2.12-3.1.0.jar";
const CONNECTOR_URL: &str = "https://repo1.maven.org/maven2/com/datastax/spark/spark-cassandra-connector-assembly_2.12/3.1.0";
const ENTRYPOINT: &str =
    "/opt/bitnami/scripts/spark/entrypoint.sh /opt/bitnami/scripts/spark/run.sh";

/// RPC auth, RPC encryption, local storage encryption and SSL all disabled.
pub const SECURITY_DISABLED_ENV: &[&str] = &[
    "SPARK_RPC_AUTHENTICATION_ENABLED=no",
    "SPARK_RPC_ENCRYPTION_ENABLED=no",
    "SPARK_LOCAL_STORAGE_ENCRYPTION_ENABLED=no",
    "SPARK_SSL_ENABLED=no",
];

/// Shared startup command: fetch the connector jar, then hand off to the image entrypoint.
pub fn compute_command() -> String {
    format!(
        "bash -c \"curl {CONNECTOR_URL}/{CONNECTOR_JAR} --output jars/{CONNECTOR_JAR} && {ENTRYPOINT}\""
    )
}

pub fn coordinator_name() -> ServiceName {
    ServiceName::from(COORDINATOR_NAME)
}

/// `spark://coordinator:7077`
pub fn coordinator_url() -> String {
    format!("spark://{COORDINATOR_NAME}:{COORDINATOR_RPC_PORT}")
}

pub fn database_name(index: u32) -> ServiceName {
    ServiceName(format!("{DATABASE_PREFIX}-{index}"))
}

pub fn worker_name(index: u32) -> ServiceName {
    ServiceName(format!("{WORKER_PREFIX}-{index}"))
}

/// Every database node name for `1..=replicas`, comma-joined.
pub fn seed_list(replicas: u32) -> String {
    (1..=replicas)
        .map(|i| database_name(i).0)
        .collect::<Vec<_>>()
        .join(",")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
