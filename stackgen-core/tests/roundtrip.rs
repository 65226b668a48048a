//! Roundtrip serialisation tests for `stackgen-core` descriptor types.
//!
//! Each `#[case]` is isolated — no shared state.

use pretty_assertions::assert_eq;
use rstest::rstest;
use stackgen_core::{
    Descriptor, ResourceLimits, ServiceName, ServiceSpec, VolumeName, VolumeSpec,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn empty_descriptor() -> Descriptor {
    Descriptor::default()
}

fn full_descriptor() -> Descriptor {
    let mut d = Descriptor::default();
    let mut head = ServiceSpec::new("docker.io/bitnami/spark:3", ResourceLimits::new("1", "1024M"));
    head.user = Some("root".into());
    head.command = Some(r#"bash -c "echo 'hi' && exec run.sh""#.into());
    head.environment = vec!["SPARK_MODE=master".into()];
    head.ports = vec!["8080:8080".into()];
    d.services.insert(ServiceName::from("coordinator"), head);

    let mut node = ServiceSpec::new("docker.io/bitnami/cassandra:3.11", ResourceLimits::new("2", "4G"));
    node.volumes = vec!["database-1:/bitnami".into()];
    node.environment = vec!["CASSANDRA_SEEDS=database-1".into()];
    d.services.insert(ServiceName::from("database-1"), node);

    let mut worker = ServiceSpec::new("docker.io/bitnami/spark:3", ResourceLimits::new("1", "1024M"));
    worker.depends_on = vec![ServiceName::from("coordinator")];
    d.services.insert(ServiceName::from("worker-1"), worker);

    d.volumes.insert(VolumeName::from("database-1"), VolumeSpec::local());
    d
}

fn awkward_strings_descriptor() -> Descriptor {
    let mut d = Descriptor::default();
    let mut spec = ServiceSpec::new("img:latest", ResourceLimits::new("0.50", "2G"));
    spec.environment = vec![
        "QUOTED=\"double\" and 'single'".into(),
        "COLON=a: b".into(),
        "HASH=# not a comment".into(),
        "EMPTY=".into(),
        "BOOLISH=yes".into(),
    ];
    d.services.insert(ServiceName::from("svc"), spec);
    d
}

// ---------------------------------------------------------------------------
// Parameterised roundtrip test
// ---------------------------------------------------------------------------

#[rstest]
#[case("empty", empty_descriptor())]
#[case("all_fields", full_descriptor())]
#[case("awkward_strings", awkward_strings_descriptor())]
fn descriptor_roundtrip(#[case] label: &str, #[case] descriptor: Descriptor) {
    let yaml = serde_yaml::to_string(&descriptor)
        .unwrap_or_else(|e| panic!("[{label}] serialize failed: {e}"));
    let back: Descriptor = serde_yaml::from_str(&yaml)
        .unwrap_or_else(|e| panic!("[{label}] deserialize failed: {e}"));
    assert_eq!(descriptor, back, "[{label}]");
}

#[test]
fn service_key_order_is_stable() {
    let yaml = serde_yaml::to_string(&full_descriptor()).unwrap();
    let positions: Vec<usize> = ["coordinator:", "database-1:", "worker-1:"]
        .iter()
        .map(|k| yaml.find(k).unwrap_or_else(|| panic!("missing {k}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "order: {positions:?}");
}

#[test]
fn many_volumes_keep_order_through_yaml() {
    let n = 50_000;
    let mut d = Descriptor::default();
    for i in 1..=n {
        d.volumes.insert(VolumeName(format!("database-{i}")), VolumeSpec::local());
    }
    let yaml = serde_yaml::to_string(&d).unwrap();
    let back: Descriptor = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back.volumes.len(), n);
    assert_eq!(back.volumes.get_index_of("database-10"), Some(9));
    assert_eq!(back.volumes.get_index_of(format!("database-{n}").as_str()), Some(n - 1));
}
