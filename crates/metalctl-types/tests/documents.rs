use metalctl_types::{
    Contexts, Health, Image, ImageClassification, ImageFeature, IpType, Network, NetworkType,
    ServiceStatus, TaskInfo, TaskState, Tenant, TenantMember, TenantRole, VpnNode,
};

#[test]
fn test_network_list_from_yaml() {
    let doc = r#"
- id: internet
  type: external
  prefixes: [185.1.2.0/24]
  natType: ipv4-masquerade
- id: tenant-super
  type: super
  partition: fra-equ01
- id: child-1
  parentNetwork: tenant-super
  type: child
  consumption:
    ipv4:
      availableIps: 256
      usedIps: 240
"#;
    let networks: Vec<Network> = serde_yaml::from_str(doc).unwrap();

    assert_eq!(networks.len(), 3);
    assert_eq!(networks[0].network_type, NetworkType::External);
    assert_eq!(networks[2].parent_network.as_deref(), Some("tenant-super"));

    let usage = networks[2].consumption.as_ref().unwrap().ipv4.unwrap();
    assert!(usage.ip_ratio() > 0.9);
    assert_eq!(usage.prefix_ratio(), 0.0);
}

#[test]
fn test_tenant_labels_are_ordered() {
    let tenant: Tenant = serde_json::from_str(
        r#"{"login": "acme", "meta": {"labels": {"b": "2", "a": "1"}}}"#,
    )
    .unwrap();
    assert_eq!(tenant.meta.label_pairs(), vec!["a=1", "b=2"]);
}

#[test]
fn test_health_partitions() {
    let health: Health = serde_json::from_str(
        r#"{"services": [{"name": "machines", "status": "degraded",
            "partitions": {"b": {"status": "healthy"}, "a": {"status": "unhealthy"}}}]}"#,
    )
    .unwrap();

    let service = &health.services[0];
    assert_eq!(service.status, ServiceStatus::Degraded);
    let ids: Vec<&String> = service.partitions.keys().collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn test_current_context_lookup() {
    let contexts: Contexts = serde_json::from_str(
        r#"{"current_context": "prod", "contexts": [{"name": "dev"}, {"name": "prod", "default_project": "p1"}]}"#,
    )
    .unwrap();

    assert!(contexts.is_current("prod"));
    assert!(!contexts.is_current("dev"));
    assert_eq!(
        contexts.current().and_then(|c| c.default_project.as_deref()),
        Some("p1")
    );
}

#[test]
fn test_unknown_role_sorts_before_known_roles() {
    let members: Vec<TenantMember> = serde_json::from_str(
        r#"[{"id": "a", "role": "guest"}, {"id": "b", "role": "superuser"}, {"id": "c", "role": "owner"}]"#,
    )
    .unwrap();
    assert_eq!(members[1].role, TenantRole::Unspecified);

    let mut roles: Vec<TenantRole> = members.iter().map(|m| m.role).collect();
    roles.sort();
    assert_eq!(
        roles,
        vec![TenantRole::Unspecified, TenantRole::Owner, TenantRole::Guest]
    );
    assert!(IpType::Unspecified < IpType::Ephemeral);
    assert!(NetworkType::Unspecified < NetworkType::External);
}

#[test]
fn test_unspecified_serializes_by_name() {
    let json = serde_json::to_string(&[TenantRole::Unspecified, TenantRole::Viewer]).unwrap();
    assert_eq!(json, r#"["unspecified","viewer"]"#);
}

#[test]
fn test_vpn_node_id_as_number_or_string() {
    let nodes: Vec<VpnNode> = serde_json::from_str(
        r#"[
            {"id": 7, "name": "fw-1", "ipAddresses": ["100.64.0.7"]},
            {"id": "12", "name": "m-2"}
        ]"#,
    )
    .unwrap();

    assert_eq!(nodes[0].id, "7");
    assert_eq!(nodes[1].number(), Some(12));
    assert_eq!(nodes[0].ip_addresses, vec!["100.64.0.7"]);
}

#[test]
fn test_image_features_and_classification() {
    let image: Image = serde_yaml::from_str(
        "id: ubuntu-24.04\nfeatures: [machine, tpm]\nclassification: supported\n",
    )
    .unwrap();

    assert_eq!(image.features, vec![ImageFeature::Machine, ImageFeature::Unspecified]);
    assert_eq!(image.classification, ImageClassification::Supported);
    assert_eq!(image.feature_list(), "machine,unspecified");
}

#[test]
fn test_task_type_field() {
    let task: TaskInfo = serde_json::from_str(
        r#"{"id": "t-1", "queue": "default", "type": "machine:delete", "state": "retry"}"#,
    )
    .unwrap();

    assert_eq!(task.task_type, "machine:delete");
    assert_eq!(task.state, TaskState::Retry);
    assert_eq!(serde_json::to_value(&task).unwrap()["type"], "machine:delete");
}
