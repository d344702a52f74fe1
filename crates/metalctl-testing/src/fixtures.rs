//! API dumps used by the integration tests.
//!
//! The documents are deliberately out of order so every test exercises the
//! sorter, not the order of the input.

/// Three machines, two of them in the same rack with different sizes.
pub const MACHINES: &str = r#"[
  {
    "uuid": "m-3",
    "rack": "rack-2",
    "partition": {"id": "fra-equ01"},
    "size": {"id": "c1-large-x86"},
    "allocation": {
      "hostname": "worker-3",
      "project": "p-2",
      "image": {"id": "debian-12", "name": "Debian 12"},
      "meta": {"createdAt": "2024-06-10T00:00:00Z"}
    }
  },
  {
    "uuid": "m-1",
    "rack": "rack-1",
    "partition": {"id": "fra-equ02"},
    "size": {"id": "n1-medium-x86"},
    "allocation": {
      "hostname": "worker-1",
      "project": "p-1",
      "image": {"id": "ubuntu-24.04", "name": "Ubuntu 24.04"},
      "meta": {"createdAt": "2024-06-01T00:00:00Z"}
    }
  },
  {
    "uuid": "m-2",
    "rack": "rack-1",
    "partition": {"id": "fra-equ01"},
    "size": {"id": "c1-large-x86"}
  }
]"#;

/// A super network with two children, one external network and an orphan.
pub const NETWORKS: &str = r#"
- id: n-child-b
  type: child
  parentNetwork: tenant-super
  partition: fra-equ01
  project: p-1
  prefixes: ["10.0.8.0/22"]
- id: internet
  type: external
  prefixes: ["203.0.113.0/24"]
- id: tenant-super
  type: super-namespaced
  partition: fra-equ01
  prefixes: ["10.0.0.0/16"]
- id: n-orphan
  type: child
  parentNetwork: deleted-super
  partition: fra-equ01
- id: n-child-a
  type: child
  parentNetwork: tenant-super
  partition: fra-equ01
  project: p-1
  prefixes: ["10.0.4.0/22"]
"#;

pub const TENANT_MEMBERS: &str = r#"[
  {"id": "carol", "role": "viewer", "createdAt": "2024-03-01T00:00:00Z"},
  {"id": "alice", "role": "owner", "createdAt": "2024-01-01T00:00:00Z"},
  {"id": "bob", "role": "editor", "createdAt": "2024-02-01T00:00:00Z"},
  {"id": "aaron", "role": "viewer", "createdAt": "2024-04-01T00:00:00Z"}
]"#;

/// Two switches in different racks, leaf01 with BGP filters on one port.
pub const SWITCHES: &str = r#"[
  {
    "id": "leaf02",
    "partition": "fra-equ01",
    "rack": "rack-2",
    "os": {"vendor": "cumulus", "version": "3.7.13"},
    "nics": [{"name": "swp1", "identifier": "swp1"}],
    "machineConnections": [{"machineId": "m-3", "nic": {"name": "swp1"}}]
  },
  {
    "id": "leaf01",
    "partition": "fra-equ01",
    "rack": "rack-1",
    "os": {"vendor": "sonic", "version": "202211"},
    "nics": [
      {"name": "Ethernet0", "identifier": "Eth1/1",
       "bgpFilter": {"cidrs": ["10.0.4.0/22", "10.0.8.0/22"], "vnis": ["104"]}},
      {"name": "Ethernet4", "identifier": "Eth1/2"}
    ],
    "machineConnections": [
      {"machineId": "m-1", "nic": {"name": "Ethernet0"}},
      {"machineId": "m-2", "nic": {"name": "Ethernet4"}}
    ]
  }
]"#;

pub const CAPACITIES: &str = r#"[
  {
    "partition": "fra-equ02",
    "machineSizeCapacities": [
      {"size": "n1-medium-x86", "total": 4, "free": 2, "allocated": 2}
    ]
  },
  {
    "partition": "fra-equ01",
    "machineSizeCapacities": [
      {"size": "c1-large-x86", "total": 10, "free": 3, "allocated": 6, "faulty": 1},
      {"size": "n1-medium-x86", "total": 2, "free": 2}
    ]
  }
]"#;

pub const HEALTH: &str = r#"
services:
  - name: masterdata
    status: healthy
  - name: ipam
    status: degraded
    message: slow responses
    partitions:
      fra-equ02:
        status: unhealthy
        message: connection refused
      fra-equ01:
        status: healthy
"#;

/// Config with two contexts, `dev` active.
pub const CONTEXT_CONFIG: &str = r#"current_context = "dev"

[[contexts]]
name = "prod"
api_url = "https://api.metal.example.com"
default_project = "p-prod"

[[contexts]]
name = "dev"
api_url = "https://api.dev.metal.example.com"
default_project = "p-dev"
"#;

pub const IMAGES: &str = r#"[
  {"id": "ubuntu-24.04", "name": "Ubuntu 24.04", "features": ["machine"], "classification": "supported"},
  {"id": "firewall-3.0", "features": ["firewall"], "classification": "deprecated", "expiresAt": "2024-07-01T00:00:00Z"},
  {"id": "debian-12", "features": ["machine"], "classification": "preview"}
]"#;

/// Tasks with time based ids, issued 12:00, 09:30 and 11:58 on 2024-06-15.
pub const TASKS: &str = r#"[
  {"id": "ca93e000-2b0e-11ef-8000-000000000000", "queue": "default", "type": "machine:delete", "state": "active"},
  {"id": "d628dc00-2af9-11ef-8000-000000000000", "queue": "default", "type": "ip:delete", "state": "completed"},
  {"id": "830d5400-2b0e-11ef-8000-000000000000", "queue": "critical", "type": "network:delete", "state": "retry"}
]"#;

pub const VPN_NODES: &str = r#"[
  {"id": 10, "name": "m-b", "project": "p-2", "ipAddresses": ["100.64.0.10"]},
  {"id": 9, "name": "fw-a", "project": "p-1", "ipAddresses": ["100.64.0.9"], "lastSeen": "2024-06-15T11:00:00Z"},
  {"id": "100", "name": "m-a", "project": "p-1"}
]"#;
