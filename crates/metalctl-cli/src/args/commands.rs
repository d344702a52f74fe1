use super::common::{
    DescribeArgs, FileArgs, IpFilter, ListArgs, MachineFilter, NetworkFilter, ProjectFilter,
    SwitchFilter, TaskFilter, VpnFilter,
};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Manage the API contexts of this client")]
    Context {
        #[command(subcommand)]
        command: ContextCommand,
    },

    #[command(about = "Show the health of the API and its services")]
    Health {
        #[command(flatten)]
        source: FileArgs,
    },

    #[command(about = "Show the images machines and firewalls are installed with")]
    Image {
        #[command(subcommand)]
        command: EntityCommand,
    },

    #[command(about = "Show IP addresses")]
    Ip {
        #[command(subcommand)]
        command: IpCommand,
    },

    #[command(about = "Show machines")]
    Machine {
        #[command(subcommand)]
        command: MachineCommand,
    },

    #[command(about = "Show networks")]
    Network {
        #[command(subcommand)]
        command: NetworkCommand,
    },

    #[command(about = "Show partitions")]
    Partition {
        #[command(subcommand)]
        command: EntityCommand,
    },

    #[command(about = "Show projects, their invites and members")]
    Project {
        #[command(subcommand)]
        command: ProjectCommand,
    },

    #[command(about = "Show tenants, their invites and members")]
    Tenant {
        #[command(subcommand)]
        command: TenantCommand,
    },

    #[command(about = "Show API tokens")]
    Token {
        #[command(subcommand)]
        command: EntityCommand,
    },

    #[command(about = "Show machine sizes")]
    Size {
        #[command(subcommand)]
        command: EntityCommand,
    },

    #[command(about = "Administrative views")]
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
}

/// `list` and `describe` for entities without extra filters.
#[derive(Subcommand)]
pub enum EntityCommand {
    #[command(about = "List all entities of the document")]
    List(ListArgs),

    #[command(about = "Describe one entity by id")]
    Describe(DescribeArgs),
}

#[derive(Subcommand)]
pub enum ContextCommand {
    #[command(about = "List all configured contexts")]
    List,

    #[command(about = "Make another context the active one")]
    Switch {
        #[arg(help = "Name of the context to activate")]
        name: String,
    },

    #[command(about = "Show the active context")]
    Show,
}

#[derive(Subcommand)]
pub enum IpCommand {
    #[command(about = "List IP addresses")]
    List {
        #[command(flatten)]
        list: ListArgs,

        #[command(flatten)]
        filter: IpFilter,
    },

    #[command(about = "Describe an IP address")]
    Describe(DescribeArgs),
}

#[derive(Subcommand)]
pub enum MachineCommand {
    #[command(about = "List machines")]
    List {
        #[command(flatten)]
        list: ListArgs,

        #[command(flatten)]
        filter: MachineFilter,
    },

    #[command(about = "Describe a machine")]
    Describe(DescribeArgs),
}

#[derive(Subcommand)]
pub enum NetworkCommand {
    #[command(about = "List networks, child networks grouped below their parent")]
    List {
        #[command(flatten)]
        list: ListArgs,

        #[command(flatten)]
        filter: NetworkFilter,
    },

    #[command(about = "Describe a network")]
    Describe(DescribeArgs),
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    #[command(about = "List projects")]
    List {
        #[command(flatten)]
        list: ListArgs,

        #[command(flatten)]
        filter: ProjectFilter,
    },

    #[command(about = "Describe a project")]
    Describe(DescribeArgs),

    #[command(about = "Show pending project invites")]
    Invite {
        #[command(subcommand)]
        command: MembershipCommand,
    },

    #[command(about = "Show project members")]
    Member {
        #[command(subcommand)]
        command: MembershipCommand,
    },
}

#[derive(Subcommand)]
pub enum TenantCommand {
    #[command(about = "List tenants")]
    List(ListArgs),

    #[command(about = "Describe a tenant")]
    Describe(DescribeArgs),

    #[command(about = "Show pending tenant invites")]
    Invite {
        #[command(subcommand)]
        command: MembershipCommand,
    },

    #[command(about = "Show tenant members")]
    Member {
        #[command(subcommand)]
        command: MembershipCommand,
    },
}

#[derive(Subcommand)]
pub enum MembershipCommand {
    #[command(about = "List entries")]
    List(ListArgs),
}

#[derive(Subcommand)]
pub enum AdminCommand {
    #[command(about = "Inspect switches")]
    Switch {
        #[command(subcommand)]
        command: SwitchAdminCommand,
    },

    #[command(about = "Inspect partitions")]
    Partition {
        #[command(subcommand)]
        command: PartitionAdminCommand,
    },

    #[command(about = "Get insights into background tasks")]
    Task {
        #[command(subcommand)]
        command: TaskAdminCommand,
    },

    #[command(about = "List the nodes connected to the VPN")]
    Vpn {
        #[command(subcommand)]
        command: VpnAdminCommand,
    },
}

#[derive(Subcommand)]
pub enum SwitchAdminCommand {
    #[command(about = "List switches with their sync status")]
    List {
        #[command(flatten)]
        list: ListArgs,

        #[command(flatten)]
        filter: SwitchFilter,
    },

    #[command(about = "Describe a switch")]
    Describe(DescribeArgs),

    #[command(about = "List switches with the machines connected to their ports")]
    ConnectedMachines {
        #[command(flatten)]
        source: FileArgs,

        #[command(flatten)]
        filter: SwitchFilter,
    },

    #[command(about = "Show the BGP filters of every switch port")]
    Detail {
        #[command(flatten)]
        list: ListArgs,

        #[command(flatten)]
        filter: SwitchFilter,
    },
}

#[derive(Subcommand)]
pub enum PartitionAdminCommand {
    #[command(about = "Show the machine capacity of partitions")]
    Capacity {
        #[command(flatten)]
        list: ListArgs,

        #[arg(long, help = "Only this partition")]
        id: Option<String>,

        #[arg(long, help = "Only this size")]
        size: Option<String>,
    },
}


#[derive(Subcommand)]
pub enum TaskAdminCommand {
    #[command(about = "List tasks")]
    List {
        #[command(flatten)]
        list: ListArgs,

        #[command(flatten)]
        filter: TaskFilter,
    },

    #[command(about = "Describe a task")]
    Describe(DescribeArgs),

    #[command(about = "List the queues tasks are in")]
    Queues {
        #[command(flatten)]
        source: FileArgs,
    },
}

#[derive(Subcommand)]
pub enum VpnAdminCommand {
    #[command(about = "List VPN nodes")]
    List {
        #[command(flatten)]
        list: ListArgs,

        #[command(flatten)]
        filter: VpnFilter,
    },
}
