use clap::Args;
use metalctl_engine::SortKey;
use std::path::PathBuf;

/// Where to read entities from.
#[derive(Debug, Clone, Args)]
pub struct FileArgs {
    #[arg(
        short,
        long,
        default_value = "-",
        help = "JSON or YAML document with the entities, - for stdin"
    )]
    pub file: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: FileArgs,

    #[arg(
        long = "sort-by",
        value_name = "KEY[:asc|:desc]",
        value_delimiter = ',',
        help = "Order by these keys, first difference wins (repeatable, comma separated)"
    )]
    pub sort_by: Vec<SortKey>,
}

#[derive(Debug, Clone, Args)]
pub struct DescribeArgs {
    #[arg(help = "Identifier of the entity")]
    pub id: String,

    #[command(flatten)]
    pub source: FileArgs,
}

#[derive(Debug, Clone, Default, Args)]
pub struct IpFilter {
    #[arg(long, help = "Only IPs of this project")]
    pub project: Option<String>,

    #[arg(long, help = "Only IPs of this network")]
    pub network: Option<String>,

    #[arg(long = "type", value_name = "TYPE", help = "Only IPs of this type (ephemeral, static)")]
    pub ip_type: Option<String>,

    #[arg(long, help = "Only IPs with this name")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct MachineFilter {
    #[arg(long, help = "Only machines in this partition")]
    pub partition: Option<String>,

    #[arg(long, help = "Only machines allocated to this project")]
    pub project: Option<String>,

    #[arg(long, help = "Only machines of this size")]
    pub size: Option<String>,

    #[arg(long, help = "Only machines in this rack")]
    pub rack: Option<String>,

    #[arg(long, help = "Only machines with this hostname")]
    pub hostname: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct NetworkFilter {
    #[arg(long, help = "Only networks in this partition")]
    pub partition: Option<String>,

    #[arg(long, help = "Only networks of this project")]
    pub project: Option<String>,

    #[arg(long, help = "Only networks with this name")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct SwitchFilter {
    #[arg(long, help = "Only switches in this partition")]
    pub partition: Option<String>,

    #[arg(long, help = "Only switches in this rack")]
    pub rack: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct TaskFilter {
    #[arg(long, help = "Only tasks of this queue")]
    pub queue: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct VpnFilter {
    #[arg(long, help = "Only nodes of this project")]
    pub project: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ProjectFilter {
    #[arg(long, help = "Only projects of this tenant")]
    pub tenant: Option<String>,

    #[arg(long, help = "Only projects with this name")]
    pub name: Option<String>,
}
