use super::args::{
    AdminCommand, Cli, Commands, ContextCommand, EntityCommand, IpCommand, MachineCommand,
    MembershipCommand, NetworkCommand, PartitionAdminCommand, ProjectCommand,
    SwitchAdminCommand, TaskAdminCommand, TenantCommand, VpnAdminCommand,
};
use super::context::ExecutionContext;
use super::handlers::{self, partition::CapacityFilter};
use super::logging;
use crate::presentation::Renderable;
use anyhow::Result;
use metalctl_engine::Sortable;
use metalctl_types::{
    Image, Ip, Machine, Network, Partition, Project, ProjectInvite, ProjectMember, Size, Switch,
    TaskInfo, Tenant, TenantInvite, TenantMember, Token, VpnNode,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level, cli.debug);
    let ctx = ExecutionContext::from_cli(&cli)?;
    tracing::debug!(config = %ctx.config_path().display(), "resolved config path");

    match cli.command {
        Commands::Context { command } => match command {
            ContextCommand::List => handlers::context::list(&ctx),
            ContextCommand::Switch { name } => handlers::context::switch(&ctx, &name),
            ContextCommand::Show => handlers::context::show(&ctx),
        },

        Commands::Health { source } => handlers::health::handle(&ctx, &source),

        Commands::Image { command } => entity::<Image>(&ctx, command),

        Commands::Ip { command } => match command {
            IpCommand::List { list, filter } => handlers::list::<Ip, _>(&ctx, &list, &filter),
            IpCommand::Describe(args) => handlers::describe::<Ip>(&ctx, &args),
        },

        Commands::Machine { command } => match command {
            MachineCommand::List { list, filter } => {
                handlers::list::<Machine, _>(&ctx, &list, &filter)
            }
            MachineCommand::Describe(args) => handlers::describe::<Machine>(&ctx, &args),
        },

        Commands::Network { command } => match command {
            NetworkCommand::List { list, filter } => {
                handlers::list::<Network, _>(&ctx, &list, &filter)
            }
            NetworkCommand::Describe(args) => handlers::describe::<Network>(&ctx, &args),
        },

        Commands::Partition { command } => entity::<Partition>(&ctx, command),

        Commands::Project { command } => match command {
            ProjectCommand::List { list, filter } => {
                handlers::list::<Project, _>(&ctx, &list, &filter)
            }
            ProjectCommand::Describe(args) => handlers::describe::<Project>(&ctx, &args),
            ProjectCommand::Invite { command } => membership::<ProjectInvite>(&ctx, command),
            ProjectCommand::Member { command } => membership::<ProjectMember>(&ctx, command),
        },

        Commands::Tenant { command } => match command {
            TenantCommand::List(list) => handlers::list::<Tenant, _>(&ctx, &list, &()),
            TenantCommand::Describe(args) => handlers::describe::<Tenant>(&ctx, &args),
            TenantCommand::Invite { command } => membership::<TenantInvite>(&ctx, command),
            TenantCommand::Member { command } => membership::<TenantMember>(&ctx, command),
        },

        Commands::Token { command } => entity::<Token>(&ctx, command),

        Commands::Size { command } => entity::<Size>(&ctx, command),

        Commands::Admin { command } => match command {
            AdminCommand::Switch { command } => match command {
                SwitchAdminCommand::List { list, filter } => {
                    handlers::list::<Switch, _>(&ctx, &list, &filter)
                }
                SwitchAdminCommand::Describe(args) => handlers::describe::<Switch>(&ctx, &args),
                SwitchAdminCommand::ConnectedMachines { source, filter } => {
                    handlers::switch::connected_machines(&ctx, &source, &filter)
                }
                SwitchAdminCommand::Detail { list, filter } => {
                    handlers::switch::detail(&ctx, &list, &filter)
                }
            },
            AdminCommand::Partition { command } => match command {
                PartitionAdminCommand::Capacity { list, id, size } => {
                    handlers::partition::capacity(&ctx, &list, &CapacityFilter { id, size })
                }
            },
            AdminCommand::Task { command } => match command {
                TaskAdminCommand::List { list, filter } => {
                    handlers::list::<TaskInfo, _>(&ctx, &list, &filter)
                }
                TaskAdminCommand::Describe(args) => handlers::describe::<TaskInfo>(&ctx, &args),
                TaskAdminCommand::Queues { source } => handlers::task::queues(&source),
            },
            AdminCommand::Vpn { command } => match command {
                VpnAdminCommand::List { list, filter } => {
                    handlers::list::<VpnNode, _>(&ctx, &list, &filter)
                }
            },
        },
    }
}

/// `list` and `describe` of entities without filter flags.
fn entity<T>(ctx: &ExecutionContext, command: EntityCommand) -> Result<()>
where
    T: Sortable + Renderable + Serialize + DeserializeOwned,
{
    match command {
        EntityCommand::List(list) => handlers::list::<T, _>(ctx, &list, &()),
        EntityCommand::Describe(args) => handlers::describe::<T>(ctx, &args),
    }
}

fn membership<T>(ctx: &ExecutionContext, command: MembershipCommand) -> Result<()>
where
    T: Sortable + Renderable + Serialize + DeserializeOwned,
{
    match command {
        MembershipCommand::List(list) => handlers::list::<T, _>(ctx, &list, &()),
    }
}
