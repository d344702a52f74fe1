use super::filters::Filter;
use crate::args::ListArgs;
use crate::context::ExecutionContext;
use anyhow::Result;
use metalctl_types::PartitionCapacity;

/// `--id` and `--size` of `admin partition capacity`.
pub struct CapacityFilter {
    pub id: Option<String>,
    pub size: Option<String>,
}

impl Filter<PartitionCapacity> for CapacityFilter {
    fn matches(&self, capacity: &PartitionCapacity) -> bool {
        self.id.as_deref().is_none_or(|id| id == capacity.partition)
    }
}

impl CapacityFilter {
    /// Drops the sizes not asked for; partitions without any left are dropped.
    fn narrow(&self, capacities: &mut Vec<PartitionCapacity>) {
        let Some(size) = &self.size else {
            return;
        };
        for capacity in capacities.iter_mut() {
            capacity.machine_size_capacities.retain(|c| &c.size == size);
        }
        capacities.retain(|c| !c.machine_size_capacities.is_empty());
    }
}

pub fn capacity(ctx: &ExecutionContext, args: &ListArgs, filter: &CapacityFilter) -> Result<()> {
    let mut capacities = super::load_sorted::<PartitionCapacity, _>(ctx, args, filter)?;
    filter.narrow(&mut capacities);
    ctx.printer(false)?.print_list(&capacities)
}
