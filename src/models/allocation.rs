/// Monitorias assigned to one analyst for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationRecord {
    pub analyst: String,
    pub team: Option<String>,
    pub product: String,
    pub assigned: u32,
}

/// Quota that could not be handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnallocatedQuota {
    pub product: String,
    pub quota: u32,
}

/// Allocator output: the records in emission order plus leftovers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocation {
    pub records: Vec<AllocationRecord>,
    pub unallocated: Vec<UnallocatedQuota>,
}

impl Allocation {
    /// Summed as `u64`: quotas come from user config and may add past `u32::MAX`.
    pub fn total_assigned(&self) -> u64 {
        self.records.iter().map(|r| u64::from(r.assigned)).sum()
    }

    pub fn assigned_for(&self, product: &str) -> u64 {
        self.records
            .iter()
            .filter(|r| r.product == product)
            .map(|r| u64::from(r.assigned))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
