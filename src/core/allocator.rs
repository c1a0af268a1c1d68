//! Largest-remainder distribution of per-product quotas.

use crate::config::QuotaTable;
use crate::models::allocation::{Allocation, AllocationRecord, UnallocatedQuota};
use crate::models::eligible::EligibleAnalyst;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocationOptions {
    /// Emit records with `assigned == 0` (quota smaller than the analyst count).
    pub keep_zero: bool,
}

/// `(base, remainder)` for splitting `quota` across `n` parties.
pub fn split(quota: u32, n: usize) -> (u32, usize) {
    if n == 0 {
        return (0, 0);
    }
    let (quota, n) = (u64::from(quota), n as u64);
    ((quota / n) as u32, (quota % n) as usize)
}

/// Distribute every product's quota across the analysts mapped to it.
///
/// Products are visited in quota-table order. Within a product the first
/// `remainder` analysts, in projector order, receive one extra unit, so the
/// records of a product always add up to its quota.
pub fn allocate(
    analysts: &[EligibleAnalyst],
    quotas: &QuotaTable,
    opts: AllocationOptions,
) -> Allocation {
    let mut result = Allocation::default();

    for pq in quotas.iter() {
        if pq.quota == 0 {
            continue;
        }

        let members: Vec<&EligibleAnalyst> = analysts
            .iter()
            .filter(|a| a.product.as_deref() == Some(pq.product.as_str()))
            .collect();

        if members.is_empty() {
            tracing::debug!(product = %pq.product, quota = pq.quota, "no analysts for product");
            result.unallocated.push(UnallocatedQuota {
                product: pq.product.clone(),
                quota: pq.quota,
            });
            continue;
        }

        let (base, remainder) = split(pq.quota, members.len());

        for (i, analyst) in members.iter().enumerate() {
            let assigned = base + u32::from(i < remainder);
            if assigned == 0 && !opts.keep_zero {
                continue;
            }
            result.records.push(AllocationRecord {
                analyst: analyst.analyst.clone(),
                team: analyst.team.clone(),
                product: pq.product.clone(),
                assigned,
            });
        }
    }

    result
}
