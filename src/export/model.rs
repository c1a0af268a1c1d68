// src/export/model.rs

use crate::models::allocation::AllocationRecord;
use crate::models::streak::AnalystStreak;
use serde::Serialize;

/// Flat allocation row for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AllocationExport {
    pub analyst: String,
    pub team: String,
    pub product: String,
    pub monitorias: u32,
}

impl From<&AllocationRecord> for AllocationExport {
    fn from(r: &AllocationRecord) -> Self {
        Self {
            analyst: r.analyst.clone(),
            team: r.team.clone().unwrap_or_default(),
            product: r.product.clone(),
            monitorias: r.assigned,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct StreakExport {
    pub analyst: String,
    pub max_consecutive_days: u32,
}

impl From<&AnalystStreak> for StreakExport {
    fn from(s: &AnalystStreak) -> Self {
        Self {
            analyst: s.analyst.clone(),
            max_consecutive_days: s.max_consecutive_days,
        }
    }
}
