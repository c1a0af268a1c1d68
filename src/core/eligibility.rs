//! Reduces attendance rows to one team/product entry per eligible analyst.

use crate::models::attendance::Attendance;
use crate::models::eligible::EligibleAnalyst;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Where an analyst's product comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ProductSource {
    /// Classify the sub-operation label
    #[default]
    SubOperation,
    /// Use the product column verbatim
    ProductColumn,
}

impl ProductSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductSource::SubOperation => "sub_operation",
            ProductSource::ProductColumn => "product_column",
        }
    }
}

/// Substring rules, checked in order. First match wins.
const TEAM_RULES: &[(&[&str], &str)] = &[
    (&["auto"], "Auto"),
    (&["safedoc"], "Doc"),
    (&["id - n1", "id - n2"], "Check"),
    (&["special channels", "institucional"], "Institucional"),
    (&["b2c"], "B2C"),
];

/// Map a free-text sub-operation label to a product tag.
pub fn classify_team(label: &str) -> Option<&'static str> {
    let label = label.to_lowercase();
    TEAM_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| label.contains(n)))
        .map(|(_, product)| *product)
}

pub fn resolve_product(rec: &Attendance, source: ProductSource) -> Option<String> {
    match source {
        ProductSource::SubOperation => rec
            .team
            .as_deref()
            .and_then(classify_team)
            .map(str::to_string),
        ProductSource::ProductColumn => rec.product.clone(),
    }
}

/// One entry per eligible analyst.
///
/// Every matching row overwrites the analyst's entry, so team and product come
/// from the LAST row in input order. The output keeps the order in which each
/// analyst was first seen; the allocator hands out remainders in that order.
pub fn project_eligible(
    records: &[Attendance],
    eligible: &HashSet<String>,
    source: ProductSource,
) -> Vec<EligibleAnalyst> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<EligibleAnalyst> = Vec::new();

    for rec in records.iter().filter(|r| eligible.contains(&r.analyst)) {
        let entry = EligibleAnalyst {
            analyst: rec.analyst.clone(),
            team: rec.team.clone(),
            product: resolve_product(rec, source),
        };

        match index.get(rec.analyst.as_str()) {
            Some(&slot) => out[slot] = entry,
            None => {
                index.insert(rec.analyst.as_str(), out.len());
                out.push(entry);
            }
        }
    }

    out
}
