//! Summary and detail views over allocation results.

use crate::models::allocation::AllocationRecord;
use crate::models::streak::AnalystStreak;
use crate::utils::table::{Column, Table};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSummary {
    pub team: String,
    /// `(product, assigned)` in first-seen order
    pub products: Vec<(String, u64)>,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub teams: Vec<TeamSummary>,
    pub grand_total: u64,
}

/// Group allocations per team (sub-operation), then per product.
/// Records without a team are not part of the summary.
pub fn summarize_by_team(records: &[AllocationRecord]) -> Summary {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summary = Summary::default();

    for rec in records {
        let Some(team) = rec.team.as_deref() else {
            continue;
        };

        let slot = *index.entry(team).or_insert_with(|| {
            summary.teams.push(TeamSummary {
                team: team.to_string(),
                products: Vec::new(),
                total: 0,
            });
            summary.teams.len() - 1
        });

        let ts = &mut summary.teams[slot];
        let assigned = u64::from(rec.assigned);
        match ts.products.iter_mut().find(|(p, _)| *p == rec.product) {
            Some((_, n)) => *n += assigned,
            None => ts.products.push((rec.product.clone(), assigned)),
        }
        ts.total += assigned;
        summary.grand_total += assigned;
    }

    summary
}

/// Allocations ordered by team, then analyst name. Missing teams sort first.
pub fn detail_rows(records: &[AllocationRecord]) -> Vec<AllocationRecord> {
    let mut rows = records.to_vec();
    rows.sort_by(|a, b| {
        a.team
            .as_deref()
            .unwrap_or("")
            .cmp(b.team.as_deref().unwrap_or(""))
            .then_with(|| a.analyst.cmp(&b.analyst))
    });
    rows
}

pub fn sorted_streaks(streaks: &[AnalystStreak]) -> Vec<AnalystStreak> {
    let mut v = streaks.to_vec();
    v.sort_by(|a, b| a.analyst.cmp(&b.analyst));
    v
}

pub fn render_streaks(streaks: &[AnalystStreak]) -> String {
    let mut table = Table::new(vec![
        Column::new("Eligible analyst"),
        Column::new("Max consecutive days"),
    ]);
    for s in sorted_streaks(streaks) {
        table.add_row(vec![s.analyst, s.max_consecutive_days.to_string()]);
    }
    table.render()
}

pub fn render_summary(summary: &Summary) -> String {
    let mut table = Table::new(vec![
        Column::new("Team"),
        Column::new("Product"),
        Column::new("Monitorias"),
    ]);

    for ts in &summary.teams {
        for (i, (product, n)) in ts.products.iter().enumerate() {
            let team = if i == 0 { ts.team.clone() } else { String::new() };
            table.add_row(vec![team, product.clone(), n.to_string()]);
        }
        table.add_row(vec![
            format!("Total {}", ts.team),
            String::new(),
            ts.total.to_string(),
        ]);
    }

    table.add_row(vec![
        "TOTAL DISTRIBUTED".to_string(),
        String::new(),
        summary.grand_total.to_string(),
    ]);

    table.render()
}

pub fn render_detail(records: &[AllocationRecord]) -> String {
    let mut table = Table::new(vec![
        Column::new("Analyst"),
        Column::new("Team"),
        Column::new("Product"),
        Column::new("Monitorias"),
    ]);

    for r in detail_rows(records) {
        table.add_row(vec![
            r.analyst,
            r.team.unwrap_or_else(|| "N/A".to_string()),
            r.product,
            r.assigned.to_string(),
        ]);
    }

    table.render()
}
