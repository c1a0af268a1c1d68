//! Maps raw export rows onto `Attendance` records.
//!
//! Exports from different months spell the same column differently
//! ("SUB OPERAÇÃO", "SUB OPERACÃO", "SubOperacao"), so every logical field is
//! looked up through an ordered list of aliases. Headers are compared after
//! folding case, accents and whitespace.

use crate::models::attendance::Attendance;
use crate::models::raw_record::RawRecord;
use crate::utils::date::CalendarDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAliases {
    #[serde(default = "default_name")]
    pub name: Vec<String>,
    #[serde(default = "default_date")]
    pub date: Vec<String>,
    #[serde(default = "default_status")]
    pub status: Vec<String>,
    #[serde(default = "default_team")]
    pub team: Vec<String>,
    #[serde(default = "default_product")]
    pub product: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
fn default_name() -> Vec<String> {
    strings(&["NOME", "ANALISTA", "NALISTA"])
}
fn default_date() -> Vec<String> {
    strings(&["DATA"])
}
fn default_status() -> Vec<String> {
    strings(&["ESCALA"])
}
fn default_team() -> Vec<String> {
    strings(&["SUB OPERACÃO", "SUB OPERAÇÃO", "SubOperacao"])
}
fn default_product() -> Vec<String> {
    strings(&["PRODUTO", "ProdutoPrincipal"])
}

impl Default for ColumnAliases {
    fn default() -> Self {
        Self {
            name: default_name(),
            date: default_date(),
            status: default_status(),
            team: default_team(),
            product: default_product(),
        }
    }
}

impl ColumnAliases {
    /// `(field, aliases)` for every logical field, used by config checks.
    pub fn fields(&self) -> [(&'static str, &[String]); 5] {
        [
            ("name", self.name.as_slice()),
            ("date", self.date.as_slice()),
            ("status", self.status.as_slice()),
            ("team", self.team.as_slice()),
            ("product", self.product.as_slice()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    MissingName,
    MissingDate,
    UnparseableDate(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Accepted(Attendance),
    Rejected(RejectReason),
}

/// Row counts for one normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub total_rows: usize,
    pub accepted: usize,
    pub missing_name: usize,
    pub missing_date: usize,
    pub unparseable_date: usize,
}

impl IngestStats {
    pub fn rejected(&self) -> usize {
        self.missing_name + self.missing_date + self.unparseable_date
    }
}

/// Fold a header for comparison: lowercase, no whitespace, no accents.
/// Decomposed accents (`c` + U+0327) fold too, by dropping the combining mark.
pub fn fold_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .chars()
        .filter(|c| !c.is_whitespace() && !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(fold_accent)
        .collect()
}

fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036f}')
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}

/// First non-empty value among the aliases, in alias order.
/// An exact header match is tried before the folded comparison.
pub fn lookup<'a>(row: &'a RawRecord, aliases: &[String]) -> Option<&'a str> {
    for alias in aliases {
        if let Some(v) = row.get(alias).map(str::trim)
            && !v.is_empty()
        {
            return Some(v);
        }

        let wanted = fold_header(alias);
        let found = row
            .fields()
            .filter(|(h, _)| fold_header(h) == wanted)
            .map(|(_, v)| v.trim())
            .find(|v| !v.is_empty());

        if found.is_some() {
            return found;
        }
    }
    None
}

pub fn normalize(row: &RawRecord, aliases: &ColumnAliases) -> Normalized {
    let Some(analyst) = lookup(row, &aliases.name) else {
        return Normalized::Rejected(RejectReason::MissingName);
    };

    let Some(raw_date) = lookup(row, &aliases.date) else {
        return Normalized::Rejected(RejectReason::MissingDate);
    };

    let Some(date) = CalendarDate::parse(raw_date) else {
        return Normalized::Rejected(RejectReason::UnparseableDate(raw_date.to_string()));
    };

    Normalized::Accepted(Attendance {
        analyst: analyst.to_string(),
        date,
        status: lookup(row, &aliases.status).unwrap_or_default().to_string(),
        team: lookup(row, &aliases.team).map(str::to_string),
        product: lookup(row, &aliases.product).map(str::to_string),
    })
}

/// Normalize a whole batch, keeping accepted rows in input order.
pub fn normalize_all(rows: &[RawRecord], aliases: &ColumnAliases) -> (Vec<Attendance>, IngestStats) {
    let mut stats = IngestStats {
        total_rows: rows.len(),
        ..Default::default()
    };
    let mut out = Vec::with_capacity(rows.len());

    for (idx, row) in rows.iter().enumerate() {
        match normalize(row, aliases) {
            Normalized::Accepted(rec) => out.push(rec),
            Normalized::Rejected(reason) => {
                tracing::debug!(row = idx + 1, ?reason, "skipping row");
                match reason {
                    RejectReason::MissingName => stats.missing_name += 1,
                    RejectReason::MissingDate => stats.missing_date += 1,
                    RejectReason::UnparseableDate(_) => stats.unparseable_date += 1,
                }
            }
        }
    }

    stats.accepted = out.len();
    (out, stats)
}
