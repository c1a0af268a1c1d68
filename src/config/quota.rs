//! Per-product monitoria quotas.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuota {
    pub product: String,
    pub quota: u32,
}

/// Ordered quota table. Order decides the order allocation records come out in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuotaTable(Vec<ProductQuota>);

impl QuotaTable {
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(product, quota)| ProductQuota {
                    product: product.to_string(),
                    quota,
                })
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductQuota> {
        self.0.iter()
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|q| u64::from(q.quota)).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Product names listed more than once, in first-duplicate order.
    pub fn duplicates(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut dups = Vec::new();
        for q in &self.0 {
            if !seen.insert(q.product.as_str()) && !dups.contains(&q.product) {
                dups.push(q.product.clone());
            }
        }
        dups
    }
}

impl Default for QuotaTable {
    fn default() -> Self {
        Self::from_pairs([
            ("Auto", 20),
            ("Check", 640),
            ("Doc", 20),
            ("ID Pay", 50),
            ("ID Unico", 20),
            ("IDCloud", 20),
            ("B2C", 30),
            ("Privacidade", 0),
            ("Institucional", 0),
        ])
    }
}
