/// Longest run of consecutive qualifying workdays for one eligible analyst.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalystStreak {
    pub analyst: String,
    pub max_consecutive_days: u32,
}
