use crate::utils::date::CalendarDate;

/// A normalized attendance event.
/// `analyst` is never empty; rows without a name or a valid date never get here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendance {
    pub analyst: String,
    pub date: CalendarDate,
    pub status: String,
    pub team: Option<String>,
    pub product: Option<String>,
}

impl Attendance {
    pub fn new(analyst: impl Into<String>, date: CalendarDate, status: impl Into<String>) -> Self {
        Self {
            analyst: analyst.into(),
            date,
            status: status.into(),
            team: None,
            product: None,
        }
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }
}
