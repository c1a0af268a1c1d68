/// An analyst who cleared the streak threshold, with the team and product
/// taken from the last row seen for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibleAnalyst {
    pub analyst: String,
    pub team: Option<String>,
    pub product: Option<String>,
}
