use crate::input::Household;
use crate::savings::Savings;
use serde::Serialize;

/// Body of a report request as posted to the delivery service, pairing the
/// calculated savings with the household they were calculated for.
#[derive(Debug, Serialize)]
pub struct ReportPayload<'a> {
    pub email: &'a str,
    pub savings: &'a Savings,
    pub household: &'a Household,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Region;
    use crate::savings::calculate_savings;
    use rstest::rstest;

    #[rstest]
    fn should_serialize_the_report_body_in_posting_order() {
        let household = Household::default_for(Region::NewSouthWales);
        let savings = calculate_savings(&household).unwrap();
        let payload = ReportPayload {
            email: "jo@example.com",
            savings: &savings,
            household: &household,
        };

        let json = serde_json::to_string(&payload).unwrap();

        assert!(json.starts_with("{\"email\":\"jo@example.com\",\"savings\":{"));
        assert!(json.contains("\"household\":{\"location\":\"NEW_SOUTH_WALES\""));
    }
}
