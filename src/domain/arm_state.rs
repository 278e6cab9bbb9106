use serde::Deserialize;
use serde_json::{Map, Value};

/// Panel status as reported by the arm state endpoint. The report time is
/// normalized to ISO-8601 before a value reaches the caller; every other
/// field is passed through untouched.
#[derive(Debug, Deserialize, PartialEq)]
pub struct ArmState {
    #[serde(rename = "timeex")]
    pub time: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn retains_fields_next_to_the_report_time() {
        let state = serde_json::from_value::<ArmState>(json!({
            "timeex": "Today 07:12",
            "statusType": "ARMED_HOME",
            "changedBy": "Kim",
        }))
        .unwrap();

        assert_eq!(state.time, "Today 07:12");
        assert_eq!(state.fields["statusType"], json!("ARMED_HOME"));
        assert_eq!(state.fields["changedBy"], json!("Kim"));
    }
}
