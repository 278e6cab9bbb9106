use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Target state for arming the panel. Serializes to the API's wire form,
/// e.g. `ARMED_HOME`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArmLevel {
    ArmedHome,
    ArmedAway,
    Disarmed,
}

impl Display for ArmLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ArmLevel::ArmedHome => write!(f, "ARMED_HOME"),
            ArmLevel::ArmedAway => write!(f, "ARMED_AWAY"),
            ArmLevel::Disarmed => write!(f, "DISARMED"),
        }
    }
}
