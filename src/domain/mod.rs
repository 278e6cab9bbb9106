mod arm_level;
mod arm_state;
mod history;
mod temperature;

pub use arm_level::ArmLevel;
pub use arm_state::ArmState;
pub use history::HistoryEntry;
pub use temperature::TemperatureReading;

pub(crate) use history::History;
pub(crate) use temperature::Temperatures;
