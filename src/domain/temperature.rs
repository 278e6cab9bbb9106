use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub(crate) struct Temperatures {
    #[serde(rename = "temperatureComponentList")]
    pub readings: Vec<TemperatureReading>,
}

/// One temperature sensor reading, identified by the sensor's serial number.
#[derive(Debug, Deserialize, PartialEq)]
pub struct TemperatureReading {
    #[serde(rename = "serialNo")]
    pub serial_no: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
