//! Device identity and status (`getDevInfo`, `getDevState`)

use foscam_parser::numeric::format_number;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::coerce::Options;
use crate::error::Result;
use crate::FoscamClient;

/// Identity of a camera as reported by `getDevInfo`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceInfo {
    #[serde(deserialize_with = "text_or_number")]
    pub product_name: String,
    #[serde(deserialize_with = "text_or_number")]
    pub serial_no: String,
    #[serde(deserialize_with = "text_or_number")]
    pub dev_name: String,
    #[serde(deserialize_with = "text_or_number")]
    pub mac: String,
    #[serde(deserialize_with = "text_or_number")]
    pub firmware_ver: String,
    #[serde(deserialize_with = "text_or_number")]
    pub hardware_ver: String,
}

/// Accept a text field that normalization may have turned into a number.
///
/// An all-digit MAC address such as `999999999999` round-trips as a number;
/// printing it canonically recovers the original text.
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match JsonValue::deserialize(deserializer)? {
        JsonValue::String(text) => Ok(text),
        JsonValue::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Ok(i.to_string()),
            (None, Some(f)) => Ok(format_number(f)),
            _ => Ok(n.to_string()),
        },
        JsonValue::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!("expected text, found {}", other))),
    }
}

impl FoscamClient {
    pub fn get_dev_info(&self) -> Result<DeviceInfo> {
        let fields = self.execute("getDevInfo", &Options::new())?;
        Ok(serde_json::from_value(JsonValue::Object(fields))?)
    }

    /// Raw status fields of `getDevState` (alarm, record, SD card, IR state and so on)
    pub fn get_dev_state(&self) -> Result<Options> {
        self.execute("getDevState", &Options::new())
    }
}
