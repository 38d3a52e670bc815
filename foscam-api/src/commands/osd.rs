//! On-screen display settings (`getOSDSetting` / `setOSDSetting`)

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::coerce::{decode_booleans, encode_booleans, Options};
use crate::error::{ApiError, Result};
use crate::FoscamClient;

/// Fields the device reports as `0`/`1`
const FLAG_FIELDS: [&str; 4] = [
    "isEnableTimeStamp",
    "isEnableTempAndHumid",
    "isEnableDevName",
    "isEnableOSDMask",
];

/// Overlay configuration of the video stream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsdSetting {
    pub is_enable_time_stamp: bool,
    pub is_enable_temp_and_humid: bool,
    pub is_enable_dev_name: bool,
    /// Overlay position, `0` top left, `1` top right, `2` bottom left, `3` bottom right
    pub disp_pos: i64,
    #[serde(rename = "isEnableOSDMask")]
    pub is_enable_osd_mask: bool,
}

impl OsdSetting {
    /// Decode the reply fields of `getOSDSetting`
    pub fn from_fields(mut fields: Options) -> Result<Self> {
        decode_booleans(&mut fields, &FLAG_FIELDS);
        Ok(serde_json::from_value(JsonValue::Object(fields))?)
    }

    /// Encode as `setOSDSetting` options
    pub fn to_options(&self) -> Result<Options> {
        let mut options = match serde_json::to_value(self)? {
            JsonValue::Object(map) => map,
            other => {
                return Err(ApiError::InvalidParameter(format!(
                    "OSD setting did not serialize to an object: {}",
                    other
                )))
            }
        };
        encode_booleans(&mut options);
        Ok(options)
    }
}

impl FoscamClient {
    pub fn get_osd_setting(&self) -> Result<OsdSetting> {
        let fields = self.execute("getOSDSetting", &Options::new())?;
        OsdSetting::from_fields(fields)
    }

    pub fn set_osd_setting(&self, setting: &OsdSetting) -> Result<()> {
        self.execute("setOSDSetting", &setting.to_options()?)?;
        Ok(())
    }
}
