//! Pan/tilt/zoom motion commands

use serde_json::Value as JsonValue;

use crate::coerce::Options;
use crate::error::{ApiError, Result};
use crate::FoscamClient;

/// Motion commands that take no options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PtzCommand {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    MoveTopLeft,
    MoveTopRight,
    MoveBottomLeft,
    MoveBottomRight,
    /// Stop any motion in progress
    Stop,
    /// Return to the home position
    Reset,
}

impl PtzCommand {
    /// CGI command name
    pub fn cmd(&self) -> &'static str {
        match self {
            PtzCommand::MoveUp => "ptzMoveUp",
            PtzCommand::MoveDown => "ptzMoveDown",
            PtzCommand::MoveLeft => "ptzMoveLeft",
            PtzCommand::MoveRight => "ptzMoveRight",
            PtzCommand::MoveTopLeft => "ptzMoveTopLeft",
            PtzCommand::MoveTopRight => "ptzMoveTopRight",
            PtzCommand::MoveBottomLeft => "ptzMoveBottomLeft",
            PtzCommand::MoveBottomRight => "ptzMoveBottomRight",
            PtzCommand::Stop => "ptzStopRun",
            PtzCommand::Reset => "ptzReset",
        }
    }
}

impl FoscamClient {
    pub fn ptz(&self, command: PtzCommand) -> Result<()> {
        self.execute(command.cmd(), &Options::new())?;
        Ok(())
    }

    /// Move to a stored preset position
    pub fn ptz_goto_preset(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(ApiError::InvalidParameter("preset name must not be empty".to_string()));
        }
        let mut options = Options::new();
        options.insert("name".to_string(), JsonValue::String(name.to_string()));
        self.execute("ptzGotoPresetPoint", &options)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FoscamConfig;

    #[test]
    fn test_command_names() {
        assert_eq!(PtzCommand::MoveUp.cmd(), "ptzMoveUp");
        assert_eq!(PtzCommand::Stop.cmd(), "ptzStopRun");
        assert_eq!(PtzCommand::Reset.cmd(), "ptzReset");
    }

    #[test]
    fn test_goto_preset_rejects_empty_name() {
        let client = FoscamClient::new(FoscamConfig::new("192.168.1.50")).unwrap();
        assert!(matches!(
            client.ptz_goto_preset(""),
            Err(ApiError::InvalidParameter(_))
        ));
    }
}
