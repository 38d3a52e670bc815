//! Typed wrappers around individual CGI commands
//!
//! Each submodule adds methods to [`crate::FoscamClient`] and defines the
//! request/response types for a group of commands.

pub mod device;
pub mod osd;
pub mod ptz;

pub use device::DeviceInfo;
pub use osd::OsdSetting;
pub use ptz::PtzCommand;
