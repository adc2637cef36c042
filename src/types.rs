//! Nested value and record objects shared by requests and responses.
//!
//! Grouped by the part of the API they configure:
//! - launch: launch configurations, templates and block devices.
//! - group: the Auto Scaling group itself and its instances.
//! - scaling: policies, alarms, metrics and scaling activities.
//! - lifecycle: lifecycle hooks.
//! - refresh: instance refresh operations.

pub mod group;
pub mod launch;
pub mod lifecycle;
pub mod refresh;
pub mod scaling;

pub use group::*;
pub use launch::*;
pub use lifecycle::*;
pub use refresh::*;
pub use scaling::*;
