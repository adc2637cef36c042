//! Instance refresh: rolling replacement of a group's instances.

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display_json;
use crate::enums::InstanceRefreshStatus;

/// Knobs for how aggressively a refresh replaces instances.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct RefreshPreferences {
    /// Percentage of the group that must stay healthy during the
    /// refresh.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_healthy_percentage: Option<i32>,
    /// Seconds a fresh instance warms up before the next batch starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_warmup: Option<i32>,
}

/// Progress record of one instance refresh operation.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct InstanceRefresh {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_refresh_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InstanceRefreshStatus>,
    /// Explains terminal states, for example why the refresh failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_complete: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances_to_update: Option<i32>,
}

display_json!(RefreshPreferences, InstanceRefresh);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_status_enum_or_string() {
        let mut rb = InstanceRefreshBuilder::default();
        let from_enum = rb
            .instance_refresh_id("ir-1")
            .status(InstanceRefreshStatus::InProgress)
            .build()
            .unwrap();
        let mut rb = InstanceRefreshBuilder::default();
        let from_str = rb
            .instance_refresh_id("ir-1")
            .status("InProgress")
            .build()
            .unwrap();
        assert_eq!(from_enum, from_str);
    }

    #[test]
    fn test_unknown_status_survives_round_trip() {
        let json = r#"{"InstanceRefreshId":"ir-2","Status":"Paused"}"#;
        let refresh: InstanceRefresh = serde_json::from_str(json).unwrap();
        assert_eq!(
            refresh.status,
            Some(InstanceRefreshStatus::Other("Paused".to_string()))
        );
        let back = serde_json::to_value(&refresh).unwrap();
        assert_eq!(back["Status"], serde_json::json!("Paused"));
    }

    #[test]
    fn test_display_shows_progress_fields() {
        let mut rb = InstanceRefreshBuilder::default();
        let refresh = rb
            .instance_refresh_id("ir-3")
            .percentage_complete(60)
            .instances_to_update(4)
            .build()
            .unwrap();
        let rendered = refresh.to_string();
        assert!(rendered.contains("PercentageComplete"));
        assert!(!rendered.contains("StatusReason"));
    }
}
