//! Lifecycle hooks: pausing instances during launch or terminate until
//! an external actor completes the hook or a timeout fires.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display_json;

/// A lifecycle hook as described by the service.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct LifecycleHook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_hook_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    /// `autoscaling:EC2_INSTANCE_LAUNCHING` or
    /// `autoscaling:EC2_INSTANCE_TERMINATING`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_transition: Option<String>,
    #[serde(
        rename = "NotificationTargetARN",
        skip_serializing_if = "Option::is_none"
    )]
    pub notification_target_arn: Option<String>,
    #[serde(rename = "RoleARN", skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// Extra payload included in notification messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_metadata: Option<String>,
    /// Seconds before the hook times out without a heartbeat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heartbeat_timeout: Option<i32>,
    /// Upper bound on how long the instance can stay paused, heartbeats
    /// included. Set by the service, not by callers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_timeout: Option<i32>,
    /// `CONTINUE` or `ABANDON`, applied when the hook times out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_result: Option<String>,
}

/// Lifecycle hook definition embedded in a CreateAutoScalingGroup call,
/// which creates the hooks together with the group.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct LifecycleHookSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_hook_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_transition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_metadata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heartbeat_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_result: Option<String>,
    #[serde(
        rename = "NotificationTargetARN",
        skip_serializing_if = "Option::is_none"
    )]
    pub notification_target_arn: Option<String>,
    #[serde(rename = "RoleARN", skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
}

display_json!(LifecycleHook, LifecycleHookSpecification);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_hook_has_set_fields_only() {
        let mut hb = LifecycleHookBuilder::default();
        let hook = hb
            .lifecycle_hook_name("drain-connections")
            .heartbeat_timeout(3600)
            .default_result("ABANDON")
            .build()
            .unwrap();
        let json = serde_json::to_value(&hook).unwrap();
        assert_eq!(json["HeartbeatTimeout"], serde_json::json!(3600));
        assert_eq!(json["DefaultResult"], serde_json::json!("ABANDON"));
        assert!(json.get("NotificationMetadata").is_none());
        assert!(json.get("GlobalTimeout").is_none());
    }

    #[test]
    fn test_hook_round_trip_with_arns() {
        let mut hb = LifecycleHookBuilder::default();
        let hook = hb
            .lifecycle_hook_name("scale-out-hook")
            .lifecycle_transition("autoscaling:EC2_INSTANCE_LAUNCHING")
            .notification_target_arn("arn:aws:sqs:us-east-1:123:queue")
            .role_arn("arn:aws:iam::123:role/hook")
            .build()
            .unwrap();
        let json = serde_json::to_value(&hook).unwrap();
        assert!(json.get("NotificationTargetARN").is_some());
        assert!(json.get("RoleARN").is_some());
        let back: LifecycleHook = serde_json::from_value(json).unwrap();
        assert_eq!(back, hook);
    }
}
