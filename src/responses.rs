//! Result objects returned by the service.
//!
//! Operations whose reply carries no data (ExecutePolicy, DeletePolicy,
//! SetDesiredCapacity and friends) have no result type here; the caller
//! only observes success or a service error.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display_json;
use crate::types::{
    Activity, Alarm, AutoScalingGroup, AutoScalingInstanceDetails, InstanceRefresh,
    LaunchConfiguration, LifecycleHook, ScalingPolicy, ScheduledUpdateGroupAction, TagDescription,
};

/// One page of DescribeAutoScalingGroups; a populated `next_token`
/// means more pages follow.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeAutoScalingGroupsResult {
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_groups: Option<Vec<AutoScalingGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// One page of DescribeLaunchConfigurations.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeLaunchConfigurationsResult {
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_configurations: Option<Vec<LaunchConfiguration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// One page of DescribeAutoScalingInstances.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeAutoScalingInstancesResult {
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_instances: Option<Vec<AutoScalingInstanceDetails>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// One page of DescribeScalingActivities, newest activities first.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeScalingActivitiesResult {
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<Activity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// One page of DescribePolicies.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribePoliciesResult {
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_policies: Option<Vec<ScalingPolicy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Reply of DescribeLifecycleHooks: the hooks of one group, unpaged.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeLifecycleHooksResult {
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_hooks: Option<Vec<LifecycleHook>>,
}

/// One page of DescribeScheduledActions.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeScheduledActionsResult {
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_update_group_actions: Option<Vec<ScheduledUpdateGroupAction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// One page of DescribeTags.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeTagsResult {
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagDescription>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// One page of DescribeInstanceRefreshes, newest refresh first.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeInstanceRefreshesResult {
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_refreshes: Option<Vec<InstanceRefresh>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Reply of PutScalingPolicy.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct PutScalingPolicyResult {
    #[serde(rename = "PolicyARN", skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
    /// Alarms created by the service for target tracking policies.
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarms: Option<Vec<Alarm>>,
}

/// Reply of StartInstanceRefresh: the id to poll or cancel with.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct StartInstanceRefreshResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_refresh_id: Option<String>,
}

/// Reply of CancelInstanceRefresh.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct CancelInstanceRefreshResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_refresh_id: Option<String>,
}

/// Reply of TerminateInstanceInAutoScalingGroup: the scaling activity
/// started by the termination.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct TerminateInstanceInAutoScalingGroupResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<Activity>,
}

display_json!(
    DescribeAutoScalingGroupsResult,
    DescribeLaunchConfigurationsResult,
    DescribeAutoScalingInstancesResult,
    DescribeScalingActivitiesResult,
    DescribePoliciesResult,
    DescribeLifecycleHooksResult,
    DescribeScheduledActionsResult,
    DescribeTagsResult,
    DescribeInstanceRefreshesResult,
    PutScalingPolicyResult,
    StartInstanceRefreshResult,
    CancelInstanceRefreshResult,
    TerminateInstanceInAutoScalingGroupResult,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ScalingActivityStatusCode;
    use crate::types::{ActivityBuilder, AutoScalingGroupBuilder};

    #[test]
    fn test_describe_groups_page_deserializes_from_service_payload() {
        let payload = r#"{
            "AutoScalingGroups": [
                {
                    "AutoScalingGroupName": "web",
                    "MinSize": 1,
                    "MaxSize": 4,
                    "DesiredCapacity": 2,
                    "AvailabilityZones": ["us-east-1a", "us-east-1b"],
                    "Instances": [
                        {"InstanceId": "i-1", "LifecycleState": "InService"},
                        {"InstanceId": "i-2", "LifecycleState": "Pending:Wait"}
                    ]
                }
            ],
            "NextToken": "page-2"
        }"#;
        let result: DescribeAutoScalingGroupsResult = serde_json::from_str(payload).unwrap();
        assert_eq!(result.next_token.as_deref(), Some("page-2"));
        let groups = result.auto_scaling_groups.unwrap();
        assert_eq!(groups.len(), 1);
        let instances = groups[0].instances.as_ref().unwrap();
        assert_eq!(
            instances[1].lifecycle_state,
            Some(crate::enums::LifecycleState::PendingWait)
        );
        // Fields absent from the payload stay absent, they do not become
        // empty collections.
        assert_eq!(groups[0].termination_policies, None);
    }

    #[test]
    fn test_terminate_result_wraps_activity() {
        let mut ab = ActivityBuilder::default();
        let activity = ab
            .activity_id("act-9")
            .status_code(ScalingActivityStatusCode::InProgress)
            .progress(0)
            .build()
            .unwrap();
        let mut rb = TerminateInstanceInAutoScalingGroupResultBuilder::default();
        let result = rb.activity(activity.clone()).build().unwrap();
        assert_eq!(result.activity, Some(activity));
    }

    #[test]
    fn test_empty_describe_result_serializes_empty_page() {
        let mut rb = DescribeAutoScalingGroupsResultBuilder::default();
        let result = rb.build().unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["AutoScalingGroups"], serde_json::json!([]));
        assert!(json.get("NextToken").is_none());
    }

    #[test]
    fn test_describe_tags_page_deserializes() {
        let payload = r#"{
            "Tags": [
                {
                    "ResourceId": "web",
                    "ResourceType": "auto-scaling-group",
                    "Key": "env",
                    "Value": "prod",
                    "PropagateAtLaunch": true
                }
            ]
        }"#;
        let result: DescribeTagsResult = serde_json::from_str(payload).unwrap();
        let tags = result.tags.unwrap();
        assert_eq!(tags[0].key.as_deref(), Some("env"));
        assert_eq!(tags[0].propagate_at_launch, Some(true));
        assert_eq!(result.next_token, None);
    }

    #[test]
    fn test_group_in_result_round_trips() {
        let mut gb = AutoScalingGroupBuilder::default();
        let group = gb
            .auto_scaling_group_name("web")
            .min_size(1)
            .max_size(3)
            .build()
            .unwrap();
        let mut rb = DescribeAutoScalingGroupsResultBuilder::default();
        let result = rb.auto_scaling_groups(vec![group]).build().unwrap();
        let back: DescribeAutoScalingGroupsResult =
            serde_json::from_str(&serde_json::to_string(&result).unwrap()).unwrap();
        assert_eq!(back, result);
    }
}
