//! Request parameter objects, one per API operation.
//!
//! Requests carry no validation: the documented constraints (name
//! lengths, numeric ranges, mutually exclusive fields) are checked by
//! the service, so any request builds locally and the service answers
//! with an error if it disagrees.

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display_json;
use crate::enums::RefreshStrategy;
use crate::types::{
    BlockDeviceMapping, Filter, InstanceMonitoring, LaunchTemplateSpecification,
    LifecycleHookSpecification, MixedInstancesPolicy, RefreshPreferences, StepAdjustment, Tag,
    TargetTrackingConfiguration,
};

/// Parameters of CreateAutoScalingGroup. Exactly one of launch
/// configuration name, launch template, mixed instances policy or
/// source instance id identifies what to launch.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateAutoScalingGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_configuration_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_template: Option<LaunchTemplateSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixed_instances_policy: Option<MixedInstancesPolicy>,
    /// Instance to derive launch parameters from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_cooldown: Option<i32>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer_names: Option<Vec<String>>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(rename = "TargetGroupARNs", skip_serializing_if = "Option::is_none")]
    pub target_group_arns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_grace_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_group: Option<String>,
    #[serde(rename = "VPCZoneIdentifier", skip_serializing_if = "Option::is_none")]
    pub vpc_zone_identifier: Option<String>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_policies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_instances_protected_from_scale_in: Option<bool>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_hook_specification_list: Option<Vec<LifecycleHookSpecification>>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(
        rename = "ServiceLinkedRoleARN",
        skip_serializing_if = "Option::is_none"
    )]
    pub service_linked_role_arn: Option<String>,
}

/// Parameters of UpdateAutoScalingGroup; absent fields are left
/// unchanged on the group.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateAutoScalingGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_configuration_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_template: Option<LaunchTemplateSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixed_instances_policy: Option<MixedInstancesPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_cooldown: Option<i32>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_grace_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_group: Option<String>,
    #[serde(rename = "VPCZoneIdentifier", skip_serializing_if = "Option::is_none")]
    pub vpc_zone_identifier: Option<String>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_policies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_instances_protected_from_scale_in: Option<bool>,
    #[serde(
        rename = "ServiceLinkedRoleARN",
        skip_serializing_if = "Option::is_none"
    )]
    pub service_linked_role_arn: Option<String>,
}

/// Parameters of DeleteAutoScalingGroup.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteAutoScalingGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    /// Delete even while the group still has instances, terminating
    /// them without honoring lifecycle hooks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_delete: Option<bool>,
}

/// Parameters of CreateLaunchConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateLaunchConfigurationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_configuration_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<String>>,
    #[serde(rename = "ClassicLinkVPCId", skip_serializing_if = "Option::is_none")]
    pub classic_link_vpc_id: Option<String>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(
        rename = "ClassicLinkVPCSecurityGroups",
        skip_serializing_if = "Option::is_none"
    )]
    pub classic_link_vpc_security_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    /// Instance to derive the configuration from, as an alternative to
    /// spelling out image id and instance type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ramdisk_id: Option<String>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_device_mappings: Option<Vec<BlockDeviceMapping>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_monitoring: Option<InstanceMonitoring>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_instance_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associate_public_ip_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_tenancy: Option<String>,
}

/// Parameters of DeleteLaunchConfiguration. The configuration must not
/// be attached to a group anymore.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteLaunchConfigurationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_configuration_name: Option<String>,
}

/// Parameters of SuspendProcesses. An empty process list suspends all
/// scaling processes of the group.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct SuspendProcessesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    /// Process names such as `Launch`, `Terminate` or `AlarmNotification`.
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_processes: Option<Vec<String>>,
}

/// Parameters of ResumeProcesses, the counterpart of
/// [`SuspendProcessesRequest`].
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResumeProcessesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_processes: Option<Vec<String>>,
}

/// Parameters of EnableMetricsCollection. An empty metric list enables
/// all group metrics.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct EnableMetricsCollectionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<String>>,
    /// Only `1Minute` is accepted by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<String>,
}

/// Parameters of DisableMetricsCollection.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DisableMetricsCollectionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<String>>,
}

/// Parameters of CreateOrUpdateTags.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateOrUpdateTagsRequest {
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// Parameters of DeleteTags.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteTagsRequest {
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// Parameters of DescribeTags. Without filters every tag of every group
/// is returned.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeTagsRequest {
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
}

/// Parameters of DescribeAutoScalingGroups. An empty name list means
/// "all groups"; `next_token` continues a previous page.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeAutoScalingGroupsRequest {
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
}

/// Parameters of DescribeLaunchConfigurations.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeLaunchConfigurationsRequest {
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_configuration_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
}

/// Parameters of DescribeAutoScalingInstances.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeAutoScalingInstancesRequest {
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Parameters of DescribeScalingActivities.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeScalingActivitiesRequest {
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Parameters of DescribePolicies.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribePoliciesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_names: Option<Vec<String>>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
}

/// Parameters of DescribeLifecycleHooks.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeLifecycleHooksRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_hook_names: Option<Vec<String>>,
}

/// Parameters of DescribeScheduledActions. Only actions with a start
/// time inside the given window are returned.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeScheduledActionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_action_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
}

/// Parameters of DescribeInstanceRefreshes.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeInstanceRefreshesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_refresh_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
}

/// Parameters of ExecutePolicy: manually trigger a scaling policy.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct ExecutePolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    /// Wait for the cooldown period to complete before executing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honor_cooldown: Option<bool>,
    /// Current metric value, required for step scaling policies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_value: Option<f64>,
    /// Breach threshold of the alarm, required for step scaling
    /// policies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breach_threshold: Option<f64>,
}

/// Parameters of PutScalingPolicy: creates or replaces a policy.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct PutScalingPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    /// Defaults to `SimpleScaling` on the service side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_adjustment_step: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_adjustment_magnitude: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_adjustment: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_aggregation_type: Option<String>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_adjustments: Option<Vec<StepAdjustment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_instance_warmup: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_tracking_configuration: Option<TargetTrackingConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Parameters of DeletePolicy.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeletePolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    /// Name or ARN of the policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
}

/// Parameters of PutLifecycleHook: creates or updates a hook.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct PutLifecycleHookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_hook_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    /// Required when creating a hook, optional on update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_transition: Option<String>,
    #[serde(rename = "RoleARN", skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(
        rename = "NotificationTargetARN",
        skip_serializing_if = "Option::is_none"
    )]
    pub notification_target_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_metadata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heartbeat_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_result: Option<String>,
}

/// Parameters of DeleteLifecycleHook. Instances currently paused by
/// the hook proceed as if the hook had completed with its default
/// result.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteLifecycleHookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_hook_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
}

/// Parameters of CompleteLifecycleAction: releases an instance paused
/// by a lifecycle hook. The paused instance is addressed either by the
/// action token from the hook notification or by its instance id.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct CompleteLifecycleActionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_hook_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_action_token: Option<String>,
    /// `CONTINUE` or `ABANDON`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_action_result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
}

/// Parameters of RecordLifecycleActionHeartbeat: restarts the
/// heartbeat timeout of a paused instance.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct RecordLifecycleActionHeartbeatRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_hook_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_action_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
}

/// Parameters of DeleteScheduledAction.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteScheduledActionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_action_name: Option<String>,
}

/// Parameters of PutScheduledUpdateGroupAction: creates or updates a
/// scheduled action.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct PutScheduledUpdateGroupActionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_action_name: Option<String>,
    /// Deprecated alias of `start_time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_capacity: Option<i32>,
}

/// Parameters of SetDesiredCapacity.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct SetDesiredCapacityRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honor_cooldown: Option<bool>,
}

/// Parameters of TerminateInstanceInAutoScalingGroup.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct TerminateInstanceInAutoScalingGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// When false the group replaces the terminated instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_decrement_desired_capacity: Option<bool>,
}

/// Parameters of StartInstanceRefresh.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct StartInstanceRefreshRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<RefreshStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<RefreshPreferences>,
}

/// Parameters of CancelInstanceRefresh; cancels the in-progress refresh
/// of the named group.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct CancelInstanceRefreshRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
}

display_json!(
    CreateAutoScalingGroupRequest,
    UpdateAutoScalingGroupRequest,
    DeleteAutoScalingGroupRequest,
    CreateLaunchConfigurationRequest,
    DeleteLaunchConfigurationRequest,
    SuspendProcessesRequest,
    ResumeProcessesRequest,
    EnableMetricsCollectionRequest,
    DisableMetricsCollectionRequest,
    CreateOrUpdateTagsRequest,
    DeleteTagsRequest,
    DescribeTagsRequest,
    DescribeAutoScalingGroupsRequest,
    DescribeLaunchConfigurationsRequest,
    DescribeAutoScalingInstancesRequest,
    DescribeScalingActivitiesRequest,
    DescribePoliciesRequest,
    DescribeLifecycleHooksRequest,
    DescribeScheduledActionsRequest,
    DescribeInstanceRefreshesRequest,
    ExecutePolicyRequest,
    PutScalingPolicyRequest,
    DeletePolicyRequest,
    PutLifecycleHookRequest,
    DeleteLifecycleHookRequest,
    CompleteLifecycleActionRequest,
    RecordLifecycleActionHeartbeatRequest,
    DeleteScheduledActionRequest,
    PutScheduledUpdateGroupActionRequest,
    SetDesiredCapacityRequest,
    TerminateInstanceInAutoScalingGroupRequest,
    StartInstanceRefreshRequest,
    CancelInstanceRefreshRequest,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PredefinedMetricSpecificationBuilder, TargetTrackingConfigurationBuilder};

    #[test]
    fn test_describe_launch_configurations_defaults_to_empty_names() {
        let mut rb = DescribeLaunchConfigurationsRequestBuilder::default();
        let request = rb.build().unwrap();
        assert_eq!(request.launch_configuration_names, Some(vec![]));
        assert_eq!(request.next_token, None);
    }

    #[test]
    fn test_start_instance_refresh_strategy_overloads() {
        let mut rb = StartInstanceRefreshRequestBuilder::default();
        let from_enum = rb
            .auto_scaling_group_name("web")
            .strategy(RefreshStrategy::Rolling)
            .build()
            .unwrap();
        let mut rb = StartInstanceRefreshRequestBuilder::default();
        let from_str = rb
            .auto_scaling_group_name("web")
            .strategy("Rolling")
            .build()
            .unwrap();
        assert_eq!(from_enum, from_str);
    }

    #[test]
    fn test_execute_policy_carries_doubles() {
        let mut rb = ExecutePolicyRequestBuilder::default();
        let request = rb
            .auto_scaling_group_name("web")
            .policy_name("scale-out")
            .metric_value(72.5)
            .breach_threshold(70.0)
            .build()
            .unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["MetricValue"], serde_json::json!(72.5));
        assert!(json.get("HonorCooldown").is_none());
    }

    #[test]
    fn test_put_scaling_policy_nests_target_tracking() {
        let mut pmb = PredefinedMetricSpecificationBuilder::default();
        let predefined = pmb
            .predefined_metric_type("ALBRequestCountPerTarget")
            .resource_label("app/my-alb/778d41231b141a0f/targetgroup/my-tg/943f017f100becff")
            .build()
            .unwrap();
        let mut ttb = TargetTrackingConfigurationBuilder::default();
        let tracking = ttb
            .predefined_metric_specification(predefined)
            .target_value(1000.0)
            .build()
            .unwrap();
        let mut rb = PutScalingPolicyRequestBuilder::default();
        let request = rb
            .auto_scaling_group_name("web")
            .policy_name("requests-per-target")
            .policy_type("TargetTrackingScaling")
            .target_tracking_configuration(tracking)
            .build()
            .unwrap();
        let back: PutScalingPolicyRequest =
            serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_delete_requests_mirror_their_create_counterparts() {
        let mut rb = DeleteLaunchConfigurationRequestBuilder::default();
        let request = rb.launch_configuration_name("web").build().unwrap();
        assert_eq!(request.launch_configuration_name.as_deref(), Some("web"));

        let mut rb = DeletePolicyRequestBuilder::default();
        let request = rb
            .auto_scaling_group_name("web")
            .policy_name("scale-out")
            .build()
            .unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["PolicyName"], serde_json::json!("scale-out"));

        let mut rb = DeleteScheduledActionRequestBuilder::default();
        let request = rb
            .auto_scaling_group_name("web")
            .scheduled_action_name("nightly-scale-in")
            .build()
            .unwrap();
        assert_eq!(
            request.scheduled_action_name.as_deref(),
            Some("nightly-scale-in")
        );

        let mut rb = DeleteLifecycleHookRequestBuilder::default();
        let request = rb
            .lifecycle_hook_name("drain-connections")
            .auto_scaling_group_name("web")
            .build()
            .unwrap();
        let back: DeleteLifecycleHookRequest =
            serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_complete_lifecycle_action_by_token_or_instance() {
        let mut rb = CompleteLifecycleActionRequestBuilder::default();
        let by_token = rb
            .lifecycle_hook_name("drain-connections")
            .auto_scaling_group_name("web")
            .lifecycle_action_token("bcd2f1b8-9a78-44d3-8a7a-4dd07d7cf635")
            .lifecycle_action_result("CONTINUE")
            .build()
            .unwrap();
        let json = serde_json::to_value(&by_token).unwrap();
        assert_eq!(json["LifecycleActionResult"], serde_json::json!("CONTINUE"));
        assert!(json.get("InstanceId").is_none());

        let mut rb = RecordLifecycleActionHeartbeatRequestBuilder::default();
        let heartbeat = rb
            .lifecycle_hook_name("drain-connections")
            .auto_scaling_group_name("web")
            .instance_id("i-1")
            .build()
            .unwrap();
        assert_eq!(heartbeat.lifecycle_action_token, None);
        assert_eq!(heartbeat.instance_id.as_deref(), Some("i-1"));
    }

    #[test]
    fn test_suspend_processes_defaults_to_all_processes() {
        let mut rb = SuspendProcessesRequestBuilder::default();
        let request = rb.auto_scaling_group_name("web").build().unwrap();
        assert_eq!(request.scaling_processes, Some(vec![]));

        let mut rb = ResumeProcessesRequestBuilder::default();
        let request = rb
            .auto_scaling_group_name("web")
            .scaling_processes(vec!["Launch".to_string(), "Terminate".to_string()])
            .build()
            .unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["ScalingProcesses"],
            serde_json::json!(["Launch", "Terminate"])
        );
    }

    #[test]
    fn test_metrics_collection_requests() {
        let mut rb = EnableMetricsCollectionRequestBuilder::default();
        let enable = rb
            .auto_scaling_group_name("web")
            .metrics(vec!["GroupMinSize".to_string()])
            .granularity("1Minute")
            .build()
            .unwrap();
        let json = serde_json::to_value(&enable).unwrap();
        assert_eq!(json["Granularity"], serde_json::json!("1Minute"));

        let mut rb = DisableMetricsCollectionRequestBuilder::default();
        let disable = rb.auto_scaling_group_name("web").build().unwrap();
        assert_eq!(disable.metrics, Some(vec![]));
    }

    #[test]
    fn test_tag_requests_carry_tags_and_filters() {
        let mut tb = crate::types::TagBuilder::default();
        let tag = tb
            .resource_id("web")
            .resource_type("auto-scaling-group")
            .key("env")
            .value("prod")
            .propagate_at_launch(true)
            .build()
            .unwrap();
        let mut rb = CreateOrUpdateTagsRequestBuilder::default();
        let create = rb.tags(vec![tag.clone()]).build().unwrap();
        let mut rb = DeleteTagsRequestBuilder::default();
        let delete = rb.tags(vec![tag]).build().unwrap();
        assert_eq!(create.tags, delete.tags);

        let mut fb = crate::types::FilterBuilder::default();
        let filter = fb
            .name("auto-scaling-group")
            .values(vec!["web".to_string()])
            .build()
            .unwrap();
        let mut rb = DescribeTagsRequestBuilder::default();
        let describe = rb.filters(vec![filter]).max_records(10).build().unwrap();
        let json = serde_json::to_value(&describe).unwrap();
        assert_eq!(
            json["Filters"][0]["Name"],
            serde_json::json!("auto-scaling-group")
        );
    }

    #[test]
    fn test_create_group_request_wire_names() {
        let mut rb = CreateAutoScalingGroupRequestBuilder::default();
        let request = rb
            .auto_scaling_group_name("web")
            .vpc_zone_identifier("subnet-1")
            .service_linked_role_arn("arn:aws:iam::123:role/aws-service-role")
            .build()
            .unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("VPCZoneIdentifier").is_some());
        assert!(json.get("ServiceLinkedRoleARN").is_some());
        assert!(json.get("ServiceLinkedRoleArn").is_none());
    }
}
