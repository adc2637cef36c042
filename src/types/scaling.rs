//! Scaling policies, their metric configuration, scaling activities and
//! scheduled actions.

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display_json;
use crate::enums::{MetricStatistic, MetricType, ScalingActivityStatusCode};

/// CloudWatch alarm associated with a policy.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct Alarm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm_name: Option<String>,
    #[serde(rename = "AlarmARN", skip_serializing_if = "Option::is_none")]
    pub alarm_arn: Option<String>,
}

/// Name/value dimension of a customized metric.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct MetricDimension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Predefined metric for a target tracking policy.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct PredefinedMetricSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predefined_metric_type: Option<MetricType>,
    /// Identifies the ALB target group when the metric type is
    /// `ALBRequestCountPerTarget`; unused otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_label: Option<String>,
}

/// Arbitrary CloudWatch metric for a target tracking policy.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct CustomizedMetricSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Vec<MetricDimension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistic: Option<MetricStatistic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Target tracking configuration: exactly one of the two metric
/// specifications is expected by the service.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct TargetTrackingConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predefined_metric_specification: Option<PredefinedMetricSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customized_metric_specification: Option<CustomizedMetricSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value: Option<f64>,
    /// When true the policy never removes capacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_scale_in: Option<bool>,
}

/// One step of a step scaling policy. The bounds are offsets from the
/// alarm breach threshold; an absent bound means unbounded on that side.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct StepAdjustment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_interval_lower_bound: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_interval_upper_bound: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_adjustment: Option<i32>,
}

/// A scaling policy as described by the service, covering the simple,
/// step and target tracking variants in one record.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct ScalingPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(rename = "PolicyARN", skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
    /// `SimpleScaling`, `StepScaling` or `TargetTrackingScaling`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,
    /// `ChangeInCapacity`, `ExactCapacity` or `PercentChangeInCapacity`.
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
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_adjustments: Option<Vec<StepAdjustment>>,
    /// `Minimum`, `Maximum` or `Average`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_aggregation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_instance_warmup: Option<i32>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarms: Option<Vec<Alarm>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_tracking_configuration: Option<TargetTrackingConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// A scaling activity: one server-tracked change to the group's size or
/// membership.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct Activity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// What triggered the activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<ScalingActivityStatusCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    /// Percentage complete, 0 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A scheduled scaling action as described by the service.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct ScheduledUpdateGroupAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_action_name: Option<String>,
    #[serde(
        rename = "ScheduledActionARN",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheduled_action_arn: Option<String>,
    /// Deprecated alias of `start_time`, still returned by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Cron expression for recurring actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_capacity: Option<i32>,
}

display_json!(
    Alarm,
    MetricDimension,
    PredefinedMetricSpecification,
    CustomizedMetricSpecification,
    TargetTrackingConfiguration,
    StepAdjustment,
    ScalingPolicy,
    Activity,
    ScheduledUpdateGroupAction,
);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_activity_status_from_enum_and_string_agree() {
        let mut ab = ActivityBuilder::default();
        let from_enum = ab
            .activity_id("act-1")
            .status_code(ScalingActivityStatusCode::Successful)
            .build()
            .unwrap();
        let mut ab = ActivityBuilder::default();
        let from_str = ab
            .activity_id("act-1")
            .status_code("Successful")
            .build()
            .unwrap();
        assert_eq!(from_enum, from_str);
    }

    #[test]
    fn test_activity_timestamps_round_trip() {
        let start = Utc.with_ymd_and_hms(2020, 4, 1, 12, 0, 0).unwrap();
        let mut ab = ActivityBuilder::default();
        let activity = ab
            .activity_id("act-1")
            .start_time(start)
            .progress(40)
            .build()
            .unwrap();
        let back: Activity =
            serde_json::from_str(&serde_json::to_string(&activity).unwrap()).unwrap();
        assert_eq!(back.start_time, Some(start));
        assert_eq!(back.end_time, None);
    }

    #[test]
    fn test_target_tracking_policy_composition() {
        let mut pmb = PredefinedMetricSpecificationBuilder::default();
        let predefined = pmb
            .predefined_metric_type(MetricType::AsgAverageCpuUtilization)
            .build()
            .unwrap();
        let mut ttb = TargetTrackingConfigurationBuilder::default();
        let tracking = ttb
            .predefined_metric_specification(predefined)
            .target_value(50.0)
            .build()
            .unwrap();
        let mut spb = ScalingPolicyBuilder::default();
        let policy = spb
            .policy_name("cpu-tracking")
            .policy_type("TargetTrackingScaling")
            .target_tracking_configuration(tracking)
            .build()
            .unwrap();

        let json = serde_json::to_value(&policy).unwrap();
        assert_eq!(
            json["TargetTrackingConfiguration"]["PredefinedMetricSpecification"]
                ["PredefinedMetricType"],
            serde_json::json!("ASGAverageCPUUtilization")
        );
        assert_eq!(
            json["TargetTrackingConfiguration"]["TargetValue"],
            serde_json::json!(50.0)
        );
    }

    #[test]
    fn test_step_adjustments_keep_insertion_order() {
        let mut lower = StepAdjustmentBuilder::default();
        let lower = lower
            .metric_interval_lower_bound(0.0)
            .metric_interval_upper_bound(10.0)
            .scaling_adjustment(1)
            .build()
            .unwrap();
        let mut upper = StepAdjustmentBuilder::default();
        let upper = upper
            .metric_interval_lower_bound(10.0)
            .scaling_adjustment(3)
            .build()
            .unwrap();
        let mut spb = ScalingPolicyBuilder::default();
        let policy = spb
            .policy_name("steps")
            .step_adjustments(vec![lower.clone(), upper.clone()])
            .build()
            .unwrap();
        assert_eq!(policy.step_adjustments, Some(vec![lower, upper]));
    }

    #[test]
    fn test_overlapping_fields_do_not_make_types_comparable() {
        // Activity and ScalingPolicy share the group name field but are
        // distinct types; equality across them does not typecheck, so the
        // closest observable property is their serialized forms differing.
        let mut ab = ActivityBuilder::default();
        let activity = ab.auto_scaling_group_name("web").build().unwrap();
        let mut spb = ScalingPolicyBuilder::default();
        let policy = spb.auto_scaling_group_name("web").build().unwrap();
        assert_ne!(
            serde_json::to_value(&activity).unwrap(),
            serde_json::to_value(&policy).unwrap()
        );
    }
}
