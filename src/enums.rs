//! Closed string vocabularies used by the model.
//!
//! The service transmits these as plain strings; each enum keeps an
//! `Other` variant so a value added server-side after this crate was
//! generated still round-trips instead of failing to decode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a scaling activity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[non_exhaustive]
pub enum ScalingActivityStatusCode {
    PendingSpotBidPlacement,
    WaitingForSpotInstanceRequestId,
    WaitingForSpotInstanceId,
    WaitingForInstanceId,
    PreInService,
    InProgress,
    WaitingForElbConnectionDraining,
    MidLifecycleAction,
    WaitingForInstanceWarmup,
    Successful,
    Failed,
    Cancelled,
    Other(String),
}

impl ScalingActivityStatusCode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::PendingSpotBidPlacement => "PendingSpotBidPlacement",
            Self::WaitingForSpotInstanceRequestId => "WaitingForSpotInstanceRequestId",
            Self::WaitingForSpotInstanceId => "WaitingForSpotInstanceId",
            Self::WaitingForInstanceId => "WaitingForInstanceId",
            Self::PreInService => "PreInService",
            Self::InProgress => "InProgress",
            Self::WaitingForElbConnectionDraining => "WaitingForELBConnectionDraining",
            Self::MidLifecycleAction => "MidLifecycleAction",
            Self::WaitingForInstanceWarmup => "WaitingForInstanceWarmup",
            Self::Successful => "Successful",
            Self::Failed => "Failed",
            Self::Cancelled => "Cancelled",
            Self::Other(value) => value,
        }
    }
}

impl From<&str> for ScalingActivityStatusCode {
    fn from(value: &str) -> Self {
        match value {
            "PendingSpotBidPlacement" => Self::PendingSpotBidPlacement,
            "WaitingForSpotInstanceRequestId" => Self::WaitingForSpotInstanceRequestId,
            "WaitingForSpotInstanceId" => Self::WaitingForSpotInstanceId,
            "WaitingForInstanceId" => Self::WaitingForInstanceId,
            "PreInService" => Self::PreInService,
            "InProgress" => Self::InProgress,
            "WaitingForELBConnectionDraining" => Self::WaitingForElbConnectionDraining,
            "MidLifecycleAction" => Self::MidLifecycleAction,
            "WaitingForInstanceWarmup" => Self::WaitingForInstanceWarmup,
            "Successful" => Self::Successful,
            "Failed" => Self::Failed,
            "Cancelled" => Self::Cancelled,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Status of an instance refresh operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[non_exhaustive]
pub enum InstanceRefreshStatus {
    Pending,
    InProgress,
    Successful,
    Failed,
    Cancelling,
    Cancelled,
    Other(String),
}

impl InstanceRefreshStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "InProgress",
            Self::Successful => "Successful",
            Self::Failed => "Failed",
            Self::Cancelling => "Cancelling",
            Self::Cancelled => "Cancelled",
            Self::Other(value) => value,
        }
    }
}

impl From<&str> for InstanceRefreshStatus {
    fn from(value: &str) -> Self {
        match value {
            "Pending" => Self::Pending,
            "InProgress" => Self::InProgress,
            "Successful" => Self::Successful,
            "Failed" => Self::Failed,
            "Cancelling" => Self::Cancelling,
            "Cancelled" => Self::Cancelled,
            other => Self::Other(other.to_string()),
        }
    }
}

/// How an instance refresh replaces instances. The service currently
/// only offers rolling replacement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[non_exhaustive]
pub enum RefreshStrategy {
    Rolling,
    Other(String),
}

impl RefreshStrategy {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Rolling => "Rolling",
            Self::Other(value) => value,
        }
    }
}

impl From<&str> for RefreshStrategy {
    fn from(value: &str) -> Self {
        match value {
            "Rolling" => Self::Rolling,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Predefined metric for target tracking policies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[non_exhaustive]
pub enum MetricType {
    AsgAverageCpuUtilization,
    AsgAverageNetworkIn,
    AsgAverageNetworkOut,
    AlbRequestCountPerTarget,
    Other(String),
}

impl MetricType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::AsgAverageCpuUtilization => "ASGAverageCPUUtilization",
            Self::AsgAverageNetworkIn => "ASGAverageNetworkIn",
            Self::AsgAverageNetworkOut => "ASGAverageNetworkOut",
            Self::AlbRequestCountPerTarget => "ALBRequestCountPerTarget",
            Self::Other(value) => value,
        }
    }
}

impl From<&str> for MetricType {
    fn from(value: &str) -> Self {
        match value {
            "ASGAverageCPUUtilization" => Self::AsgAverageCpuUtilization,
            "ASGAverageNetworkIn" => Self::AsgAverageNetworkIn,
            "ASGAverageNetworkOut" => Self::AsgAverageNetworkOut,
            "ALBRequestCountPerTarget" => Self::AlbRequestCountPerTarget,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Statistic applied to a customized metric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[non_exhaustive]
pub enum MetricStatistic {
    Average,
    Minimum,
    Maximum,
    SampleCount,
    Sum,
    Other(String),
}

impl MetricStatistic {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Average => "Average",
            Self::Minimum => "Minimum",
            Self::Maximum => "Maximum",
            Self::SampleCount => "SampleCount",
            Self::Sum => "Sum",
            Self::Other(value) => value,
        }
    }
}

impl From<&str> for MetricStatistic {
    fn from(value: &str) -> Self {
        match value {
            "Average" => Self::Average,
            "Minimum" => Self::Minimum,
            "Maximum" => Self::Maximum,
            "SampleCount" => Self::SampleCount,
            "Sum" => Self::Sum,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Server-side lifecycle state of an instance inside a group. The state
/// machine lives entirely on the service; this is only a mirror of the
/// reported value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[non_exhaustive]
pub enum LifecycleState {
    Pending,
    PendingWait,
    PendingProceed,
    Quarantined,
    InService,
    Terminating,
    TerminatingWait,
    TerminatingProceed,
    Terminated,
    Detaching,
    Detached,
    EnteringStandby,
    Standby,
    Other(String),
}

impl LifecycleState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::PendingWait => "Pending:Wait",
            Self::PendingProceed => "Pending:Proceed",
            Self::Quarantined => "Quarantined",
            Self::InService => "InService",
            Self::Terminating => "Terminating",
            Self::TerminatingWait => "Terminating:Wait",
            Self::TerminatingProceed => "Terminating:Proceed",
            Self::Terminated => "Terminated",
            Self::Detaching => "Detaching",
            Self::Detached => "Detached",
            Self::EnteringStandby => "EnteringStandby",
            Self::Standby => "Standby",
            Self::Other(value) => value,
        }
    }
}

impl From<&str> for LifecycleState {
    fn from(value: &str) -> Self {
        match value {
            "Pending" => Self::Pending,
            "Pending:Wait" => Self::PendingWait,
            "Pending:Proceed" => Self::PendingProceed,
            "Quarantined" => Self::Quarantined,
            "InService" => Self::InService,
            "Terminating" => Self::Terminating,
            "Terminating:Wait" => Self::TerminatingWait,
            "Terminating:Proceed" => Self::TerminatingProceed,
            "Terminated" => Self::Terminated,
            "Detaching" => Self::Detaching,
            "Detached" => Self::Detached,
            "EnteringStandby" => Self::EnteringStandby,
            "Standby" => Self::Standby,
            other => Self::Other(other.to_string()),
        }
    }
}

macro_rules! string_conversions {
    ($($ty:ty),+ $(,)?) => {$(
        impl From<String> for $ty {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.as_str().to_string()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    )+};
}

string_conversions!(
    ScalingActivityStatusCode,
    InstanceRefreshStatus,
    RefreshStrategy,
    MetricType,
    MetricStatistic,
    LifecycleState,
);
