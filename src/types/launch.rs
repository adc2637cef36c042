//! Launch configurations, launch templates and block device mappings.

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display_json;

/// EBS volume settings inside a block device mapping.
///
/// The service validates the documented constraints; nothing is checked
/// client-side, so any combination of values builds successfully.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct Ebs {
    /// Snapshot to create the volume from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    /// Volume size in GiB. When restoring a snapshot the size must be at
    /// least the snapshot size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_size: Option<i32>,
    /// One of `standard`, `io1`, `gp2`, `st1` or `sc1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<bool>,
    /// Provisioned IOPS. Required by the service for `io1` volumes, not
    /// allowed for the other volume types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
}

/// Maps a device name on the instance to an EBS volume, a virtual
/// (ephemeral) device, or suppresses a device from the AMI.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct BlockDeviceMapping {
    /// Virtual device name, `ephemeral0` and so on. Specify either this
    /// or `ebs`, not both.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs: Option<Ebs>,
    /// Suppresses the device mapping the AMI would otherwise provide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_device: Option<bool>,
}

/// Whether detailed (1-minute) monitoring is enabled for the instances.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct InstanceMonitoring {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Reference to a launch template by id or name, with an optional
/// version (`$Latest`, `$Default` or a version number).
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct LaunchTemplateSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_template_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Per-instance-type override applied on top of a launch template in a
/// mixed instances policy.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct LaunchTemplateOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    /// Number of capacity units this instance type counts for, relative
    /// to the group's desired capacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weighted_capacity: Option<String>,
}

/// Launch template plus its overrides, as used by a mixed instances
/// policy.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct LaunchTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_template_specification: Option<LaunchTemplateSpecification>,
    #[builder(default = "Some(Vec::new())")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Vec<LaunchTemplateOverrides>>,
}

/// A launch configuration as described by the service.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default, rename_all = "PascalCase")]
pub struct LaunchConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_configuration_name: Option<String>,
    #[serde(
        rename = "LaunchConfigurationARN",
        skip_serializing_if = "Option::is_none"
    )]
    pub launch_configuration_arn: Option<String>,
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
    /// Base64-encoded user data handed to the instance at launch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
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
    /// Maximum hourly price for Spot instances. Absent for On-Demand
    /// launch configurations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_instance_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associate_public_ip_address: Option<bool>,
    /// `default` or `dedicated`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_tenancy: Option<String>,
}

display_json!(
    Ebs,
    BlockDeviceMapping,
    InstanceMonitoring,
    LaunchTemplateSpecification,
    LaunchTemplateOverrides,
    LaunchTemplate,
    LaunchConfiguration,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ebs(encrypted: bool) -> Ebs {
        let mut eb = EbsBuilder::default();
        eb.snapshot_id("snap-123")
            .volume_size(100)
            .volume_type("gp2")
            .delete_on_termination(true)
            .encrypted(encrypted)
            .build()
            .unwrap()
    }

    #[test]
    fn test_ebs_round_trip() {
        let ebs = make_ebs(true);
        assert_eq!(ebs.volume_size, Some(100));
        assert_eq!(ebs.iops, None);
        assert_eq!(ebs, make_ebs(true));
        assert_ne!(ebs, make_ebs(false));
    }

    #[test]
    fn test_builder_call_order_is_irrelevant() {
        let mut eb = EbsBuilder::default();
        let a = eb
            .volume_type("io1")
            .iops(4000)
            .volume_size(500)
            .build()
            .unwrap();
        let mut eb = EbsBuilder::default();
        let b = eb
            .volume_size(500)
            .iops(4000)
            .volume_type("io1")
            .build()
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_omits_absent_fields() {
        let ebs = make_ebs(true);
        let rendered = ebs.to_string();
        assert!(rendered.contains("SnapshotId"));
        assert!(rendered.contains("VolumeSize"));
        assert!(!rendered.contains("Iops"));
    }

    #[test]
    fn test_launch_configuration_wire_names() {
        let mut lcb = LaunchConfigurationBuilder::default();
        let lc = lcb
            .launch_configuration_name("web")
            .launch_configuration_arn("arn:aws:autoscaling::123:launchConfiguration/web")
            .classic_link_vpc_id("vpc-1")
            .build()
            .unwrap();
        let json = serde_json::to_value(&lc).unwrap();
        assert!(json.get("LaunchConfigurationARN").is_some());
        assert!(json.get("ClassicLinkVPCId").is_some());
        // Defaulted list fields serialize as present-and-empty.
        assert_eq!(json["SecurityGroups"], serde_json::json!([]));
    }

    #[test]
    fn test_block_device_mapping_nests_ebs() {
        let mut bdb = BlockDeviceMappingBuilder::default();
        let bdm = bdb
            .device_name("/dev/sdh")
            .ebs(make_ebs(false))
            .build()
            .unwrap();
        let back: BlockDeviceMapping =
            serde_json::from_str(&serde_json::to_string(&bdm).unwrap()).unwrap();
        assert_eq!(back, bdm);
        assert_eq!(back.virtual_name, None);
    }
}
