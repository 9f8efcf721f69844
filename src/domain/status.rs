// Copyright (c) 2025 - Cowboy AI, Inc.
//! Closed Enumerations of the Fabric Model
//!
//! Every enumeration here is a closed set persisted by its canonical wire
//! name. All of them implement [`ClosedEnum`] so the membership guards in
//! [`enum_guard`](crate::domain::enum_guard) can validate raw input.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::enum_guard::ClosedEnum;

/// Clos topology flavor of a pod
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TopologyType {
    /// Classic two-tier spine/leaf fabric
    ThreeStage,
    /// Five-stage fabric optimized for real-estate constraints
    FiveStageRealEstate,
    /// Five-stage fabric optimized for cross-pod bandwidth
    FiveStagePerformance,
}

impl ClosedEnum for TopologyType {
    const VARIANTS: &'static [Self] = &[
        Self::ThreeStage,
        Self::FiveStageRealEstate,
        Self::FiveStagePerformance,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::ThreeStage => "threeStage",
            Self::FiveStageRealEstate => "fiveStageRealEstate",
            Self::FiveStagePerformance => "fiveStagePerformance",
        }
    }
}

/// Lifecycle state of a pod, advanced by the surrounding workflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PodState {
    #[default]
    Unknown,
    Created,
    Updated,
    CablingDone,
    DeviceConfigDone,
    ZtpConfigDone,
    Deployed,
    #[serde(rename = "L2Verified")]
    L2Verified,
    #[serde(rename = "L3Verified")]
    L3Verified,
}

impl ClosedEnum for PodState {
    const VARIANTS: &'static [Self] = &[
        Self::Unknown,
        Self::Created,
        Self::Updated,
        Self::CablingDone,
        Self::DeviceConfigDone,
        Self::ZtpConfigDone,
        Self::Deployed,
        Self::L2Verified,
        Self::L3Verified,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Created => "created",
            Self::Updated => "updated",
            Self::CablingDone => "cablingDone",
            Self::DeviceConfigDone => "deviceConfigDone",
            Self::ZtpConfigDone => "ztpConfigDone",
            Self::Deployed => "deployed",
            Self::L2Verified => "L2Verified",
            Self::L3Verified => "L3Verified",
        }
    }
}

/// Role of a device in the fabric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeviceRole {
    /// Interconnects leaves
    Spine,
    /// Hosts connect here
    Leaf,
}

impl ClosedEnum for DeviceRole {
    const VARIANTS: &'static [Self] = &[Self::Spine, Self::Leaf];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Spine => "spine",
            Self::Leaf => "leaf",
        }
    }
}

/// Per-layer health or configuration status of a device
///
/// A free-text reason accompanies the status only when it is `Error`;
/// see the setters on [`Device`](crate::domain::Device).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationalStatus {
    #[default]
    Unknown,
    Processing,
    Good,
    Error,
}

impl ClosedEnum for OperationalStatus {
    const VARIANTS: &'static [Self] = &[
        Self::Unknown,
        Self::Processing,
        Self::Good,
        Self::Error,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Processing => "processing",
            Self::Good => "good",
            Self::Error => "error",
        }
    }
}

/// Whether a device (and its interfaces) participate in deployment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeployStatus {
    /// Counted and configured by the deployment workflow
    #[default]
    Deploy,
    /// Pre-staged only
    Provision,
}

impl ClosedEnum for DeployStatus {
    const VARIANTS: &'static [Self] = &[Self::Deploy, Self::Provision];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Deploy => "deploy",
            Self::Provision => "provision",
        }
    }
}

/// Result of LLDP neighbor verification on a physical port or link
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LldpStatus {
    #[default]
    Unknown,
    Good,
    Error,
}

impl ClosedEnum for LldpStatus {
    const VARIANTS: &'static [Self] = &[Self::Unknown, Self::Good, Self::Error];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Good => "good",
            Self::Error => "error",
        }
    }
}

macro_rules! impl_display {
    ($($name:ident),+ $(,)?) => {
        $(
            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }
        )+
    };
}

impl_display!(
    TopologyType,
    PodState,
    DeviceRole,
    OperationalStatus,
    DeployStatus,
    LldpStatus,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enum_guard;
    use test_case::test_case;

    #[test_case("threeStage", TopologyType::ThreeStage)]
    #[test_case("fiveStageRealEstate", TopologyType::FiveStageRealEstate)]
    #[test_case("fiveStagePerformance", TopologyType::FiveStagePerformance)]
    fn test_topology_type_wire_names(name: &str, expected: TopologyType) {
        let parsed: TopologyType = enum_guard::one_of("topologyType", name).unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(expected.as_str(), name);
    }

    #[test]
    fn test_pod_state_wire_names_match_serde() {
        for state in PodState::VARIANTS {
            let json = serde_json::to_string(state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.as_str()));
            let back: PodState = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *state);
        }
    }

    #[test]
    fn test_l2_verified_keeps_uppercase_prefix() {
        assert_eq!(PodState::L2Verified.as_str(), "L2Verified");
        assert_eq!(
            serde_json::from_str::<PodState>("\"L3Verified\"").unwrap(),
            PodState::L3Verified
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(PodState::default(), PodState::Unknown);
        assert_eq!(OperationalStatus::default(), OperationalStatus::Unknown);
        assert_eq!(DeployStatus::default(), DeployStatus::Deploy);
        assert_eq!(LldpStatus::default(), LldpStatus::Unknown);
    }

    #[test]
    fn test_display_uses_wire_name() {
        assert_eq!(DeviceRole::Spine.to_string(), "spine");
        assert_eq!(DeployStatus::Provision.to_string(), "provision");
    }
}
