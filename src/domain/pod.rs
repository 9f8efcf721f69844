// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pod Entity — one Clos fabric instance
//!
//! A pod is the top-level fabric unit: spine/leaf counts and device types,
//! address-block prefixes, AS numbers, topology flavor, out-of-band
//! management info, lifecycle state and the shared device credential that
//! member devices inherit unless they carry their own.
//!
//! # Invariants
//! - All required fields (see [`Pod::validate`]) are present before the pod
//!   is trusted downstream
//! - The four prefix fields parse as CIDR networks
//! - `2 ≤ leafUplinkcountMustBeUp ≤ spineCount` once validated
//! - Cleartext credentials are encrypted on the way in and never retained

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::cipher::CredentialCipher;
use crate::domain::device::Device;
use crate::domain::entity_id::EntityId;
use crate::domain::enum_guard;
use crate::domain::network::CidrPrefix;
use crate::domain::status::{DeployStatus, DeviceRole, PodState, TopologyType};
use crate::errors::{FabricError, FabricResult};

/// Input description for constructing or updating a [`Pod`]
///
/// Deserializes from the camelCase wire form. On update, fields left `None`
/// are ignored (partial update semantics) — an absent field never nulls the
/// stored value. `devicePassword` carries cleartext which is encrypted on
/// apply and never stored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PodDescription {
    pub id: Option<EntityId<Pod>>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub spine_count: Option<u32>,
    pub spine_device_type: Option<String>,
    pub leaf_count: Option<u32>,
    pub leaf_device_type: Option<String>,
    pub leaf_uplinkcount_must_be_up: Option<u32>,
    pub host_or_vm_count_per_leaf: Option<u32>,
    pub inter_connect_prefix: Option<String>,
    pub vlan_prefix: Option<String>,
    pub loopback_prefix: Option<String>,
    pub management_prefix: Option<String>,
    #[serde(rename = "spineAS")]
    pub spine_as: Option<u32>,
    #[serde(rename = "leafAS")]
    pub leaf_as: Option<u32>,
    /// Validated against [`TopologyType`] when applied
    pub topology_type: Option<String>,
    /// Accepts a single address or a list on the wire
    #[serde(deserialize_with = "one_or_many")]
    pub out_of_band_address_list: Option<Vec<String>>,
    pub out_of_band_gateway: Option<String>,
    pub spine_junos_image: Option<String>,
    pub leaf_junos_image: Option<String>,
    pub device_password: Option<String>,
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => None,
        Some(OneOrMany::One(address)) => Some(vec![address]),
        Some(OneOrMany::Many(addresses)) => Some(addresses),
    })
}

/// One Clos fabric instance
///
/// Owns its member [`Device`]s through the persistence layer (deleting a
/// pod deletes its devices). Relations hold ids, not live objects, so
/// operations that need the member set take it as a parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pod {
    pub id: EntityId<Pod>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spine_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spine_device_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaf_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaf_device_type: Option<String>,
    /// Uplinks a leaf must have up to count as healthy; 0 means derive it
    /// from the deployed spine count (see
    /// [`calculate_effective_leaf_uplinkcount_must_be_up`](Self::calculate_effective_leaf_uplinkcount_must_be_up))
    pub leaf_uplinkcount_must_be_up: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_or_vm_count_per_leaf: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inter_connect_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loopback_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_prefix: Option<String>,
    #[serde(rename = "spineAS", skip_serializing_if = "Option::is_none")]
    pub spine_as: Option<u32>,
    #[serde(rename = "leafAS", skip_serializing_if = "Option::is_none")]
    pub leaf_as: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topology_type: Option<TopologyType>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub out_of_band_address_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_of_band_gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spine_junos_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaf_junos_image: Option<String>,

    // Written by the address-allocation subsystem, untouched by update().
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_inter_connect_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_irb_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_loopback_block: Option<String>,
    #[serde(rename = "allocatedSpineAS", skip_serializing_if = "Option::is_none")]
    pub allocated_spine_as: Option<u32>,
    #[serde(rename = "allocatedLeafAS", skip_serializing_if = "Option::is_none")]
    pub allocated_leaf_as: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaf_generic_config: Option<Vec<u8>>,
    pub state: PodState,
    /// Two-way encrypted; cleartext is never stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_password: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pod {
    /// Create a pod from an input description
    ///
    /// Takes a fresh identity unless the description supplies one. Fields
    /// are copied per the description's mapping rules, the uplink count
    /// defaults to 2 and the state to `unknown`. A non-empty cleartext
    /// `devicePassword` is encrypted via `cipher` before storage.
    pub fn new(
        name: impl Into<String>,
        description: &PodDescription,
        cipher: &dyn CredentialCipher,
    ) -> FabricResult<Self> {
        let now = Utc::now();
        let mut pod = Self {
            id: description.id.unwrap_or_else(EntityId::new),
            name: name.into(),
            description: None,
            spine_count: None,
            spine_device_type: None,
            leaf_count: None,
            leaf_device_type: None,
            leaf_uplinkcount_must_be_up: 2,
            host_or_vm_count_per_leaf: None,
            inter_connect_prefix: None,
            vlan_prefix: None,
            loopback_prefix: None,
            management_prefix: None,
            spine_as: None,
            leaf_as: None,
            topology_type: None,
            out_of_band_address_list: Vec::new(),
            out_of_band_gateway: None,
            spine_junos_image: None,
            leaf_junos_image: None,
            allocated_inter_connect_block: None,
            allocated_irb_block: None,
            allocated_loopback_block: None,
            allocated_spine_as: None,
            allocated_leaf_as: None,
            inventory_data: None,
            leaf_generic_config: None,
            state: PodState::Unknown,
            encrypted_password: None,
            created_at: now,
            updated_at: now,
        };
        pod.apply(description, cipher)?;
        debug!(pod_id = %pod.id, name = %pod.name, "pod created");
        Ok(pod)
    }

    /// Update the pod from an input description
    ///
    /// Identity is preserved unless explicitly overridden (by the `id`
    /// parameter or the description). Only the documented field subset is
    /// touched; fields absent from the description are left unchanged, not
    /// nulled. Allocated blocks, inventory data, generic config and state
    /// are never rewritten here.
    pub fn update(
        &mut self,
        id: Option<EntityId<Pod>>,
        name: Option<&str>,
        description: &PodDescription,
        cipher: &dyn CredentialCipher,
    ) -> FabricResult<()> {
        if let Some(id) = id {
            self.id = id;
        } else if let Some(id) = description.id {
            self.id = id;
        }
        if let Some(name) = name {
            self.name = name.to_string();
        } else if let Some(name) = &description.name {
            self.name = name.clone();
        }
        self.apply(description, cipher)?;
        debug!(pod_id = %self.id, "pod updated");
        Ok(())
    }

    fn apply(
        &mut self,
        d: &PodDescription,
        cipher: &dyn CredentialCipher,
    ) -> FabricResult<()> {
        if let Some(v) = &d.description {
            self.description = Some(v.clone());
        }
        if let Some(v) = d.spine_count {
            self.spine_count = Some(v);
        }
        if let Some(v) = &d.spine_device_type {
            self.spine_device_type = Some(v.clone());
        }
        if let Some(v) = d.leaf_count {
            self.leaf_count = Some(v);
        }
        if let Some(v) = &d.leaf_device_type {
            self.leaf_device_type = Some(v.clone());
        }
        if let Some(v) = d.leaf_uplinkcount_must_be_up {
            self.leaf_uplinkcount_must_be_up = v;
        }
        if let Some(v) = d.host_or_vm_count_per_leaf {
            self.host_or_vm_count_per_leaf = Some(v);
        }
        if let Some(v) = &d.inter_connect_prefix {
            self.inter_connect_prefix = Some(v.clone());
        }
        if let Some(v) = &d.vlan_prefix {
            self.vlan_prefix = Some(v.clone());
        }
        if let Some(v) = &d.loopback_prefix {
            self.loopback_prefix = Some(v.clone());
        }
        if let Some(v) = &d.management_prefix {
            self.management_prefix = Some(v.clone());
        }
        if let Some(v) = d.spine_as {
            self.spine_as = Some(v);
        }
        if let Some(v) = d.leaf_as {
            self.leaf_as = Some(v);
        }
        if let Some(v) = &d.topology_type {
            self.topology_type = Some(enum_guard::one_of("topologyType", v)?);
        }
        if let Some(addresses) = &d.out_of_band_address_list {
            self.out_of_band_address_list = addresses
                .iter()
                .filter(|a| !a.is_empty())
                .cloned()
                .collect();
        }
        if let Some(v) = &d.out_of_band_gateway {
            self.out_of_band_gateway = Some(v.clone());
        }
        if let Some(v) = &d.spine_junos_image {
            self.spine_junos_image = Some(v.clone());
        }
        if let Some(v) = &d.leaf_junos_image {
            self.leaf_junos_image = Some(v.clone());
        }
        if let Some(password) = &d.device_password {
            if !password.is_empty() {
                self.encrypted_password = Some(cipher.encrypt(password)?);
            }
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Effective number of uplinks a leaf must have up
    ///
    /// An explicitly configured positive value always wins. Otherwise the
    /// count is half the deployed spines, rounded up, floored at 2: a leaf
    /// needs at least half its spines reachable to tolerate one spine
    /// failure, with 2 as the safety minimum regardless of fabric size.
    ///
    /// `devices` is the pod's member set, resolved by the persistence layer.
    pub fn calculate_effective_leaf_uplinkcount_must_be_up(&self, devices: &[Device]) -> u32 {
        if self.leaf_uplinkcount_must_be_up > 0 {
            return self.leaf_uplinkcount_must_be_up;
        }

        let deployed_spines = devices
            .iter()
            .filter(|d| d.role == DeviceRole::Spine && d.deploy_status == DeployStatus::Deploy)
            .count() as u32;

        (deployed_spines.div_ceil(2)).max(2)
    }

    /// Decrypt the stored device credential
    ///
    /// Returns `Ok(None)` when no credential is stored — that is not an
    /// error. Cipher failures propagate.
    pub fn get_cleartext_password(
        &self,
        cipher: &dyn CredentialCipher,
    ) -> FabricResult<Option<String>> {
        match &self.encrypted_password {
            Some(ciphertext) if !ciphertext.is_empty() => {
                Ok(Some(cipher.decrypt(ciphertext)?))
            }
            _ => Ok(None),
        }
    }

    /// One-way hash of the stored device credential, `Ok(None)` when absent
    pub fn get_hash_password(
        &self,
        cipher: &dyn CredentialCipher,
    ) -> FabricResult<Option<String>> {
        match self.get_cleartext_password(cipher)? {
            Some(cleartext) => Ok(Some(cipher.hash(&cleartext)?)),
            None => Ok(None),
        }
    }

    /// Validate the pod before it is trusted downstream
    ///
    /// Three independent passes run in order: required fields, prefix
    /// well-formedness, uplink-count range. Each pass aggregates every
    /// offending field into a single error rather than stopping at the
    /// first. Idempotent and side-effect-free.
    pub fn validate(&self) -> FabricResult<()> {
        self.validate_required_fields()?;
        self.validate_prefixes()?;

        let spine_count = self.spine_count.unwrap_or(0);
        if self.leaf_uplinkcount_must_be_up < 2 || self.leaf_uplinkcount_must_be_up > spine_count
        {
            return Err(FabricError::InvalidRange {
                field: "leafUplinkcountMustBeUp".to_string(),
                value: i64::from(self.leaf_uplinkcount_must_be_up),
                min: 2,
                max: i64::from(spine_count),
            });
        }
        Ok(())
    }

    fn validate_required_fields(&self) -> FabricResult<()> {
        let mut missing = Vec::new();
        if self.spine_count.is_none() {
            missing.push("spineCount");
        }
        if self.spine_device_type.is_none() {
            missing.push("spineDeviceType");
        }
        if self.leaf_count.is_none() {
            missing.push("leafCount");
        }
        if self.leaf_device_type.is_none() {
            missing.push("leafDeviceType");
        }
        if self.host_or_vm_count_per_leaf.is_none() {
            missing.push("hostOrVmCountPerLeaf");
        }
        if self.inter_connect_prefix.is_none() {
            missing.push("interConnectPrefix");
        }
        if self.vlan_prefix.is_none() {
            missing.push("vlanPrefix");
        }
        if self.loopback_prefix.is_none() {
            missing.push("loopbackPrefix");
        }
        if self.management_prefix.is_none() {
            missing.push("managementPrefix");
        }
        if self.spine_as.is_none() {
            missing.push("spineAS");
        }
        if self.leaf_as.is_none() {
            missing.push("leafAS");
        }
        if self.topology_type.is_none() {
            missing.push("topologyType");
        }
        if self.encrypted_password.is_none() {
            missing.push("devicePassword");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(FabricError::MissingRequiredField(
                missing.into_iter().map(String::from).collect(),
            ))
        }
    }

    fn validate_prefixes(&self) -> FabricResult<()> {
        let prefixes = [
            ("interConnectPrefix", &self.inter_connect_prefix),
            ("vlanPrefix", &self.vlan_prefix),
            ("loopbackPrefix", &self.loopback_prefix),
            ("managementPrefix", &self.management_prefix),
        ];

        let mut invalid = Vec::new();
        for (field, value) in prefixes {
            if let Some(prefix) = value {
                if CidrPrefix::parse(field, prefix).is_err() {
                    invalid.push(field.to_string());
                }
            }
        }

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(FabricError::InvalidAddressFormat(invalid))
        }
    }

    /// Out-of-band addresses in their persisted comma-joined form
    pub fn out_of_band_addresses_joined(&self) -> Option<String> {
        if self.out_of_band_address_list.is_empty() {
            None
        } else {
            Some(self.out_of_band_address_list.join(","))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::KeyedCipher;
    use pretty_assertions::assert_eq;

    fn cipher() -> KeyedCipher {
        KeyedCipher::new("pod-test-key").unwrap()
    }

    fn full_description() -> PodDescription {
        serde_json::from_value(serde_json::json!({
            "spineCount": 4,
            "spineDeviceType": "qfx5100-24q-2p",
            "leafCount": 6,
            "leafDeviceType": "qfx5100-48s-6q",
            "hostOrVmCountPerLeaf": 254,
            "interConnectPrefix": "192.168.0.0/24",
            "vlanPrefix": "172.16.0.0/22",
            "loopbackPrefix": "10.0.0.0/24",
            "managementPrefix": "10.92.82.0/24",
            "spineAS": 100,
            "leafAS": 200,
            "topologyType": "threeStage",
            "outOfBandAddressList": ["10.204.244.95", "10.204.244.98"],
            "outOfBandGateway": "10.204.confgw",
            "devicePassword": "Embe1mpls"
        }))
        .unwrap()
    }

    #[test]
    fn test_construct_defaults() {
        let pod = Pod::new("pod1", &PodDescription::default(), &cipher()).unwrap();
        assert_eq!(pod.name, "pod1");
        assert_eq!(pod.state, PodState::Unknown);
        assert_eq!(pod.leaf_uplinkcount_must_be_up, 2);
        assert!(pod.encrypted_password.is_none());
        assert!(pod.spine_count.is_none());
    }

    #[test]
    fn test_construct_encrypts_password() {
        let cipher = cipher();
        let pod = Pod::new("pod1", &full_description(), &cipher).unwrap();
        let stored = pod.encrypted_password.clone().unwrap();
        assert_ne!(stored, "Embe1mpls");
        assert_eq!(
            pod.get_cleartext_password(&cipher).unwrap().as_deref(),
            Some("Embe1mpls")
        );
        assert_eq!(
            pod.get_hash_password(&cipher).unwrap().unwrap(),
            cipher.hash("Embe1mpls").unwrap()
        );
    }

    #[test]
    fn test_no_password_reads_as_none() {
        let cipher = cipher();
        let pod = Pod::new("pod1", &PodDescription::default(), &cipher).unwrap();
        assert_eq!(pod.get_cleartext_password(&cipher).unwrap(), None);
        assert_eq!(pod.get_hash_password(&cipher).unwrap(), None);
    }

    #[test]
    fn test_supplied_identity_is_kept() {
        let id = EntityId::new();
        let description = PodDescription {
            id: Some(id),
            ..PodDescription::default()
        };
        let pod = Pod::new("pod1", &description, &cipher()).unwrap();
        assert_eq!(pod.id, id);
    }

    #[test]
    fn test_partial_update_leaves_absent_fields_unchanged() {
        let cipher = cipher();
        let mut pod = Pod::new("pod1", &full_description(), &cipher).unwrap();
        let original_id = pod.id;

        let patch = PodDescription {
            spine_count: Some(6),
            ..PodDescription::default()
        };
        pod.update(None, None, &patch, &cipher).unwrap();

        assert_eq!(pod.id, original_id);
        assert_eq!(pod.name, "pod1");
        assert_eq!(pod.spine_count, Some(6));
        assert_eq!(pod.leaf_count, Some(6));
        assert_eq!(pod.topology_type, Some(TopologyType::ThreeStage));
        assert!(pod.encrypted_password.is_some());
    }

    #[test]
    fn test_update_rejects_unknown_topology_type() {
        let cipher = cipher();
        let mut pod = Pod::new("pod1", &full_description(), &cipher).unwrap();
        let patch = PodDescription {
            topology_type: Some("sevenStage".to_string()),
            ..PodDescription::default()
        };
        let err = pod.update(None, None, &patch, &cipher).unwrap_err();
        assert!(matches!(err, FabricError::InvalidEnumValue { .. }));
    }

    #[test]
    fn test_single_oob_address_accepted_on_the_wire() {
        let description: PodDescription = serde_json::from_value(serde_json::json!({
            "outOfBandAddressList": "10.204.244.95"
        }))
        .unwrap();
        let pod = Pod::new("pod1", &description, &cipher()).unwrap();
        assert_eq!(pod.out_of_band_address_list, vec!["10.204.244.95"]);
        assert_eq!(
            pod.out_of_band_addresses_joined().as_deref(),
            Some("10.204.244.95")
        );
    }

    #[test]
    fn test_validate_reports_every_missing_field() {
        let mut description = full_description();
        description.spine_count = None;
        description.topology_type = None;
        let pod = Pod::new("pod1", &description, &cipher()).unwrap();

        let err = pod.validate().unwrap_err();
        assert_eq!(
            err,
            FabricError::MissingRequiredField(vec![
                "spineCount".to_string(),
                "topologyType".to_string(),
            ])
        );
    }

    #[test]
    fn test_validate_names_bad_prefix_field() {
        let mut description = full_description();
        description.inter_connect_prefix = Some("not-an-ip".to_string());
        let pod = Pod::new("pod1", &description, &cipher()).unwrap();

        let err = pod.validate().unwrap_err();
        assert_eq!(
            err,
            FabricError::InvalidAddressFormat(vec!["interConnectPrefix".to_string()])
        );
    }

    #[test]
    fn test_validate_aggregates_bad_prefixes() {
        let mut description = full_description();
        description.vlan_prefix = Some("300.0.0.0/8".to_string());
        description.management_prefix = Some("10.0.0.0/99".to_string());
        let pod = Pod::new("pod1", &description, &cipher()).unwrap();

        let err = pod.validate().unwrap_err();
        assert_eq!(
            err,
            FabricError::InvalidAddressFormat(vec![
                "vlanPrefix".to_string(),
                "managementPrefix".to_string(),
            ])
        );
    }

    #[test]
    fn test_validate_uplink_count_range() {
        let mut description = full_description();
        description.spine_count = Some(3);
        description.leaf_uplinkcount_must_be_up = Some(5);
        let pod = Pod::new("pod1", &description, &cipher()).unwrap();

        let err = pod.validate().unwrap_err();
        assert_eq!(
            err,
            FabricError::InvalidRange {
                field: "leafUplinkcountMustBeUp".to_string(),
                value: 5,
                min: 2,
                max: 3,
            }
        );
    }

    #[test]
    fn test_validate_is_idempotent_on_valid_pod() {
        let pod = Pod::new("pod1", &full_description(), &cipher()).unwrap();
        let before = pod.clone();
        pod.validate().unwrap();
        pod.validate().unwrap();
        assert_eq!(pod.encrypted_password, before.encrypted_password);
        assert_eq!(pod.updated_at, before.updated_at);
    }

    #[test]
    fn test_effective_uplink_count() {
        let cipher = cipher();
        let mut description = full_description();
        description.leaf_uplinkcount_must_be_up = Some(0);
        let mut pod = Pod::new("pod1", &description, &cipher).unwrap();

        let spine = |pod: &Pod, deploy_status| {
            Device::new(
                "spine",
                Some("qfx5100-24q-2p"),
                Some("root"),
                None,
                DeviceRole::Spine,
                None,
                None,
                pod.id,
                deploy_status,
                &cipher,
            )
            .unwrap()
        };

        // 3 deployed spines: ceil(3/2) = 2
        let devices: Vec<Device> = (0..3).map(|_| spine(&pod, DeployStatus::Deploy)).collect();
        assert_eq!(
            pod.calculate_effective_leaf_uplinkcount_must_be_up(&devices),
            2
        );

        // 7 deployed spines: ceil(7/2) = 4
        let devices: Vec<Device> = (0..7).map(|_| spine(&pod, DeployStatus::Deploy)).collect();
        assert_eq!(
            pod.calculate_effective_leaf_uplinkcount_must_be_up(&devices),
            4
        );

        // provisioned-only spines do not count; floor is 2
        let devices: Vec<Device> = (0..7)
            .map(|_| spine(&pod, DeployStatus::Provision))
            .collect();
        assert_eq!(
            pod.calculate_effective_leaf_uplinkcount_must_be_up(&devices),
            2
        );

        // explicit configured value always wins
        pod.leaf_uplinkcount_must_be_up = 3;
        let devices: Vec<Device> = (0..7).map(|_| spine(&pod, DeployStatus::Deploy)).collect();
        assert_eq!(
            pod.calculate_effective_leaf_uplinkcount_must_be_up(&devices),
            3
        );
    }

    #[test]
    fn test_empty_update_password_leaves_credential_untouched() {
        let cipher = cipher();
        let mut pod = Pod::new("pod1", &full_description(), &cipher).unwrap();
        let stored = pod.encrypted_password.clone();

        let patch = PodDescription {
            device_password: Some(String::new()),
            ..PodDescription::default()
        };
        pod.update(None, None, &patch, &cipher).unwrap();
        assert_eq!(pod.encrypted_password, stored);
    }
}
