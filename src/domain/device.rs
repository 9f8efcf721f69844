// Copyright (c) 2025 - Cowboy AI, Inc.
//! Device Entity — one switch in a pod
//!
//! A device belongs to exactly one pod and plays the spine or leaf role.
//! Three independent status tracks (config, L2, L3) each carry a free-text
//! reason that exists only while the track is in error. The device may hold
//! its own credential; when it does not, reads fall back to the owning pod.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cipher::CredentialCipher;
use crate::domain::entity_id::EntityId;
use crate::domain::interface::Interface;
use crate::domain::pod::Pod;
use crate::domain::status::{DeployStatus, DeviceRole, OperationalStatus};
use crate::errors::FabricResult;

/// One switch in a fabric pod
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: EntityId<Device>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Device-specific credential; absent means the pod credential applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_password: Option<String>,
    pub role: DeviceRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asn: Option<u32>,
    pub l2_status: OperationalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l2_status_reason: Option<String>,
    pub l3_status: OperationalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l3_status_reason: Option<String>,
    pub config_status: OperationalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_status_reason: Option<String>,
    /// Rendered device configuration, written by the config generator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Vec<u8>>,
    pub pod_id: EntityId<Pod>,
    pub deploy_status: DeployStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Device {
    /// Create a device in `pod_id`
    ///
    /// All status tracks start `unknown`. An empty or absent password leaves
    /// the device on the pod credential; a non-empty one is encrypted and
    /// stored on the device.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        family: Option<&str>,
        username: Option<&str>,
        password: Option<&str>,
        role: DeviceRole,
        mac_address: Option<&str>,
        management_ip: Option<&str>,
        pod_id: EntityId<Pod>,
        deploy_status: DeployStatus,
        cipher: &dyn CredentialCipher,
    ) -> FabricResult<Self> {
        let now = Utc::now();
        let encrypted_password = match password {
            Some(p) if !p.is_empty() => Some(cipher.encrypt(p)?),
            _ => None,
        };
        let device = Self {
            id: EntityId::new(),
            name: name.into(),
            family: family.map(String::from),
            username: username.map(String::from),
            encrypted_password,
            role,
            mac_address: mac_address.map(String::from),
            management_ip: management_ip.map(String::from),
            asn: None,
            l2_status: OperationalStatus::Unknown,
            l2_status_reason: None,
            l3_status: OperationalStatus::Unknown,
            l3_status_reason: None,
            config_status: OperationalStatus::Unknown,
            config_status_reason: None,
            config: None,
            pod_id,
            deploy_status,
            created_at: now,
            updated_at: now,
        };
        debug!(device_id = %device.id, name = %device.name, role = %device.role, "device created");
        Ok(device)
    }

    /// Update the mutable subset of a device
    ///
    /// Touches name, username, credential, MAC address and deploy status
    /// only; identity, role, pod membership and the status tracks are not
    /// update concerns. The new deploy status cascades to every interface
    /// in `interfaces` (the device's interface set, resolved by the
    /// persistence layer). An empty or absent password leaves the stored
    /// credential untouched.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        username: Option<&str>,
        password: Option<&str>,
        mac_address: Option<&str>,
        deploy_status: DeployStatus,
        interfaces: &mut [Interface],
        cipher: &dyn CredentialCipher,
    ) -> FabricResult<()> {
        self.name = name.into();
        self.username = username.map(String::from);
        if let Some(p) = password {
            if !p.is_empty() {
                self.encrypted_password = Some(cipher.encrypt(p)?);
            }
        }
        self.mac_address = mac_address.map(String::from);
        self.deploy_status = deploy_status;
        for interface in interfaces.iter_mut() {
            interface.set_deploy_status(deploy_status);
        }
        self.updated_at = Utc::now();
        debug!(device_id = %self.id, "device updated");
        Ok(())
    }

    /// Decrypt the effective credential, falling back to the pod's
    ///
    /// `pod` must be the owning pod. Returns `Ok(None)` when neither the
    /// device nor the pod holds a credential.
    pub fn get_cleartext_password(
        &self,
        pod: &Pod,
        cipher: &dyn CredentialCipher,
    ) -> FabricResult<Option<String>> {
        match &self.encrypted_password {
            Some(ciphertext) if !ciphertext.is_empty() => {
                Ok(Some(cipher.decrypt(ciphertext)?))
            }
            _ => pod.get_cleartext_password(cipher),
        }
    }

    /// One-way hash of the effective credential, `Ok(None)` when absent
    pub fn get_hash_password(
        &self,
        pod: &Pod,
        cipher: &dyn CredentialCipher,
    ) -> FabricResult<Option<String>> {
        match self.get_cleartext_password(pod, cipher)? {
            Some(cleartext) => Ok(Some(cipher.hash(&cleartext)?)),
            None => Ok(None),
        }
    }

    /// Set the configuration status track
    ///
    /// The reason is stored only while the status is `error`; any other
    /// status clears it, so a stale reason can never outlive the error.
    pub fn set_config_status(&mut self, status: OperationalStatus, reason: Option<&str>) {
        self.config_status = status;
        self.config_status_reason = Self::reason_for(status, reason);
        self.updated_at = Utc::now();
    }

    /// Set the L2 verification status track; same reason rule as
    /// [`set_config_status`](Self::set_config_status)
    pub fn set_l2_status(&mut self, status: OperationalStatus, reason: Option<&str>) {
        self.l2_status = status;
        self.l2_status_reason = Self::reason_for(status, reason);
        self.updated_at = Utc::now();
    }

    /// Set the L3 verification status track; same reason rule as
    /// [`set_config_status`](Self::set_config_status)
    pub fn set_l3_status(&mut self, status: OperationalStatus, reason: Option<&str>) {
        self.l3_status = status;
        self.l3_status_reason = Self::reason_for(status, reason);
        self.updated_at = Utc::now();
    }

    fn reason_for(status: OperationalStatus, reason: Option<&str>) -> Option<String> {
        if status == OperationalStatus::Error {
            reason.map(String::from)
        } else {
            None
        }
    }
}
