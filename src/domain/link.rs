// Copyright (c) 2025 - Cowboy AI, Inc.
//! Additional Link Entity — cabling discovered outside the managed graph
//!
//! LLDP sweeps report connections whose endpoints are not always managed
//! devices, so both ends are free-text device/port names rather than ids.
//! The persistence layer enforces that the full endpoint 4-tuple is unique.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity_id::EntityId;
use crate::domain::status::LldpStatus;

/// A discovered cable between two named ports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalLink {
    pub id: EntityId<AdditionalLink>,
    pub device1: String,
    pub port1: String,
    pub device2: String,
    pub port2: String,
    pub lldp_status: LldpStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AdditionalLink {
    /// Record a discovered cable; verification starts `unknown`
    pub fn new(
        device1: impl Into<String>,
        port1: impl Into<String>,
        device2: impl Into<String>,
        port2: impl Into<String>,
        lldp_status: LldpStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::new(),
            device1: device1.into(),
            port1: port1.into(),
            device2: device2.into(),
            port2: port2.into(),
            lldp_status,
            created_at: now,
            updated_at: now,
        }
    }

    /// The uniqueness key: both endpoints, in order
    pub fn endpoints(&self) -> (&str, &str, &str, &str) {
        (&self.device1, &self.port1, &self.device2, &self.port2)
    }

    pub fn set_lldp_status(&mut self, status: LldpStatus) {
        self.lldp_status = status;
        self.updated_at = Utc::now();
    }
}
