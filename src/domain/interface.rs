// Copyright (c) 2025 - Cowboy AI, Inc.
//! Interface Entity — physical ports and logical units
//!
//! One type covers both flavors: a physical port (IFD) carries a fabric
//! role, MTU and LLDP verification result; a logical unit (IFL) carries an
//! optional address and MTU. Interfaces reference each other by id — `peer`
//! points at the far end of a cable, `layer_below` points at the interface
//! this one is stacked on (a logical unit on its port).
//!
//! Sorting interfaces by name alone misorders ports (`et-0/0/11` before
//! `et-0/0/2`), so every interface derives a numeric sort key from its
//! fpc/pic/port triple at construction time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::device::Device;
use crate::domain::entity_id::EntityId;
use crate::domain::status::{DeployStatus, LldpStatus};

/// Flavor-specific fields of an [`Interface`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InterfaceKind {
    /// Physical port (IFD)
    #[serde(rename_all = "camelCase")]
    Physical {
        /// Fabric role of the port, e.g. `uplink` or `downlink`
        role: String,
        /// 0 means the global default applies
        mtu: u32,
        lldp_status: LldpStatus,
    },
    /// Logical unit (IFL)
    #[serde(rename_all = "camelCase")]
    Logical {
        /// Optional so the address can be allocated later
        #[serde(skip_serializing_if = "Option::is_none")]
        ip_address: Option<String>,
        /// 0 means the global default applies
        mtu: u32,
    },
}

/// A port or logical unit on a device
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interface {
    pub id: EntityId<Interface>,
    pub name: String,
    /// Deterministic sort key derived from the name; absent when the name
    /// has no fpc/pic/port shape, see [`derive_name_order_num`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_order_num: Option<u32>,
    pub device_id: EntityId<Device>,
    /// Far end of the cable or logical adjacency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_id: Option<EntityId<Interface>>,
    /// The interface this one is stacked on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer_below_id: Option<EntityId<Interface>>,
    pub deploy_status: DeployStatus,
    #[serde(flatten)]
    pub kind: InterfaceKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Derive the numeric sort key for an interface name
///
/// The last three `/`-separated components are read as fpc/pic/port and
/// combined as `fpc * 10000 + pic * 100 + port`, saturating rather than
/// wrapping when a component is oversized. The pic and port components
/// must be plain numbers; the fpc component usually carries the media
/// prefix (`et-1`), so its digits after the last `-` count even though the
/// component is not purely numeric; ignoring them would collapse every fpc
/// group onto the same key.
///
/// Names without that shape (`irb`, `lo0.0`, a unit suffix like
/// `et-0/0/0.0`) derive no key: they sort first, by name, and place no
/// claim on a device's key space.
pub fn derive_name_order_num(name: &str) -> Option<u32> {
    let parts: Vec<&str> = name.split('/').collect();
    if !(3..=4).contains(&parts.len()) {
        return None;
    }
    let fpc = parts[parts.len() - 3];
    let pic: u32 = parts[parts.len() - 2].parse().ok()?;
    let port: u32 = parts[parts.len() - 1].parse().ok()?;

    let fpc_num = fpc
        .parse::<u32>()
        .or_else(|_| fpc.rsplit('-').next().unwrap_or("").parse::<u32>())
        .unwrap_or(0);

    Some(
        fpc_num
            .saturating_mul(10000)
            .saturating_add(pic.saturating_mul(100))
            .saturating_add(port),
    )
}

impl Interface {
    /// Create a physical port (IFD) on `device_id`
    pub fn physical(
        name: impl Into<String>,
        device_id: EntityId<Device>,
        role: impl Into<String>,
        mtu: u32,
        deploy_status: DeployStatus,
    ) -> Self {
        Self::with_kind(
            name,
            device_id,
            deploy_status,
            InterfaceKind::Physical {
                role: role.into(),
                mtu,
                lldp_status: LldpStatus::Unknown,
            },
        )
    }

    /// Create a logical unit (IFL) on `device_id`
    pub fn logical(
        name: impl Into<String>,
        device_id: EntityId<Device>,
        ip_address: Option<&str>,
        mtu: u32,
        deploy_status: DeployStatus,
    ) -> Self {
        Self::with_kind(
            name,
            device_id,
            deploy_status,
            InterfaceKind::Logical {
                ip_address: ip_address.map(String::from),
                mtu,
            },
        )
    }

    fn with_kind(
        name: impl Into<String>,
        device_id: EntityId<Device>,
        deploy_status: DeployStatus,
        kind: InterfaceKind,
    ) -> Self {
        let name = name.into();
        let now = Utc::now();
        Self {
            id: EntityId::new(),
            name_order_num: derive_name_order_num(&name),
            name,
            device_id,
            peer_id: None,
            layer_below_id: None,
            deploy_status,
            kind,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_physical(&self) -> bool {
        matches!(self.kind, InterfaceKind::Physical { .. })
    }

    pub fn is_logical(&self) -> bool {
        matches!(self.kind, InterfaceKind::Logical { .. })
    }

    /// Fabric role, physical ports only
    pub fn role(&self) -> Option<&str> {
        match &self.kind {
            InterfaceKind::Physical { role, .. } => Some(role),
            InterfaceKind::Logical { .. } => None,
        }
    }

    pub fn mtu(&self) -> u32 {
        match &self.kind {
            InterfaceKind::Physical { mtu, .. } | InterfaceKind::Logical { mtu, .. } => *mtu,
        }
    }

    /// LLDP verification result, physical ports only
    pub fn lldp_status(&self) -> Option<LldpStatus> {
        match &self.kind {
            InterfaceKind::Physical { lldp_status, .. } => Some(*lldp_status),
            InterfaceKind::Logical { .. } => None,
        }
    }

    /// Set the LLDP verification result; no-op on logical units
    pub fn set_lldp_status(&mut self, status: LldpStatus) {
        if let InterfaceKind::Physical { lldp_status, .. } = &mut self.kind {
            *lldp_status = status;
            self.updated_at = Utc::now();
        }
    }

    /// Address of a logical unit, if allocated
    pub fn ip_address(&self) -> Option<&str> {
        match &self.kind {
            InterfaceKind::Logical { ip_address, .. } => ip_address.as_deref(),
            InterfaceKind::Physical { .. } => None,
        }
    }

    /// Assign the address of a logical unit; no-op on physical ports
    pub fn set_ip_address(&mut self, address: Option<&str>) {
        if let InterfaceKind::Logical { ip_address, .. } = &mut self.kind {
            *ip_address = address.map(String::from);
            self.updated_at = Utc::now();
        }
    }

    /// Point this interface at its far end (one side only)
    ///
    /// Peering is not forced symmetric here; use [`link_peers`] to wire a
    /// cable in both directions at once.
    pub fn set_peer(&mut self, peer: Option<EntityId<Interface>>) {
        self.peer_id = peer;
        self.updated_at = Utc::now();
    }

    /// Stack this interface on another (logical unit on its port)
    pub fn set_layer_below(&mut self, below: Option<EntityId<Interface>>) {
        self.layer_below_id = below;
        self.updated_at = Utc::now();
    }

    pub fn set_deploy_status(&mut self, status: DeployStatus) {
        self.deploy_status = status;
        self.updated_at = Utc::now();
    }
}

/// Wire a cable: make `a` and `b` each other's peer
pub fn link_peers(a: &mut Interface, b: &mut Interface) {
    a.set_peer(Some(b.id));
    b.set_peer(Some(a.id));
}

/// Interfaces stacked directly on `below` within `interfaces`
pub fn layer_aboves<'a>(
    interfaces: &'a [Interface],
    below: EntityId<Interface>,
) -> Vec<&'a Interface> {
    interfaces
        .iter()
        .filter(|i| i.layer_below_id == Some(below))
        .collect()
}

/// Detect a cycle in the layering graph of `interfaces`
///
/// Layering is set pointer-at-a-time, so a cycle can be introduced by
/// mistake; callers that care run this check before trusting the stack.
/// Returns the ids along the first cycle found, starting and ending at the
/// same interface.
pub fn find_layering_cycle(interfaces: &[Interface]) -> Option<Vec<EntityId<Interface>>> {
    for start in interfaces {
        let mut path = vec![start.id];
        let mut seen: HashSet<EntityId<Interface>> = HashSet::from([start.id]);
        let mut current = start.layer_below_id;
        while let Some(id) = current {
            path.push(id);
            if !seen.insert(id) {
                // trim the lead-in so the path starts at the cycle entry
                let entry = path.iter().position(|&p| p == id).unwrap_or(0);
                return Some(path.split_off(entry));
            }
            current = interfaces
                .iter()
                .find(|i| i.id == id)
                .and_then(|i| i.layer_below_id);
        }
    }
    None
}

/// Sort interfaces into deterministic port order
///
/// Primary key is the derived [`name_order_num`](Interface::name_order_num)
/// with keyless interfaces first; name breaks ties so interfaces without a
/// port shape still order stably.
pub fn sort_by_name_order(interfaces: &mut [Interface]) {
    interfaces.sort_by(|a, b| {
        a.name_order_num
            .cmp(&b.name_order_num)
            .then_with(|| a.name.cmp(&b.name))
    });
}
