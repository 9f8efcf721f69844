// Copyright (c) 2025 - Cowboy AI, Inc.
//! Fabric persistence boundary
//!
//! Entities hold ids, not object references, so ownership traversal and the
//! relational guarantees live here: cascading deletes down the
//! pod → device → interface chain, deterministic ordering of member sets,
//! and the uniqueness constraints on interface names and discovered links.
//!
//! [`MemoryStore`] is the reference implementation; production backends
//! implement [`FabricStore`] over whatever engine they persist to.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{
    interface, AdditionalLink, Device, EntityId, Interface, Pod,
};
use crate::errors::{FabricError, FabricResult};

/// Storage and relational guarantees for the fabric entity graph
///
/// Upserts by id. Implementations must keep the documented ordering of
/// member queries and enforce the uniqueness constraints; both are part of
/// the contract, not backend details.
pub trait FabricStore {
    fn save_pod(&mut self, pod: Pod) -> FabricResult<()>;
    fn get_pod(&self, id: EntityId<Pod>) -> Option<Pod>;
    /// Delete a pod and, by cascade, its devices and their interfaces
    fn delete_pod(&mut self, id: EntityId<Pod>) -> FabricResult<()>;
    fn list_pods(&self) -> Vec<Pod>;

    fn save_device(&mut self, device: Device) -> FabricResult<()>;
    fn get_device(&self, id: EntityId<Device>) -> Option<Device>;
    /// Delete a device and, by cascade, its interfaces
    fn delete_device(&mut self, id: EntityId<Device>) -> FabricResult<()>;
    /// Members of a pod, ordered by device name
    fn devices_in_pod(&self, pod_id: EntityId<Pod>) -> Vec<Device>;

    /// Rejects a second interface on the same device with the same name or
    /// the same derived sort key
    fn save_interface(&mut self, interface: Interface) -> FabricResult<()>;
    fn get_interface(&self, id: EntityId<Interface>) -> Option<Interface>;
    fn delete_interface(&mut self, id: EntityId<Interface>) -> FabricResult<()>;
    /// Interfaces of a device in deterministic port order
    fn interfaces_on_device(&self, device_id: EntityId<Device>) -> Vec<Interface>;

    /// Rejects a second link with the same endpoint 4-tuple
    fn save_link(&mut self, link: AdditionalLink) -> FabricResult<()>;
    fn get_link(&self, id: EntityId<AdditionalLink>) -> Option<AdditionalLink>;
    fn delete_link(&mut self, id: EntityId<AdditionalLink>) -> FabricResult<()>;
    fn list_links(&self) -> Vec<AdditionalLink>;
}

/// In-memory [`FabricStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    pods: HashMap<EntityId<Pod>, Pod>,
    devices: HashMap<EntityId<Device>, Device>,
    interfaces: HashMap<EntityId<Interface>, Interface>,
    links: HashMap<EntityId<AdditionalLink>, AdditionalLink>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn device_ids_in_pod(&self, pod_id: EntityId<Pod>) -> Vec<EntityId<Device>> {
        self.devices
            .values()
            .filter(|d| d.pod_id == pod_id)
            .map(|d| d.id)
            .collect()
    }

    fn interface_ids_on_device(&self, device_id: EntityId<Device>) -> Vec<EntityId<Interface>> {
        self.interfaces
            .values()
            .filter(|i| i.device_id == device_id)
            .map(|i| i.id)
            .collect()
    }
}

impl FabricStore for MemoryStore {
    fn save_pod(&mut self, pod: Pod) -> FabricResult<()> {
        self.pods.insert(pod.id, pod);
        Ok(())
    }

    fn get_pod(&self, id: EntityId<Pod>) -> Option<Pod> {
        self.pods.get(&id).cloned()
    }

    fn delete_pod(&mut self, id: EntityId<Pod>) -> FabricResult<()> {
        for device_id in self.device_ids_in_pod(id) {
            self.delete_device(device_id)?;
        }
        if self.pods.remove(&id).is_some() {
            debug!(pod_id = %id, "pod deleted");
        }
        Ok(())
    }

    fn list_pods(&self) -> Vec<Pod> {
        let mut pods: Vec<Pod> = self.pods.values().cloned().collect();
        pods.sort_by(|a, b| a.name.cmp(&b.name));
        pods
    }

    fn save_device(&mut self, device: Device) -> FabricResult<()> {
        self.devices.insert(device.id, device);
        Ok(())
    }

    fn get_device(&self, id: EntityId<Device>) -> Option<Device> {
        self.devices.get(&id).cloned()
    }

    fn delete_device(&mut self, id: EntityId<Device>) -> FabricResult<()> {
        let interface_ids = self.interface_ids_on_device(id);
        for interface_id in &interface_ids {
            self.interfaces.remove(interface_id);
        }
        if self.devices.remove(&id).is_some() {
            debug!(
                device_id = %id,
                interfaces = interface_ids.len(),
                "device deleted with its interfaces"
            );
        }
        Ok(())
    }

    fn devices_in_pod(&self, pod_id: EntityId<Pod>) -> Vec<Device> {
        let mut devices: Vec<Device> = self
            .devices
            .values()
            .filter(|d| d.pod_id == pod_id)
            .cloned()
            .collect();
        devices.sort_by(|a, b| a.name.cmp(&b.name));
        devices
    }

    fn save_interface(&mut self, interface: Interface) -> FabricResult<()> {
        // keyless interfaces place no claim on the sort-key space
        let conflict = self.interfaces.values().find(|existing| {
            existing.device_id == interface.device_id
                && existing.id != interface.id
                && (existing.name == interface.name
                    || (existing.name_order_num.is_some()
                        && existing.name_order_num == interface.name_order_num))
        });
        if let Some(existing) = conflict {
            return Err(FabricError::UniqueConstraintViolation(format!(
                "interface '{}' collides with '{}' on device {}",
                interface.name, existing.name, interface.device_id
            )));
        }
        self.interfaces.insert(interface.id, interface);
        Ok(())
    }

    fn get_interface(&self, id: EntityId<Interface>) -> Option<Interface> {
        self.interfaces.get(&id).cloned()
    }

    fn delete_interface(&mut self, id: EntityId<Interface>) -> FabricResult<()> {
        self.interfaces.remove(&id);
        Ok(())
    }

    fn interfaces_on_device(&self, device_id: EntityId<Device>) -> Vec<Interface> {
        let mut interfaces: Vec<Interface> = self
            .interfaces
            .values()
            .filter(|i| i.device_id == device_id)
            .cloned()
            .collect();
        interface::sort_by_name_order(&mut interfaces);
        interfaces
    }

    fn save_link(&mut self, link: AdditionalLink) -> FabricResult<()> {
        let duplicate = self
            .links
            .values()
            .any(|existing| existing.id != link.id && existing.endpoints() == link.endpoints());
        if duplicate {
            let (d1, p1, d2, p2) = link.endpoints();
            return Err(FabricError::UniqueConstraintViolation(format!(
                "link {d1}:{p1} <-> {d2}:{p2} already recorded"
            )));
        }
        self.links.insert(link.id, link);
        Ok(())
    }

    fn get_link(&self, id: EntityId<AdditionalLink>) -> Option<AdditionalLink> {
        self.links.get(&id).cloned()
    }

    fn delete_link(&mut self, id: EntityId<AdditionalLink>) -> FabricResult<()> {
        self.links.remove(&id);
        Ok(())
    }

    fn list_links(&self) -> Vec<AdditionalLink> {
        let mut links: Vec<AdditionalLink> = self.links.values().cloned().collect();
        links.sort_by_key(|l| l.id);
        links
    }
}
