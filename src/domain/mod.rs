// Copyright (c) 2025 - Cowboy AI, Inc.
//! Fabric Domain Models
//!
//! Core domain concepts for Clos fabric management: the pod/device/interface
//! entity graph, closed enumerations with membership guards, and value
//! objects with validation invariants.
//!
//! # Entities
//!
//! - [`Pod`] - one fabric instance: counts, prefixes, AS numbers, lifecycle
//! - [`Device`] - a spine or leaf switch belonging to a pod
//! - [`Interface`] - a physical port or logical unit on a device
//! - [`AdditionalLink`] - discovered cabling with free-text endpoints
//!
//! # Value Objects with Invariants
//!
//! - [`CidrPrefix`] - IPv4/IPv6 network prefix validation
//! - [`EntityId`] - phantom-typed identity, one namespace per entity
//!
//! # Domain Relationships
//!
//! Entities reference each other via typed [`EntityId`]s, never embedded
//! objects; ownership (pod → devices → interfaces) is resolved by the
//! persistence layer in [`store`](crate::store).

pub mod device;
pub mod entity_id;
pub mod enum_guard;
pub mod interface;
pub mod link;
pub mod network;
pub mod pod;
pub mod status;

pub use device::Device;
pub use entity_id::EntityId;
pub use enum_guard::ClosedEnum;
pub use interface::{
    derive_name_order_num, find_layering_cycle, layer_aboves, link_peers, sort_by_name_order,
    Interface, InterfaceKind,
};
pub use link::AdditionalLink;
pub use network::CidrPrefix;
pub use pod::{Pod, PodDescription};
pub use status::{
    DeployStatus, DeviceRole, LldpStatus, OperationalStatus, PodState, TopologyType,
};
