// Copyright (c) 2025 - Cowboy AI, Inc.
//! Entity model for Clos-topology IP fabric management
//!
//! This crate provides the typed entity graph a fabric controller builds
//! and validates: pods, their spine/leaf devices, the interfaces on those
//! devices and cabling discovered outside the managed graph. Credentials
//! are encrypted at the edge through an injected cipher, enumerations are
//! closed sets with membership guards, and the persistence boundary in
//! [`store`] carries the relational guarantees (ordering, uniqueness,
//! cascading deletes).

pub mod cipher;
pub mod domain;
pub mod errors;
pub mod store;

// Re-export commonly used types
pub use cipher::{CredentialCipher, KeyedCipher};
pub use domain::{
    derive_name_order_num, find_layering_cycle, layer_aboves, link_peers, sort_by_name_order,
    AdditionalLink, CidrPrefix, Device, DeployStatus, DeviceRole, EntityId, Interface,
    InterfaceKind, LldpStatus, OperationalStatus, Pod, PodDescription, PodState, TopologyType,
};
pub use errors::{FabricError, FabricResult};
pub use store::{FabricStore, MemoryStore};
