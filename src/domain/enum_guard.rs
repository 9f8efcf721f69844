// Copyright (c) 2025 - Cowboy AI, Inc.
//! Closed-Set Membership Validation
//!
//! Two explicit operations over closed enumerations: [`one_of`] validates a
//! scalar value, [`all_in`] validates every element of a list. Both raise
//! [`FabricError::InvalidEnumValue`] naming the field, the offending value(s)
//! and the allowed set.

use crate::errors::{FabricError, FabricResult};

/// A closed enumeration with a fixed set of canonical wire names
pub trait ClosedEnum: Sized + Copy + 'static {
    /// Every variant of the enumeration
    const VARIANTS: &'static [Self];

    /// Canonical wire name of this variant
    fn as_str(&self) -> &'static str;

    /// The allowed set, comma-joined for error messages
    fn allowed() -> String {
        Self::VARIANTS
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Validate that a scalar value belongs to the closed set of `E`
pub fn one_of<E: ClosedEnum>(field: &str, value: &str) -> FabricResult<E> {
    E::VARIANTS
        .iter()
        .copied()
        .find(|v| v.as_str() == value)
        .ok_or_else(|| FabricError::InvalidEnumValue {
            field: field.to_string(),
            value: value.to_string(),
            allowed: E::allowed(),
        })
}

/// Validate that every element of a list belongs to the closed set of `E`
///
/// Offending elements are aggregated into a single error rather than
/// reported one at a time.
pub fn all_in<E, S>(field: &str, values: &[S]) -> FabricResult<Vec<E>>
where
    E: ClosedEnum,
    S: AsRef<str>,
{
    let mut parsed = Vec::with_capacity(values.len());
    let mut offending = Vec::new();
    for value in values {
        let value = value.as_ref();
        match E::VARIANTS.iter().copied().find(|v| v.as_str() == value) {
            Some(v) => parsed.push(v),
            None => offending.push(value.to_string()),
        }
    }
    if offending.is_empty() {
        Ok(parsed)
    } else {
        Err(FabricError::InvalidEnumValue {
            field: field.to_string(),
            value: offending.join(", "),
            allowed: E::allowed(),
        })
    }
}
