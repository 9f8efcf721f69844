// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Fabric Model Invariants
//!
//! Verifies the properties the rest of the system leans on: the credential
//! cipher round-trips and hashes deterministically, and the derived
//! interface sort key orders ports the way an operator reads them.

use cim_fabric::{derive_name_order_num, CredentialCipher, KeyedCipher};
use proptest::prelude::*;

proptest! {
    /// decrypt(encrypt(x)) == x for any cleartext and any non-empty key
    #[test]
    fn prop_cipher_round_trips(
        cleartext in ".*",
        key in "[a-zA-Z0-9]{1,32}",
    ) {
        let cipher = KeyedCipher::new(&key).unwrap();
        let ciphertext = cipher.encrypt(&cleartext).unwrap();
        prop_assert_eq!(cipher.decrypt(&ciphertext).unwrap(), cleartext);
    }

    /// hashing is deterministic, fixed-width hex, and key-sensitive
    #[test]
    fn prop_hash_is_stable(cleartext in ".{1,64}") {
        let cipher = KeyedCipher::new("prop-test-key").unwrap();
        let first = cipher.hash(&cleartext).unwrap();
        let second = cipher.hash(&cleartext).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), 64);
        prop_assert!(first.chars().all(|c| c.is_ascii_hexdigit()));

        let other = KeyedCipher::new("another-key").unwrap();
        prop_assert_ne!(other.hash(&cleartext).unwrap(), first);
    }

    /// encryption never stores cleartext verbatim for non-trivial input
    #[test]
    fn prop_ciphertext_differs_from_cleartext(cleartext in "[a-zA-Z0-9]{4,32}") {
        let cipher = KeyedCipher::new("prop-test-key").unwrap();
        prop_assert_ne!(cipher.encrypt(&cleartext).unwrap(), cleartext);
    }

    /// the sort key is strictly monotone in the port number within one pic
    #[test]
    fn prop_port_order_is_monotone(
        fpc in 0u32..10,
        pic in 0u32..3,
        port_a in 0u32..99,
        port_b in 0u32..99,
    ) {
        prop_assume!(port_a < port_b);
        let a = derive_name_order_num(&format!("et-{fpc}/{pic}/{port_a}")).unwrap();
        let b = derive_name_order_num(&format!("et-{fpc}/{pic}/{port_b}")).unwrap();
        prop_assert!(a < b);
    }

    /// fpc dominates pic, pic dominates port
    #[test]
    fn prop_component_precedence(
        fpc in 0u32..9,
        pic in 0u32..3,
        port in 0u32..99,
    ) {
        let base = derive_name_order_num(&format!("et-{fpc}/{pic}/{port}")).unwrap();
        let next_fpc = derive_name_order_num(&format!("et-{}/0/0", fpc + 1)).unwrap();
        prop_assert!(base < next_fpc);

        let next_pic = derive_name_order_num(&format!("et-{fpc}/{}/0", pic + 1)).unwrap();
        prop_assert!(base < next_pic);
    }

    /// names without the fpc/pic/port shape derive no key at all
    #[test]
    fn prop_shapeless_names_have_no_key(name in "[a-z]{1,8}(\\.[0-9]{1,2})?") {
        prop_assert_eq!(derive_name_order_num(&name), None);
    }
}
