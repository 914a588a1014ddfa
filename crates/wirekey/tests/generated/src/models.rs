//! Models for the end-to-end generation check.
//!
//! `../object_parser.rs` is what `wirekey generate --input tests/generated/src`
//! writes for this folder.

#![allow(dead_code)]

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    /// @json id
    pub id: i64,

    /// Display name.
    /// @json fullName
    pub full_name: String,

    pub email: Option<String>,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct LineItem {
    /// @json sku
    pub sku: String,

    /// @json qty
    pub quantity: u32,
}

/// Matches any object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ping {}

/// Not decodable, so never mapped.
#[derive(Debug)]
pub struct Internal {
    pub secret: String,
}

/// Tuple structs have no field names to map.
#[derive(Debug, Deserialize)]
pub struct Cents(pub u64);

/// Generic models are skipped.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
}
