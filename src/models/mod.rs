//! Data models and serialization helpers.
//!
//! This module contains the payloads returned by the road status API and the
//! deserializer that lets them be matched regardless of property name casing.
pub mod road;
pub mod serde_helpers;
