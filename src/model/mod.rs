//! # Property Value Model
//!
//! Plain data that crosses the type library boundary: raw and normalized
//! values, sub-property maps, type definitions, and the record shape the
//! host's alias lookup returns.
//!
//! Design rule: no registry state here. This module is pure data.

pub mod value;
pub mod property_map;
pub mod record;
pub mod type_info;

pub use value::Value;
pub use property_map::{PropertyMap, Norm};
pub use record::{Record, AliasResolver};
pub use type_info::{TypeInfo, TypeDef, Model};
