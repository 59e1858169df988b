//! # neo4j-typelib: Property Type Library for neo4j-rs
//!
//! Every node property passes through this crate before it is stored or
//! compared: a typed property name plus a raw value go in, a canonical
//! storage value plus derived sub-properties come out.
//!
//! ## Design Principles
//!
//! 1. **One gate**: `TypeLib` is the only API the storage and query layers call
//! 2. **Deterministic**: logically equal inputs normalize to identical values,
//!    and composite types to identical guids, across processes
//! 3. **Data-driven types**: models contribute `(name, info)` definitions;
//!    subtypes inherit and override options, no code required
//! 4. **Closed core, open edge**: built-in kinds are an enum, plugin kinds
//!    register a constructor
//!
//! ## Quick Start
//!
//! ```rust
//! use neo4j_typelib::{TypeLib, TypeInfo, Value};
//!
//! # fn example() -> neo4j_typelib::Result<()> {
//! let tlib = TypeLib::new();
//! tlib.add_type("inet:port", TypeInfo::new().with("subof", "int").with("min", 0).with("max", 65535))?;
//!
//! let (port, _subs) = tlib.type_norm("inet:port", &Value::from("0x50"), None)?;
//! assert_eq!(port, Value::Int(80));
//! assert_eq!(tlib.type_repr("inet:port", &port)?, "80");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Built-in Types
//!
//! | Type | Stored as | Notes |
//! |------|-----------|-------|
//! | `str` | string | case fold, strip, enums, regex |
//! | `int` | integer | base detection, bounds, min/max accumulation |
//! | `bool` | 0 / 1 | text forms and truthiness |
//! | `json` | string | canonical compact JSON |
//! | `guid` | string | 32 hex chars; `*` generates, `$x` resolves an alias |
//! | `time` | integer | epoch milliseconds |
//! | `syn:tag` | string | dotted tag, optional `@time-time` seen range |
//! | `sepr` | string | separator-joined typed fields |
//! | `comp` | guid | content-addressed typed fields |
//! | `xref` | guid | source value linked to a value of any type |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod syntax;
pub mod types;
pub mod registry;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Value, PropertyMap, Norm, Record, AliasResolver,
    TypeInfo, TypeDef, Model,
};

// ============================================================================
// Re-exports: Types and Registry
// ============================================================================

pub use types::{DataType, TypeImpl, Builtin, Ctor, guid, guid_of, is_guid};
pub use registry::{TypeLib, CastFn};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Bad value for type {name}: {valu} ({mesg})")]
    BadValue { name: String, valu: Value, mesg: String },

    #[error("No such type: {name}")]
    NoSuchType { name: String },

    #[error("Duplicate type: {name}")]
    DuplicateType { name: String },

    #[error("Bad configuration for {name}: {mesg}")]
    BadConfiguration { name: String, mesg: String },

    #[error("Syntax error at position {position}: {message}")]
    BadSyntax { position: usize, message: String },

    #[error("Encode error: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
