//! # Data Types
//!
//! A [`DataType`] is the realized behavior of one named type: `norm`,
//! `repr`, `parse` and `extend`. Built-in behaviors form the closed
//! [`TypeKind`] sum; anything else comes in through a plugin constructor
//! returning a boxed [`TypeImpl`].
//!
//! ```text
//! TypeDef (name, info)
//!   ctor=<id>  → Ctor::Builtin | Ctor::Plugin  → DataType
//!   subof=<p>  → parent.extend(name, info)     → DataType (same Ctor, merged info)
//! ```

pub mod printf;
pub mod fields;
pub mod string;
pub mod int;
pub mod boolean;
pub mod json;
pub mod guid;
pub mod time;
pub mod tag;
pub mod sepr;
pub mod comp;
pub mod xref;

use std::sync::Arc;

use crate::model::{Norm, TypeInfo, Value};
use crate::registry::TypeLib;
use crate::{Error, Result};

pub use self::boolean::BoolType;
pub use self::comp::CompType;
pub use self::fields::{Field, Fields};
pub use self::guid::{GuidType, guid, guid_of, is_guid};
pub use self::int::{IntType, MinMax};
pub use self::json::JsonType;
pub use self::sepr::SeprType;
pub use self::string::StrType;
pub use self::tag::TagType;
pub use self::time::TimeType;
pub use self::xref::XrefType;

// ============================================================================
// Plugin seam
// ============================================================================

/// Behavior of a plugin-supplied type.
///
/// `tlib` is the registry the type lives in; use it to normalize values of
/// other types rather than holding references to them.
pub trait TypeImpl: Send + Sync {
    fn norm(&self, tlib: &TypeLib, valu: &Value, oldval: Option<&Value>) -> Result<Norm>;

    fn repr(&self, valu: &Value) -> Result<String> {
        Ok(valu.to_string())
    }

    fn parse(&self, tlib: &TypeLib, text: &str, oldval: Option<&Value>) -> Result<Norm> {
        self.norm(tlib, &Value::from(text), oldval)
    }
}

/// Plugin constructor: `(type name, merged info) -> behavior`.
pub type CtorFn = dyn Fn(&str, &TypeInfo) -> Result<Box<dyn TypeImpl>> + Send + Sync;

// ============================================================================
// Constructors
// ============================================================================

/// Built-in constructor identifiers, as used in `ctor=` options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Str,
    Int,
    Bool,
    Json,
    Guid,
    Time,
    Tag,
    Sepr,
    Comp,
    Xref,
}

impl Builtin {
    pub const ALL: [Builtin; 10] = [
        Builtin::Str, Builtin::Int, Builtin::Bool, Builtin::Json, Builtin::Guid,
        Builtin::Time, Builtin::Tag, Builtin::Sepr, Builtin::Comp, Builtin::Xref,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Builtin::Str => "str",
            Builtin::Int => "int",
            Builtin::Bool => "bool",
            Builtin::Json => "json",
            Builtin::Guid => "guid",
            Builtin::Time => "time",
            Builtin::Tag => "tag",
            Builtin::Sepr => "sepr",
            Builtin::Comp => "comp",
            Builtin::Xref => "xref",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.id() == id)
    }
}

/// How a type's behavior is (re)built. Subtypes inherit their parent's ctor.
#[derive(Clone)]
pub enum Ctor {
    Builtin(Builtin),
    Plugin { id: String, func: Arc<CtorFn> },
}

impl Ctor {
    pub fn id(&self) -> &str {
        match self {
            Ctor::Builtin(b) => b.id(),
            Ctor::Plugin { id, .. } => id,
        }
    }
}

impl std::fmt::Debug for Ctor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ctor::Builtin(b) => write!(f, "Builtin({})", b.id()),
            Ctor::Plugin { id, .. } => write!(f, "Plugin({id})"),
        }
    }
}

// ============================================================================
// DataType
// ============================================================================

/// Resolved behavior for a built-in kind, carrying its parsed options.
pub enum TypeKind {
    Str(StrType),
    Int(IntType),
    Bool(BoolType),
    Json(JsonType),
    Guid(GuidType),
    Time(TimeType),
    Tag(TagType),
    Sepr(SeprType),
    Comp(CompType),
    Xref(XrefType),
    Plugin(Box<dyn TypeImpl>),
}

/// A named, fully resolved type. Immutable once built.
pub struct DataType {
    name: String,
    info: TypeInfo,
    ctor: Ctor,
    kind: TypeKind,
}

impl DataType {
    /// Build a type from a constructor and its (already merged) info.
    pub fn construct(ctor: Ctor, name: &str, info: TypeInfo) -> Result<Self> {
        let kind = match &ctor {
            Ctor::Builtin(Builtin::Str) => TypeKind::Str(StrType::new(name, &info)?),
            Ctor::Builtin(Builtin::Int) => TypeKind::Int(IntType::new(name, &info)?),
            Ctor::Builtin(Builtin::Bool) => TypeKind::Bool(BoolType::new(name)),
            Ctor::Builtin(Builtin::Json) => TypeKind::Json(JsonType::new(name)),
            Ctor::Builtin(Builtin::Guid) => TypeKind::Guid(GuidType::new(name, &info)),
            Ctor::Builtin(Builtin::Time) => TypeKind::Time(TimeType::new(name, &info)),
            Ctor::Builtin(Builtin::Tag) => TypeKind::Tag(TagType::new(name)?),
            Ctor::Builtin(Builtin::Sepr) => TypeKind::Sepr(SeprType::new(name, &info)?),
            Ctor::Builtin(Builtin::Comp) => TypeKind::Comp(CompType::new(name, &info)?),
            Ctor::Builtin(Builtin::Xref) => TypeKind::Xref(XrefType::new(name, &info)?),
            Ctor::Plugin { func, .. } => TypeKind::Plugin(func(name, &info)?),
        };

        Ok(Self { name: name.to_owned(), info, ctor, kind })
    }

    /// Derive a subtype: the parent's merged info with `info` laid over it,
    /// rebuilt by the same constructor.
    pub fn extend(&self, name: &str, info: &TypeInfo) -> Result<Self> {
        Self::construct(self.ctor.clone(), name, self.info.overlay(info))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Merged info (own keys plus everything inherited through `extend`).
    pub fn info(&self) -> &TypeInfo {
        &self.info
    }

    pub fn ctor(&self) -> &Ctor {
        &self.ctor
    }

    /// Normalize `valu` into storage form plus sub-properties.
    pub fn norm(&self, tlib: &TypeLib, valu: &Value, oldval: Option<&Value>) -> Result<Norm> {
        match &self.kind {
            TypeKind::Str(t) => t.norm(valu),
            TypeKind::Int(t) => t.norm(valu, oldval),
            TypeKind::Bool(t) => t.norm(valu),
            TypeKind::Json(t) => t.norm(valu),
            TypeKind::Guid(t) => t.norm(tlib, valu),
            TypeKind::Time(t) => t.norm(valu, oldval),
            TypeKind::Tag(t) => t.norm(tlib, valu),
            TypeKind::Sepr(t) => t.norm(tlib, valu),
            TypeKind::Comp(t) => t.norm(tlib, valu),
            TypeKind::Xref(t) => t.norm(tlib, valu),
            TypeKind::Plugin(t) => t.norm(tlib, valu, oldval),
        }
    }

    /// Render a normalized value for humans.
    pub fn repr(&self, valu: &Value) -> Result<String> {
        match &self.kind {
            TypeKind::Int(t) => t.repr(valu),
            TypeKind::Bool(t) => Ok(t.repr(valu)),
            TypeKind::Time(t) => t.repr(valu),
            TypeKind::Plugin(t) => t.repr(valu),
            _ => Ok(valu.to_string()),
        }
    }

    /// Normalize user-entered text.
    pub fn parse(&self, tlib: &TypeLib, text: &str, oldval: Option<&Value>) -> Result<Norm> {
        match &self.kind {
            TypeKind::Plugin(t) => t.parse(tlib, text, oldval),
            _ => self.norm(tlib, &Value::from(text), oldval),
        }
    }
}

impl std::fmt::Debug for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataType")
            .field("name", &self.name)
            .field("ctor", &self.ctor)
            .field("info", &self.info)
            .finish()
    }
}

// ============================================================================
// Error helpers
// ============================================================================

pub(crate) fn bad_valu(name: &str, valu: &Value, mesg: impl Into<String>) -> Error {
    Error::BadValue {
        name: name.to_owned(),
        valu: valu.clone(),
        mesg: mesg.into(),
    }
}

pub(crate) fn bad_info(name: &str, mesg: impl Into<String>) -> Error {
    Error::BadConfiguration {
        name: name.to_owned(),
        mesg: mesg.into(),
    }
}
