//! # Type Registry
//!
//! [`TypeLib`] owns every [`DataType`], the inheritance tree, the queue of
//! definitions waiting on a base that is not registered yet, and the
//! subtype cache. It is the only API the rest of the database uses.
//!
//! ## Resolution
//!
//! ```text
//! add_type("a:child", subof=a)   → a missing  → pended[a] += a:child, Ok(false)
//! add_type("a", ctor=int)        → types[a]   → drain pended[a] → types[a:child]
//!                                                → drain pended[a:child] → ...
//! ```
//!
//! Draining is an explicit worklist, so long chains never deepen the stack.
//!
//! ## Concurrency
//!
//! Registration takes the state write lock for the whole cascade and clears
//! the subtype cache under it. Reads take the read lock only to clone an
//! `Arc<DataType>`; normalization itself runs unlocked, which lets composite
//! types re-enter the registry for their field types.

pub mod builtins;
pub mod country;

use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, trace, warn};

use crate::model::{AliasResolver, Model, Norm, TypeDef, TypeInfo, Value};
use crate::types::{Builtin, Ctor, CtorFn, DataType};
use crate::{Error, Result};

/// A lightweight normalizer registered by name, for values that need
/// normalization but not a full type.
pub type CastFn = dyn Fn(&Value) -> Result<Value> + Send + Sync;

// ============================================================================
// State
// ============================================================================

#[derive(Default)]
struct TypeLibState {
    types: HashMap<String, Arc<DataType>>,
    /// Each type's own definition, for inherited info lookups.
    typeinfo: HashMap<String, TypeInfo>,
    /// child → parent
    typetree: HashMap<String, String>,
    /// missing base → definitions waiting on it
    pended: HashMap<String, Vec<TypeDef>>,
    subscache: Mutex<HashMap<(String, String), bool>>,
}

impl TypeLibState {
    fn bases(&self, name: &str) -> Vec<String> {
        let mut done = vec![name.to_owned()];
        let mut todo = self.typetree.get(name);
        while let Some(parent) = todo {
            done.push(parent.clone());
            todo = self.typetree.get(parent);
        }
        done.reverse();
        done
    }
}

// ============================================================================
// TypeLib
// ============================================================================

/// An extensible type library for graph data models.
pub struct TypeLib {
    state: RwLock<TypeLibState>,
    casts: RwLock<HashMap<String, Arc<CastFn>>>,
    ctors: RwLock<HashMap<String, Arc<CtorFn>>>,
    resolver: RwLock<Option<Arc<dyn AliasResolver>>>,
}

impl TypeLib {
    /// A registry holding the built-in types and casts.
    pub fn new() -> Self {
        let tlib = Self::bare();
        builtins::load(&tlib);
        tlib
    }

    /// An empty registry: no types, no casts.
    pub fn bare() -> Self {
        Self {
            state: RwLock::new(TypeLibState::default()),
            casts: RwLock::new(HashMap::new()),
            ctors: RwLock::new(HashMap::new()),
            resolver: RwLock::new(None),
        }
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register a type.
    ///
    /// Returns `Ok(false)` when the definition names a `subof` base that is
    /// not registered yet; it is held and registered automatically once the
    /// base arrives. A definition whose constructor fails is dropped.
    pub fn add_type(&self, name: &str, info: TypeInfo) -> Result<bool> {
        let mut state = self.state.write();
        let added = self.add_one(&mut state, name, info)?;
        if added {
            self.bump_pended(&mut state, name);
        }
        Ok(added)
    }

    fn add_one(&self, state: &mut TypeLibState, name: &str, info: TypeInfo) -> Result<bool> {
        if state.types.contains_key(name) {
            return Err(Error::DuplicateType { name: name.to_owned() });
        }

        if let Some(id) = info.ctor() {
            let ctor = self.lookup_ctor(id).ok_or_else(|| Error::BadConfiguration {
                name: name.to_owned(),
                mesg: format!("unknown ctor {id:?}"),
            })?;

            let item = DataType::construct(ctor, name, info.clone()).inspect_err(|e| {
                warn!(type_name = name, error = %e, "failed to ctor type");
            })?;

            state.types.insert(name.to_owned(), Arc::new(item));
            state.typeinfo.insert(name.to_owned(), info);
            return Ok(true);
        }

        let Some(subof) = info.subof().map(str::to_owned) else {
            return Err(Error::BadConfiguration {
                name: name.to_owned(),
                mesg: "add_type must have either ctor= or subof=".into(),
            });
        };

        let Some(base) = state.types.get(&subof).cloned() else {
            debug!(type_name = name, base = %subof, "base type not registered; pending");
            state.pended.entry(subof).or_default().push((name.to_owned(), info));
            return Ok(false);
        };

        let item = base.extend(name, &info)?;

        state.types.insert(name.to_owned(), Arc::new(item));
        state.typeinfo.insert(name.to_owned(), info);
        state.typetree.insert(name.to_owned(), subof);
        state.subscache.get_mut().clear();
        Ok(true)
    }

    /// Register everything that was waiting on `name`, and on whatever
    /// that unblocks in turn.
    fn bump_pended(&self, state: &mut TypeLibState, name: &str) {
        let mut todo = vec![name.to_owned()];
        while let Some(base) = todo.pop() {
            for (name, info) in state.pended.remove(&base).unwrap_or_default() {
                match self.add_one(state, &name, info) {
                    Ok(true) => {
                        debug!(type_name = %name, base = %base, "pended type resolved");
                        todo.push(name);
                    }
                    Ok(false) => {}
                    Err(e) => warn!(type_name = %name, error = %e, "pended: add_type failed"),
                }
            }
        }
    }

    fn lookup_ctor(&self, id: &str) -> Option<Ctor> {
        if let Some(b) = Builtin::from_id(id) {
            return Some(Ctor::Builtin(b));
        }
        self.ctors
            .read()
            .get(id)
            .map(|func| Ctor::Plugin { id: id.to_owned(), func: Arc::clone(func) })
    }

    /// Register a plugin constructor usable as `ctor=<id>`.
    pub fn add_ctor<F>(&self, id: &str, func: F) -> Result<()>
    where
        F: Fn(&str, &TypeInfo) -> Result<Box<dyn crate::types::TypeImpl>> + Send + Sync + 'static,
    {
        let mut ctors = self.ctors.write();
        if Builtin::from_id(id).is_some() || ctors.contains_key(id) {
            return Err(Error::BadConfiguration {
                name: id.to_owned(),
                mesg: "ctor id already registered".into(),
            });
        }
        ctors.insert(id.to_owned(), Arc::new(func));
        Ok(())
    }

    /// Register a "cast" function: normalization without a complete type.
    pub fn add_type_cast<F>(&self, name: &str, func: F)
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.casts.write().insert(name.to_owned(), Arc::new(func));
    }

    /// Install the host capability used by `$alias` guid syntax.
    pub fn set_alias_resolver(&self, resolver: Arc<dyn AliasResolver>) {
        *self.resolver.write() = Some(resolver);
    }

    pub fn alias_resolver(&self) -> Option<Arc<dyn AliasResolver>> {
        self.resolver.read().clone()
    }

    // ========================================================================
    // Bulk loading
    // ========================================================================

    /// Register a batch of definitions in order. A failing definition is
    /// logged and skipped; the rest of the batch still loads.
    pub fn load_definitions<I>(&self, defs: I)
    where
        I: IntoIterator<Item = TypeDef>,
    {
        for (name, info) in defs {
            if let Err(e) = self.add_type(&name, info) {
                warn!(type_name = %name, error = %e, "failed to load type");
            }
        }
        self.warn_pending();
    }

    /// Load `(model name, model)` tuples.
    pub fn load_models<I>(&self, models: I)
    where
        I: IntoIterator<Item = (String, Model)>,
    {
        for (modname, model) in models {
            for (name, info) in model.types {
                if let Err(e) = self.add_type(&name, info) {
                    warn!(model = %modname, type_name = %name, error = %e, "failed to load type");
                }
            }
        }
        self.warn_pending();
    }

    /// Load models given as JSON: `[["modname", {"types": [["name", {..}], ..]}], ..]`.
    pub fn load_models_json(&self, text: &str) -> Result<()> {
        let models: Vec<(String, Model)> = serde_json::from_str(text)?;
        self.load_models(models);
        Ok(())
    }

    fn warn_pending(&self) {
        for (name, base) in self.pending_types() {
            warn!(type_name = %name, base = %base, "type still pending on unregistered base");
        }
    }

    /// Definitions still waiting on a base: `(name, missing base)`.
    pub fn pending_types(&self) -> Vec<(String, String)> {
        let state = self.state.read();
        let mut pending: Vec<_> = state
            .pended
            .iter()
            .flat_map(|(base, defs)| defs.iter().map(move |(name, _)| (name.clone(), base.clone())))
            .collect();
        pending.sort();
        pending
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn get_type(&self, name: &str) -> Option<Arc<DataType>> {
        self.state.read().types.get(name).cloned()
    }

    /// Like [`get_type`](Self::get_type), but a missing type is `NoSuchType`.
    pub fn req_type(&self, name: &str) -> Result<Arc<DataType>> {
        self.get_type(name).ok_or_else(|| Error::NoSuchType { name: name.to_owned() })
    }

    pub fn is_data_type(&self, name: &str) -> bool {
        self.state.read().types.contains_key(name)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.state.read().types.keys().cloned().collect();
        names.sort();
        names
    }

    /// Inheritance chain from the root base down to `name`.
    pub fn type_bases(&self, name: &str) -> Vec<String> {
        self.state.read().bases(name)
    }

    /// True if `base` is `name` or one of its ancestors.
    pub fn is_sub_type(&self, name: &str, base: &str) -> bool {
        let state = self.state.read();
        let key = (name.to_owned(), base.to_owned());

        if let Some(&hit) = state.subscache.lock().get(&key) {
            return hit;
        }

        trace!(type_name = name, base, "subtype cache miss");
        let ret = state.bases(name).iter().any(|b| b == base);
        state.subscache.lock().insert(key, ret);
        ret
    }

    /// An info property from the type's own definition or the nearest
    /// ancestor that sets it (`doc`, `ex`, ...).
    pub fn type_info_prop(&self, name: &str, prop: &str) -> Option<Value> {
        let state = self.state.read();
        let mut todo = Some(name);
        while let Some(cur) = todo {
            let info = state.typeinfo.get(cur)?;
            if let Some(valu) = info.get(prop) {
                return Some(valu.clone());
            }
            todo = info.subof();
        }
        None
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    /// Normalize a value for the named type.
    pub fn type_norm(&self, name: &str, valu: &Value, oldval: Option<&Value>) -> Result<Norm> {
        self.req_type(name)?.norm(self, valu, oldval)
    }

    /// Human readable form of a normalized value.
    pub fn type_repr(&self, name: &str, valu: &Value) -> Result<String> {
        self.req_type(name)?.repr(valu)
    }

    /// Parse user-entered text into the type's normalized form.
    pub fn type_parse(&self, name: &str, text: &str) -> Result<Norm> {
        self.req_type(name)?.parse(self, text, None)
    }

    /// Normalize through a registered cast, or failing that the type itself.
    pub fn type_cast(&self, name: &str, valu: &Value) -> Result<Value> {
        let cast = self.casts.read().get(name).cloned();
        match cast {
            Some(func) => func(valu),
            None => Ok(self.type_norm(name, valu, None)?.0),
        }
    }
}

impl Default for TypeLib {
    fn default() -> Self {
        Self::new()
    }
}
