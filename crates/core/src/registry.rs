//! Structural registry of module composition.
//!
//! The registry records how a design is composed — which fields of each
//! module are numeric parameters and which are submodules — so an external
//! elaboration backend can later turn the simulated design into a hardware
//! description. It provides:
//! 1. **Declaration:** A builder that names parameter and submodule fields
//!    explicitly at construction time.
//! 2. **Queries:** Read-only access for the elaboration consumer.
//! 3. **Reset:** Bulk discard between unrelated simulation runs.
//! 4. **Export:** JSON serialization of all records.
//!
//! The registry is an explicit, caller-owned object, not process-global
//! state. Callers that share one registry across threads wrap it in a mutex;
//! callers that run independent trials instantiate one per trial and merge
//! explicitly. Invoke [`Registry::reset`] between unrelated runs to avoid
//! cross-run contamination of the composition graph.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::id::ModuleId;

/// One recorded module: its name, numeric parameters, and named submodules.
#[derive(Clone, Debug, Serialize)]
pub struct ModuleRecord {
    /// The module's type name as declared (e.g. `"SVFilter"`).
    pub name: String,
    /// Field name → scalar value, for plain numeric fields.
    pub parameters: BTreeMap<String, f64>,
    /// Field name → module id, for composed fields (delays, modulators,
    /// nested modules).
    pub submodules: BTreeMap<String, ModuleId>,
}

/// Caller-owned table of module composition records.
#[derive(Debug, Default)]
pub struct Registry {
    entries: BTreeMap<ModuleId, ModuleRecord>,
    next: u32,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts declaring a module with the given type name.
    ///
    /// The returned builder names parameter and submodule fields explicitly;
    /// [`ModuleBuilder::finish`] records the entry and returns its id.
    /// Declare leaf submodules first so their ids are available when the
    /// parent is declared.
    pub fn declare(&mut self, name: impl Into<String>) -> ModuleBuilder<'_> {
        ModuleBuilder {
            registry: self,
            record: ModuleRecord {
                name: name.into(),
                parameters: BTreeMap::new(),
                submodules: BTreeMap::new(),
            },
        }
    }

    /// Returns the declared type name of a module, if recorded.
    pub fn name_of(&self, id: ModuleId) -> Option<&str> {
        self.entries.get(&id).map(|r| r.name.as_str())
    }

    /// Returns the parameter table of a module, if recorded.
    pub fn parameters_of(&self, id: ModuleId) -> Option<&BTreeMap<String, f64>> {
        self.entries.get(&id).map(|r| &r.parameters)
    }

    /// Returns the submodule table of a module, if recorded.
    pub fn submodules_of(&self, id: ModuleId) -> Option<&BTreeMap<String, ModuleId>> {
        self.entries.get(&id).map(|r| &r.submodules)
    }

    /// Iterates over all records in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ModuleId, &ModuleRecord)> {
        self.entries.iter().map(|(id, record)| (*id, record))
    }

    /// Returns the number of recorded modules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no modules are recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discards all entries.
    ///
    /// Call between unrelated simulation runs; ids keep counting upward so
    /// stale ids from before the reset never alias new entries.
    pub fn reset(&mut self) {
        tracing::debug!(discarded = self.entries.len(), "registry reset");
        self.entries.clear();
    }

    /// Serializes every record to JSON for the elaboration consumer.
    ///
    /// # Errors
    ///
    /// Returns the underlying serializer error (out-of-memory or a
    /// non-serializable float such as NaN in a parameter).
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }
}

/// In-progress module declaration.
///
/// Classification is explicit: [`Self::parameter`] for plain numeric scalar
/// fields, [`Self::submodule`] for everything composed (bitstream-producing
/// blocks, delay buffers, modulators, nested modules).
#[derive(Debug)]
pub struct ModuleBuilder<'r> {
    registry: &'r mut Registry,
    record: ModuleRecord,
}

impl ModuleBuilder<'_> {
    /// Declares a numeric parameter field.
    pub fn parameter(mut self, field: impl Into<String>, value: f64) -> Self {
        let _ = self.record.parameters.insert(field.into(), value);
        self
    }

    /// Declares a submodule field referring to a previously declared module.
    pub fn submodule(mut self, field: impl Into<String>, id: ModuleId) -> Self {
        let _ = self.record.submodules.insert(field.into(), id);
        self
    }

    /// Records the declaration and returns the new module's id.
    pub fn finish(self) -> ModuleId {
        let id = ModuleId(self.registry.next);
        self.registry.next += 1;
        let _ = self.registry.entries.insert(id, self.record);
        id
    }
}
