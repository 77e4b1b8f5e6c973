//! Form engine: named typed fields, validation state, submission flags
//!
//! The engine owns every field's value and meta state. Field widgets borrow a
//! [`FieldBinding`] for the duration of a render pass and mutate the field
//! only through `handle_change`/`handle_blur`; no other mutation path exists.

use super::field::{FieldError, FieldMeta, FieldValue};

/// Per-field validator, run by the engine on change and on blur
pub type Validator = Box<dyn Fn(&FieldValue) -> Vec<FieldError> + Send>;

/// Current value plus validation/interaction state of one field
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    pub value: FieldValue,
    pub meta: FieldMeta,
}

struct FieldSlot {
    name: String,
    state: FieldState,
    validator: Option<Validator>,
}

impl std::fmt::Debug for FieldSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSlot")
            .field("name", &self.name)
            .field("state", &self.state)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

/// Aggregate submission-lifecycle flags derived from the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmissionFlags {
    pub is_submitting: bool,
    pub is_pristine: bool,
    pub is_validating: bool,
}

/// Form engine holding all fields of one form instance
#[derive(Debug)]
pub struct FormEngine {
    fields: Vec<FieldSlot>,
    is_submitting: bool,
    is_validating: bool,
}

impl FormEngine {
    pub fn builder() -> FormBuilder {
        FormBuilder::default()
    }

    /// Borrow the named field for one render/event pass
    pub fn field(&mut self, name: &str) -> Option<FieldBinding<'_>> {
        self.fields
            .iter_mut()
            .find(|slot| slot.name == name)
            .map(|slot| FieldBinding {
                slot,
            })
    }

    /// Read-only view of the named field's state
    pub fn state(&self, name: &str) -> Option<&FieldState> {
        self.fields
            .iter()
            .find(|slot| slot.name == name)
            .map(|slot| &slot.state)
    }

    /// Replace a field's value from outside the input cycle (record load,
    /// form reset). Does not mark the field dirty.
    pub fn load(&mut self, name: &str, value: FieldValue) {
        if let Some(slot) = self.fields.iter_mut().find(|slot| slot.name == name) {
            slot.state.value = value;
            slot.state.meta.errors.clear();
            slot.state.meta.dirty = false;
        }
    }

    pub fn set_submitting(&mut self, on: bool) {
        self.is_submitting = on;
    }

    pub fn set_validating(&mut self, on: bool) {
        self.is_validating = on;
    }

    /// True until the first `handle_change` on any field
    pub fn is_pristine(&self) -> bool {
        self.fields.iter().all(|slot| !slot.state.meta.dirty)
    }

    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|slot| slot.state.meta.is_valid())
    }

    pub fn flags(&self) -> SubmissionFlags {
        SubmissionFlags {
            is_submitting: self.is_submitting,
            is_pristine: self.is_pristine(),
            is_validating: self.is_validating,
        }
    }

    /// Run every field's validator; returns overall validity
    pub fn validate_all(&mut self) -> bool {
        for slot in &mut self.fields {
            if let Some(validator) = &slot.validator {
                slot.state.meta.errors = validator(&slot.state.value);
            }
        }
        self.is_valid()
    }

    /// Append an error produced outside per-field validators (cross-field
    /// rules)
    pub fn push_error(&mut self, name: &str, error: FieldError) {
        if let Some(slot) = self.fields.iter_mut().find(|slot| slot.name == name) {
            slot.state.meta.errors.push(error);
        }
    }
}

/// Borrowed handle to one named value within the form's state tree
#[derive(Debug)]
pub struct FieldBinding<'a> {
    slot: &'a mut FieldSlot,
}

impl FieldBinding<'_> {
    pub fn name(&self) -> &str {
        &self.slot.name
    }

    pub fn value(&self) -> &FieldValue {
        &self.slot.state.value
    }

    pub fn meta(&self) -> &FieldMeta {
        &self.slot.state.meta
    }

    /// Write a new value back, mark the field dirty and re-validate
    pub fn handle_change(&mut self, value: FieldValue) {
        self.slot.state.value = value;
        self.slot.state.meta.dirty = true;
        self.revalidate();
    }

    /// Mark the field touched and re-validate
    pub fn handle_blur(&mut self) {
        self.slot.state.meta.touched = true;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        if let Some(validator) = &self.slot.validator {
            self.slot.state.meta.errors = validator(&self.slot.state.value);
        }
    }
}

/// Polling subscription over the submission flags.
///
/// `poll` yields the derived tuple only when one of the three flags changed
/// since the last call, so a subscriber re-renders exactly on changes.
#[derive(Debug, Default)]
pub struct SubmissionWatch {
    last: Option<SubmissionFlags>,
}

impl SubmissionWatch {
    pub fn poll(&mut self, engine: &FormEngine) -> Option<SubmissionFlags> {
        let flags = engine.flags();
        if self.last != Some(flags) {
            self.last = Some(flags);
            Some(flags)
        } else {
            None
        }
    }
}

/// Declarative form construction: declare fields by name, attach validators,
/// build the engine
#[derive(Default)]
pub struct FormBuilder {
    fields: Vec<FieldSlot>,
}

impl FormBuilder {
    pub fn field(mut self, name: &str, value: FieldValue) -> Self {
        self.fields.push(FieldSlot {
            name: name.to_string(),
            state: FieldState {
                value,
                meta: FieldMeta::default(),
            },
            validator: None,
        });
        self
    }

    pub fn validated(mut self, name: &str, value: FieldValue, validator: Validator) -> Self {
        self.fields.push(FieldSlot {
            name: name.to_string(),
            state: FieldState {
                value,
                meta: FieldMeta::default(),
            },
            validator: Some(validator),
        });
        self
    }

    pub fn build(self) -> FormEngine {
        FormEngine {
            fields: self.fields,
            is_submitting: false,
            is_validating: false,
        }
    }
}
