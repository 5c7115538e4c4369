use super::*;

/// A named, observable value backing one row of a property-editor panel. Pairs a Value with the
/// text codec of its kind and notifies registered listeners when the value or the display name
/// changes. The editing widget itself belongs to the host toolkit and is reached only through the
/// Editor trait.
///
/// Cells are bound to the toolkit's event-dispatch thread; mutation and delivery are synchronous
/// and unlocked.
#[derive(derivative::Derivative)]
#[derivative(Debug)]
pub struct Cell {
    key: String,
    name: String,
    kind: CellKind,
    value: Value,
    /// When true, mutations apply but no events are delivered
    frozen: bool,
    /// When true, programmatic value changes do not refresh the editing widget
    no_update: bool,
    #[derivative(Debug = "ignore")]
    subscribers: SubscriberList,
    #[derivative(Debug = "ignore")]
    editor: Option<Box<dyn Editor>>,
}

impl Cell {
    /// A cell with no value yet. The key is fixed for the cell's whole life; a missing name
    /// becomes the empty string.
    pub fn new(key: &str, name: Option<&str>, kind: CellKind) -> Self {
        Self::with_value(key, name, kind, Value::Null)
    }

    /// A cell with an initial value. Construction never notifies; no listener can be registered
    /// yet.
    pub fn with_value(key: &str, name: Option<&str>, kind: CellKind, value: Value) -> Self {
        Self {
            key: key.to_string(),
            name: name.unwrap_or("").to_string(),
            kind,
            value,
            frozen: false,
            no_update: false,
            subscribers: SubscriberList::new(),
            editor: None,
        }
    }

    /// Unique identifier within the set that holds this cell
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Human-readable label
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Replaces the label. Unless frozen, listeners receive a name event carrying the old and new
    /// labels.
    pub fn set_name(&mut self, name: &str) {
        let old = std::mem::replace(&mut self.name, name.to_string());
        if !self.frozen {
            self.subscribers.send(&ChangeEvent::Name {
                key: self.key.clone(),
                old,
                new: self.name.clone(),
            });
        }
    }

    /// The current value. Value::Null when never set or explicitly cleared.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Canonical text form of the current value, per this cell's kind. Feeding the result back
    /// through set_value_from_text() reproduces a semantically equal value.
    pub fn value_text(&self) -> String {
        self.kind.render(&self.value)
    }

    /// Replaces the value. Unless frozen, listeners receive a value event keyed by this cell's
    /// key carrying the old and new values, before this call returns. The editing widget is
    /// refreshed unless no_update is set.
    pub fn set_value(&mut self, value: Value) {
        let old = std::mem::replace(&mut self.value, value);
        if !self.frozen {
            self.subscribers.send(&ChangeEvent::Value {
                key: self.key.clone(),
                old,
                new: self.value.clone(),
            });
        }
        if !self.no_update {
            if let Some(editor) = &mut self.editor {
                editor.refresh(&self.value);
            }
        }
    }

    /// Parses text with this cell's kind and applies it through the same path as set_value().
    /// On a parse error the value is left untouched and nothing is delivered.
    pub fn set_value_from_text(&mut self, text: &str) -> CellResult<()> {
        let value = self.kind.parse(text)?;
        self.set_value(value);
        Ok(())
    }

    /// Suppresses event delivery for subsequent mutations. Events missed while frozen are
    /// dropped, not replayed on thaw.
    pub fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Suppresses editor refreshes for subsequent programmatic value changes
    pub fn set_no_update(&mut self, no_update: bool) {
        self.no_update = no_update;
    }

    pub fn no_update(&self) -> bool {
        self.no_update
    }

    /// Delivers a value event as if the value had been set from nothing, regardless of the frozen
    /// flag. Forces dependent UI to re-read the value after an out-of-band change.
    pub fn fire_update(&self) {
        self.subscribers.send(&ChangeEvent::Value {
            key: self.key.clone(),
            old: Value::Null,
            new: self.value.clone(),
        });
    }

    /// Registers a listener for every future event until removed. Registering the same listener
    /// twice is an error.
    pub fn subscribe(&mut self, subscriber: &Rc<dyn Subscriber>) -> CellResult<()> {
        self.subscribers.add(subscriber)
    }

    /// Removes a listener. Removing one that was never registered is allowed and does nothing.
    pub fn unsubscribe(&mut self, subscriber: &Weak<dyn Subscriber>) {
        if let Err(e) = self.subscribers.remove(subscriber) {
            trace!("unsubscribe from {:?}: {}", self.key, e);
        }
    }

    /// The editing widget adapter for this cell, built through the factory on first use
    pub fn controls(&mut self, factory: &dyn EditorFactory) -> &mut dyn Editor {
        if self.editor.is_none() {
            let editor = factory.build(&*self);
            self.editor = Some(editor);
        }
        self.editor.as_deref_mut().expect("editor was just built")
    }

    /// Re-measures the window hosting this cell's editor larger, but not smaller. Does nothing
    /// when no editor has been built or the editor has no window.
    pub fn repack(&mut self) {
        if let Some(editor) = &mut self.editor {
            if let Some(window) = editor.window() {
                repack(window);
            }
        }
    }
}
