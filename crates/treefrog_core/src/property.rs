//! Named property metadata with change notification
//!
//! Any editable entity that wants named metadata embeds a
//! [`PropertyCollection`], constructed with that entity's set of reserved
//! names. Observers subscribe to the collection and receive a
//! [`PropertyEvent`] synchronously after each mutation commits, always in
//! the order "specific event, then `Modified`".

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Generic property value type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    /// Get the string contents if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// A named, typed property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: Value,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Validation failures raised by [`PropertyCollection`] mutations
///
/// Every failure is atomic: the collection is unchanged and no event fires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("property name may not be empty")]
    EmptyName,
    #[error("property name '{0}' is reserved")]
    ReservedName(String),
    #[error("a property named '{0}' already exists")]
    DuplicateName(String),
    #[error("no property named '{0}'")]
    UnknownProperty(String),
}

/// Change notification emitted by a [`PropertyCollection`]
///
/// Structural events carry the affected names; the trailing `Modified`
/// event fires after every successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyEvent {
    Added { name: String },
    Removed { name: String },
    Renamed { old_name: String, new_name: String },
    ValueChanged { name: String },
    Modified,
}

/// Observer callback invoked synchronously after a mutation commits
pub type PropertyListener = Box<dyn FnMut(&PropertyEvent)>;

#[derive(Default)]
struct Listeners(Vec<PropertyListener>);

impl Listeners {
    fn notify(&mut self, event: &PropertyEvent) {
        for listener in &mut self.0 {
            listener(event);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listeners").field(&self.0.len()).finish()
    }
}

// Subscribers are bound to one live collection; clones start with none.
impl Clone for Listeners {
    fn clone(&self) -> Self {
        Listeners::default()
    }
}

/// An ordered collection of uniquely named properties
///
/// Names are case-sensitive and checked against a reserved-name blocklist
/// supplied at construction. Iteration order is insertion order. All
/// mutations either fully succeed (and notify subscribers) or fail without
/// touching the collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyCollection {
    properties: Vec<Property>,
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    reserved_names: HashSet<String>,
    #[serde(skip)]
    listeners: Listeners,
}

impl PropertyCollection {
    /// Create an empty collection with no reserved names
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection with a reserved-name blocklist
    pub fn with_reserved_names<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            properties: Vec::new(),
            reserved_names: reserved.into_iter().map(Into::into).collect(),
            listeners: Listeners::default(),
        }
    }

    /// Subscribe to change events
    pub fn subscribe(&mut self, listener: impl FnMut(&PropertyEvent) + 'static) {
        self.listeners.0.push(Box::new(listener));
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the collection holds no properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Whether a property with this exact name exists
    pub fn contains(&self, name: &str) -> bool {
        self.properties.iter().any(|p| p.name == name)
    }

    /// Get a property by name
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Iterate properties in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    /// Validate a name for insertion or rename
    fn check_name(&self, name: &str) -> Result<(), PropertyError> {
        if name.is_empty() {
            return Err(PropertyError::EmptyName);
        }
        if self.reserved_names.contains(name) {
            return Err(PropertyError::ReservedName(name.to_string()));
        }
        if self.contains(name) {
            return Err(PropertyError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    /// Add a property at the end of iteration order
    ///
    /// Fails if the name is empty, reserved, or already taken. Fires
    /// `Added` then `Modified` on success.
    pub fn add(&mut self, property: Property) -> Result<(), PropertyError> {
        self.check_name(&property.name)?;
        let name = property.name.clone();
        self.properties.push(property);
        self.listeners.notify(&PropertyEvent::Added { name });
        self.listeners.notify(&PropertyEvent::Modified);
        Ok(())
    }

    /// Remove a property by name
    ///
    /// Returns the removed property, or `None` (firing no events) if absent.
    pub fn remove(&mut self, name: &str) -> Option<Property> {
        let pos = self.properties.iter().position(|p| p.name == name)?;
        let property = self.properties.remove(pos);
        self.listeners.notify(&PropertyEvent::Removed {
            name: property.name.clone(),
        });
        self.listeners.notify(&PropertyEvent::Modified);
        Some(property)
    }

    /// Remove all properties
    ///
    /// Fires one `Removed` per entry, then a single `Modified`. A no-op on
    /// an empty collection.
    pub fn clear(&mut self) {
        if self.properties.is_empty() {
            return;
        }
        let removed = std::mem::take(&mut self.properties);
        for property in removed {
            self.listeners.notify(&PropertyEvent::Removed {
                name: property.name,
            });
        }
        self.listeners.notify(&PropertyEvent::Modified);
    }

    /// Set the value of an existing property
    ///
    /// Fires `ValueChanged` then `Modified`.
    pub fn set_value(
        &mut self,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<(), PropertyError> {
        let property = self
            .properties
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| PropertyError::UnknownProperty(name.to_string()))?;
        property.value = value.into();
        self.listeners.notify(&PropertyEvent::ValueChanged {
            name: name.to_string(),
        });
        self.listeners.notify(&PropertyEvent::Modified);
        Ok(())
    }

    /// Rename an existing property
    ///
    /// The new name is validated like [`add`](Self::add). Fires `Renamed`
    /// then `Modified`.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<(), PropertyError> {
        let pos = self
            .properties
            .iter()
            .position(|p| p.name == old_name)
            .ok_or_else(|| PropertyError::UnknownProperty(old_name.to_string()))?;
        // A rename onto its own name trips the duplicate check, by intent
        self.check_name(new_name)?;
        self.properties[pos].name = new_name.to_string();
        self.listeners.notify(&PropertyEvent::Renamed {
            old_name: old_name.to_string(),
            new_name: new_name.to_string(),
        });
        self.listeners.notify(&PropertyEvent::Modified);
        Ok(())
    }
}
