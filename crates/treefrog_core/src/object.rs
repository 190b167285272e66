//! Object layer: placed instances with z-ordering

use crate::PropertyCollection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An object placed on an object layer
///
/// Position is in pixels, layer-relative. Named metadata lives in the
/// embedded [`PropertyCollection`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectInstance {
    pub id: Uuid,
    pub name: String,
    pub position: [f32; 2],
    #[serde(default)]
    pub properties: PropertyCollection,
}

impl ObjectInstance {
    /// Create a new object instance with a fresh id
    pub fn new(name: impl Into<String>, position: [f32; 2]) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            position,
            properties: PropertyCollection::new(),
        }
    }
}

/// An ordered list of object instances
///
/// List order is z-order: index 0 is drawn first (back), the last index is
/// drawn last (front) and wins selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectLayer {
    objects: Vec<ObjectInstance>,
}

impl ObjectLayer {
    /// Create an empty object layer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of objects on the layer
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Current z-index of the object with this id
    pub fn object_index(&self, id: Uuid) -> Option<usize> {
        self.objects.iter().position(|o| o.id == id)
    }

    /// Get an object by id
    pub fn get_object(&self, id: Uuid) -> Option<&ObjectInstance> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Get a mutable object by id
    pub fn get_object_mut(&mut self, id: Uuid) -> Option<&mut ObjectInstance> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// Append an object at the front of the z-order
    pub fn add_object(&mut self, object: ObjectInstance) {
        self.objects.push(object);
    }

    /// Remove an object by id
    pub fn remove_object(&mut self, id: Uuid) -> Option<ObjectInstance> {
        self.objects
            .iter()
            .position(|o| o.id == id)
            .map(|pos| self.objects.remove(pos))
    }

    /// Move an object to a specific z-index, shifting the others
    ///
    /// The target index is clamped to the list. Returns `false` (and leaves
    /// the layer untouched) if the object is not on this layer.
    pub fn move_to_index(&mut self, id: Uuid, index: usize) -> bool {
        let Some(pos) = self.object_index(id) else {
            return false;
        };
        let object = self.objects.remove(pos);
        let index = index.min(self.objects.len());
        self.objects.insert(index, object);
        true
    }

    /// Iterate objects back-to-front
    pub fn iter(&self) -> impl Iterator<Item = &ObjectInstance> {
        self.objects.iter()
    }

    /// Object ids back-to-front (the current z-order)
    pub fn order(&self) -> Vec<Uuid> {
        self.objects.iter().map(|o| o.id).collect()
    }
}
