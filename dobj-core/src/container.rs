// Owning container of data objects and the sample collection

use std::ops::Index;

use crate::data::{DataObject, FloatObject, IntegerObject, StringObject};
use crate::visitor::DataObjectVisitor;

/// An ordered sequence of exclusively owned data objects.
///
/// Insertion order is the order in which `accept_all` dispatches.
#[derive(Debug, Default)]
pub struct ObjectContainer {
    objects: Vec<Box<dyn DataObject>>,
}

impl ObjectContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<T: DataObject + 'static>(&mut self, object: T) {
        self.objects.push(Box::new(object));
    }

    pub fn push_boxed(&mut self, object: Box<dyn DataObject>) {
        self.objects.push(object);
    }

    /// Remove and return the object at `index`, shifting later objects down.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn DataObject>> {
        if index < self.objects.len() {
            Some(self.objects.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn DataObject> {
        self.objects.iter().map(|object| object.as_ref())
    }

    /// Let every object accept `visitor`, in insertion order.
    pub fn accept_all(&self, visitor: &mut dyn DataObjectVisitor) {
        tracing::debug!(objects = self.objects.len(), "dispatching container");
        for object in &self.objects {
            object.accept(visitor);
        }
    }
}

impl Index<usize> for ObjectContainer {
    type Output = dyn DataObject;

    fn index(&self, index: usize) -> &Self::Output {
        self.objects[index].as_ref()
    }
}

impl FromIterator<Box<dyn DataObject>> for ObjectContainer {
    fn from_iter<I: IntoIterator<Item = Box<dyn DataObject>>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl Extend<Box<dyn DataObject>> for ObjectContainer {
    fn extend<I: IntoIterator<Item = Box<dyn DataObject>>>(&mut self, iter: I) {
        self.objects.extend(iter);
    }
}

impl IntoIterator for ObjectContainer {
    type Item = Box<dyn DataObject>;
    type IntoIter = std::vec::IntoIter<Box<dyn DataObject>>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}

/// The fixed demonstration collection: one object of each known type.
pub fn sample_objects() -> ObjectContainer {
    let mut objects = ObjectContainer::new();
    objects.push(StringObject::new("Hello", "utf-8"));
    objects.push(IntegerObject::new(16, 32));
    objects.push(FloatObject::new(3.14, "ieee-754"));
    objects
}
