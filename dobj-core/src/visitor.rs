// Visitor traits for dobj
//
// A visitor supplies one method per known data object type. Dispatch happens
// in two hops: `DataObject::accept` selects on the object's concrete type, and
// the method it calls selects on the visitor's concrete implementation.

use crate::data::{DataObject, FloatObject, IntegerObject, StringObject};

/// A strategy that can act on every known data object type.
///
/// Every method defaults to a no-op, so an implementor only overrides the
/// types it cares about and the rest are silently ignored.
pub trait DataObjectVisitor {
    fn visit_string(&mut self, _object: &StringObject) {}

    fn visit_integer(&mut self, _object: &IntegerObject) {}

    fn visit_float(&mut self, _object: &FloatObject) {}

    /// Fallback for object types that have no dedicated method here, such as
    /// types defined outside this crate.
    fn visit_other(&mut self, _object: &dyn DataObject) {}
}

/// The strict alternative to [`DataObjectVisitor`]: every known object type
/// must be handled explicitly.
///
/// Wrap an implementor in [`Exhaustive`] to dispatch to it.
pub trait ExhaustiveVisitor {
    fn visit_string(&mut self, object: &StringObject);

    fn visit_integer(&mut self, object: &IntegerObject);

    fn visit_float(&mut self, object: &FloatObject);

    fn visit_other(&mut self, _object: &dyn DataObject) {}
}

/// Adapts an [`ExhaustiveVisitor`] so objects can accept it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Exhaustive<V>(pub V);

impl<V> Exhaustive<V> {
    pub fn into_inner(self) -> V {
        self.0
    }
}

impl<V: ExhaustiveVisitor> DataObjectVisitor for Exhaustive<V> {
    fn visit_string(&mut self, object: &StringObject) {
        self.0.visit_string(object)
    }

    fn visit_integer(&mut self, object: &IntegerObject) {
        self.0.visit_integer(object)
    }

    fn visit_float(&mut self, object: &FloatObject) {
        self.0.visit_float(object)
    }

    fn visit_other(&mut self, object: &dyn DataObject) {
        self.0.visit_other(object)
    }
}
