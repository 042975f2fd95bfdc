// Data object definitions for dobj

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::visitor::DataObjectVisitor;

/// A piece of typed data that can be handed to a visitor.
///
/// Each implementor calls exactly one visitor method from `accept`: the one
/// named for its own concrete type. Objects are immutable once constructed,
/// so they may be read from several threads at once.
pub trait DataObject: fmt::Debug + Send + Sync {
    /// Hand `self` to the visitor method matching this object's type.
    ///
    /// The object itself is never modified; the visitor may be.
    fn accept(&self, visitor: &mut dyn DataObjectVisitor);
}

/// Text data tagged with the name of its encoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringObject {
    text: String,
    encoding: String,
}

impl StringObject {
    pub fn new(text: impl Into<String>, encoding: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            encoding: encoding.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }
}

impl DataObject for StringObject {
    fn accept(&self, visitor: &mut dyn DataObjectVisitor) {
        visitor.visit_string(self)
    }
}

/// Signed integer data with its declared bit width
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerObject {
    value: i64,
    width: u32,
}

impl IntegerObject {
    pub fn new(value: i64, width: u32) -> Self {
        Self { value, width }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn width_bits(&self) -> u32 {
        self.width
    }

    /// Whether the value is representable as a two's complement integer of
    /// the declared width. Widths outside `1..=64` never fit.
    pub fn fits_width(&self) -> bool {
        if self.width == 0 || self.width > 64 {
            return false;
        }
        let half = 1i128 << (self.width - 1);
        let value = i128::from(self.value);
        (-half..half).contains(&value)
    }
}

impl DataObject for IntegerObject {
    fn accept(&self, visitor: &mut dyn DataObjectVisitor) {
        visitor.visit_integer(self)
    }
}

/// Floating point data with a label naming its format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatObject {
    value: f64,
    format: String,
}

impl FloatObject {
    pub fn new(value: f64, format: impl Into<String>) -> Self {
        Self {
            value,
            format: format.into(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn format(&self) -> &str {
        &self.format
    }
}

impl DataObject for FloatObject {
    fn accept(&self, visitor: &mut dyn DataObjectVisitor) {
        visitor.visit_float(self)
    }
}
