// Per-type tallies of visited data objects

use std::fmt;

use crate::data::{DataObject, FloatObject, IntegerObject, StringObject};
use crate::visitor::ExhaustiveVisitor;

/// Counts visited objects by type.
///
/// Implements the exhaustive visitor trait, so wrap it in
/// [`crate::visitor::Exhaustive`] before dispatching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeCounter {
    pub strings: usize,
    pub integers: usize,
    pub floats: usize,
    pub others: usize,
}

impl TypeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.strings + self.integers + self.floats + self.others
    }
}

impl ExhaustiveVisitor for TypeCounter {
    fn visit_string(&mut self, _object: &StringObject) {
        self.strings += 1;
    }

    fn visit_integer(&mut self, _object: &IntegerObject) {
        self.integers += 1;
    }

    fn visit_float(&mut self, _object: &FloatObject) {
        self.floats += 1;
    }

    fn visit_other(&mut self, _object: &dyn DataObject) {
        self.others += 1;
    }
}

impl fmt::Display for TypeCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "strings:  {}", self.strings)?;
        writeln!(f, "integers: {}", self.integers)?;
        writeln!(f, "floats:   {}", self.floats)?;
        if self.others > 0 {
            writeln!(f, "others:   {}", self.others)?;
        }
        write!(f, "total:    {}", self.total())
    }
}
