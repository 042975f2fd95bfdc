// Serializable records: the closed set of known data objects as one enum
//
// A JSON data file is an array of records tagged by "type":
//
//   [{"type": "string", "text": "Hello", "encoding": "utf-8"},
//    {"type": "integer", "value": 16, "width": 32},
//    {"type": "float", "value": 3.14, "format": "ieee-754"}]

use serde::{Deserialize, Serialize};

use crate::container::ObjectContainer;
use crate::data::{DataObject, FloatObject, IntegerObject, StringObject};
use crate::error::{LoadError, Result};
use crate::visitor::DataObjectVisitor;

/// One known data object, tagged by its type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Record {
    String(StringObject),
    Integer(IntegerObject),
    Float(FloatObject),
}

impl Record {
    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        match self {
            Record::Integer(object) => {
                let width = object.width_bits();
                if width == 0 || width > 64 {
                    Err(LoadError::InvalidWidth { width })
                } else if !object.fits_width() {
                    Err(LoadError::IntegerOutOfRange {
                        value: object.value(),
                        width,
                    })
                } else {
                    Ok(())
                }
            }
            Record::Float(object) if !object.value().is_finite() => {
                Err(LoadError::NonFiniteFloat {
                    value: object.value(),
                })
            }
            Record::String(_) | Record::Float(_) => Ok(()),
        }
    }

    pub fn into_boxed(self) -> Box<dyn DataObject> {
        match self {
            Record::String(object) => Box::new(object),
            Record::Integer(object) => Box::new(object),
            Record::Float(object) => Box::new(object),
        }
    }
}

// Delegating keeps the second hop typed by the wrapped object.
impl DataObject for Record {
    fn accept(&self, visitor: &mut dyn DataObjectVisitor) {
        match self {
            Record::String(object) => object.accept(visitor),
            Record::Integer(object) => object.accept(visitor),
            Record::Float(object) => object.accept(visitor),
        }
    }
}

impl From<StringObject> for Record {
    fn from(object: StringObject) -> Self {
        Record::String(object)
    }
}

impl From<IntegerObject> for Record {
    fn from(object: IntegerObject) -> Self {
        Record::Integer(object)
    }
}

impl From<FloatObject> for Record {
    fn from(object: FloatObject) -> Self {
        Record::Float(object)
    }
}

/// Parse and validate a JSON array of records.
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_str(json)?;
    for record in &records {
        record.validate()?;
    }
    Ok(records)
}

/// Load a JSON array of records into a container, preserving order.
pub fn load_objects(json: &str) -> Result<ObjectContainer> {
    let records = parse_records(json)?;
    tracing::debug!(objects = records.len(), "loaded data objects");
    Ok(records.into_iter().map(Record::into_boxed).collect())
}

/// A visitor that copies every known object it sees into a [`Record`].
///
/// Objects of types without a dedicated visitor method cannot be recorded
/// and are only counted.
#[derive(Debug, Default)]
pub struct RecordCollector {
    records: Vec<Record>,
    skipped: usize,
}

impl RecordCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Serialize the collected records as pretty-printed JSON.
    ///
    /// Fails on records that could not be loaded back, such as NaN or
    /// infinite floats, which JSON can only write as `null`.
    pub fn to_json(&self) -> Result<String> {
        for record in &self.records {
            record.validate()?;
        }
        serde_json::to_string_pretty(&self.records).map_err(LoadError::from)
    }
}

impl DataObjectVisitor for RecordCollector {
    fn visit_string(&mut self, object: &StringObject) {
        self.records.push(object.clone().into());
    }

    fn visit_integer(&mut self, object: &IntegerObject) {
        self.records.push(object.clone().into());
    }

    fn visit_float(&mut self, object: &FloatObject) {
        self.records.push(object.clone().into());
    }

    fn visit_other(&mut self, _object: &dyn DataObject) {
        self.skipped += 1;
    }
}
