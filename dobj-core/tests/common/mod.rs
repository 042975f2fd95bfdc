// Test utilities and generators for dobj property-based testing

#![allow(dead_code)]

use dobj_core::container::ObjectContainer;
use dobj_core::data::{DataObject, FloatObject, IntegerObject, StringObject};
use dobj_core::record::Record;
use dobj_core::visitor::DataObjectVisitor;
use proptest::prelude::*;

/// One visitor method invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    String(StringObject),
    Integer(IntegerObject),
    Float(FloatObject),
    Other,
}

/// A visitor that records every method call it receives, in order
#[derive(Debug, Default)]
pub struct RecordingVisitor {
    pub calls: Vec<Call>,
}

impl DataObjectVisitor for RecordingVisitor {
    fn visit_string(&mut self, object: &StringObject) {
        self.calls.push(Call::String(object.clone()));
    }

    fn visit_integer(&mut self, object: &IntegerObject) {
        self.calls.push(Call::Integer(object.clone()));
    }

    fn visit_float(&mut self, object: &FloatObject) {
        self.calls.push(Call::Float(object.clone()));
    }

    fn visit_other(&mut self, _object: &dyn DataObject) {
        self.calls.push(Call::Other);
    }
}

/// The call a record is expected to produce on a recording visitor
pub fn expected_call(record: &Record) -> Call {
    match record {
        Record::String(object) => Call::String(object.clone()),
        Record::Integer(object) => Call::Integer(object.clone()),
        Record::Float(object) => Call::Float(object.clone()),
    }
}

/// Build a container holding the records as boxed objects, in order
pub fn container_of(records: &[Record]) -> ObjectContainer {
    records.iter().cloned().map(Record::into_boxed).collect()
}

/// Generate encoding labels
pub fn arb_encoding() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("utf-8".to_string()),
        Just("ascii".to_string()),
        Just("latin-1".to_string()),
        "[a-z0-9-]{1,12}".prop_map(|s| s.to_string()),
    ]
}

/// Generate float format labels
pub fn arb_float_format() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ieee-754".to_string()),
        Just("bfloat16".to_string()),
        "[a-z0-9-]{1,12}".prop_map(|s| s.to_string()),
    ]
}

pub fn arb_string_object() -> impl Strategy<Value = StringObject> {
    ("[a-zA-Z0-9 ]{0,24}", arb_encoding())
        .prop_map(|(text, encoding)| StringObject::new(text, encoding))
}

/// Generate integers that fit their declared width
pub fn arb_integer_object() -> impl Strategy<Value = IntegerObject> {
    (1u32..=64).prop_flat_map(|width| {
        let half = 1i128 << (width - 1);
        let min = -half as i64;
        let max = (half - 1) as i64;
        (min..=max).prop_map(move |value| IntegerObject::new(value, width))
    })
}

/// Generate finite floats with two decimals so records survive JSON exactly
pub fn arb_float_object() -> impl Strategy<Value = FloatObject> {
    (-1_000_000_000i64..1_000_000_000, arb_float_format())
        .prop_map(|(cents, format)| FloatObject::new(cents as f64 / 100.0, format))
}

pub fn arb_record() -> impl Strategy<Value = Record> {
    prop_oneof![
        arb_string_object().prop_map(Record::String),
        arb_integer_object().prop_map(Record::Integer),
        arb_float_object().prop_map(Record::Float),
    ]
}

/// Generate an ordered collection of records
pub fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(arb_record(), 0..32)
}
