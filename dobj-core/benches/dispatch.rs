use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dobj_core::container::ObjectContainer;
use dobj_core::data::{DataObject, FloatObject, IntegerObject, StringObject};
use dobj_core::record::Record;
use dobj_core::visitor::DataObjectVisitor;

#[derive(Default)]
struct Tally {
    count: u64,
}

impl DataObjectVisitor for Tally {
    fn visit_string(&mut self, object: &StringObject) {
        self.count += object.text().len() as u64;
    }

    fn visit_integer(&mut self, object: &IntegerObject) {
        self.count += object.value() as u64;
    }

    fn visit_float(&mut self, object: &FloatObject) {
        self.count += object.value() as u64;
    }
}

fn records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| match i % 3 {
            0 => Record::String(StringObject::new("Hello", "utf-8")),
            1 => Record::Integer(IntegerObject::new(i as i64, 32)),
            _ => Record::Float(FloatObject::new(i as f64, "ieee-754")),
        })
        .collect()
}

fn bench_dispatch(c: &mut Criterion) {
    let records = records(1024);
    let objects: ObjectContainer = records.iter().cloned().map(Record::into_boxed).collect();

    c.bench_function("boxed_accept_all", |b| {
        b.iter(|| {
            let mut tally = Tally::default();
            black_box(&objects).accept_all(&mut tally);
            tally.count
        })
    });

    c.bench_function("record_match_accept", |b| {
        b.iter(|| {
            let mut tally = Tally::default();
            for record in black_box(&records) {
                record.accept(&mut tally);
            }
            tally.count
        })
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
