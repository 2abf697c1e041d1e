//! Testing utilities for SeqLIMS workspace
//!
//! Shared record fixtures and proptest strategies.

#![allow(missing_docs)]

use proptest::prelude::*;
use seqlims_model::{FieldValue, Record};

/// Nucleic extraction record that raises no findings
#[must_use]
pub fn good_nucleic_record(code: &str) -> Record {
    Record::new()
        .with("sampleCode", code)
        .with("dnaConcentration", 120.0)
        .with("purity260280", 1.82)
        .with("purity260230", 2.1)
        .with("dnaVolume", 100.0)
        .with("rnaIntegrity", 9.0)
}

/// PCR record that raises no findings
#[must_use]
pub fn good_pcr_record(code: &str) -> Record {
    Record::new()
        .with("sampleCode", code)
        .with("pcrProduct", 50.0)
        .with("amplificationSuccess", "success")
        .with("bandSize", 500.0)
        .with("amplificationEfficiency", 100.0)
        .with("ctValue", 22.0)
}

/// Library record that raises no findings
#[must_use]
pub fn good_library_record(code: &str) -> Record {
    Record::new()
        .with("sampleCode", code)
        .with("libraryConcentration", 20.0)
        .with("fragmentSize", 400.0)
        .with("molarConcentration", 10.0)
        .with("adapterDimerRatio", 0.5)
        .with("qcStatus", "pass")
}

/// Nucleic extraction record with low concentration only
#[must_use]
pub fn low_concentration_record(code: &str) -> Record {
    good_nucleic_record(code).with("dnaConcentration", 5.0)
}

/// Fields read by any built-in rule set
pub const KNOWN_FIELDS: &[&str] = &[
    "id",
    "sampleCode",
    "dnaConcentration",
    "purity260280",
    "purity260230",
    "dnaVolume",
    "rnaIntegrity",
    "pcrProduct",
    "amplificationSuccess",
    "bandSize",
    "amplificationEfficiency",
    "ctValue",
    "libraryConcentration",
    "fragmentSize",
    "molarConcentration",
    "adapterDimerRatio",
    "qcStatus",
];

/// Any field value, including hostile numbers and odd text
#[must_use]
pub fn arb_field_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        Just(FieldValue::Absent),
        any::<bool>().prop_map(FieldValue::Bool),
        any::<f64>().prop_map(FieldValue::Number),
        (-1.0e4..1.0e4f64).prop_map(FieldValue::Number),
        Just(FieldValue::Number(f64::NAN)),
        Just(FieldValue::Number(f64::INFINITY)),
        prop_oneof![
            Just("success"),
            Just("partial"),
            Just("failed"),
            Just("pass"),
            Just("fail"),
            Just("pending"),
            Just("warning"),
            Just(""),
            Just("   "),
        ]
        .prop_map(FieldValue::from),
        "[a-zA-Z0-9 .-]{0,12}".prop_map(FieldValue::Text),
    ]
}

/// Record over [`KNOWN_FIELDS`] with arbitrary values
#[must_use]
pub fn arb_record() -> impl Strategy<Value = Record> {
    proptest::collection::vec(
        (proptest::sample::select(KNOWN_FIELDS), arb_field_value()),
        0..KNOWN_FIELDS.len(),
    )
    .prop_map(|fields| fields.into_iter().fold(Record::new(), |r, (k, v)| r.with(k, v)))
}
