//! Field decoder tests — bit slicing per format, and the
//! format-mismatch contract.

use ppcjit_core::Context;
use ppcjit_frontend::ppc::insn::{
    decode, EmitError, InstrFields, InstrFormat,
};
use ppcjit_frontend::ppc::registry::{match_value, memory_table};
use ppcjit_frontend::ppc::{PpcDisasContext, PpcTranslator};
use ppcjit_frontend::TranslatorOps;

use super::{d_form, ds_form, x_form};

#[test]
fn d_form_fields() {
    let word = d_form(0x8800_0000, 3, 1, 0x1234);
    let rec = decode(0x100, word, InstrFormat::D);
    assert_eq!(rec.address, 0x100);
    assert_eq!(rec.word, word);
    let a = rec.d().unwrap();
    assert_eq!(a.rt, 3);
    assert_eq!(a.ra, 1);
    assert_eq!(a.d, 0x1234);
}

#[test]
fn d_form_negative_displacement() {
    let word = d_form(0x8800_0000, 31, 30, -4);
    let a = *decode(0, word, InstrFormat::D).d().unwrap();
    assert_eq!(a.rt, 31);
    assert_eq!(a.ra, 30);
    assert_eq!(a.d, -4);
}

#[test]
fn ds_form_excludes_sub_opcode_bits() {
    // ldu carries sub-opcode 0b01 in the low bits; the displacement must
    // not absorb them.
    let word = ds_form(0xe800_0001, 5, 2, -8);
    let a = *decode(0, word, InstrFormat::Ds).ds().unwrap();
    assert_eq!(a.rt, 5);
    assert_eq!(a.ra, 2);
    assert_eq!(a.ds, -8);
}

#[test]
fn ds_form_displacement_is_word_aligned() {
    let word = ds_form(0xe800_0000, 1, 2, 0x7ffc);
    let a = *decode(0, word, InstrFormat::Ds).ds().unwrap();
    assert_eq!(a.ds, 0x7ffc);
}

#[test]
fn x_form_fields() {
    let word = x_form(0x7c00_00ae, 3, 4, 5);
    let a = *decode(0, word, InstrFormat::X).x().unwrap();
    assert_eq!(a.rt, 3);
    assert_eq!(a.ra, 4);
    assert_eq!(a.rb, 5);
}

#[test]
fn xl_form_fields() {
    let rec = decode(0, x_form(0x4c00_012c, 6, 7, 8), InstrFormat::Xl);
    let a = *rec.xl().unwrap();
    assert_eq!(a.bt, 6);
    assert_eq!(a.ba, 7);
    assert_eq!(a.bb, 8);
}

#[test]
fn accessor_rejects_wrong_format() {
    let rec = decode(0, x_form(0x7c00_00ae, 3, 4, 5), InstrFormat::X);
    assert_eq!(
        rec.d(),
        Err(EmitError::FormatMismatch {
            expected: InstrFormat::D,
            found: InstrFormat::X,
        })
    );
    assert!(matches!(rec.fields, InstrFields::X(_)));
}

#[test]
fn emitter_reports_format_mismatch() {
    let mut ir = Context::new();
    let mut ctx = PpcDisasContext::new(0, std::ptr::null());
    PpcTranslator::init_disas_context(&mut ctx, &mut ir);

    // Hand the lbz emitter an X-form record: must refuse, not misread.
    let entry = memory_table().lookup(match_value(0x8800_0000)).unwrap();
    assert_eq!(entry.mnemonic, "lbz");
    let rec = decode(0, x_form(0x7c00_00ae, 3, 4, 5), InstrFormat::X);
    assert_eq!(
        (entry.emit)(&mut ctx, &mut ir, &rec),
        Err(EmitError::FormatMismatch {
            expected: InstrFormat::D,
            found: InstrFormat::X,
        })
    );
}
