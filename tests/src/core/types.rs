use ppcjit_core::types::TYPE_COUNT;
use ppcjit_core::{MemOp, MemOrder, Type};

#[test]
fn type_sizes() {
    assert_eq!(Type::I32.size_bits(), 32);
    assert_eq!(Type::I64.size_bits(), 64);
    assert_eq!(Type::I64.size_bytes(), 8);
    assert_eq!(TYPE_COUNT, 2);
}

#[test]
fn memop_sizes() {
    assert_eq!(MemOp::ub().size_bytes(), 1);
    assert_eq!(MemOp::uw().size_bytes(), 2);
    assert_eq!(MemOp::ul().size_bytes(), 4);
    assert_eq!(MemOp::uq().size_bytes(), 8);
}

#[test]
fn memop_signedness() {
    assert!(!MemOp::ub().is_signed());
    assert!(MemOp::sb().is_signed());
    assert!(MemOp::sw().is_signed());
    assert!(MemOp::sl().is_signed());
    assert!(!MemOp::uq().is_signed());
}

#[test]
fn memop_ordering_defaults_to_normal() {
    assert_eq!(MemOp::ul().ordering(), MemOrder::Normal);
    assert_eq!(MemOp::uq().ordering(), MemOrder::Normal);
}

#[test]
fn memop_acquire_release() {
    let acq = MemOp::ul().with_acquire();
    assert_eq!(acq.ordering(), MemOrder::Acquire);
    assert_eq!(acq.size_bytes(), 4);

    let rel = MemOp::ul().with_release();
    assert_eq!(rel.ordering(), MemOrder::Release);
    assert_eq!(rel.size_bytes(), 4);
}

#[test]
fn memop_bits_roundtrip() {
    let m = MemOp::sw().with_acquire();
    let back = MemOp::new(m.bits());
    assert_eq!(back, m);
    assert!(back.is_signed());
    assert_eq!(back.ordering(), MemOrder::Acquire);
}
