use ppcjit_core::{Context, MemOp, TempIdx, Type};

#[test]
fn const_temps_are_deduplicated() {
    let mut ctx = Context::new();
    let a = ctx.new_const(Type::I64, 42);
    let b = ctx.new_const(Type::I64, 42);
    assert_eq!(a, b);
    assert_eq!(ctx.nb_temps(), 1);
}

#[test]
fn const_dedup_is_per_type() {
    let mut ctx = Context::new();
    let a = ctx.new_const(Type::I64, 42);
    let b = ctx.new_const(Type::I32, 42);
    assert_ne!(a, b);
    assert_eq!(ctx.nb_temps(), 2);
}

#[test]
fn globals_precede_locals() {
    let mut ctx = Context::new();
    let g0 = ctx.new_global(Type::I64, 0, "gpr");
    let g1 = ctx.new_global(Type::I64, 8, "gpr");
    let t = ctx.new_temp(Type::I64);
    assert_eq!(g0, TempIdx(0));
    assert_eq!(g1, TempIdx(1));
    assert_eq!(t, TempIdx(2));
    assert_eq!(ctx.nb_globals(), 2);
    assert_eq!(ctx.globals().len(), 2);
    assert_eq!(ctx.globals()[1].mem_offset, 8);
}

#[test]
fn reset_preserves_globals_only() {
    let mut ctx = Context::new();
    let g = ctx.new_global(Type::I64, 0, "pc");
    let c = ctx.new_const(Type::I64, 7);
    let t = ctx.new_temp(Type::I64);
    ctx.gen_mov(Type::I64, t, c);
    ctx.gen_guest_ld(Type::I64, t, g, MemOp::ub());
    assert!(ctx.num_ops() > 0);

    ctx.reset();
    assert_eq!(ctx.nb_temps(), 1);
    assert_eq!(ctx.nb_globals(), 1);
    assert_eq!(ctx.num_ops(), 0);

    // Const table was cleared: the same value allocates a fresh temp.
    let c2 = ctx.new_const(Type::I64, 7);
    assert_eq!(c2, TempIdx(1));
}

#[test]
fn emitted_ops_are_recorded_in_order() {
    let mut ctx = Context::new();
    let a = ctx.new_temp(Type::I64);
    let b = ctx.new_const(Type::I64, 1);
    ctx.gen_mov(Type::I64, a, b);
    ctx.gen_add(Type::I64, a, a, b);
    ctx.gen_exit_tb(0);

    let names: Vec<&str> =
        ctx.ops().iter().map(|op| op.opc.def().name).collect();
    assert_eq!(names, ["mov", "add", "exit_tb"]);
}
