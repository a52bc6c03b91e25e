//! Memory-access instruction translation.
//!
//! One emitter per concrete encoding, in the gen_xxx helper style:
//! the shared effective-address and access helpers are parameterised by
//! the decoded field record and the memory-op descriptor, and each
//! trans_xxx function is a thin composition of them.
//!
//! Update forms ("u"/"ux" suffixes) write the computed effective address
//! back into the base register after the access; the address itself is
//! always computed from the base register's pre-update value.

use ppcjit_core::{Context, MemOp, TempIdx, Type};

use super::cpu::CR_EQ;
use super::insn::{ArgsD, ArgsDs, ArgsX, DecodedInstr, EmitError, InstrFormat};
use super::registry::{EmitFn, InstrEntry};
use super::PpcDisasContext;

// ── Shared helpers ─────────────────────────────────────────────

impl PpcDisasContext {
    /// Base operand of a non-update form: constant zero when the base
    /// register field is 0, otherwise the register's value.
    fn ea_base(&self, ir: &mut Context, ra: u8, disp: TempIdx) -> TempIdx {
        if ra == 0 {
            return disp;
        }
        let ea = ir.new_temp(Type::I64);
        ir.gen_add(Type::I64, ea, self.gpr_value(ra), disp)
    }

    /// D-form EA: `(ra|0) + exts(d)`.
    fn ea_d(&self, ir: &mut Context, a: &ArgsD) -> TempIdx {
        let disp = ir.new_const(Type::I64, a.d as i64 as u64);
        self.ea_base(ir, a.ra, disp)
    }

    /// DS-form EA: `(ra|0) + exts(ds || 0b00)`.
    fn ea_ds(&self, ir: &mut Context, a: &ArgsDs) -> TempIdx {
        let disp = ir.new_const(Type::I64, a.ds as i64 as u64);
        self.ea_base(ir, a.ra, disp)
    }

    /// X-form EA: `(ra|0) + rb`.
    fn ea_x(&self, ir: &mut Context, a: &ArgsX) -> TempIdx {
        self.ea_base(ir, a.ra, self.gpr_value(a.rb))
    }

    /// D-form update EA: `ra + exts(d)`, base never treated as zero.
    fn ea_d_update(&self, ir: &mut Context, a: &ArgsD) -> TempIdx {
        let disp = ir.new_const(Type::I64, a.d as i64 as u64);
        let ea = ir.new_temp(Type::I64);
        ir.gen_add(Type::I64, ea, self.gpr_value(a.ra), disp)
    }

    /// DS-form update EA: `ra + exts(ds || 0b00)`.
    fn ea_ds_update(&self, ir: &mut Context, a: &ArgsDs) -> TempIdx {
        let disp = ir.new_const(Type::I64, a.ds as i64 as u64);
        let ea = ir.new_temp(Type::I64);
        ir.gen_add(Type::I64, ea, self.gpr_value(a.ra), disp)
    }

    /// X-form update EA: `ra + rb`, base never treated as zero.
    fn ea_x_update(&self, ir: &mut Context, a: &ArgsX) -> TempIdx {
        let ea = ir.new_temp(Type::I64);
        ir.gen_add(Type::I64, ea, self.gpr_value(a.ra), self.gpr_value(a.rb))
    }

    /// Load into GPR `rt`; extension to 64 bits per `memop`.
    fn gen_load_gpr(&self, ir: &mut Context, rt: u8, ea: TempIdx, memop: MemOp) {
        ir.gen_guest_ld(Type::I64, self.gpr_value(rt), ea, memop);
    }

    /// Store the low `memop.size_bytes()` bytes of GPR `rs`.
    fn gen_store_gpr(&self, ir: &mut Context, rs: u8, ea: TempIdx, memop: MemOp) {
        ir.gen_guest_st(Type::I64, self.gpr_value(rs), ea, memop);
    }

    /// Write the computed EA back into the base register.
    fn gen_update(&self, ir: &mut Context, ra: u8, ea: TempIdx) {
        ir.gen_mov(Type::I64, self.gpr[ra as usize], ea);
    }
}

// ── Integer loads ──────────────────────────────────────────────

fn trans_lbz(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d(ir, a);
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::ub());
    Ok(())
}

fn trans_lbzu(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d_update(ir, a);
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::ub());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_lbzux(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x_update(ir, a);
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::ub());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_lbzx(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x(ir, a);
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::ub());
    Ok(())
}

fn trans_ld(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.ds()?;
    let ea = ctx.ea_ds(ir, a);
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::uq());
    Ok(())
}

fn trans_ldu(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.ds()?;
    let ea = ctx.ea_ds_update(ir, a);
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::uq());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_lha(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d(ir, a);
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::sw());
    Ok(())
}

fn trans_lhax(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x(ir, a);
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::sw());
    Ok(())
}

fn trans_lhz(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d(ir, a);
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::uw());
    Ok(())
}

fn trans_lhzu(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d_update(ir, a);
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::uw());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_lhzux(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x_update(ir, a);
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::uw());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_lhzx(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x(ir, a);
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::uw());
    Ok(())
}

fn trans_lwa(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.ds()?;
    let ea = ctx.ea_ds(ir, a);
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::sl());
    Ok(())
}

fn trans_lwaux(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x_update(ir, a);
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::sl());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_lwax(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x(ir, a);
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::sl());
    Ok(())
}

fn trans_lwz(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d(ir, a);
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::ul());
    Ok(())
}

fn trans_lwzu(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d_update(ir, a);
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::ul());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_lwzux(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x_update(ir, a);
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::ul());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_lwzx(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x(ir, a);
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::ul());
    Ok(())
}

// ── Integer stores ─────────────────────────────────────────────

fn trans_stb(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d(ir, a);
    ctx.gen_store_gpr(ir, a.rt, ea, MemOp::ub());
    Ok(())
}

fn trans_stbu(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d_update(ir, a);
    ctx.gen_store_gpr(ir, a.rt, ea, MemOp::ub());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_stbux(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x_update(ir, a);
    ctx.gen_store_gpr(ir, a.rt, ea, MemOp::ub());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_stbx(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x(ir, a);
    ctx.gen_store_gpr(ir, a.rt, ea, MemOp::ub());
    Ok(())
}

fn trans_std(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.ds()?;
    let ea = ctx.ea_ds(ir, a);
    ctx.gen_store_gpr(ir, a.rt, ea, MemOp::uq());
    Ok(())
}

fn trans_stdu(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.ds()?;
    let ea = ctx.ea_ds_update(ir, a);
    ctx.gen_store_gpr(ir, a.rt, ea, MemOp::uq());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_stdux(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x_update(ir, a);
    ctx.gen_store_gpr(ir, a.rt, ea, MemOp::uq());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_stdx(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x(ir, a);
    ctx.gen_store_gpr(ir, a.rt, ea, MemOp::uq());
    Ok(())
}

fn trans_sth(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d(ir, a);
    ctx.gen_store_gpr(ir, a.rt, ea, MemOp::uw());
    Ok(())
}

fn trans_sthu(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d_update(ir, a);
    ctx.gen_store_gpr(ir, a.rt, ea, MemOp::uw());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_sthux(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x_update(ir, a);
    ctx.gen_store_gpr(ir, a.rt, ea, MemOp::uw());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_sthx(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x(ir, a);
    ctx.gen_store_gpr(ir, a.rt, ea, MemOp::uw());
    Ok(())
}

fn trans_stw(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d(ir, a);
    ctx.gen_store_gpr(ir, a.rt, ea, MemOp::ul());
    Ok(())
}

fn trans_stwu(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d_update(ir, a);
    ctx.gen_store_gpr(ir, a.rt, ea, MemOp::ul());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_stwux(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x_update(ir, a);
    ctx.gen_store_gpr(ir, a.rt, ea, MemOp::ul());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_stwx(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x(ir, a);
    ctx.gen_store_gpr(ir, a.rt, ea, MemOp::ul());
    Ok(())
}

// ── Memory synchronization ─────────────────────────────────────

fn trans_lwarx(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x(ir, a);
    // Acquire ordering establishes the reservation; condition codes are
    // left untouched.
    ctx.gen_load_gpr(ir, a.rt, ea, MemOp::ul().with_acquire());
    Ok(())
}

fn trans_stwcx(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x(ir, a);
    ctx.gen_store_gpr(ir, a.rt, ea, MemOp::ul().with_release());
    // Simplification: success is reported unconditionally instead of
    // depending on reservation validity. The memory subsystem still
    // refuses the write itself when the reservation is gone.
    ctx.set_cr_field(ir, 0, CR_EQ);
    Ok(())
}

// ── Floating-point loads ───────────────────────────────────────

fn trans_lfd(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d(ir, a);
    // Raw bits straight into the register, no numeric conversion.
    ir.gen_guest_ld(Type::I64, ctx.fpr_value(a.rt), ea, MemOp::uq());
    Ok(())
}

fn trans_lfdu(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d_update(ir, a);
    ir.gen_guest_ld(Type::I64, ctx.fpr_value(a.rt), ea, MemOp::uq());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_lfdux(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x_update(ir, a);
    ir.gen_guest_ld(Type::I64, ctx.fpr_value(a.rt), ea, MemOp::uq());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_lfdx(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x(ir, a);
    ir.gen_guest_ld(Type::I64, ctx.fpr_value(a.rt), ea, MemOp::uq());
    Ok(())
}

/// Single-precision load body: fetch 4 bytes, then numerically widen the
/// IEEE single to the double the register file stores.
fn gen_lfs_body(
    ctx: &PpcDisasContext,
    ir: &mut Context,
    frt: u8,
    ea: TempIdx,
) {
    let raw = ir.new_temp(Type::I64);
    ir.gen_guest_ld(Type::I64, raw, ea, MemOp::ul());
    ir.gen_f32_to_f64(ctx.fpr_value(frt), raw);
}

fn trans_lfs(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d(ir, a);
    gen_lfs_body(ctx, ir, a.rt, ea);
    Ok(())
}

fn trans_lfsu(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d_update(ir, a);
    gen_lfs_body(ctx, ir, a.rt, ea);
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_lfsux(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x_update(ir, a);
    gen_lfs_body(ctx, ir, a.rt, ea);
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_lfsx(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x(ir, a);
    gen_lfs_body(ctx, ir, a.rt, ea);
    Ok(())
}

// ── Floating-point stores ──────────────────────────────────────

fn trans_stfd(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d(ir, a);
    ir.gen_guest_st(Type::I64, ctx.fpr_value(a.rt), ea, MemOp::uq());
    Ok(())
}

fn trans_stfdu(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d_update(ir, a);
    ir.gen_guest_st(Type::I64, ctx.fpr_value(a.rt), ea, MemOp::uq());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_stfdux(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x_update(ir, a);
    ir.gen_guest_st(Type::I64, ctx.fpr_value(a.rt), ea, MemOp::uq());
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_stfdx(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x(ir, a);
    ir.gen_guest_st(Type::I64, ctx.fpr_value(a.rt), ea, MemOp::uq());
    Ok(())
}

fn trans_stfiwx(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x(ir, a);
    // Low word of the raw register bits, no conversion.
    ir.gen_guest_st(Type::I64, ctx.fpr_value(a.rt), ea, MemOp::ul());
    Ok(())
}

/// Single-precision store body: numerically narrow the double register
/// value to IEEE single, then store its bit pattern.
fn gen_stfs_body(
    ctx: &PpcDisasContext,
    ir: &mut Context,
    frs: u8,
    ea: TempIdx,
) {
    let narrowed = ir.new_temp(Type::I64);
    ir.gen_f64_to_f32(narrowed, ctx.fpr_value(frs));
    ir.gen_guest_st(Type::I64, narrowed, ea, MemOp::ul());
}

fn trans_stfs(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d(ir, a);
    gen_stfs_body(ctx, ir, a.rt, ea);
    Ok(())
}

fn trans_stfsu(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.d()?;
    let ea = ctx.ea_d_update(ir, a);
    gen_stfs_body(ctx, ir, a.rt, ea);
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_stfsux(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x_update(ir, a);
    gen_stfs_body(ctx, ir, a.rt, ea);
    ctx.gen_update(ir, a.ra, ea);
    Ok(())
}

fn trans_stfsx(
    ctx: &mut PpcDisasContext,
    ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    let a = i.x()?;
    let ea = ctx.ea_x(ir, a);
    gen_stfs_body(ctx, ir, a.rt, ea);
    Ok(())
}

// ── Cache management ───────────────────────────────────────────

/// Cache-touch hints carry no observable state change.
fn trans_cache_hint(
    _ctx: &mut PpcDisasContext,
    _ir: &mut Context,
    i: &DecodedInstr,
) -> Result<(), EmitError> {
    i.x()?;
    Ok(())
}

// ── Unsupported encodings ──────────────────────────────────────

/// Declines without emitting any IR; the block is aborted.
fn trans_unimplemented(
    _ctx: &mut PpcDisasContext,
    _ir: &mut Context,
    _i: &DecodedInstr,
) -> Result<(), EmitError> {
    Err(EmitError::NotImplemented)
}

// ── Registration table ─────────────────────────────────────────

const fn entry(
    mnemonic: &'static str,
    match_value: u32,
    format: InstrFormat,
    emit: EmitFn,
) -> InstrEntry {
    InstrEntry {
        mnemonic,
        match_value,
        format,
        emit,
    }
}

use super::insn::InstrFormat as F;

/// Memory-access category: one entry per concrete encoding.
///
/// Match values are the full 32-bit patterns with operand fields zeroed;
/// `registry::match_value` reduces fetched words to the same shape.
pub static MEMORY_INSTRS: &[InstrEntry] = &[
    // Integer load
    entry("lbz", 0x8800_0000, F::D, trans_lbz),
    entry("lbzu", 0x8c00_0000, F::D, trans_lbzu),
    entry("lbzux", 0x7c00_00ee, F::X, trans_lbzux),
    entry("lbzx", 0x7c00_00ae, F::X, trans_lbzx),
    entry("ld", 0xe800_0000, F::Ds, trans_ld),
    entry("ldu", 0xe800_0001, F::Ds, trans_ldu),
    entry("ldux", 0x7c00_006a, F::X, trans_unimplemented),
    entry("ldx", 0x7c00_002a, F::X, trans_unimplemented),
    entry("lha", 0xa800_0000, F::D, trans_lha),
    entry("lhau", 0xac00_0000, F::D, trans_unimplemented),
    entry("lhaux", 0x7c00_02ee, F::X, trans_unimplemented),
    entry("lhax", 0x7c00_02ae, F::X, trans_lhax),
    entry("lhz", 0xa000_0000, F::D, trans_lhz),
    entry("lhzu", 0xa400_0000, F::D, trans_lhzu),
    entry("lhzux", 0x7c00_026e, F::X, trans_lhzux),
    entry("lhzx", 0x7c00_022e, F::X, trans_lhzx),
    entry("lwa", 0xe800_0002, F::Ds, trans_lwa),
    entry("lwaux", 0x7c00_02ea, F::X, trans_lwaux),
    entry("lwax", 0x7c00_02aa, F::X, trans_lwax),
    entry("lwz", 0x8000_0000, F::D, trans_lwz),
    entry("lwzu", 0x8400_0000, F::D, trans_lwzu),
    entry("lwzux", 0x7c00_006e, F::X, trans_lwzux),
    entry("lwzx", 0x7c00_002e, F::X, trans_lwzx),
    // Integer store
    entry("stb", 0x9800_0000, F::D, trans_stb),
    entry("stbu", 0x9c00_0000, F::D, trans_stbu),
    entry("stbux", 0x7c00_01ee, F::X, trans_stbux),
    entry("stbx", 0x7c00_01ae, F::X, trans_stbx),
    entry("std", 0xf800_0000, F::Ds, trans_std),
    entry("stdu", 0xf800_0001, F::Ds, trans_stdu),
    entry("stdux", 0x7c00_016a, F::X, trans_stdux),
    entry("stdx", 0x7c00_012a, F::X, trans_stdx),
    entry("sth", 0xb000_0000, F::D, trans_sth),
    entry("sthu", 0xb400_0000, F::D, trans_sthu),
    entry("sthux", 0x7c00_036e, F::X, trans_sthux),
    entry("sthx", 0x7c00_032e, F::X, trans_sthx),
    entry("stw", 0x9000_0000, F::D, trans_stw),
    entry("stwu", 0x9400_0000, F::D, trans_stwu),
    entry("stwux", 0x7c00_016e, F::X, trans_stwux),
    entry("stwx", 0x7c00_012e, F::X, trans_stwx),
    // Integer load/store with byte reverse
    entry("lhbrx", 0x7c00_062c, F::X, trans_unimplemented),
    entry("lwbrx", 0x7c00_042c, F::X, trans_unimplemented),
    entry("ldbrx", 0x7c00_0428, F::X, trans_unimplemented),
    entry("sthbrx", 0x7c00_072c, F::X, trans_unimplemented),
    entry("stwbrx", 0x7c00_052c, F::X, trans_unimplemented),
    entry("stdbrx", 0x7c00_0528, F::X, trans_unimplemented),
    // Integer load/store multiple
    entry("lmw", 0xb800_0000, F::D, trans_unimplemented),
    entry("stmw", 0xbc00_0000, F::D, trans_unimplemented),
    // Integer load/store string
    entry("lswi", 0x7c00_04aa, F::X, trans_unimplemented),
    entry("lswx", 0x7c00_042a, F::X, trans_unimplemented),
    entry("stswi", 0x7c00_05aa, F::X, trans_unimplemented),
    entry("stswx", 0x7c00_052a, F::X, trans_unimplemented),
    // Memory synchronization
    entry("eieio", 0x7c00_06ac, F::X, trans_unimplemented),
    entry("isync", 0x4c00_012c, F::Xl, trans_unimplemented),
    entry("ldarx", 0x7c00_00a8, F::X, trans_unimplemented),
    entry("lwarx", 0x7c00_0028, F::X, trans_lwarx),
    entry("stdcx.", 0x7c00_01ad, F::X, trans_unimplemented),
    entry("stwcx.", 0x7c00_012d, F::X, trans_stwcx),
    entry("sync", 0x7c00_04ac, F::X, trans_unimplemented),
    // Floating-point load
    entry("lfd", 0xc800_0000, F::D, trans_lfd),
    entry("lfdu", 0xcc00_0000, F::D, trans_lfdu),
    entry("lfdux", 0x7c00_04ee, F::X, trans_lfdux),
    entry("lfdx", 0x7c00_04ae, F::X, trans_lfdx),
    entry("lfs", 0xc000_0000, F::D, trans_lfs),
    entry("lfsu", 0xc400_0000, F::D, trans_lfsu),
    entry("lfsux", 0x7c00_046e, F::X, trans_lfsux),
    entry("lfsx", 0x7c00_042e, F::X, trans_lfsx),
    // Floating-point store
    entry("stfd", 0xd800_0000, F::D, trans_stfd),
    entry("stfdu", 0xdc00_0000, F::D, trans_stfdu),
    entry("stfdux", 0x7c00_05ee, F::X, trans_stfdux),
    entry("stfdx", 0x7c00_05ae, F::X, trans_stfdx),
    entry("stfiwx", 0x7c00_07ae, F::X, trans_stfiwx),
    entry("stfs", 0xd000_0000, F::D, trans_stfs),
    entry("stfsu", 0xd400_0000, F::D, trans_stfsu),
    entry("stfsux", 0x7c00_056e, F::X, trans_stfsux),
    entry("stfsx", 0x7c00_052e, F::X, trans_stfsx),
    // Cache management
    entry("dcbf", 0x7c00_00ac, F::X, trans_unimplemented),
    entry("dcbst", 0x7c00_006c, F::X, trans_unimplemented),
    entry("dcbt", 0x7c00_022c, F::X, trans_cache_hint),
    entry("dcbtst", 0x7c00_01ec, F::X, trans_cache_hint),
    entry("dcbz", 0x7c00_07ec, F::X, trans_unimplemented),
    entry("icbi", 0x7c00_07ac, F::X, trans_unimplemented),
];
