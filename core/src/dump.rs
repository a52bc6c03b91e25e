//! IR dump — human-readable text output for translation-context ops.

use std::io::Write;

use crate::context::Context;
use crate::op::Op;
use crate::opcode::Opcode;
use crate::temp::TempKind;
use crate::types::{MemOp, MemOrder, Type};

/// Format a temp reference for display.
fn fmt_temp(ctx: &Context, idx: crate::temp::TempIdx, buf: &mut String) {
    use std::fmt::Write as FmtWrite;
    let i = idx.0 as usize;
    if i >= ctx.nb_temps() as usize {
        let v = idx.0;
        write!(buf, "$0x{v:x}").unwrap();
        return;
    }
    let t = ctx.temp(idx);
    match t.kind {
        TempKind::Const => {
            let v = t.val;
            write!(buf, "$0x{v:x}").unwrap();
        }
        TempKind::Global => {
            if let Some(name) = t.name {
                let off = t.mem_offset;
                write!(buf, "{name}[{off:#x}]").unwrap();
            } else {
                write!(buf, "g{i}").unwrap();
            }
        }
        TempKind::Ebb | TempKind::Tb => {
            let local = i as u32 - ctx.nb_globals();
            write!(buf, "tmp{local}").unwrap();
        }
    }
}

/// Build the opcode name with type suffix for polymorphic ops.
fn op_name(op: &Op) -> String {
    let def = op.opc.def();
    if op.opc.is_int_polymorphic() {
        let suffix = match op.op_type {
            Type::I32 => "_i32",
            Type::I64 => "_i64",
        };
        let base = def.name;
        format!("{base}{suffix}")
    } else {
        def.name.to_string()
    }
}

/// Describe a memory-op descriptor constant.
fn fmt_memop(bits: u32) -> String {
    let m = MemOp::new(bits as u16);
    let size = m.size_bytes();
    let sign = if m.is_signed() { "s" } else { "u" };
    let order = match m.ordering() {
        MemOrder::Normal => "",
        MemOrder::Acquire => ",acq",
        MemOrder::Release => ",rel",
    };
    format!("{sign}{}{order}", size * 8)
}

/// Dump all IR ops in `ctx` to the given writer.
pub fn dump_ops(ctx: &Context, w: &mut impl Write) -> std::io::Result<()> {
    for op in ctx.ops() {
        let mut line = String::new();

        match op.opc {
            Opcode::InsnStart => {
                let pc =
                    (op.cargs()[0].0 as u64) | ((op.cargs()[1].0 as u64) << 32);
                line.push_str(&format!(" ---- insn_start {pc:#x}"));
            }
            Opcode::ExitTb => {
                let val = op.cargs()[0].0;
                line.push_str(&format!("exit_tb {val}"));
            }
            Opcode::GuestLd | Opcode::GuestSt => {
                line.push_str(&op_name(op));
                line.push(' ');
                let mut first = true;
                for &a in op.oargs().iter().chain(op.iargs()) {
                    if !first {
                        line.push(',');
                    }
                    first = false;
                    fmt_temp(ctx, a, &mut line);
                }
                let memop = fmt_memop(op.cargs()[0].0);
                line.push_str(&format!(",{memop}"));
            }
            _ => {
                line.push_str(&op_name(op));
                line.push(' ');
                let mut first = true;
                for &a in op.oargs().iter().chain(op.iargs()) {
                    if !first {
                        line.push(',');
                    }
                    first = false;
                    fmt_temp(ctx, a, &mut line);
                }
            }
        }

        writeln!(w, "{line}")?;
    }
    Ok(())
}
