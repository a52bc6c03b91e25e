//! IR evaluator — executes a translation context's ops against a
//! `PpcCpu` and a flat guest-memory buffer.
//!
//! Implements the memory-bridge contract the IR assumes: big-endian
//! accesses, zero/sign extension per the memory-op descriptor, acquire
//! loads establishing a reservation, and release stores that silently
//! skip the write when no matching reservation is active.

use ppcjit_core::{Context, MemOp, MemOrder, Opcode, TempIdx, TempKind};
use ppcjit_frontend::ppc::cpu::{
    self, PpcCpu, NUM_CR_FIELDS, NUM_FPRS, NUM_GPRS,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("guest access of {len} bytes at {addr:#x} is out of bounds")]
    OutOfBounds { addr: u64, len: u32 },
    #[error("global temp bound to unknown CPU offset {0:#x}")]
    UnknownGlobalOffset(i64),
    #[error("temp {0} read before any write")]
    UninitializedTemp(u32),
}

// ---------------------------------------------------------------
// Guest memory
// ---------------------------------------------------------------

/// Flat guest data memory starting at `base`.
pub struct GuestMem {
    base: u64,
    bytes: Vec<u8>,
}

impl GuestMem {
    pub fn new(base: u64, size: usize) -> Self {
        Self {
            base,
            bytes: vec![0; size],
        }
    }

    fn index(&self, addr: u64, len: u32) -> Result<usize, Error> {
        let off = addr.wrapping_sub(self.base);
        if off.checked_add(len as u64).map_or(true, |end| {
            end > self.bytes.len() as u64
        }) {
            return Err(Error::OutOfBounds { addr, len });
        }
        Ok(off as usize)
    }

    /// Big-endian read of `len` bytes, zero-extended to 64 bits.
    pub fn read_be(&self, addr: u64, len: u32) -> Result<u64, Error> {
        let i = self.index(addr, len)?;
        let mut v = 0u64;
        for b in &self.bytes[i..i + len as usize] {
            v = (v << 8) | *b as u64;
        }
        Ok(v)
    }

    /// Big-endian write of the low `len` bytes of `val`.
    pub fn write_be(&mut self, addr: u64, len: u32, val: u64) -> Result<(), Error> {
        let i = self.index(addr, len)?;
        for (k, b) in self.bytes[i..i + len as usize].iter_mut().enumerate() {
            *b = (val >> (8 * (len as usize - 1 - k))) as u8;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------
// CPU-state field binding
// ---------------------------------------------------------------

fn read_cpu_field(c: &PpcCpu, offset: i64) -> Result<u64, Error> {
    let gpr_end = cpu::gpr_offset(NUM_GPRS);
    let fpr_end = cpu::fpr_offset(NUM_FPRS);
    let cr_end = cpu::cr_offset(NUM_CR_FIELDS);
    match offset {
        o if (0..gpr_end).contains(&o) => Ok(c.gpr[(o / 8) as usize]),
        o if (gpr_end..fpr_end).contains(&o) => {
            Ok(c.fpr[((o - gpr_end) / 8) as usize])
        }
        o if (fpr_end..cr_end).contains(&o) => {
            Ok(c.cr[((o - fpr_end) / 8) as usize])
        }
        cpu::PC_OFFSET => Ok(c.pc),
        o => Err(Error::UnknownGlobalOffset(o)),
    }
}

fn write_cpu_field(c: &mut PpcCpu, offset: i64, val: u64) -> Result<(), Error> {
    let gpr_end = cpu::gpr_offset(NUM_GPRS);
    let fpr_end = cpu::fpr_offset(NUM_FPRS);
    let cr_end = cpu::cr_offset(NUM_CR_FIELDS);
    match offset {
        o if (0..gpr_end).contains(&o) => c.gpr[(o / 8) as usize] = val,
        o if (gpr_end..fpr_end).contains(&o) => {
            c.fpr[((o - gpr_end) / 8) as usize] = val
        }
        o if (fpr_end..cr_end).contains(&o) => {
            c.cr[((o - fpr_end) / 8) as usize] = val
        }
        cpu::PC_OFFSET => c.pc = val,
        o => return Err(Error::UnknownGlobalOffset(o)),
    }
    Ok(())
}

// ---------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------

fn sign_extend(v: u64, size_bytes: u32) -> u64 {
    let bits = size_bytes * 8;
    if bits >= 64 {
        v
    } else {
        let sh = 64 - bits;
        (((v << sh) as i64) >> sh) as u64
    }
}

struct Env<'a> {
    vals: Vec<u64>,
    init: Vec<bool>,
    cpu: &'a mut PpcCpu,
    mem: &'a mut GuestMem,
}

impl Env<'_> {
    fn get(&self, idx: TempIdx) -> Result<u64, Error> {
        if !self.init[idx.0 as usize] {
            return Err(Error::UninitializedTemp(idx.0));
        }
        Ok(self.vals[idx.0 as usize])
    }

    fn set(&mut self, idx: TempIdx, val: u64) {
        self.vals[idx.0 as usize] = val;
        self.init[idx.0 as usize] = true;
    }
}

/// Execute the ops of `ir` against `cpu` and `mem`, returning the
/// `ExitTb` code. Globals are materialized from the CPU state up front
/// and written back when the block exits.
pub fn run_block(
    ir: &Context,
    cpu: &mut PpcCpu,
    mem: &mut GuestMem,
) -> Result<u64, Error> {
    let n = ir.nb_temps() as usize;
    let mut env = Env {
        vals: vec![0; n],
        init: vec![false; n],
        cpu,
        mem,
    };

    for t in ir.temps() {
        match t.kind {
            TempKind::Const => env.set(t.idx, t.val),
            TempKind::Global => {
                let v = read_cpu_field(env.cpu, t.mem_offset)?;
                env.set(t.idx, v);
            }
            TempKind::Ebb | TempKind::Tb => {}
        }
    }

    let mut exit_code = 0;
    for op in ir.ops() {
        match op.opc {
            Opcode::Mov => {
                let v = env.get(op.iargs()[0])?;
                env.set(op.oargs()[0], v);
            }
            Opcode::Add => {
                let a = env.get(op.iargs()[0])?;
                let b = env.get(op.iargs()[1])?;
                env.set(op.oargs()[0], a.wrapping_add(b));
            }
            Opcode::F32ToF64 => {
                let s = env.get(op.iargs()[0])?;
                let widened = f32::from_bits(s as u32) as f64;
                env.set(op.oargs()[0], widened.to_bits());
            }
            Opcode::F64ToF32 => {
                let s = env.get(op.iargs()[0])?;
                let narrowed = f64::from_bits(s) as f32;
                env.set(op.oargs()[0], narrowed.to_bits() as u64);
            }
            Opcode::GuestLd => {
                let memop = MemOp::new(op.cargs()[0].0 as u16);
                let addr = env.get(op.iargs()[0])?;
                let len = memop.size_bytes();
                let raw = env.mem.read_be(addr, len)?;
                let v = if memop.is_signed() {
                    sign_extend(raw, len)
                } else {
                    raw
                };
                env.set(op.oargs()[0], v);
                if memop.ordering() == MemOrder::Acquire {
                    env.cpu.reserve = 1;
                    env.cpu.reserve_addr = addr;
                    env.cpu.reserve_len = len as u64;
                }
            }
            Opcode::GuestSt => {
                let memop = MemOp::new(op.cargs()[0].0 as u16);
                let val = env.get(op.iargs()[0])?;
                let addr = env.get(op.iargs()[1])?;
                let len = memop.size_bytes();
                match memop.ordering() {
                    MemOrder::Release => {
                        // A release store only lands inside an active
                        // matching reservation; otherwise it fails
                        // silently. Either way the reservation is gone.
                        let matches = env.cpu.reserve == 1
                            && env.cpu.reserve_addr == addr
                            && env.cpu.reserve_len == len as u64;
                        if matches {
                            env.mem.write_be(addr, len, val)?;
                        }
                        env.cpu.reserve = 0;
                    }
                    _ => env.mem.write_be(addr, len, val)?,
                }
            }
            Opcode::InsnStart => {}
            Opcode::ExitTb => {
                exit_code = op.cargs()[0].0 as u64;
                break;
            }
            Opcode::Count => {}
        }
    }

    for t in ir.globals() {
        let v = env.vals[t.idx.0 as usize];
        write_cpu_field(env.cpu, t.mem_offset, v)?;
    }
    Ok(exit_code)
}
