//! PowerPC64 frontend — memory-access instruction translation.

pub mod cpu;
pub mod insn;
pub mod mem;
pub mod registry;

use thiserror::Error;

use crate::{DisasContextBase, DisasJumpType, TranslatorOps};
use ppcjit_core::{Context, TempIdx, Type};
use self::cpu::{
    cr_offset, fpr_offset, gpr_offset, NUM_CR_FIELDS, NUM_FPRS, NUM_GPRS,
    PC_OFFSET,
};
use self::insn::EmitError;

// ---------------------------------------------------------------
// Translation errors
// ---------------------------------------------------------------

/// Why a block could not be translated past a given instruction.
///
/// Fatal to the current translation unit only: the caller must mark the
/// block untranslatable and discard the IR context — partially emitted
/// IR must never execute.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TranslateError {
    /// No registry entry matches the decoded word.
    #[error("unknown opcode {word:#010x} at {address:#x}")]
    UnknownOpcode { address: u64, word: u32 },
    /// A registered emitter declined the instruction.
    #[error("{mnemonic} at {address:#x}: {source}")]
    Emit {
        address: u64,
        mnemonic: &'static str,
        source: EmitError,
    },
}

// ---------------------------------------------------------------
// Disassembly context
// ---------------------------------------------------------------

/// PowerPC disassembly context (extends `DisasContextBase`).
pub struct PpcDisasContext {
    /// Generic base fields (pc, is_jmp, counters).
    pub base: DisasContextBase,
    /// IR temps for guest GPRs r0-r31 (globals).
    pub gpr: [TempIdx; NUM_GPRS],
    /// IR temps for guest FPRs f0-f31 (globals, raw double bits).
    pub fpr: [TempIdx; NUM_FPRS],
    /// IR temps for condition fields cr0-cr7 (globals).
    pub cr: [TempIdx; NUM_CR_FIELDS],
    /// IR temp for the guest PC (global).
    pub pc: TempIdx,
    /// Pointer to guest code bytes for fetching.
    pub guest_base: *const u8,
}

impl PpcDisasContext {
    /// Create a new context for translating a block starting at `pc`.
    /// `guest_base` points to the host mapping of guest code memory.
    pub fn new(pc: u64, guest_base: *const u8) -> Self {
        Self {
            base: DisasContextBase {
                pc_first: pc,
                pc_next: pc,
                is_jmp: DisasJumpType::Next,
                num_insns: 0,
                max_insns: 512,
            },
            gpr: [TempIdx(0); NUM_GPRS],
            fpr: [TempIdx(0); NUM_FPRS],
            cr: [TempIdx(0); NUM_CR_FIELDS],
            pc: TempIdx(0),
            guest_base,
        }
    }

    /// Fetch the 32-bit big-endian instruction word at the current PC.
    ///
    /// # Safety
    /// `guest_base + pc_next` must be a valid, readable 4-byte host
    /// address.
    unsafe fn fetch_insn32(&self) -> u32 {
        let ptr = self.guest_base.add(self.base.pc_next as usize) as *const u32;
        u32::from_be(ptr.read_unaligned())
    }

    // -- Register file access ------------------------------

    /// IR temp of GPR `idx`.
    pub fn gpr_value(&self, idx: u8) -> TempIdx {
        self.gpr[idx as usize]
    }

    /// IR temp of FPR `idx` (raw double bits).
    pub fn fpr_value(&self, idx: u8) -> TempIdx {
        self.fpr[idx as usize]
    }

    /// Write `val` into GPR `rd`. Unlike some guests there is no
    /// discarded register: r0 is writable like any other.
    pub fn set_gpr(&self, ir: &mut Context, rd: u8, val: TempIdx) {
        ir.gen_mov(Type::I64, self.gpr[rd as usize], val);
    }

    /// Write `val` into FPR `rd`.
    pub fn set_fpr(&self, ir: &mut Context, rd: u8, val: TempIdx) {
        ir.gen_mov(Type::I64, self.fpr[rd as usize], val);
    }

    /// Set condition field `field` to the 4-bit pattern `bits`.
    pub fn set_cr_field(&self, ir: &mut Context, field: u8, bits: u64) {
        let c = ir.new_const(Type::I64, bits);
        ir.gen_mov(Type::I64, self.cr[field as usize], c);
    }
}

// ---------------------------------------------------------------
// TranslatorOps implementation
// ---------------------------------------------------------------

/// Marker type for the PowerPC translator.
pub struct PpcTranslator;

impl TranslatorOps for PpcTranslator {
    type DisasContext = PpcDisasContext;
    type Error = TranslateError;

    fn init_disas_context(ctx: &mut PpcDisasContext, ir: &mut Context) {
        // Register guest register files as globals at known offsets.
        for i in 0..NUM_GPRS {
            ctx.gpr[i] = ir.new_global(Type::I64, gpr_offset(i), "gpr");
        }
        for i in 0..NUM_FPRS {
            ctx.fpr[i] = ir.new_global(Type::I64, fpr_offset(i), "fpr");
        }
        for i in 0..NUM_CR_FIELDS {
            ctx.cr[i] = ir.new_global(Type::I64, cr_offset(i), "cr");
        }
        ctx.pc = ir.new_global(Type::I64, PC_OFFSET, "pc");
    }

    fn insn_start(ctx: &mut PpcDisasContext, ir: &mut Context) {
        ir.gen_insn_start(ctx.base.pc_next);
        ctx.base.num_insns += 1;
    }

    fn translate_insn(
        ctx: &mut PpcDisasContext,
        ir: &mut Context,
    ) -> Result<(), TranslateError> {
        let address = ctx.base.pc_next;
        let word = unsafe { ctx.fetch_insn32() };

        let entry = registry::memory_table()
            .lookup(registry::match_value(word))
            .ok_or_else(|| {
                log::warn!("unknown opcode {word:#010x} at {address:#x}");
                TranslateError::UnknownOpcode { address, word }
            })?;

        let rec = insn::decode(address, word, entry.format);
        (entry.emit)(ctx, ir, &rec).map_err(|source| {
            log::warn!("{} at {address:#x}: {source}", entry.mnemonic);
            TranslateError::Emit {
                address,
                mnemonic: entry.mnemonic,
                source,
            }
        })?;

        ctx.base.pc_next += 4;
        Ok(())
    }

    fn tb_stop(ctx: &mut PpcDisasContext, ir: &mut Context) {
        match ctx.base.is_jmp {
            DisasJumpType::NoReturn => {
                // Block already terminated by the instruction.
            }
            DisasJumpType::Next | DisasJumpType::TooMany => {
                // Fall through: update PC and exit.
                let pc_val = ctx.base.pc_next;
                let pc_const = ir.new_const(Type::I64, pc_val);
                ir.gen_mov(Type::I64, ctx.pc, pc_const);
                ir.gen_exit_tb(0);
            }
        }
    }

    fn base(ctx: &PpcDisasContext) -> &DisasContextBase {
        &ctx.base
    }

    fn base_mut(ctx: &mut PpcDisasContext) -> &mut DisasContextBase {
        &mut ctx.base
    }
}
