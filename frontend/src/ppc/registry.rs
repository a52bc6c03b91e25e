//! Opcode registry — the static match-value → emitter table.
//!
//! Each concrete instruction encoding registers exactly one entry keyed
//! by its full 32-bit match pattern (primary + extended opcode bits
//! already disambiguated). Dispatch masks the fetched word down to its
//! match value and does an exact lookup; no pattern matching happens at
//! the table level.

use std::collections::HashMap;
use std::sync::OnceLock;

use ppcjit_core::Context;
use thiserror::Error;

use super::insn::{DecodedInstr, EmitError, InstrFormat};
use super::mem::MEMORY_INSTRS;
use super::PpcDisasContext;

/// Emitter function: translates one decoded instruction into IR side
/// effects on the context, or declines with an error.
pub type EmitFn =
    fn(&mut PpcDisasContext, &mut Context, &DecodedInstr) -> Result<(), EmitError>;

/// One registry entry: a concrete instruction encoding.
pub struct InstrEntry {
    pub mnemonic: &'static str,
    /// Full 32-bit match pattern (primary + extended opcode bits).
    pub match_value: u32,
    /// Field layout the decoder must apply to matching words.
    pub format: InstrFormat,
    pub emit: EmitFn,
}

/// Registry construction errors — configuration bugs caught at startup,
/// never at translation time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate registration for match value {match_value:#010x}: {mnemonic} vs {other}")]
    DuplicateMatchValue {
        mnemonic: &'static str,
        other: &'static str,
        match_value: u32,
    },
}

/// Immutable opcode table. Built once during initialization; safe for
/// unsynchronized concurrent reads afterwards.
pub struct OpcodeTable {
    map: HashMap<u32, &'static InstrEntry>,
}

impl OpcodeTable {
    /// Build a table from a static entry list, rejecting duplicate match
    /// values.
    pub fn build(entries: &'static [InstrEntry]) -> Result<Self, RegistryError> {
        let mut map: HashMap<u32, &'static InstrEntry> =
            HashMap::with_capacity(entries.len());
        for entry in entries {
            if let Some(prev) = map.insert(entry.match_value, entry) {
                return Err(RegistryError::DuplicateMatchValue {
                    mnemonic: entry.mnemonic,
                    other: prev.mnemonic,
                    match_value: entry.match_value,
                });
            }
        }
        Ok(Self { map })
    }

    /// Exact-match lookup by decoded match value.
    pub fn lookup(&self, match_value: u32) -> Option<&'static InstrEntry> {
        self.map.get(&match_value).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Reduce a raw instruction word to its registry match value.
///
/// This is the decode-time masking step: keep the bits that identify the
/// encoding, drop the operand fields. Primary opcodes 19 and 31 carry an
/// extended opcode (and record bit) in the low 11 bits; 58 and 62 carry a
/// 2-bit sub-opcode in the low 2 bits; everything else is identified by
/// the primary opcode alone.
pub fn match_value(word: u32) -> u32 {
    match word >> 26 {
        19 | 31 => word & 0xfc00_07ff,
        58 | 62 => word & 0xfc00_0003,
        _ => word & 0xfc00_0000,
    }
}

/// The process-wide memory-category opcode table.
///
/// Built on first use and immutable afterwards. A duplicate registration
/// in `MEMORY_INSTRS` is a build-time configuration bug, so it aborts
/// initialization.
pub fn memory_table() -> &'static OpcodeTable {
    static TABLE: OnceLock<OpcodeTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        let table = OpcodeTable::build(MEMORY_INSTRS)
            .expect("memory opcode table is statically malformed");
        log::debug!(
            "memory opcode table initialized: {} entries",
            table.len()
        );
        table
    })
}
