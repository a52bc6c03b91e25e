//! Decoded instruction records.
//!
//! A 32-bit instruction word decodes into a tagged record: one of a small
//! fixed set of field layouts, selected by the opcode registry entry that
//! matched the word. Emitters pattern-match on the tag they expect and
//! report a mismatch as an error rather than reading mislabeled bits.

use thiserror::Error;

/// Fixed bit layouts used by the memory-access category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstrFormat {
    /// Fixed 16-bit displacement.
    D,
    /// Fixed displacement, low two bits repurposed as a sub-opcode;
    /// the remaining 14 bits are shifted left 2 before sign extension.
    Ds,
    /// Register-indexed.
    X,
    /// Indexed-link (condition-register form).
    Xl,
}

/// D-form fields: `op rt, d(ra)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgsD {
    /// Target register for loads, source register for stores.
    pub rt: u8,
    /// Base register; 0 means "use constant zero" in non-update forms.
    pub ra: u8,
    /// Sign-extended 16-bit displacement.
    pub d: i16,
}

/// DS-form fields: `op rt, ds(ra)` with the displacement's low two bits
/// cleared in the encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgsDs {
    pub rt: u8,
    pub ra: u8,
    /// Displacement after the implicit `<< 2`, sign-extended from 16 bits.
    pub ds: i16,
}

/// X-form fields: `op rt, ra, rb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgsX {
    pub rt: u8,
    pub ra: u8,
    pub rb: u8,
}

/// XL-form fields (condition-register operands).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgsXl {
    pub bt: u8,
    pub ba: u8,
    pub bb: u8,
}

/// Format-specific view over the instruction word's operand bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrFields {
    D(ArgsD),
    Ds(ArgsDs),
    X(ArgsX),
    Xl(ArgsXl),
}

impl InstrFields {
    pub fn format(&self) -> InstrFormat {
        match self {
            InstrFields::D(_) => InstrFormat::D,
            InstrFields::Ds(_) => InstrFormat::Ds,
            InstrFields::X(_) => InstrFormat::X,
            InstrFields::Xl(_) => InstrFormat::Xl,
        }
    }
}

/// Why an emitter declined to translate an instruction.
///
/// Both variants are fatal to the current translation unit only; the
/// dispatch loop aborts the block and nothing already emitted survives.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EmitError {
    /// The encoding is recognized but its semantics are not implemented.
    #[error("instruction semantics not implemented")]
    NotImplemented,
    /// The record's field layout does not match the format this emitter
    /// is registered for — a decoder/registry bug, not a guest condition.
    #[error("decoded record is {found:?}-form, emitter expects {expected:?}-form")]
    FormatMismatch {
        expected: InstrFormat,
        found: InstrFormat,
    },
}

/// One decoded guest instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedInstr {
    /// Guest address the word was fetched from.
    pub address: u64,
    /// Raw instruction word.
    pub word: u32,
    /// Tagged operand fields.
    pub fields: InstrFields,
}

impl DecodedInstr {
    /// Expect a D-form record.
    pub fn d(&self) -> Result<&ArgsD, EmitError> {
        match &self.fields {
            InstrFields::D(a) => Ok(a),
            f => Err(EmitError::FormatMismatch {
                expected: InstrFormat::D,
                found: f.format(),
            }),
        }
    }

    /// Expect a DS-form record.
    pub fn ds(&self) -> Result<&ArgsDs, EmitError> {
        match &self.fields {
            InstrFields::Ds(a) => Ok(a),
            f => Err(EmitError::FormatMismatch {
                expected: InstrFormat::Ds,
                found: f.format(),
            }),
        }
    }

    /// Expect an X-form record.
    pub fn x(&self) -> Result<&ArgsX, EmitError> {
        match &self.fields {
            InstrFields::X(a) => Ok(a),
            f => Err(EmitError::FormatMismatch {
                expected: InstrFormat::X,
                found: f.format(),
            }),
        }
    }

    /// Expect an XL-form record.
    pub fn xl(&self) -> Result<&ArgsXl, EmitError> {
        match &self.fields {
            InstrFields::Xl(a) => Ok(a),
            f => Err(EmitError::FormatMismatch {
                expected: InstrFormat::Xl,
                found: f.format(),
            }),
        }
    }
}

// Operand field slices, numbered from the most significant bit end as the
// architecture books do: rt = bits 6-10, ra = 11-15, rb = 16-20.
fn rt(word: u32) -> u8 {
    ((word >> 21) & 0x1f) as u8
}
fn ra(word: u32) -> u8 {
    ((word >> 16) & 0x1f) as u8
}
fn rb(word: u32) -> u8 {
    ((word >> 11) & 0x1f) as u8
}

/// Slice `word` into the named fields of `format`.
///
/// The registry entry supplies the format, so a record produced here
/// always carries the tag its opcode implies.
pub fn decode(address: u64, word: u32, format: InstrFormat) -> DecodedInstr {
    let fields = match format {
        InstrFormat::D => InstrFields::D(ArgsD {
            rt: rt(word),
            ra: ra(word),
            d: word as u16 as i16,
        }),
        InstrFormat::Ds => InstrFields::Ds(ArgsDs {
            rt: rt(word),
            ra: ra(word),
            // Low two bits are the sub-opcode, not displacement.
            ds: (word as u16 & 0xfffc) as i16,
        }),
        InstrFormat::X => InstrFields::X(ArgsX {
            rt: rt(word),
            ra: ra(word),
            rb: rb(word),
        }),
        InstrFormat::Xl => InstrFields::Xl(ArgsXl {
            bt: rt(word),
            ba: ra(word),
            bb: rb(word),
        }),
    };
    DecodedInstr {
        address,
        word,
        fields,
    }
}
