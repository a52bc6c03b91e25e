/// IR opcodes emitted by the instruction-semantics layer.
///
/// Integer ops (marked with `OPF_INT` in the definition table) are
/// type-polymorphic over I32/I64; the actual type is carried in
/// `Op::op_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    // -- Data movement / arithmetic --
    Mov = 0,
    Add,

    // -- Float format conversion (bit patterns in integer temps) --
    F32ToF64, // numeric widen: low 32 bits as IEEE single -> double bits
    F64ToF32, // numeric narrow: double bits -> IEEE single bits

    // -- Guest memory access --
    GuestLd,
    GuestSt,

    // -- Structure --
    InsnStart, // marks guest instruction boundary
    ExitTb,    // return from translated block to execution loop

    // Sentinel — must be last
    Count,
}

/// Flags describing properties of an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpFlags(u16);

impl OpFlags {
    pub const NONE: OpFlags = OpFlags(0);
    /// Exits the translation block.
    pub const BB_EXIT: OpFlags = OpFlags(0x01);
    /// Has side effects — cannot be eliminated by DCE.
    pub const SIDE_EFFECTS: OpFlags = OpFlags(0x02);
    /// Operands may be I32 or I64 (type-polymorphic).
    pub const INT: OpFlags = OpFlags(0x04);

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn contains(self, other: OpFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Static definition of an opcode — argument counts and flags.
#[derive(Debug, Clone, Copy)]
pub struct OpDef {
    pub name: &'static str,
    pub nb_oargs: u8,
    pub nb_iargs: u8,
    pub nb_cargs: u8,
    pub flags: OpFlags,
}

impl OpDef {
    pub const fn nb_args(&self) -> u8 {
        self.nb_oargs + self.nb_iargs + self.nb_cargs
    }
}

// Helper to combine flags in const context.
const fn f(a: OpFlags, b: OpFlags) -> OpFlags {
    OpFlags(a.0 | b.0)
}

const INT: OpFlags = OpFlags::INT;
const SE: OpFlags = OpFlags::SIDE_EFFECTS;
const BX: OpFlags = OpFlags::BB_EXIT;
const N: OpFlags = OpFlags::NONE;

/// Static opcode definition table, indexed by `Opcode as usize`.
pub static OPCODE_DEFS: [OpDef; Opcode::Count as usize] = [
    // Mov
    OpDef {
        name: "mov",
        nb_oargs: 1,
        nb_iargs: 1,
        nb_cargs: 0,
        flags: INT,
    },
    // Add
    OpDef {
        name: "add",
        nb_oargs: 1,
        nb_iargs: 2,
        nb_cargs: 0,
        flags: INT,
    },
    // F32ToF64
    OpDef {
        name: "f32_to_f64",
        nb_oargs: 1,
        nb_iargs: 1,
        nb_cargs: 0,
        flags: N,
    },
    // F64ToF32
    OpDef {
        name: "f64_to_f32",
        nb_oargs: 1,
        nb_iargs: 1,
        nb_cargs: 0,
        flags: N,
    },
    // GuestLd
    OpDef {
        name: "guest_ld",
        nb_oargs: 1,
        nb_iargs: 1,
        nb_cargs: 1,
        flags: f(INT, SE),
    },
    // GuestSt
    OpDef {
        name: "guest_st",
        nb_oargs: 0,
        nb_iargs: 2,
        nb_cargs: 1,
        flags: f(INT, SE),
    },
    // InsnStart
    OpDef {
        name: "insn_start",
        nb_oargs: 0,
        nb_iargs: 0,
        nb_cargs: 2,
        flags: SE,
    },
    // ExitTb
    OpDef {
        name: "exit_tb",
        nb_oargs: 0,
        nb_iargs: 0,
        nb_cargs: 1,
        flags: f(SE, BX),
    },
];

impl Opcode {
    /// Look up the static definition for this opcode.
    pub fn def(self) -> &'static OpDef {
        &OPCODE_DEFS[self as usize]
    }

    /// Whether this op's name takes a `_i32`/`_i64` type suffix.
    pub fn is_int_polymorphic(self) -> bool {
        self.def().flags.contains(OpFlags::INT)
    }
}
