use crate::types::Type;

/// Lifetime/scope of an IR temporary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TempKind {
    /// Live within a single extended basic block.
    Ebb,
    /// Live across the entire translation block.
    Tb,
    /// Global — persists across blocks, backed by a CPU-state field.
    Global,
    /// Compile-time constant.
    Const,
}

/// Index into the Context's temp pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TempIdx(pub u32);

/// An IR temporary variable.
///
/// Globals carry the byte offset of their backing CPU-state field so that
/// whatever consumes the IR (host backend or evaluator) can bind them.
#[derive(Debug, Clone)]
pub struct Temp {
    pub idx: TempIdx,
    pub ty: Type,
    pub kind: TempKind,

    /// For `Const` temps, the immediate value.
    pub val: u64,
    /// For `Global` temps, the byte offset into the CPU state struct.
    pub mem_offset: i64,
    /// Debug name (e.g. "pc", "gpr").
    pub name: Option<&'static str>,
}

impl Temp {
    pub fn new_ebb(idx: TempIdx, ty: Type) -> Self {
        Self {
            idx,
            ty,
            kind: TempKind::Ebb,
            val: 0,
            mem_offset: 0,
            name: None,
        }
    }

    pub fn new_tb(idx: TempIdx, ty: Type) -> Self {
        let mut t = Self::new_ebb(idx, ty);
        t.kind = TempKind::Tb;
        t
    }

    pub fn new_const(idx: TempIdx, ty: Type, val: u64) -> Self {
        Self {
            idx,
            ty,
            kind: TempKind::Const,
            val,
            mem_offset: 0,
            name: None,
        }
    }

    pub fn new_global(
        idx: TempIdx,
        ty: Type,
        offset: i64,
        name: &'static str,
    ) -> Self {
        Self {
            idx,
            ty,
            kind: TempKind::Global,
            val: 0,
            mem_offset: offset,
            name: Some(name),
        }
    }

    pub fn is_const(&self) -> bool {
        self.kind == TempKind::Const
    }

    pub fn is_global(&self) -> bool {
        self.kind == TempKind::Global
    }
}
