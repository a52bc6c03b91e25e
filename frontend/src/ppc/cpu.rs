//! PowerPC64 CPU state for the translation layer.

/// Number of general-purpose registers (r0-r31).
pub const NUM_GPRS: usize = 32;
/// Number of floating-point registers (f0-f31).
pub const NUM_FPRS: usize = 32;
/// Number of condition-register fields (cr0-cr7).
pub const NUM_CR_FIELDS: usize = 8;

// Bits of one 4-bit condition field.
pub const CR_LT: u64 = 0b1000;
pub const CR_GT: u64 = 0b0100;
pub const CR_EQ: u64 = 0b0010;
pub const CR_SO: u64 = 0b0001;

/// PowerPC64 architectural state.
///
/// Layout must be `#[repr(C)]` so that IR global temps can reference
/// fields at fixed byte offsets.
///
/// r0 is an ordinary, independently writable register. The "base register
/// 0 reads as zero" rule of D/DS/X-form addressing is applied by the
/// effective-address helpers in the frontend, never by this struct.
#[repr(C)]
pub struct PpcCpu {
    /// General-purpose registers r0-r31.
    pub gpr: [u64; NUM_GPRS],
    /// Floating-point registers f0-f31 (raw IEEE-double bits).
    pub fpr: [u64; NUM_FPRS],
    /// Condition fields cr0-cr7; only the low 4 bits of each are used
    /// (LT, GT, EQ, SO from high to low).
    pub cr: [u64; NUM_CR_FIELDS],
    /// Program counter.
    pub pc: u64,
    /// Reservation held flag (0 or 1).
    pub reserve: u64,
    /// Reserved address (valid while `reserve` is set).
    pub reserve_addr: u64,
    /// Reserved length in bytes (valid while `reserve` is set).
    pub reserve_len: u64,
}

// Field offsets (bytes) from the start of PpcCpu.
// Used by `Context::new_global()` to bind IR temps.

/// Byte offset of `gpr[i]`: `i * 8`.
pub const fn gpr_offset(i: usize) -> i64 {
    (i * 8) as i64
}

/// Byte offset of `fpr[i]`: `NUM_GPRS*8 + i*8`.
pub const fn fpr_offset(i: usize) -> i64 {
    ((NUM_GPRS + i) * 8) as i64
}

/// Byte offset of `cr[i]`.
pub const fn cr_offset(i: usize) -> i64 {
    ((NUM_GPRS + NUM_FPRS + i) * 8) as i64
}

/// Byte offset of the `pc` field.
pub const PC_OFFSET: i64 = ((NUM_GPRS + NUM_FPRS + NUM_CR_FIELDS) * 8) as i64; // 576

/// Byte offset of the `reserve` field.
pub const RESERVE_OFFSET: i64 = PC_OFFSET + 8; // 584

/// Byte offset of the `reserve_addr` field.
pub const RESERVE_ADDR_OFFSET: i64 = RESERVE_OFFSET + 8; // 592

/// Byte offset of the `reserve_len` field.
pub const RESERVE_LEN_OFFSET: i64 = RESERVE_ADDR_OFFSET + 8; // 600

impl PpcCpu {
    pub fn new() -> Self {
        Self {
            gpr: [0u64; NUM_GPRS],
            fpr: [0u64; NUM_FPRS],
            cr: [0u64; NUM_CR_FIELDS],
            pc: 0,
            reserve: 0,
            reserve_addr: 0,
            reserve_len: 0,
        }
    }
}

impl Default for PpcCpu {
    fn default() -> Self {
        Self::new()
    }
}
