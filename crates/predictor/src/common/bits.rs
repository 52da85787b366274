//! Bit and index helpers.
//!
//! Pure functions for building masks, sizing tables, and hashing a PC and a
//! history register into a table index. Widths are taken as `i32` so that a
//! negative width is well defined (it produces an empty mask) rather than
//! being rejected at the type level.

/// Width in bits of the PC and history registers.
pub const REG_BITS: i32 = u32::BITS as i32;

/// Returns a mask with the low `bits` bits set.
///
/// Negative widths give `0`; widths of 32 or more give `u32::MAX`.
#[inline]
pub const fn mask_of(bits: i32) -> u32 {
    if bits <= 0 {
        0
    } else if bits >= REG_BITS {
        u32::MAX
    } else {
        (1u32 << bits) - 1
    }
}

/// Returns `2^exp`.
///
/// Negative exponents, and exponents too large for a `u32`, give `0`.
#[inline]
pub const fn pow2(exp: i32) -> u32 {
    if exp < 0 || exp >= REG_BITS {
        0
    } else {
        1u32 << exp
    }
}

/// Hashes a PC and a history register into a table index: `(pc ^ ghr) & mask`.
///
/// Masking after the XOR is the same as XOR-ing the two masked operands,
/// since AND distributes over XOR.
#[inline(always)]
pub const fn index_from(pc: u32, ghr: u32, mask: u32) -> u32 {
    (pc ^ ghr) & mask
}

/// Index derived from the history register alone.
#[inline(always)]
pub const fn index_from_ghr_only(ghr: u32, mask: u32) -> u32 {
    index_from(0, ghr, mask)
}

/// Index derived from the PC alone.
#[inline(always)]
pub const fn index_from_pc_only(pc: u32, mask: u32) -> u32 {
    index_from(pc, 0, mask)
}

/// Shifts `outcome_bit` into a history register and truncates it to `mask`.
#[inline(always)]
pub const fn shift_history(history: u32, outcome_bit: u32, mask: u32) -> u32 {
    ((history << 1) | (outcome_bit & 1)) & mask
}
