//! Bit-layout resolution for a single block.
//!
//! Fields are declared most significant first, but hardware numbers bits from the least
//! significant end. Resolution therefore runs in two steps: a forward scan that stamps each field
//! with the running bit count *after* its own bits, and an inversion that turns each stamp into an
//! offset from bit zero once the block's total width is known.

use std::ops::Range;

use crate::ast::{Block, Field};
use crate::error::{Error, Result};

/// Width of one backing word.
pub const WORD_BITS: u32 = 64;

/// A mask covering the low `width` bits of a word.
pub fn lsb_mask(width: u32) -> u64 {
    if width >= WORD_BITS {
        u64::MAX
    } else {
        (1 << width) - 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Plain,
    /// Shares its word with the fields declared after it; read and written in place, low bits
    /// masked off.
    High,
}

/// A field placed within its block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedField<'a> {
    pub name: &'a str,
    pub kind: FieldKind,
    pub declared_bits: u32,
    /// Offset of the field's lowest stored bit from bit zero of the block.
    pub bit_offset: u32,
    pub word_index: usize,
    /// Right shift applied by the accessor. Always zero for [`FieldKind::High`].
    pub shift: u32,
    /// Width of the value seen through the accessor.
    pub width: u32,
    /// In-word mask of the stored bits, already shifted into place.
    pub mask: u64,
}

impl<'a> PackedField<'a> {
    /// The block bits this field owns.
    pub fn storage(&self) -> Range<u32> {
        self.bit_offset..self.bit_offset + self.declared_bits
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedBlock<'a> {
    pub words: usize,
    pub fields: Vec<PackedField<'a>>,
}

struct Stamped<'a> {
    name: &'a str,
    kind: FieldKind,
    bits: u32,
    /// Bits consumed up to and including this field.
    marker: u64,
}

/// Places every non-padding field of `block`.
///
/// The running counter lives only in this call; nothing carries over between blocks.
pub fn pack<'a>(block: &Block<'a>) -> Result<PackedBlock<'a>> {
    let (total, stamped) = block.fields.iter().fold(
        (0u64, Vec::with_capacity(block.fields.len())),
        |(consumed, mut stamped), field| {
            let consumed = consumed + u64::from(field.bits());
            let kind = match *field {
                Field::Field { .. } => Some(FieldKind::Plain),
                Field::FieldHigh { .. } => Some(FieldKind::High),
                Field::Padding { .. } => None,
            };
            if let (Some(kind), Some(name)) = (kind, field.name()) {
                stamped.push(Stamped {
                    name,
                    kind,
                    bits: field.bits(),
                    marker: consumed,
                });
            }
            (consumed, stamped)
        },
    );

    if total % u64::from(WORD_BITS) != 0 {
        return Err(Error::BlockSize {
            block: block.name.to_string(),
            bits: total,
        });
    }

    let fields = stamped
        .into_iter()
        .map(|stamped| place(block.name, total, stamped))
        .collect::<Result<Vec<_>>>()?;
    Ok(PackedBlock {
        words: (total / u64::from(WORD_BITS)) as usize,
        fields,
    })
}

fn place<'a>(block: &str, total: u64, stamped: Stamped<'a>) -> Result<PackedField<'a>> {
    let Stamped {
        name,
        kind,
        bits,
        marker,
    } = stamped;
    if bits == 0 {
        return Err(Error::ZeroWidth {
            block: block.to_string(),
            field: name.to_string(),
        });
    }

    let bit_offset = total - marker;
    let word_index = (bit_offset / u64::from(WORD_BITS)) as usize;
    let local_shift = (bit_offset % u64::from(WORD_BITS)) as u32;
    let bit_offset = u32::try_from(bit_offset).map_err(|_| Error::BlockSize {
        block: block.to_string(),
        bits: total,
    })?;

    let (shift, width, mask) = match kind {
        FieldKind::Plain => {
            if u64::from(local_shift) + u64::from(bits) > u64::from(WORD_BITS) {
                return Err(Error::FieldCrossesWord {
                    block: block.to_string(),
                    field: name.to_string(),
                    shift: local_shift,
                    bits,
                });
            }
            (local_shift, bits, lsb_mask(bits) << local_shift)
        }
        FieldKind::High => {
            let high = local_shift.saturating_add(bits);
            if high > WORD_BITS {
                return Err(Error::FieldHighOverflow {
                    block: block.to_string(),
                    field: name.to_string(),
                    high,
                });
            }
            (0, high, lsb_mask(high) - lsb_mask(local_shift))
        }
    };

    Ok(PackedField {
        name,
        kind,
        declared_bits: bits,
        bit_offset,
        word_index,
        shift,
        width,
        mask,
    })
}
