//! Imposition map generation
//!
//! This module calculates the printable ordering of source pages for
//! saddle-stitched signatures.
//!
//! ## Saddle-stitch face order
//!
//! Each sheet contributes four page faces. The front carries the current
//! outermost-remaining high page (left) and innermost-remaining low page
//! (right); the back carries low+1 (left) and high-1 (right). Successive
//! sheets nest from the outside of the signature toward its center:
//!
//! ```text
//! 16-page signature, relative order:
//! [15, 0, 1, 14, 13, 2, 3, 12, 11, 4, 5, 10, 9, 6, 7, 8]
//!  └─ sheet 0 ─┘  └─ sheet 1 ─┘  └─ sheet 2 ─┘ └─ sheet 3 ─┘
//! ```

use crate::constants::PAGES_PER_SHEET;
use crate::types::{ImposeError, PageSlot, Result};

/// The full printable ordering of one document's pages.
///
/// Holds one entry per output slot across every signature, in emission
/// order. Entries `>= page_count` are padding in the final signature; use
/// [`ImpositionMap::slots`] for the tagged view that distinguishes them.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpositionMap {
    indices: Vec<usize>,
    page_count: usize,
    signature_size: usize,
}

impl ImpositionMap {
    /// Raw slot indices in printable order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of real source pages the map was built for
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Pages per signature
    pub fn signature_size(&self) -> usize {
        self.signature_size
    }

    pub fn total_signatures(&self) -> usize {
        self.indices.len() / self.signature_size
    }

    /// Blank pages needed to complete the final signature
    pub fn padding_pages(&self) -> usize {
        self.indices.len() - self.page_count
    }

    /// Iterate over signature-sized blocks in order
    pub fn signatures(&self) -> impl Iterator<Item = &[usize]> {
        self.indices.chunks(self.signature_size)
    }

    /// Tagged slot at `position`, or `None` past the end of the map
    pub fn slot(&self, position: usize) -> Option<PageSlot> {
        self.indices.get(position).map(|&index| self.tag(index))
    }

    /// Iterate over all slots with padding tagged as [`PageSlot::Blank`]
    pub fn slots(&self) -> impl Iterator<Item = PageSlot> + '_ {
        self.indices.iter().map(|&index| self.tag(index))
    }

    fn tag(&self, index: usize) -> PageSlot {
        if index < self.page_count {
            PageSlot::Real(index)
        } else {
            PageSlot::Blank
        }
    }
}

/// Generate the imposition map for a document.
///
/// Returns the zero-based page indices in the order they should appear in
/// the printed output, one signature after another. The last signature may
/// reference indices `>= page_count`; those positions must be filled with
/// blank pages by the assembler and keep their computed place in the
/// sequence. A zero `page_count` yields an empty map.
pub fn generate_imposition_map(page_count: usize, signature_size: usize) -> Result<ImpositionMap> {
    validate_signature_size(signature_size)?;

    let total_signatures = (page_count + signature_size - 1) / signature_size;
    let sheets_per_sig = signature_size / PAGES_PER_SHEET;
    let mut indices = Vec::with_capacity(total_signatures * signature_size);

    for sig in 0..total_signatures {
        let sig_start = sig * signature_size;

        for sheet in 0..sheets_per_sig {
            let low = 2 * sheet;
            let high = signature_size - 1 - 2 * sheet;

            // Front: high left, low right. Back: low+1 left, high-1 right.
            indices.push(sig_start + high);
            indices.push(sig_start + low);
            indices.push(sig_start + low + 1);
            indices.push(sig_start + high - 1);
        }
    }

    Ok(ImpositionMap {
        indices,
        page_count,
        signature_size,
    })
}

/// Check that a signature size is a positive multiple of 4
pub(crate) fn validate_signature_size(signature_size: usize) -> Result<()> {
    if signature_size == 0 || signature_size % 4 != 0 {
        return Err(ImposeError::InvalidArgument(format!(
            "Signature size must be a positive multiple of 4, got {signature_size}"
        )));
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
