use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// One output position in an imposed sequence.
///
/// The final signature of a document is padded out to the full signature
/// size; those positions carry no source content and are tagged [`Blank`]
/// so downstream assembly never has to compare raw indices against the
/// page count.
///
/// [`Blank`]: PageSlot::Blank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    /// A real source page at the given zero-based index
    Real(usize),
    /// A blank filler page completing the signature
    Blank,
}

impl PageSlot {
    /// Source page index, or `None` for a blank filler
    pub fn source_index(self) -> Option<usize> {
        match self {
            PageSlot::Real(index) => Some(index),
            PageSlot::Blank => None,
        }
    }

    pub fn is_blank(self) -> bool {
        matches!(self, PageSlot::Blank)
    }
}

/// A candidate way to split imposed output into files
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchConfig {
    /// Signatures written to each output file
    pub signatures_per_batch: usize,
    /// Human-readable summary; only the numeric field above is
    /// semantically significant
    pub description: String,
}

/// Statistics about an imposition
#[derive(Debug, Clone, PartialEq)]
pub struct ImpositionStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Number of signatures
    pub signatures: usize,
    /// Total number of physical sheets
    pub output_sheets: usize,
    /// Printed faces (front and back of each sheet)
    pub output_pages: usize,
    /// Number of blank pages added for padding
    pub blank_pages_added: usize,
}
