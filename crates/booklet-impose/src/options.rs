use crate::constants::{BATCH_TARGET_PAGES, FLYLEAF_PAGES};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet imposition configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BookletOptions {
    /// Pages per signature; must be a positive multiple of 4
    pub signature_size: usize,

    /// Wrap the covers around blank flyleaves: one blank behind the front
    /// cover and one before the back cover
    pub separate_cover_flyleaf: bool,

    /// Signatures per output file; `None` keeps everything in one file
    pub signatures_per_batch: Option<usize>,

    /// Pages-per-file target used when proposing batch configurations
    pub batch_target_pages: usize,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            signature_size: 16,
            separate_cover_flyleaf: false,
            signatures_per_batch: None,
            batch_target_pages: BATCH_TARGET_PAGES,
        }
    }
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.signature_size == 0 || self.signature_size % 4 != 0 {
            return Err(ImposeError::Config(
                "Signature size must be a positive multiple of 4".to_string(),
            ));
        }

        if self.batch_target_pages == 0 {
            return Err(ImposeError::Config(
                "Batch target must be at least one page".to_string(),
            ));
        }

        Ok(())
    }

    /// Page count after the optional cover flyleaves are accounted for.
    ///
    /// Documents shorter than two pages have no covers to wrap, so they
    /// stay unchanged regardless of the flag.
    pub fn effective_page_count(&self, source_pages: usize) -> usize {
        if self.separate_cover_flyleaf && source_pages >= 2 {
            source_pages + FLYLEAF_PAGES
        } else {
            source_pages
        }
    }
}
