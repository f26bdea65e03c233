use crate::error::{BonError, Result};
use std::fmt;
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Record layout variant of a BON track log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LayoutVariant {
    /// No course field; sentences carry an empty course
    #[default]
    Bon1,
    /// Course derived from the previous point
    Bon4,
}

impl LayoutVariant {
    /// Select a layout from a file extension (case-insensitive).
    ///
    /// Any extension starting with `BON` is accepted. `BON4` selects
    /// [`LayoutVariant::Bon4`]; every other member of the family, including
    /// `BON3`, decodes as [`LayoutVariant::Bon1`].
    pub fn from_extension(ext: &str) -> Result<Self> {
        let ext_upper = ext.to_ascii_uppercase();
        if !ext_upper.starts_with("BON") {
            return Err(BonError::UnsupportedExtension(ext.to_string()));
        }
        if ext_upper == "BON4" {
            Ok(LayoutVariant::Bon4)
        } else {
            Ok(LayoutVariant::Bon1)
        }
    }

    /// Select a layout from the extension of `path`
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| BonError::MissingExtension(path.to_path_buf()))?;
        Self::from_extension(ext)
    }

    /// Whether sentences produced with this layout carry a course field
    pub fn has_course(self) -> bool {
        matches!(self, LayoutVariant::Bon4)
    }
}

impl fmt::Display for LayoutVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutVariant::Bon1 => write!(f, "BON1"),
            LayoutVariant::Bon4 => write!(f, "BON4"),
        }
    }
}
