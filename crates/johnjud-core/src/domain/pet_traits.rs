//! Closed enumerations describing a pet.
//!
//! Both enums travel as their lowercase string labels, on the wire and in
//! storage. An unrecognized label decodes to `Unspecified` instead of
//! failing, and `Unspecified` encodes back to the empty string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pet gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Male,
    Female,
}

impl Gender {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Decodes a label, mapping anything unknown to `Unspecified`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Unspecified,
        }
    }

    #[must_use]
    pub const fn is_unspecified(&self) -> bool {
        matches!(self, Self::Unspecified)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Adoption status of a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Adopted,
    FindHome,
}

impl PetStatus {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Adopted => "adopted",
            Self::FindHome => "findhome",
        }
    }

    /// Decodes a label, mapping anything unknown to `Unspecified`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "adopted" => Self::Adopted,
            "findhome" => Self::FindHome,
            _ => Self::Unspecified,
        }
    }

    #[must_use]
    pub const fn is_unspecified(&self) -> bool {
        matches!(self, Self::Unspecified)
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
