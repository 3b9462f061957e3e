//! PermitCategory value object.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Driving permit categories the school offers courses for.
///
/// `B` is the default selection on the contact form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermitCategory {
    /// Permiso B (coche)
    #[default]
    B,
    /// Permiso A (moto)
    A,
    /// Permiso C (camión)
    C,
    /// Permiso D (autobús)
    D,
    /// Otros permisos o servicios
    Otros,
}

impl PermitCategory {
    /// All known categories, in form display order.
    pub const ALL: [PermitCategory; 5] = [
        PermitCategory::B,
        PermitCategory::A,
        PermitCategory::C,
        PermitCategory::D,
        PermitCategory::Otros,
    ];

    /// Wire/form value for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            PermitCategory::B => "B",
            PermitCategory::A => "A",
            PermitCategory::C => "C",
            PermitCategory::D => "D",
            PermitCategory::Otros => "Otros",
        }
    }

    /// Human-readable label shown in the form's select control.
    pub fn label(&self) -> &'static str {
        match self {
            PermitCategory::B => "Permiso B (Coche)",
            PermitCategory::A => "Permiso A (Moto)",
            PermitCategory::C => "Permiso C (Camión)",
            PermitCategory::D => "Permiso D (Autobús)",
            PermitCategory::Otros => "Otros permisos/servicios",
        }
    }
}

impl FromStr for PermitCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" => Ok(PermitCategory::B),
            "A" => Ok(PermitCategory::A),
            "C" => Ok(PermitCategory::C),
            "D" => Ok(PermitCategory::D),
            "Otros" => Ok(PermitCategory::Otros),
            other => Err(ValidationError::UnknownPermit(other.to_string())),
        }
    }
}

impl fmt::Display for PermitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
