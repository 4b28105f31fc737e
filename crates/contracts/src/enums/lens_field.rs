use serde::{Deserialize, Serialize};

/// Lens power field edited on the shortage form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LensField {
    /// Spherical power (ESF)
    Sphere,
    /// Cylindrical power (CIL)
    Cylinder,
}

impl LensField {
    /// Short label used on lens prescriptions
    pub fn display_name(&self) -> &'static str {
        match self {
            LensField::Sphere => "ESF",
            LensField::Cylinder => "CIL",
        }
    }
}

impl std::fmt::Display for LensField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
