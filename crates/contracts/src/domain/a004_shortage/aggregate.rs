use crate::domain::common::{AggregateRoot, BaseAggregate};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Unique shortage id
    ShortageId
);

/// Stock-out of one lens specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shortage {
    #[serde(flatten)]
    pub base: BaseAggregate<ShortageId>,

    /// Refractive index of the material (e.g. "1.56")
    pub index: String,

    /// Sphere and cylinder as typed on the form (e.g. "+2.00 -1.00")
    #[serde(rename = "esfCil")]
    pub esf_cil: String,

    /// Name of the user who registered the shortage
    pub user: String,

    /// Coating (e.g. "HMC", "Blue Cut")
    pub treatment: String,

    pub company: String,

    /// Human label of when it was registered ("Now", "1 hour ago")
    pub time: String,

    pub quantity: u32,

    /// Lens design (e.g. "Single Vision", "Multifocal")
    #[serde(rename = "type")]
    pub lens_type: String,
}

impl Shortage {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        index: String,
        esf_cil: String,
        user: String,
        treatment: String,
        company: String,
        time: String,
        quantity: u32,
        lens_type: String,
    ) -> Self {
        let description = format!("{} {} {}", index, esf_cil, treatment);
        Self {
            base: BaseAggregate::new(ShortageId::new_v4(), code, description),
            index,
            esf_cil,
            user,
            treatment,
            company,
            time,
            quantity,
            lens_type,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.index.trim().is_empty() {
            return Err("Refractive index cannot be empty".into());
        }
        if self.quantity == 0 {
            return Err("Quantity must be at least 1".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Shortage {
    type Id = ShortageId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "shortage"
    }

    fn element_name() -> &'static str {
        "Shortage"
    }
}

/// Raw content of the shortage registration form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortageFormData {
    /// Refractive index
    pub material: String,
    #[serde(rename = "lensType")]
    pub lens_type: String,
    /// Treatment
    pub coating: String,
    pub sphere: String,
    pub cylinder: String,
    pub quantity: u32,
}

impl Default for ShortageFormData {
    fn default() -> Self {
        Self {
            material: "1.56".into(),
            lens_type: "Single Vision".into(),
            coating: "HMC".into(),
            sphere: String::new(),
            cylinder: String::new(),
            quantity: 1,
        }
    }
}

/// Refractive indices offered on the form
pub const REFRACTIVE_INDICES: &[&str] = &["1.49", "1.56", "1.59", "1.60", "1.67", "1.74"];

/// Treatments offered on the form
pub const TREATMENTS: &[&str] = &["Incolor", "HMC", "Blue Cut", "Photo", "AR Premium"];

/// Lens designs offered on the form
pub const LENS_TYPES: &[&str] = &["Single Vision", "Multifocal", "Bifocal"];
