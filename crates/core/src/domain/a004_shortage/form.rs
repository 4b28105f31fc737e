//! Editing state of the shortage registration form

use contracts::domain::a004_shortage::aggregate::{ShortageFormData, REFRACTIVE_INDICES};
use contracts::enums::lens_field::LensField;

use crate::shared::lens::{normalize_cylinder, normalize_sphere, LensInputError};

/// Text of one lens power input plus its error flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LensFieldState {
    pub field: LensField,
    pub value: String,
    pub error: bool,
}

impl LensFieldState {
    pub fn new(field: LensField) -> Self {
        Self {
            field,
            value: String::new(),
            error: false,
        }
    }

    /// Store the typed text and drop any previous error
    pub fn on_change(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.error = false;
    }

    /// Normalize the typed text in place
    ///
    /// Sphere input that cannot be read is left alone without an error.
    /// Cylinder input is flagged instead.
    pub fn on_blur(&mut self) -> Result<(), LensInputError> {
        if self.value.is_empty() {
            return Ok(());
        }
        match self.field {
            LensField::Sphere => {
                if let Some(normalized) = normalize_sphere(&self.value) {
                    self.value = normalized;
                    self.error = false;
                }
                Ok(())
            }
            LensField::Cylinder => match normalize_cylinder(&self.value) {
                Ok(normalized) => {
                    self.value = normalized;
                    self.error = false;
                    Ok(())
                }
                Err(e) => {
                    tracing::debug!("{} input '{}' flagged: {}", self.field, self.value, e);
                    self.error = true;
                    Err(e)
                }
            },
        }
    }

    fn reset(&mut self) {
        self.value.clear();
        self.error = false;
    }
}

/// Shortage form with the two normalized power fields
#[derive(Debug, Clone, PartialEq)]
pub struct ShortageForm {
    pub material: String,
    pub lens_type: String,
    pub coating: String,
    pub quantity: u32,
    pub sphere: LensFieldState,
    pub cylinder: LensFieldState,
}

impl Default for ShortageForm {
    fn default() -> Self {
        Self::from(ShortageFormData::default())
    }
}

impl From<ShortageFormData> for ShortageForm {
    fn from(data: ShortageFormData) -> Self {
        let mut sphere = LensFieldState::new(LensField::Sphere);
        sphere.value = data.sphere;
        let mut cylinder = LensFieldState::new(LensField::Cylinder);
        cylinder.value = data.cylinder;
        Self {
            material: data.material,
            lens_type: data.lens_type,
            coating: data.coating,
            quantity: data.quantity,
            sphere,
            cylinder,
        }
    }
}

impl ShortageForm {
    pub fn field_mut(&mut self, field: LensField) -> &mut LensFieldState {
        match field {
            LensField::Sphere => &mut self.sphere,
            LensField::Cylinder => &mut self.cylinder,
        }
    }

    pub fn change(&mut self, field: LensField, value: impl Into<String>) {
        self.field_mut(field).on_change(value);
    }

    pub fn blur(&mut self, field: LensField) -> Result<(), LensInputError> {
        self.field_mut(field).on_blur()
    }

    /// Submission is refused while the cylinder is flagged
    pub fn can_submit(&self) -> bool {
        !self.cylinder.error
    }

    /// `"{sphere} {cylinder}"` as stored on the shortage
    pub fn esf_cil(&self) -> String {
        format!("{} {}", self.sphere.value, self.cylinder.value)
    }

    /// Snapshot of the current values
    pub fn data(&self) -> ShortageFormData {
        ShortageFormData {
            material: self.material.clone(),
            lens_type: self.lens_type.clone(),
            coating: self.coating.clone(),
            sphere: self.sphere.value.clone(),
            cylinder: self.cylinder.value.clone(),
            quantity: self.quantity,
        }
    }

    /// State after a successful registration; selections are kept
    pub fn reset_after_submit(&mut self) {
        self.sphere.value.clear();
        self.cylinder.value.clear();
        self.quantity = 1;
    }

    /// Clear button: back to the first material with empty powers
    pub fn clear(&mut self) {
        if let Some(first) = REFRACTIVE_INDICES.first() {
            self.material = first.to_string();
        }
        self.sphere.reset();
        self.cylinder.reset();
        self.quantity = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_blur_normalizes() {
        let mut form = ShortageForm::default();
        form.change(LensField::Sphere, "200");
        assert!(form.blur(LensField::Sphere).is_ok());
        assert_eq!(form.sphere.value, "+2.00");
        assert!(!form.sphere.error);
    }

    #[test]
    fn test_unreadable_sphere_is_left_as_typed() {
        let mut form = ShortageForm::default();
        form.change(LensField::Sphere, "abc");
        assert!(form.blur(LensField::Sphere).is_ok());
        assert_eq!(form.sphere.value, "abc");
        assert!(!form.sphere.error);
    }

    #[test]
    fn test_off_grid_cylinder_is_flagged() {
        let mut form = ShortageForm::default();
        form.change(LensField::Cylinder, "-1.1");
        assert_eq!(form.blur(LensField::Cylinder), Err(LensInputError::OffGrid));
        assert_eq!(form.cylinder.value, "-1.1");
        assert!(form.cylinder.error);
        assert!(!form.can_submit());

        // Typing again clears the flag until the next blur
        form.change(LensField::Cylinder, "75");
        assert!(form.can_submit());
        form.blur(LensField::Cylinder).unwrap();
        assert_eq!(form.cylinder.value, "-0.75");
    }

    #[test]
    fn test_empty_blur_is_noop() {
        let mut form = ShortageForm::default();
        form.cylinder.error = true;
        assert!(form.blur(LensField::Cylinder).is_ok());
        assert!(form.cylinder.error);
    }

    #[test]
    fn test_clear_and_reset() {
        let mut form = ShortageForm::default();
        form.change(LensField::Sphere, "+1.00");
        form.change(LensField::Cylinder, "x");
        let _ = form.blur(LensField::Cylinder);
        form.quantity = 3;
        form.coating = "Blue Cut".into();
        assert_eq!(form.esf_cil(), "+1.00 x");

        let mut submitted = form.clone();
        submitted.reset_after_submit();
        assert_eq!(submitted.data().sphere, "");
        assert_eq!(submitted.quantity, 1);
        assert_eq!(submitted.coating, "Blue Cut");

        form.clear();
        assert_eq!(form.material, "1.49");
        assert_eq!(form.quantity, 1);
        assert!(!form.cylinder.error);
        assert!(form.can_submit());
    }
}
