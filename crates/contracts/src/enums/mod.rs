pub mod lens_field;

pub use lens_field::LensField;
