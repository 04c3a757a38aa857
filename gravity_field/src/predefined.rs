use crate::{GravityFieldErrors, GravityFieldModel};
use serde::{Deserialize, Serialize};

/// Geopotential models with tabulated constants, from Vallado (2006),
/// Tables 2 and 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredefinedGravityField {
    Wgs72,
    Wgs84,
}

impl PredefinedGravityField {
    /// Gravitational parameter in m^3/s^2.
    pub fn gravitational_parameter(&self) -> f64 {
        match self {
            PredefinedGravityField::Wgs72 => 398600.8e9,
            PredefinedGravityField::Wgs84 => 398600.4418e9,
        }
    }

    /// Equatorial reference radius in m.
    pub fn reference_radius(&self) -> f64 {
        match self {
            PredefinedGravityField::Wgs72 => 6378135.0,
            PredefinedGravityField::Wgs84 => 6378137.0,
        }
    }

    /// Unnormalized zonal coefficient J2.
    pub fn j2(&self) -> f64 {
        match self {
            PredefinedGravityField::Wgs72 => 0.001082616,
            PredefinedGravityField::Wgs84 => 0.00108262998905,
        }
    }

    /// Unnormalized zonal coefficient J3.
    pub fn j3(&self) -> f64 {
        match self {
            PredefinedGravityField::Wgs72 => -0.00000253881,
            PredefinedGravityField::Wgs84 => -0.00000253215306,
        }
    }

    /// Unnormalized zonal coefficient J4.
    pub fn j4(&self) -> f64 {
        match self {
            PredefinedGravityField::Wgs72 => -0.00000165597,
            PredefinedGravityField::Wgs84 => -0.00000161098761,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PredefinedGravityField::Wgs72 => "WGS-72",
            PredefinedGravityField::Wgs84 => "WGS-84",
        }
    }

    /// Case-insensitive lookup, with or without the hyphen.
    pub fn from_name(name: &str) -> Result<Self, GravityFieldErrors> {
        match name.to_ascii_lowercase().as_str() {
            "wgs72" | "wgs-72" => Ok(PredefinedGravityField::Wgs72),
            "wgs84" | "wgs-84" => Ok(PredefinedGravityField::Wgs84),
            _ => Err(GravityFieldErrors::UnknownPredefinedField(name.to_string())),
        }
    }
}

impl std::fmt::Display for PredefinedGravityField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl GravityFieldModel {
    /// Model loaded from a tabulated geopotential. Expansion degree,
    /// order and origin keep their defaults.
    pub fn from_predefined(predefined: PredefinedGravityField) -> Self {
        let mut model = Self::default();
        model.set_predefined_configuration(predefined);
        model
    }

    /// Overwrites the gravitational parameter, reference radius and
    /// zonal coefficients from the tabulated values. The expansion
    /// degree, order and origin are left untouched.
    pub fn set_predefined_configuration(&mut self, predefined: PredefinedGravityField) {
        self.gravitational_parameter = predefined.gravitational_parameter();
        self.reference_radius = predefined.reference_radius();
        self.j2_coefficient = predefined.j2();
        self.j3_coefficient = predefined.j3();
        self.j4_coefficient = predefined.j4();
    }

    /// Same as `set_predefined_configuration` but keyed by name. An
    /// unrecognized name fails without modifying the model.
    pub fn set_predefined_by_name(&mut self, name: &str) -> Result<(), GravityFieldErrors> {
        let predefined = PredefinedGravityField::from_name(name)?;
        self.set_predefined_configuration(predefined);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn test_wgs84_values() {
        let field = GravityFieldModel::from_predefined(PredefinedGravityField::Wgs84);
        assert_eq!(field.gravitational_parameter(), 398600.4418e9);
        assert_eq!(field.reference_radius(), 6378137.0);
        assert_eq!(field.j2_coefficient(), 0.00108262998905);
        assert_eq!(field.j3_coefficient(), -0.00000253215306);
        assert_eq!(field.j4_coefficient(), -0.00000161098761);
        assert_eq!(field.degree_of_expansion(), 0);
        assert_eq!(field.order_of_expansion(), 0);
        assert_eq!(field.origin(), Vector3::zeros());
    }

    #[test]
    fn test_wgs72_values() {
        let field = GravityFieldModel::from_predefined(PredefinedGravityField::Wgs72);
        assert_eq!(field.gravitational_parameter(), 398600.8e9);
        assert_eq!(field.reference_radius(), 6378135.0);
        assert_eq!(field.j2_coefficient(), 0.001082616);
        assert_eq!(field.j3_coefficient(), -0.00000253881);
        assert_eq!(field.j4_coefficient(), -0.00000165597);
    }

    #[test]
    fn test_preset_overwrites_only_tabulated_fields() {
        let mut field = GravityFieldModel::new(1.0e14)
            .unwrap()
            .with_expansion(8, 8)
            .with_origin(Vector3::new(1.0, 2.0, 3.0));

        field.set_predefined_configuration(PredefinedGravityField::Wgs84);
        assert_eq!(field.gravitational_parameter(), 398600.4418e9);
        assert_eq!(field.reference_radius(), 6378137.0);
        assert_eq!(field.degree_of_expansion(), 8);
        assert_eq!(field.order_of_expansion(), 8);
        assert_eq!(field.origin(), Vector3::new(1.0, 2.0, 3.0));

        field.set_predefined_configuration(PredefinedGravityField::Wgs72);
        assert_eq!(field.gravitational_parameter(), 398600.8e9);
        assert_eq!(field.j4_coefficient(), -0.00000165597);
        assert_eq!(field.degree_of_expansion(), 8);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            PredefinedGravityField::from_name("wgs84").unwrap(),
            PredefinedGravityField::Wgs84
        );
        assert_eq!(
            PredefinedGravityField::from_name("WGS-72").unwrap(),
            PredefinedGravityField::Wgs72
        );
        assert!(matches!(
            PredefinedGravityField::from_name("egm96"),
            Err(GravityFieldErrors::UnknownPredefinedField(name)) if name == "egm96"
        ));
    }

    #[test]
    fn test_set_predefined_by_name() {
        let mut field = GravityFieldModel::default();
        field.set_predefined_by_name("wgs72").unwrap();
        assert_eq!(field.gravitational_parameter(), 398600.8e9);
        assert_eq!(field.reference_radius(), 6378135.0);
    }

    #[test]
    fn test_unknown_name_leaves_model_unchanged() {
        let mut field = GravityFieldModel::from_predefined(PredefinedGravityField::Wgs84)
            .with_expansion(2, 0);
        let before = field.clone();

        assert!(field.set_predefined_by_name("jgm3").is_err());
        assert_eq!(
            field.gravitational_parameter(),
            before.gravitational_parameter()
        );
        assert_eq!(field.reference_radius(), before.reference_radius());
        assert_eq!(field.j2_coefficient(), before.j2_coefficient());
        assert_eq!(field.j3_coefficient(), before.j3_coefficient());
        assert_eq!(field.j4_coefficient(), before.j4_coefficient());
        assert_eq!(field.degree_of_expansion(), before.degree_of_expansion());
        assert_eq!(field.order_of_expansion(), before.order_of_expansion());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(PredefinedGravityField::Wgs84.to_string(), "WGS-84");
        assert_eq!(PredefinedGravityField::Wgs72.to_string(), "WGS-72");
    }
}
