use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod predefined;
mod zonal;

#[derive(Debug, Error)]
pub enum GravityFieldErrors {
    #[error("gravitational parameter must be greater than zero")]
    GravitationalParameterNotPositive,
    #[error("gravitational parameter must be configured greater than zero before evaluation")]
    GravitationalParameterNotSet,
    #[error("reference radius must be configured greater than zero for zonal terms")]
    ReferenceRadiusNotSet,
    #[error("no predefined gravity field named '{0}'")]
    UnknownPredefinedField(String),
    #[error("query position coincides with the field origin")]
    ZeroRelativeDistance,
}

/// Gravity field of a single celestial body.
///
/// The evaluation methods (`potential`, `gradient_of_potential`,
/// `gradient_tensor_of_potential`) implement the Newtonian point-mass term
/// only. The stored expansion degree/order and the J2 through J4
/// coefficients are never read by them; those fields feed the separate
/// zonal methods (`zonal_potential`, `zonal_gradient_of_potential`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GravityFieldModel {
    gravitational_parameter: f64,
    reference_radius: f64,
    degree_of_expansion: usize,
    order_of_expansion: usize,
    j2_coefficient: f64,
    j3_coefficient: f64,
    j4_coefficient: f64,
    origin_position: Vector3<f64>,
}

impl Default for GravityFieldModel {
    /// An unconfigured model. Every scalar is zero, which the evaluation
    /// methods reject until a gravitational parameter is configured.
    fn default() -> Self {
        Self {
            gravitational_parameter: 0.0,
            reference_radius: 0.0,
            degree_of_expansion: 0,
            order_of_expansion: 0,
            j2_coefficient: 0.0,
            j3_coefficient: 0.0,
            j4_coefficient: 0.0,
            origin_position: Vector3::zeros(),
        }
    }
}

impl GravityFieldModel {
    /// Point-mass field with the given gravitational parameter in m^3/s^2.
    pub fn new(gravitational_parameter: f64) -> Result<Self, GravityFieldErrors> {
        if gravitational_parameter <= f64::EPSILON {
            return Err(GravityFieldErrors::GravitationalParameterNotPositive);
        }
        Ok(Self {
            gravitational_parameter,
            ..Self::default()
        })
    }

    pub fn with_origin(mut self, origin: Vector3<f64>) -> Self {
        self.origin_position = origin;
        self
    }

    pub fn with_reference_radius(mut self, reference_radius: f64) -> Self {
        self.reference_radius = reference_radius;
        self
    }

    pub fn with_expansion(mut self, degree: usize, order: usize) -> Self {
        self.degree_of_expansion = degree;
        self.order_of_expansion = order;
        self
    }

    pub fn with_zonal_coefficients(mut self, j2: f64, j3: f64, j4: f64) -> Self {
        self.j2_coefficient = j2;
        self.j3_coefficient = j3;
        self.j4_coefficient = j4;
        self
    }

    pub fn set_gravitational_parameter(&mut self, gravitational_parameter: f64) {
        self.gravitational_parameter = gravitational_parameter;
    }

    pub fn set_reference_radius(&mut self, reference_radius: f64) {
        self.reference_radius = reference_radius;
    }

    pub fn set_degree_of_expansion(&mut self, degree_of_expansion: usize) {
        self.degree_of_expansion = degree_of_expansion;
    }

    pub fn set_order_of_expansion(&mut self, order_of_expansion: usize) {
        self.order_of_expansion = order_of_expansion;
    }

    pub fn set_origin(&mut self, origin: Vector3<f64>) {
        self.origin_position = origin;
    }

    /// Gravitational parameter in m^3/s^2.
    pub fn gravitational_parameter(&self) -> f64 {
        self.gravitational_parameter
    }

    /// Reference radius in m against which the zonal coefficients are
    /// defined. Descriptive metadata for the point-mass formulas.
    pub fn reference_radius(&self) -> f64 {
        self.reference_radius
    }

    pub fn degree_of_expansion(&self) -> usize {
        self.degree_of_expansion
    }

    pub fn order_of_expansion(&self) -> usize {
        self.order_of_expansion
    }

    pub fn j2_coefficient(&self) -> f64 {
        self.j2_coefficient
    }

    pub fn j3_coefficient(&self) -> f64 {
        self.j3_coefficient
    }

    pub fn j4_coefficient(&self) -> f64 {
        self.j4_coefficient
    }

    /// Location of the body center in the caller's frame, in m.
    pub fn origin(&self) -> Vector3<f64> {
        self.origin_position
    }

    /// Query position relative to the body center, after the shared
    /// evaluation preconditions: a configured gravitational parameter
    /// and a nonzero separation from the origin.
    fn relative_position(
        &self,
        position: &Vector3<f64>,
    ) -> Result<Vector3<f64>, GravityFieldErrors> {
        if self.gravitational_parameter <= f64::EPSILON {
            return Err(GravityFieldErrors::GravitationalParameterNotSet);
        }
        let relative_position = position - self.origin_position;
        if relative_position.norm() <= f64::EPSILON {
            return Err(GravityFieldErrors::ZeroRelativeDistance);
        }
        Ok(relative_position)
    }

    /// Gravitational potential at `position`, in m^2/s^2.
    ///
    /// `position` is expressed in the same frame as the origin. Fails with
    /// `ZeroRelativeDistance` when `position` coincides with the origin
    /// and with `GravitationalParameterNotSet` on an unconfigured model;
    /// the other evaluation methods share both checks.
    pub fn potential(&self, position: &Vector3<f64>) -> Result<f64, GravityFieldErrors> {
        let relative_position = self.relative_position(position)?;
        Ok(self.gravitational_parameter / relative_position.norm())
    }

    /// Gradient of the potential at `position`, in m/s^2. This is the
    /// gravitational acceleration vector, pointing toward the origin.
    pub fn gradient_of_potential(
        &self,
        position: &Vector3<f64>,
    ) -> Result<Vector3<f64>, GravityFieldErrors> {
        let relative_position = self.relative_position(position)?;
        let r = relative_position.norm();
        // integer powers as plain products, not powf
        Ok(-relative_position * self.gravitational_parameter / (r * r * r))
    }

    /// Second spatial derivatives of the potential at `position`, in
    /// 1/s^2. The tensor is symmetric and traceless; the usual consumer
    /// is a gravity-gradient torque calculation on an extended body.
    pub fn gradient_tensor_of_potential(
        &self,
        position: &Vector3<f64>,
    ) -> Result<Matrix3<f64>, GravityFieldErrors> {
        let relative_position = self.relative_position(position)?;
        let r = relative_position.norm();
        let r5 = r * r * r * r * r;
        Ok(
            (relative_position * relative_position.transpose() * 3.0
                - Matrix3::identity() * relative_position.norm_squared())
                * (self.gravitational_parameter / r5),
        )
    }
}

impl std::fmt::Display for GravityFieldModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "gravity field model")?;
        writeln!(
            f,
            "  gravitational parameter: {} m^3/s^2",
            self.gravitational_parameter
        )?;
        writeln!(
            f,
            "  origin position: [{}, {}, {}] m",
            self.origin_position.x, self.origin_position.y, self.origin_position.z
        )?;
        writeln!(f, "  degree of expansion: {}", self.degree_of_expansion)?;
        writeln!(f, "  order of expansion: {}", self.order_of_expansion)?;
        write!(f, "  reference radius: {} m", self.reference_radius)
    }
}
