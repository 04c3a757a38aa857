use crate::{GravityFieldErrors, GravityFieldModel};
use nalgebra::Vector3;

impl GravityFieldModel {
    fn zonal_reference_radius(&self) -> Result<f64, GravityFieldErrors> {
        if self.reference_radius <= f64::EPSILON {
            return Err(GravityFieldErrors::ReferenceRadiusNotSet);
        }
        Ok(self.reference_radius)
    }

    /// Potential including the axially symmetric J2 through J4 terms
    /// about the body z axis, using the stored unnormalized coefficients.
    ///
    /// The series truncates at the stored expansion degree, capped at
    /// four. Below degree two this is exactly the point-mass potential
    /// and the reference radius is not consulted.
    pub fn zonal_potential(&self, position: &Vector3<f64>) -> Result<f64, GravityFieldErrors> {
        let relative_position = self.relative_position(position)?;
        let degree = self.degree_of_expansion.min(4);
        if degree < 2 {
            return Ok(self.gravitational_parameter / relative_position.norm());
        }
        let radius = self.zonal_reference_radius()?;

        let r = relative_position.norm();
        let rho = radius / r;
        // sine of the geocentric latitude
        let s = relative_position.z / r;
        let s2 = s * s;

        let mut harmonic_sum = self.j2_coefficient * rho * rho * (3.0 * s2 - 1.0) / 2.0;
        if degree >= 3 {
            harmonic_sum += self.j3_coefficient * rho * rho * rho * s * (5.0 * s2 - 3.0) / 2.0;
        }
        if degree >= 4 {
            harmonic_sum += self.j4_coefficient * rho * rho * rho * rho
                * (35.0 * s2 * s2 - 30.0 * s2 + 3.0)
                / 8.0;
        }
        Ok(self.gravitational_parameter / r * (1.0 - harmonic_sum))
    }

    /// Gradient of `zonal_potential` from the closed-form partials. With
    /// the degree at two or more this is the point-mass acceleration
    /// plus the oblateness perturbations.
    pub fn zonal_gradient_of_potential(
        &self,
        position: &Vector3<f64>,
    ) -> Result<Vector3<f64>, GravityFieldErrors> {
        let relative_position = self.relative_position(position)?;
        let degree = self.degree_of_expansion.min(4);
        let r = relative_position.norm();
        if degree < 2 {
            return Ok(-relative_position * self.gravitational_parameter / (r * r * r));
        }
        let radius = self.zonal_reference_radius()?;

        let mu = self.gravitational_parameter;
        let x = relative_position.x;
        let y = relative_position.y;
        let z = relative_position.z;
        let r2 = r * r;
        let r5 = r2 * r2 * r;
        let s2 = z * z / r2;

        let mut gradient = -relative_position * mu / (r * r * r);

        let factor2 = 1.5 * self.j2_coefficient * mu * radius * radius / r5;
        gradient += factor2
            * Vector3::new(
                x * (5.0 * s2 - 1.0),
                y * (5.0 * s2 - 1.0),
                z * (5.0 * s2 - 3.0),
            );

        if degree >= 3 {
            let r7 = r5 * r2;
            let factor3 = 2.5 * self.j3_coefficient * mu * radius * radius * radius / r7;
            gradient += factor3
                * Vector3::new(
                    x * z * (7.0 * s2 - 3.0),
                    y * z * (7.0 * s2 - 3.0),
                    z * z * (7.0 * s2 - 6.0) + 0.6 * r2,
                );
        }

        if degree >= 4 {
            let r7 = r5 * r2;
            let factor4 =
                0.625 * self.j4_coefficient * mu * radius * radius * radius * radius / r7;
            gradient += factor4
                * Vector3::new(
                    x * (63.0 * s2 * s2 - 42.0 * s2 + 3.0),
                    y * (63.0 * s2 * s2 - 42.0 * s2 + 3.0),
                    z * (63.0 * s2 * s2 - 70.0 * s2 + 15.0),
                );
        }

        Ok(gradient)
    }
}
