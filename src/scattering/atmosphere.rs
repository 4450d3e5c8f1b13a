use crate::constants::{
    ATMOSPHERE_SCALE_HEIGHT, ATMOSPHERIC_REFRACTIVE_INDEX, PARTICLE_RADIUS,
    SEA_LEVEL_MOLECULE_DENSITY,
};
use crate::errors::SimulationError;

/// Immutable atmospheric parameters for the Rayleigh scattering model.
///
/// Built once and borrowed by every evaluation; all operations are pure
/// functions of the inputs and these fields, so concurrent reads need no
/// synchronization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    /// Refractive index n of air, dimensionless.
    pub refractive_index: f64,
    /// Dielectric sphere radius a, meters.
    pub particle_radius: f64,
    /// Scale height μ, meters: altitude over which density falls by 1/e.
    pub scale_height: f64,
    /// Sea-level molecule number density N0, per cubic meter.
    pub molecule_density: f64,
}

impl Atmosphere {
    pub fn new(
        refractive_index: f64,
        particle_radius: f64,
        scale_height: f64,
        molecule_density: f64,
    ) -> Self {
        Atmosphere {
            refractive_index,
            particle_radius,
            scale_height,
            molecule_density,
        }
    }

    /// Standard Earth atmosphere at normal temperature and pressure.
    pub fn earth() -> Self {
        Atmosphere::new(
            ATMOSPHERIC_REFRACTIVE_INDEX,
            PARTICLE_RADIUS,
            ATMOSPHERE_SCALE_HEIGHT,
            SEA_LEVEL_MOLECULE_DENSITY,
        )
    }

    /// Relative air density at `altitude` meters: exp(-altitude / μ).
    ///
    /// Returns 1.0 at sea level, decaying toward 0 with altitude. Extreme
    /// altitudes underflow to 0.0 rather than erroring. Negative altitude is
    /// mathematically valid (density above 1) but has no physical meaning;
    /// callers own that check.
    pub fn relative_density(&self, altitude: f64) -> f64 {
        (-altitude / self.scale_height).exp()
    }

    /// Rayleigh scattering cross-section (m²) at `wavelength` meters:
    ///
    ///   (128·π⁵/3) · ((n²−1)/(n²+2))² · (a⁶ / λ⁴)
    ///
    /// Strictly positive and proportional to λ⁻⁴, so shorter wavelengths
    /// scatter more. A wavelength of zero or below is a domain error
    /// (division by zero, no physical meaning).
    pub fn cross_section(&self, wavelength: f64) -> Result<f64, SimulationError> {
        if !(wavelength > 0.0) {
            return Err(SimulationError::DomainError(format!(
                "wavelength must be positive, got {} m",
                wavelength
            )));
        }

        let n_sq = self.refractive_index.powi(2);
        let polarizability = ((n_sq - 1.0) / (n_sq + 2.0)).powi(2);
        let geometry = self.particle_radius.powi(6) / wavelength.powi(4);

        Ok((128.0 * std::f64::consts::PI.powi(5) / 3.0) * polarizability * geometry)
    }

    /// Fraction of light surviving Rayleigh scattering loss at `altitude`.
    ///
    /// Computes the optical depth τ = σ · μ · N0 · exp(-altitude/μ) and
    /// returns exp(-τ), a value in (0, 1]. Higher altitude or longer
    /// wavelength means less attenuation.
    ///
    /// This folds the whole air column above `altitude` into a single
    /// exponential scaled by the scale height instead of integrating along
    /// the ray, so `travel_length` never enters the result. The parameter is
    /// kept for the Beer-Lambert-shaped call signature and still validated
    /// against its declared domain (> 0).
    pub fn transmittance(
        &self,
        altitude: f64,
        travel_length: f64,
        wavelength: f64,
    ) -> Result<f64, SimulationError> {
        if !(travel_length > 0.0) {
            return Err(SimulationError::DomainError(format!(
                "travel length must be positive, got {} m",
                travel_length
            )));
        }

        let sigma = self.cross_section(wavelength)?;
        let optical_depth =
            sigma * self.scale_height * self.molecule_density * self.relative_density(altitude);

        Ok((-optical_depth).exp())
    }
}
