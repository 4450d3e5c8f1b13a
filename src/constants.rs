// Atmospheric Optics Constants
pub const ATMOSPHERIC_REFRACTIVE_INDEX: f64 = 1.0003; // dimensionless
pub const PARTICLE_RADIUS: f64 = 1.0e-9; // m (dielectric sphere radius)
pub const ATMOSPHERE_SCALE_HEIGHT: f64 = 100_000.0; // m
pub const SEA_LEVEL_MOLECULE_DENSITY: f64 = 2.6867811e25; // molecules per m³

// Unit Conversions
pub const NANOMETER: f64 = 1.0e-9; // m

// Channel Sample Wavelengths
pub const RED_WAVELENGTH: f64 = 610.0 * NANOMETER; // m
pub const GREEN_WAVELENGTH: f64 = 550.0 * NANOMETER; // m
pub const BLUE_WAVELENGTH: f64 = 450.0 * NANOMETER; // m

// Render Parameters
pub const IMAGE_WIDTH: u32 = 800; // px
pub const IMAGE_HEIGHT: u32 = 600; // px
pub const MAX_BAND_ALTITUDE: f64 = 500_000.0; // m (topmost altitude band)
pub const BAND_COUNT: u32 = 50; // altitude bands, 10 km each
pub const RAY_TRAVEL_LENGTH: f64 = 1.0; // m
pub const BASE_LIGHT_COLOR: [f64; 3] = [255.0, 255.0, 255.0]; // full-intensity white
