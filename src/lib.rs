pub mod constants;
pub mod errors;
pub mod rendering;
pub mod scattering;

pub use constants::*;
pub use errors::SimulationError;

// Re-export commonly used items from scattering
pub use scattering::atmosphere::Atmosphere;

// Re-export commonly used items from rendering
pub use rendering::gradient::GradientRenderer;
