use image::{Rgb, RgbImage};

use crate::constants::{
    BAND_COUNT, BASE_LIGHT_COLOR, BLUE_WAVELENGTH, GREEN_WAVELENGTH, IMAGE_HEIGHT, IMAGE_WIDTH,
    MAX_BAND_ALTITUDE, RAY_TRAVEL_LENGTH, RED_WAVELENGTH,
};
use crate::errors::SimulationError;
use crate::scattering::atmosphere::Atmosphere;

/// Paints the sky as a stack of horizontal altitude bands.
///
/// Each band gets one model evaluation per color channel: the base light
/// color is scaled by the transmittance at the band's altitude for the
/// channel's sample wavelength. The top rows correspond to the highest
/// altitude (thin air, nearly white light), the bottom rows to sea level,
/// where the blue channel has been scattered away.
#[derive(Debug, Clone)]
pub struct GradientRenderer {
    pub width: u32,
    pub height: u32,
    /// Altitude of the topmost band, meters.
    pub max_altitude: f64,
    /// Number of constant-color bands stacked top to bottom.
    pub band_count: u32,
    /// Path length handed to the transmission model, meters.
    pub travel_length: f64,
    /// Full-intensity light color before attenuation, per-channel 0..=255.
    pub base_color: [f64; 3],
    /// Sample wavelengths for the red, green, and blue channels, meters.
    pub wavelengths: [f64; 3],
}

impl GradientRenderer {
    pub fn new() -> Self {
        GradientRenderer {
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
            max_altitude: MAX_BAND_ALTITUDE,
            band_count: BAND_COUNT,
            travel_length: RAY_TRAVEL_LENGTH,
            base_color: BASE_LIGHT_COLOR,
            wavelengths: [RED_WAVELENGTH, GREEN_WAVELENGTH, BLUE_WAVELENGTH],
        }
    }

    /// Attenuated light color at `altitude` meters.
    pub fn band_color(
        &self,
        atmosphere: &Atmosphere,
        altitude: f64,
    ) -> Result<Rgb<u8>, SimulationError> {
        let mut channels = [0u8; 3];

        for (channel, wavelength) in self.wavelengths.iter().enumerate() {
            let transmittance =
                atmosphere.transmittance(altitude, self.travel_length, *wavelength)?;
            channels[channel] = (self.base_color[channel] * transmittance).round() as u8;
        }

        Ok(Rgb(channels))
    }

    /// Renders the full gradient image, one band color per row strip.
    pub fn render(&self, atmosphere: &Atmosphere) -> Result<RgbImage, SimulationError> {
        if self.width == 0 || self.height == 0 || self.band_count == 0 {
            return Err(SimulationError::RenderError(format!(
                "image dimensions and band count must be non-zero, got {}x{} with {} bands",
                self.width, self.height, self.band_count
            )));
        }

        let mut img = RgbImage::new(self.width, self.height);
        let band_step = self.max_altitude / self.band_count as f64;

        for band in 0..self.band_count {
            // Band 0 is the top of the image and the top of the atmosphere.
            let altitude = self.max_altitude - band as f64 * band_step;
            let color = self.band_color(atmosphere, altitude)?;

            // u64 keeps the band * height product from overflowing for
            // large configured dimensions
            let row_start = (band as u64 * self.height as u64 / self.band_count as u64) as u32;
            let row_end = ((band as u64 + 1) * self.height as u64 / self.band_count as u64) as u32;
            for y in row_start..row_end {
                for x in 0..self.width {
                    img.put_pixel(x, y, color);
                }
            }
        }

        Ok(img)
    }
}

impl Default for GradientRenderer {
    fn default() -> Self {
        GradientRenderer::new()
    }
}
