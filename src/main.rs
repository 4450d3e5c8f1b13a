use sky_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let atmosphere = Atmosphere::earth();
    let renderer = GradientRenderer::new();

    let image = renderer.render(&atmosphere)?;
    image.save("image.png")?;
    println!("Image saved successfully.");

    Ok(())
}
