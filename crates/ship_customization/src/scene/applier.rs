//! Writes resolved directives into the materials of matching parts

use crate::directive::Directive;
use crate::scene::{HostError, MaterialSink, SceneQuery, ShipId};

/// Apply a directive to every matching part of a ship
///
/// Colors overwrite the color of every material slot, textures the primary
/// texture. Returns the number of slots written; zero when the ship has no
/// parts of the directive's category.
pub fn apply<H>(host: &mut H, ship: ShipId, ship_name: &str, directive: &Directive) -> Result<usize, HostError>
where
    H: SceneQuery + MaterialSink + ?Sized,
{
    let category = directive.category();
    log::debug!("Applying {} to {}", directive.describe(), ship_name);

    let parts = host.find_parts(ship, category)?;
    if parts.is_empty() {
        log::info!("No {} parts found on {}", category.name(), ship_name);
        return Ok(0);
    }

    let mut written = 0;
    for part in &parts {
        log::debug!("Part name: {}", part.name);
        log::debug!("Materials in the part: {}", part.material_count);

        for material in 0..part.material_count {
            match directive {
                Directive::Color { color, .. } => host.set_color(part.handle, material, *color)?,
                Directive::Texture { texture, .. } => {
                    host.set_texture(part.handle, material, std::sync::Arc::clone(texture))?;
                }
            }
            written += 1;
        }
    }

    log::info!("{} for {}", directive.summary(), ship_name);
    Ok(written)
}
