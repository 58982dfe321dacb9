use crate::core::actions::render_viewport::ports::colour_map::ColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::ColourSchemeKind,
    maps::{
        fire_gradient::FireGradient, ocean::Ocean, primary_secondary::PrimarySecondary,
        psychedelic::Psychedelic,
    },
};

#[must_use]
pub fn colour_map_factory(kind: ColourSchemeKind) -> Box<dyn ColourMap> {
    match kind {
        ColourSchemeKind::PrimarySecondary => Box::new(PrimarySecondary),
        ColourSchemeKind::Ocean => Box::new(Ocean),
        ColourSchemeKind::Psychedelic => Box::new(Psychedelic),
        ColourSchemeKind::FireGradient => Box::new(FireGradient),
    }
}
