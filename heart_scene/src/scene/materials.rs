//! Shared material helpers for the scene's fixed palette.

use bevy::prelude::*;

/// Deep warm red with a glossy highlight and a faint inner glow.
pub fn heart_material(materials: &mut Assets<StandardMaterial>) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.0, 0.25),
        emissive: LinearRgba::rgb(0.2, 0.0, 0.07),
        perceptual_roughness: 0.15,
        metallic: 0.0,
        reflectance: 0.6,
        ..default()
    })
}

/// Ghostly white band.
pub fn ring_material(materials: &mut Assets<StandardMaterial>) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.3),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    })
}

/// Soft white points.
pub fn star_material(materials: &mut Assets<StandardMaterial>) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.8),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    })
}
