// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::{Context, Result};
use log::info;
use vista_core::{
    lighting::{LightingParams, LightingStyle},
    math::{LinearRgba, Vec3},
};
use vista_scene::{Assembly, Mesh, PropHandle, Renderable, Scene, SceneSettings};

/// A shaft with a rotor disc and a knob on top.
fn gyroscope(resolution: u32) -> Assembly {
    let shaft = Mesh::cylinder(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), 0.02, resolution)
        .with_name("shaft")
        .with_color(LinearRgba::named("orange").unwrap_or(LinearRgba::YELLOW));
    let rotor = Mesh::cylinder(
        Vec3::new(0.0, 0.0, 0.3),
        Vec3::new(0.0, 0.0, 0.4),
        0.4,
        resolution,
    )
    .with_name("rotor");
    let knob = Mesh::sphere(Vec3::new(0.0, 0.0, 1.0), 0.05, resolution / 2).with_name("knob");

    Assembly::new(vec![shaft, rotor, knob]).with_name("gyroscope")
}

/// Small markers placed on points of a carrier surface, each one a group of
/// an arrow and a ball.
fn markers(carrier: &Mesh, count: usize) -> Vec<PropHandle> {
    let step = (carrier.num_points() / count.max(1)).max(1);
    let center = carrier.bounds().map(|b| b.center()).unwrap_or_default();
    (0..count)
        .filter_map(|i| carrier.point(i * step))
        .enumerate()
        .map(|(i, p)| {
            let hue = i as f32 / count.max(1) as f32;
            let color = LinearRgba::lerp(LinearRgba::BLUE, LinearRgba::RED, hue);
            let marker = Assembly::new(vec![
                Mesh::arrow(Vec3::ZERO, (p - center).normalize() * 0.3, 6),
                Mesh::sphere(Vec3::ZERO, 0.05, 4).with_color(color),
            ])
            .with_name(format!("marker{i}"));
            let handle = PropHandle::from(marker);
            handle.translate(p);
            handle
        })
        .collect()
}

fn load_settings() -> Result<SceneSettings> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading settings from '{path}'"))?;
            Ok(SceneSettings::from_ron_str(&text)?)
        }
        None => Ok(SceneSettings::default()),
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = load_settings()?;
    let background = settings.background_color()?;
    let resolution = settings.resolution;
    info!("Background {:?}, resolution {}", background, resolution);

    let mut scene = Scene::new(settings);

    // Two gyroscopes: the original and a shifted, restyled clone.
    let mut gyro = gyroscope(resolution);
    let mut twin = gyro.deep_clone().with_name("gyroscope twin");
    twin.translate(Vec3::new(1.5, 0.0, 0.0));
    twin.lighting(&LightingParams::style(LightingStyle::Metallic).with_specular_power(30.0));
    gyro.lighting_named("plastic")?;
    info!(
        "Gyroscope axis: base {:?}, top {:?}",
        gyro.base(),
        gyro.top()
    );

    let carrier = Mesh::sphere(Vec3::new(0.0, 3.0, 0.0), 1.0, resolution)
        .with_name("carrier")
        .with_color(LinearRgba::named("grey").unwrap_or(LinearRgba::WHITE))
        .with_alpha(0.3);
    let ring = Assembly::new(markers(&carrier, 10)).with_name("markers");

    scene.add(vec![
        PropHandle::from(gyro),
        PropHandle::from(twin),
        carrier.into_handle(),
        PropHandle::from(ring),
    ]);

    let leaves = scene.leaves();
    for rotor in leaves.iter().filter(|leaf| leaf.prop.name_contains("rotor")) {
        info!(
            "Rotor at offset {:?}, world bounds {:?}",
            rotor.offset,
            rotor.world_bounds()
        );
    }

    info!(
        "Scene: {} props, {} drawable leaves, bounds {:?}",
        scene.len(),
        leaves.len(),
        scene.bounds()
    );
    for leaf in leaves.iter().take(8) {
        info!(
            "{:indent$}{}",
            "",
            leaf.prop.name().unwrap_or_else(|| "<unnamed>".to_string()),
            indent = leaf.depth * 2
        );
    }

    Ok(())
}
