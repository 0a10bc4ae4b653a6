//! Named enemy factories and the spawn operations built on them.

use std::collections::BTreeMap;
use std::sync::Arc;

use bevy::prelude::*;
use rand::Rng;

use super::patterns::{circle_positions, line_positions, random_in_view, zigzag_positions};
use crate::common::assets::GameAssets;
use crate::plugins::enemies::{EnemyBundle, EnemyKind, enemy_bundle};

pub type EnemyFactory = Arc<dyn Fn(&GameAssets, Vec2) -> EnemyBundle + Send + Sync>;

/// Enemy type name -> factory.
///
/// Names iterate in sorted order so seeded batches are reproducible.
#[derive(Resource, Default, Clone)]
pub struct EnemySpawner {
    factories: BTreeMap<String, EnemyFactory>,
}

impl EnemySpawner {
    /// One factory per roster kind, under the kind's name.
    pub fn with_default_roster() -> Self {
        let mut spawner = Self::default();
        for kind in EnemyKind::ALL {
            spawner.register_factory(kind.as_str(), move |assets: &GameAssets, pos: Vec2| {
                enemy_bundle(assets, kind, pos)
            });
        }
        spawner
    }

    /// Register `factory` under `name`. A later registration replaces an
    /// earlier one.
    pub fn register_factory(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn(&GameAssets, Vec2) -> EnemyBundle + Send + Sync + 'static,
    ) {
        let name = name.into();
        if self.factories.insert(name.clone(), Arc::new(factory)).is_some() {
            debug!("enemy factory '{name}' replaced");
        }
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Build the bundle without spawning it.
    pub fn build(&self, assets: &GameAssets, name: &str, position: Vec2) -> Option<EnemyBundle> {
        self.factories.get(name).map(|factory| factory(assets, position))
    }

    /// Spawn one enemy. `None` for an unregistered name.
    pub fn spawn(
        &self,
        commands: &mut Commands,
        assets: &GameAssets,
        name: &str,
        position: Vec2,
    ) -> Option<Entity> {
        let Some(bundle) = self.build(assets, name, position) else {
            debug!("no enemy factory named '{name}'");
            return None;
        };
        Some(commands.spawn(bundle).id())
    }

    pub fn spawn_at(
        &self,
        commands: &mut Commands,
        assets: &GameAssets,
        name: &str,
        positions: impl IntoIterator<Item = Vec2>,
    ) -> Vec<Entity> {
        positions
            .into_iter()
            .filter_map(|pos| self.spawn(commands, assets, name, pos))
            .collect()
    }

    pub fn spawn_circle(
        &self,
        commands: &mut Commands,
        assets: &GameAssets,
        name: &str,
        center: Vec2,
        radius: f32,
        count: usize,
    ) -> Vec<Entity> {
        self.spawn_at(commands, assets, name, circle_positions(center, radius, count))
    }

    pub fn spawn_line(
        &self,
        commands: &mut Commands,
        assets: &GameAssets,
        name: &str,
        anchor: Vec2,
        forward: Vec2,
        count: usize,
        spacing: f32,
    ) -> Vec<Entity> {
        self.spawn_at(commands, assets, name, line_positions(anchor, forward, count, spacing))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn spawn_zigzag(
        &self,
        commands: &mut Commands,
        assets: &GameAssets,
        name: &str,
        start: Vec2,
        forward: Vec2,
        count: usize,
        spacing: f32,
        amplitude: f32,
    ) -> Vec<Entity> {
        let positions = zigzag_positions(start, forward, count, spacing, amplitude);
        self.spawn_at(commands, assets, name, positions)
    }

    pub fn spawn_random_in_view(
        &self,
        commands: &mut Commands,
        assets: &GameAssets,
        name: &str,
        view: Rect,
        rng: &mut impl Rng,
    ) -> Option<Entity> {
        self.spawn(commands, assets, name, random_in_view(view, rng))
    }
}
