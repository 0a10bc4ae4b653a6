//! Asset context.
//!
//! One `GameAssets` resource is created at startup and handed by reference to
//! everything that needs sprite data (enemy factories, pickups, the sprite
//! sync). There is no global asset store.
//!
//! Sheets carry their pixel size next to the image handle so frame
//! rectangles can be validated without the image being loaded, which keeps
//! the headless configuration fully functional.

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

/// Placeholder sheet returned when an icon is missing.
pub const NO_ICON: &str = "no_icon";

#[derive(Clone, Debug, PartialEq)]
pub struct SpriteSheet {
    pub image: Handle<Image>,
    pub size: UVec2,
}

impl SpriteSheet {
    pub fn new(size: UVec2) -> Self {
        Self { image: Handle::default(), size }
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct GameAssets {
    sheets: HashMap<String, SpriteSheet>,
}

/// Name and pixel size of every sheet the game ships with.
const BUILTIN_SHEETS: &[(&str, u32, u32)] = &[
    ("carrot", 256, 256),
    ("potato", 256, 192),
    ("onion", 256, 192),
    ("leek", 256, 192),
    ("radish", 256, 352),
    ("cabbage", 256, 224),
    ("carrot_icon", 16, 16),
    ("potato_icon", 16, 16),
    ("onion_icon", 16, 16),
    ("leek_icon", 16, 16),
    ("radish_icon", 16, 16),
    ("cabbage_icon", 16, 16),
    (NO_ICON, 16, 16),
];

impl GameAssets {
    /// Sheet table with default (unloaded) image handles.
    pub fn builtin() -> Self {
        let mut assets = Self::default();
        for &(name, w, h) in BUILTIN_SHEETS {
            assets.insert(name, SpriteSheet::new(UVec2::new(w, h)));
        }
        assets
    }

    pub fn insert(&mut self, name: impl Into<String>, sheet: SpriteSheet) {
        self.sheets.insert(name.into(), sheet);
    }

    pub fn image(&self, name: &str) -> Option<&SpriteSheet> {
        self.sheets.get(name)
    }

    /// Icon lookup that recovers with the `no_icon` placeholder.
    pub fn icon(&self, name: &str) -> Option<&SpriteSheet> {
        self.sheets.get(name).or_else(|| {
            warn!("icon '{name}' missing, using placeholder");
            self.sheets.get(NO_ICON)
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(String::as_str)
    }
}

/// Point every known sheet at its image on disk.
///
/// Render-only: headless apps have no `AssetServer`.
pub fn load_sheet_images(asset_server: Res<AssetServer>, mut assets: ResMut<GameAssets>) {
    for sheet_name in assets.names().map(str::to_owned).collect::<Vec<_>>() {
        let handle = asset_server.load(format!("sprites/{sheet_name}.png"));
        if let Some(sheet) = assets.sheets.get_mut(&sheet_name) {
            sheet.image = handle;
        }
    }
    info!("queued {} sprite sheets for loading", assets.sheets.len());
}
