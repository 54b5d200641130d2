//! Assets embedded in the memforge binary.

use include_dir::{Dir, include_dir};

static ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

pub const STAMP_SCENE_TEMPLATE: &str = "prompts/stamp_scene.j2";
pub const REFERENCE_INTRO: &str = "intro/reference.toml";
pub const NATIONS_ROSTER: &str = "intro/nations.toml";

/// Read an embedded text asset by its path relative to `src/assets`.
pub fn text(path: &str) -> Option<&'static str> {
    ASSETS_DIR.get_file(path).and_then(|file| file.contents_utf8())
}
