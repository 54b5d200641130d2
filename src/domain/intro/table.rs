use serde::{Deserialize, Serialize};

/// One slow, animated step: an icon with a caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VignetteEntry {
    pub icon: String,
    pub caption: String,
}

impl VignetteEntry {
    pub fn new(icon: impl Into<String>, caption: impl Into<String>) -> Self {
        Self { icon: icon.into(), caption: caption.into() }
    }
}

/// One fast, non-animated step: a flag image reference with its nation label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlagEntry {
    pub image_key: String,
    pub label: String,
}

impl FlagEntry {
    pub fn new(image_key: impl Into<String>, label: impl Into<String>) -> Self {
        Self { image_key: image_key.into(), label: label.into() }
    }
}

/// Ordered entries presented by the sequencer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhaseTable {
    #[serde(default)]
    pub vignettes: Vec<VignetteEntry>,
    #[serde(default)]
    pub flags: Vec<FlagEntry>,
}

impl PhaseTable {
    pub fn new(vignettes: Vec<VignetteEntry>, flags: Vec<FlagEntry>) -> Self {
        Self { vignettes, flags }
    }

    pub fn vignette(&self, index: usize) -> Option<&VignetteEntry> {
        self.vignettes.get(index)
    }

    pub fn flag(&self, index: usize) -> Option<&FlagEntry> {
        self.flags.get(index)
    }
}
