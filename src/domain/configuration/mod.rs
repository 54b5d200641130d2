pub mod forge_config;
pub mod loader;

pub use forge_config::{
    ForgeConfig, ImagenApiConfig, IntroConfig, StampTemplateMode, SynthesisConfig,
};
pub use loader::{
    CONFIG_FILE, load_config, nations_roster, parse_config_content, reference_phase_table,
};
