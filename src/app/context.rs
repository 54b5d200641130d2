use std::path::Path;

use crate::domain::configuration::{
    ForgeConfig, load_config, nations_roster, reference_phase_table,
};
use crate::domain::intro::PhaseTable;
use crate::domain::{AppError, Synthesizer};

/// Application context holding loaded configuration for command execution.
#[derive(Debug, Clone)]
pub struct AppContext {
    config: ForgeConfig,
    synthesizer: Synthesizer,
}

impl AppContext {
    /// Create a context from an already validated configuration.
    pub fn new(config: ForgeConfig) -> Result<Self, AppError> {
        let synthesizer = Synthesizer::new(&config.synthesis)?;
        Ok(Self { config, synthesizer })
    }

    /// Load `--config PATH`, or `memforge.toml` from `cwd` when present.
    pub fn load(config_path: Option<&Path>, cwd: &Path) -> Result<Self, AppError> {
        Self::new(load_config(config_path, cwd)?)
    }

    pub fn config(&self) -> &ForgeConfig {
        &self.config
    }

    pub fn synthesizer(&self) -> &Synthesizer {
        &self.synthesizer
    }

    /// Presentation table from configuration, falling back to the embedded reference.
    ///
    /// With `with_nations`, an empty flag phase is filled from the embedded roster.
    pub fn phase_table(&self, with_nations: bool) -> Result<PhaseTable, AppError> {
        let mut table = self.config.intro.table(&reference_phase_table()?);
        if with_nations && table.flags.is_empty() {
            table.flags = nations_roster()?;
        }
        Ok(table)
    }
}
