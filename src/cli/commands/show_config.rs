use anyhow::Result;

use crate::config::SequencerConfig;

pub struct ShowConfigCommand<'a> {
    config: &'a SequencerConfig,
}

impl<'a> ShowConfigCommand<'a> {
    pub fn new(config: &'a SequencerConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<()> {
        print!("{}", toml::to_string_pretty(self.config)?);
        Ok(())
    }
}
