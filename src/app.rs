//! Application context shared by every command.

use crate::cli::output::OutputFormat;
use crate::cli::{Cli, ColorMode};
use crate::config::Config;
use crate::content::ContentStore;
use crate::error::Result;

/// Everything a command handler needs: the merged configuration, the
/// loaded content, and the effective output format. Built once per
/// invocation; immutable afterwards.
pub struct AppContext {
    pub config: Config,
    pub content: ContentStore,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        apply_color_mode(cli);

        let root = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &root)?;
        let content = ContentStore::load(&config, &root);

        Ok(Self {
            config,
            content,
            format: cli.output_format(),
        })
    }

    /// True when output goes to scripts rather than eyes.
    #[must_use]
    pub const fn machine_mode(&self) -> bool {
        self.format.is_machine_readable()
    }
}

fn apply_color_mode(cli: &Cli) {
    if cli.force_plain() || !cli.output_format().use_colors() {
        colored::control::set_override(false);
        console::set_colors_enabled(false);
    } else if cli.color == Some(ColorMode::Always) {
        colored::control::set_override(true);
        console::set_colors_enabled(true);
    }
}
