// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::Config;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "shader-flight")]
#[command(about = "Full-screen shader scene with a free-fly camera", long_about = None)]
pub struct Cli {
    /// Disable the FPS overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// JSON config file, overrides the built-in defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// WGSL shader to render instead of the built-in scene
    #[arg(long)]
    pub shader: Option<PathBuf>,

    /// Borderless fullscreen
    #[arg(long)]
    pub fullscreen: bool,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Target frame rate
    #[arg(long = "max-fps")]
    pub max_fps: Option<u32>,
}

impl Cli {
    /// Build the effective config: defaults, then the config file, then flags
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        config.apply_cli(self);
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_gives_defaults() {
        let cli = Cli::try_parse_from(["shader-flight"]).unwrap();
        assert!(!cli.no_ui);
        assert!(cli.config.is_none());
        assert!(cli.shader.is_none());
        assert_eq!(cli.resolve_config().unwrap(), Config::default());
    }

    #[test]
    fn test_zero_max_fps_fails_validation() {
        let cli = Cli::try_parse_from(["shader-flight", "--max-fps", "0"]).unwrap();
        assert!(cli.resolve_config().is_err());
    }

    #[test]
    fn test_shader_path_is_parsed() {
        let cli = Cli::try_parse_from(["shader-flight", "--shader", "scene.wgsl", "--no-ui"]).unwrap();
        assert_eq!(cli.shader, Some(PathBuf::from("scene.wgsl")));
        assert!(cli.no_ui);
    }
}
