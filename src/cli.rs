// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "citywalk")]
#[command(about = "First-person walkthrough of a static 3D scene", long_about = None)]
pub struct Cli {
    /// glTF scene to walk through; without it the player roams the
    /// fallback floor
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// JSON walkthrough config (spawn pose, scene fit, trigger zones)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable the coordinate HUD overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
