//! Static Files Config

use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct StaticFilesConfig {
    /// Directory served under `/images`
    #[arg(long, env = "IMAGES_DIR", default_value = "images")]
    pub images_dir: PathBuf,
}
