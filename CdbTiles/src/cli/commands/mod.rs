use clap::Subcommand;
use std::path::PathBuf;

pub mod combine;

#[derive(Subcommand)]
pub enum Commands {
    /// Combine existing tilesets under a single root tileset
    Combine {
        /// Output tileset JSON file
        #[arg(short, long)]
        output: PathBuf,

        /// Child tileset JSON files
        #[arg(required = true)]
        children: Vec<PathBuf>,

        /// Children hold glTF content (declares the glTF content extension)
        #[arg(long)]
        gltf_content: bool,

        /// Geometric error of the combined root
        #[arg(long)]
        max_geometric_error: Option<f64>,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Combine {
                output,
                children,
                gltf_content,
                max_geometric_error,
            } => combine::execute(output, children, *gltf_content, *max_geometric_error),
        }
    }
}
