use clap::{Parser, Subcommand};

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Output path for the PPM image.
    #[arg(short, long)]
    pub output: String,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 512)]
    pub width: usize,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 256)]
    pub height: usize,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rasterize the demo triangle into a PPM image.
    Render(RenderArgs),
    /// Print estimated face and vertex normals for the built-in cube.
    Normals,
}
