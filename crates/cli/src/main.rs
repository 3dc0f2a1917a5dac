use anyhow::Result;
use clap::Parser;

mod args;
mod ppm;

fn main() -> Result<()> {
    env_logger::init();

    let args = args::Args::parse();
    match args.command {
        args::Commands::Render(render) => ppm::render_command(render),
        args::Commands::Normals => normals_command(),
    }
}

fn normals_command() -> Result<()> {
    let model = facet_test_data::cube();

    for (i, polygon) in model.polygons.iter().enumerate() {
        let normal = facet::polygon_normal(polygon, &model.vertices)?;
        println!("polygon {i}: {normal}");
    }
    for (i, vertex) in model.vertices.iter().enumerate() {
        let normal = facet::vertex_normal(*vertex, &model.vertices, &model.polygons)?;
        println!("vertex {i}: {normal}");
    }
    Ok(())
}
