use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use drawing_sampler::cli::Cli;
use drawing_sampler::render::PngRenderer;
use drawing_sampler::traits::SequenceRenderer;
use drawing_sampler::transport::{clamp_max_vectors, DrawingClient};
use drawing_sampler::types::DrawingRequest;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let shape = cli.shape.build();
    let num_points = cli.shape.points();
    let max_vectors = cli.max_vectors.unwrap_or_else(|| cli.shape.default_max_vectors());

    info!("Generating {num_points} points for {}...", shape.name());
    let sequence = shape.sample(num_points);

    if cli.render {
        PngRenderer::new(&cli.render_dir)
            .render(shape.name(), &sequence, &shape.guides(num_points))
            .context("Failed to render preview")?;
    }

    if cli.dry_run {
        let body = serde_json::to_string_pretty(&DrawingRequest {
            points: &sequence,
            max_vectors: clamp_max_vectors(max_vectors),
        })?;
        println!("{body}");
        return Ok(());
    }

    let client = DrawingClient::new(cli.api_url.as_str())?;
    info!("Sending drawing to {}...", client.endpoint());

    let response = client
        .submit(&sequence, max_vectors)
        .with_context(|| format!("Failed to submit {}", shape.name()))?;
    info!("Success! Drawing ID: {}", response.id);
    println!("{}", response.id);
    Ok(())
}
