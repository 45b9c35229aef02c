use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, Command};
use log::info;

use rastrum::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("rastrum")
        .about("Renders a textured, lit OBJ mesh to an image file")
        .arg(
            Arg::new("model")
                .value_name("MODEL")
                .help("OBJ file to render (overrides the config)"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output image; the format follows the extension"),
        )
        .arg(
            Arg::new("dump-config")
                .long("dump-config")
                .value_name("FILE")
                .help("Write the effective configuration to FILE and exit"),
        )
        .get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {path}"))?,
        None => Config::default(),
    };
    if let Some(model) = matches.get_one::<String>("model") {
        config.assets.model = PathBuf::from(model);
    }
    if let Some(output) = matches.get_one::<String>("output") {
        config.assets.output = PathBuf::from(output);
    }

    if let Some(path) = matches.get_one::<String>("dump-config") {
        config
            .save_to_file(path)
            .with_context(|| format!("Failed to write config to {path}"))?;
        info!("wrote configuration to {path}");
        return Ok(());
    }

    render(&config)
}

fn render(config: &Config) -> Result<()> {
    let assets = &config.assets;

    let mesh = Mesh::from_obj(&assets.model, assets.strictness)
        .with_context(|| format!("Failed to load model {}", assets.model.display()))?;

    let texture = assets
        .texture
        .as_ref()
        .map(|path| {
            Texture::from_file(path)
                .with_context(|| format!("Failed to load texture {}", path.display()))
        })
        .transpose()?;

    let mut engine = Engine::new(config.render.clone()).context("Invalid render configuration")?;
    let stats = engine.render(&mesh, texture.as_ref());
    info!("{} of {} faces drawn", stats.drawn, stats.faces);

    engine
        .write_output(&assets.output)
        .with_context(|| format!("Failed to write {}", assets.output.display()))?;
    Ok(())
}
