use std::{fs, io};

use viz::plot;

#[derive(clap::Parser)]
#[derive(Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    // Overrides the node table named in the config
    #[clap(long = "data", value_parser)]
    path_data: Option<String>,

    #[clap(long, value_parser, default_value_t = String::from("bvh.svg"))]
    out: String,

    #[clap(long, value_parser, default_value_t = plot::Plane::Xy)]
    plane: plot::Plane,

    // JSON run configuration, see `viz::Config`
    #[clap(long, value_parser)]
    config: Option<String>,
}

fn main() -> anyhow::Result<()> {
    use anyhow::Context as _;
    use clap::Parser as _;

    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let Args {
        path_data,
        out,
        plane,
        config,
    } = Args::parse();

    let mut config: viz::Config = match config {
        Some(path) => {
            let config_reader = io::BufReader::new({
                fs::File::open(&path)
                    .with_context(|| format!("Unable to open config {path}"))?
            });

            serde_json::from_reader(config_reader)?
        },
        None => viz::Config::default(),
    };

    if let Some(path_data) = path_data {
        config.path = path_data.into();
    }

    let (scene, _) = viz::load_scene(&config.path, config.style)
        .with_context(|| format!("load stage: {}", config.path.display()))?;

    scene
        .present(plot::Snapshot::new(out, plane))
        .context("render stage")
}
