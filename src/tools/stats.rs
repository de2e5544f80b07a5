use viz::{stats, table};

#[derive(clap::Parser)]
#[derive(Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    // The node table exported by the builder
    #[clap(long = "data", value_parser, default_value_t = String::from(viz::Config::INPUT))]
    path_data: String,

    // Print the summary as JSON instead of a sentence
    #[clap(long, action)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    use anyhow::Context as _;
    use clap::Parser as _;

    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let Args { path_data, json } = Args::parse();

    let records = table::load(&path_data)
        .with_context(|| format!("load stage: {path_data}"))?;

    let stats = stats::HierarchyStats::new(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{stats}");
    }

    Ok(())
}
