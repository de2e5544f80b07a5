// Opens `bvh.csv` from the working directory and shows its leaf boxes.
// Takes no arguments, log verbosity follows RUST_LOG
fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    viz::run(viz::Config::default())
}
