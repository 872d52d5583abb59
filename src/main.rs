use clap::Parser;
use tokio::io::BufReader;
use web_records::config::Config;
use web_records::console::session::Session;
use web_records::ingestion::names::FakeNames;
use web_records::ingestion::source::HttpTextSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Source document: {}", config.source_url);

    let mut session = Session::new(
        HttpTextSource::new(),
        FakeNames,
        config.source_url,
        config.format,
    );

    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();
    session.run(input, &mut output).await?;

    tracing::info!("Exiting with {} records in memory", session.store().len());
    Ok(())
}
