use anyhow::Result;
use scrivener::cli::App;

#[tokio::main]
async fn main() -> Result<()> {
    let mut app = App::from_args().await?;
    let args = scrivener::cli::Args::parse_args();

    app.run(args).await?;

    Ok(())
}
