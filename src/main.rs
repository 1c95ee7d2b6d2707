use env_logger::Env;
use mars_scrape::{configuration::get_configuration, services::scrape_mars};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration()?;
    let result = scrape_mars(&configuration).await?;

    println!("{:#?}", result);

    Ok(())
}
