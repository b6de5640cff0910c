use hw_domain::config::SiteConfig;
use hw_kernel::config::load_embedded;
use hw_logger::{LevelFilter, Logger};
use hw_web::{App, WebApp};

/// Site content and settings, compiled into the bundle.
const SITE: &str = include_str!("../site.toml");

fn main() -> anyhow::Result<()> {
    let _logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(LevelFilter::INFO)
        .env_filter("info,hw_page=debug,hw_store=debug")
        .console(true)
        .init()?;

    let config: SiteConfig = load_embedded(SITE)?;

    WebApp::new(config).launch(App);

    Ok(())
}
