use log::LevelFilter;
use macqr_icons::{IconConfig, IconKind};
use simple_logger::SimpleLogger;

fn main() -> anyhow::Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).env().init()?;

    let kind = IconKind::Plain;
    kind.generate(&IconConfig::default())?;
    println!("{}", kind.confirmation());
    Ok(())
}
