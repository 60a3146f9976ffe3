use color_eyre::Result;

use firstlight::config::WindowConfig;
use firstlight::triangle::TriangleApp;
use firstlight::{debug, run};

fn main() -> Result<()> {
    color_eyre::install()?;
    debug::set_up_logging();

    run::run::<TriangleApp>(WindowConfig::default())
}
