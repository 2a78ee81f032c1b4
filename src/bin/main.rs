use anyhow::Result;
use metalgpu::{options::args, run};

fn main() -> Result<()> {
    let args = args::get_args();

    #[cfg(all(feature = "logging", debug_assertions))]
    {
        metalgpu::utils::logging::init_logger(
            log::LevelFilter::Debug,
            std::ffi::OsStr::new("metalgpu_debug.log"),
        )?;
    }

    run(&args)?;

    Ok(())
}
