use clap::Parser;

/// Explore the Mandelbrot set in a window.
///
/// Arrows pan, left/right click zoom at the cursor, the mouse wheel changes
/// the iteration cap, +/- change resolution, R resets and Esc quits.
#[derive(Debug, Parser)]
#[command(name = "gui", version, about)]
struct GuiArgs {
    #[command(flatten)]
    explorer: mandelbrot_explorer::ExplorerArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = GuiArgs::parse();
    let config = args.explorer.to_config()?;

    mandelbrot_explorer::run_gui(config)?;

    Ok(())
}
