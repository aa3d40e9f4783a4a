use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = mandelbrot_explorer::CliArgs::parse();
    let outcome = mandelbrot_explorer::run_cli(&args)?;

    println!("{}", outcome.status);

    Ok(())
}
