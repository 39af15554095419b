//! Command-line 3x3x3 twisty cube simulator.

mod cli;
mod render;
mod session;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    color_eyre::install()?;
    env_logger::builder().init();
    log::debug!("{}", facecube_core::ENGINE_VERSION_STRING);

    let prefs = facecube_prefs::Preferences::load(None);

    match args.subcommand {
        Some(subcommand) => cli::exec(subcommand, &prefs),
        None => session::run(prefs, std::io::stdin().lock(), std::io::stdout().lock()),
    }
}
