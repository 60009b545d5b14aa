use cartographer::{
    cli,
    command::REGISTRY,
    fetch::Generation,
    params::Params,
    profile::{self, Profile},
};
use std::io::Write;

type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::parse_args();
    let profile = Profile::load(&profile::search_paths(), args.profile.as_deref())?;
    let params = Params::assemble(profile.into_params(), args.into_params(), |var| {
        std::env::var(var).ok()
    });

    let output = REGISTRY.dispatch(&params)?;

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    output.write_to(&mut stdout, Generation::of(&params))?;
    stdout.flush()?;

    Ok(())
}
