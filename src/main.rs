use anyhow::{bail, Result};
use stardock::{
    actions::ActionError,
    cli::{Cli, Commands},
    commands,
    storage::DataDir,
    ConsoleUi, Route, Session, ShellApp,
};
use std::process;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    let data_dir = DataDir::new(cli.data_dir.clone())?;
    let mut session = Session::open_in(&data_dir)?;

    match cli.command {
        Commands::Play => {
            let route = session.route();
            if route != Route::Game {
                bail!(
                    "Cannot start the shell yet ({}). Sign in and join a galaxy first.",
                    route
                );
            }
            ShellApp::new()?.run(&mut session)?;
        }
        ref command => {
            if let Err(err) = commands::run(&mut session, command, &mut ConsoleUi::new()) {
                // Rejections were already printed by the console
                if err.downcast_ref::<ActionError>().is_some() {
                    drop(session);
                    process::exit(1);
                }
                return Err(err);
            }
        }
    }

    Ok(())
}
