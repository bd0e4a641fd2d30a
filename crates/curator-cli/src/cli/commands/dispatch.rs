use super::super::args::{Cli, Command};
use crate::exit_codes::SUCCESS;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    let config = cli.config.as_deref();
    let state = cli.state.as_path();
    match cli.cmd {
        Command::Judge(args) => super::judge::run(args, config, state).await,
        Command::Gallery => super::read::gallery(config, state),
        Command::LastResult(args) => super::read::last_result(args, config, state),
        Command::LastDebug(args) => super::read::last_debug(args, config, state),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}
