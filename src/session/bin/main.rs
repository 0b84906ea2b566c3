use std::io;
use library_catalog::core::controller::Console;
use library_catalog::core::domain::Configuration;
use library_catalog::core::repository::RepositoryStore;
use library_catalog::session::Session;
use library_catalog::utils::logs::setup_tracing;

fn main() -> io::Result<()> {
    let config = Configuration::from_env();
    setup_tracing(config.log_level);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    Session::new(config, RepositoryStore::JsonFile).run(&mut console)
}
