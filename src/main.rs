use std::io;

use anyhow::Result;

use finlog::config::{FinlogPaths, Settings};
use finlog::shell::Shell;
use finlog::storage::{Ledger, LedgerConfig};

fn main() -> Result<()> {
    let paths = FinlogPaths::new()?;
    paths.ensure_directories()?;

    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    let ledger = Ledger::new(LedgerConfig {
        csv_path: paths.ledger_file(),
    });

    let stdin = io::stdin();
    let mut shell = Shell::new(ledger, settings, stdin.lock(), io::stdout());
    shell.run()?;

    Ok(())
}
