//! Tier editor CLI
//!
//! Loads a catalog, replays a recorded action script against it and prints
//! the resulting catalog.

use std::{io, process::ExitCode};

use tracing::{error, info};

use tier_editor::{
    config::Config,
    editor::ProductEditor,
    fixtures::{self, FixtureError},
    logging,
};

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(error) => {
            #[expect(
                clippy::print_stderr,
                reason = "logging not initialized yet, must use eprintln for config errors"
            )]
            {
                eprintln!("{error}");
            }

            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = logging::init_subscriber(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("{error}");
        }

        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "tier editor failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), FixtureError> {
    let mut catalog = fixtures::catalog_from_path(&config.catalog)?;

    info!(
        catalog = %config.catalog.display(),
        products = catalog.products().len(),
        "catalog loaded"
    );

    if let Some(script_path) = &config.script {
        let steps = fixtures::script_from_path(script_path)?;
        let mut editor = ProductEditor::new();

        fixtures::replay(&steps, &mut editor, &mut catalog);
    }

    catalog.write_to(io::stdout().lock())?;

    Ok(())
}
