use clap::Parser;

use packmod::cli::{self, Action};
use packmod::errors::PackModError;
use packmod::{config, constants, debug, display, download, error, info, install, modules};

fn main() {
    std::process::exit(cmd_main());
}

fn cmd_main() -> i32 {
    let options = cli::MainOptions::parse();
    let (actions, unknown) = cli::expand_actions(&options.actions);

    let mut exit_status = 0;
    for word in &unknown {
        error!("unknown action: {}", word);
        exit_status = 64; // EX_USAGE
    }
    if actions.is_empty() {
        return exit_status;
    }

    let mut cfg = match config::read_config(&options.config, options.trace) {
        Ok(cfg) => cfg,
        Err(err) => {
            error!("{}", err);
            return i32::from(&err);
        }
    };
    cfg.set(constants::JCOUNT, &options.jobs.to_string());
    if options.trace > 1 {
        debug!("configuration:\n{}", cfg);
    }

    for action in actions {
        display::print_action(&action.to_string());
        let result = match action {
            Action::List => info::list_installations(&cfg),
            Action::Test => modules::test_modules(&cfg).map_err(Into::into),
            Action::Download => download::download(&cfg),
            Action::Unpack => download::unpack(&cfg),
            Action::Configure => install::configure(&cfg),
            Action::Build => install::build(&cfg),
            Action::Module => install::write_module_file(&cfg),
            // expanded by expand_actions()
            Action::Install => Ok(()),
        };
        if let Err(err) = result {
            error!("{:#}", err);
            return match err.downcast_ref::<PackModError>() {
                Some(packmod_err) => i32::from(packmod_err),
                None => 1,
            };
        }
    }

    exit_status
}
