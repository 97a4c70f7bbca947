use clap::{Parser, ValueHint};

use crate::constants;

/// Build scientific software packages and write Lmod modulefiles.
#[derive(Clone, Debug, Parser)]
#[command(name = constants::PACKMOD)]
#[command(author, version, about, long_about = None)]
pub struct MainOptions {
    /// Number of parallel build jobs
    #[arg(long, short = 'j', default_value_t = 6)]
    pub jobs: u32,

    /// Trace configuration parsing and name resolution
    #[arg(long, short = 't', action = clap::ArgAction::Count)]
    pub trace: u8,

    /// Set the configuration file to use
    #[arg(
        long,
        short = 'c',
        default_value = constants::CONFIG_FILE,
        value_hint = ValueHint::FilePath
    )]
    pub config: std::path::PathBuf,

    /// Actions to perform, in order:
    /// list, test, download, unpack, configure, build, module,
    /// install (= configure + build + module)
    #[arg(required = true)]
    pub actions: Vec<String>,
}

/// The actions the command line dispatches on.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, strum_macros::Display, strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    List,
    Test,
    Download,
    #[strum(serialize = "untar", serialize = "unpack")]
    Unpack,
    Configure,
    Build,
    Module,
    Install,
}

/// Resolve action words into the action sequence to run. "install"
/// expands in place to configure + build + module. Unknown words are
/// returned separately; they are reported but do not stop the other
/// actions from running.
pub fn expand_actions(words: &[String]) -> (Vec<Action>, Vec<String>) {
    let mut actions = Vec::new();
    let mut unknown = Vec::new();
    for word in words {
        match word.parse::<Action>() {
            Ok(Action::Install) => {
                actions.extend([Action::Configure, Action::Build, Action::Module]);
            }
            Ok(action) => actions.push(action),
            Err(_) => unknown.push(word.to_string()),
        }
    }
    (actions, unknown)
}
