use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackModError {
    #[error("command failed with status {code}: {command}")]
    Command { command: String, code: i32 },

    #[error("{path:?}: unable to create directory: {err}")]
    CreateDirectory {
        path: std::path::PathBuf,
        err: std::io::Error,
    },

    #[error("directory not found: {path:?}")]
    MissingDirectory { path: std::path::PathBuf },

    #[error("missing configuration value: {key}")]
    MissingConfiguration { key: String },

    #[error("prerequisite module not loaded: {module}")]
    ModulePrerequisite { module: String },

    #[error("cannot parse configuration line: <<{line}>>")]
    Parse { line: String },

    #[error("unable to read {path:?}: {err}")]
    ReadFile {
        path: std::path::PathBuf,
        err: std::io::Error,
    },

    #[error("unsupported build system: {system} (expected cmake or autotools)")]
    UnsupportedBuildSystem { system: String },

    #[error("unsupported build mode: {mode} (expected core, seq, omp, mpi or hybrid)")]
    UnsupportedMode { mode: String },

    #[error("unable to write {path:?}: {err}")]
    WriteFile {
        path: std::path::PathBuf,
        err: std::io::Error,
    },
}

impl std::convert::From<&PackModError> for i32 {
    fn from(err: &PackModError) -> Self {
        match err {
            PackModError::Command { code, .. } => {
                if *code != 0 {
                    *code
                } else {
                    1
                }
            }
            PackModError::CreateDirectory { .. } => 77, // EX_NOPERM
            PackModError::MissingDirectory { .. } => 74, // EX_IOERR
            PackModError::MissingConfiguration { .. } => 78, // EX_CONFIG
            PackModError::ModulePrerequisite { .. } => 78, // EX_CONFIG
            PackModError::Parse { .. } => 78,           // EX_CONFIG
            PackModError::ReadFile { .. } => 74,        // EX_IOERR
            PackModError::UnsupportedBuildSystem { .. } => 78, // EX_CONFIG
            PackModError::UnsupportedMode { .. } => 78, // EX_CONFIG
            PackModError::WriteFile { .. } => 74,       // EX_IOERR
        }
    }
}
