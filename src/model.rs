use indexmap::IndexMap;

use crate::constants;
use crate::errors::PackModError;

/// Build modes distinguish how a package is compiled and where its
/// modulefile lives in the module tree. Every mode-dependent computation
/// is a total match over this enum.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, strum_macros::Display, strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum BuildMode {
    /// Compiler-independent packages, loadable everywhere.
    Core,
    /// Sequential builds tied to a compiler family.
    Seq,
    /// OpenMP builds tied to a compiler family.
    Omp,
    /// MPI builds tied to a compiler and an MPI family.
    Mpi,
    /// Hybrid MPI+OpenMP builds.
    Hybrid,
}

impl BuildMode {
    /// Parse a configured mode value, mapping failures to a configuration
    /// error that names the offending value.
    pub fn parse(value: &str) -> Result<Self, PackModError> {
        value.parse().map_err(|_| PackModError::UnsupportedMode {
            mode: value.to_string(),
        })
    }

    /// MPI and hybrid builds carry the MPI family in their identity.
    pub fn uses_mpi(self) -> bool {
        matches!(self, BuildMode::Mpi | BuildMode::Hybrid)
    }
}

/// Recognized build systems. Configure and build delegate to the
/// corresponding external toolchain.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, strum_macros::Display, strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum BuildSystem {
    Cmake,
    Autotools,
}

impl BuildSystem {
    pub fn parse(value: &str) -> Result<Self, PackModError> {
        value
            .parse()
            .map_err(|_| PackModError::UnsupportedBuildSystem {
                system: value.to_string(),
            })
    }
}

/// Package identity: lowercase name and version.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Package {
    pub name: String,
    pub version: String,
}

impl Package {
    /// The "<name>-<version>" basename used for source directories.
    pub fn basename(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }
}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

/// Source of "today" for date-stamped git versions. Injectable so that
/// name resolution stays testable.
pub trait Clock {
    fn today(&self) -> chrono::NaiveDate;
}

/// Clock that reads the local system date.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> chrono::NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A flat, insertion-ordered mapping from lowercase keys to string values,
/// assembled from built-in defaults, rc files and the configuration file.
/// Later layers override earlier ones.
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    entries: IndexMap<String, String>,
    /// Trace level for parse and resolution diagnostics.
    pub verbose: u8,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value. Keys are normalized to lowercase and values are
    /// trimmed of surrounding whitespace.
    pub fn set(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.to_lowercase(), value.trim().to_string());
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|value| value.as_str())
    }

    /// Look up a value, treating an empty string as absent.
    pub fn get_nonempty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Look up a required value; the error names the missing key.
    pub fn require(&self, key: &str) -> Result<&str, PackModError> {
        self.get_nonempty(key)
            .ok_or_else(|| PackModError::MissingConfiguration {
                key: key.to_string(),
            })
    }

    /// Return true when a key holds a truthy value. Unset, empty and "0"
    /// are false; any other value is true.
    pub fn is_set(&self, key: &str) -> bool {
        match self.get(key) {
            Some(value) => !value.is_empty() && value != "0",
            None => false,
        }
    }

    /// The configured build mode.
    pub fn mode(&self) -> Result<BuildMode, PackModError> {
        BuildMode::parse(self.require(constants::MODE)?)
    }

    /// The configured build system.
    pub fn build_system(&self) -> Result<BuildSystem, PackModError> {
        BuildSystem::parse(self.require(constants::BUILDSYSTEM)?)
    }

    /// Compiler family and version, or None in a jailed environment where
    /// no compiler identity is available.
    pub fn compiler(&self) -> Option<(&str, &str)> {
        match (
            self.get_nonempty(constants::COMPILER),
            self.get_nonempty(constants::COMPILERVERSION),
        ) {
            (Some(compiler), Some(version)) => Some((compiler, version)),
            _ => None,
        }
    }

    /// MPI family and version when both are known.
    pub fn mpi(&self) -> Option<(&str, &str)> {
        match (
            self.get_nonempty(constants::MPI),
            self.get_nonempty(constants::MPIVERSION),
        ) {
            (Some(mpi), Some(version)) => Some((mpi, version)),
            _ => None,
        }
    }

    /// Validate values that parse into enums so that bad configurations
    /// fail at load time rather than at first use.
    pub fn validate(&self) -> Result<(), PackModError> {
        if let Some(mode) = self.get_nonempty(constants::MODE) {
            BuildMode::parse(mode)?;
        }
        if let Some(system) = self.get_nonempty(constants::BUILDSYSTEM) {
            BuildSystem::parse(system)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (key, value) in &self.entries {
            writeln!(f, "{key} = {value}")?;
        }
        Ok(())
    }
}
