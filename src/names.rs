use std::path::{Path, PathBuf};

use crate::constants;
use crate::errors::PackModError;
use crate::model::{BuildMode, Clock, Configuration, Package, SystemClock};

static SYSTEM_CLOCK: SystemClock = SystemClock;

/// Per-subdirectory layout of an installation, as consumed by the
/// modulefile template: the prefix plus the prefix-relative lib, include
/// and bin directory names that actually exist.
#[derive(Clone, Debug)]
pub struct PackageDirs {
    pub prefix: PathBuf,
    pub lib: Option<String>,
    pub include: Option<String>,
    pub bin: Option<String>,
}

/// Derives canonical identifiers and filesystem paths from a
/// Configuration. Every operation is a pure function of the
/// configuration except for the date-stamped git version, which goes
/// through the injected Clock, and home directory creation, which is an
/// idempotent filesystem side effect.
pub struct Names<'a> {
    config: &'a Configuration,
    clock: &'a dyn Clock,
}

impl<'a> Names<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self {
            config,
            clock: &SYSTEM_CLOCK,
        }
    }

    /// Resolve against an explicit clock. Tests pin the date this way.
    pub fn with_clock(config: &'a Configuration, clock: &'a dyn Clock) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &Configuration {
        self.config
    }

    pub(crate) fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    /// Package name and version, both lowercase. The version "git"
    /// expands to git<YYYYMMDD> using the injected clock.
    pub fn package(&self) -> Result<Package, PackModError> {
        let name = self.config.require(constants::PACKAGE)?.to_lowercase();
        let mut version = self
            .config
            .require(constants::PACKAGEVERSION)?
            .to_lowercase();
        if version == constants::GIT_VERSION {
            version = format!("{}{}", constants::GIT_VERSION, self.today().format("%Y%m%d"));
        }
        Ok(Package { name, version })
    }

    /// Single system/compiler/mpi identifier. MPI identity is attached
    /// for mpi and hybrid builds only. In a jailed environment without a
    /// compiler identity this is the bare system name.
    pub fn environment_code(&self) -> Result<String, PackModError> {
        let system = self.config.require(constants::SYSTEM)?;
        let Some((compiler, compiler_version)) = self.config.compiler() else {
            return Ok(system.to_string());
        };
        let mut code = format!("{system}-{compiler}{compiler_version}");
        if self.config.mode()?.uses_mpi() {
            let mpi = self.config.require(constants::MPI)?;
            let mpi_version = self.config.require(constants::MPIVERSION)?;
            code = format!("{code}-{mpi}{mpi_version}");
        }
        Ok(code)
    }

    /// The package home directory: <packageroot>/<package> when a package
    /// root is configured, the explicit home directory otherwise.
    /// Creates the directory (single level) when absent; an existing
    /// directory is a no-op, a permission failure is fatal.
    pub fn home_dir(&self) -> Result<PathBuf, PackModError> {
        let homedir = if let Some(root) = self.config.get_nonempty(constants::PACKAGEROOT) {
            let package = self.config.require(constants::PACKAGE)?.to_lowercase();
            format!("{root}/{package}")
        } else if let Some(homedir) = self.config.get_nonempty(constants::HOMEDIR) {
            homedir.to_string()
        } else {
            return Err(PackModError::MissingConfiguration {
                key: format!("{} or {}", constants::PACKAGEROOT, constants::HOMEDIR),
            });
        };

        let path = PathBuf::from(homedir);
        if !path.is_dir() {
            if self.config.verbose > 0 {
                debug!("creating home directory: {:?}", path);
            }
            if let Err(err) = std::fs::create_dir(&path) {
                if err.kind() != std::io::ErrorKind::AlreadyExists {
                    return Err(PackModError::CreateDirectory { path, err });
                }
            }
        }
        Ok(path)
    }

    /// The directory that downloads land in: the configured download
    /// path, or the home directory.
    pub fn download_dir(&self) -> Result<PathBuf, PackModError> {
        match self.config.get_nonempty(constants::DOWNLOADPATH) {
            Some(path) => Ok(PathBuf::from(path)),
            None => self.home_dir(),
        }
    }

    /// The unpacked source directory: the explicit override, or
    /// <download dir>/<package>-<version>.
    pub fn source_dir(&self) -> Result<PathBuf, PackModError> {
        if let Some(path) = self.config.get_nonempty(constants::SRCPATH) {
            return Ok(PathBuf::from(path));
        }
        Ok(self.download_dir()?.join(self.package()?.basename()))
    }

    /// Suffix distinguishing installations of the same package and
    /// version across toolchains and variants:
    /// <version>-<environment code>[-<installext>][-<variant>].
    pub fn install_extension(&self) -> Result<String, PackModError> {
        let package = self.package()?;
        let mut extension = format!("{}-{}", package.version, self.environment_code()?);
        if let Some(extra) = self.config.get_nonempty(constants::INSTALLEXT) {
            extension = format!("{extension}-{extra}");
        }
        if let Some(variant) = self.config.get_nonempty(constants::INSTALLVARIANT) {
            extension = format!("{extension}-{variant}");
        }
        Ok(extension)
    }

    /// The out-of-source build directory:
    /// <build root>/<package>/build-<install extension>, where the build
    /// root is the first of builddirroot, packageroot and the home
    /// directory.
    pub fn build_dir(&self) -> Result<PathBuf, PackModError> {
        let root = if let Some(dir) = self.config.get_nonempty(constants::BUILDDIRROOT) {
            PathBuf::from(dir)
        } else if let Some(dir) = self.config.get_nonempty(constants::PACKAGEROOT) {
            PathBuf::from(dir)
        } else {
            self.home_dir()?
        };
        let package = self.package()?;
        Ok(root
            .join(&package.name)
            .join(format!("build-{}", self.install_extension()?)))
    }

    /// The install prefix: the explicit override, or
    /// <installroot-or-home>/installation-<module name>-<extension>,
    /// with an extra variant subdirectory when one is configured.
    pub fn prefix_dir(&self) -> Result<PathBuf, PackModError> {
        let mut prefix = if let Some(path) = self.config.get_nonempty(constants::INSTALLPATH) {
            PathBuf::from(path)
        } else {
            let root = match self.config.get_nonempty(constants::INSTALLROOT) {
                Some(dir) => PathBuf::from(dir),
                None => self.home_dir()?,
            };
            let package = self.package()?;
            let name = self
                .config
                .get_nonempty(constants::MODULENAME)
                .unwrap_or(&package.name);
            root.join(format!(
                "installation-{}-{}",
                name,
                self.install_extension()?
            ))
        };
        if let Some(variant) = self.config.get_nonempty(constants::INSTALLVARIANT) {
            prefix = prefix.join(variant);
        }
        Ok(prefix)
    }

    /// Module name and version. The name defaults to the package name
    /// and can be overridden; the version carries an optional extra
    /// suffix for re-released modulefiles.
    pub fn module_names(&self) -> Result<(String, String), PackModError> {
        let package = self.package()?;
        let mut name = self
            .config
            .get_nonempty(constants::MODULENAME)
            .unwrap_or(&package.name)
            .to_string();
        if let Some(alt) = self.config.get_nonempty(constants::MODULENAMEALT) {
            name = alt.to_string();
        }
        let mut version = package.version;
        if let Some(extra) = self.config.get_nonempty(constants::MODULEVERSIONEXTRA) {
            version = format!("{version}-{extra}");
        }
        Ok((name, version))
    }

    /// The modulefile directory and file name. The directory is either
    /// the explicit override or a mode-dependent branch of the module
    /// root; the file name is <module version>.lua.
    pub fn module_path(&self) -> Result<(PathBuf, String), PackModError> {
        let (module_name, module_version) = self.module_names()?;

        let module_dir = if let Some(dirset) = self.config.get_nonempty(constants::MODULEDIR) {
            PathBuf::from(dirset)
        } else {
            let root = self.config.require(constants::MODULEROOT)?;
            let branch = match self.config.mode()? {
                BuildMode::Core => "Core".to_string(),
                BuildMode::Mpi | BuildMode::Hybrid => {
                    let compiler = self.config.require(constants::COMPILER)?;
                    let compiler_version = self.config.require(constants::COMPILERVERSION)?;
                    let mpi = self.config.require(constants::MPI)?;
                    let mpi_version = self.config.require(constants::MPIVERSION)?;
                    format!("MPI/{compiler}/{compiler_version}/{mpi}/{mpi_version}")
                }
                BuildMode::Seq | BuildMode::Omp => {
                    let compiler = self.config.require(constants::COMPILER)?;
                    let compiler_version = self.config.require(constants::COMPILERVERSION)?;
                    format!("Compiler/{compiler}/{compiler_version}")
                }
            };
            PathBuf::from(format!("{root}/{branch}"))
        };

        Ok((module_dir.join(module_name), format!("{module_version}.lua")))
    }

    /// Locate the lib/include/bin subdirectories of the prefix, returning
    /// their prefix-relative names. lib64 is preferred over lib. The
    /// nolib/noinc keys waive the corresponding directory; hasbin
    /// requires bin to exist.
    pub fn package_dirs(&self) -> Result<PackageDirs, PackModError> {
        let prefix = self.prefix_dir()?;

        let lib = if self.config.is_set(constants::NOLIB) {
            None
        } else {
            Some(
                ["lib64", "lib"]
                    .into_iter()
                    .find(|name| prefix.join(name).is_dir())
                    .map(|name| name.to_string())
                    .ok_or_else(|| PackModError::MissingDirectory {
                        path: prefix.join("lib"),
                    })?,
            )
        };

        let include = if self.config.is_set(constants::NOINC) {
            None
        } else {
            Some(existing_subdir(&prefix, "include")?)
        };

        let bin = if self.config.is_set(constants::HASBIN) {
            Some(existing_subdir(&prefix, "bin")?)
        } else {
            None
        };

        Ok(PackageDirs {
            prefix,
            lib,
            include,
            bin,
        })
    }

    /// The name of the logfile for one build stage:
    /// <stage>_<version>_<compiler>-<compilerversion>[_<mpi>-<mpiversion>].log
    pub fn logfile_name(&self, stage: &str) -> Result<String, PackModError> {
        let package = self.package()?;
        let mut name = format!("{stage}_{}", package.version);
        if let Some((compiler, compiler_version)) = self.config.compiler() {
            name = format!("{name}_{compiler}-{compiler_version}");
        }
        if self.config.mode()?.uses_mpi() {
            let mpi = self.config.require(constants::MPI)?;
            let mpi_version = self.config.require(constants::MPIVERSION)?;
            name = format!("{name}_{mpi}-{mpi_version}");
        }
        Ok(format!("{name}.log"))
    }
}

fn existing_subdir(prefix: &Path, name: &str) -> Result<String, PackModError> {
    if prefix.join(name).is_dir() {
        Ok(name.to_string())
    } else {
        Err(PackModError::MissingDirectory {
            path: prefix.join(name),
        })
    }
}
