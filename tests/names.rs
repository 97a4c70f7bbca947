mod common;

use function_name::named;

use packmod::errors::PackModError;
use packmod::model::{Clock, Configuration};
use packmod::names::Names;

struct FixedClock(chrono::NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> chrono::NaiveDate {
        self.0
    }
}

fn fixed_clock() -> FixedClock {
    FixedClock(chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
}

/// A sequential fftw build on frontera with intel 19.
fn seq_config() -> Configuration {
    let mut cfg = Configuration::new();
    cfg.set("package", "fftw");
    cfg.set("packageversion", "3.3.10");
    cfg.set("system", "frontera");
    cfg.set("compiler", "intel");
    cfg.set("compilerversion", "19");
    cfg.set("mode", "seq");
    cfg
}

fn mpi_config() -> Configuration {
    let mut cfg = seq_config();
    cfg.set("mode", "mpi");
    cfg.set("mpi", "impi");
    cfg.set("mpiversion", "21");
    cfg
}

#[test]
fn package_identity_is_lowercase() {
    let mut cfg = seq_config();
    cfg.set("package", "FFTW");
    cfg.set("packageversion", "3.3.10-RC1");
    let package = Names::new(&cfg).package().unwrap();
    assert_eq!("fftw", package.name);
    assert_eq!("3.3.10-rc1", package.version);
}

#[test]
fn git_version_expands_with_clock() {
    let mut cfg = seq_config();
    cfg.set("packageversion", "git");
    let clock = fixed_clock();
    let package = Names::with_clock(&cfg, &clock).package().unwrap();
    assert_eq!("git20240102", package.version);
}

#[test]
fn missing_package_names_the_key() {
    let mut cfg = seq_config();
    cfg.set("package", "");
    match Names::new(&cfg).package() {
        Err(PackModError::MissingConfiguration { key }) => assert_eq!("package", key),
        other => panic!("expected a missing-configuration error, got {other:?}"),
    }
}

#[test]
fn environment_code_sequential() {
    let cfg = seq_config();
    assert_eq!("frontera-intel19", Names::new(&cfg).environment_code().unwrap());
}

#[test]
fn environment_code_mpi() {
    let cfg = mpi_config();
    assert_eq!(
        "frontera-intel19-impi21",
        Names::new(&cfg).environment_code().unwrap()
    );
}

/// Without a compiler identity the code degrades to the system name.
#[test]
fn environment_code_jailed() {
    let mut cfg = seq_config();
    cfg.set("compiler", "");
    cfg.set("compilerversion", "");
    assert_eq!("frontera", Names::new(&cfg).environment_code().unwrap());
}

#[test]
fn environment_code_requires_system() {
    let mut cfg = seq_config();
    cfg.set("system", "");
    match Names::new(&cfg).environment_code() {
        Err(PackModError::MissingConfiguration { key }) => assert_eq!("system", key),
        other => panic!("expected a missing-configuration error, got {other:?}"),
    }
}

/// Identical toolchain tuples give identical extensions; any difference
/// in compiler, MPI or variant changes the extension.
#[test]
fn install_extension_distinguishes_toolchains() {
    let seq = Names::new(&seq_config()).install_extension().unwrap();
    let seq_again = Names::new(&seq_config()).install_extension().unwrap();
    assert_eq!(seq, seq_again);

    let mut gcc = seq_config();
    gcc.set("compiler", "gcc");
    let mut variant = seq_config();
    variant.set("installvariant", "static");
    let mpi = mpi_config();

    let mut extensions = vec![
        seq,
        Names::new(&gcc).install_extension().unwrap(),
        Names::new(&variant).install_extension().unwrap(),
        Names::new(&mpi).install_extension().unwrap(),
    ];
    extensions.sort();
    extensions.dedup();
    assert_eq!(4, extensions.len());
}

#[test]
fn install_extension_carries_extra_component() {
    let mut cfg = seq_config();
    cfg.set("installext", "mkl");
    assert_eq!(
        "3.3.10-frontera-intel19-mkl",
        Names::new(&cfg).install_extension().unwrap()
    );
}

#[test]
fn build_dir_from_packageroot() {
    let mut cfg = seq_config();
    cfg.set("packageroot", "/scratch/me");
    assert_eq!(
        std::path::PathBuf::from("/scratch/me/fftw/build-3.3.10-frontera-intel19"),
        Names::new(&cfg).build_dir().unwrap()
    );
}

#[test]
fn build_dir_prefers_builddirroot() {
    let mut cfg = seq_config();
    cfg.set("packageroot", "/scratch/me");
    cfg.set("builddirroot", "/dev/shm/me");
    assert!(Names::new(&cfg)
        .build_dir()
        .unwrap()
        .starts_with("/dev/shm/me"));
}

#[named]
#[test]
fn home_dir_is_created_idempotently() {
    let scratch = common::scratch_dir(function_name!());
    let mut cfg = seq_config();
    cfg.set("packageroot", &scratch.display().to_string());

    let names = Names::new(&cfg);
    let first = names.home_dir().unwrap();
    assert_eq!(scratch.join("fftw"), first);
    assert!(first.is_dir());
    // A second call sees the existing directory and succeeds.
    assert_eq!(first, names.home_dir().unwrap());
}

#[test]
fn home_dir_requires_a_root_or_homedir() {
    let cfg = seq_config();
    match Names::new(&cfg).home_dir() {
        Err(PackModError::MissingConfiguration { key }) => {
            assert!(key.contains("packageroot"));
            assert!(key.contains("homedir"));
        }
        other => panic!("expected a missing-configuration error, got {other:?}"),
    }
}

#[test]
fn home_dir_permission_failure_is_distinct() {
    let mut cfg = seq_config();
    cfg.set("packageroot", "/proc/packmod-denied");
    assert!(matches!(
        Names::new(&cfg).home_dir(),
        Err(PackModError::CreateDirectory { .. })
    ));
}

#[test]
fn source_dir_override_wins() {
    let mut cfg = seq_config();
    cfg.set("srcpath", "/tmp/fftw-src");
    assert_eq!(
        std::path::PathBuf::from("/tmp/fftw-src"),
        Names::new(&cfg).source_dir().unwrap()
    );
}

#[named]
#[test]
fn source_dir_below_home() {
    let scratch = common::scratch_dir(function_name!());
    let mut cfg = seq_config();
    cfg.set("packageroot", &scratch.display().to_string());
    assert_eq!(
        scratch.join("fftw").join("fftw-3.3.10"),
        Names::new(&cfg).source_dir().unwrap()
    );
}

#[test]
fn prefix_dir_from_installroot() {
    let mut cfg = seq_config();
    cfg.set("installroot", "/apps");
    assert_eq!(
        std::path::PathBuf::from("/apps/installation-fftw-3.3.10-frontera-intel19"),
        Names::new(&cfg).prefix_dir().unwrap()
    );
}

#[test]
fn prefix_dir_uses_module_name_and_variant() {
    let mut cfg = seq_config();
    cfg.set("installroot", "/apps");
    cfg.set("modulename", "fftw3");
    cfg.set("installvariant", "static");
    assert_eq!(
        std::path::PathBuf::from(
            "/apps/installation-fftw3-3.3.10-frontera-intel19-static/static"
        ),
        Names::new(&cfg).prefix_dir().unwrap()
    );
}

#[test]
fn prefix_dir_override_wins() {
    let mut cfg = seq_config();
    cfg.set("installpath", "/apps/fftw-custom");
    assert_eq!(
        std::path::PathBuf::from("/apps/fftw-custom"),
        Names::new(&cfg).prefix_dir().unwrap()
    );
}

#[test]
fn module_path_core() {
    let mut cfg = seq_config();
    cfg.set("moduleroot", "/modules");
    cfg.set("mode", "core");
    let (dir, file) = Names::new(&cfg).module_path().unwrap();
    assert_eq!(std::path::PathBuf::from("/modules/Core/fftw"), dir);
    assert_eq!("3.3.10.lua", file);
}

#[test]
fn module_path_compiler_branch() {
    for mode in ["seq", "omp"] {
        let mut cfg = seq_config();
        cfg.set("moduleroot", "/modules");
        cfg.set("mode", mode);
        let (dir, _) = Names::new(&cfg).module_path().unwrap();
        assert_eq!(std::path::PathBuf::from("/modules/Compiler/intel/19/fftw"), dir);
    }
}

#[test]
fn module_path_mpi_branch() {
    for mode in ["mpi", "hybrid"] {
        let mut cfg = mpi_config();
        cfg.set("moduleroot", "/modules");
        cfg.set("mode", mode);
        let (dir, _) = Names::new(&cfg).module_path().unwrap();
        assert_eq!(
            std::path::PathBuf::from("/modules/MPI/intel/19/impi/21/fftw"),
            dir
        );
    }
}

#[test]
fn module_path_honors_moduledir_override() {
    let mut cfg = seq_config();
    cfg.set("moduledir", "/jail/modules");
    let (dir, file) = Names::new(&cfg).module_path().unwrap();
    assert_eq!(std::path::PathBuf::from("/jail/modules/fftw"), dir);
    assert_eq!("3.3.10.lua", file);
}

#[test]
fn module_path_requires_moduleroot() {
    let cfg = seq_config();
    match Names::new(&cfg).module_path() {
        Err(PackModError::MissingConfiguration { key }) => assert_eq!("moduleroot", key),
        other => panic!("expected a missing-configuration error, got {other:?}"),
    }
}

#[test]
fn unsupported_mode_is_fatal() {
    let mut cfg = seq_config();
    cfg.set("moduleroot", "/modules");
    cfg.set("mode", "fast");
    assert!(matches!(
        Names::new(&cfg).module_path(),
        Err(PackModError::UnsupportedMode { .. })
    ));
}

#[test]
fn module_version_carries_extra_suffix() {
    let mut cfg = seq_config();
    cfg.set("moduledir", "/jail/modules");
    cfg.set("moduleversionextra", "hpc");
    let (_, file) = Names::new(&cfg).module_path().unwrap();
    assert_eq!("3.3.10-hpc.lua", file);
}

#[test]
fn logfile_name_sequential() {
    let cfg = seq_config();
    assert_eq!(
        "configure_3.3.10_intel-19.log",
        Names::new(&cfg).logfile_name("configure").unwrap()
    );
}

#[test]
fn logfile_name_mpi() {
    let cfg = mpi_config();
    assert_eq!(
        "build_3.3.10_intel-19_impi-21.log",
        Names::new(&cfg).logfile_name("build").unwrap()
    );
}
