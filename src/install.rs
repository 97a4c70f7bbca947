use anyhow::{Context, Result};

use crate::cmd;
use crate::constants;
use crate::display;
use crate::errors::PackModError;
use crate::model::{BuildSystem, Configuration};
use crate::modules;
use crate::names::Names;

/// Configure the package with its configured build system.
pub fn configure(cfg: &Configuration) -> Result<()> {
    match cfg.build_system()? {
        BuildSystem::Cmake => cmake_configure(cfg),
        BuildSystem::Autotools => autotools_configure(cfg),
    }
}

/// Build and install the package with its configured build system.
pub fn build(cfg: &Configuration) -> Result<()> {
    match cfg.build_system()? {
        BuildSystem::Cmake => cmake_build(cfg),
        BuildSystem::Autotools => autotools_build(cfg),
    }
}

/// Run cmake in a freshly wiped out-of-source build directory.
fn cmake_configure(cfg: &Configuration) -> Result<()> {
    modules::test_modules(cfg)?;

    let names = Names::new(cfg);
    let source_dir = names.source_dir()?;
    let build_dir = names.build_dir()?;
    let prefix_dir = names.prefix_dir()?;
    if cfg.verbose > 0 {
        display::print_path("srcdir", &source_dir);
        display::print_path("builddir", &build_dir);
        display::print_path("prefixdir", &prefix_dir);
    }

    // Stale build trees poison cmake caches; start from scratch.
    rm_rf::ensure_removed(&build_dir)
        .with_context(|| format!("unable to remove build directory {build_dir:?}"))?;
    std::fs::create_dir_all(&build_dir)
        .with_context(|| format!("unable to create build directory {build_dir:?}"))?;

    let mut command: Vec<String> = vec![cfg
        .get_nonempty(constants::CMAKENAME)
        .unwrap_or("cmake")
        .to_string()];
    if cfg.is_set(constants::CMAKEUSENINJA) {
        command.extend(["-G".to_string(), "Ninja".to_string()]);
    }
    command.push(format!("-DCMAKE_INSTALL_PREFIX={}", prefix_dir.display()));
    command.push("-DCMAKE_COMPILE_WARNING_AS_ERROR=OFF".to_string());
    command.push("-DCMAKE_POLICY_VERSION_MINIMUM=3.13".to_string());
    command.push("-DCMAKE_VERBOSE_MAKEFILE=ON".to_string());

    let shared_libs = if cfg.is_set(constants::BUILDSTATICLIBS) {
        "OFF"
    } else {
        "ON"
    };
    command.push(format!("-DBUILD_SHARED_LIBS={shared_libs}"));

    let default_build_type = if cfg.is_set(constants::CMAKEBUILDDEBUG) {
        "Debug"
    } else {
        "RelWithDebInfo"
    };
    let build_type = cfg
        .get_nonempty(constants::CMAKEBUILDTYPE)
        .unwrap_or(default_build_type);
    command.push(format!("-DCMAKE_BUILD_TYPE={build_type}"));

    if let Some(standard) = cfg.get_nonempty(constants::CPPSTANDARD) {
        command.push(format!("-DCMAKE_CXX_FLAGS=-std=c++{standard}"));
    }

    match cfg.get_nonempty(constants::CMAKESOURCE) {
        Some(subdir) => {
            // The CMakeLists.txt lives below the top of the source tree.
            command.extend([
                "-S".to_string(),
                source_dir.join(subdir).display().to_string(),
                "-B".to_string(),
                build_dir.display().to_string(),
            ]);
        }
        None => command.push(source_dir.display().to_string()),
    }

    cmd::run_in_dir(&command, &build_dir)?;
    Ok(())
}

/// Run make and make install in the build directory.
fn cmake_build(cfg: &Configuration) -> Result<()> {
    let names = Names::new(cfg);
    let build_dir = names.build_dir()?;

    let jcount = cfg.get_nonempty(constants::JCOUNT).unwrap_or("6");
    let make = |target: &str| -> Vec<String> {
        let mut command = vec![
            "make".to_string(),
            "--no-print-directory".to_string(),
            "V=1".to_string(),
            "VERBOSE=1".to_string(),
            "-j".to_string(),
            jcount.to_string(),
        ];
        command.extend(target.split_whitespace().map(String::from));
        command
    };

    let target = cfg.get_nonempty(constants::MAKEBUILDTARGET).unwrap_or("");
    cmd::run_in_dir(&make(target), &build_dir)?;
    if let Some(extra) = cfg.get_nonempty(constants::EXTRABUILDTARGETS) {
        cmd::run_in_dir(&make(extra), &build_dir)?;
    }

    if !cfg.is_set(constants::NOINSTALL) {
        cmd::run_in_dir(&make("install"), &build_dir)?;
        if let Some(extra) = cfg.get_nonempty(constants::EXTRAINSTALLTARGETS) {
            cmd::run_in_dir(&make(extra), &build_dir)?;
        }
    }

    Ok(())
}

fn autotools_configure(_cfg: &Configuration) -> Result<()> {
    // TODO: drive configure/autoreconf; only cmake packages need packmod
    // so far.
    Ok(())
}

fn autotools_build(_cfg: &Configuration) -> Result<()> {
    Ok(())
}

/// Generate the modulefile and write it into the module tree.
pub fn write_module_file(cfg: &Configuration) -> Result<()> {
    let names = Names::new(cfg);
    let (module_dir, file_name) = names.module_path()?;
    let text = modules::module_file_text(&names)?;

    std::fs::create_dir_all(&module_dir)
        .with_context(|| format!("unable to create module directory {module_dir:?}"))?;
    let module_file = module_dir.join(file_name);
    display::echo(&format!("writing modulefile: {}", module_file.display()));
    std::fs::write(&module_file, text).map_err(|err| PackModError::WriteFile {
        path: module_file.clone(),
        err,
    })?;

    Ok(())
}
