use std::fmt::Write as _;

use crate::cmd;
use crate::constants;
use crate::errors::PackModError;
use crate::model::Configuration;
use crate::names::Names;

/// Environment variable advertising a loaded module's prefix directory.
fn dir_variable(name: &str) -> String {
    format!("{}_{}_DIR", constants::ENV_VAR_PREFIX, name.to_uppercase())
}

/// Environment variable advertising a loaded module's version.
fn version_variable(name: &str) -> String {
    format!("{}_{}_VERSION", constants::ENV_VAR_PREFIX, name.to_uppercase())
}

/// Verify that every prerequisite module named in the "modules" key is
/// loaded: its DIR variable must be set and point at an existing
/// directory, and a requested version must match the loaded one. All
/// failures are reported before aborting.
pub fn test_modules(cfg: &Configuration) -> Result<(), PackModError> {
    let Some(modules) = cfg.get_nonempty(constants::MODULES) else {
        if cfg.verbose > 0 {
            debug!("no prerequisite modules");
        }
        return Ok(());
    };

    let mut missing: Vec<String> = Vec::new();
    for entry in modules.split_whitespace() {
        let (name, version) = entry.split_once('/').unwrap_or((entry, ""));
        let name = name.to_lowercase();
        if matches!(name.as_str(), "mkl" | "nvpl") {
            // no proper test for mkl/nvpl
            continue;
        }
        if cfg.verbose > 0 {
            debug!("test presence of module={} version={}", name, version);
        }

        let dir = std::env::var(dir_variable(&name)).unwrap_or_default();
        if dir.is_empty() {
            error!("please load module: {}", name);
            missing.push(entry.to_string());
            continue;
        }
        if !std::path::Path::new(&dir).is_dir() {
            error!("module {} loaded but directory not found: {}", name, dir);
            missing.push(entry.to_string());
            continue;
        }
        if cfg.verbose > 0 {
            debug!(" .. module {} is at: {}", name, dir);
            if let Some(location) = cmd::capture_shell(&format!("module -t show {name}")) {
                debug!(" .. module {} loaded from: {}", name, location);
            }
        }

        if !version.is_empty() {
            if let Ok(loaded) = std::env::var(version_variable(&name)) {
                if !version_satisfies(&loaded, version) {
                    error!(
                        "loaded version {} of {} does not match requested {}",
                        loaded, name, version
                    );
                    missing.push(entry.to_string());
                }
            }
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PackModError::ModulePrerequisite {
            module: missing.join(", "),
        })
    }
}

/// A loaded version satisfies a request when it matches exactly or
/// refines it with further dot components.
fn version_satisfies(loaded: &str, wanted: &str) -> bool {
    loaded == wanted || loaded.starts_with(&format!("{wanted}."))
}

/// The complete modulefile text: help block, whatis metadata, variable
/// settings, path prepends and dependency declarations.
pub fn module_file_text(names: &Names) -> Result<String, PackModError> {
    Ok(format!(
        "{}\n\n{}\n\n{}\n\n{}\n{}",
        help_text(names)?,
        whatis_text(names)?,
        path_settings_text(names)?,
        system_paths_text(names)?,
        dependencies_text(names)?,
    ))
}

/// The "local helpMsg" block shown by "module help".
pub fn help_text(names: &Names) -> Result<String, PackModError> {
    let cfg = names.config();
    let package = names.package()?;

    let mut about = cfg.require(constants::ABOUT)?.to_string();
    about.push('\n');
    if let Some(notes) = cfg.get_nonempty(constants::MODULENOTES) {
        let _ = writeln!(about, "Notes: {notes}");
    }
    if let Some(url) = cfg.get_nonempty(constants::URL) {
        let _ = writeln!(about, "Homepage: {url}");
    }
    if let Some(software) = cfg.get_nonempty(constants::SOFTWAREURL) {
        let _ = writeln!(about, "Software: {software}");
    }

    let dirs = names.package_dirs()?;
    let mut variables = dir_variable(&package.name);
    if dirs.lib.is_some() {
        let _ = write!(variables, ", {}_{}_LIB", constants::ENV_VAR_PREFIX, package.name.to_uppercase());
    }
    if dirs.include.is_some() {
        let _ = write!(variables, ", {}_{}_INC", constants::ENV_VAR_PREFIX, package.name.to_uppercase());
    }
    if dirs.bin.is_some() {
        let _ = write!(variables, ", {}_{}_BIN", constants::ENV_VAR_PREFIX, package.name.to_uppercase());
    }

    let mut notes = String::new();
    if cfg.is_set(constants::PREFIXPATHSET) {
        notes.push_str("Discoverable by CMake through find_package.\n");
    }
    if cfg.get_nonempty(constants::PKGCONFIG).is_some()
        || cfg.get_nonempty(constants::PKGCONFIGLIB).is_some()
    {
        notes.push_str("Discoverable by CMake through pkg-config.\n");
    }
    let _ = write!(notes, "\n(modulefile generated {})", names.today());

    Ok(format!(
        "\
local helpMsg = [[
Package: {package}

{about}
The {name} modulefile defines the following variables:
    {variables}.
{notes}
]]",
        package = package,
        about = about,
        name = package.name,
        variables = variables,
        notes = notes,
    ))
}

/// The whatis name/version metadata lines.
pub fn whatis_text(names: &Names) -> Result<String, PackModError> {
    let package = names.package()?;
    let (_, module_version) = names.module_names()?;
    Ok(format!(
        "whatis( \"Name:\",   \"{}\" )\nwhatis( \"Version\", \"{}\" )",
        package.name, module_version
    ))
}

/// setenv statements for the DIR/VERSION/LIB/INC/BIN variables, emitted
/// for the module name and, when configured, the alternate name.
pub fn path_settings_text(names: &Names) -> Result<String, PackModError> {
    let cfg = names.config();
    let package = names.package()?;
    let (_, module_version) = names.module_names()?;
    let dirs = names.package_dirs()?;

    let primary = cfg
        .get_nonempty(constants::MODULENAME)
        .unwrap_or(&package.name)
        .to_string();
    let alternate = cfg
        .get_nonempty(constants::MODULENAMEALT)
        .map(|name| name.to_lowercase());

    let mut text = format!("local prefixdir = \"{}\"\n", dirs.prefix.display());
    let mut module_names = vec![primary];
    module_names.extend(alternate);
    for name in &module_names {
        let _ = writeln!(
            text,
            "setenv( \"{}\", \"{}\" )",
            version_variable(name),
            module_version
        );
        let _ = writeln!(text, "setenv( \"{}\", prefixdir )", dir_variable(name));
    }
    for name in &module_names {
        let upper = name.to_uppercase();
        for (suffix, subdir) in [
            ("INC", &dirs.include),
            ("LIB", &dirs.lib),
            ("BIN", &dirs.bin),
        ] {
            if let Some(subdir) = subdir {
                let _ = writeln!(
                    text,
                    "setenv( \"{}_{}_{}\", pathJoin( prefixdir,\"{}\" ) )",
                    constants::ENV_VAR_PREFIX,
                    upper,
                    suffix,
                    subdir
                );
            }
        }
    }

    Ok(text.trim_end().to_string())
}

/// prepend_path statements wiring the installation into the loading
/// user's search paths.
pub fn system_paths_text(names: &Names) -> Result<String, PackModError> {
    let cfg = names.config();
    let dirs = names.package_dirs()?;

    let mut text = String::new();
    if let Some(include) = &dirs.include {
        let _ = writeln!(
            text,
            "prepend_path( \"INCLUDE\", pathJoin( prefixdir,\"{include}\" ) )"
        );
    }
    if let Some(lib) = &dirs.lib {
        let _ = writeln!(
            text,
            "prepend_path( \"LD_LIBRARY_PATH\", pathJoin( prefixdir,\"{lib}\" ) )"
        );
    }
    if let Some(bin) = &dirs.bin {
        let _ = writeln!(
            text,
            "prepend_path( \"PATH\", pathJoin( prefixdir,\"{bin}\" ) )"
        );
    }
    for key in [constants::PKGCONFIG, constants::PKGCONFIGLIB] {
        if let Some(path) = cfg.get_nonempty(key) {
            let _ = writeln!(
                text,
                "prepend_path( \"PKG_CONFIG_PATH\", pathJoin( prefixdir,\"{path}\" ) )"
            );
        }
    }
    if cfg.is_set(constants::PREFIXPATHSET) {
        let _ = writeln!(text, "prepend_path( \"CMAKE_PREFIX_PATH\", prefixdir )");
    }
    if let Some(path) = cfg.get_nonempty(constants::PYTHONPATHABS) {
        let _ = writeln!(text, "prepend_path( \"PYTHONPATH\", \"{path}\" )");
    }
    if let Some(path) = cfg.get_nonempty(constants::PYTHONPATHREL) {
        let _ = writeln!(
            text,
            "prepend_path( \"PYTHONPATH\", pathJoin( prefixdir,\"{path}\" ) )"
        );
    }

    Ok(text.trim_end().to_string())
}

/// depends_on and family declarations.
pub fn dependencies_text(names: &Names) -> Result<String, PackModError> {
    let cfg = names.config();
    let mut text = String::new();

    if let Some(prerequisites) = cfg.get_nonempty(constants::DEPENDSON) {
        for dependency in prerequisites.split_whitespace() {
            let _ = writeln!(text, "depends_on( \"{dependency}\" )");
        }
    }
    if let Some(current) = cfg.get_nonempty(constants::DEPENDSONCURRENT) {
        // Pin the dependency to the version that is loaded right now.
        let version = std::env::var(version_variable(current)).map_err(|_| {
            PackModError::ModulePrerequisite {
                module: current.to_string(),
            }
        })?;
        let _ = writeln!(text, "depends_on( \"{current}/{version}\" )");
    }
    if let Some(family) = cfg.get_nonempty(constants::FAMILY) {
        let _ = writeln!(text, "family( \"{family}\" )");
    }

    Ok(text)
}
