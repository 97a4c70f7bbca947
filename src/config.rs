use indexmap::IndexMap;

use crate::constants;
use crate::errors::PackModError;
use crate::model;

/// Whether a committed value binds a macro or a configuration entry.
#[derive(Clone, Copy)]
enum Binding {
    Macro,
    Entry,
}

/// Built-in configuration defaults: the recognized environment variables
/// plus the default build system and mode. Environment values seed the
/// lowercased key; later layers (rc files, the configuration file)
/// override them.
pub fn defaults() -> model::Configuration {
    let mut cfg = model::Configuration::new();
    cfg.set(constants::BUILDSYSTEM, constants::DEFAULT_BUILD_SYSTEM);
    cfg.set(constants::MODE, constants::DEFAULT_MODE);
    for name in constants::ENVIRONMENT_OPTIONS {
        if let Ok(value) = std::env::var(name) {
            if !value.is_empty() {
                cfg.set(&name.to_lowercase(), &value);
            }
        }
    }
    cfg
}

/// Optional rc files in the home directory, least specific first so that
/// the most specific file wins: system, compiler, system-compiler.
fn rc_paths(cfg: &model::Configuration) -> Vec<std::path::PathBuf> {
    let Some(home) = dirs::home_dir() else {
        return Vec::new();
    };
    let system = cfg.get_nonempty(constants::SYSTEM);
    let compiler = cfg.get_nonempty(constants::COMPILER);

    let mut names = Vec::new();
    if let Some(system) = system {
        names.push(format!("{}-{}", constants::RC_PREFIX, system));
    }
    if let Some(compiler) = compiler {
        names.push(format!("{}-{}", constants::RC_PREFIX, compiler));
    }
    if let (Some(system), Some(compiler)) = (system, compiler) {
        names.push(format!("{}-{}-{}", constants::RC_PREFIX, system, compiler));
    }

    names.into_iter().map(|name| home.join(name)).collect()
}

/// Read the full configuration: built-in defaults, then any rc files,
/// then the main configuration file. A missing rc file is skipped; a
/// missing configuration file is fatal.
pub fn read_config(
    path: &std::path::Path,
    verbose: u8,
) -> Result<model::Configuration, PackModError> {
    let mut cfg = defaults();
    cfg.verbose = verbose;

    for rc_path in rc_paths(&cfg) {
        if !rc_path.exists() {
            continue;
        }
        if verbose > 0 {
            debug!("reading rc file: {:?}", rc_path);
        }
        let content = std::fs::read_to_string(&rc_path).map_err(|err| PackModError::ReadFile {
            path: rc_path.clone(),
            err,
        })?;
        parse(&content, &mut cfg)?;
    }

    if verbose > 0 {
        debug!("reading configuration: {:?}", path);
    }
    let content = std::fs::read_to_string(path).map_err(|err| PackModError::ReadFile {
        path: path.to_path_buf(),
        err,
    })?;
    parse(&content, &mut cfg)?;

    cfg.validate()?;

    Ok(cfg)
}

/// Parse configuration text into an existing Configuration.
///
/// Grammar per trimmed physical line:
/// - `# ...` and blank lines are skipped.
/// - `let NAME = VALUE` binds macro NAME.
/// - `KEY = VALUE` stores a configuration entry under the lowercased key.
/// - any other line extends the pending value while a continuation is
///   open, and is a fatal parse error otherwise.
///
/// A value ending in a backslash drops the backslash and defers its
/// commit until a non-continued line is produced. At commit time an
/// environment variable named exactly like the key, when set and
/// non-empty, replaces the raw value; macro substitution then runs over
/// the result.
pub fn parse(content: &str, cfg: &mut model::Configuration) -> Result<(), PackModError> {
    let mut macros: IndexMap<String, String> = IndexMap::new();
    let mut binding = Binding::Entry;
    let mut key = String::new();
    let mut value = String::new();
    let mut saving = false;

    for raw_line in content.lines() {
        let line = raw_line.trim();
        if line.starts_with('#') || line.is_empty() {
            continue;
        }
        if let Some((name, expr)) = split_macro(line) {
            binding = Binding::Macro;
            key = name;
            value = expr;
        } else if let Some((name, expr)) = split_assignment(line) {
            binding = Binding::Entry;
            key = name;
            value = expr;
        } else if saving {
            // The key is inherited from the previous iteration and the
            // pending value is extended with the current line.
            if cfg.verbose > 1 {
                debug!(" .. building up key={} with: {}", key, line);
            }
            value.push_str(line);
        } else {
            return Err(PackModError::Parse {
                line: line.to_string(),
            });
        }

        if let Some(stripped) = value.strip_suffix('\\') {
            // The possibly compounded value is still to be continued.
            value = stripped.to_string();
            saving = true;
            continue;
        }
        saving = false;

        commit(cfg, &mut macros, binding, &key, &value);
    }

    Ok(())
}

/// Commit a finished value: apply the environment override, expand
/// macros, and store the result in the macro table or the configuration.
fn commit(
    cfg: &mut model::Configuration,
    macros: &mut IndexMap<String, String>,
    binding: Binding,
    key: &str,
    value: &str,
) {
    // The override replaces the raw right-hand side before macro
    // expansion; the same policy applies to macros and plain entries.
    let raw = match std::env::var(key) {
        Ok(env_value) if !env_value.is_empty() => env_value,
        _ => value.to_string(),
    };
    let expanded = expand_macros(&raw, macros);

    match binding {
        Binding::Macro => {
            if cfg.verbose > 0 {
                debug!("macro: {} = {}", key, expanded);
            }
            macros.insert(key.to_string(), expanded);
        }
        Binding::Entry => {
            if cfg.verbose > 0 {
                debug!("setting: {} = {}", key.to_lowercase(), expanded);
            }
            cfg.set(key, &expanded);
        }
    }
}

/// Substitute every known `${NAME}` macro into a value, in macro
/// insertion order, using the table's current contents. A single textual
/// pass; substitution is a no-op once no markers match known macros.
pub fn expand_macros(value: &str, macros: &IndexMap<String, String>) -> String {
    let mut result = value.trim().to_string();
    for (name, replacement) in macros {
        result = result.replace(&format!("${{{name}}}"), replacement);
    }
    result
}

/// Split a `KEY = VALUE` line. Keys are alphanumeric/underscore words;
/// anything else is not an assignment.
fn split_assignment(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some((key.to_string(), value.trim().to_string()))
}

/// Split a `let NAME = VALUE` macro declaration.
fn split_macro(line: &str) -> Option<(String, String)> {
    let rest = line.strip_prefix("let")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    split_assignment(rest.trim_start())
}
