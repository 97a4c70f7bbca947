/// Parse configuration text into a fresh, default-free Configuration.
#[allow(dead_code)]
pub fn from_string(string: &str) -> packmod::model::Configuration {
    let mut config = packmod::model::Configuration::new();
    packmod::config::parse(string, &mut config).expect("configuration parses");
    config
}

/// Create an empty per-test scratch directory below the system tmpdir.
#[allow(dead_code)]
pub fn scratch_dir(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("packmod-test-{name}"));
    let _ = std::fs::remove_dir_all(&path);
    std::fs::create_dir_all(&path).expect("scratch directory");
    path
}
