use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

fn main() {
    println!("cargo:rerun-if-changed={}", CONFIG_FILE);

    let source = Path::new(CONFIG_FILE);
    if !source.exists() {
        return;
    }

    // OUT_DIR is target/<profile>/build/<pkg>/out; the binary lives in target/<profile>
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR"));
    let Some(profile_dir) = out_dir.ancestors().nth(3) else {
        return;
    };

    if let Err(err) = fs::copy(source, profile_dir.join(CONFIG_FILE)) {
        println!("cargo:warning=could not copy {}: {}", CONFIG_FILE, err);
    }
}
