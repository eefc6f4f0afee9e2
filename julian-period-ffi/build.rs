use std::env;
use std::fs;
use std::path::PathBuf;

/// Generates `julian_period_ffi.h` from the exported `extern "C"` items.
///
/// A failed generation is reported as a cargo warning rather than failing
/// the build, so the Rust library and its tests still compile when the
/// header cannot be produced.
fn main() {
    println!("cargo:rerun-if-changed=cbindgen.toml");
    println!("cargo:rerun-if-changed=src");

    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let header = format!("{}.h", env::var("CARGO_PKG_NAME").unwrap().replace('-', "_"));

    let config = cbindgen::Config::from_root_or_default(&crate_dir);
    let bindings = match cbindgen::generate_with_config(&crate_dir, config) {
        Ok(bindings) => bindings,
        Err(err) => {
            println!("cargo:warning=C header {header} not generated: {err}");
            return;
        }
    };

    bindings.write_to_file(out_dir.join(&header));

    let include_dir = crate_dir.join("include");
    match fs::create_dir_all(&include_dir) {
        Ok(()) => {
            bindings.write_to_file(include_dir.join(&header));
        }
        Err(err) => println!("cargo:warning=cannot create {}: {err}", include_dir.display()),
    }
}
