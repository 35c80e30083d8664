use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let include_dir = PathBuf::from(&crate_dir).join("include");
    fs::create_dir_all(&include_dir).expect("Unable to create include directory");

    // C header for the isa_* functions, shipped next to the library sources
    cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("ISA_ATMOS_H")
        .with_documentation(true)
        .generate()
        .expect("Unable to generate C bindings")
        .write_to_file(include_dir.join("isa_atmos.h"));

    for source in ["lib.rs", "state.rs", "error.rs"] {
        println!("cargo:rerun-if-changed=src/{source}");
    }
}
