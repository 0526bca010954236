//! Build script for compiling protobuf definitions.

use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .file_descriptor_set_path(out_dir.join("johnjud_descriptor.bin"))
        .compile_protos(
            &[
                "../../proto/pet.proto",
                "../../proto/like.proto",
                "../../proto/image.proto",
                "../../proto/health.proto",
            ],
            &["../../proto"],
        )?;

    // Rerun if proto files change
    println!("cargo:rerun-if-changed=../../proto/");

    Ok(())
}
