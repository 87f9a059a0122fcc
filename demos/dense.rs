//! A denser field: three times as many particles per unit area, with a
//! tighter connection radius so the mesh stays readable.
//!
//! Run with: `cargo run --example dense`

use smolfield::prelude::*;

fn main() {
    let config = FieldConfig {
        area_per_particle: 5_000.0,
        connection_radius: 35.0,
        ..FieldConfig::default()
    };

    if let Err(e) = Animator::new()
        .with_title("smolfield - dense")
        .with_config(config)
        .run()
    {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
