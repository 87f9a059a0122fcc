//! A warm variant: orange particle band over a charcoal surface, with a
//! heavier trail (lower fade alpha keeps motion visible longer).
//!
//! Run with: `cargo run --example ember`

use smolfield::prelude::*;

fn main() {
    let mut config = FieldConfig::default();
    config.theme = Theme {
        fade: [0.08, 0.07, 0.06, 0.06],
        connection: Vec3::new(0.95, 0.55, 0.2),
        base_hue: 25.0,
        hue_jitter: 15.0,
        saturation: 0.85,
        lightness: 0.55,
    };

    if let Err(e) = Animator::new()
        .with_title("smolfield - ember")
        .with_config(config)
        .run()
    {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
