use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// WCAG 2.x channel linearization (uses the 0.03928 knee from the WCAG text,
/// not the 0.04045 of IEC 61966-2-1)
fn wcag_channel_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("luminance_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    // One entry per 8-bit channel value. `{:?}` prints the shortest literal
    // that round-trips, so every entry equals the formula bit-for-bit.
    writeln!(file, "/// Lookup table for 8-bit channel to linear light (WCAG)").unwrap();
    writeln!(file, "/// Index: channel value 0..=255, Value: linearized channel").unwrap();
    writeln!(file, "pub static CHANNEL_TO_LINEAR: [f64; 256] = [").unwrap();
    for i in 0..256u32 {
        let c = i as f64 / 255.0;
        let linear = wcag_channel_to_linear(c);
        if i > 0 && i % 4 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    {:?},", linear).unwrap();
    }
    writeln!(file, "\n];").unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
