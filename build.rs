use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // Stamp the build for the footer and the page metadata
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
