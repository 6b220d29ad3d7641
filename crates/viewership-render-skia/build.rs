// File: crates/viewership-render-skia/build.rs
// Summary: Links the Windows registry library Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
