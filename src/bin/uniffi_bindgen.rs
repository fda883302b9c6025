//! Generates foreign-language bindings for the recipe-shelf session API.
//!
//! Build the cdylib first, then point the generator at it:
//! ```bash
//! cargo build --release
//! cargo run --features cli --bin uniffi-bindgen generate \
//!     --library target/release/librecipe_shelf.so --language kotlin --out-dir ./bindings
//! ```
//!
//! Swift and Python work the same way with `--language swift` / `--language python`.

fn main() {
    uniffi::uniffi_bindgen_main()
}
