//! # Voxel World Demo Entry Point
//!
//! Runs the headless demo: generates the configured world, meshes every
//! chunk, and logs mesh totals. See the library's `run()` for details.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! ```

fn main() {
    voxel_world::run();
}
