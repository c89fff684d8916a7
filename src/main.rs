#[cfg(target_arch = "wasm32")]
use flegi_web::App;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    mount_to_body(App);
}

// The client only runs in the browser; this keeps native builds (and
// `cargo test`) working.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
