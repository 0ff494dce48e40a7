//! Binary entrypoint for the browser-hosted component workbench.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    storybook::mount();
}

#[cfg(not(all(target_arch = "wasm32", feature = "csr")))]
fn main() {
    eprintln!(
        "This binary renders the component workbench in the browser. Build `storybook_app` for wasm32 with the `csr` feature and serve it with a static file server."
    );
}
