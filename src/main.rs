#[cfg(feature = "csr")]
fn main() {
    furniture::mount();
}

#[cfg(not(feature = "csr"))]
fn main() {
    // Served by Trunk with `--features csr`; nothing to do natively
}
