//! Entry point for the WASM application

pub fn main() {
    bookstore_frontend::start();
}
