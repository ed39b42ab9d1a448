// Prints the binup version baked in at compile time.

pub fn run() {
    println!("binup {}", env!("CARGO_PKG_VERSION"));
}
