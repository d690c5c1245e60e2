fn main() {
    if let Err(err) = volcat::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
