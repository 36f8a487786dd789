fn main() {
    if let Err(err) = simple_todo::entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
