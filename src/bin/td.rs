//! Short binary name (`td`) that forwards to the `simple_todo` library.
//! Keeping the alias as a real binary avoids shell alias requirements.

fn main() {
    if let Err(err) = simple_todo::entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
