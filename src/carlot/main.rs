//! The `carlot` binary. All work happens in [`cli::run`]; this only maps an
//! error to a message on stderr and exit code 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
