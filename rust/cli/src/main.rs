use std::io;

fn main() {
    dicematch_cli::logging::init_logging();
    let code = dicematch_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
