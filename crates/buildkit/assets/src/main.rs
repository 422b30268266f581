use buildkit_assets::cli::{self, Cli};

fn main() {
    let cli = Cli::try_parse_strict(std::env::args_os()).unwrap_or_else(|err| err.exit());
    cli::init_tracing();

    if let Err(err) = cli::run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
