use clap::Parser;
use linfit_tools::{exit_on_error, logging, regressor};

fn main() {
    logging::init();
    let args = regressor::Args::parse();
    exit_on_error(regressor::run(&args, &mut std::io::stdout().lock()));
}
