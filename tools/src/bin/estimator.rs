use clap::Parser;
use linfit_tools::{estimator, exit_on_error, logging};
use std::io;

fn main() {
    logging::init();
    let args = estimator::Args::parse();
    let model = exit_on_error(estimator::load(&args));
    exit_on_error(estimator::interact(
        &model,
        &args.label,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    ));
}
