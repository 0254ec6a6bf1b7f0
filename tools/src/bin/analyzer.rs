use clap::Parser;
use linfit_tools::{analyzer, exit_on_error, logging};

fn main() {
    logging::init();
    let args = analyzer::Args::parse();
    let (table, model) = exit_on_error(analyzer::load(&args));
    exit_on_error(analyzer::report(
        &args,
        &table,
        &model,
        &mut std::io::stdout().lock(),
    ));
}
