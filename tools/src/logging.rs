use env_logger::Env;

/// Installs the `env_logger` backend for the `log` facade.
///
/// Warnings and errors are shown by default. `RUST_LOG=debug` also shows the
/// fit diagnostics of the library, `RUST_LOG=trace` the loss during descent.
/// Calling it again is a no-op.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}
