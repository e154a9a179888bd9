use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber filtered by `ARDUIFY_LOG`, or `RUST_LOG` when
/// that is unset. Without either variable nothing is installed.
pub(crate) fn init() {
    let filter = match std::env::var("ARDUIFY_LOG") {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) if std::env::var_os("RUST_LOG").is_some() => EnvFilter::from_default_env(),
        Err(_) => return,
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
