use tracing_subscriber::EnvFilter;

/// tracing 구독자를 초기화한다. `RUST_LOG`가 있으면 그 값을 우선한다.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // 이미 설치된 구독자가 있으면(테스트 등) 그대로 둔다.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
