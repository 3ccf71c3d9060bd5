use std::sync::Once;

static INIT: Once = Once::new();

/// 初始化 env_logger（可重复调用，仅首次生效），未设置 `RUST_LOG` 时默认 `warn`
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .is_test(cfg!(test))
            .try_init();
    });
}
