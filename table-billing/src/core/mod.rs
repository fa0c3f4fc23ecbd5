//! 核心模块 - 配置与环境初始化
//!
//! - [`Config`] - 计费配置
//! - [`setup_environment`] - 加载 .env 并初始化日志

pub mod config;

pub use config::Config;

use crate::utils::logger::init_logger_with_file;

/// 设置环境 (dotenv, 日志)
///
/// Loads `.env` if present, reads [`Config`] and installs the tracing
/// subscriber. Returns the loaded configuration.
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(config.log_level.as_str()), config.log_dir.as_deref());
    tracing::info!(
        environment = %config.environment,
        grace_minutes = config.grace_minutes,
        block_minutes = config.block_minutes,
        "Table billing environment ready"
    );
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_environment_yields_usable_policy() {
        let config = setup_environment();
        assert!(config.policy().is_valid());
    }
}
