use crate::billing::{
    BillingPolicy, DEFAULT_BLOCK_MINUTES, DEFAULT_GRACE_MINUTES, DEFAULT_MONEY_GAME_CUT_PERCENT,
};

/// 计费配置 - 台费引擎的所有配置项
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，设置后按天滚动写文件 |
/// | BILLING_GRACE_MINUTES | 5 | 免费宽限分钟数 |
/// | BILLING_BLOCK_MINUTES | 30 | 计费块分钟数 |
/// | MONEY_GAME_CUT_PERCENT | 10 | 赌球最低抽成百分比 |
///
/// # 示例
///
/// ```ignore
/// BILLING_BLOCK_MINUTES=15 LOG_LEVEL=debug ./pos
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 免费宽限 (分钟)
    pub grace_minutes: i64,
    /// 计费块 (分钟)
    pub block_minutes: i64,
    /// 赌球最低抽成 (%)
    pub money_game_cut_percent: u32,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            grace_minutes: std::env::var("BILLING_GRACE_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_GRACE_MINUTES),
            block_minutes: std::env::var("BILLING_BLOCK_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_BLOCK_MINUTES),
            money_game_cut_percent: std::env::var("MONEY_GAME_CUT_PERCENT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MONEY_GAME_CUT_PERCENT),
        }
    }

    /// 使用自定义计费策略覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_policy(policy: BillingPolicy) -> Self {
        let mut config = Self::from_env();
        config.grace_minutes = policy.grace_minutes;
        config.block_minutes = policy.block_minutes;
        config.money_game_cut_percent = policy.money_game_cut_percent;
        config
    }

    /// 计费策略
    ///
    /// 配置值非法时回退到默认策略
    pub fn policy(&self) -> BillingPolicy {
        let policy = BillingPolicy {
            grace_minutes: self.grace_minutes,
            block_minutes: self.block_minutes,
            money_game_cut_percent: self.money_game_cut_percent,
        };
        if policy.is_valid() {
            policy
        } else {
            tracing::warn!(
                grace_minutes = self.grace_minutes,
                block_minutes = self.block_minutes,
                money_game_cut_percent = self.money_game_cut_percent,
                "Invalid billing policy in configuration, falling back to defaults"
            );
            BillingPolicy::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
