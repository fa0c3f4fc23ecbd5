//! Table Billing - 台费计费引擎
//!
//! # 架构概述
//!
//! The one place a table-time fee is computed. The live timer, the
//! "release table" action and "pay and close" all call into this crate
//! with an explicit reference instant, so the figure on screen and the
//! figure charged cannot drift apart.
//!
//! # 模块结构
//!
//! ```text
//! table-billing/src/
//! ├── core/          # 配置、环境初始化
//! ├── billing/       # 计费策略、台费计算、快照校验
//! ├── sessions/      # 开台、暂停、恢复
//! ├── checkout/      # 实时预估、释放、结账
//! └── utils/         # 日志、校验工具
//! ```

pub mod billing;
pub mod checkout;
pub mod core;
pub mod sessions;
pub mod utils;

// Re-export 公共类型
pub use billing::{
    BillingError, BillingPolicy, TableBillingCalculator, TableFeeBreakdown,
    compute_elapsed_minutes, compute_net_fee_with_prepaid_credit, compute_table_fee,
    member_hourly_rate, validate_session,
};
pub use checkout::{TableFeeLedger, estimate};
pub use crate::core::{Config, setup_environment};
pub use sessions::{SessionError, open_session, pause, resume};
pub use utils::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
