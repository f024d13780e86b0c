//! Hermit Server - 酒店后台预订管理服务
//!
//! # 架构概述
//!
//! 本模块是后台预订服务的主入口，提供以下核心功能：
//!
//! - **预订核心** (`bookings`): 生命周期状态机、可用性检查、定价、房态同步
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! hermit-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── bookings/      # 预订生命周期核心
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod bookings;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use bookings::{BookingError, BookingManager, PaymentOutcome};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    __  __               _ __
   / / / /__  _________ (_) /_
  / /_/ / _ \/ ___/ __ `__ \ __/
 / __  /  __/ /  / / / / / / /_
/_/ /_/\___/_/  /_/ /_/ /_/\__/
    "#
    );
}

/// 设置运行环境：加载 .env、确保工作目录存在、初始化日志
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let log_dir = std::path::Path::new(&config.work_dir).join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_level = if config.is_development() {
        "debug"
    } else {
        "info"
    };
    init_logger_with_file(Some(log_level), log_dir.to_str());

    Ok(())
}
