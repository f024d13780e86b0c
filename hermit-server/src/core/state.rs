use std::path::PathBuf;
use std::sync::Arc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::bookings::BookingManager;
use crate::core::Config;
use crate::db::DbService;

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是后台服务的核心数据结构，持有所有服务的共享引用。
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | booking_manager | Arc<BookingManager> | 预订生命周期管理 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 预订生命周期管理器 (Arc 共享所有权，房间锁注册表必须全局唯一)
    pub booking_manager: Arc<BookingManager>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, db: Surreal<Db>, booking_manager: Arc<BookingManager>) -> Self {
        Self {
            config,
            db,
            booking_manager,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录 (确保存在)
    /// 2. 数据库 (work_dir/database/hermit.db)
    /// 3. 预订管理器
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        let db_dir = PathBuf::from(&config.work_dir).join("database");
        std::fs::create_dir_all(&db_dir)?;

        let db_path = db_dir.join("hermit.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;
        let db = db_service.db;

        let booking_manager = Arc::new(BookingManager::new(db.clone(), config.timezone));

        Ok(Self::new(config.clone(), db, booking_manager))
    }
}
