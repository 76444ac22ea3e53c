// ==========================================
// 生产驾驶舱系统 - 应用状态
// ==========================================
// 职责: 装配存储、时钟、通知通道与各 API 实例
// ==========================================

use std::sync::Arc;

use crate::api::{
    CapacityApi, DashboardApi, KanbanApi, Notifier, OeeApi, ProductApi, TracingNotifier,
};
use crate::config::app_config::AppConfig;
use crate::repository::{Clock, KvStore, RecordStore, RepositoryResult, SqliteKvStore, SystemClock};

/// 应用状态
///
/// 所有 API 共享同一个 RecordStore
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 记录仓储
    pub store: Arc<RecordStore>,

    /// 产能API
    pub capacity_api: Arc<CapacityApi>,

    /// OEE API
    pub oee_api: Arc<OeeApi>,

    /// 产品API
    pub product_api: Arc<ProductApi>,

    /// 看板API
    pub kanban_api: Arc<KanbanApi>,

    /// 驾驶舱API
    pub dashboard_api: Arc<DashboardApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(String): 初始化错误
    ///
    /// # 说明
    /// 使用系统时钟与 tracing 通知
    pub fn new(db_path: String) -> Result<Self, String> {
        tracing::info!("初始化AppState，数据库路径: {}", db_path);

        let kv = SqliteKvStore::new(&db_path).map_err(|e| format!("无法打开数据库: {}", e))?;

        Self::from_parts(
            db_path,
            Arc::new(kv),
            Arc::new(SystemClock),
            Arc::new(TracingNotifier),
        )
        .map_err(|e| format!("无法初始化记录仓储: {}", e))
    }

    /// 按应用配置创建
    pub fn from_config(config: &AppConfig) -> Result<Self, String> {
        Self::new(config.db_path.clone())
    }

    /// 用外部提供的存储 / 时钟 / 通知通道装配
    pub fn from_parts(
        db_path: String,
        kv: Arc<dyn KvStore>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
    ) -> RepositoryResult<Self> {
        let store = Arc::new(RecordStore::new(kv, clock)?);

        let state = Self {
            db_path,
            capacity_api: Arc::new(CapacityApi::new(store.clone(), notifier.clone())),
            oee_api: Arc::new(OeeApi::new(store.clone(), notifier.clone())),
            product_api: Arc::new(ProductApi::new(store.clone(), notifier.clone())),
            kanban_api: Arc::new(KanbanApi::new(store.clone(), notifier)),
            dashboard_api: Arc::new(DashboardApi::new(store.clone())),
            store,
        };

        tracing::info!("AppState初始化完成");
        Ok(state)
    }
}

/// 获取默认数据库路径
///
/// 优先读取 PAINEL_PRODUCAO_DB_PATH，其次为用户数据目录
pub fn get_default_db_path() -> String {
    AppConfig::from_env().db_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::NoOpNotifier;
    use crate::repository::MemoryKvStore;

    #[test]
    fn test_get_default_db_path() {
        let path = get_default_db_path();
        assert!(!path.is_empty());
        assert!(path.ends_with(".db"));
    }

    #[test]
    fn test_from_parts_seeds_store() {
        let state = AppState::from_parts(
            ":memory:".to_string(),
            Arc::new(MemoryKvStore::new()),
            Arc::new(SystemClock),
            Arc::new(NoOpNotifier),
        )
        .unwrap();

        assert_eq!(state.product_api.listar().unwrap().len(), 23);
        assert_eq!(state.kanban_api.resumo().unwrap().total, 0);
    }
}
