// ==========================================
// 生产驾驶舱系统 - API 层
// ==========================================
// 职责: 各功能区门面，串联 存储读取 → 引擎计算 → 持久化 → 通知
// ==========================================

pub mod capacity_api;
pub mod dashboard_api;
pub mod error;
pub mod export;
pub mod kanban_api;
pub mod notifier;
pub mod oee_api;
pub mod product_api;

// 重导出核心类型
pub use capacity_api::CapacityApi;
pub use dashboard_api::DashboardApi;
pub use error::{ApiError, ApiResult};
pub use kanban_api::KanbanApi;
pub use notifier::{
    NoOpNotifier, Notificacao, Notifier, RecordingNotifier, TipoNotificacao, TracingNotifier,
};
pub use oee_api::OeeApi;
pub use product_api::ProductApi;
