// ==========================================
// 生产驾驶舱系统 - 应用层
// ==========================================
// 职责: 应用装配与驾驶舱周期刷新
// ==========================================

pub mod refresh;
pub mod state;

// 重导出
pub use refresh::run_refresh_loop;
pub use state::{get_default_db_path, AppState};
