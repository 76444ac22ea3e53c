// ==========================================
// 生产驾驶舱系统 - 配置层
// ==========================================
// 职责: 进程级运行参数（数据库路径、刷新间隔、导出目录）
// 说明: 业务配置（产能配置）存于记录仓储，不在此处
// ==========================================

pub mod app_config;

pub use app_config::{default_db_path, env_keys, AppConfig, DEFAULT_REFRESH_SECS};
