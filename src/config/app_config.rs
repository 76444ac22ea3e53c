// ==========================================
// 生产驾驶舱系统 - 应用配置
// ==========================================
// 职责: 从环境变量装载运行参数，缺省回退默认值
// 环境变量:
//   PAINEL_PRODUCAO_DB_PATH       数据库文件路径
//   PAINEL_PRODUCAO_REFRESH_SECS  驾驶舱刷新间隔（秒，默认 30）
//   PAINEL_PRODUCAO_EXPORT_DIR    导出目录（默认当前目录）
//   PAINEL_PRODUCAO_LOG_FORMAT    日志格式 text | json（由 logging 读取）
// ==========================================

use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub mod env_keys {
    pub const DB_PATH: &str = "PAINEL_PRODUCAO_DB_PATH";
    pub const REFRESH_SECS: &str = "PAINEL_PRODUCAO_REFRESH_SECS";
    pub const EXPORT_DIR: &str = "PAINEL_PRODUCAO_EXPORT_DIR";
    pub const LOG_FORMAT: &str = "PAINEL_PRODUCAO_LOG_FORMAT";
}

/// 默认刷新间隔（秒）
pub const DEFAULT_REFRESH_SECS: u64 = 30;

/// 数据库文件名
pub const DB_FILE_NAME: &str = "painel_producao.db";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub db_path: String,
    pub refresh_interval: Duration,
    pub export_dir: PathBuf,
}

impl AppConfig {
    /// 从进程环境变量装载
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源装载（便于测试注入）
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let valor = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let db_path = valor(env_keys::DB_PATH).unwrap_or_else(default_db_path);

        let refresh_secs = match valor(env_keys::REFRESH_SECS) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    warn!(
                        "{}={} 无效，使用默认 {} 秒",
                        env_keys::REFRESH_SECS,
                        raw,
                        DEFAULT_REFRESH_SECS
                    );
                    DEFAULT_REFRESH_SECS
                }
            },
            None => DEFAULT_REFRESH_SECS,
        };

        let export_dir = valor(env_keys::EXPORT_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            db_path,
            refresh_interval: Duration::from_secs(refresh_secs),
            export_dir,
        }
    }
}

/// 默认数据库路径: 用户数据目录下的应用目录
///
/// 开发构建使用独立目录，避免污染正式数据；拿不到数据目录时回退到当前目录
pub fn default_db_path() -> String {
    let mut path = PathBuf::from(".").join(DB_FILE_NAME);

    if let Some(data_dir) = dirs::data_dir() {
        let app_dir = if cfg!(debug_assertions) {
            data_dir.join("painel-producao-dev")
        } else {
            data_dir.join("painel-producao")
        };

        if let Err(e) = std::fs::create_dir_all(&app_dir) {
            warn!("无法创建数据目录 {}: {}", app_dir.display(), e);
        } else {
            path = app_dir.join(DB_FILE_NAME);
        }
    }

    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_com(pares: &[(&str, &str)]) -> AppConfig {
        let mapa: HashMap<String, String> = pares
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| mapa.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_com(&[]);
        assert!(config.db_path.ends_with(DB_FILE_NAME));
        assert_eq!(config.refresh_interval, Duration::from_secs(30));
        assert_eq!(config.export_dir, PathBuf::from("."));
    }

    #[test]
    fn test_overrides() {
        let config = config_com(&[
            (env_keys::DB_PATH, " /tmp/painel.db "),
            (env_keys::REFRESH_SECS, "5"),
            (env_keys::EXPORT_DIR, "/tmp/exports"),
        ]);
        assert_eq!(config.db_path, "/tmp/painel.db");
        assert_eq!(config.refresh_interval, Duration::from_secs(5));
        assert_eq!(config.export_dir, PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn test_invalid_refresh_falls_back() {
        let config = config_com(&[(env_keys::REFRESH_SECS, "abc")]);
        assert_eq!(config.refresh_interval, Duration::from_secs(DEFAULT_REFRESH_SECS));

        let config = config_com(&[(env_keys::REFRESH_SECS, "0")]);
        assert_eq!(config.refresh_interval, Duration::from_secs(DEFAULT_REFRESH_SECS));
    }
}
