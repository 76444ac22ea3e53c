// ==========================================
// 生产驾驶舱系统 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 提供数据访问接口,屏蔽存储细节
// 约束: 所有 SQL 使用参数化
// ==========================================

pub mod clock;
pub mod error;
pub mod kv_store;
pub mod record_store;
pub mod seed;

// 重导出核心仓储
pub use clock::{Clock, FixedClock, IdGenerator, SystemClock};
pub use error::{RepositoryError, RepositoryResult};
pub use kv_store::{KvStore, MemoryKvStore, SqliteKvStore};
pub use record_store::{chaves, RecordStore};
