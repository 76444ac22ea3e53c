// ==========================================
// 生产驾驶舱系统 - 时钟与 ID 生成
// ==========================================
// 职责: 提供时间戳来源；生成单调递增、无碰撞的记录 ID
// ==========================================

use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use std::sync::Mutex;

// ==========================================
// Trait: Clock
// ==========================================

/// 时间来源
pub trait Clock: Send + Sync {
    /// 当前时刻 (UTC)
    fn now(&self) -> DateTime<Utc>;

    /// 当前日期 (UTC)
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// 记录与导出使用的时间戳，毫秒精度、`Z` 结尾
    ///
    /// 例如 `2026-05-04T09:30:00.000Z`
    fn timestamp(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// 系统时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 固定时钟（测试用）
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// ==========================================
// IdGenerator - 单调 ID 生成器
// ==========================================

/// 以毫秒时间戳为基础的单调 ID
///
/// id = max(当前毫秒, 上一个 id + 1)，同一毫秒内连续创建也不会碰撞
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Mutex<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记已存在的 id，保证后续生成值大于它
    pub fn observe(&self, existing: i64) -> RepositoryResult<()> {
        let mut last = self.lock()?;
        if existing > *last {
            *last = existing;
        }
        Ok(())
    }

    /// 生成下一个 id
    pub fn next(&self, clock: &dyn Clock) -> RepositoryResult<i64> {
        let mut last = self.lock()?;
        let candidate = clock.now().timestamp_millis().max(*last + 1);
        *last = candidate;
        Ok(candidate)
    }

    fn lock(&self) -> RepositoryResult<std::sync::MutexGuard<'_, i64>> {
        self.last
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}
