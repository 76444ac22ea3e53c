// ==========================================
// 生产驾驶舱系统 - 驾驶舱周期刷新
// ==========================================
// 职责: 按固定间隔重新读取存储并重算驾驶舱
// 说明: 运行在单线程运行时上，刷新与用户操作不会交错
// ==========================================

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::api::DashboardApi;
use crate::engine::dashboard::ResumoDashboard;

/// 周期刷新驾驶舱，直到 `shutdown` 完成
///
/// # 参数
/// - `dashboard`: 驾驶舱 API
/// - `intervalo`: 刷新间隔（首次立即执行）
/// - `ao_atualizar`: 每次成功刷新后的回调（渲染层）
/// - `shutdown`: 停止信号
///
/// # 返回
/// 成功刷新的次数
pub async fn run_refresh_loop<F, S>(
    dashboard: Arc<DashboardApi>,
    intervalo: Duration,
    mut ao_atualizar: F,
    shutdown: S,
) -> usize
where
    F: FnMut(&ResumoDashboard),
    S: Future<Output = ()>,
{
    info!("驾驶舱周期刷新启动: 间隔 {:?}", intervalo);

    let mut ticker = tokio::time::interval(intervalo);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    let mut atualizacoes = 0;
    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("驾驶舱周期刷新停止: 共刷新 {} 次", atualizacoes);
                return atualizacoes;
            }
            _ = ticker.tick() => {
                match dashboard.resumo() {
                    Ok(resumo) => {
                        atualizacoes += 1;
                        debug!("驾驶舱第 {} 次刷新", atualizacoes);
                        ao_atualizar(&resumo);
                    }
                    // 单次失败不终止循环，下个周期重试
                    Err(e) => warn!("驾驶舱刷新失败: {}", e),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MemoryKvStore, RecordStore, SystemClock};

    fn dashboard() -> Arc<DashboardApi> {
        let store = RecordStore::new(Arc::new(MemoryKvStore::new()), Arc::new(SystemClock)).unwrap();
        Arc::new(DashboardApi::new(Arc::new(store)))
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_first_refresh_is_immediate() {
        let mut vistos = Vec::new();
        let total = run_refresh_loop(
            dashboard(),
            Duration::from_secs(3600),
            |r| vistos.push(r.total_produtos),
            tokio::time::sleep(Duration::from_millis(50)),
        )
        .await;

        assert_eq!(total, 1);
        assert_eq!(vistos, vec![23]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_repeats_until_shutdown() {
        let total = run_refresh_loop(
            dashboard(),
            Duration::from_millis(10),
            |_| {},
            tokio::time::sleep(Duration::from_millis(100)),
        )
        .await;

        assert!(total >= 2);
    }
}
