// ==========================================
// 生产驾驶舱系统 - 驾驶舱 API
// ==========================================
// 职责: 读取全部集合并生成驾驶舱视图
// 说明: 只读，周期刷新与手动刷新共用此入口
// ==========================================

use std::sync::Arc;

use tracing::debug;

use crate::api::error::ApiResult;
use crate::engine::dashboard::{DashboardAggregator, ResumoDashboard, SnapshotDashboard};
use crate::repository::record_store::RecordStore;

pub struct DashboardApi {
    store: Arc<RecordStore>,
    aggregator: DashboardAggregator,
}

impl DashboardApi {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            aggregator: DashboardAggregator::new(),
        }
    }

    /// 重新读取存储并汇总
    pub fn resumo(&self) -> ApiResult<ResumoDashboard> {
        let config = self.store.get_config_capacidade()?;
        let pausas = self.store.get_pausas()?;
        let historico_oee = self.store.get_historico_oee()?;
        let kanban = self.store.get_kanban()?;
        let produtos = self.store.get_produtos()?;

        let snapshot = SnapshotDashboard {
            config: &config,
            pausas: &pausas,
            historico_oee: &historico_oee,
            kanban: &kanban,
            produtos: &produtos,
        };
        let resumo = self
            .aggregator
            .agregar(&snapshot, self.store.clock().timestamp());

        debug!(
            "驾驶舱已刷新: realizada={}, tarefas={}, estoque_baixo={}",
            resumo.capacidade.realizada, resumo.kanban.total, resumo.produtos_estoque_baixo
        );
        Ok(resumo)
    }
}
