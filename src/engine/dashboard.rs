// ==========================================
// 生产驾驶舱系统 - 驾驶舱汇总
// ==========================================
// 职责: 组合产能 / 最新 OEE / 看板 / 库存预警，纯读取与合并
// 说明: 各引擎之间不直接调用，只在此处汇合
// ==========================================

use crate::domain::capacity::{CapacidadeConfig, ResultadoCapacidade};
use crate::domain::kanban::KanbanBoard;
use crate::domain::oee::OeeRegistro;
use crate::domain::pause::PausasRegistro;
use crate::domain::product::Produto;
use crate::domain::types::ClassificacaoOee;
use crate::engine::capacity::CapacityEngine;
use crate::engine::inventory::{AlertaCategoria, InventoryEngine};
use crate::engine::kanban::{KanbanEngine, ResumoKanban};
use crate::engine::oee::OeeEngine;
use serde::Serialize;

/// 汇总所需的存储快照
pub struct SnapshotDashboard<'a> {
    pub config: &'a CapacidadeConfig,
    pub pausas: &'a PausasRegistro,
    pub historico_oee: &'a [OeeRegistro],
    pub kanban: &'a KanbanBoard,
    pub produtos: &'a [Produto],
}

// ==========================================
// ResumoDashboard - 驾驶舱视图
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumoDashboard {
    pub capacidade: ResultadoCapacidade,
    pub oee_atual: Option<OeeRegistro>,              // 历史最后一条
    pub classificacao_oee: Option<ClassificacaoOee>,
    pub kanban: ResumoKanban,
    pub total_produtos: usize,
    pub produtos_estoque_baixo: usize,
    pub alertas: Vec<AlertaCategoria>,
    pub atualizado_em: String,                        // RFC 3339
}

pub struct DashboardAggregator {
    capacity: CapacityEngine,
    oee: OeeEngine,
    inventory: InventoryEngine,
    kanban: KanbanEngine,
}

impl DashboardAggregator {
    pub fn new() -> Self {
        Self {
            capacity: CapacityEngine::new(),
            oee: OeeEngine::new(),
            inventory: InventoryEngine::new(),
            kanban: KanbanEngine::new(),
        }
    }

    /// 合并快照为驾驶舱视图
    pub fn agregar(&self, snapshot: &SnapshotDashboard<'_>, atualizado_em: String) -> ResumoDashboard {
        let oee_atual = snapshot.historico_oee.last().cloned();
        let classificacao_oee = oee_atual
            .as_ref()
            .map(|r| self.oee.classificar(r.oee_total));

        ResumoDashboard {
            capacidade: self.capacity.calcular(snapshot.config, snapshot.pausas),
            oee_atual,
            classificacao_oee,
            kanban: self.kanban.resumo(snapshot.kanban),
            total_produtos: snapshot.produtos.len(),
            produtos_estoque_baixo: self.inventory.contar_estoque_baixo(snapshot.produtos),
            alertas: self.inventory.alertas(snapshot.produtos),
            atualizado_em,
        }
    }
}

impl Default for DashboardAggregator {
    fn default() -> Self {
        Self::new()
    }
}
