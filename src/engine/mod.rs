// ==========================================
// 生产驾驶舱系统 - 引擎层
// ==========================================
// 职责: 产能 / OEE / 库存 / 看板 计算规则
// 红线: Engine 不访问存储，读写由 API 层负责
// ==========================================

pub mod capacity;
pub mod dashboard;
pub mod error;
pub mod inventory;
pub mod kanban;
pub mod oee;

// 重导出核心引擎
pub use capacity::CapacityEngine;
pub use dashboard::{DashboardAggregator, ResumoDashboard, SnapshotDashboard};
pub use error::{ValidationError, ValidationResult};
pub use inventory::{
    AlertaCategoria, ContagemCategorias, FiltroProdutos, InventoryEngine, ProdutosPorCategoria,
};
pub use kanban::{KanbanEngine, Movimento, NovoCartao, ResumoKanban, RESPONSAVEL_PADRAO};
pub use oee::{arredondar, CalculoOee, OeeEngine};
