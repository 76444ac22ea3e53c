// ==========================================
// 生产驾驶舱系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod capacity;
pub mod kanban;
pub mod oee;
pub mod pause;
pub mod product;
pub mod types;

// 重导出核心类型
pub use capacity::{CapacidadeConfig, ResultadoCapacidade};
pub use kanban::{KanbanBoard, KanbanCard};
pub use oee::{EntradaOee, OeeRegistro, JANELA_TENDENCIA_OEE, LIMITE_HISTORICO_OEE};
pub use pause::{Pausa, PausasRegistro};
pub use product::Produto;
pub use types::{Categoria, ClassificacaoOee, NivelAlerta, Prioridade, StatusKanban, TipoPausa};
