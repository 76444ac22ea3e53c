// ==========================================
// 生产驾驶舱系统 - 看板 API
// ==========================================
// 职责: 任务创建 / 移动 / 删除 / 汇总
// 说明: 每次操作前重新读取看板，操作后整板写回
// ==========================================

use std::sync::Arc;

use tracing::{debug, info};

use crate::api::error::ApiResult;
use crate::api::notifier::{rejeitar, Notifier};
use crate::domain::kanban::{KanbanBoard, KanbanCard};
use crate::domain::types::StatusKanban;
use crate::engine::kanban::{KanbanEngine, Movimento, NovoCartao, ResumoKanban};
use crate::repository::record_store::RecordStore;

pub struct KanbanApi {
    store: Arc<RecordStore>,
    notifier: Arc<dyn Notifier>,
    engine: KanbanEngine,
}

impl KanbanApi {
    pub fn new(store: Arc<RecordStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            engine: KanbanEngine::new(),
        }
    }

    pub fn board(&self) -> ApiResult<KanbanBoard> {
        Ok(self.store.get_kanban()?)
    }

    /// 创建任务（进入 a-fazer 列尾）
    pub fn criar(&self, novo: NovoCartao) -> ApiResult<KanbanCard> {
        let mut board = self.store.get_kanban()?;
        let id = self.store.novo_id_cartao()?;
        let data_criacao = self.store.clock().timestamp();

        let card = match self.engine.criar_cartao(&mut board, id, novo, data_criacao) {
            Ok(card) => card,
            Err(e) => return Err(rejeitar(self.notifier.as_ref(), e)),
        };

        self.store.salvar_kanban(&board)?;
        info!("任务已创建: id={}, titulo={}", card.id, card.titulo);
        self.notifier.success("Tarefa criada com sucesso!");
        Ok(card)
    }

    /// 移动任务
    ///
    /// # 返回
    /// - Ok(Some(Movimento)): 已移动并写回
    /// - Ok(None): 任务不存在或已在目标列，不写存储
    pub fn mover(&self, card_id: i64, destino: StatusKanban) -> ApiResult<Option<Movimento>> {
        let mut board = self.store.get_kanban()?;

        let movimento = match self.engine.mover_cartao(&mut board, card_id, destino) {
            Some(m) => m,
            None => {
                debug!("任务 id={} 移动到 {} 为空操作", card_id, destino.as_str());
                return Ok(None);
            }
        };

        self.store.salvar_kanban(&board)?;
        info!(
            "任务已移动: id={}, {} -> {}",
            card_id,
            movimento.origem.as_str(),
            movimento.destino.as_str()
        );
        self.notifier.success(&movimento.mensagem());
        Ok(Some(movimento))
    }

    /// 删除任务（id 不存在时静默忽略）
    pub fn excluir(&self, card_id: i64) -> ApiResult<bool> {
        let mut board = self.store.get_kanban()?;

        match self.engine.excluir_cartao(&mut board, card_id) {
            Some(card) => {
                self.store.salvar_kanban(&board)?;
                info!("任务已删除: id={}, titulo={}", card.id, card.titulo);
                self.notifier.success("Tarefa excluída");
                Ok(true)
            }
            None => {
                debug!("任务 id={} 不存在，删除为空操作", card_id);
                Ok(false)
            }
        }
    }

    pub fn resumo(&self) -> ApiResult<ResumoKanban> {
        let board = self.store.get_kanban()?;
        Ok(self.engine.resumo(&board))
    }
}
