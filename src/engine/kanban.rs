// ==========================================
// 生产驾驶舱系统 - 看板引擎
// ==========================================
// 职责: 卡片创建 / 移动 / 删除 / 汇总
// 红线: 同一 id 至多出现在一列；移动中不存在 0 列或 2 列的中间态
// 说明: 引擎只改内存中的看板，持久化由调用方处理
// ==========================================

use crate::domain::kanban::{KanbanBoard, KanbanCard};
use crate::domain::types::{Prioridade, StatusKanban};
use crate::engine::error::{ValidationError, ValidationResult};
use serde::Serialize;

/// 未指定负责人时的占位
pub const RESPONSAVEL_PADRAO: &str = "Não definido";

// ==========================================
// NovoCartao - 创建请求
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NovoCartao {
    pub titulo: String,
    pub descricao: String,
    pub responsavel: String,
    pub prioridade: Prioridade,
}

// ==========================================
// Movimento - 移动结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movimento {
    pub card_id: i64,
    pub titulo: String,
    pub origem: StatusKanban,
    pub destino: StatusKanban,
}

impl Movimento {
    /// 通知文案
    pub fn mensagem(&self) -> String {
        format!(
            "Tarefa \"{}\" movida para {}",
            self.titulo,
            self.destino.nome_exibicao()
        )
    }
}

// ==========================================
// ResumoKanban - 看板汇总
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumoKanban {
    pub total: usize,
    pub a_fazer: usize,
    pub fazendo: usize,
    pub testando: usize,
    pub concluido: usize,
}

// ==========================================
// KanbanEngine - 看板引擎
// ==========================================
pub struct KanbanEngine {
    // 无状态引擎
}

impl KanbanEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 创建卡片并追加到 a-fazer 列尾
    ///
    /// # 参数
    /// - `board`: 看板
    /// - `id`: 新卡片 id（由存储分配）
    /// - `novo`: 创建请求
    /// - `data_criacao`: 创建时间 (RFC 3339)
    pub fn criar_cartao(
        &self,
        board: &mut KanbanBoard,
        id: i64,
        novo: NovoCartao,
        data_criacao: String,
    ) -> ValidationResult<KanbanCard> {
        let titulo = novo.titulo.trim();
        if titulo.is_empty() {
            return Err(ValidationError::Required("titulo"));
        }

        let responsavel = match novo.responsavel.trim() {
            "" => RESPONSAVEL_PADRAO.to_string(),
            r => r.to_string(),
        };

        let card = KanbanCard {
            id,
            titulo: titulo.to_string(),
            descricao: novo.descricao.trim().to_string(),
            responsavel,
            prioridade: novo.prioridade,
            data_criacao,
            status: StatusKanban::AFazer,
        };

        board.coluna_mut(StatusKanban::AFazer).push(card.clone());
        Ok(card)
    }

    /// 移动卡片到目标列尾
    ///
    /// # 返回
    /// - Some(Movimento): 已移动
    /// - None: 卡片不存在或已在目标列（看板不变）
    pub fn mover_cartao(
        &self,
        board: &mut KanbanBoard,
        card_id: i64,
        destino: StatusKanban,
    ) -> Option<Movimento> {
        let origem = board.localizar(card_id)?;
        if origem == destino {
            return None;
        }

        let coluna_origem = board.coluna_mut(origem);
        let pos = coluna_origem.iter().position(|c| c.id == card_id)?;
        let mut card = coluna_origem.remove(pos);
        card.status = destino;

        let movimento = Movimento {
            card_id,
            titulo: card.titulo.clone(),
            origem,
            destino,
        };
        board.coluna_mut(destino).push(card);

        Some(movimento)
    }

    /// 从所在列删除卡片
    pub fn excluir_cartao(&self, board: &mut KanbanBoard, card_id: i64) -> Option<KanbanCard> {
        let status = board.localizar(card_id)?;
        let coluna = board.coluna_mut(status);
        let pos = coluna.iter().position(|c| c.id == card_id)?;
        Some(coluna.remove(pos))
    }

    pub fn resumo(&self, board: &KanbanBoard) -> ResumoKanban {
        ResumoKanban {
            total: board.total(),
            a_fazer: board.a_fazer.len(),
            fazendo: board.fazendo.len(),
            testando: board.testando.len(),
            concluido: board.concluido.len(),
        }
    }
}

impl Default for KanbanEngine {
    fn default() -> Self {
        Self::new()
    }
}
