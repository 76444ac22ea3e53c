// ==========================================
// 生产驾驶舱系统 - 看板领域模型
// ==========================================
// 职责: 任务卡片与四列看板
// 红线: 任一时刻同一 id 的卡片至多出现在一列中
// 红线: 卡片 status 必须与所在列一致
// ==========================================

use crate::domain::types::{Prioridade, StatusKanban};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ==========================================
// KanbanCard - 任务卡片
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanCard {
    pub id: i64,
    pub titulo: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub responsavel: String,
    #[serde(default)]
    pub prioridade: Prioridade,
    pub data_criacao: String,    // 创建时间 (RFC 3339)
    pub status: StatusKanban,    // 与所在列同步
}

// ==========================================
// KanbanBoard - 看板 (四列有序序列)
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KanbanBoard {
    #[serde(rename = "a-fazer", default)]
    pub a_fazer: Vec<KanbanCard>,
    #[serde(default)]
    pub fazendo: Vec<KanbanCard>,
    #[serde(default)]
    pub testando: Vec<KanbanCard>,
    #[serde(default)]
    pub concluido: Vec<KanbanCard>,
}

impl KanbanBoard {
    /// 取某列
    pub fn coluna(&self, status: StatusKanban) -> &Vec<KanbanCard> {
        match status {
            StatusKanban::AFazer => &self.a_fazer,
            StatusKanban::Fazendo => &self.fazendo,
            StatusKanban::Testando => &self.testando,
            StatusKanban::Concluido => &self.concluido,
        }
    }

    pub fn coluna_mut(&mut self, status: StatusKanban) -> &mut Vec<KanbanCard> {
        match status {
            StatusKanban::AFazer => &mut self.a_fazer,
            StatusKanban::Fazendo => &mut self.fazendo,
            StatusKanban::Testando => &mut self.testando,
            StatusKanban::Concluido => &mut self.concluido,
        }
    }

    /// 查找卡片所在列
    pub fn localizar(&self, card_id: i64) -> Option<StatusKanban> {
        StatusKanban::COLUNAS
            .iter()
            .copied()
            .find(|s| self.coluna(*s).iter().any(|c| c.id == card_id))
    }

    /// 按 id 取卡片
    pub fn cartao(&self, card_id: i64) -> Option<&KanbanCard> {
        StatusKanban::COLUNAS
            .iter()
            .flat_map(|s| self.coluna(*s).iter())
            .find(|c| c.id == card_id)
    }

    /// 卡片总数
    pub fn total(&self) -> usize {
        StatusKanban::COLUNAS.iter().map(|s| self.coluna(*s).len()).sum()
    }

    pub fn maior_id(&self) -> Option<i64> {
        StatusKanban::COLUNAS
            .iter()
            .flat_map(|s| self.coluna(*s).iter())
            .map(|c| c.id)
            .max()
    }

    /// 修复外部改写造成的不一致
    ///
    /// - status 强制与所在列对齐
    /// - 重复 id 只保留首次出现（按列顺序）
    ///
    /// # 返回
    /// 被修正的卡片数量
    pub fn normalizar(&mut self) -> usize {
        let mut vistos: HashSet<i64> = HashSet::new();
        let mut corrigidos = 0;

        for status in StatusKanban::COLUNAS {
            let coluna = self.coluna_mut(status);
            let antes = coluna.len();
            coluna.retain(|c| vistos.insert(c.id));
            corrigidos += antes - coluna.len();

            for card in coluna.iter_mut() {
                if card.status != status {
                    card.status = status;
                    corrigidos += 1;
                }
            }
        }

        corrigidos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: i64, status: StatusKanban) -> KanbanCard {
        KanbanCard {
            id,
            titulo: format!("T{}", id),
            descricao: String::new(),
            responsavel: "Ana".to_string(),
            prioridade: Prioridade::Media,
            data_criacao: "2026-01-01T00:00:00Z".to_string(),
            status,
        }
    }

    #[test]
    fn test_board_json_keys() {
        let mut board = KanbanBoard::default();
        board.a_fazer.push(card(1, StatusKanban::AFazer));
        let v = serde_json::to_value(&board).unwrap();
        assert!(v.get("a-fazer").is_some());
        assert_eq!(v["a-fazer"][0]["dataCriacao"], "2026-01-01T00:00:00Z");
        assert_eq!(v["a-fazer"][0]["status"], "a-fazer");
        assert!(v.get("concluido").is_some());
    }

    #[test]
    fn test_normalizar_fixes_status_and_duplicates() {
        let mut board = KanbanBoard::default();
        board.a_fazer.push(card(1, StatusKanban::AFazer));
        board.fazendo.push(card(1, StatusKanban::Fazendo));
        board.testando.push(card(2, StatusKanban::Concluido));

        let corrigidos = board.normalizar();

        assert_eq!(corrigidos, 2);
        assert_eq!(board.localizar(1), Some(StatusKanban::AFazer));
        assert!(board.fazendo.is_empty());
        assert_eq!(board.testando[0].status, StatusKanban::Testando);
        assert_eq!(board.total(), 2);
    }
}
