// ==========================================
// 生产驾驶舱系统 - 停机领域模型
// ==========================================
// 职责: 计划/非计划停机记录
// 存储: pauses 集合 {programadas, naoProgramadas}，按类型分别追加
// ==========================================

use crate::domain::types::TipoPausa;
use serde::{Deserialize, Serialize};

// ==========================================
// Pausa - 停机记录
// ==========================================
// 红线: horas > 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pausa {
    #[serde(default)]
    pub id: Option<i64>,       // 存储分配
    pub tipo: TipoPausa,       // 停机类型
    pub descricao: String,     // 描述
    pub horas: f64,            // 停机时长 (小时)
    #[serde(default)]
    pub data: String,          // 登记日期 (YYYY-MM-DD)
}

impl Pausa {
    pub fn nova(tipo: TipoPausa, descricao: impl Into<String>, horas: f64) -> Self {
        Self {
            id: None,
            tipo,
            descricao: descricao.into(),
            horas,
            data: String::new(),
        }
    }
}

// ==========================================
// PausasRegistro - 停机集合
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PausasRegistro {
    #[serde(default)]
    pub programadas: Vec<Pausa>,
    #[serde(default)]
    pub nao_programadas: Vec<Pausa>,
}

impl PausasRegistro {
    /// 按类型取对应序列
    pub fn lista(&self, tipo: TipoPausa) -> &[Pausa] {
        match tipo {
            TipoPausa::Programada => &self.programadas,
            TipoPausa::NaoProgramada => &self.nao_programadas,
        }
    }

    pub fn lista_mut(&mut self, tipo: TipoPausa) -> &mut Vec<Pausa> {
        match tipo {
            TipoPausa::Programada => &mut self.programadas,
            TipoPausa::NaoProgramada => &mut self.nao_programadas,
        }
    }

    /// 计划停机合计 (小时)
    pub fn total_programadas(&self) -> f64 {
        self.programadas.iter().map(|p| p.horas).sum()
    }

    /// 非计划停机合计 (小时)
    pub fn total_nao_programadas(&self) -> f64 {
        self.nao_programadas.iter().map(|p| p.horas).sum()
    }

    /// 所有记录中的最大 id
    pub fn maior_id(&self) -> Option<i64> {
        self.programadas
            .iter()
            .chain(self.nao_programadas.iter())
            .filter_map(|p| p.id)
            .max()
    }
}
