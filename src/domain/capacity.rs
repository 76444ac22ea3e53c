// ==========================================
// 生产驾驶舱系统 - 产能领域模型
// ==========================================
// 职责: 产能配置 (单例) 与产能计算结果
// ==========================================

use serde::{Deserialize, Serialize};

/// 默认每日有效工时
pub const HORAS_DIA_PADRAO: f64 = 8.0;
/// 默认每周有效工作日
pub const DIAS_SEMANA_PADRAO: u32 = 6;
/// 默认机台数
pub const NUM_MAQUINAS_PADRAO: u32 = 5;

// ==========================================
// CapacidadeConfig - 产能配置
// ==========================================
// 单例记录，原地修改，从不删除
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacidadeConfig {
    pub horas_dia_efetiva: f64,    // 每日有效工时 (0, 24]
    pub dias_semana_efetiva: u32,  // 每周有效工作日 1..=7
    pub num_maquinas: u32,         // 机台数 >= 1
}

impl Default for CapacidadeConfig {
    fn default() -> Self {
        Self {
            horas_dia_efetiva: HORAS_DIA_PADRAO,
            dias_semana_efetiva: DIAS_SEMANA_PADRAO,
            num_maquinas: NUM_MAQUINAS_PADRAO,
        }
    }
}

// ==========================================
// ResultadoCapacidade - 产能计算结果 (小时/周)
// ==========================================
// 不做截断: 停机超过有效产能时可为负数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultadoCapacidade {
    pub instalada: f64,                  // 24 × 7 × 机台数
    pub efetiva: f64,                    // 工时 × 工作日 × 机台数
    pub disponivel: f64,                 // 有效 - 计划停机
    pub realizada: f64,                  // 可用 - 非计划停机
    pub pausas_programadas_total: f64,
    pub pausas_nao_programadas_total: f64,
}
