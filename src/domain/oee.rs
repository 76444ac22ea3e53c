// ==========================================
// 生产驾驶舱系统 - OEE 领域模型
// ==========================================
// 职责: 单次生产录入、OEE 记录 (历史中不可变)
// 存储: oeeHistory 集合，最多保留 30 条 (FIFO)
// ==========================================

use serde::{Deserialize, Serialize};

/// OEE 历史保留上限
pub const LIMITE_HISTORICO_OEE: usize = 30;

/// 趋势图窗口
pub const JANELA_TENDENCIA_OEE: usize = 10;

// ==========================================
// EntradaOee - 单次生产录入
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntradaOee {
    pub tempo_disponivel: f64,  // 可用时间 (小时) > 0
    pub tempo_paradas: f64,     // 停机时间 (小时) >= 0
    pub tempo_ciclo_ideal: f64, // 理想节拍 (分钟) > 0
    pub total_produzido: u32,   // 产出件数
    pub defeitos: u32,          // 不良件数 <= 产出
}

// ==========================================
// OeeRegistro - OEE 记录
// ==========================================
// 四项百分比均已四舍五入到 2 位小数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OeeRegistro {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub data: String,             // 记录时间 (RFC 3339)

    // ===== 时间 =====
    pub tempo_disponivel: f64,
    pub tempo_paradas: f64,
    pub tempo_operacional: f64,   // 派生: 可用 - 停机

    // ===== 指标 (%) =====
    pub disponibilidade: f64,
    pub performance: f64,
    pub qualidade: f64,
    pub oee_total: f64,

    // ===== 产量 =====
    pub total_produzido: u32,
    pub defeitos: u32,
    pub boas_pecas: u32,          // 派生: 产出 - 不良
}
