// ==========================================
// 生产驾驶舱系统 - OEE 引擎
// ==========================================
// 职责: 单次生产录入 → 可用率 / 性能率 / 质量率 / OEE
// 输入: EntradaOee
// 输出: CalculoOee (记录由调用方写入历史)
// 红线: 不截断，性能率与 OEE 可超过 100
// 红线: 校验失败时不做任何部分计算
// ==========================================

use crate::domain::oee::{EntradaOee, OeeRegistro, JANELA_TENDENCIA_OEE};
use crate::domain::types::ClassificacaoOee;
use crate::engine::error::{ValidationError, ValidationResult};
use serde::Serialize;

/// OEE 评级下限 (含)
const LIMITE_EXCELENTE: f64 = 85.0;
const LIMITE_BOM: f64 = 70.0;
const LIMITE_REGULAR: f64 = 60.0;

// ==========================================
// CalculoOee - 单次计算结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculoOee {
    pub registro: OeeRegistro,
    pub producao_ideal: f64,             // 理想产量 (件)
    pub classificacao: ClassificacaoOee,
}

// ==========================================
// OeeEngine - OEE 引擎
// ==========================================
pub struct OeeEngine {
    // 无状态引擎
}

impl OeeEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 校验录入
    pub fn validar(&self, entrada: &EntradaOee) -> ValidationResult<()> {
        if !entrada.tempo_disponivel.is_finite() || entrada.tempo_disponivel <= 0.0 {
            return Err(ValidationError::out_of_range(
                "tempoDisponivel",
                format!("deve ser maior que zero, recebido {}", entrada.tempo_disponivel),
            ));
        }
        if !entrada.tempo_paradas.is_finite() || entrada.tempo_paradas < 0.0 {
            return Err(ValidationError::out_of_range(
                "tempoParadas",
                format!("não pode ser negativo, recebido {}", entrada.tempo_paradas),
            ));
        }
        // 运行时间为 0 时理想产量为 0，性能率无意义
        if entrada.tempo_paradas >= entrada.tempo_disponivel {
            return Err(ValidationError::out_of_range(
                "tempoParadas",
                format!(
                    "paradas de {} h não podem igualar ou superar o tempo disponível de {} h",
                    entrada.tempo_paradas, entrada.tempo_disponivel
                ),
            ));
        }
        if !entrada.tempo_ciclo_ideal.is_finite() || entrada.tempo_ciclo_ideal <= 0.0 {
            return Err(ValidationError::out_of_range(
                "tempoCicloIdeal",
                format!("deve ser maior que zero, recebido {}", entrada.tempo_ciclo_ideal),
            ));
        }
        if entrada.total_produzido == 0 {
            return Err(ValidationError::ZeroOutput);
        }
        if entrada.defeitos > entrada.total_produzido {
            return Err(ValidationError::DefectsExceedOutput {
                defeitos: entrada.defeitos,
                total_produzido: entrada.total_produzido,
            });
        }
        Ok(())
    }

    /// 计算 OEE
    ///
    /// # 参数
    /// - `entrada`: 单次生产录入
    ///
    /// # 返回
    /// - Ok(CalculoOee): 四项百分比已保留 2 位小数，id/data 待存储填充
    /// - Err(ValidationError): 录入不合法
    pub fn calcular(&self, entrada: &EntradaOee) -> ValidationResult<CalculoOee> {
        self.validar(entrada)?;

        let tempo_operacional = entrada.tempo_disponivel - entrada.tempo_paradas;
        let disponibilidade = tempo_operacional / entrada.tempo_disponivel * 100.0;

        let ciclo_ideal_horas = entrada.tempo_ciclo_ideal / 60.0;
        let producao_ideal = tempo_operacional / ciclo_ideal_horas;
        let performance = f64::from(entrada.total_produzido) / producao_ideal * 100.0;

        let boas_pecas = entrada.total_produzido - entrada.defeitos;
        let qualidade = f64::from(boas_pecas) / f64::from(entrada.total_produzido) * 100.0;

        let oee_total = disponibilidade * performance * qualidade / 10000.0;
        let oee_total = arredondar(oee_total);

        let registro = OeeRegistro {
            id: None,
            data: String::new(),
            tempo_disponivel: entrada.tempo_disponivel,
            tempo_paradas: entrada.tempo_paradas,
            tempo_operacional,
            disponibilidade: arredondar(disponibilidade),
            performance: arredondar(performance),
            qualidade: arredondar(qualidade),
            oee_total,
            total_produzido: entrada.total_produzido,
            defeitos: entrada.defeitos,
            boas_pecas,
        };

        Ok(CalculoOee {
            registro,
            producao_ideal,
            classificacao: self.classificar(oee_total),
        })
    }

    /// 按 OEE 总值评级（降序判定，下限含）
    pub fn classificar(&self, oee_total: f64) -> ClassificacaoOee {
        if oee_total >= LIMITE_EXCELENTE {
            ClassificacaoOee::Excellent
        } else if oee_total >= LIMITE_BOM {
            ClassificacaoOee::Good
        } else if oee_total >= LIMITE_REGULAR {
            ClassificacaoOee::Regular
        } else {
            ClassificacaoOee::Poor
        }
    }

    /// 趋势窗口: 历史最后 10 条（旧 → 新）
    pub fn tendencia<'a>(&self, historico: &'a [OeeRegistro]) -> &'a [OeeRegistro] {
        let inicio = historico.len().saturating_sub(JANELA_TENDENCIA_OEE);
        &historico[inicio..]
    }
}

impl Default for OeeEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// 保留 2 位小数（远离零舍入）
pub fn arredondar(valor: f64) -> f64 {
    (valor * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entrada(disp: f64, paradas: f64, ciclo: f64, total: u32, defeitos: u32) -> EntradaOee {
        EntradaOee {
            tempo_disponivel: disp,
            tempo_paradas: paradas,
            tempo_ciclo_ideal: ciclo,
            total_produzido: total,
            defeitos,
        }
    }

    #[test]
    fn test_reference_run() {
        let engine = OeeEngine::new();
        let calc = engine.calcular(&entrada(8.0, 1.0, 2.0, 200, 10)).unwrap();
        let r = &calc.registro;

        assert_eq!(r.tempo_operacional, 7.0);
        assert_eq!(r.disponibilidade, 87.5);
        assert!((calc.producao_ideal - 210.0).abs() < 1e-9);
        assert_eq!(r.performance, 95.24);
        assert_eq!(r.qualidade, 95.0);
        assert_eq!(r.oee_total, 79.17);
        assert_eq!(r.boas_pecas, 190);
        assert_eq!(calc.classificacao, ClassificacaoOee::Good);
    }

    #[test]
    fn test_performance_not_clamped() {
        let engine = OeeEngine::new();
        // 理想产量 60 件，实际 90 件
        let calc = engine.calcular(&entrada(2.0, 1.0, 1.0, 90, 0)).unwrap();
        assert_eq!(calc.registro.performance, 150.0);
        assert_eq!(calc.registro.oee_total, 75.0);
    }

    #[test]
    fn test_zero_output_rejected() {
        let engine = OeeEngine::new();
        assert_eq!(
            engine.calcular(&entrada(8.0, 1.0, 2.0, 0, 0)),
            Err(ValidationError::ZeroOutput)
        );
    }

    #[test]
    fn test_defects_exceed_output_rejected() {
        let engine = OeeEngine::new();
        let err = engine.calcular(&entrada(8.0, 1.0, 2.0, 10, 11)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DefectsExceedOutput {
                defeitos: 11,
                total_produzido: 10
            }
        );
    }

    #[test]
    fn test_time_ranges_rejected() {
        let engine = OeeEngine::new();
        assert!(engine.calcular(&entrada(0.0, 0.0, 2.0, 10, 0)).is_err());
        assert!(engine.calcular(&entrada(8.0, -1.0, 2.0, 10, 0)).is_err());
        assert!(engine.calcular(&entrada(8.0, 8.0, 2.0, 10, 0)).is_err());
        assert!(engine.calcular(&entrada(8.0, 1.0, 0.0, 10, 0)).is_err());
        assert!(engine.calcular(&entrada(f64::NAN, 1.0, 2.0, 10, 0)).is_err());
    }

    #[test]
    fn test_classification_bands() {
        let engine = OeeEngine::new();
        assert_eq!(engine.classificar(85.0), ClassificacaoOee::Excellent);
        assert_eq!(engine.classificar(84.99), ClassificacaoOee::Good);
        assert_eq!(engine.classificar(70.0), ClassificacaoOee::Good);
        assert_eq!(engine.classificar(60.0), ClassificacaoOee::Regular);
        assert_eq!(engine.classificar(59.99), ClassificacaoOee::Poor);
        assert_eq!(engine.classificar(120.0), ClassificacaoOee::Excellent);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(arredondar(95.238095), 95.24);
        assert_eq!(arredondar(-3.14159), -3.14);
        assert_eq!(arredondar(12.5), 12.5);
    }

    #[test]
    fn test_trend_window() {
        let engine = OeeEngine::new();
        let base = engine.calcular(&entrada(8.0, 1.0, 2.0, 200, 10)).unwrap().registro;
        let historico: Vec<OeeRegistro> = (0..15)
            .map(|i| OeeRegistro {
                id: Some(i),
                ..base.clone()
            })
            .collect();

        let janela = engine.tendencia(&historico);
        assert_eq!(janela.len(), 10);
        assert_eq!(janela[0].id, Some(5));
        assert_eq!(janela[9].id, Some(14));

        assert_eq!(engine.tendencia(&historico[..3]).len(), 3);
    }
}
