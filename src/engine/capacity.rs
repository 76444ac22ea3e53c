// ==========================================
// 生产驾驶舱系统 - 产能引擎
// ==========================================
// 职责: 由产能配置 + 停机合计计算 装机/有效/可用/实际 产能
// 单位: 小时/周 (全部机台)
// 红线: 不截断，停机超出时结果为负数并原样呈现
// ==========================================

use crate::domain::capacity::{CapacidadeConfig, ResultadoCapacidade};
use crate::domain::pause::{Pausa, PausasRegistro};
use crate::engine::error::{ValidationError, ValidationResult};

/// 每天小时数
const HORAS_DIA: f64 = 24.0;
/// 每周天数
const DIAS_SEMANA: u32 = 7;

// ==========================================
// CapacityEngine - 产能引擎
// ==========================================
pub struct CapacityEngine {
    // 无状态引擎，存储读写由调用方处理
}

impl CapacityEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 计算产能
    ///
    /// # 参数
    /// - `config`: 产能配置
    /// - `pausas`: 停机集合
    ///
    /// # 返回
    /// ResultadoCapacidade
    pub fn calcular(&self, config: &CapacidadeConfig, pausas: &PausasRegistro) -> ResultadoCapacidade {
        let maquinas = f64::from(config.num_maquinas);

        let instalada = HORAS_DIA * f64::from(DIAS_SEMANA) * maquinas;
        let efetiva = config.horas_dia_efetiva * f64::from(config.dias_semana_efetiva) * maquinas;

        let pausas_programadas_total = pausas.total_programadas();
        let pausas_nao_programadas_total = pausas.total_nao_programadas();

        let disponivel = efetiva - pausas_programadas_total;
        let realizada = disponivel - pausas_nao_programadas_total;

        ResultadoCapacidade {
            instalada,
            efetiva,
            disponivel,
            realizada,
            pausas_programadas_total,
            pausas_nao_programadas_total,
        }
    }

    /// 校验产能配置
    pub fn validar_config(&self, config: &CapacidadeConfig) -> ValidationResult<()> {
        let horas = config.horas_dia_efetiva;
        if !horas.is_finite() || horas <= 0.0 || horas > HORAS_DIA {
            return Err(ValidationError::out_of_range(
                "horasDiaEfetiva",
                format!("deve estar entre 0 e 24, recebido {}", horas),
            ));
        }
        if config.dias_semana_efetiva == 0 || config.dias_semana_efetiva > DIAS_SEMANA {
            return Err(ValidationError::out_of_range(
                "diasSemanaEfetiva",
                format!("deve estar entre 1 e 7, recebido {}", config.dias_semana_efetiva),
            ));
        }
        if config.num_maquinas == 0 {
            return Err(ValidationError::out_of_range("numMaquinas", "é necessária pelo menos 1 máquina"));
        }
        Ok(())
    }

    /// 校验停机录入
    pub fn validar_pausa(&self, pausa: &Pausa) -> ValidationResult<()> {
        if pausa.descricao.trim().is_empty() {
            return Err(ValidationError::Required("descricao"));
        }
        if !pausa.horas.is_finite() || pausa.horas <= 0.0 {
            return Err(ValidationError::out_of_range(
                "horas",
                format!("deve ser maior que zero, recebido {}", pausa.horas),
            ));
        }
        Ok(())
    }
}

impl Default for CapacityEngine {
    fn default() -> Self {
        Self::new()
    }
}
