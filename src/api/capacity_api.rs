// ==========================================
// 生产驾驶舱系统 - 产能 API
// ==========================================
// 职责: 产能配置、停机登记 / 删除、产能计算、产能导出
// 流程: 重新读取 → 校验 → 计算 → 持久化 → 通知
// ==========================================

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{json, Value};
use tracing::debug;

use crate::api::error::ApiResult;
use crate::api::export::{gravar_json, nome_arquivo};
use crate::api::notifier::{rejeitar, Notifier};
use crate::domain::capacity::{CapacidadeConfig, ResultadoCapacidade};
use crate::domain::pause::{Pausa, PausasRegistro};
use crate::domain::types::TipoPausa;
use crate::engine::capacity::CapacityEngine;
use crate::repository::record_store::RecordStore;

/// 导出文件名前缀
const PREFIXO_EXPORTACAO: &str = "capacidade-produtiva";

// ==========================================
// CapacityApi - 产能 API
// ==========================================
pub struct CapacityApi {
    store: Arc<RecordStore>,
    notifier: Arc<dyn Notifier>,
    engine: CapacityEngine,
}

impl CapacityApi {
    pub fn new(store: Arc<RecordStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            engine: CapacityEngine::new(),
        }
    }

    pub fn get_config(&self) -> ApiResult<CapacidadeConfig> {
        Ok(self.store.get_config_capacidade()?)
    }

    /// 更新产能配置
    ///
    /// # 返回
    /// - Ok(ResultadoCapacidade): 以新配置重新计算的产能
    /// - Err(ApiError::ValidationError): 配置越界，未做任何修改
    pub fn atualizar_config(&self, config: CapacidadeConfig) -> ApiResult<ResultadoCapacidade> {
        if let Err(e) = self.engine.validar_config(&config) {
            return Err(rejeitar(self.notifier.as_ref(), e));
        }

        self.store.salvar_config_capacidade(&config)?;
        self.notifier.success("Configuração salva com sucesso!");

        self.calcular()
    }

    pub fn get_pausas(&self) -> ApiResult<PausasRegistro> {
        Ok(self.store.get_pausas()?)
    }

    /// 登记停机
    ///
    /// # 参数
    /// - `tipo`: 计划 / 非计划
    /// - `descricao`: 描述（不可为空）
    /// - `horas`: 时长，> 0
    pub fn adicionar_pausa(
        &self,
        tipo: TipoPausa,
        descricao: &str,
        horas: f64,
    ) -> ApiResult<Pausa> {
        let pausa = Pausa::nova(tipo, descricao.trim(), horas);
        if let Err(e) = self.engine.validar_pausa(&pausa) {
            return Err(rejeitar(self.notifier.as_ref(), e));
        }

        let pausa = self.store.salvar_pausa(pausa)?;
        self.notifier.success("Pausa adicionada com sucesso!");
        Ok(pausa)
    }

    /// 删除停机（id 不存在时静默忽略）
    pub fn excluir_pausa(&self, id: i64, tipo: TipoPausa) -> ApiResult<bool> {
        let removida = self.store.excluir_pausa(id, tipo)?;
        if removida {
            self.notifier.success("Pausa removida");
        }
        Ok(removida)
    }

    /// 以当前存储内容计算产能
    pub fn calcular(&self) -> ApiResult<ResultadoCapacidade> {
        let config = self.store.get_config_capacidade()?;
        let pausas = self.store.get_pausas()?;
        let resultado = self.engine.calcular(&config, &pausas);
        debug!(
            "产能计算: instalada={}, efetiva={}, realizada={}",
            resultado.instalada, resultado.efetiva, resultado.realizada
        );
        Ok(resultado)
    }

    /// 产能导出文档
    ///
    /// 结构: `{config, pausas, calculos:{instalada, efetiva, programadasTotal, naoProgramadasTotal}, data}`
    pub fn exportar(&self) -> ApiResult<Value> {
        let config = self.store.get_config_capacidade()?;
        let pausas = self.store.get_pausas()?;
        let resultado = self.engine.calcular(&config, &pausas);

        Ok(json!({
            "config": config,
            "pausas": pausas,
            "calculos": {
                "instalada": resultado.instalada,
                "efetiva": resultado.efetiva,
                "programadasTotal": resultado.pausas_programadas_total,
                "naoProgramadasTotal": resultado.pausas_nao_programadas_total,
            },
            "data": self.store.clock().timestamp(),
        }))
    }

    /// 导出到目录，文件名 `capacidade-produtiva-YYYY-MM-DD.json`
    pub fn exportar_para(&self, dir: &Path) -> ApiResult<PathBuf> {
        let documento = self.exportar()?;
        let nome = nome_arquivo(PREFIXO_EXPORTACAO, self.store.clock().today());
        let caminho = gravar_json(dir, &nome, &documento)?;
        self.notifier.success("Dados exportados com sucesso!");
        Ok(caminho)
    }
}
