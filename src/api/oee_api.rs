// ==========================================
// 生产驾驶舱系统 - OEE API
// ==========================================
// 职责: OEE 录入计算并写入历史、历史 / 趋势查询
// ==========================================

use std::sync::Arc;

use tracing::info;

use crate::api::error::ApiResult;
use crate::api::notifier::{rejeitar, Notifier};
use crate::domain::oee::{EntradaOee, OeeRegistro};
use crate::domain::types::ClassificacaoOee;
use crate::engine::oee::{CalculoOee, OeeEngine};
use crate::repository::record_store::RecordStore;

pub struct OeeApi {
    store: Arc<RecordStore>,
    notifier: Arc<dyn Notifier>,
    engine: OeeEngine,
}

impl OeeApi {
    pub fn new(store: Arc<RecordStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            engine: OeeEngine::new(),
        }
    }

    /// 计算 OEE 并追加到历史
    ///
    /// # 返回
    /// - Ok(CalculoOee): registro 已带存储分配的 id 与时间戳
    /// - Err(ApiError::ValidationError): 录入不合法，历史不变
    pub fn registrar(&self, entrada: EntradaOee) -> ApiResult<CalculoOee> {
        let mut calculo = match self.engine.calcular(&entrada) {
            Ok(c) => c,
            Err(e) => return Err(rejeitar(self.notifier.as_ref(), e)),
        };

        calculo.registro = self.store.salvar_oee(calculo.registro)?;
        info!(
            "OEE 已登记: oee_total={}, classificacao={}",
            calculo.registro.oee_total, calculo.classificacao
        );
        self.notifier.success(&format!(
            "OEE calculado: {:.2}% ({})",
            calculo.registro.oee_total,
            calculo.classificacao.rotulo()
        ));

        Ok(calculo)
    }

    /// 完整历史（旧 → 新，最多 30 条）
    pub fn historico(&self) -> ApiResult<Vec<OeeRegistro>> {
        Ok(self.store.get_historico_oee()?)
    }

    /// 趋势图数据: 最后 10 条
    pub fn tendencia(&self) -> ApiResult<Vec<OeeRegistro>> {
        let historico = self.store.get_historico_oee()?;
        Ok(self.engine.tendencia(&historico).to_vec())
    }

    /// 最新记录及评级
    pub fn ultimo(&self) -> ApiResult<Option<(OeeRegistro, ClassificacaoOee)>> {
        let historico = self.store.get_historico_oee()?;
        Ok(historico.last().map(|r| {
            let classificacao = self.engine.classificar(r.oee_total);
            (r.clone(), classificacao)
        }))
    }
}
