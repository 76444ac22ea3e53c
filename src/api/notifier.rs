// ==========================================
// 生产驾驶舱系统 - 界面通知通道
// ==========================================
// 职责: 定义通知 trait，API 层在成功 / 校验失败时调用
// 说明: 渲染层实现此 trait（toast / alert），核心不关心展示方式
// ==========================================

use crate::api::error::ApiError;
use crate::engine::error::ValidationError;
use serde::Serialize;
use std::sync::Mutex;
use tracing::{debug, info, warn};

/// 通知类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoNotificacao {
    Sucesso,
    Erro,
}

/// 一条通知
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notificacao {
    pub tipo: TipoNotificacao,
    pub mensagem: String,
}

/// 界面通知 Trait
pub trait Notifier: Send + Sync {
    fn success(&self, mensagem: &str);
    fn error(&self, mensagem: &str);
}

/// 校验失败: 通知界面并转换为 ApiError
pub(crate) fn rejeitar(notifier: &dyn Notifier, err: ValidationError) -> ApiError {
    warn!("输入被拒绝: {}", err);
    notifier.error(&err.to_string());
    ApiError::from(err)
}

/// 默认实现: 写入 tracing 日志
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, mensagem: &str) {
        info!(target: "painel_producao::notificacao", "{}", mensagem);
    }

    fn error(&self, mensagem: &str) {
        warn!(target: "painel_producao::notificacao", "{}", mensagem);
    }
}

/// 空操作通知（单元测试等不需要通知的场景）
#[derive(Debug, Clone, Default)]
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    fn success(&self, mensagem: &str) {
        debug!("NoOpNotifier: 跳过通知 - {}", mensagem);
    }

    fn error(&self, mensagem: &str) {
        debug!("NoOpNotifier: 跳过通知 - {}", mensagem);
    }
}

/// 记录全部通知，供调用方事后读取
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    registros: Mutex<Vec<Notificacao>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn registrar(&self, tipo: TipoNotificacao, mensagem: &str) {
        // 锁中毒时仍可安全追加
        let mut registros = match self.registros.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        registros.push(Notificacao {
            tipo,
            mensagem: mensagem.to_string(),
        });
    }

    /// 已收到的通知（按时间顺序）
    pub fn notificacoes(&self) -> Vec<Notificacao> {
        match self.registros.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn ultima(&self) -> Option<Notificacao> {
        self.notificacoes().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, mensagem: &str) {
        self.registrar(TipoNotificacao::Sucesso, mensagem);
    }

    fn error(&self, mensagem: &str) {
        self.registrar(TipoNotificacao::Erro, mensagem);
    }
}
