// ==========================================
// 生产驾驶舱系统 - 引擎层校验错误
// ==========================================
// 工具: thiserror 派生宏
// 说明: 校验失败时不得产生任何部分计算或持久化
// 消息: 葡萄牙语，直接作为界面错误通知展示
// ==========================================

use crate::domain::types::Categoria;
use thiserror::Error;

/// 输入校验错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    // ===== 通用 =====
    #[error("Campo obrigatório não preenchido: {0}")]
    Required(&'static str),

    #[error("Valor inválido em {field}: {message}")]
    OutOfRange { field: &'static str, message: String },

    // ===== 产品 =====
    #[error("Tamanho {tamanho} não é válido para a categoria {categoria}")]
    InvalidSize { categoria: Categoria, tamanho: String },

    #[error("Produtos da categoria {0} precisam de um sabor")]
    FlavorRequired(Categoria),

    #[error("Produtos da categoria {0} não têm sabor")]
    FlavorNotAllowed(Categoria),

    // ===== OEE =====
    #[error("Defeitos ({defeitos}) não podem ser maiores que o total produzido ({total_produzido})")]
    DefectsExceedOutput { defeitos: u32, total_produzido: u32 },

    #[error("Total produzido deve ser maior que zero")]
    ZeroOutput,
}

impl ValidationError {
    pub fn out_of_range(field: &'static str, message: impl Into<String>) -> Self {
        ValidationError::OutOfRange {
            field,
            message: message.into(),
        }
    }
}

/// Result 类型别名
pub type ValidationResult<T> = Result<T, ValidationError>;
