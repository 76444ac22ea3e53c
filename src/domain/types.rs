// ==========================================
// 生产驾驶舱系统 - 领域类型定义
// ==========================================
// 职责: 品类、停机类型、看板列、优先级、预警等级、OEE 评级
// 序列化格式: 与本地存储中的 JSON 文档保持一致
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 产品品类 (Categoria)
// ==========================================
// 红线: 每个产品有且仅有一个品类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Categoria {
    Cobertura, // 淋面酱
    Biju,      // 木薯片
    Granulado, // 糖针
}

impl Categoria {
    /// 全部品类（固定展示顺序）
    pub const TODAS: [Categoria; 3] = [Categoria::Cobertura, Categoria::Biju, Categoria::Granulado];

    /// 存储键
    pub fn as_str(&self) -> &'static str {
        match self {
            Categoria::Cobertura => "cobertura",
            Categoria::Biju => "biju",
            Categoria::Granulado => "granulado",
        }
    }

    /// 展示名称
    pub fn nome_exibicao(&self) -> &'static str {
        match self {
            Categoria::Cobertura => "Cobertura",
            Categoria::Biju => "Biju",
            Categoria::Granulado => "Granulado",
        }
    }

    /// 该品类允许的规格集合
    pub fn tamanhos_validos(&self) -> &'static [&'static str] {
        match self {
            Categoria::Cobertura => &["190g", "390g", "2kg"],
            Categoria::Biju => &["250g"],
            Categoria::Granulado => &["120g", "500g"],
        }
    }

    /// SKU 前缀
    pub fn prefixo_codigo(&self) -> &'static str {
        match self {
            Categoria::Cobertura => "COB",
            Categoria::Biju => "BIJU",
            Categoria::Granulado => "GRAN",
        }
    }

    /// 是否必须填写口味
    pub fn exige_sabor(&self) -> bool {
        !matches!(self, Categoria::Biju)
    }
}

impl fmt::Display for Categoria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Categoria {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cobertura" => Ok(Categoria::Cobertura),
            "biju" => Ok(Categoria::Biju),
            "granulado" => Ok(Categoria::Granulado),
            other => Err(format!("未知品类: {}", other)),
        }
    }
}

// ==========================================
// 停机类型 (TipoPausa)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TipoPausa {
    Programada,    // 计划停机
    NaoProgramada, // 非计划停机
}

impl fmt::Display for TipoPausa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TipoPausa::Programada => write!(f, "programada"),
            TipoPausa::NaoProgramada => write!(f, "naoProgramada"),
        }
    }
}

// ==========================================
// 看板列 / 任务状态 (StatusKanban)
// ==========================================
// 任意列之间可直接移动，不强制线性流转
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKanban {
    #[serde(rename = "a-fazer")]
    AFazer,
    #[serde(rename = "fazendo")]
    Fazendo,
    #[serde(rename = "testando")]
    Testando,
    #[serde(rename = "concluido")]
    Concluido,
}

impl StatusKanban {
    /// 固定列顺序
    pub const COLUNAS: [StatusKanban; 4] = [
        StatusKanban::AFazer,
        StatusKanban::Fazendo,
        StatusKanban::Testando,
        StatusKanban::Concluido,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKanban::AFazer => "a-fazer",
            StatusKanban::Fazendo => "fazendo",
            StatusKanban::Testando => "testando",
            StatusKanban::Concluido => "concluido",
        }
    }

    /// 列展示名称
    pub fn nome_exibicao(&self) -> &'static str {
        match self {
            StatusKanban::AFazer => "A Fazer",
            StatusKanban::Fazendo => "Fazendo",
            StatusKanban::Testando => "Testando",
            StatusKanban::Concluido => "Concluído",
        }
    }
}

impl fmt::Display for StatusKanban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusKanban {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusKanban::COLUNAS
            .iter()
            .copied()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| format!("未知看板列: {}", s))
    }
}

// ==========================================
// 任务优先级 (Prioridade)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prioridade {
    Alta,
    #[default]
    Media,
    Baixa,
}

impl Prioridade {
    /// 宽松解析: 无法识别时回退为 Media
    pub fn parse_ou_padrao(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "alta" => Prioridade::Alta,
            "baixa" => Prioridade::Baixa,
            _ => Prioridade::Media,
        }
    }

    pub fn nome_exibicao(&self) -> &'static str {
        match self {
            Prioridade::Alta => "Alta",
            Prioridade::Media => "Média",
            Prioridade::Baixa => "Baixa",
        }
    }
}

impl fmt::Display for Prioridade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prioridade::Alta => write!(f, "alta"),
            Prioridade::Media => write!(f, "media"),
            Prioridade::Baixa => write!(f, "baixa"),
        }
    }
}

// ==========================================
// 库存预警等级 (NivelAlerta)
// ==========================================
// 红线: 等级制 critical > warning > ok
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NivelAlerta {
    Ok,
    Warning,
    Critical,
}

impl fmt::Display for NivelAlerta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NivelAlerta::Ok => write!(f, "ok"),
            NivelAlerta::Warning => write!(f, "warning"),
            NivelAlerta::Critical => write!(f, "critical"),
        }
    }
}

// ==========================================
// OEE 评级 (ClassificacaoOee)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassificacaoOee {
    Excellent, // >= 85
    Good,      // >= 70
    Regular,   // >= 60
    Poor,      // < 60
}

impl ClassificacaoOee {
    /// 葡语标签（界面显示）
    pub fn rotulo(&self) -> &'static str {
        match self {
            ClassificacaoOee::Excellent => "Excelente",
            ClassificacaoOee::Good => "Bom",
            ClassificacaoOee::Regular => "Regular",
            ClassificacaoOee::Poor => "Ruim",
        }
    }

    /// 徽章颜色
    pub fn cor(&self) -> &'static str {
        match self {
            ClassificacaoOee::Excellent => "#10b981",
            ClassificacaoOee::Good | ClassificacaoOee::Regular => "#f59e0b",
            ClassificacaoOee::Poor => "#ef4444",
        }
    }
}

impl fmt::Display for ClassificacaoOee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassificacaoOee::Excellent => write!(f, "Excellent"),
            ClassificacaoOee::Good => write!(f, "Good"),
            ClassificacaoOee::Regular => write!(f, "Regular"),
            ClassificacaoOee::Poor => write!(f, "Poor"),
        }
    }
}
