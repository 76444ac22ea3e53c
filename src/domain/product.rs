// ==========================================
// 生产驾驶舱系统 - 产品领域模型
// ==========================================
// 职责: 产品实体、SKU 派生规则、口味字典
// 红线: 规格必须属于所在品类的合法规格集合
// ==========================================

use crate::domain::types::Categoria;
use serde::{Deserialize, Serialize};

// ==========================================
// Produto - 产品
// ==========================================
// 对齐: 本地存储 products 集合中的单条记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Produto {
    // ===== 主键 =====
    #[serde(default)]
    pub id: Option<i64>,           // 存储分配；None 表示新建

    // ===== 基本信息 =====
    pub nome: String,              // 产品名称
    pub categoria: Categoria,      // 品类
    #[serde(default)]
    pub sabor: Option<String>,     // 口味 slug (biju 为空)
    pub tamanho: String,           // 规格代码 (190g / 2kg ...)

    // ===== 生产与库存 =====
    pub tempo_producao: f64,       // 单件生产时间 (分钟)
    pub estoque: u32,              // 当前库存
    pub estoque_min: u32,          // 补货阈值

    // ===== 派生字段 =====
    #[serde(default)]
    pub codigo: String,            // SKU (不强制唯一)
}

impl Produto {
    /// 按品类 + 口味 + 规格派生 SKU
    ///
    /// # 规则
    /// - 前缀: COB / BIJU / GRAN
    /// - 口味段: 口味字典中找不到时省略
    /// - 规格段: 去掉 "g"，2kg 记为 2K
    pub fn gerar_codigo(&self) -> String {
        let prefixo = self.categoria.prefixo_codigo();
        let sabor = self
            .sabor
            .as_deref()
            .and_then(codigo_sabor)
            .unwrap_or("");
        let tamanho = codigo_tamanho(&self.tamanho);

        if sabor.is_empty() {
            format!("{}-{}", prefixo, tamanho)
        } else {
            format!("{}-{}-{}", prefixo, sabor, tamanho)
        }
    }

    /// 每小时产量 = floor(60 / 单件分钟)
    pub fn producao_por_hora(&self) -> u32 {
        if self.tempo_producao <= 0.0 {
            return 0;
        }
        (60.0 / self.tempo_producao).floor() as u32
    }

    /// 建议最大库存 = 最低库存 × 3
    pub fn estoque_maximo(&self) -> u32 {
        self.estoque_min.saturating_mul(3)
    }

    /// 补货点 = 最低库存 × 1.5
    pub fn ponto_reposicao(&self) -> f64 {
        f64::from(self.estoque_min) * 1.5
    }
}

/// 规格代码
pub fn codigo_tamanho(tamanho: &str) -> String {
    if tamanho == "2kg" {
        return "2K".to_string();
    }
    tamanho.replacen('g', "", 1)
}

/// 口味 slug → SKU 口味段
pub fn codigo_sabor(sabor: &str) -> Option<&'static str> {
    match sabor {
        "chocolate" => Some("CHOC"),
        "chocolate-meio-amargo" => Some("MA"),
        "morango" => Some("MOR"),
        "coco" => Some("COC"),
        "doce-de-leite" => Some("DL"),
        "caramelo" => Some("CAR"),
        "colorido" => Some("COL"),
        _ => None,
    }
}

/// 口味 slug → 展示名称（未知 slug 原样返回）
pub fn nome_sabor(sabor: &str) -> &str {
    match sabor {
        "chocolate" => "Chocolate",
        "chocolate-meio-amargo" => "Chocolate Meio Amargo",
        "morango" => "Morango",
        "coco" => "Coco",
        "doce-de-leite" => "Doce de Leite",
        "caramelo" => "Caramelo",
        "colorido" => "Colorido",
        other => other,
    }
}

/// 展示名称 → 口味 slug ("Doce de Leite" → "doce-de-leite")
pub fn slug_sabor(nome: &str) -> String {
    nome.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn produto(categoria: Categoria, sabor: Option<&str>, tamanho: &str) -> Produto {
        Produto {
            id: None,
            nome: "Teste".to_string(),
            categoria,
            sabor: sabor.map(|s| s.to_string()),
            tamanho: tamanho.to_string(),
            tempo_producao: 30.0,
            estoque: 100,
            estoque_min: 50,
            codigo: String::new(),
        }
    }

    #[test]
    fn test_gerar_codigo_com_sabor() {
        let p = produto(Categoria::Cobertura, Some("doce-de-leite"), "390g");
        assert_eq!(p.gerar_codigo(), "COB-DL-390");
    }

    #[test]
    fn test_gerar_codigo_2kg() {
        let p = produto(Categoria::Cobertura, Some("chocolate"), "2kg");
        assert_eq!(p.gerar_codigo(), "COB-CHOC-2K");
    }

    #[test]
    fn test_gerar_codigo_sem_sabor() {
        let p = produto(Categoria::Biju, None, "250g");
        assert_eq!(p.gerar_codigo(), "BIJU-250");

        // 口味不在字典中时省略口味段
        let p = produto(Categoria::Granulado, Some("menta"), "120g");
        assert_eq!(p.gerar_codigo(), "GRAN-120");
    }

    #[test]
    fn test_derived_stock_figures() {
        let p = produto(Categoria::Biju, None, "250g");
        assert_eq!(p.producao_por_hora(), 2);
        assert_eq!(p.estoque_maximo(), 150);
        assert_eq!(p.ponto_reposicao(), 75.0);
    }

    #[test]
    fn test_slug_sabor() {
        assert_eq!(slug_sabor("Chocolate Meio Amargo"), "chocolate-meio-amargo");
        assert_eq!(nome_sabor("coco"), "Coco");
    }

    #[test]
    fn test_json_field_names() {
        let mut p = produto(Categoria::Granulado, Some("colorido"), "500g");
        p.id = Some(7);
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["tempoProducao"], 30.0);
        assert_eq!(v["estoqueMin"], 50);
        assert_eq!(v["categoria"], "granulado");
        assert_eq!(v["id"], 7);
    }
}
