// ==========================================
// 生产驾驶舱系统 - 库存引擎
// ==========================================
// 职责: 按品类分组、库存状态判定、品类预警、目录筛选、产品校验
// 阈值: critical = 库存 < 最低库存 × 0.5；warning = 库存 < 最低库存
// ==========================================

use crate::domain::product::Produto;
use crate::domain::types::{Categoria, NivelAlerta};
use crate::engine::error::{ValidationError, ValidationResult};
use serde::Serialize;

/// 严重缺货系数
const FATOR_CRITICO: f64 = 0.5;
/// 库存条满格 = 最低库存 × 2
const FATOR_BARRA: f64 = 2.0;

// ==========================================
// ProdutosPorCategoria - 分组结果
// ==========================================
// 三个品类键始终存在
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProdutosPorCategoria {
    pub cobertura: Vec<Produto>,
    pub biju: Vec<Produto>,
    pub granulado: Vec<Produto>,
}

impl ProdutosPorCategoria {
    pub fn categoria(&self, categoria: Categoria) -> &[Produto] {
        match categoria {
            Categoria::Cobertura => &self.cobertura,
            Categoria::Biju => &self.biju,
            Categoria::Granulado => &self.granulado,
        }
    }

    fn categoria_mut(&mut self, categoria: Categoria) -> &mut Vec<Produto> {
        match categoria {
            Categoria::Cobertura => &mut self.cobertura,
            Categoria::Biju => &mut self.biju,
            Categoria::Granulado => &mut self.granulado,
        }
    }
}

/// 各品类数量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContagemCategorias {
    pub cobertura: usize,
    pub biju: usize,
    pub granulado: usize,
}

// ==========================================
// AlertaCategoria - 品类预警
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertaCategoria {
    pub categoria: Categoria,
    pub nivel: NivelAlerta,
    pub criticos: usize,   // 严重缺货数
    pub baixos: usize,     // 低于最低库存数 (含严重)
    pub mensagem: String,
}

// ==========================================
// FiltroProdutos - 目录筛选条件
// ==========================================
// 所有条件取交集；None 表示不过滤
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FiltroProdutos {
    pub busca: Option<String>,          // 名称 / SKU 模糊匹配 (忽略大小写)
    pub categoria: Option<Categoria>,
    pub sabor: Option<String>,
    pub tamanho: Option<String>,
    pub status: Option<NivelAlerta>,
}

// ==========================================
// InventoryEngine - 库存引擎
// ==========================================
pub struct InventoryEngine {
    // 无状态引擎
}

impl InventoryEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 单个产品的库存状态
    pub fn status_estoque(&self, produto: &Produto) -> NivelAlerta {
        let estoque = f64::from(produto.estoque);
        let minimo = f64::from(produto.estoque_min);

        if estoque < minimo * FATOR_CRITICO {
            NivelAlerta::Critical
        } else if estoque < minimo {
            NivelAlerta::Warning
        } else {
            NivelAlerta::Ok
        }
    }

    /// 库存条百分比 = min(库存 / (最低库存 × 2) × 100, 100)
    pub fn percentual_barra(&self, produto: &Produto) -> f64 {
        if produto.estoque_min == 0 {
            return 100.0;
        }
        let percentual =
            f64::from(produto.estoque) / (f64::from(produto.estoque_min) * FATOR_BARRA) * 100.0;
        percentual.min(100.0)
    }

    /// 按品类分组（保持原顺序）
    pub fn agrupar(&self, produtos: &[Produto]) -> ProdutosPorCategoria {
        let mut grupos = ProdutosPorCategoria::default();
        for produto in produtos {
            grupos.categoria_mut(produto.categoria).push(produto.clone());
        }
        grupos
    }

    pub fn contagens(&self, produtos: &[Produto]) -> ContagemCategorias {
        let contar = |categoria: Categoria| {
            produtos.iter().filter(|p| p.categoria == categoria).count()
        };
        ContagemCategorias {
            cobertura: contar(Categoria::Cobertura),
            biju: contar(Categoria::Biju),
            granulado: contar(Categoria::Granulado),
        }
    }

    /// 品类预警
    ///
    /// # 参数
    /// - `categoria`: 品类
    /// - `produtos`: 全部产品（内部按品类过滤）
    pub fn alerta_categoria(&self, categoria: Categoria, produtos: &[Produto]) -> AlertaCategoria {
        let mut criticos = 0;
        let mut baixos = 0;

        for produto in produtos.iter().filter(|p| p.categoria == categoria) {
            match self.status_estoque(produto) {
                NivelAlerta::Critical => {
                    criticos += 1;
                    baixos += 1;
                }
                NivelAlerta::Warning => baixos += 1,
                NivelAlerta::Ok => {}
            }
        }

        let (nivel, mensagem) = if criticos > 0 {
            (
                NivelAlerta::Critical,
                format!("{} produto(s) com estoque CRÍTICO!", criticos),
            )
        } else if baixos > 0 {
            (
                NivelAlerta::Warning,
                format!("{} produto(s) com estoque baixo", baixos),
            )
        } else {
            (NivelAlerta::Ok, "Todos os produtos com estoque OK".to_string())
        };

        AlertaCategoria {
            categoria,
            nivel,
            criticos,
            baixos,
            mensagem,
        }
    }

    /// 三个品类的预警（固定顺序）
    pub fn alertas(&self, produtos: &[Produto]) -> Vec<AlertaCategoria> {
        Categoria::TODAS
            .iter()
            .map(|c| self.alerta_categoria(*c, produtos))
            .collect()
    }

    /// 低于最低库存的产品数
    pub fn contar_estoque_baixo(&self, produtos: &[Produto]) -> usize {
        produtos.iter().filter(|p| p.estoque < p.estoque_min).count()
    }

    /// 目录筛选
    pub fn filtrar(&self, produtos: &[Produto], filtro: &FiltroProdutos) -> Vec<Produto> {
        let busca = filtro
            .busca
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_lowercase);

        produtos
            .iter()
            .filter(|p| match &busca {
                Some(termo) => {
                    p.nome.to_lowercase().contains(termo) || p.codigo.to_lowercase().contains(termo)
                }
                None => true,
            })
            .filter(|p| filtro.categoria.map_or(true, |c| p.categoria == c))
            .filter(|p| {
                filtro
                    .sabor
                    .as_deref()
                    .map_or(true, |s| p.sabor.as_deref() == Some(s))
            })
            .filter(|p| filtro.tamanho.as_deref().map_or(true, |t| p.tamanho == t))
            .filter(|p| filtro.status.map_or(true, |s| self.status_estoque(p) == s))
            .cloned()
            .collect()
    }

    /// 校验产品（新建与更新共用）
    pub fn validar_produto(&self, produto: &Produto) -> ValidationResult<()> {
        if produto.nome.trim().is_empty() {
            return Err(ValidationError::Required("nome"));
        }

        let categoria = produto.categoria;
        if !categoria.tamanhos_validos().contains(&produto.tamanho.as_str()) {
            return Err(ValidationError::InvalidSize {
                categoria,
                tamanho: produto.tamanho.clone(),
            });
        }

        let tem_sabor = produto
            .sabor
            .as_deref()
            .map_or(false, |s| !s.trim().is_empty());
        if categoria.exige_sabor() && !tem_sabor {
            return Err(ValidationError::FlavorRequired(categoria));
        }
        if !categoria.exige_sabor() && tem_sabor {
            return Err(ValidationError::FlavorNotAllowed(categoria));
        }

        if !produto.tempo_producao.is_finite() || produto.tempo_producao <= 0.0 {
            return Err(ValidationError::out_of_range(
                "tempoProducao",
                format!("deve ser maior que zero, recebido {}", produto.tempo_producao),
            ));
        }
        if produto.estoque_min == 0 {
            return Err(ValidationError::out_of_range("estoqueMin", "deve ser maior que zero"));
        }
        Ok(())
    }
}

impl Default for InventoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::seed::produtos_iniciais;

    fn produto(categoria: Categoria, estoque: u32, estoque_min: u32) -> Produto {
        let (sabor, tamanho) = match categoria {
            Categoria::Cobertura => (Some("morango".to_string()), "190g"),
            Categoria::Biju => (None, "250g"),
            Categoria::Granulado => (Some("colorido".to_string()), "120g"),
        };
        let mut p = Produto {
            id: None,
            nome: "Produto".to_string(),
            categoria,
            sabor,
            tamanho: tamanho.to_string(),
            tempo_producao: 30.0,
            estoque,
            estoque_min,
            codigo: String::new(),
        };
        p.codigo = p.gerar_codigo();
        p
    }

    #[test]
    fn test_stock_levels() {
        let engine = InventoryEngine::new();
        assert_eq!(
            engine.status_estoque(&produto(Categoria::Biju, 400, 1000)),
            NivelAlerta::Critical
        );
        assert_eq!(
            engine.status_estoque(&produto(Categoria::Biju, 800, 1000)),
            NivelAlerta::Warning
        );
        assert_eq!(
            engine.status_estoque(&produto(Categoria::Biju, 2000, 1000)),
            NivelAlerta::Ok
        );
        // 边界: 恰好等于一半为 warning，恰好等于最低库存为 ok
        assert_eq!(
            engine.status_estoque(&produto(Categoria::Biju, 500, 1000)),
            NivelAlerta::Warning
        );
        assert_eq!(
            engine.status_estoque(&produto(Categoria::Biju, 1000, 1000)),
            NivelAlerta::Ok
        );
    }

    #[test]
    fn test_bar_percentage() {
        let engine = InventoryEngine::new();
        assert_eq!(engine.percentual_barra(&produto(Categoria::Biju, 500, 1000)), 25.0);
        assert_eq!(engine.percentual_barra(&produto(Categoria::Biju, 5000, 1000)), 100.0);
        assert_eq!(engine.percentual_barra(&produto(Categoria::Biju, 10, 0)), 100.0);
    }

    #[test]
    fn test_category_alert() {
        let engine = InventoryEngine::new();
        let produtos = vec![
            produto(Categoria::Cobertura, 100, 1000),
            produto(Categoria::Cobertura, 900, 1000),
            produto(Categoria::Biju, 900, 1000),
            produto(Categoria::Granulado, 3000, 1000),
        ];

        let cobertura = engine.alerta_categoria(Categoria::Cobertura, &produtos);
        assert_eq!(cobertura.nivel, NivelAlerta::Critical);
        assert_eq!(cobertura.criticos, 1);
        assert_eq!(cobertura.baixos, 2);
        assert_eq!(cobertura.mensagem, "1 produto(s) com estoque CRÍTICO!");

        let biju = engine.alerta_categoria(Categoria::Biju, &produtos);
        assert_eq!(biju.nivel, NivelAlerta::Warning);
        assert_eq!(biju.mensagem, "1 produto(s) com estoque baixo");

        let granulado = engine.alerta_categoria(Categoria::Granulado, &produtos);
        assert_eq!(granulado.nivel, NivelAlerta::Ok);
        assert_eq!(granulado.mensagem, "Todos os produtos com estoque OK");

        assert_eq!(engine.contar_estoque_baixo(&produtos), 3);
    }

    #[test]
    fn test_group_always_has_all_categories() {
        let engine = InventoryEngine::new();
        let grupos = engine.agrupar(&[produto(Categoria::Biju, 10, 5)]);
        assert_eq!(grupos.biju.len(), 1);
        assert!(grupos.cobertura.is_empty());

        let json = serde_json::to_value(&grupos).unwrap();
        assert!(json.get("granulado").is_some());
    }

    #[test]
    fn test_seed_catalog_counts() {
        let engine = InventoryEngine::new();
        let produtos = produtos_iniciais();
        let contagens = engine.contagens(&produtos);
        assert_eq!(contagens.cobertura, 18);
        assert_eq!(contagens.biju, 1);
        assert_eq!(contagens.granulado, 4);
        // 种子库存均高于最低库存
        assert_eq!(engine.contar_estoque_baixo(&produtos), 0);
    }

    #[test]
    fn test_filters() {
        let engine = InventoryEngine::new();
        let produtos = produtos_iniciais();

        let filtro = FiltroProdutos {
            busca: Some("choc".to_string()),
            ..Default::default()
        };
        // 6 淋面酱 (CHOC + MA 名称含 chocolate) + 2 糖针
        assert_eq!(engine.filtrar(&produtos, &filtro).len(), 8);

        let filtro = FiltroProdutos {
            categoria: Some(Categoria::Cobertura),
            tamanho: Some("2kg".to_string()),
            ..Default::default()
        };
        assert_eq!(engine.filtrar(&produtos, &filtro).len(), 6);

        let filtro = FiltroProdutos {
            sabor: Some("colorido".to_string()),
            ..Default::default()
        };
        let coloridos = engine.filtrar(&produtos, &filtro);
        assert_eq!(coloridos.len(), 2);
        assert!(coloridos.iter().all(|p| p.categoria == Categoria::Granulado));

        let filtro = FiltroProdutos {
            busca: Some("gran-col-500".to_string()),
            ..Default::default()
        };
        assert_eq!(engine.filtrar(&produtos, &filtro).len(), 1);

        let filtro = FiltroProdutos {
            status: Some(NivelAlerta::Critical),
            ..Default::default()
        };
        assert!(engine.filtrar(&produtos, &filtro).is_empty());
    }

    #[test]
    fn test_size_must_match_category() {
        let engine = InventoryEngine::new();
        let mut p = produto(Categoria::Cobertura, 10, 5);
        p.tamanho = "120g".to_string();
        assert_eq!(
            engine.validar_produto(&p),
            Err(ValidationError::InvalidSize {
                categoria: Categoria::Cobertura,
                tamanho: "120g".to_string()
            })
        );
    }

    #[test]
    fn test_product_validation_rules() {
        let engine = InventoryEngine::new();
        assert!(engine.validar_produto(&produto(Categoria::Granulado, 10, 5)).is_ok());

        let mut p = produto(Categoria::Biju, 10, 5);
        p.sabor = Some("coco".to_string());
        assert_eq!(
            engine.validar_produto(&p),
            Err(ValidationError::FlavorNotAllowed(Categoria::Biju))
        );

        let mut p = produto(Categoria::Cobertura, 10, 5);
        p.sabor = None;
        assert_eq!(
            engine.validar_produto(&p),
            Err(ValidationError::FlavorRequired(Categoria::Cobertura))
        );

        let mut p = produto(Categoria::Biju, 10, 5);
        p.nome = " ".to_string();
        assert_eq!(engine.validar_produto(&p), Err(ValidationError::Required("nome")));

        let mut p = produto(Categoria::Biju, 10, 0);
        assert!(engine.validar_produto(&p).is_err());
        p.estoque_min = 5;
        p.tempo_producao = 0.0;
        assert!(engine.validar_produto(&p).is_err());
    }
}
