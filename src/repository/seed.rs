// ==========================================
// 生产驾驶舱系统 - 初始产品目录
// ==========================================
// 职责: products 键缺失时写入的确定性种子数据
// 组成: 6 口味 × 3 规格淋面酱 + 1 木薯片 + 2 口味 × 2 规格糖针
// ==========================================

use crate::domain::product::{slug_sabor, Produto};
use crate::domain::types::Categoria;

/// 淋面酱口味 (展示名, SKU 口味段)
const SABORES_COBERTURA: [(&str, &str); 6] = [
    ("Chocolate", "CHOC"),
    ("Chocolate Meio Amargo", "MA"),
    ("Morango", "MOR"),
    ("Coco", "COC"),
    ("Doce de Leite", "DL"),
    ("Caramelo", "CAR"),
];

/// 规格 → 单件生产时间 (分钟)
pub fn tempo_producao_por_tamanho(tamanho: &str) -> f64 {
    match tamanho {
        "190g" => 30.0,
        "250g" => 25.0,
        "390g" => 35.0,
        "120g" => 20.0,
        "500g" => 28.0,
        "2kg" => 45.0,
        _ => 30.0,
    }
}

/// 规格 → 初始库存
pub fn estoque_inicial(tamanho: &str) -> u32 {
    match tamanho {
        "190g" => 1500,
        "250g" => 2000,
        "390g" => 1200,
        "120g" => 3000,
        "500g" => 1500,
        "2kg" => 800,
        _ => 1000,
    }
}

/// 规格 → 最低库存
pub fn estoque_minimo(tamanho: &str) -> u32 {
    match tamanho {
        "190g" => 500,
        "250g" => 800,
        "390g" => 400,
        "120g" => 1000,
        "500g" => 500,
        "2kg" => 200,
        _ => 300,
    }
}

/// 生成初始产品目录（id 从 1 起按目录顺序分配）
pub fn produtos_iniciais() -> Vec<Produto> {
    let mut produtos = Vec::new();

    for (nome_sabor, _) in SABORES_COBERTURA {
        for tamanho in Categoria::Cobertura.tamanhos_validos() {
            produtos.push(Produto {
                id: None,
                nome: format!("Cobertura {}", nome_sabor),
                categoria: Categoria::Cobertura,
                sabor: Some(slug_sabor(nome_sabor)),
                tamanho: tamanho.to_string(),
                tempo_producao: tempo_producao_por_tamanho(tamanho),
                estoque: estoque_inicial(tamanho),
                estoque_min: estoque_minimo(tamanho),
                codigo: String::new(),
            });
        }
    }

    produtos.push(Produto {
        id: None,
        nome: "Biju Tradicional".to_string(),
        categoria: Categoria::Biju,
        sabor: None,
        tamanho: "250g".to_string(),
        tempo_producao: 25.0,
        estoque: 2000,
        estoque_min: 800,
        codigo: String::new(),
    });

    // 糖针: 彩色款的时间与库存不走规格表
    let granulados: [(&str, &str, &str, f64, u32, u32); 4] = [
        ("Granulado Chocolate", "chocolate", "120g", 20.0, 3000, 1000),
        ("Granulado Chocolate", "chocolate", "500g", 28.0, 1500, 500),
        ("Granulado Colorido", "colorido", "120g", 22.0, 2800, 900),
        ("Granulado Colorido", "colorido", "500g", 30.0, 1400, 450),
    ];
    for (nome, sabor, tamanho, tempo, estoque, minimo) in granulados {
        produtos.push(Produto {
            id: None,
            nome: nome.to_string(),
            categoria: Categoria::Granulado,
            sabor: Some(sabor.to_string()),
            tamanho: tamanho.to_string(),
            tempo_producao: tempo,
            estoque,
            estoque_min: minimo,
            codigo: String::new(),
        });
    }

    for (idx, produto) in produtos.iter_mut().enumerate() {
        produto.id = Some(idx as i64 + 1);
        produto.codigo = produto.gerar_codigo();
    }

    produtos
}
