// ==========================================
// 生产驾驶舱系统 - 产品 API
// ==========================================
// 职责: 产品目录增删改查、分组、筛选、库存预警、产品导出
// 红线: 规格不属于品类时拒绝保存
// ==========================================

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{json, Value};
use tracing::debug;

use crate::api::error::ApiResult;
use crate::api::export::{gravar_json, nome_arquivo};
use crate::api::notifier::{rejeitar, Notifier};
use crate::domain::product::Produto;
use crate::engine::inventory::{
    AlertaCategoria, ContagemCategorias, FiltroProdutos, InventoryEngine, ProdutosPorCategoria,
};
use crate::repository::record_store::RecordStore;

const PREFIXO_EXPORTACAO: &str = "produtos";

// ==========================================
// ProductApi - 产品 API
// ==========================================
pub struct ProductApi {
    store: Arc<RecordStore>,
    notifier: Arc<dyn Notifier>,
    engine: InventoryEngine,
}

impl ProductApi {
    pub fn new(store: Arc<RecordStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            engine: InventoryEngine::new(),
        }
    }

    pub fn listar(&self) -> ApiResult<Vec<Produto>> {
        Ok(self.store.get_produtos()?)
    }

    pub fn buscar(&self, id: i64) -> ApiResult<Option<Produto>> {
        let produtos = self.store.get_produtos()?;
        Ok(produtos.into_iter().find(|p| p.id == Some(id)))
    }

    /// 保存产品（无 id 新建，有 id 整体替换）
    ///
    /// # 说明
    /// codigo 每次按当前品类/口味/规格重新派生
    ///
    /// # 返回
    /// - Some: 已保存的产品
    /// - None: id 已不存在，静默忽略，不发通知
    pub fn salvar(&self, mut produto: Produto) -> ApiResult<Option<Produto>> {
        produto.nome = produto.nome.trim().to_string();
        produto.sabor = produto
            .sabor
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        if let Err(e) = self.engine.validar_produto(&produto) {
            return Err(rejeitar(self.notifier.as_ref(), e));
        }

        produto.codigo = produto.gerar_codigo();
        let novo = produto.id.is_none();
        let Some(salvo) = self.store.salvar_produto(produto)? else {
            return Ok(None);
        };

        self.notifier.success(if novo {
            "Produto adicionado com sucesso!"
        } else {
            "Produto atualizado com sucesso!"
        });
        Ok(Some(salvo))
    }

    /// 删除产品（id 不存在时静默忽略）
    pub fn excluir(&self, id: i64) -> ApiResult<bool> {
        let removido = self.store.excluir_produto(id)?;
        if removido {
            self.notifier.success("Produto excluído com sucesso!");
        }
        Ok(removido)
    }

    pub fn por_categoria(&self) -> ApiResult<ProdutosPorCategoria> {
        let produtos = self.store.get_produtos()?;
        Ok(self.engine.agrupar(&produtos))
    }

    pub fn contagens(&self) -> ApiResult<ContagemCategorias> {
        let produtos = self.store.get_produtos()?;
        Ok(self.engine.contagens(&produtos))
    }

    pub fn filtrar(&self, filtro: &FiltroProdutos) -> ApiResult<Vec<Produto>> {
        let produtos = self.store.get_produtos()?;
        let resultado = self.engine.filtrar(&produtos, filtro);
        debug!("产品筛选: {} / {}", resultado.len(), produtos.len());
        Ok(resultado)
    }

    /// 三个品类的库存预警
    pub fn alertas(&self) -> ApiResult<Vec<AlertaCategoria>> {
        let produtos = self.store.get_produtos()?;
        Ok(self.engine.alertas(&produtos))
    }

    /// 产品导出文档
    ///
    /// 结构: `{produtos, dataExportacao, totalProdutos, porCategoria:{cobertura, biju, granulado}}`
    pub fn exportar(&self) -> ApiResult<Value> {
        let produtos = self.store.get_produtos()?;
        let contagens = self.engine.contagens(&produtos);

        Ok(json!({
            "produtos": produtos,
            "dataExportacao": self.store.clock().timestamp(),
            "totalProdutos": produtos.len(),
            "porCategoria": contagens,
        }))
    }

    /// 导出到目录，文件名 `produtos-YYYY-MM-DD.json`
    pub fn exportar_para(&self, dir: &Path) -> ApiResult<PathBuf> {
        let documento = self.exportar()?;
        let nome = nome_arquivo(PREFIXO_EXPORTACAO, self.store.clock().today());
        let caminho = gravar_json(dir, &nome, &documento)?;
        self.notifier.success("Produtos exportados com sucesso!");
        Ok(caminho)
    }
}
