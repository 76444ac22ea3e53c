// ==========================================
// 生产驾驶舱系统 - 记录仓储
// ==========================================
// 职责: 五个集合的类型化读写 (products / pauses / kanban / oeeHistory / capacityConfig)
// 红线: Repository 不含业务逻辑，只负责 id/日期等存储字段的填充
// 约束: 所有写入为整集合覆盖；读取返回独立副本
// 容错: 集合缺失或无法解析时回退默认值，不中断驾驶舱
// ==========================================

use crate::domain::capacity::CapacidadeConfig;
use crate::domain::kanban::KanbanBoard;
use crate::domain::oee::{OeeRegistro, LIMITE_HISTORICO_OEE};
use crate::domain::pause::{Pausa, PausasRegistro};
use crate::domain::product::Produto;
use crate::domain::types::TipoPausa;
use crate::repository::clock::{Clock, IdGenerator};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::kv_store::KvStore;
use crate::repository::seed::produtos_iniciais;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

// ==========================================
// 存储键
// ==========================================
pub mod chaves {
    pub const PRODUTOS: &str = "products";
    pub const PAUSAS: &str = "pauses";
    pub const KANBAN: &str = "kanban";
    pub const HISTORICO_OEE: &str = "oeeHistory";
    pub const CONFIG_CAPACIDADE: &str = "capacityConfig";

    pub const TODAS: [&str; 5] = [PRODUTOS, PAUSAS, KANBAN, HISTORICO_OEE, CONFIG_CAPACIDADE];
}

// ==========================================
// RecordStore - 记录仓储
// ==========================================
pub struct RecordStore {
    kv: Arc<dyn KvStore>,
    clock: Arc<dyn Clock>,
    ids: IdGenerator,
}

impl RecordStore {
    /// 创建记录仓储并执行首次初始化
    ///
    /// # 说明
    /// 1. 缺失的键写入种子值（已存在的键不覆盖）
    /// 2. 以已存储的最大 id 作为 ID 生成器下限
    pub fn new(kv: Arc<dyn KvStore>, clock: Arc<dyn Clock>) -> RepositoryResult<Self> {
        let store = Self {
            kv,
            clock,
            ids: IdGenerator::new(),
        };
        store.inicializar()?;
        store.sincronizar_ids()?;
        Ok(store)
    }

    /// 时间来源
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    // ==========================================
    // 初始化
    // ==========================================

    /// 写入缺失集合的种子值（幂等）
    ///
    /// # 返回
    /// 本次写入的键数量
    pub fn inicializar(&self) -> RepositoryResult<usize> {
        let mut semeados = 0;

        for key in chaves::TODAS {
            if self.kv.get(key)?.is_some() {
                continue;
            }
            match key {
                chaves::PRODUTOS => self.gravar(key, &produtos_iniciais())?,
                chaves::PAUSAS => self.gravar(key, &PausasRegistro::default())?,
                chaves::KANBAN => self.gravar(key, &KanbanBoard::default())?,
                chaves::HISTORICO_OEE => self.gravar(key, &Vec::<OeeRegistro>::new())?,
                chaves::CONFIG_CAPACIDADE => self.gravar(key, &CapacidadeConfig::default())?,
                _ => continue,
            }
            info!("集合 {} 不存在，已写入初始值", key);
            semeados += 1;
        }

        Ok(semeados)
    }

    fn sincronizar_ids(&self) -> RepositoryResult<()> {
        let maiores = [
            self.get_produtos()?.iter().filter_map(|p| p.id).max(),
            self.get_pausas()?.maior_id(),
            self.get_kanban()?.maior_id(),
            self.get_historico_oee()?.iter().filter_map(|r| r.id).max(),
        ];
        for id in maiores.into_iter().flatten() {
            self.ids.observe(id)?;
        }
        Ok(())
    }

    fn proximo_id(&self) -> RepositoryResult<i64> {
        self.ids.next(self.clock.as_ref())
    }

    // ==========================================
    // 通用读写
    // ==========================================

    /// 读取集合；缺失或损坏时返回默认值
    fn carregar<T, F>(&self, key: &str, padrao: F) -> RepositoryResult<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let raw = match self.kv.get(key)? {
            Some(raw) => raw,
            None => {
                warn!("集合 {} 缺失，使用默认值", key);
                return Ok(padrao());
            }
        };

        match serde_json::from_str::<T>(&raw) {
            Ok(value) => {
                debug!("读取集合 {}", key);
                Ok(value)
            }
            Err(e) => {
                warn!("集合 {} 无法解析，使用默认值: {}", key, e);
                Ok(padrao())
            }
        }
    }

    /// 整集合覆盖写
    fn gravar<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> RepositoryResult<()> {
        let raw = serde_json::to_string(value).map_err(|e| RepositoryError::SerializationError {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.kv.set(key, &raw)
    }

    // ==========================================
    // 产品
    // ==========================================

    pub fn get_produtos(&self) -> RepositoryResult<Vec<Produto>> {
        self.carregar(chaves::PRODUTOS, Vec::new)
    }

    /// 保存产品
    ///
    /// # 说明
    /// - 无 id: 分配 id、派生 codigo 后追加
    /// - 有 id: 整体替换；id 不存在时静默忽略
    /// - codigo 为空时总是重新派生
    ///
    /// # 返回
    /// - Some: 填充后的产品
    /// - None: id 不存在，未写入
    pub fn salvar_produto(&self, mut produto: Produto) -> RepositoryResult<Option<Produto>> {
        let mut produtos = self.get_produtos()?;

        if produto.codigo.trim().is_empty() {
            produto.codigo = produto.gerar_codigo();
        }

        match produto.id {
            Some(id) => match produtos.iter_mut().find(|p| p.id == Some(id)) {
                Some(existente) => {
                    *existente = produto.clone();
                    info!("产品已更新: id={}, codigo={}", id, produto.codigo);
                }
                None => {
                    warn!("产品 id={} 不存在，忽略更新", id);
                    return Ok(None);
                }
            },
            None => {
                let id = self.proximo_id()?;
                produto.id = Some(id);
                produtos.push(produto.clone());
                info!("产品已新增: id={}, codigo={}", id, produto.codigo);
            }
        }

        self.gravar(chaves::PRODUTOS, &produtos)?;
        Ok(Some(produto))
    }

    /// 删除产品
    ///
    /// # 返回
    /// 是否确有删除
    pub fn excluir_produto(&self, id: i64) -> RepositoryResult<bool> {
        let mut produtos = self.get_produtos()?;
        let antes = produtos.len();
        produtos.retain(|p| p.id != Some(id));

        if produtos.len() == antes {
            debug!("产品 id={} 不存在，删除为空操作", id);
            return Ok(false);
        }

        self.gravar(chaves::PRODUTOS, &produtos)?;
        info!("产品已删除: id={}", id);
        Ok(true)
    }

    // ==========================================
    // 停机
    // ==========================================

    pub fn get_pausas(&self) -> RepositoryResult<PausasRegistro> {
        self.carregar(chaves::PAUSAS, PausasRegistro::default)
    }

    /// 追加停机记录（填充 id 与登记日期）
    pub fn salvar_pausa(&self, mut pausa: Pausa) -> RepositoryResult<Pausa> {
        let mut pausas = self.get_pausas()?;

        pausa.id = Some(self.proximo_id()?);
        pausa.data = self.clock.today().format("%Y-%m-%d").to_string();
        pausas.lista_mut(pausa.tipo).push(pausa.clone());

        self.gravar(chaves::PAUSAS, &pausas)?;
        info!(
            "停机已登记: id={:?}, tipo={}, horas={}",
            pausa.id, pausa.tipo, pausa.horas
        );
        Ok(pausa)
    }

    /// 从对应类型的序列中删除停机记录
    pub fn excluir_pausa(&self, id: i64, tipo: TipoPausa) -> RepositoryResult<bool> {
        let mut pausas = self.get_pausas()?;
        let lista = pausas.lista_mut(tipo);
        let antes = lista.len();
        lista.retain(|p| p.id != Some(id));

        if lista.len() == antes {
            debug!("停机 id={} ({}) 不存在，删除为空操作", id, tipo);
            return Ok(false);
        }

        self.gravar(chaves::PAUSAS, &pausas)?;
        info!("停机已删除: id={}, tipo={}", id, tipo);
        Ok(true)
    }

    // ==========================================
    // 看板
    // ==========================================

    /// 读取看板（修正外部改写造成的列/状态不一致）
    pub fn get_kanban(&self) -> RepositoryResult<KanbanBoard> {
        let mut board: KanbanBoard = self.carregar(chaves::KANBAN, KanbanBoard::default)?;
        let corrigidos = board.normalizar();
        if corrigidos > 0 {
            warn!("看板存在 {} 处不一致，已在读取时修正", corrigidos);
        }
        Ok(board)
    }

    pub fn salvar_kanban(&self, board: &KanbanBoard) -> RepositoryResult<()> {
        self.gravar(chaves::KANBAN, board)
    }

    /// 为新卡片分配 id
    pub fn novo_id_cartao(&self) -> RepositoryResult<i64> {
        self.proximo_id()
    }

    // ==========================================
    // OEE 历史
    // ==========================================

    pub fn get_historico_oee(&self) -> RepositoryResult<Vec<OeeRegistro>> {
        self.carregar(chaves::HISTORICO_OEE, Vec::new)
    }

    /// 追加 OEE 记录
    ///
    /// # 说明
    /// 填充 id 与时间戳；超过 30 条时从头部淘汰 (FIFO)
    pub fn salvar_oee(&self, mut registro: OeeRegistro) -> RepositoryResult<OeeRegistro> {
        let mut historico = self.get_historico_oee()?;

        registro.id = Some(self.proximo_id()?);
        registro.data = self.clock.timestamp();
        historico.push(registro.clone());

        if historico.len() > LIMITE_HISTORICO_OEE {
            let excesso = historico.len() - LIMITE_HISTORICO_OEE;
            historico.drain(..excesso);
            debug!("OEE 历史超过上限，淘汰最早 {} 条", excesso);
        }

        self.gravar(chaves::HISTORICO_OEE, &historico)?;
        info!(
            "OEE 记录已保存: id={:?}, oee_total={}",
            registro.id, registro.oee_total
        );
        Ok(registro)
    }

    // ==========================================
    // 产能配置
    // ==========================================

    pub fn get_config_capacidade(&self) -> RepositoryResult<CapacidadeConfig> {
        self.carregar(chaves::CONFIG_CAPACIDADE, CapacidadeConfig::default)
    }

    pub fn salvar_config_capacidade(&self, config: &CapacidadeConfig) -> RepositoryResult<()> {
        self.gravar(chaves::CONFIG_CAPACIDADE, config)?;
        info!(
            "产能配置已保存: {}h/天 × {}天 × {}台",
            config.horas_dia_efetiva, config.dias_semana_efetiva, config.num_maquinas
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Categoria;
    use crate::repository::clock::FixedClock;
    use crate::repository::kv_store::MemoryKvStore;
    use chrono::{TimeZone, Utc};

    fn store_with(kv: Arc<MemoryKvStore>) -> RecordStore {
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 5, 4, 9, 30, 0).unwrap());
        RecordStore::new(kv, Arc::new(clock)).unwrap()
    }

    #[test]
    fn test_seeding_only_fills_missing_keys() {
        let kv = Arc::new(MemoryKvStore::new());
        kv.set(chaves::PRODUTOS, "[]").unwrap();

        let store = store_with(kv.clone());

        assert!(store.get_produtos().unwrap().is_empty());
        assert_eq!(store.get_config_capacidade().unwrap(), CapacidadeConfig::default());
        assert_eq!(store.inicializar().unwrap(), 0);
    }

    #[test]
    fn test_corrupted_collection_falls_back_to_default() {
        let kv = Arc::new(MemoryKvStore::new());
        let store = store_with(kv.clone());

        kv.set(chaves::PAUSAS, "{not json").unwrap();
        kv.set(chaves::CONFIG_CAPACIDADE, "42").unwrap();

        assert_eq!(store.get_pausas().unwrap(), PausasRegistro::default());
        assert_eq!(store.get_config_capacidade().unwrap(), CapacidadeConfig::default());
    }

    #[test]
    fn test_new_product_gets_id_after_seed_ids() {
        let store = store_with(Arc::new(MemoryKvStore::new()));
        let novo = Produto {
            id: None,
            nome: "Cobertura Coco".to_string(),
            categoria: Categoria::Cobertura,
            sabor: Some("coco".to_string()),
            tamanho: "190g".to_string(),
            tempo_producao: 30.0,
            estoque: 10,
            estoque_min: 20,
            codigo: String::new(),
        };

        let salvo = store.salvar_produto(novo).unwrap().unwrap();

        assert!(salvo.id.unwrap() > 23);
        assert_eq!(salvo.codigo, "COB-COC-190");
        assert_eq!(store.get_produtos().unwrap().len(), 24);
    }

    #[test]
    fn test_update_unknown_product_is_noop() {
        let store = store_with(Arc::new(MemoryKvStore::new()));
        let mut fantasma = store.get_produtos().unwrap()[0].clone();
        fantasma.id = Some(999_999);
        fantasma.nome = "Fantasma".to_string();

        assert!(store.salvar_produto(fantasma).unwrap().is_none());

        let produtos = store.get_produtos().unwrap();
        assert_eq!(produtos.len(), 23);
        assert!(produtos.iter().all(|p| p.nome != "Fantasma"));
    }

    #[test]
    fn test_pause_date_comes_from_clock() {
        let store = store_with(Arc::new(MemoryKvStore::new()));
        let pausa = store
            .salvar_pausa(Pausa::nova(TipoPausa::Programada, "Limpeza", 2.0))
            .unwrap();

        assert_eq!(pausa.data, "2026-05-04");
        assert_eq!(store.get_pausas().unwrap().programadas.len(), 1);
        assert!(store.get_pausas().unwrap().nao_programadas.is_empty());
    }
}
