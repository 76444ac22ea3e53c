// ==========================================
// 生产驾驶舱系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 小型工厂生产驾驶舱（产能 / OEE / 库存 / 看板）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 计算规则
pub mod engine;

// 配置层 - 运行参数
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 装配与周期刷新
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    Categoria, ClassificacaoOee, NivelAlerta, Prioridade, StatusKanban, TipoPausa,
};

// 领域实体
pub use domain::{
    CapacidadeConfig, EntradaOee, KanbanBoard, KanbanCard, OeeRegistro, Pausa, PausasRegistro,
    Produto, ResultadoCapacidade,
};

// 引擎
pub use engine::{
    CapacityEngine, DashboardAggregator, InventoryEngine, KanbanEngine, OeeEngine,
    ValidationError,
};

// API
pub use api::{
    ApiError, ApiResult, CapacityApi, DashboardApi, KanbanApi, Notifier, OeeApi, ProductApi,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Painel de Produção";
