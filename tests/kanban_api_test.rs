// ==========================================
// KanbanApi 集成测试
// ==========================================
// 测试范围:
// 1. 创建任务（默认值、空标题拒绝）
// 2. 移动（列尾追加、状态同步、空操作）
// 3. 删除、汇总、持久化字段名
// ==========================================


use painel_producao::api::TipoNotificacao;
use painel_producao::domain::types::{Prioridade, StatusKanban};
use painel_producao::engine::NovoCartao;
use test_helpers::ApiTestEnv;

fn novo(titulo: &str) -> NovoCartao {
    NovoCartao {
        titulo: titulo.to_string(),
        descricao: "Linha 2".to_string(),
        responsavel: String::new(),
        prioridade: Prioridade::parse_ou_padrao("urgente"),
    }
}

#[test]
fn test_创建任务() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let api = &env.state.kanban_api;

    let card = api.criar(novo("Calibrar balança")).unwrap();
    assert_eq!(card.status, StatusKanban::AFazer);
    assert_eq!(card.responsavel, "Não definido");
    assert_eq!(card.prioridade, Prioridade::Media);
    assert_eq!(card.data_criacao, "2026-05-04T09:30:00.000Z");

    let board = api.board().unwrap();
    assert_eq!(board.a_fazer, vec![card]);
}

#[test]
fn test_创建任务_ids不碰撞() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let api = &env.state.kanban_api;

    // 固定时钟下连续创建
    let a = api.criar(novo("A")).unwrap();
    let b = api.criar(novo("B")).unwrap();
    let c = api.criar(novo("C")).unwrap();
    assert!(a.id < b.id && b.id < c.id);
}

#[test]
fn test_空标题拒绝() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let api = &env.state.kanban_api;

    assert!(api.criar(novo("  ")).unwrap_err().is_validation());
    assert_eq!(api.resumo().unwrap().total, 0);
    assert_eq!(env.notifier.ultima().unwrap().tipo, TipoNotificacao::Erro);
}

#[test]
fn test_移动任务() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let api = &env.state.kanban_api;

    let a = api.criar(novo("A")).unwrap();
    let b = api.criar(novo("B")).unwrap();
    api.mover(b.id, StatusKanban::Testando).unwrap();

    let movimento = api.mover(a.id, StatusKanban::Testando).unwrap().unwrap();
    assert_eq!(movimento.origem, StatusKanban::AFazer);
    assert_eq!(movimento.destino, StatusKanban::Testando);
    assert_eq!(
        env.notifier.ultima().unwrap().mensagem,
        "Tarefa \"A\" movida para Testando"
    );

    let board = api.board().unwrap();
    assert!(board.a_fazer.is_empty());
    let ids: Vec<i64> = board.testando.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);
    assert!(board
        .testando
        .iter()
        .all(|c| c.status == StatusKanban::Testando));
}

#[test]
fn test_移动_空操作不写存储() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let api = &env.state.kanban_api;

    let a = api.criar(novo("A")).unwrap();
    let antes = env.raw("kanban").unwrap();
    let notificacoes = env.notifier.notificacoes().len();

    assert!(api.mover(a.id, StatusKanban::AFazer).unwrap().is_none());
    assert!(api.mover(a.id + 999, StatusKanban::Concluido).unwrap().is_none());

    assert_eq!(env.raw("kanban").unwrap(), antes);
    assert_eq!(env.notifier.notificacoes().len(), notificacoes);
}

#[test]
fn test_删除任务() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let api = &env.state.kanban_api;

    let a = api.criar(novo("A")).unwrap();
    api.mover(a.id, StatusKanban::Concluido).unwrap();

    assert!(api.excluir(a.id).unwrap());
    assert!(!api.excluir(a.id).unwrap());
    assert_eq!(api.resumo().unwrap().total, 0);
}

#[test]
fn test_汇总与存储字段名() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let api = &env.state.kanban_api;

    let a = api.criar(novo("A")).unwrap();
    api.criar(novo("B")).unwrap();
    api.mover(a.id, StatusKanban::Fazendo).unwrap();

    let resumo = api.resumo().unwrap();
    assert_eq!(resumo.total, 2);
    assert_eq!(resumo.a_fazer, 1);
    assert_eq!(resumo.fazendo, 1);

    let doc: serde_json::Value = serde_json::from_str(&env.raw("kanban").unwrap()).unwrap();
    assert_eq!(doc["a-fazer"][0]["titulo"], "B");
    assert_eq!(doc["fazendo"][0]["status"], "fazendo");
    assert_eq!(doc["fazendo"][0]["dataCriacao"], "2026-05-04T09:30:00.000Z");
    assert_eq!(doc["fazendo"][0]["prioridade"], "media");
    assert!(doc["testando"].as_array().unwrap().is_empty());
}
