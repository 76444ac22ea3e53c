// ==========================================
// 生产驾驶舱系统 - 主入口
// ==========================================
// 职责: 装载配置 → 初始化日志与存储 → 输出驾驶舱 → 周期刷新
// 退出: Ctrl+C
// ==========================================

use anyhow::{anyhow, Context, Result};
use painel_producao::app::{run_refresh_loop, AppState};
use painel_producao::config::AppConfig;
use painel_producao::engine::ResumoDashboard;
use painel_producao::logging;

fn main() -> Result<()> {
    logging::init_with(logging::LogFormat::from_env());

    tracing::info!("==================================================");
    tracing::info!("{}", painel_producao::APP_NAME);
    tracing::info!("系统版本: {}", painel_producao::VERSION);
    tracing::info!("==================================================");

    let config = AppConfig::from_env();
    tracing::info!("使用数据库: {}", config.db_path);

    let state = AppState::from_config(&config).map_err(|e| anyhow!(e))?;

    // 单线程运行时: 刷新与其他操作串行执行
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("无法创建 tokio 运行时")?;

    let dashboard = state.dashboard_api.clone();
    let total = runtime.block_on(run_refresh_loop(
        dashboard,
        config.refresh_interval,
        imprimir_resumo,
        async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("无法监听退出信号: {}", e);
                std::future::pending::<()>().await;
            }
        },
    ));

    tracing::info!("已退出，共刷新 {} 次", total);
    Ok(())
}

/// 输出驾驶舱摘要
fn imprimir_resumo(resumo: &ResumoDashboard) {
    let c = &resumo.capacidade;
    println!("--------------------------------------------------");
    println!("Atualizado em: {}", resumo.atualizado_em);
    println!(
        "Capacidade (h/semana): instalada {:.1} | efetiva {:.1} | disponível {:.1} | realizada {:.1}",
        c.instalada, c.efetiva, c.disponivel, c.realizada
    );

    match (&resumo.oee_atual, resumo.classificacao_oee) {
        (Some(oee), Some(classificacao)) => println!(
            "OEE atual: {:.2}% ({}) | D {:.2}% P {:.2}% Q {:.2}%",
            oee.oee_total,
            classificacao.rotulo(),
            oee.disponibilidade,
            oee.performance,
            oee.qualidade
        ),
        _ => println!("OEE atual: sem registros"),
    }

    let k = &resumo.kanban;
    println!(
        "Tarefas: {} (A Fazer {} | Fazendo {} | Testando {} | Concluído {})",
        k.total, k.a_fazer, k.fazendo, k.testando, k.concluido
    );

    println!(
        "Produtos: {} | abaixo do estoque mínimo: {}",
        resumo.total_produtos, resumo.produtos_estoque_baixo
    );
    for alerta in &resumo.alertas {
        println!(
            "  [{}] {}: {}",
            alerta.nivel,
            alerta.categoria.nome_exibicao(),
            alerta.mensagem
        );
    }
}
