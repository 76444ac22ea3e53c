// ==========================================
// 生产驾驶舱系统 - JSON 导出
// ==========================================
// 职责: 导出文档落盘（pretty JSON，文件名带日期）
// ==========================================

use crate::api::error::ApiResult;
use chrono::NaiveDate;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// 导出文件名: `<前缀>-YYYY-MM-DD.json`
pub fn nome_arquivo(prefixo: &str, dia: NaiveDate) -> String {
    format!("{}-{}.json", prefixo, dia.format("%Y-%m-%d"))
}

/// 写入导出文档（目录不存在时创建，同名文件覆盖）
///
/// # 返回
/// 写入的文件路径
pub fn gravar_json(dir: &Path, nome: &str, documento: &Value) -> ApiResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let caminho = dir.join(nome);
    let conteudo = serde_json::to_string_pretty(documento)?;
    fs::write(&caminho, conteudo)?;
    info!("导出完成: {}", caminho.display());
    Ok(caminho)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_file_name() {
        let dia = NaiveDate::from_ymd_opt(2026, 5, 4).unwrap();
        assert_eq!(
            nome_arquivo("capacidade-produtiva", dia),
            "capacidade-produtiva-2026-05-04.json"
        );
    }

    #[test]
    fn test_write_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("exports");
        let caminho = gravar_json(&dir, "x.json", &json!({"a": 1})).unwrap();

        let lido: Value = serde_json::from_str(&fs::read_to_string(caminho).unwrap()).unwrap();
        assert_eq!(lido["a"], 1);
    }
}
