//! Security Module
//!
//! 入力ファイルのサイズ制限と、出力ファイル名の検証を提供するモジュール。

/// セキュリティ設定
#[derive(Debug, Clone)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    /// デフォルト: 2GB (2_147_483_648 bytes)
    pub max_input_file_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: 2_147_483_648, // 2GB
        }
    }
}

impl SecurityConfig {
    /// 入力サイズが上限以内かを検証
    pub fn check_input_size(&self, bytes: u64) -> Result<(), String> {
        if bytes > self.max_input_file_size {
            return Err(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                bytes, self.max_input_file_size
            ));
        }
        Ok(())
    }
}

/// 出力ファイル名の検証
///
/// 出力ファイルは必ず出力ディレクトリ直下に作成されるため、
/// ディレクトリ成分を含む名前は拒否します。
///
/// # 戻り値
///
/// * `Ok(())` - 名前が安全な場合
/// * `Err(String)` - 空、`..`、パス区切り文字、絶対パスを含む場合
pub(crate) fn validate_file_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Empty file name is not allowed".to_string());
    }

    if name.starts_with('/') || name.starts_with("C:\\") || name.starts_with("c:\\") {
        return Err(format!("Absolute path is not allowed: {}", name));
    }

    if name.contains("..") {
        return Err(format!("Path traversal detected: {}", name));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(format!("Path separator in file name is not allowed: {}", name));
    }

    Ok(())
}
