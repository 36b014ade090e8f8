/// ファイルパーミッション管理モジュール
///
/// アクセストークンを含むconfig.tomlを所有者のみがアクセス可能にします。
///
/// Unix系 (Linux, macOS): 0600 (rw-------)
/// その他: ユーザープロファイル配下の既定ACLに任せる
use crate::config::error::ConfigError;
use std::path::Path;

/// トークンファイル用パーミッションを設定
///
/// # Errors
/// ファイルが存在しない場合、またはパーミッション設定に失敗した場合に
/// ConfigError を返します。
pub fn set_token_file_permissions(file_path: &Path) -> Result<(), ConfigError> {
    if !file_path.exists() {
        return Err(ConfigError::file_system(
            format!("Config file not found: {}", file_path.display()),
            std::io::Error::new(std::io::ErrorKind::NotFound, "File does not exist"),
        ));
    }

    #[cfg(unix)]
    {
        set_unix_permissions(file_path)
    }

    #[cfg(not(unix))]
    {
        Ok(())
    }
}

#[cfg(unix)]
fn set_unix_permissions(file_path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(file_path, std::fs::Permissions::from_mode(0o600)).map_err(|e| {
        ConfigError::file_system(
            format!(
                "Failed to set permissions (0600) for config file: {}",
                file_path.display()
            ),
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_set_token_file_permissions() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let test_file = temp_dir.path().join("config.toml");
        fs::write(&test_file, "[auth]\naccess_token = \"x\"\n").expect("Failed to write test file");

        let result = set_token_file_permissions(&test_file);
        assert!(result.is_ok(), "Failed to set permissions: {:?}", result.err());
        assert!(test_file.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_unix_permissions_0600() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let test_file = temp_dir.path().join("config.toml");
        fs::write(&test_file, "content").expect("Failed to write test file");
        fs::set_permissions(&test_file, fs::Permissions::from_mode(0o644)).unwrap();

        set_token_file_permissions(&test_file).expect("Failed to set permissions");

        let mode = fs::metadata(&test_file).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600, "Expected 0600 permissions, got 0o{:o}", mode);
    }

    #[test]
    fn test_nonexistent_file() {
        let result = set_token_file_permissions(Path::new("/nonexistent/path/config.toml"));
        assert!(matches!(result, Err(ConfigError::FileSystem { .. })));
    }
}
