/// ログアウトコマンド
///
/// 保存されているアクセストークンを削除します。
use crate::commands::result::{CommandResult, LogoutResult};
use crate::config::user::UserConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// ログアウトコマンドを実行
pub async fn execute() -> Result<CommandResult> {
    let config_path = UserConfig::config_path().context("Failed to locate configuration file")?;
    logout_at(&config_path)
}

fn logout_at(config_path: &Path) -> Result<CommandResult> {
    let mut config = UserConfig::load_from(config_path).context("Failed to load configuration file")?;

    let was_logged_in = config.has_auth();
    if was_logged_in {
        config.clear_auth();
        config
            .save_to(config_path)
            .context("Failed to save configuration file")?;
    }

    Ok(CommandResult::Logout(LogoutResult { was_logged_in }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_logout_clears_token() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = UserConfig::default();
        config.set_auth("token".to_string());
        config.save_to(&path).unwrap();

        let result = logout_at(&path).unwrap();
        assert!(matches!(
            result,
            CommandResult::Logout(LogoutResult { was_logged_in: true })
        ));
        assert!(!UserConfig::load_from(&path).unwrap().has_auth());
    }

    #[test]
    fn test_logout_without_token() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let result = logout_at(&path).unwrap();
        assert!(matches!(
            result,
            CommandResult::Logout(LogoutResult { was_logged_in: false })
        ));
    }
}
