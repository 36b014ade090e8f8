/// ステータスコマンド
///
/// 保存されているアクセストークンでVimeo APIにアクセスできるかを確認します。
use crate::api::auth::AuthManager;
use crate::api::client::ApiClient;
use crate::api::Client;
use crate::commands::result::{CommandResult, StatusResult};
use crate::commands::verify_credentials;
use crate::config::user::UserConfig;
use anyhow::{Context, Result};

/// ステータスコマンドを実行
///
/// トークンが拒否された場合もエラーではなく `is_authenticated: false` を返す。
pub async fn execute() -> Result<CommandResult> {
    let config = UserConfig::load().context("Failed to load configuration file")?;

    let Ok(auth) = config.get_auth() else {
        return Ok(CommandResult::Status(StatusResult {
            is_authenticated: false,
            token: None,
        }));
    };

    let auth_manager = AuthManager::from_access_token(auth.access_token.clone());
    let masked = auth_manager.get_masked_token();
    let client = Client::new(
        ApiClient::production(Some(auth_manager)).context("Failed to create API client")?,
    );

    let is_authenticated = match verify_credentials(&client).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %format!("{:#}", e), "stored access token was not accepted");
            false
        }
    };

    Ok(CommandResult::Status(StatusResult {
        is_authenticated,
        token: Some(masked),
    }))
}
