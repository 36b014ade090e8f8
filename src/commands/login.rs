/// ログインコマンド
///
/// Vimeoの個人アクセストークンを検証し、config.tomlに保存します。
use crate::api::auth::AuthManager;
use crate::api::client::ApiClient;
use crate::api::Client;
use crate::commands::result::{CommandResult, LoginResult};
use crate::commands::verify_credentials;
use crate::config::user::UserConfig;
use crate::presentation::input;
use anyhow::{Context, Result};

/// ログイン時に入力される認証情報
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub access_token: String,
}

/// ログインコマンドを実行
///
/// # Arguments
/// * `use_stdin` - trueの場合、標準入力の1行目をトークンとして読む
pub async fn execute(use_stdin: bool) -> Result<CommandResult> {
    let credentials = if use_stdin {
        input::read_token_from_stdin()?
    } else {
        input::read_token_interactive()?
    };

    let auth_manager = AuthManager::from_access_token(credentials.access_token.clone());
    let client = Client::new(
        ApiClient::production(Some(auth_manager)).context("Failed to create API client")?,
    );

    verify_credentials(&client)
        .await
        .context("Authentication failed. Please verify your access token has the 'private' scope.")?;

    let mut config = UserConfig::load().context("Failed to load configuration file")?;
    let was_logged_in = config.has_auth();

    config.set_auth(credentials.access_token);
    config.save().context("Failed to save configuration file")?;

    tracing::info!(was_logged_in, "access token saved");

    Ok(CommandResult::Login(LoginResult { was_logged_in }))
}
