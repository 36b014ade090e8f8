pub mod folder;
pub mod folder_video;
pub mod folder_videos;
pub mod folders;
pub mod help;
pub mod login;
pub mod logout;
pub mod result;
pub mod status;

pub use result::CommandResult;

use crate::api::auth::AuthManager;
use crate::api::client::ApiClient;
use crate::api::{CallOption, Client, Transport, UserScope};
use crate::config::UserConfig;
use anyhow::{Context, Result};

/// 一覧系コマンドの共通引数
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListArgs {
    /// 対象ユーザー（未指定なら設定の default_user、なければ自分自身）
    pub user: Option<String>,
    pub options: Vec<CallOption>,
}

/// 保存済みのアクセストークンでAPIクライアントを作成する
///
/// # 戻り値
/// ユーザー設定と、認証済みのクライアント
pub fn connect() -> Result<(UserConfig, Client)> {
    let user_config = UserConfig::load()
        .context("Failed to load user configuration. Please check your config.toml file.")?;

    let auth = user_config
        .get_auth()
        .context("Access token not found. Please run 'vimeo-folders login' first.")?;

    let auth_manager = AuthManager::from_access_token(auth.access_token.clone());
    let transport = ApiClient::production(Some(auth_manager)).context("Failed to create API client")?;

    Ok((user_config, Client::new(transport)))
}

/// トークンが有効か確認する
///
/// 自分のフォルダを1件だけ取得できれば有効とみなす（`private` スコープが必要）。
pub async fn verify_credentials<T: Transport>(client: &Client<T>) -> Result<()> {
    client
        .folders()
        .list_folders(&UserScope::Me, &[CallOption::PerPage(1)])
        .await
        .context("Access token verification failed")?;
    Ok(())
}
