use crate::api::{CallOption, Client, Transport, UserScope};
use crate::commands::connect;
use crate::commands::result::{CommandResult, FolderResult};
use anyhow::{Context, Result};

/// フォルダ詳細コマンドを実行する
///
/// # 引数
/// * `user` - 対象ユーザーID（未指定なら設定の default_user、なければ自分自身）
/// * `folder_id` - フォルダID
pub async fn execute(user: Option<String>, folder_id: &str) -> Result<CommandResult> {
    let (user_config, client) = connect()?;
    let scope = user_config.resolve_scope(user);

    run(&client, &scope, folder_id, &[]).await
}

pub async fn run<T: Transport>(
    client: &Client<T>,
    scope: &UserScope,
    folder_id: &str,
    opts: &[CallOption],
) -> Result<CommandResult> {
    let (folder, _) = client
        .folders()
        .get_folder(scope, folder_id, opts)
        .await
        .with_context(|| format!("Failed to fetch folder {}", folder_id))?;

    Ok(CommandResult::Folder(FolderResult { folder }))
}
