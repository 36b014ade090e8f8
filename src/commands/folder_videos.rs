use crate::api::{Client, Transport, UserScope};
use crate::commands::result::{CommandResult, VideoListResult};
use crate::commands::{ListArgs, connect};
use anyhow::{Context, Result};

/// フォルダ内の動画一覧コマンドを実行する
pub async fn execute(folder_id: &str, args: ListArgs) -> Result<CommandResult> {
    let (user_config, client) = connect()?;
    let scope = user_config.resolve_scope(args.user.clone());

    run(&client, &scope, folder_id, &args).await
}

pub async fn run<T: Transport>(
    client: &Client<T>,
    scope: &UserScope,
    folder_id: &str,
    args: &ListArgs,
) -> Result<CommandResult> {
    let (videos, page) = client
        .folders()
        .list_folder_videos(scope, folder_id, &args.options)
        .await
        .with_context(|| format!("Failed to list videos in folder {}", folder_id))?;

    Ok(CommandResult::FolderVideos(VideoListResult {
        folder_id: folder_id.to_string(),
        videos,
        page,
    }))
}
