use crate::api::error::InfraError;
use crate::api::{Client, Transport, UserScope};
use crate::commands::connect;
use crate::commands::result::{CommandResult, FolderVideoResult};
use anyhow::Result;

/// フォルダに動画が含まれているか確認するコマンドを実行する
///
/// 404はエラーではなく「含まれていない」という結果として返す。
/// それ以外の失敗はそのままエラーになる。
pub async fn execute(user: Option<String>, folder_id: &str, video_id: u64) -> Result<CommandResult> {
    let (user_config, client) = connect()?;
    let scope = user_config.resolve_scope(user);

    run(&client, &scope, folder_id, video_id).await
}

pub async fn run<T: Transport>(
    client: &Client<T>,
    scope: &UserScope,
    folder_id: &str,
    video_id: u64,
) -> Result<CommandResult> {
    let video = match client
        .folders()
        .get_folder_video(scope, folder_id, video_id, &[])
        .await
    {
        Ok((video, _)) => Some(video),
        Err(e) if e.is_not_found() => {
            tracing::debug!(folder_id, video_id, "video is not in folder");
            None
        }
        Err(e) => return Err(check_failed(e, folder_id, video_id)),
    };

    Ok(CommandResult::FolderVideo(FolderVideoResult {
        folder_id: folder_id.to_string(),
        video_id,
        contains: video.is_some(),
        video,
    }))
}

fn check_failed(error: InfraError, folder_id: &str, video_id: u64) -> anyhow::Error {
    anyhow::Error::new(error).context(format!(
        "Failed to check video {} in folder {}",
        video_id, folder_id
    ))
}
