/// コマンド実行結果を表す型
///
/// 各コマンドはこの型を返し、プレゼンテーション層で
/// 人間向けと機械向けの出力フォーマットを決定する。
use crate::api::{Folder, Response, Video};
use serde::Serialize;

/// コマンド実行結果の統一型
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CommandResult {
    Login(LoginResult),
    Logout(LogoutResult),
    Status(StatusResult),
    Folders(FolderListResult),
    Folder(FolderResult),
    FolderVideos(VideoListResult),
    FolderVideo(FolderVideoResult),
    Help,
}

/// ログインコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    /// 既にログイン済みだったか（上書き更新の場合true）
    pub was_logged_in: bool,
}

/// ログアウトコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct LogoutResult {
    pub was_logged_in: bool,
}

/// ステータスコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct StatusResult {
    /// トークンが受理されたか
    pub is_authenticated: bool,
    /// マスキングされたトークン（保存されている場合）
    pub token: Option<String>,
}

/// フォルダ一覧の結果
#[derive(Debug, Clone, Serialize)]
pub struct FolderListResult {
    /// 対象（"me" または "user <id>"）
    pub scope: String,
    pub folders: Vec<Folder>,
    pub page: Response,
}

/// フォルダ詳細の結果
#[derive(Debug, Clone, Serialize)]
pub struct FolderResult {
    pub folder: Folder,
}

/// フォルダ内動画一覧の結果
#[derive(Debug, Clone, Serialize)]
pub struct VideoListResult {
    pub folder_id: String,
    pub videos: Vec<Video>,
    pub page: Response,
}

/// フォルダ内の動画確認の結果
#[derive(Debug, Clone, Serialize)]
pub struct FolderVideoResult {
    pub folder_id: String,
    pub video_id: u64,
    /// 動画がフォルダに含まれているか
    pub contains: bool,
    pub video: Option<Video>,
}

impl CommandResult {
    /// コマンド名（機械向け出力用）
    pub fn command_name(&self) -> &'static str {
        match self {
            CommandResult::Login(_) => "login",
            CommandResult::Logout(_) => "logout",
            CommandResult::Status(_) => "status",
            CommandResult::Folders(_) => "folders",
            CommandResult::Folder(_) => "folder",
            CommandResult::FolderVideos(_) => "folder-videos",
            CommandResult::FolderVideo(_) => "folder-video",
            CommandResult::Help => "help",
        }
    }
}
