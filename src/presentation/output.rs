/// プレゼンテーション層: コマンド結果の出力
///
/// コマンド実行結果をユーザー向け（人間可読、stderr）または
/// 機械向け（JSON、stdout）形式で出力する責務を担います。
use crate::api::{Folder, Response, Video};
use crate::commands::result::CommandResult;
use crate::domain::formatter::{format_duration, format_timestamp};
use crate::error_severity::ErrorSeverity;
use anyhow::Result;
use std::fmt::Write as _;

/// ヘルプテキスト（単一の情報源）
pub const HELP_TEXT: &str = "vimeo-folders
Browse Vimeo folders and the videos inside them from the command line

Usage:
  vimeo-folders [--machine] [--verbose] <command> [args...]

Global Flags:
  --machine        - Output machine-readable JSON to stdout (for scripting)
                     Works for both success and error cases
  --verbose        - Log HTTP requests to stderr (RUST_LOG overrides)

Available commands:
  login [--stdin]  - Save a Vimeo personal access token
                     With --stdin: read the token from the first line of stdin
  logout           - Remove the saved access token
  status           - Check whether the saved token is accepted
  folders [--user <id>] [paging]
                   - List folders
  folder <folder_id> [--user <id>]
                   - Show a single folder
  folder-videos <folder_id> [--user <id>] [paging]
                   - List the videos in a folder
  folder-video <folder_id> <video_id> [--user <id>]
                   - Check whether a video belongs to a folder
  help             - Display this help message

Paging flags:
  --page <n>       - Page number (starting at 1)
  --per-page <n>   - Results per page (1-100)
  --sort <field>   - Sort field (e.g. date, name, modified_time)
  --direction <d>  - asc or desc
  --query <text>   - Search query

Without --user, commands target the 'default_user' from config.toml,
or the authenticated user when none is set.";

/// コマンド結果を適切な形式で出力する
///
/// # Arguments
/// * `result` - コマンド実行結果
/// * `machine_output` - 機械可読出力フラグ
/// * `timezone_offset_seconds` - 日時表示に使うオフセット
pub fn output_result(
    result: &CommandResult,
    machine_output: bool,
    timezone_offset_seconds: i32,
) -> Result<()> {
    if machine_output {
        println!("{}", serde_json::to_string(&machine_json(result)?)?);
    } else {
        eprint!("{}", render_human(result, timezone_offset_seconds));
    }
    Ok(())
}

/// エラーを出力する
///
/// * 通常: "Error: ..." とエラーチェーン、ヒントをstderrへ
/// * 機械向け: JSONオブジェクトをstdoutへ
pub fn output_error(
    error: &anyhow::Error,
    severity: Option<ErrorSeverity>,
    exit_code: i32,
    hint: Option<&str>,
    machine_output: bool,
) {
    if machine_output {
        let chain: Vec<String> = error.chain().skip(1).map(|c| c.to_string()).collect();
        let json = serde_json::json!({
            "success": false,
            "error": error.to_string(),
            "causes": chain,
            "severity": severity,
            "exit_code": exit_code,
            "hint": hint,
        });
        println!("{}", json);
        return;
    }

    eprintln!("Error: {}", error);

    let chain: Vec<_> = error.chain().skip(1).collect();
    if !chain.is_empty() {
        eprintln!("\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            eprintln!("  {}: {}", i + 1, cause);
        }
    }

    if let Some(hint) = hint {
        eprintln!("\nHint: {}", hint);
    }
}

/// 人間向けのテキストを生成
fn render_human(result: &CommandResult, offset: i32) -> String {
    let mut out = String::new();

    match result {
        CommandResult::Login(r) => {
            out.push('\n');
            if r.was_logged_in {
                out.push_str("✓ Access token updated!\n");
            } else {
                out.push_str("Login successful.\n");
            }
            out.push_str("The access token has been saved.\n");
        }
        CommandResult::Logout(r) => {
            if r.was_logged_in {
                out.push_str("Logged out successfully.\nThe access token has been removed.\n");
            } else {
                out.push_str("Already logged out.\n");
            }
        }
        CommandResult::Status(r) => match (&r.token, r.is_authenticated) {
            (Some(token), true) => {
                let _ = writeln!(out, "Authenticated\nToken: {}", token);
            }
            (Some(token), false) => {
                let _ = writeln!(out, "✗ Authentication failed\n  Token: {}", token);
                out.push_str("\nYour token may be invalid, expired, or missing the 'private' scope.\n");
                out.push_str("Please run 'vimeo-folders login' to update it.\n");
            }
            (None, _) => {
                out.push_str("Not logged in\n");
                out.push_str("Please run 'vimeo-folders login' to authenticate.\n");
            }
        },
        CommandResult::Folders(r) => {
            if r.folders.is_empty() {
                let _ = writeln!(out, "No folders found for {}.", r.scope);
            } else {
                let _ = writeln!(out, "Folders for {}:", r.scope);
                out.push('\n');
                for folder in &r.folders {
                    render_folder(&mut out, folder, offset);
                    out.push('\n');
                }
            }
            render_page(&mut out, &r.page, r.folders.len());
        }
        CommandResult::Folder(r) => {
            out.push_str("Folder Details:\n");
            out.push_str("===============\n");
            render_folder(&mut out, &r.folder, offset);
        }
        CommandResult::FolderVideos(r) => {
            if r.videos.is_empty() {
                let _ = writeln!(out, "Folder {} has no videos.", r.folder_id);
            } else {
                let _ = writeln!(out, "Videos in folder {}:", r.folder_id);
                out.push('\n');
                for video in &r.videos {
                    render_video(&mut out, video, offset);
                    out.push('\n');
                }
            }
            render_page(&mut out, &r.page, r.videos.len());
        }
        CommandResult::FolderVideo(r) => {
            if let Some(video) = r.video.as_ref().filter(|_| r.contains) {
                let _ = writeln!(out, "✓ Video {} is in folder {}.", r.video_id, r.folder_id);
                out.push('\n');
                render_video(&mut out, video, offset);
            } else {
                let _ = writeln!(out, "✗ Video {} is not in folder {}.", r.video_id, r.folder_id);
            }
        }
        CommandResult::Help => {
            out.push_str(HELP_TEXT);
            out.push('\n');
        }
    }

    out
}

fn render_folder(out: &mut String, folder: &Folder, offset: i32) {
    let _ = writeln!(out, "Name:      {}", folder.name);
    if let Some(id) = folder.id() {
        let _ = writeln!(out, "ID:        {}", id);
    }
    if !folder.link.is_empty() {
        let _ = writeln!(out, "Link:      {}", folder.link);
    }
    if let Some(user) = &folder.user {
        let _ = writeln!(out, "Owner:     {}", user.name);
    }
    if let Some(view) = folder.privacy.as_ref().and_then(|p| p.view.as_deref()) {
        let _ = writeln!(out, "Privacy:   {}", view);
    }
    let _ = writeln!(
        out,
        "Created:   {}",
        format_timestamp(folder.created_time.as_ref(), offset)
    );
    let _ = writeln!(
        out,
        "Modified:  {}",
        format_timestamp(folder.modified_time.as_ref(), offset)
    );
}

fn render_video(out: &mut String, video: &Video, offset: i32) {
    let _ = writeln!(out, "Name:      {}", video.name);
    if let Some(id) = video.id() {
        let _ = writeln!(out, "ID:        {}", id);
    }
    if let Some(duration) = video.duration {
        let _ = writeln!(out, "Duration:  {}", format_duration(duration));
    }
    if let (Some(width), Some(height)) = (video.width, video.height) {
        let _ = writeln!(out, "Size:      {}x{}", width, height);
    }
    if let Some(status) = &video.status {
        let _ = writeln!(out, "Status:    {}", status);
    }
    if !video.link.is_empty() {
        let _ = writeln!(out, "Link:      {}", video.link);
    }
    let _ = writeln!(
        out,
        "Created:   {}",
        format_timestamp(video.created_time.as_ref(), offset)
    );
}

fn render_page(out: &mut String, page: &Response, shown: usize) {
    if page.total == 0 {
        return;
    }
    if page.page > 0 {
        let _ = writeln!(out, "Showing {} of {} (page {})", shown, page.total, page.page);
    } else {
        let _ = writeln!(out, "Showing {} of {}", shown, page.total);
    }
    if page.has_next_page() {
        out.push_str("More results available: use --page to fetch the next page.\n");
    }
}

/// 機械可読JSONを生成
///
/// 結果本体は `CommandResult` のシリアライズをそのまま使い、
/// 共通フィールド `success` を付与する。
fn machine_json(result: &CommandResult) -> Result<serde_json::Value> {
    let mut json = serde_json::to_value(result)?;
    match json.as_object_mut() {
        Some(object) => {
            object.insert("success".to_string(), serde_json::Value::Bool(true));
            object.insert(
                "command".to_string(),
                serde_json::Value::String(result.command_name().to_string()),
            );
        }
        None => {
            json = serde_json::json!({
                "success": true,
                "command": result.command_name(),
            });
        }
    }
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::result::{
        FolderListResult, FolderVideoResult, LoginResult, StatusResult,
    };

    fn folder(name: &str) -> Folder {
        Folder {
            uri: format!("/users/1/projects/{}", name.len()),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_machine_json_folders() {
        let mut page = Response::new(200);
        page.total = 1;
        let result = CommandResult::Folders(FolderListResult {
            scope: "me".to_string(),
            folders: vec![folder("Trip")],
            page,
        });

        let json = machine_json(&result).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["command"], "folders");
        assert_eq!(json["folders"][0]["name"], "Trip");
        assert_eq!(json["page"]["total"], 1);
        // 未設定のフィールドは出力しない
        assert!(json["folders"][0].get("privacy").is_none());
    }

    #[test]
    fn test_machine_json_help() {
        let json = machine_json(&CommandResult::Help).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["command"], "help");
    }

    #[test]
    fn test_machine_json_folder_video_absent() {
        let result = CommandResult::FolderVideo(FolderVideoResult {
            folder_id: "f1".to_string(),
            video_id: 42,
            contains: false,
            video: None,
        });

        let json = machine_json(&result).unwrap();
        assert_eq!(json["command"], "folder-video");
        assert_eq!(json["contains"], false);
        assert!(json["video"].is_null());
    }

    #[test]
    fn test_render_human_folders() {
        let mut page = Response::new(200);
        page.total = 5;
        page.page = 1;
        page.next_page = Some("/me/projects?page=2".to_string());
        let result = CommandResult::Folders(FolderListResult {
            scope: "me".to_string(),
            folders: vec![folder("Trip"), folder("Work")],
            page,
        });

        let text = render_human(&result, 0);
        assert!(text.contains("Folders for me:"));
        assert!(text.contains("Name:      Trip"));
        assert!(text.contains("Name:      Work"));
        assert!(text.contains("Showing 2 of 5 (page 1)"));
        assert!(text.contains("--page"));
    }

    #[test]
    fn test_render_human_folder_video_absent() {
        let result = CommandResult::FolderVideo(FolderVideoResult {
            folder_id: "f1".to_string(),
            video_id: 42,
            contains: false,
            video: None,
        });
        assert!(render_human(&result, 0).contains("is not in folder f1"));
    }

    #[test]
    fn test_render_human_status() {
        let result = CommandResult::Status(StatusResult {
            is_authenticated: false,
            token: None,
        });
        assert!(render_human(&result, 0).contains("Not logged in"));

        let result = CommandResult::Login(LoginResult {
            was_logged_in: true,
        });
        assert!(render_human(&result, 0).contains("updated"));
    }

    #[test]
    fn test_output_result_modes() {
        assert!(output_result(&CommandResult::Help, true, 0).is_ok());
        assert!(output_result(&CommandResult::Help, false, 0).is_ok());
    }
}
