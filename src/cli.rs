use crate::api::{CallOption, Direction};
use crate::commands::{self, CommandResult, ListArgs};
use crate::domain::error::DomainError;
use crate::domain::validator::{parse_count, parse_video_id, require_folder_id};
use anyhow::{Context, Result};

/// どのコマンドにも付けられるフラグ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalFlags {
    pub machine: bool,
    pub verbose: bool,
}

/// 解析済みのコマンド
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login { use_stdin: bool },
    Logout,
    Status,
    Folders(ListArgs),
    Folder { user: Option<String>, folder_id: String },
    FolderVideos { folder_id: String, args: ListArgs },
    FolderVideo { user: Option<String>, folder_id: String, video_id: u64 },
    Help,
}

/// グローバルフラグを取り除き、残りの引数を返す
///
/// `args[0]` はプログラム名として除外する。
pub fn split_global_flags(args: &[String]) -> (GlobalFlags, Vec<String>) {
    let mut flags = GlobalFlags::default();
    let mut rest = Vec::with_capacity(args.len());

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--machine" => flags.machine = true,
            "--verbose" | "-v" => flags.verbose = true,
            _ => rest.push(arg.clone()),
        }
    }

    (flags, rest)
}

/// コマンドと引数を解析する
pub fn parse_command(args: &[String]) -> Result<Command, DomainError> {
    let Some((command, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };

    match command.as_str() {
        "login" => {
            let mut use_stdin = false;
            for arg in rest {
                match arg.as_str() {
                    "--stdin" => use_stdin = true,
                    other => return Err(DomainError::UnknownFlag { flag: other.to_string() }),
                }
            }
            Ok(Command::Login { use_stdin })
        }
        "logout" => no_extra_args(rest).map(|_| Command::Logout),
        "status" => no_extra_args(rest).map(|_| Command::Status),
        "help" | "--help" | "-h" => Ok(Command::Help),
        "folders" => {
            let (positional, args) = parse_list_args(rest)?;
            no_extra_args(&positional)?;
            Ok(Command::Folders(args))
        }
        "folder" => {
            let (positional, args) = parse_list_args(rest)?;
            reject_paging(&args)?;
            let folder_id = require_folder_id(positional.first())?;
            no_extra_args(&positional[1..])?;
            Ok(Command::Folder {
                user: args.user,
                folder_id,
            })
        }
        "folder-videos" => {
            let (positional, args) = parse_list_args(rest)?;
            let folder_id = require_folder_id(positional.first())?;
            no_extra_args(&positional[1..])?;
            Ok(Command::FolderVideos { folder_id, args })
        }
        "folder-video" => {
            let (positional, args) = parse_list_args(rest)?;
            reject_paging(&args)?;
            let folder_id = require_folder_id(positional.first())?;
            let video_id = positional
                .get(1)
                .ok_or_else(|| DomainError::missing_argument("video id"))
                .and_then(|v| parse_video_id(v))?;
            no_extra_args(&positional[2..])?;
            Ok(Command::FolderVideo {
                user: args.user,
                folder_id,
                video_id,
            })
        }
        other => Err(DomainError::UnknownCommand {
            command: other.to_string(),
        }),
    }
}

/// `--user` とページングフラグを解析し、位置引数を分離する
fn parse_list_args(args: &[String]) -> Result<(Vec<String>, ListArgs), DomainError> {
    let mut positional = Vec::new();
    let mut list = ListArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if !arg.starts_with("--") {
            positional.push(arg.clone());
            continue;
        }

        let flag = arg.as_str();
        let mut value = || {
            iter.next()
                .cloned()
                .ok_or_else(|| DomainError::MissingFlagValue { flag: flag.to_string() })
        };

        match flag {
            "--user" => list.user = Some(value()?),
            "--page" => list.options.push(CallOption::Page(parse_count(flag, &value()?)?)),
            "--per-page" => list
                .options
                .push(CallOption::PerPage(parse_count(flag, &value()?)?)),
            "--sort" => list.options.push(CallOption::Sort(value()?)),
            "--direction" => {
                let raw = value()?;
                let direction = raw.parse::<Direction>().map_err(|_| {
                    DomainError::invalid_value(flag, raw.clone(), "expected asc or desc")
                })?;
                list.options.push(CallOption::Direction(direction));
            }
            "--query" => list.options.push(CallOption::Query(value()?)),
            other => {
                return Err(DomainError::UnknownFlag {
                    flag: other.to_string(),
                });
            }
        }
    }

    Ok((positional, list))
}

fn reject_paging(args: &ListArgs) -> Result<(), DomainError> {
    match args.options.first() {
        Some(opt) => Err(DomainError::UnknownFlag {
            flag: format!("--{}", opt.key().replace('_', "-")),
        }),
        None => Ok(()),
    }
}

fn no_extra_args(args: &[String]) -> Result<(), DomainError> {
    match args.first() {
        Some(extra) => Err(DomainError::UnexpectedArgument { arg: extra.clone() }),
        None => Ok(()),
    }
}

/// 解析済みのコマンドを実行する
pub async fn dispatch(command: Command) -> Result<CommandResult> {
    match command {
        Command::Login { use_stdin } => commands::login::execute(use_stdin)
            .await
            .context("Login command failed"),
        Command::Logout => commands::logout::execute()
            .await
            .context("Logout command failed"),
        Command::Status => commands::status::execute()
            .await
            .context("Status command failed"),
        Command::Folders(args) => commands::folders::execute(args)
            .await
            .context("Folders command failed"),
        Command::Folder { user, folder_id } => commands::folder::execute(user, &folder_id)
            .await
            .context("Folder command failed"),
        Command::FolderVideos { folder_id, args } => {
            commands::folder_videos::execute(&folder_id, args)
                .await
                .context("Folder-videos command failed")
        }
        Command::FolderVideo {
            user,
            folder_id,
            video_id,
        } => commands::folder_video::execute(user, &folder_id, video_id)
            .await
            .context("Folder-video command failed"),
        Command::Help => commands::help::execute().await,
    }
}
