/// プレゼンテーション層: ユーザー入力処理
///
/// 端末またはパイプされたstdinからアクセストークンを取得します。
use crate::commands::login::LoginCredentials;
use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write};

/// 対話的にアクセストークンを取得
pub fn read_token_interactive() -> Result<LoginCredentials> {
    eprintln!("Logging in to Vimeo...");
    eprintln!();
    eprintln!("Please enter a personal access token with the 'public' and 'private' scopes.");
    eprintln!("You can generate one at: https://developer.vimeo.com/apps");
    eprintln!();

    eprint!("Access Token: ");
    io::stderr().flush()?;

    read_token(&mut io::stdin().lock())
}

/// stdin からパイプでアクセストークンを取得（1行目）
pub fn read_token_from_stdin() -> Result<LoginCredentials> {
    read_token(&mut io::stdin().lock())
}

fn read_token(reader: &mut impl BufRead) -> Result<LoginCredentials> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read access token from input")?;
    let access_token = line.trim().to_string();

    if access_token.is_empty() {
        bail!("Access token cannot be empty. Please provide a valid token.");
    }

    Ok(LoginCredentials { access_token })
}
