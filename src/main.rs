use std::env;
use tracing_subscriber::EnvFilter;
use vimeo_folders::api::error::InfraError;
use vimeo_folders::cli::{self, GlobalFlags};
use vimeo_folders::config::error::ConfigError;
use vimeo_folders::config::{APP_CONFIG, UserConfig};
use vimeo_folders::domain::error::DomainError;
use vimeo_folders::error_severity::ErrorSeverity;
use vimeo_folders::presentation::output;

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();
    let (flags, rest) = cli::split_global_flags(&args);

    init_logging(flags.verbose);

    if let Err(e) = run(&rest, flags).await {
        handle_error(e, flags.machine);
    }
}

/// アプリケーションのメイン処理
async fn run(args: &[String], flags: GlobalFlags) -> anyhow::Result<()> {
    let command = cli::parse_command(args)?;
    let result = cli::dispatch(command).await?;

    let offset = UserConfig::load()
        .map(|c| c.timezone_offset_seconds)
        .unwrap_or(0);
    output::output_result(&result, flags.machine, offset)
}

/// ログ出力の初期化（stderr）
///
/// RUST_LOG が設定されていればそれを優先する。
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        APP_CONFIG.logging.verbose_level
    } else {
        APP_CONFIG.logging.default_level
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// エラーハンドリングとユーザーへの表示
///
/// anyhow::Error から元のエラー型を downcast して、
/// エラーの種類に応じた exit code とメッセージを決定する。
fn handle_error(error: anyhow::Error, machine_output: bool) {
    let severity = determine_severity(&error);
    let exit_code = severity.map(ErrorSeverity::exit_code).unwrap_or(1);
    let hint = get_error_hint(&error);

    output::output_error(&error, severity, exit_code, hint.as_deref(), machine_output);

    std::process::exit(exit_code);
}

/// エラーチェーンから深刻度を決定
fn determine_severity(error: &anyhow::Error) -> Option<ErrorSeverity> {
    error.chain().find_map(|cause| {
        if let Some(e) = cause.downcast_ref::<DomainError>() {
            return Some(e.severity());
        }
        if let Some(e) = cause.downcast_ref::<InfraError>() {
            return Some(e.severity());
        }
        cause.downcast_ref::<ConfigError>().map(ConfigError::severity)
    })
}

/// エラーに対するユーザー向けヒントを取得
fn get_error_hint(error: &anyhow::Error) -> Option<String> {
    error.chain().find_map(|cause| {
        if let Some(e) = cause.downcast_ref::<DomainError>() {
            return e.hint().map(str::to_string);
        }
        if let Some(e) = cause.downcast_ref::<InfraError>() {
            return e.hint().map(str::to_string);
        }
        cause
            .downcast_ref::<ConfigError>()
            .and_then(|e| e.hint().map(str::to_string))
    })
}
