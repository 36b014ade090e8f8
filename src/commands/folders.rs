use crate::api::{Client, Transport, UserScope};
use crate::commands::result::{CommandResult, FolderListResult};
use crate::commands::{ListArgs, connect};
use anyhow::{Context, Result};

/// フォルダ一覧コマンドを実行する
///
/// # エラー
/// 設定・認証・インフラ層のエラーをanyhowで集約して返します。
pub async fn execute(args: ListArgs) -> Result<CommandResult> {
    let (user_config, client) = connect()?;
    let scope = user_config.resolve_scope(args.user.clone());

    run(&client, &scope, &args).await
}

pub async fn run<T: Transport>(
    client: &Client<T>,
    scope: &UserScope,
    args: &ListArgs,
) -> Result<CommandResult> {
    let (folders, page) = client
        .folders()
        .list_folders(scope, &args.options)
        .await
        .with_context(|| format!("Failed to list folders for {}", scope))?;

    Ok(CommandResult::Folders(FolderListResult {
        scope: scope.to_string(),
        folders,
        page,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::FakeTransport;
    use crate::api::transport::RawResponse;
    use crate::api::CallOption;

    #[tokio::test]
    async fn test_run_lists_folders() {
        let transport = FakeTransport::new();
        transport.push_response(RawResponse::new(
            200,
            r#"{"total":2,"data":[{"name":"Trip"},{"name":"Work"}]}"#,
        ));
        let client = Client::new(transport);
        let args = ListArgs {
            user: None,
            options: vec![CallOption::PerPage(2)],
        };

        let result = run(&client, &UserScope::user("alice"), &args).await.unwrap();

        match result {
            CommandResult::Folders(r) => {
                assert_eq!(r.scope, "user alice");
                assert_eq!(r.folders.len(), 2);
                assert_eq!(r.page.total, 2);
            }
            other => panic!("Expected Folders result, got {:?}", other),
        }
        assert_eq!(
            client.transport().paths(),
            ["users/alice/projects?per_page=2"]
        );
    }
}
