//! フォルダ（`projects`）リソース
//!
//! フォルダの一覧・単体取得と、フォルダ内の動画の一覧・単体取得。
//! いずれの呼び出しも「パス構築 → オプション付与 → リクエスト構築 →
//! 送信 → デコード」の一直線で、状態を持たない。
//!
//! Vimeo API docs: https://developer.vimeo.com/api/reference/folders

use crate::api::options::{CallOption, add_options};
use crate::api::pagination::Response;
use crate::api::scope::UserScope;
use crate::api::transport::{ApiResult, Transport, send_json};
use crate::api::types::{DataList, Folder, Video};
use crate::api::videos;
use reqwest::Method;

/// `{prefix}/projects`
pub fn folders_path(scope: &UserScope) -> String {
    format!("{}/projects", scope.path_prefix())
}

/// `{prefix}/projects/{folder_id}`
///
/// IDはパスセグメントとしてエンコードする。空のIDはそのまま空になる。
pub fn folder_path(scope: &UserScope, folder_id: &str) -> String {
    format!("{}/{}", folders_path(scope), urlencoding::encode(folder_id))
}

/// `{prefix}/projects/{folder_id}/videos`
pub fn folder_videos_path(scope: &UserScope, folder_id: &str) -> String {
    format!("{}/videos", folder_path(scope, folder_id))
}

/// `{prefix}/projects/{folder_id}/videos/{video_id}`
pub fn folder_video_path(scope: &UserScope, folder_id: &str, video_id: u64) -> String {
    format!("{}/{}", folder_videos_path(scope, folder_id), video_id)
}

/// フォルダリソースのクライアント
pub struct FoldersService<'a, C: ?Sized> {
    transport: &'a C,
}

impl<'a, C> FoldersService<'a, C>
where
    C: Transport + ?Sized,
{
    pub fn new(transport: &'a C) -> Self {
        Self { transport }
    }

    /// フォルダ一覧を取得
    ///
    /// 順序はサーバーが返した順のまま。
    pub async fn list_folders(
        &self,
        scope: &UserScope,
        opts: &[CallOption],
    ) -> ApiResult<(Vec<Folder>, Response)> {
        let path = add_options(&folders_path(scope), opts)?;
        tracing::debug!(%scope, path = %path, "listing folders");

        let request = self.transport.new_request(Method::GET, &path, None)?;
        let (folders, mut response): (DataList<Folder>, Response) =
            send_json(self.transport, request).await?;
        response.set_paging(&folders.pagination);

        Ok((folders.data, response))
    }

    /// フォルダを1件取得
    ///
    /// `folder_id` はそのまま渡す（空ならサーバー側で拒否される）。
    pub async fn get_folder(
        &self,
        scope: &UserScope,
        folder_id: &str,
        opts: &[CallOption],
    ) -> ApiResult<(Folder, Response)> {
        let path = add_options(&folder_path(scope, folder_id), opts)?;
        tracing::debug!(%scope, path = %path, "getting folder");

        let request = self.transport.new_request(Method::GET, &path, None)?;
        send_json(self.transport, request).await
    }

    /// フォルダ内の動画一覧を取得
    pub async fn list_folder_videos(
        &self,
        scope: &UserScope,
        folder_id: &str,
        opts: &[CallOption],
    ) -> ApiResult<(Vec<Video>, Response)> {
        videos::list_videos(self.transport, &folder_videos_path(scope, folder_id), opts).await
    }

    /// フォルダ内の動画を1件取得
    ///
    /// 動画がフォルダに含まれているかの確認に使う。含まれていない場合は
    /// 404の `InfraError::Api` が返る（`is_not_found()` で判定できる）。
    pub async fn get_folder_video(
        &self,
        scope: &UserScope,
        folder_id: &str,
        video_id: u64,
        opts: &[CallOption],
    ) -> ApiResult<(Video, Response)> {
        videos::get_video(
            self.transport,
            &folder_video_path(scope, folder_id, video_id),
            opts,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ApiClient;
    use crate::api::error::InfraError;
    use crate::api::mock::FakeTransport;
    use crate::api::options::Direction;
    use crate::api::transport::RawResponse;
    use crate::api::videos::VideosService;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_paths_for_self_scope() {
        let me = UserScope::Me;
        assert_eq!(folders_path(&me), "me/projects");
        assert_eq!(folder_path(&me, "f1"), "me/projects/f1");
        assert_eq!(folder_videos_path(&me, "f1"), "me/projects/f1/videos");
        assert_eq!(folder_video_path(&me, "f1", 42), "me/projects/f1/videos/42");
    }

    #[test]
    fn test_paths_for_named_user() {
        let alice = UserScope::user("alice");
        assert_eq!(folders_path(&alice), "users/alice/projects");
        assert_eq!(folder_path(&alice, "f1"), "users/alice/projects/f1");
        assert_eq!(folder_videos_path(&alice, "f1"), "users/alice/projects/f1/videos");
        assert_eq!(
            folder_video_path(&alice, "f1", 42),
            "users/alice/projects/f1/videos/42"
        );
    }

    #[test]
    fn test_folder_id_encoding() {
        let me = UserScope::Me;
        assert_eq!(folder_path(&me, "123456"), "me/projects/123456");
        assert_eq!(folder_path(&me, "a b/c"), "me/projects/a%20b%2Fc");
        // 空IDはローカルで検証せずそのまま送る
        assert_eq!(folder_path(&me, ""), "me/projects/");
    }

    #[tokio::test]
    async fn test_every_operation_uses_scope_prefix() {
        for (scope, prefix) in [
            (UserScope::Me, "me"),
            (UserScope::user("12345"), "users/12345"),
        ] {
            let transport = FakeTransport::new();
            let folders = FoldersService::new(&transport);

            folders.list_folders(&scope, &[]).await.unwrap();
            folders.get_folder(&scope, "f1", &[]).await.unwrap();
            folders.list_folder_videos(&scope, "f1", &[]).await.unwrap();
            folders.get_folder_video(&scope, "f1", 7, &[]).await.unwrap();

            assert_eq!(
                transport.paths(),
                [
                    format!("{}/projects", prefix),
                    format!("{}/projects/f1", prefix),
                    format!("{}/projects/f1/videos", prefix),
                    format!("{}/projects/f1/videos/7", prefix),
                ]
            );
        }
    }

    #[tokio::test]
    async fn test_options_are_applied() {
        let transport = FakeTransport::new();
        let folders = FoldersService::new(&transport);

        folders
            .list_folders(
                &UserScope::Me,
                &[
                    CallOption::Page(2),
                    CallOption::PerPage(10),
                    CallOption::Sort("name".to_string()),
                    CallOption::Direction(Direction::Asc),
                ],
            )
            .await
            .unwrap();

        assert_eq!(
            transport.paths(),
            ["me/projects?page=2&per_page=10&sort=name&direction=asc"]
        );
    }

    #[tokio::test]
    async fn test_invalid_option_fails_before_dispatch() {
        let transport = FakeTransport::new();
        let folders = FoldersService::new(&transport);

        let err = folders
            .list_folders(&UserScope::Me, &[CallOption::Page(0)])
            .await
            .unwrap_err();
        assert!(matches!(err, InfraError::InvalidOption { .. }));

        let err = folders
            .get_folder(&UserScope::Me, "f1", &[CallOption::PerPage(1000)])
            .await
            .unwrap_err();
        assert!(matches!(err, InfraError::InvalidOption { .. }));

        assert!(transport.paths().is_empty());
    }

    #[tokio::test]
    async fn test_folder_video_routines_match_shared_ones() {
        let transport = FakeTransport::new();
        let body = r#"{"uri":"/videos/42","name":"Clip","duration":30}"#;
        transport.push_response(RawResponse::new(200, body));
        transport.push_response(RawResponse::new(200, body));

        let (in_folder, _) = FoldersService::new(&transport)
            .get_folder_video(&UserScope::Me, "f1", 42, &[])
            .await
            .unwrap();
        let (direct, _) = VideosService::new(&transport).get(42, &[]).await.unwrap();

        assert_eq!(in_folder, direct);
        assert_eq!(transport.paths(), ["me/projects/f1/videos/42", "videos/42"]);
    }

    #[tokio::test]
    async fn test_list_folders_against_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me/projects"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"data":[{"name":"Trip"}], "total":1}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), None).unwrap();
        let (folders, response) = FoldersService::new(&client)
            .list_folders(&UserScope::from(Some("")), &[])
            .await
            .unwrap();

        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].name, "Trip");
        assert!(folders[0].user.is_none());
        assert!(folders[0].privacy.is_none());
        assert_eq!(response.total, 1);
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_list_folders_paging_against_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/alice/projects"))
            .and(query_param("page", "2"))
            .and(query_param("per_page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{
                    "total": 3, "page": 2, "per_page": 1,
                    "paging": {
                        "next": "/users/alice/projects?page=3&per_page=1",
                        "previous": "/users/alice/projects?page=1&per_page=1",
                        "first": "/users/alice/projects?page=1&per_page=1",
                        "last": "/users/alice/projects?page=3&per_page=1"
                    },
                    "data": [{"uri": "/users/alice/projects/77", "name": "Second"}]
                }"#,
            ))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), None).unwrap();
        let (folders, response) = FoldersService::new(&client)
            .list_folders(
                &UserScope::user("alice"),
                &[CallOption::Page(2), CallOption::PerPage(1)],
            )
            .await
            .unwrap();

        assert_eq!(folders[0].id(), Some("77"));
        assert_eq!(response.total, 3);
        assert_eq!(response.page, 2);
        assert_eq!(
            response.next_page.as_deref(),
            Some("/users/alice/projects?page=3&per_page=1")
        );
    }

    #[tokio::test]
    async fn test_get_folder_against_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/alice/projects/f1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{
                    "uri": "/users/alice/projects/f1",
                    "name": "Trip",
                    "link": "https://vimeo.com/user/alice/folder/f1",
                    "created_time": "2023-05-01T08:00:00+00:00",
                    "modified_time": "2023-06-01T08:00:00+00:00",
                    "user": {"uri": "/users/alice", "name": "Alice"},
                    "privacy": {"view": "team"}
                }"#,
            ))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), None).unwrap();
        let (folder, _) = FoldersService::new(&client)
            .get_folder(&UserScope::user("alice"), "f1", &[])
            .await
            .unwrap();

        assert_eq!(folder.name, "Trip");
        assert_eq!(folder.user.as_ref().map(|u| u.name.as_str()), Some("Alice"));
        assert_eq!(
            folder.created_time.map(|t| t.to_rfc3339()),
            Some("2023-05-01T08:00:00+00:00".to_string())
        );
    }

    #[tokio::test]
    async fn test_get_folder_video_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/alice/projects/f1/videos/42"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_string(r#"{"error":"The requested video couldn't be found."}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), None).unwrap();
        let result = FoldersService::new(&client)
            .get_folder_video(&UserScope::user("alice"), "f1", 42, &[])
            .await;

        let err = result.expect_err("a 404 must not yield a video");
        assert!(err.is_not_found());
        assert_eq!(err.status_code(), Some(404));
    }

    #[tokio::test]
    async fn test_list_folder_videos_against_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me/projects/f1/videos"))
            .and(query_param("sort", "date"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"total":2,"data":[{"uri":"/videos/2"},{"uri":"/videos/1"}]}"#,
            ))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), None).unwrap();
        let (videos, response) = FoldersService::new(&client)
            .list_folder_videos(&UserScope::Me, "f1", &[CallOption::Sort("date".to_string())])
            .await
            .unwrap();

        let ids: Vec<_> = videos.iter().filter_map(|v| v.id()).collect();
        assert_eq!(ids, [2, 1]);
        assert_eq!(response.total, 2);
    }
}
