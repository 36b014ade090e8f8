/// 動画の取得処理
///
/// 一覧取得と単体取得の共通ルーチン。フォルダ配下・ユーザー配下・
/// 動画単体のいずれも、パスの接頭辞だけが異なりここを通る。
use crate::api::options::{CallOption, add_options};
use crate::api::pagination::Response;
use crate::api::scope::UserScope;
use crate::api::transport::{ApiResult, Transport, send_json};
use crate::api::types::{DataList, Video};
use reqwest::Method;

/// 指定パスの動画一覧を取得
pub async fn list_videos<C>(
    transport: &C,
    path: &str,
    opts: &[CallOption],
) -> ApiResult<(Vec<Video>, Response)>
where
    C: Transport + ?Sized,
{
    let path = add_options(path, opts)?;
    let request = transport.new_request(Method::GET, &path, None)?;

    let (videos, mut response): (DataList<Video>, Response) = send_json(transport, request).await?;
    response.set_paging(&videos.pagination);

    Ok((videos.data, response))
}

/// 指定パスの動画を1件取得
pub async fn get_video<C>(
    transport: &C,
    path: &str,
    opts: &[CallOption],
) -> ApiResult<(Video, Response)>
where
    C: Transport + ?Sized,
{
    let path = add_options(path, opts)?;
    let request = transport.new_request(Method::GET, &path, None)?;

    send_json(transport, request).await
}

/// 動画リソース（`videos/{id}`）
pub struct VideosService<'a, C: ?Sized> {
    transport: &'a C,
}

impl<'a, C> VideosService<'a, C>
where
    C: Transport + ?Sized,
{
    pub fn new(transport: &'a C) -> Self {
        Self { transport }
    }

    /// 動画を1件取得
    pub async fn get(&self, video_id: u64, opts: &[CallOption]) -> ApiResult<(Video, Response)> {
        get_video(self.transport, &format!("videos/{}", video_id), opts).await
    }

    /// ユーザーがアップロードした動画の一覧
    pub async fn list(
        &self,
        scope: &UserScope,
        opts: &[CallOption],
    ) -> ApiResult<(Vec<Video>, Response)> {
        list_videos(self.transport, &format!("{}/videos", scope.path_prefix()), opts).await
    }
}
