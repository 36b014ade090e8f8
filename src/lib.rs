//! Vimeo folders client
//!
//! Vimeo APIのフォルダ（`projects`）と、その中の動画を取得するクライアント。
//!
//! ```no_run
//! use vimeo_folders::api::auth::AuthManager;
//! use vimeo_folders::api::client::ApiClient;
//! use vimeo_folders::api::{CallOption, Client, UserScope};
//!
//! # async fn example() -> Result<(), vimeo_folders::api::error::InfraError> {
//! let transport = ApiClient::production(Some(AuthManager::from_access_token("token")))?;
//! let client = Client::new(transport);
//!
//! let (folders, page) = client
//!     .folders()
//!     .list_folders(&UserScope::Me, &[CallOption::PerPage(25)])
//!     .await?;
//! println!("{} of {} folders", folders.len(), page.total);
//!
//! // 404 は「動画がフォルダに含まれていない」
//! match client.folders().get_folder_video(&UserScope::Me, "123", 456, &[]).await {
//!     Ok((video, _)) => println!("found {}", video.name),
//!     Err(e) if e.is_not_found() => println!("not in folder"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error_severity;
pub mod presentation;
