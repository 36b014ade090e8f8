// Vimeo API client module
//
// Folder (project) lookups and the videos inside them.
// Transport is injected through the `Transport` trait; `ApiClient` is the
// reqwest-backed implementation.

pub mod auth;
pub mod client;
pub mod error;
pub mod folders;
pub mod options;
pub mod pagination;
pub mod scope;
pub mod transport;
pub mod types;
pub mod videos;

#[cfg(test)]
pub(crate) mod mock;

pub use folders::FoldersService;
pub use options::{CallOption, Direction};
pub use pagination::Response;
pub use scope::UserScope;
pub use transport::Transport;
pub use types::{Folder, Privacy, User, Video};
pub use videos::VideosService;

/// トランスポートを所有し、各リソースのサービスを払い出す
#[derive(Debug, Clone)]
pub struct Client<T = client::ApiClient> {
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn folders(&self) -> FoldersService<'_, T> {
        FoldersService::new(&self.transport)
    }

    pub fn videos(&self) -> VideosService<'_, T> {
        VideosService::new(&self.transport)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
