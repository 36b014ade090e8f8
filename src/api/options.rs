/// 呼び出しオプション
///
/// ページ番号・件数・並び順などのクエリ文字列修飾子を表現し、
/// リクエストパスへ付与します。不正な組み合わせは送信前にエラーとなります。
use crate::api::error::InfraError;
use std::fmt;

/// 1ページあたりの最大件数（Vimeo APIの上限）
pub const MAX_PER_PAGE: u32 = 100;

/// 並び順の方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = InfraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(InfraError::invalid_option(
                "direction",
                format!("expected 'asc' or 'desc', got '{}'", other),
            )),
        }
    }
}

/// クエリ文字列に付与するオプション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOption {
    Page(u32),
    PerPage(u32),
    Sort(String),
    Direction(Direction),
    /// レスポンスに含めるフィールドを限定する
    Fields(Vec<String>),
    Filter(String),
    Query(String),
}

impl CallOption {
    /// クエリパラメータ名
    pub fn key(&self) -> &'static str {
        match self {
            Self::Page(_) => "page",
            Self::PerPage(_) => "per_page",
            Self::Sort(_) => "sort",
            Self::Direction(_) => "direction",
            Self::Fields(_) => "fields",
            Self::Filter(_) => "filter",
            Self::Query(_) => "query",
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Page(n) | Self::PerPage(n) => n.to_string(),
            Self::Sort(s) | Self::Filter(s) | Self::Query(s) => s.clone(),
            Self::Direction(d) => d.as_str().to_string(),
            Self::Fields(fields) => fields.join(","),
        }
    }

    fn validate(&self) -> Result<(), InfraError> {
        match self {
            Self::Page(0) => Err(InfraError::invalid_option("page", "must be at least 1")),
            Self::PerPage(n) if *n == 0 || *n > MAX_PER_PAGE => Err(InfraError::invalid_option(
                "per_page",
                format!("must be between 1 and {}, got {}", MAX_PER_PAGE, n),
            )),
            Self::Sort(s) | Self::Filter(s) | Self::Query(s) if s.trim().is_empty() => {
                Err(InfraError::invalid_option(self.key(), "must not be empty"))
            }
            Self::Fields(fields) if fields.is_empty() || fields.iter().any(|f| f.trim().is_empty()) => {
                Err(InfraError::invalid_option("fields", "field names must not be empty"))
            }
            _ => Ok(()),
        }
    }
}

/// オプションをパスのクエリ文字列へ付与する
///
/// 既にクエリを持つパスには `&` で連結する。
/// 同じ種類のオプションが2回以上指定された場合はエラー。
pub fn add_options(path: &str, opts: &[CallOption]) -> Result<String, InfraError> {
    if opts.is_empty() {
        return Ok(path.to_string());
    }

    let mut seen: Vec<&'static str> = Vec::with_capacity(opts.len());
    let mut pairs = Vec::with_capacity(opts.len());

    for opt in opts {
        opt.validate()?;

        let key = opt.key();
        if seen.contains(&key) {
            return Err(InfraError::invalid_option(key, "specified more than once"));
        }
        seen.push(key);

        pairs.push(format!("{}={}", key, urlencoding::encode(&opt.value())));
    }

    let separator = if path.contains('?') { '&' } else { '?' };
    Ok(format!("{}{}{}", path, separator, pairs.join("&")))
}
