use std::path::PathBuf;

/// Storage quota used when nothing is configured (browser local storage parity)
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// 登录凭证校验方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// 明文比对，兼容浏览器站点写入的管理员数据
    #[default]
    Plaintext,
    /// argon2 哈希 (旧的明文记录仍可登录)
    Argon2,
}

impl std::str::FromStr for AuthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plaintext" | "plain" => Ok(AuthMode::Plaintext),
            "argon2" => Ok(AuthMode::Argon2),
            other => Err(format!("unknown auth mode: {other}")),
        }
    }
}

/// 内容库配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | QESPACE_DATA_DIR | ./data | 数据目录 (content.redb 所在位置) |
/// | QESPACE_STORAGE_QUOTA_BYTES | 5242880 | 存储配额 (字节)，0 = 不限制 |
/// | QESPACE_AUTH_MODE | plaintext | plaintext / argon2 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 滚动日志目录 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// QESPACE_DATA_DIR=/srv/qespace QESPACE_AUTH_MODE=argon2 qespace-admin stats
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 数据目录
    pub data_dir: PathBuf,
    /// 存储配额，None = 不限制
    pub quota_bytes: Option<usize>,
    pub auth_mode: AuthMode,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    /// 运行环境: development | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置 (先读取 .env)
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源加载，常用于测试场景
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let quota_bytes = match lookup("QESPACE_STORAGE_QUOTA_BYTES")
            .and_then(|v| v.trim().parse::<usize>().ok())
        {
            Some(0) => None,
            Some(n) => Some(n),
            None => Some(DEFAULT_QUOTA_BYTES),
        };

        let auth_mode = match lookup("QESPACE_AUTH_MODE") {
            Some(raw) => raw.parse().unwrap_or_else(|e: String| {
                tracing::warn!(error = %e, "Falling back to plaintext auth");
                AuthMode::Plaintext
            }),
            None => AuthMode::Plaintext,
        };

        Self {
            data_dir: lookup("QESPACE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./data")),
            quota_bytes,
            auth_mode,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    /// redb 数据文件路径
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("content.redb")
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
