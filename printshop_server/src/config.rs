use std::{env, fmt::Display, str::FromStr};

use anyhow::{anyhow, Result};
use tracing::{info, warn};

use crate::domains::pickup::services::DEFAULT_MAX_ATTEMPTS;

const DEFAULT_PORT: &str = "3002";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// 서버 설정 (환경 변수에서 한 번 로드)
/// Server configuration loaded from the environment
///
/// - `PORT` (기본: 3002)
/// - `DATABASE_URL` (없으면 메모리 저장소 사용)
/// - `CORS_ORIGIN` (기본: http://localhost:3000)
/// - `PICKUP_CODE_MAX_ATTEMPTS` (기본: 5)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub cors_origin: String,
    pub pickup_max_attempts: u32,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 로드 (테스트용)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pickup_max_attempts: u32 = try_load(
            &lookup,
            "PICKUP_CODE_MAX_ATTEMPTS",
            &DEFAULT_MAX_ATTEMPTS.to_string(),
        )?;
        if pickup_max_attempts == 0 {
            return Err(anyhow!("PICKUP_CODE_MAX_ATTEMPTS must be at least 1"));
        }

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if database_url.is_none() {
            warn!("DATABASE_URL not set, pickups will be kept in memory");
        }

        Ok(Self {
            port: try_load(&lookup, "PORT", DEFAULT_PORT)?,
            database_url,
            cors_origin: lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            pickup_max_attempts,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3002,
            database_url: None,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            pickup_max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| anyhow!("Invalid {key} value: {e}"))
}
