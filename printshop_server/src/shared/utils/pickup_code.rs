//! 픽업 코드 생성기
//! Pickup Code Generator
//!
//! 역할:
//! - 고객이 매장에서 인쇄물을 찾아갈 때 사용하는 코드 생성
//! - 형식: `PU-YYMMDD-XXXXX` (예: `PU-250307-K3Z9Q`)
//!
//! 특징:
//! - 상태 없음 (stateless), 여러 스레드에서 동시에 호출 가능
//! - 유일성은 확률적으로만 보장 (36^5 ≈ 6천만 가지 / 일)
//! - 중복 처리는 호출자(PickupService)가 DB 유니크 제약 + 재시도로 담당
//!
//! 사용 방법:
//! ```rust
//! use printshop_server::shared::utils::pickup_code::{GenerateCode, PickupCodeGenerator};
//!
//! let code = PickupCodeGenerator::new().generate();
//! assert!(code.starts_with("PU-"));
//! ```
use chrono::{Datelike, Local, NaiveDate};
use rand::Rng;

/// 코드 접두사
/// Literal prefix
pub const PICKUP_CODE_PREFIX: &str = "PU";

/// 랜덤 접미사 길이
/// Random suffix length
pub const SUFFIX_LEN: usize = 5;

/// Base-36 알파벳 (0-9, A-Z)
const BASE36_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// 코드 생성 추상화 (테스트에서 결정적인 코드 주입용)
/// Code source abstraction
pub trait GenerateCode: Send + Sync {
    fn generate(&self) -> String;
}

/// 날짜 + 랜덤 접미사 기반 픽업 코드 생성기
#[derive(Debug, Clone, Copy, Default)]
pub struct PickupCodeGenerator;

impl PickupCodeGenerator {
    pub fn new() -> Self {
        Self
    }

    /// 주어진 날짜와 RNG로 코드 생성
    /// Generate a code for the given date using the given RNG
    ///
    /// # Arguments
    /// * `date` - 코드에 들어갈 날짜 (YYMMDD)
    /// * `rng` - 접미사용 난수 생성기 (각 자리를 36개 기호에서 균등 추출)
    pub fn generate_for_date<R: Rng + ?Sized>(date: NaiveDate, rng: &mut R) -> String {
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| char::from(BASE36_ALPHABET[rng.gen_range(0..BASE36_ALPHABET.len())]))
            .collect();

        format!(
            "{PICKUP_CODE_PREFIX}-{:02}{:02}{:02}-{suffix}",
            date.year().rem_euclid(100),
            date.month(),
            date.day(),
        )
    }
}

impl GenerateCode for PickupCodeGenerator {
    /// 현재 로컬 날짜 + thread_rng 사용
    fn generate(&self) -> String {
        Self::generate_for_date(Local::now().date_naive(), &mut rand::thread_rng())
    }
}

/// `PU-YYMMDD-XXXXX` 형식인지 검사
/// Check the `^PU-\d{6}-[0-9A-Z]{5}$` shape
pub fn is_valid_pickup_code(code: &str) -> bool {
    let Some(rest) = code
        .strip_prefix(PICKUP_CODE_PREFIX)
        .and_then(|rest| rest.strip_prefix('-'))
    else {
        return false;
    };

    let Some((date, suffix)) = rest.split_once('-') else {
        return false;
    };

    date.len() == 6
        && date.bytes().all(|b| b.is_ascii_digit())
        && suffix.len() == SUFFIX_LEN
        && suffix.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
}

/// 고객 입력 정규화 (공백 제거 + 대문자)
/// Normalize customer input before lookup
pub fn normalize_pickup_code(input: &str) -> String {
    input.trim().to_ascii_uppercase()
}
