//! 통화 포맷터 (인도 루피)
//! Currency formatter (Indian Rupee, en-IN conventions)
//!
//! 역할:
//! - 금액을 "₹12,34,567.89" 형태의 문자열로 변환
//! - NaN은 에러 대신 "₹0.00"으로 표시
//!
//! 규칙:
//! - 통화 기호 앞에 부호 (예: "-₹50.00")
//! - 인도식 자릿수 구분: 마지막 3자리, 그 다음부터 2자리씩
//! - 소수점 이하 정확히 2자리, 반올림은 0에서 멀어지는 방향 (half away from zero)
use rust_decimal::Decimal;

/// 통화 기호
/// Currency symbol
pub const CURRENCY_SYMBOL: &str = "₹";

/// NaN 입력 시 반환하는 고정 문자열
/// Fixed display for NaN input
pub const ZERO_DISPLAY: &str = "₹0.00";

const FRACTION_DIGITS: usize = 2;
const INFINITY_SIGN: &str = "∞";

/// f64 금액을 루피 문자열로 변환
/// Format an f64 amount as an INR string
///
/// 절대 패닉하지 않음. NaN → "₹0.00", ±∞ → "₹∞" / "-₹∞"
///
/// # Examples
/// ```
/// use printshop_server::shared::utils::currency::format_inr;
///
/// assert_eq!(format_inr(1234567.891), "₹12,34,567.89");
/// assert_eq!(format_inr(f64::NAN), "₹0.00");
/// ```
pub fn format_inr(amount: f64) -> String {
    if amount.is_nan() {
        return ZERO_DISPLAY.to_string();
    }

    let sign = if amount.is_sign_negative() { "-" } else { "" };

    if amount.is_infinite() {
        return format!("{sign}{CURRENCY_SYMBOL}{INFINITY_SIGN}");
    }

    // f64의 Display는 최단 왕복 표현을 지수 표기 없이 출력함
    render(sign, &amount.abs().to_string())
}

/// Decimal 금액을 루피 문자열로 변환 (주문 금액용)
/// Format a Decimal amount as an INR string (order totals)
pub fn format_inr_decimal(amount: Decimal) -> String {
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    render(sign, &amount.abs().to_string())
}

/// 부호가 없는 10진수 문자열을 반올림 + 자릿수 구분하여 조립
fn render(sign: &str, unsigned: &str) -> String {
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let (int_digits, frac_digits) = round_half_away(int_part, frac_part);

    format!(
        "{sign}{CURRENCY_SYMBOL}{}.{frac_digits}",
        group_indian(&int_digits)
    )
}

/// 소수점 이하 FRACTION_DIGITS 자리로 반올림
/// Round to FRACTION_DIGITS places on the decimal digit string
///
/// 입력은 절댓값이므로 "5 이상이면 올림"이 곧 half away from zero
fn round_half_away(int_part: &str, frac_part: &str) -> (String, String) {
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(FRACTION_DIGITS))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(FRACTION_DIGITS)
        .is_some_and(|&b| b >= b'5');

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - FRACTION_DIGITS;
    let to_string = |slice: &[u8]| slice.iter().map(|d| char::from(b'0' + d)).collect::<String>();

    (to_string(&digits[..split]), to_string(&digits[split..]))
}

/// 인도식 자릿수 구분 (12,34,567)
/// Indian digit grouping: last three digits, then pairs
fn group_indian(int_digits: &str) -> String {
    if int_digits.len() <= 3 {
        return int_digits.to_string();
    }

    let (head, tail) = int_digits.split_at(int_digits.len() - 3);

    // 앞부분 길이가 홀수면 첫 그룹은 1자리
    let first_len = if head.len() % 2 == 0 { 2 } else { 1 };
    let mut groups = vec![&head[..first_len]];
    let mut rest = &head[first_len..];
    while !rest.is_empty() {
        let (pair, remaining) = rest.split_at(2);
        groups.push(pair);
        rest = remaining;
    }
    groups.push(tail);

    groups.join(",")
}
