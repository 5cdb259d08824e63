//! 인쇄 주문 매장 수령 서버
//! Print-shop pickup server
//!
//! - 주문별 픽업 코드 발급 (`PU-YYMMDD-XXXXX`) 및 수령 처리
//! - 인도 루피 금액 표기 (`₹12,34,567.89`)

pub mod config;
pub mod domains;
pub mod routes;
pub mod shared;
