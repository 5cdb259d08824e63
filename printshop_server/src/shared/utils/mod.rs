/// 공유 유틸리티 모듈
/// Shared Utilities Module
///
/// 역할:
/// - 통화 포맷터 (₹, 인도식 자릿수 구분)
/// - 픽업 코드 생성기 (PU-YYMMDD-XXXXX)
pub mod currency;
pub mod pickup_code;
