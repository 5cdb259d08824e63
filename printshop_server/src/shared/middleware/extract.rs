use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{request::Parts, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

/// 추출 실패 응답: 다른 API 에러와 같은 `{ "error": ... }` 형식
/// Extractor rejection in the shared `{ "error": ... }` shape
pub type ApiRejection = (StatusCode, Json<serde_json::Value>);

fn bad_request(message: String) -> ApiRejection {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

/// JSON 본문 추출기 (실패 시 400 + JSON 에러)
/// JSON body extractor; any rejection (syntax, type, content-type) becomes 400
///
/// 사용법:
/// ```rust,ignore
/// pub async fn create_pickup(
///     State(app_state): State<AppState>,
///     ValidJson(request): ValidJson<CreatePickupRequest>,
/// ) -> Result<...> { ... }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| bad_request(rejection.body_text()))?;

        Ok(Self(value))
    }
}

/// 쿼리 문자열 추출기 (실패 시 400 + JSON 에러)
/// Query string extractor with JSON rejections
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| bad_request(rejection.body_text()))?;

        Ok(Self(value))
    }
}
