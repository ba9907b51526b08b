//! 요청 타임아웃 미들웨어
//!
//! 저장소 커넥션 대기나 지오코딩 호출이 길어져도 클라이언트가 설정된 상한 이상 기다리지 않도록
//! 내부 서비스 호출 전체를 타임아웃으로 감쌉니다. 상한을 넘긴 요청의 future는 드롭됩니다.

use std::rc::Rc;
use std::time::Duration;
use std::future::{ready, Ready};
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::rt::time::timeout;
use actix_web::{Error, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::core::errors::AppError;

pub const TIMEOUT_MESSAGE: &str = "response timeout exceeded";

pub struct RequestTimeout {
    ceiling: Duration,
}

impl RequestTimeout {
    pub fn new(ceiling: Duration) -> Self {
        Self { ceiling }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestTimeout
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RequestTimeoutService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTimeoutService {
            service: Rc::new(service),
            ceiling: self.ceiling,
        }))
    }
}

pub struct RequestTimeoutService<S> {
    service: Rc<S>,
    ceiling: Duration,
}

impl<S, B> Service<ServiceRequest> for RequestTimeoutService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let ceiling = self.ceiling;

        Box::pin(async move {
            let http_req = req.request().clone();

            match timeout(ceiling, service.call(req)).await {
                Ok(result) => result.map(|res| res.map_into_left_body()),
                Err(_) => {
                    log::warn!(
                        "⏱️ 요청 처리 시간 초과 ({:?}): {} {}",
                        ceiling,
                        http_req.method(),
                        http_req.path()
                    );
                    let response = AppError::Timeout(TIMEOUT_MESSAGE.to_string()).error_response();
                    Ok(ServiceResponse::new(http_req, response).map_into_right_body())
                }
            }
        })
    }
}
