//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现核心库的 `HttpClient`，
//! 守护进程接口和引导请求都通过它发出。

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};
use zif_panel::{HttpClient, HttpRequest, HttpResponse, PanelError, PanelResult};

fn network_error(e: JsValue) -> PanelError {
    PanelError::Network(format!("{:?}", e))
}

fn decode_error(e: JsValue) -> PanelError {
    PanelError::Decode(format!("{:?}", e))
}

/// 基于浏览器 fetch 的 HTTP 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> PanelResult<HttpResponse> {
        let headers = Headers::new().map_err(network_error)?;
        for (key, value) in &req.headers {
            headers.set(key, value).map_err(network_error)?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        let request = Request::new_with_str_and_init(&req.url, &opts).map_err(network_error)?;

        let window = web_sys::window()
            .ok_or_else(|| PanelError::Network("window is not available".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_error)?;

        let response: Response = resp_value.dyn_into().map_err(decode_error)?;

        let text = JsFuture::from(response.text().map_err(decode_error)?)
            .await
            .map_err(decode_error)?;

        let body = text
            .as_string()
            .ok_or_else(|| PanelError::Decode("response body is not a string".to_string()))?;

        Ok(HttpResponse {
            status: response.status(),
            body,
        })
    }
}
