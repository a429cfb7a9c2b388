use kinetic_core::provider::{mdn_file_url, webstatus_url};
use kinetic_core::{CompatSource, FeatureRecord, LoadError};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// `fetch`-backed data source bound to one abort signal.
pub struct WebFetcher {
    signal: Option<web::AbortSignal>,
}

impl WebFetcher {
    pub fn new(signal: Option<web::AbortSignal>) -> Self {
        Self { signal }
    }

    async fn get_json(&self, url: &str) -> Result<Value, LoadError> {
        let window = web::window().ok_or_else(|| LoadError::Network("no window".into()))?;
        let init = web::RequestInit::new();
        init.set_method("GET");
        init.set_cache(web::RequestCache::ForceCache);
        init.set_signal(self.signal.as_ref());

        let resp = JsFuture::from(window.fetch_with_str_and_init(url, &init))
            .await
            .map_err(|e| self.js_error(e))?;
        let resp: web::Response = resp
            .dyn_into()
            .map_err(|_| LoadError::Network("fetch did not yield a Response".into()))?;
        if !resp.ok() {
            return Err(LoadError::Http(resp.status()));
        }
        let body = resp.text().map_err(|e| self.js_error(e))?;
        let text = JsFuture::from(body).await.map_err(|e| self.js_error(e))?;
        let text = text
            .as_string()
            .ok_or_else(|| LoadError::Decode("response body is not text".into()))?;
        Ok(serde_json::from_str(&text)?)
    }

    fn js_error(&self, err: JsValue) -> LoadError {
        let aborted_signal = self.signal.as_ref().is_some_and(|s| s.aborted());
        let abort_exception = err
            .dyn_ref::<web::DomException>()
            .is_some_and(|ex| ex.name() == "AbortError");
        if aborted_signal || abort_exception {
            LoadError::Aborted
        } else {
            LoadError::Network(format!("{:?}", err))
        }
    }
}

impl CompatSource for WebFetcher {
    async fn webstatus(&self, feature_id: &str) -> Result<FeatureRecord, LoadError> {
        let value = self.get_json(&webstatus_url(feature_id)).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn bcd_file(&self, file_path: &str) -> Result<Value, LoadError> {
        self.get_json(&mdn_file_url(file_path)).await
    }
}
