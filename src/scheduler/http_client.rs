// ==========================================
// 工位排班基础数据 - 排程服务 HTTP 客户端
// ==========================================
// 协议: POST JSON 到固定地址；非 2xx 视为失败；不重试
// ==========================================

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};

use crate::config::SchedulerConfig;
use crate::domain::ScheduleResult;
use crate::scheduler::client::{ScheduleRequest, SchedulerClient, SchedulerError, SchedulerResult};

pub struct HttpSchedulerClient {
    client: reqwest::Client,
    config: SchedulerConfig,
}

impl HttpSchedulerClient {
    pub fn new(config: SchedulerConfig) -> SchedulerResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SchedulerError::Http(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl SchedulerClient for HttpSchedulerClient {
    async fn submit(&self, request: &ScheduleRequest) -> SchedulerResult<ScheduleResult> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        tracing::info!(
            endpoint = %self.config.endpoint,
            personnel = request.personnel.len(),
            stations = request.stations.len(),
            "提交排程请求"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| SchedulerError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status, "排程服务返回失败状态");
            return Err(SchedulerError::Status { status, body });
        }

        let text = response
            .text()
            .await
            .map_err(|e| SchedulerError::Http(e.to_string()))?;

        let result: ScheduleResult =
            serde_json::from_str(&text).map_err(|e| SchedulerError::Decode(e.to_string()))?;

        tracing::info!(assignments = result.assignments.len(), "排程完成");
        Ok(result)
    }
}
