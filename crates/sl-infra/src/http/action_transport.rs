use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use sl_core::ports::{ActionTransportPort, TransportError};
use sl_core::ActionRecord;
use tracing::debug;

use super::{network_error, status_error, Endpoints};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Posts action records to `items/{list}`.
///
/// The body is the URL-encoded `<code><separator><content>` string on its
/// own; the server reads it back as the first form key.
pub struct HttpActionTransport {
    client: Client,
    endpoints: Endpoints,
}

impl HttpActionTransport {
    pub fn new(client: Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }
}

#[async_trait]
impl ActionTransportPort for HttpActionTransport {
    #[tracing::instrument(
        name = "infra.http.send_action",
        skip(self, record),
        fields(item_id = %record.id, action = %record.action)
    )]
    async fn send(&self, record: &ActionRecord) -> Result<(), TransportError> {
        let response = self
            .client
            .post(self.endpoints.items_url())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(record.form_body())
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        debug!(status = status.as_u16(), "action persisted");
        Ok(())
    }
}
