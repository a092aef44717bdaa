//! HTTP client for one tab of one spreadsheet.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, info};

use onhands_common::config::Config;

use crate::codec::column_letter;
use crate::sheets::auth::ServiceAccount;
use crate::sheets::types::{
    ApiErrorBody, BatchUpdateValues, RangeValues, SpreadsheetMeta, ValueRange,
};
use crate::store::{CellBlock, SheetStore, StoreError};

const API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Interpret written text the way the web UI would, so `=...` becomes a formula.
const USER_ENTERED: &str = "USER_ENTERED";

/// Border colour of the quantity block, a very light grey.
const BORDER_GREY: f64 = 0.95294;

/// An authenticated handle on the configured tab.
pub struct GoogleSheet {
    http: Client,
    token: String,
    spreadsheet_id: String,
    tab: String,
    sheet_id: i64,
}

impl GoogleSheet {
    /// Signs in with the configured service account and resolves the tab.
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let account = ServiceAccount::from_file(&config.credentials)?;
        let http = Client::builder().build()?;
        let token = account.access_token(&http).await?;
        info!("Signed in as {}", account.client_email());

        let mut sheet = Self {
            http,
            token,
            spreadsheet_id: config.spreadsheet_id.clone(),
            tab: config.tab_name.clone(),
            sheet_id: 0,
        };
        sheet.sheet_id = sheet.resolve_sheet_id().await?;
        debug!("tab <{}> has sheet id {}", sheet.tab, sheet.sheet_id);
        Ok(sheet)
    }

    async fn resolve_sheet_id(&self) -> Result<i64, StoreError> {
        let url = format!(
            "{API_BASE}/{}?fields=sheets.properties(sheetId,title)",
            self.spreadsheet_id
        );
        let meta: SpreadsheetMeta = self.get_json(&url).await?;
        meta.sheets
            .into_iter()
            .find(|sheet| sheet.properties.title == self.tab)
            .map(|sheet| sheet.properties.sheet_id)
            .ok_or_else(|| StoreError::TabNotFound(self.tab.clone()))
    }

    /// Prefixes an A1 range with the quoted tab name.
    fn a1(&self, range: &str) -> String {
        let tab = self.tab.replace('\'', "''");
        if range.is_empty() {
            format!("'{tab}'")
        } else {
            format!("'{tab}'!{range}")
        }
    }

    fn values_url(&self, range: &str) -> String {
        format!(
            "{API_BASE}/{}/values/{}",
            self.spreadsheet_id,
            urlencoding::encode(&self.a1(range))
        )
    }

    async fn get_values(&self, range: &str) -> Result<Vec<Vec<String>>, StoreError> {
        let values: ValueRange = self.get_json(&self.values_url(range)).await?;
        Ok(values.values)
    }

    /// Sends structural / formatting requests through `spreadsheets.batchUpdate`.
    async fn batch_update(&self, requests: Vec<Value>) -> Result<(), StoreError> {
        let url = format!("{API_BASE}/{}:batchUpdate", self.spreadsheet_id);
        let _: Value = self.post_json(&url, &json!({ "requests": requests })).await?;
        Ok(())
    }

    fn row_range(&self, start_index: usize, end_index: usize) -> Value {
        json!({
            "sheetId": self.sheet_id,
            "dimension": "ROWS",
            "startIndex": start_index,
            "endIndex": end_index,
        })
    }

    /// Blank rows so the first becomes 1-based row `at`. Row 1 has nothing
    /// above it to inherit from.
    fn insert_request(&self, at: usize, count: usize) -> Value {
        let start = at - 1;
        json!({
            "insertDimension": {
                "range": self.row_range(start, start + count),
                "inheritFromBefore": start > 0,
            }
        })
    }

    /// Deletes 1-based rows `first_row..=last_row`.
    fn delete_request(&self, first_row: usize, last_row: usize) -> Value {
        json!({
            "deleteDimension": {
                "range": self.row_range(first_row - 1, last_row),
            }
        })
    }

    fn borders_request(&self, block: CellBlock) -> Value {
        json!({
            "repeatCell": {
                "range": {
                    "sheetId": self.sheet_id,
                    "startRowIndex": block.first_row - 1,
                    "endRowIndex": block.last_row,
                    "startColumnIndex": block.first_col,
                    "endColumnIndex": block.last_col + 1,
                },
                "cell": {
                    "userEnteredFormat": {
                        "borders": {
                            "bottom": border_style(),
                            "right": border_style(),
                        }
                    }
                },
                "fields": "userEnteredFormat.borders",
            }
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, StoreError> {
        debug!("GET {url}");
        let response = self.http.get(url).bearer_auth(&self.token).send().await?;
        handle_response(response).await
    }

    async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, StoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {url}");
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        handle_response(response).await
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|parsed| parsed.error.message)
            .unwrap_or(body);
        return Err(StoreError::Api { status, message });
    }
    Ok(response.json().await?)
}

/// A1 range covering `rows` written from `first_row`, column A onwards.
fn write_range(first_row: usize, rows: &[Vec<String>]) -> String {
    let width = rows.iter().map(Vec::len).max().unwrap_or(1).max(1);
    let last_row = first_row + rows.len().saturating_sub(1);
    format!("A{first_row}:{}{last_row}", column_letter(width - 1))
}

fn border_style() -> Value {
    json!({
        "style": "SOLID",
        "colorStyle": {
            "rgbColor": {
                "red": BORDER_GREY,
                "green": BORDER_GREY,
                "blue": BORDER_GREY,
                "alpha": 1,
            }
        }
    })
}

#[async_trait]
impl SheetStore for GoogleSheet {
    async fn row_count(&self) -> Result<usize, StoreError> {
        Ok(self.get_values("").await?.len())
    }

    async fn read_rows(
        &self,
        first_row: usize,
        last_col: usize,
    ) -> Result<Vec<Vec<String>>, StoreError> {
        let range = format!("A{first_row}:{}", column_letter(last_col));
        self.get_values(&range).await
    }

    async fn insert_rows(&self, at: usize, count: usize) -> Result<(), StoreError> {
        self.batch_update(vec![self.insert_request(at, count)]).await
    }

    async fn delete_rows(&self, first_row: usize, last_row: usize) -> Result<(), StoreError> {
        self.batch_update(vec![self.delete_request(first_row, last_row)]).await
    }

    async fn write_rows(&self, first_row: usize, rows: &[Vec<String>]) -> Result<(), StoreError> {
        let url = format!("{API_BASE}/{}/values:batchUpdate", self.spreadsheet_id);
        let body = BatchUpdateValues {
            value_input_option: USER_ENTERED,
            data: vec![RangeValues {
                range: self.a1(&write_range(first_row, rows)),
                values: rows,
            }],
        };
        let _: Value = self.post_json(&url, &body).await?;
        Ok(())
    }

    async fn apply_borders(&self, block: CellBlock) -> Result<(), StoreError> {
        self.batch_update(vec![self.borders_request(block)]).await
    }
}
