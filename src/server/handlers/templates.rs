use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::errors::ImportError;
use crate::import::{template_for, ImportType};

use super::ApiError;

#[derive(Deserialize)]
pub struct TemplateQuery {
    #[serde(rename = "type")]
    pub job_type: String,
    pub format: Option<String>,
}

/// GET /api/v1/import/template?type=&format=: per-type CSV header template
/// with one sample row. `format=json` returns the same data structured.
pub async fn download_template(Query(query): Query<TemplateQuery>) -> Result<Response, ApiError> {
    let import_type = ImportType::parse(&query.job_type).ok_or_else(|| {
        ImportError::InvalidRequest(format!("Unknown import type: {}", query.job_type))
    })?;
    let template = template_for(import_type).ok_or_else(|| {
        ImportError::InvalidRequest(format!("No template for type: {}", query.job_type))
    })?;

    if query.format.as_deref() == Some("json") {
        let body = Json(json!({
            "type": import_type.as_str(),
            "headers": template.headers,
            "sampleRow": template.sample_row,
        }));
        return Ok(body.into_response());
    }

    let csv_content = format!(
        "{}\n{}\n",
        csv_line(template.headers),
        csv_line(template.sample_row)
    );
    let filename = format!("{}_import_template.csv", import_type.as_str().to_lowercase());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        csv_content,
    )
        .into_response())
}

/// Join cells, quoting any that carry a delimiter or quote.
fn csv_line(cells: &[&str]) -> String {
    cells
        .iter()
        .map(|cell| {
            if cell.contains(',') || cell.contains('"') {
                format!("\"{}\"", cell.replace('"', "\"\""))
            } else {
                (*cell).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_line_quotes_embedded_delimiters() {
        assert_eq!(csv_line(&["a", "b,c", "d"]), "a,\"b,c\",d");
        assert_eq!(csv_line(&["plain"]), "plain");
    }
}
