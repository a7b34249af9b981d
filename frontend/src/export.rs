//! Statistics exports: a JSON download and a PDF snapshot of the stats panel.
//!
//! The PDF path relies on the `html2canvas` and `jspdf` globals loaded by
//! `index.html`.

use gloo::file::{Blob, ObjectUrl};
use log::{debug, info};
use shared::StatsSummary;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAnchorElement, HtmlCanvasElement};

/// Element captured by the PDF export.
pub const STATS_ELEMENT_ID: &str = "stats-for-pdf";
pub const JSON_FILE_NAME: &str = "stats.json";
pub const PDF_FILE_NAME: &str = "gametracker-stats.pdf";

/// Width of an A4 page in points.
pub const A4_WIDTH_PT: f64 = 595.28;
const CAPTURE_SCALE: f64 = 2.0;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize stats: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Element #{0} not found")]
    MissingElement(String),

    #[error("Browser error: {0}")]
    Js(String),
}

impl From<JsValue> for ExportError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = html2canvas)]
    fn html2canvas(element: &web_sys::Element, options: &JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_namespace = jspdf, js_name = jsPDF)]
    type JsPdf;

    #[wasm_bindgen(catch, constructor, js_namespace = jspdf, js_class = "jsPDF")]
    fn new(orientation: &str, unit: &str, format: &str) -> Result<JsPdf, JsValue>;

    #[wasm_bindgen(method, js_name = addImage)]
    fn add_image(this: &JsPdf, data: &str, format: &str, x: f64, y: f64, width: f64, height: f64);

    #[wasm_bindgen(method)]
    fn save(this: &JsPdf, file_name: &str);
}

/// Downloads the summary as `stats.json`.
pub fn export_json(stats: &StatsSummary) -> Result<(), ExportError> {
    let json = stats.to_json()?;
    let blob = Blob::new_with_options(json.as_str(), Some("application/json"));
    let url = ObjectUrl::from(blob);
    download(&url, JSON_FILE_NAME)?;
    info!("Exported stats to {}", JSON_FILE_NAME);
    Ok(())
}

/// Captures the stats panel and saves it as an A4 PDF.
pub async fn export_pdf() -> Result<(), ExportError> {
    let node = gloo::utils::document()
        .get_element_by_id(STATS_ELEMENT_ID)
        .ok_or_else(|| ExportError::MissingElement(STATS_ELEMENT_ID.to_string()))?;

    let options = js_sys::Object::new();
    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("scale"),
        &JsValue::from_f64(CAPTURE_SCALE),
    )?;

    debug!("Rendering #{} to canvas", STATS_ELEMENT_ID);
    let canvas: HtmlCanvasElement = JsFuture::from(html2canvas(&node, &options)?)
        .await?
        .dyn_into()
        .map_err(|_| ExportError::Js("html2canvas did not return a canvas".to_string()))?;
    let image = canvas.to_data_url_with_type("image/png")?;

    let doc = JsPdf::new("p", "pt", "a4")?;
    let height = scaled_height(canvas.width(), canvas.height(), A4_WIDTH_PT);
    doc.add_image(&image, "PNG", 0.0, 0.0, A4_WIDTH_PT, height);
    doc.save(PDF_FILE_NAME);
    info!("Exported stats to {}", PDF_FILE_NAME);
    Ok(())
}

/// Height of an image scaled to `page_width`, keeping its aspect ratio.
pub fn scaled_height(image_width: u32, image_height: u32, page_width: f64) -> f64 {
    if image_width == 0 {
        return 0.0;
    }
    f64::from(image_height) * page_width / f64::from(image_width)
}

fn download(href: &str, file_name: &str) -> Result<(), ExportError> {
    let anchor: HtmlAnchorElement = gloo::utils::document()
        .create_element("a")?
        .dyn_into()
        .map_err(|_| ExportError::Js("failed to create download link".to_string()))?;
    anchor.set_href(href);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}
