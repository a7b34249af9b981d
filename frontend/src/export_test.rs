use wasm_bindgen_test::*;

use crate::export::{export_pdf, ExportError, STATS_ELEMENT_ID};

wasm_bindgen_test_configure!(run_in_browser);

fn remove_stats_element() {
    if let Some(element) = gloo::utils::document().get_element_by_id(STATS_ELEMENT_ID) {
        element.remove();
    }
}

#[wasm_bindgen_test]
async fn test_pdf_export_requires_stats_panel() {
    remove_stats_element();

    match export_pdf().await {
        Err(ExportError::MissingElement(id)) => assert_eq!(id, STATS_ELEMENT_ID),
        other => panic!("expected missing element, got {:?}", other),
    }
}

#[wasm_bindgen_test]
async fn test_pdf_export_reports_missing_capture_library() {
    let document = gloo::utils::document();
    let panel = document.create_element("div").unwrap();
    panel.set_id(STATS_ELEMENT_ID);
    document.body().unwrap().append_child(&panel).unwrap();

    // the test page does not load html2canvas
    let result = export_pdf().await;
    remove_stats_element();
    assert!(matches!(result, Err(ExportError::Js(_))), "got {:?}", result);
}
