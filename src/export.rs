// Page layout for the "Download PDF" button. The page shell rasterizes the
// résumé and writes the file; this only decides where the bitmap goes.

use wasm_bindgen::prelude::*;

// The résumé is rasterized at twice its CSS size.
pub const RASTER_SCALE: f64 = 2.0;
pub const FILE_NAME: &str = "Alejandro_De_La_Mora_Resume.pdf";

// Page size in millimetres.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PageFormat {
    pub width: f64,
    pub height: f64,
}

impl PageFormat {
    pub const A4_PORTRAIT: PageFormat = PageFormat {
        width: 210.0,
        height: 297.0,
    };
}

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

// Scale the image to fit inside the page, keep its aspect ratio, center it
// horizontally and pin it to the top edge
pub fn fit_to_page(image_width: f64, image_height: f64, page: PageFormat) -> Placement {
    if image_width <= 0.0 || image_height <= 0.0 {
        return Placement::default();
    }
    let ratio = (page.width / image_width).min(page.height / image_height);
    let width = image_width * ratio;
    let height = image_height * ratio;
    Placement {
        x: (page.width - width) / 2.0,
        y: 0.0,
        width,
        height,
    }
}

#[wasm_bindgen]
pub fn pdf_placement(image_width: f64, image_height: f64) -> Placement {
    fit_to_page(image_width, image_height, PageFormat::A4_PORTRAIT)
}

#[wasm_bindgen]
pub fn pdf_file_name() -> String {
    FILE_NAME.to_owned()
}

#[wasm_bindgen]
pub fn pdf_raster_scale() -> f64 {
    RASTER_SCALE
}
