pub mod analyze;
pub mod contrast;
pub mod report;
pub mod ui;
pub mod vision_types;

pub use analyze::{
    handle_analyze, AnalyzeForm, AnalyzeResponse, ContrastResultBody, __path_handle_analyze,
};
pub use contrast::{handle_contrast, ContrastResponse, WcagLevelResult, __path_handle_contrast};
pub use report::{handle_report, __path_handle_report};
pub use ui::handle_index;
pub use vision_types::{
    handle_vision_types, VisionTypeInfo, VisionTypesResponse, __path_handle_vision_types,
};
