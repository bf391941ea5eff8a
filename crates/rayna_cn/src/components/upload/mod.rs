//! File upload widgets and the progress operation behind them

pub mod big_file_upload;
pub mod file_upload;
pub mod format;
pub mod multi_file_upload;
pub mod operation;

pub use big_file_upload::{big_file_upload, BigFileUpload};
pub use file_upload::{file_upload, FileUpload};
pub use format::{format_file_size, format_file_size_long, format_list_time, format_upload_time};
pub use multi_file_upload::{multi_file_upload, ItemStatus, MultiFileUpload, UploadItemView};
pub use operation::{
    size_limit_message, ProgressOperation, UploadRules, UploadStatus, IMAGE_TYPES, IMAGE_TYPE_MESSAGE,
    MAX_UPLOAD_SIZE, SIZE_LIMIT_MESSAGE,
};
