//! Rayna design-system components
//!
//! Each component follows a consistent pattern:
//! - Builder function (e.g., `button("Label")`)
//! - Variant / size / state enums with exhaustive class tables
//! - Implements `ElementBuilder` for rendering
//! - Interactive state lives in `State` handles shared with event handlers

pub mod avatar;
pub mod avatar_group;
pub mod badge;
pub mod breadcrumb;
pub mod button;
pub mod chip;
pub mod consultation_table;
pub mod date_picker;
pub mod dropdown;
pub mod header;
pub mod input;
pub mod month_year_picker;
pub mod sidebar;
pub mod spinner;
pub mod table;
pub mod table_cell;
pub mod table_header;
pub mod tabs;
pub mod toast;
pub mod toast_provider;
pub mod upload;

pub use avatar::{avatar, Avatar, AvatarSize, AvatarStatus, AvatarType};
pub use avatar_group::{avatar_group, AvatarGroup};
pub use badge::{badge, Badge, BadgeColor, BadgeSize, BadgeType};
pub use breadcrumb::{breadcrumb, Breadcrumb, BreadcrumbItem};
pub use button::{button, ButtonBuilder, ButtonSize, ButtonState, ButtonVariant, IconStyle};
pub use chip::{chip, Chip, ChipState, ChipType};
pub use consultation_table::{
    consultation_table, sample_consultations, sample_doctors, Consultation, ConsultationTable, Doctor,
};
pub use date_picker::{date_picker, DatePicker};
pub use dropdown::{dropdown, Dropdown, DropdownItem, DropdownSection, TriggerType};
pub use header::{header, Header, HeaderVariant};
pub use input::{input, Input, InputSize, InputState};
pub use month_year_picker::{month_year_picker, MonthYearPicker};
pub use sidebar::{sidebar, NavItem, Sidebar};
pub use spinner::{spinner, RingMetrics, Spinner, SpinnerSize, SpinnerVariant};
pub use table::{sort_rows, table, SortState, Table, TableColumn, TableRow};
pub use table_cell::{table_cell, CellData, ControlType, MediaType, TableCell};
pub use table_header::{table_header, SortDirection, TableHeader};
pub use tabs::{tabs, TabItem, TabStyle, Tabs};
pub use toast::{toast, Toast, ToastType};
pub use toast_provider::{use_toast, ToastHandle, ToastId, ToastOptions, ToastProvider};
pub use upload::{
    big_file_upload, file_upload, multi_file_upload, BigFileUpload, FileUpload, MultiFileUpload,
    ProgressOperation, UploadRules, UploadStatus,
};
