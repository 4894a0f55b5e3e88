//! Where the endpoint data comes from: the upstream field feed and the workbooks on disk.

pub mod field;
pub mod rankings;
pub mod schedule;
pub mod workbook;
