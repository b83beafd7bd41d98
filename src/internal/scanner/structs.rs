pub mod boundary_scanner;
pub mod scan_event;

// 重导出公共类型
pub use boundary_scanner::BoundaryScanner;
pub use scan_event::ScanEvent;
