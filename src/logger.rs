//! Logger module
//!
//! Console logging for the VHD select server:
//! - Access logging with ISO-8601 timestamps
//! - Error and warning logging
//! - Server lifecycle messages

use chrono::Local;
use hyper::Method;
use std::net::SocketAddr;

/// Current local time as an ISO-8601 string
pub fn iso_timestamp() -> String {
    Local::now().to_rfc3339()
}

/// Log an incoming request with timestamp, method and path
pub fn log_request(method: &Method, path: &str) {
    println!("[{}] {} {}", iso_timestamp(), method, path);
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_keyword_updated(keyword: &str) {
    println!("VHD keyword updated to: {keyword}");
}

pub fn log_server_start(addr: &SocketAddr, keyword: &str) {
    println!("======================================");
    println!("VHD select server started");
    println!("Server address: http://{addr}");
    println!("API endpoint:   http://{addr}/api/boot-image-select");
    println!("Status page:    http://{addr}/api/status");
    println!("Current VHD keyword: {keyword}");
    println!("======================================");
    println!("Press Ctrl+C to stop the server\n");
}

pub fn log_shutdown() {
    println!("\nShutting down server...");
    println!("Server stopped");
}
