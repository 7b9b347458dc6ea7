#![allow(dead_code)]

use std::sync::Arc;
use txroute::config::RouterConfig;
use txroute::router::Router;

pub fn default_router() -> Arc<Router> {
    Arc::new(Router::new(&RouterConfig::default()).expect("default tables validate"))
}

pub mod temp_files {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Write `content` to a temp file with the given extension; the file is
    /// removed when the handle drops.
    pub fn create_temp(content: &str, ext: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("txroute_test_")
            .suffix(&format!(".{ext}"))
            .tempfile()
            .expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file.flush().expect("flush temp file");
        file
    }

    pub fn create_temp_yaml(content: &str) -> NamedTempFile {
        create_temp(content, "yaml")
    }

    pub fn create_temp_json(content: &str) -> NamedTempFile {
        create_temp(content, "json")
    }
}
