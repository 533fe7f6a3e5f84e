use std::sync::Arc;

use freshlens_core::application::FreshlensService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FreshlensService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FreshlensService) -> Self {
        Self { args, service }
    }

    /// Absolute URL under which a stored upload is served back
    pub fn image_url(&self, filename: &str) -> String {
        upload_url(&self.args, filename)
    }
}

fn upload_url(args: &Args, filename: &str) -> String {
    let mut url = args.server.public_url.clone();

    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty();
        segments.extend(args.server.root_path.split('/').filter(|s| !s.is_empty()));
        segments.push("uploads");
        segments.push(filename);
    }

    url.to_string()
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_upload_url_default_host() {
        let args = Args::parse_from(["freshlens"]);
        assert_eq!(
            upload_url(&args, "pizza.jpg"),
            "http://127.0.0.1:5002/uploads/pizza.jpg"
        );
    }

    #[test]
    fn test_upload_url_with_root_path() {
        let args = Args::parse_from([
            "freshlens",
            "--public-url",
            "https://food.example.com/",
            "--server-root-path",
            "/api",
        ]);
        assert_eq!(
            upload_url(&args, "pizza.jpg"),
            "https://food.example.com/api/uploads/pizza.jpg"
        );
    }

    #[test]
    fn test_upload_url_encodes_filename() {
        let args = Args::parse_from(["freshlens"]);
        assert_eq!(
            upload_url(&args, "my lunch.png"),
            "http://127.0.0.1:5002/uploads/my%20lunch.png"
        );
    }
}
