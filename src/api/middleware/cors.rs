use actix_cors::Cors;

/// Permite orígenes locales de desarrollo y cualquier origen HTTPS
pub fn create_cors_middleware() -> Cors {
    Cors::default()
        .allowed_origin_fn(|origin, _req_head| {
            origin.as_bytes().starts_with(b"http://localhost") ||
            origin.as_bytes().starts_with(b"https://")
        })
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec!["Content-Type"])
        .max_age(3600)
}
