pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const HOST: &str = "Host";
    pub const ORIGIN: &str = "Origin";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const OPTIONS: &str = "OPTIONS";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Fixed values emitted on every allowed cross-origin response.
pub mod value {
    pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
    pub const ALLOW_HEADERS: &str = "X-Requested-With, Content-Type, Accept, Authorization";
    pub const MAX_AGE: &str = "3600";
}
