/// Borrowed view of the request attributes the origin policy reads.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub host: Option<&'a str>,
}
