#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    /// A phone number to get in contact
    pub phone: Option<String>,

    /// The homepage of the restaurant
    pub website: Option<String>,

    /// An e-mail address to get in contact
    pub email: Option<String>,
}

impl Contact {
    /// The website without its `http://` or `https://` prefix.
    pub fn website_host_and_path(&self) -> Option<&str> {
        self.website.as_deref().map(|url| {
            url.strip_prefix("https://")
                .or_else(|| url.strip_prefix("http://"))
                .unwrap_or(url)
        })
    }
}
