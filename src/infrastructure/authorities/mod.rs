pub mod http;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::AuthorityBox;

pub struct AuthorityManager {}

impl AuthorityManager {
    pub fn get(name: &str) -> Result<AuthorityBox> {
        if name == "http" {
            return Ok(Box::<http::HttpAuthority>::default());
        }

        bail!(format!("No authority implemented for {name}"))
    }
}
