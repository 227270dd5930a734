//! `GetPromptTemplate` boundary. Prompt storage itself is out of scope; the
//! core only depends on this trait to fetch a named template and substitute
//! variables into it.

use crate::Result;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait PromptTemplateStore: Send + Sync + 'static {
    /// Fetch a template by name and substitute `{{var}}` placeholders from
    /// `vars`. Returns an error if the template is unknown; substitution of
    /// missing variables is left to the store (most leave the placeholder
    /// untouched rather than failing).
    async fn render(&self, name: &str, vars: &HashMap<String, String>) -> Result<String>;
}
